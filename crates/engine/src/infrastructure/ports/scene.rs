//! Scene-graph port.

use modegrid_domain::{CollectionId, ModeId, NodeId, Point, Rect};

use super::error::HostError;
use super::types::SceneNode;

/// Access to the host's current page.
///
/// Every call runs to completion within one message-handling turn; nothing
/// here suspends.
#[cfg_attr(test, mockall::automock)]
pub trait ScenePort: Send + Sync {
    /// Currently selected nodes, in selection order
    fn selection(&self) -> Vec<NodeId>;

    fn node(&self, id: NodeId) -> Result<Option<SceneNode>, HostError>;

    /// Duplicate `id` and its subtree next to the original; returns the copy's id
    fn clone_node(&self, id: NodeId) -> Result<NodeId, HostError>;

    /// Create an empty top-level frame that will hold one variant
    fn create_wrapper(&self, name: &str, frame: Rect) -> Result<NodeId, HostError>;

    /// Reparent `child` under `parent`
    fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), HostError>;

    /// Move a node; `position` is relative to its parent
    fn move_node(&self, id: NodeId, position: Point) -> Result<(), HostError>;

    /// Pin the mode used to resolve `collection`'s variables inside `id`
    fn set_explicit_mode(
        &self,
        id: NodeId,
        collection: CollectionId,
        mode: ModeId,
    ) -> Result<(), HostError>;

    /// Delete a node and its subtree
    fn remove_node(&self, id: NodeId) -> Result<(), HostError>;

    fn set_selection(&self, ids: &[NodeId]);

    /// Show a toast to the user
    fn notify(&self, message: &str);
}
