//! Data shapes exchanged with the host through the ports.

use serde::{Deserialize, Serialize};

use modegrid_domain::{CollectionId, ModeId, NodeId, NodeKind, Rect, VariableId};

/// An explicit (collection, mode) assignment on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplicitMode {
    pub collection_id: CollectionId,
    pub mode_id: ModeId,
}

/// Snapshot of one scene-graph node.
///
/// `frame` is relative to the parent for nested nodes and to the page for
/// top-level nodes, the same convention the host uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub frame: Rect,
    #[serde(default)]
    pub children: Vec<NodeId>,
    /// Variables bound to any of this node's properties
    #[serde(default)]
    pub bound_variables: Vec<VariableId>,
    #[serde(default)]
    pub explicit_modes: Vec<ExplicitMode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, kind: NodeKind, frame: Rect) -> Self {
        Self {
            id: NodeId::new(),
            name: name.into(),
            kind,
            frame,
            children: Vec::new(),
            bound_variables: Vec::new(),
            explicit_modes: Vec::new(),
        }
    }

    /// Mode pinned for `collection_id`, if any
    pub fn explicit_mode(&self, collection_id: CollectionId) -> Option<ModeId> {
        self.explicit_modes
            .iter()
            .find(|m| m.collection_id == collection_id)
            .map(|m| m.mode_id)
    }

    /// Pin `mode_id` for `collection_id`, replacing an earlier pin
    pub fn set_explicit_mode(&mut self, collection_id: CollectionId, mode_id: ModeId) {
        match self
            .explicit_modes
            .iter_mut()
            .find(|m| m.collection_id == collection_id)
        {
            Some(existing) => existing.mode_id = mode_id,
            None => self.explicit_modes.push(ExplicitMode {
                collection_id,
                mode_id,
            }),
        }
    }
}
