//! In-memory host.
//!
//! Implements both ports over a [`SceneDocument`] so the engine can run
//! outside the design tool: the CLI loads a document from JSON, and the
//! integration tests use it as a fake host.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use modegrid_domain::common::walk_depth_first;
use modegrid_domain::{
    Collection, CollectionId, ModeId, NodeId, NodeKind, Point, Rect, VariableId,
};

use super::ports::{HostError, SceneNode, ScenePort, VariableStore};

/// Failure loading or saving a [`SceneDocument`]
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scene document {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Node {node} is listed as a child more than once")]
    MultipleParents { node: NodeId },

    #[error("Node {node} is its own ancestor")]
    Cycle { node: NodeId },
}

/// Which collection a variable belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    pub id: VariableId,
    pub collection_id: CollectionId,
}

/// Serializable state of a page plus its variable collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub variables: Vec<VariableBinding>,
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
    #[serde(default)]
    pub selection: Vec<NodeId>,
    /// Toasts shown so far; output only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<String>,
}

impl SceneDocument {
    /// Load a document and check that its nodes form a forest.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let raw = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let document: Self = serde_json::from_str(&raw).map_err(|source| DocumentError::Json {
            path: path.display().to_string(),
            source,
        })?;
        document.validate_tree()?;
        Ok(document)
    }

    /// Every node has at most one parent and no node is its own ancestor.
    pub fn validate_tree(&self) -> Result<(), DocumentError> {
        let mut parented = HashSet::new();
        for child in self.nodes.iter().flat_map(|n| &n.children) {
            if !parented.insert(*child) {
                return Err(DocumentError::MultipleParents { node: *child });
            }
        }

        // With single parents, anything unreachable from a root sits on a cycle
        let mut reached = HashSet::new();
        for root in self.roots() {
            reached.extend(self.subtree(root));
        }
        match self.nodes.iter().find(|n| !reached.contains(&n.id)) {
            Some(orphan) => Err(DocumentError::Cycle { node: orphan.id }),
            None => Ok(()),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| DocumentError::Json {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, json).map_err(|source| DocumentError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, HostError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(HostError::NodeNotFound(id))
    }

    /// Top-level nodes: those no other node lists as a child
    pub fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(|n| n.id)
            .filter(|id| !self.nodes.iter().any(|p| p.children.contains(id)))
            .collect()
    }

    fn detach(&mut self, id: NodeId) {
        for node in &mut self.nodes {
            node.children.retain(|c| *c != id);
        }
    }

    /// `id` followed by all its descendants, pre-order. Each node is listed
    /// once even if the child lists loop back on themselves.
    fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut visited = HashSet::from([id]);
        walk_depth_first(id, |current: &NodeId| {
            self.node(*current)
                .map(|n| {
                    n.children
                        .iter()
                        .copied()
                        .filter(|c| visited.insert(*c))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
        .collect()
    }
}

/// Fake host backed by a [`SceneDocument`] behind a mutex.
pub struct InMemoryHost {
    state: Mutex<SceneDocument>,
}

impl InMemoryHost {
    pub fn new(document: SceneDocument) -> Self {
        Self {
            state: Mutex::new(document),
        }
    }

    /// Copy of the current document
    pub fn snapshot(&self) -> Result<SceneDocument, HostError> {
        Ok(self.lock("snapshot")?.clone())
    }

    fn lock(&self, operation: &'static str) -> Result<MutexGuard<'_, SceneDocument>, HostError> {
        self.state
            .lock()
            .map_err(|_| HostError::operation(operation, "scene state lock poisoned"))
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new(SceneDocument::default())
    }
}

impl ScenePort for InMemoryHost {
    fn selection(&self) -> Vec<NodeId> {
        match self.lock("selection") {
            Ok(state) => state.selection.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "Reporting an empty selection after a host fault");
                Vec::new()
            }
        }
    }

    fn node(&self, id: NodeId) -> Result<Option<SceneNode>, HostError> {
        Ok(self.lock("node")?.node(id).cloned())
    }

    fn clone_node(&self, id: NodeId) -> Result<NodeId, HostError> {
        let mut state = self.lock("clone_node")?;
        if state.node(id).is_none() {
            return Err(HostError::NodeNotFound(id));
        }

        let originals = state.subtree(id);
        let fresh: Vec<(NodeId, NodeId)> =
            originals.iter().map(|old| (*old, NodeId::new())).collect();
        let remap = |old: NodeId| {
            fresh
                .iter()
                .find(|(o, _)| *o == old)
                .map(|(_, n)| *n)
                .unwrap_or(old)
        };

        let copies: Vec<SceneNode> = originals
            .iter()
            .filter_map(|old| state.node(*old))
            .map(|original| {
                let mut copy = original.clone();
                copy.id = remap(original.id);
                copy.children = original.children.iter().map(|c| remap(*c)).collect();
                copy
            })
            .collect();

        let clone_id = remap(id);
        // A nested original gets its copy as a sibling, as the host does
        if let Some(parent) = state.nodes.iter_mut().find(|n| n.children.contains(&id)) {
            parent.children.push(clone_id);
        }
        state.nodes.extend(copies);
        Ok(clone_id)
    }

    fn create_wrapper(&self, name: &str, frame: Rect) -> Result<NodeId, HostError> {
        let mut state = self.lock("create_wrapper")?;
        let wrapper = SceneNode::new(name, NodeKind::Frame, frame);
        let id = wrapper.id;
        state.nodes.push(wrapper);
        Ok(id)
    }

    fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), HostError> {
        let mut state = self.lock("append_child")?;
        if state.node(child).is_none() {
            return Err(HostError::NodeNotFound(child));
        }
        if state.subtree(child).contains(&parent) {
            return Err(HostError::operation(
                "append_child",
                "cannot move a node inside itself",
            ));
        }
        state.node_mut(parent)?;
        state.detach(child);
        state.node_mut(parent)?.children.push(child);
        Ok(())
    }

    fn move_node(&self, id: NodeId, position: Point) -> Result<(), HostError> {
        let mut state = self.lock("move_node")?;
        let node = state.node_mut(id)?;
        node.frame = node.frame.moved_to(position);
        Ok(())
    }

    fn set_explicit_mode(
        &self,
        id: NodeId,
        collection: CollectionId,
        mode: ModeId,
    ) -> Result<(), HostError> {
        let mut state = self.lock("set_explicit_mode")?;
        let known_mode = state
            .collections
            .iter()
            .find(|c| c.id() == collection)
            .and_then(|c| c.find_mode(mode))
            .is_some();
        if !known_mode {
            return Err(HostError::operation(
                "set_explicit_mode",
                format!("mode {} is not in collection {}", mode, collection),
            ));
        }
        state.node_mut(id)?.set_explicit_mode(collection, mode);
        Ok(())
    }

    fn remove_node(&self, id: NodeId) -> Result<(), HostError> {
        let mut state = self.lock("remove_node")?;
        if state.node(id).is_none() {
            return Err(HostError::NodeNotFound(id));
        }
        let doomed = state.subtree(id);
        state.detach(id);
        state.nodes.retain(|n| !doomed.contains(&n.id));
        state.selection.retain(|s| !doomed.contains(s));
        Ok(())
    }

    fn set_selection(&self, ids: &[NodeId]) {
        match self.lock("set_selection") {
            Ok(mut state) => state.selection = ids.to_vec(),
            Err(e) => tracing::warn!(error = %e, nodes = ids.len(), "Selection was not updated"),
        }
    }

    fn notify(&self, message: &str) {
        tracing::info!(notification = message, "Host notification");
        match self.lock("notify") {
            Ok(mut state) => state.notifications.push(message.to_string()),
            Err(e) => tracing::warn!(error = %e, notification = message, "Notification was not recorded"),
        }
    }
}

impl VariableStore for InMemoryHost {
    fn local_collections(&self) -> Result<Vec<Collection>, HostError> {
        Ok(self.lock("local_collections")?.collections.clone())
    }

    fn collection(&self, id: CollectionId) -> Result<Option<Collection>, HostError> {
        Ok(self
            .lock("collection")?
            .collections
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }

    fn collection_by_name(&self, name: &str) -> Result<Option<Collection>, HostError> {
        Ok(self
            .lock("collection_by_name")?
            .collections
            .iter()
            .find(|c| c.name().matches(name))
            .cloned())
    }

    fn variable_collection(&self, id: VariableId) -> Result<Option<CollectionId>, HostError> {
        Ok(self
            .lock("variable_collection")?
            .variables
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.collection_id))
    }
}
