//! Collection detection.
//!
//! Recomputed on every selection change: which variable collections does the
//! selected node tree use? The UI lists those first so the user can toggle
//! them into axes.

use std::collections::HashSet;
use std::sync::Arc;

use modegrid_domain::common::walk_depth_first;
use modegrid_domain::{Collection, CollectionId, NodeId};

use crate::infrastructure::ports::{HostError, SceneNode, ScenePort, VariableStore};

/// Collections referenced by the selection, plus every local collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectedCollections {
    /// Distinct collections in first-seen order
    pub detected: Vec<Collection>,
    pub available: Vec<Collection>,
}

pub struct DetectCollections {
    scene: Arc<dyn ScenePort>,
    variables: Arc<dyn VariableStore>,
}

impl DetectCollections {
    pub fn new(scene: Arc<dyn ScenePort>, variables: Arc<dyn VariableStore>) -> Self {
        Self { scene, variables }
    }

    /// Pure query; nothing is cached between calls.
    ///
    /// Only listing the local collections can fail. Problems with individual
    /// nodes or variables are logged and skipped.
    pub fn execute(&self) -> Result<DetectedCollections, HostError> {
        let available = self.variables.local_collections()?;

        let mut seen = HashSet::new();
        let mut detected_ids = Vec::new();
        // Each node is read once, even if the host's child lists loop
        let mut visited = HashSet::new();
        for root_id in self.scene.selection() {
            if !visited.insert(root_id) {
                continue;
            }
            let Some(root) = self.fetch(root_id) else {
                continue;
            };
            let nodes = walk_depth_first(root, |node: &SceneNode| {
                node.children
                    .iter()
                    .filter(|child| visited.insert(**child))
                    .filter_map(|child| self.fetch(*child))
                    .collect::<Vec<_>>()
            });
            for node in nodes {
                for collection_id in self.bound_collections(&node) {
                    if seen.insert(collection_id) {
                        detected_ids.push(collection_id);
                    }
                }
            }
        }

        let detected = detected_ids
            .into_iter()
            .filter_map(|id| self.collection(id, &available))
            .collect::<Vec<_>>();

        tracing::debug!(
            detected = detected.len(),
            available = available.len(),
            "Detected collections for selection"
        );
        Ok(DetectedCollections {
            detected,
            available,
        })
    }

    fn fetch(&self, id: NodeId) -> Option<SceneNode> {
        match self.scene.node(id) {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!(node_id = %id, error = %e, "Failed to read node during detection");
                None
            }
        }
    }

    fn bound_collections(&self, node: &SceneNode) -> Vec<CollectionId> {
        node.bound_variables
            .iter()
            .filter_map(|variable_id| match self.variables.variable_collection(*variable_id) {
                Ok(Some(collection_id)) => Some(collection_id),
                Ok(None) => {
                    tracing::debug!(variable_id = %variable_id, "Bound variable has no local collection");
                    None
                }
                Err(e) => {
                    tracing::warn!(variable_id = %variable_id, error = %e, "Failed to resolve bound variable");
                    None
                }
            })
            .collect()
    }

    fn collection(&self, id: CollectionId, available: &[Collection]) -> Option<Collection> {
        if let Some(found) = available.iter().find(|c| c.id() == id) {
            return Some(found.clone());
        }
        match self.variables.collection(id) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(collection_id = %id, error = %e, "Failed to load detected collection");
                None
            }
        }
    }
}
