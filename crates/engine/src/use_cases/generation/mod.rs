//! Generation use cases.
//!
//! Everything that clones the selected node: the mode grid (by collection id
//! or by conventional collection name) and the brand × size grid.
//!
//! All of them validate before touching the scene. If the host fails part
//! way through, the nodes created so far are removed again.

mod generate_grid;
mod legacy_grid;
mod resolve_axes;

use std::sync::Arc;

use thiserror::Error;

use modegrid_domain::{NodeId, NodeKind, PlanError};

use crate::infrastructure::ports::{HostError, SceneNode, ScenePort};

pub use generate_grid::{GenerateModeGrid, GeneratedGrid};
pub use legacy_grid::CreateVariations;
pub use resolve_axes::ResolveAxes;

/// Error type for generation use cases
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Please select a frame or component to generate variations.")]
    NothingSelected,

    #[error("Cannot generate variants from a {kind} node. Select a frame, component, section or instance.")]
    UnsupportedArtifactType { kind: NodeKind },

    #[error("No collection named '{name}' was found. Create a '{name}' collection with one mode per variant and try again.")]
    CollectionNotFound { name: String },

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

/// Container for generation use cases.
pub struct GenerationUseCases {
    pub mode_grid: Arc<GenerateModeGrid>,
    pub variations: Arc<CreateVariations>,
}

impl GenerationUseCases {
    pub fn new(mode_grid: Arc<GenerateModeGrid>, variations: Arc<CreateVariations>) -> Self {
        Self {
            mode_grid,
            variations,
        }
    }
}

/// First selected node, fetched from the host.
fn selected_base(scene: &dyn ScenePort) -> Result<SceneNode, GenerateError> {
    let base_id = scene
        .selection()
        .first()
        .copied()
        .ok_or(GenerateError::NothingSelected)?;
    scene
        .node(base_id)?
        .ok_or(GenerateError::Host(HostError::NodeNotFound(base_id)))
}

/// Remove top-level nodes created by a failed run, newest first.
///
/// Removal failures are logged and skipped so one bad node does not keep the
/// rest in the scene.
fn rollback(scene: &dyn ScenePort, created: &[NodeId]) {
    tracing::warn!(nodes = created.len(), "Rolling back partially generated nodes");
    for id in created.iter().rev() {
        match scene.remove_node(*id) {
            Ok(()) => {}
            // Already gone, e.g. removed with a wrapper removed earlier
            Err(e) if e.is_not_found() => {
                tracing::debug!(node_id = %id, "Node already removed during rollback");
            }
            Err(e) => {
                tracing::warn!(node_id = %id, error = %e, "Failed to remove node during rollback");
            }
        }
    }
}
