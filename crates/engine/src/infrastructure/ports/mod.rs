//! Port traits for host boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The scene graph (selection, cloning, wrappers, explicit modes, toasts)
//! - The variable store (collections and variable ownership)

mod error;
mod scene;
pub mod types;
mod variables;

pub use error::HostError;
pub use scene::ScenePort;
pub use types::{ExplicitMode, SceneNode};
pub use variables::VariableStore;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use scene::MockScenePort;

#[cfg(test)]
pub use variables::MockVariableStore;
