//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the plugin.
//! Use cases orchestrate the ports to fulfill one UI request.

pub mod detection;
pub mod generation;

pub use detection::{DetectCollections, DetectedCollections};
pub use generation::{
    CreateVariations, GenerateError, GenerateModeGrid, GeneratedGrid, GenerationUseCases,
    ResolveAxes,
};
