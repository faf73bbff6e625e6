//! API layer - the plugin UI entry point.

pub mod bridge;

pub use bridge::UiBridge;
