//! ModeGrid Engine library.
//!
//! Generates a grid of variants of the selected design node, one per
//! combination of variable modes, through ports onto the host design tool.
//!
//! ## Structure
//!
//! - `use_cases/` - Detection and generation orchestration
//! - `infrastructure/` - Host ports plus the in-memory adapter
//! - `api/` - UI message entry point
//! - `app` - Application composition
//! - `config` - Environment-driven settings

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
