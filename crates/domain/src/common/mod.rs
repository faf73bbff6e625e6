//! Common utilities shared across the ModeGrid crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **No host types** - utilities work over closures and traits, not scene nodes

pub mod tree;

pub use tree::{descendants, walk_depth_first, DepthFirst, TreeNode};
