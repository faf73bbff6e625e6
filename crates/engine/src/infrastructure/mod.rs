//! Infrastructure implementations.
//!
//! Contains the port traits and the in-memory host that implements them.

pub mod memory;
pub mod ports;
