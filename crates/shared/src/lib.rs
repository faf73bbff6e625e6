//! ModeGrid Shared - message types for the plugin UI bridge
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid, serde_json, and thiserror
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod dto;
pub mod messages;

pub use dto::{CollectionSummary, ModeSummary};
pub use messages::{ErrorCode, MessageError, PluginMessage, UiMessage};
