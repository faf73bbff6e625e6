//! Data transfer objects for the UI bridge.
//!
//! Plain serde structs with raw `Uuid` ids; the engine converts from domain
//! collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A mode as listed in the UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSummary {
    pub id: Uuid,
    pub name: String,
}

/// A collection as listed in the UI's toggle list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: Uuid,
    pub name: String,
    pub modes: Vec<ModeSummary>,
}

impl CollectionSummary {
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }
}
