//! Variable-store port.

use modegrid_domain::{Collection, CollectionId, VariableId};

use super::error::HostError;

/// Read-only access to the host's variable collections.
#[cfg_attr(test, mockall::automock)]
pub trait VariableStore: Send + Sync {
    /// Every collection defined in the current file, in host order
    fn local_collections(&self) -> Result<Vec<Collection>, HostError>;

    fn collection(&self, id: CollectionId) -> Result<Option<Collection>, HostError>;

    /// First collection whose name matches `name` case-insensitively
    fn collection_by_name(&self, name: &str) -> Result<Option<Collection>, HostError>;

    /// Collection that owns a bound variable
    fn variable_collection(&self, id: VariableId) -> Result<Option<CollectionId>, HostError>;
}
