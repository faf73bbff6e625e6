//! Validated name newtypes for variable collections and modes
//!
//! Names come from the host's variable store, so the only rule enforced here
//! is the one the grid relies on: a label part is never blank. Names are
//! trimmed of leading/trailing whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// CollectionName
// ============================================================================

/// A validated collection name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CollectionName(String);

impl CollectionName {
    /// Create a new validated collection name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Collection name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used when collections are looked up by
    /// their conventional name ("Theme", "Dynamic Type").
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CollectionName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CollectionName> for String {
    fn from(name: CollectionName) -> String {
        name.0
    }
}

// ============================================================================
// ModeName
// ============================================================================

/// A validated mode name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModeName(String);

impl ModeName {
    /// Create a new validated mode name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Mode name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModeName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ModeName> for String {
    fn from(name: ModeName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_name_is_trimmed() {
        let name = CollectionName::new("  Theme ").unwrap();
        assert_eq!(name.as_str(), "Theme");
    }

    #[test]
    fn collection_name_rejects_blank() {
        assert!(CollectionName::new("   ").is_err());
    }

    #[test]
    fn long_host_names_are_kept() {
        let long = "x".repeat(500);
        assert_eq!(CollectionName::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn multibyte_mode_name_is_accepted() {
        // 70 characters, 210 bytes
        let name = "界".repeat(70);
        assert_eq!(ModeName::new(name.clone()).unwrap().as_str(), name);

        let json = format!("\"{}\"", name);
        let parsed: ModeName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_str().chars().count(), 70);
    }

    #[test]
    fn collection_name_matches_ignoring_case() {
        let name = CollectionName::new("Dynamic Type").unwrap();
        assert!(name.matches("dynamic type"));
        assert!(name.matches(" Dynamic Type "));
        assert!(!name.matches("Dynamic"));
    }

    #[test]
    fn mode_name_rejects_empty() {
        let err = ModeName::new("").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Mode name cannot be empty");
    }

    #[test]
    fn mode_name_deserialize_validates() {
        let ok: ModeName = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(ok.as_str(), "Dark");
        assert!(serde_json::from_str::<ModeName>("\"  \"").is_err());
    }
}
