//! Variable collections and their modes, as read from the host's variable store.

use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, ModeId};
use crate::value_objects::{CollectionName, ModeName};

/// One concrete value-set within a collection (e.g. "Dark" within "Theme")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mode {
    id: ModeId,
    name: ModeName,
}

impl Mode {
    pub fn new(id: ModeId, name: ModeName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> ModeId {
        self.id
    }

    pub fn name(&self) -> &ModeName {
        &self.name
    }
}

/// A named, ordered set of modes.
///
/// The host owns collections; this type is a read-only snapshot. Mode order is
/// the host's order and is what the grid builder enumerates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    id: CollectionId,
    name: CollectionName,
    modes: Vec<Mode>,
}

impl Collection {
    pub fn new(id: CollectionId, name: CollectionName, modes: Vec<Mode>) -> Self {
        Self { id, name, modes }
    }

    // Read-only accessors

    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn name(&self) -> &CollectionName {
        &self.name
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    pub fn mode(&self, index: usize) -> Option<&Mode> {
        self.modes.get(index)
    }

    pub fn find_mode(&self, id: ModeId) -> Option<&Mode> {
        self.modes.iter().find(|m| m.id == id)
    }

    // Builder-style methods

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.modes.push(mode);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(name: &str) -> Mode {
        Mode::new(ModeId::new(), ModeName::new(name).unwrap())
    }

    #[test]
    fn keeps_host_mode_order() {
        let collection = Collection::new(
            CollectionId::new(),
            CollectionName::new("Theme").unwrap(),
            vec![],
        )
        .with_mode(mode("Light"))
        .with_mode(mode("Dark"));

        let names: Vec<&str> = collection.modes().iter().map(|m| m.name().as_str()).collect();
        assert_eq!(names, vec!["Light", "Dark"]);
        assert_eq!(collection.mode_count(), 2);
        assert!(collection.mode(2).is_none());
    }

    #[test]
    fn find_mode_by_id() {
        let dark = mode("Dark");
        let dark_id = dark.id();
        let collection = Collection::new(
            CollectionId::new(),
            CollectionName::new("Theme").unwrap(),
            vec![mode("Light"), dark],
        );

        assert_eq!(collection.find_mode(dark_id).unwrap().name().as_str(), "Dark");
        assert!(collection.find_mode(ModeId::new()).is_none());
    }
}
