//! Axes of variation and their resolution from collection references.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::entities::{Collection, Mode};
use crate::error::PlanError;
use crate::ids::CollectionId;
use crate::value_objects::CollectionName;

/// Reference to a collection the user enabled, before it is looked up
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "camelCase")]
pub enum CollectionRef {
    /// Reference by host id (the usual case: ids come from the detection list)
    Id(CollectionId),
    /// Reference by conventional name, matched case-insensitively
    Name(String),
}

impl From<CollectionId> for CollectionRef {
    fn from(id: CollectionId) -> Self {
        Self::Id(id)
    }
}

/// A collection selected for variation.
///
/// Axis order is significant: it orders label parts and mode selections, and
/// the last axis sets the number of grid columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    collection: Collection,
}

impl Axis {
    pub fn new(collection: Collection) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn collection_id(&self) -> CollectionId {
        self.collection.id()
    }

    pub fn name(&self) -> &CollectionName {
        self.collection.name()
    }

    pub fn modes(&self) -> &[Mode] {
        self.collection.modes()
    }

    pub fn mode_count(&self) -> usize {
        self.collection.mode_count()
    }

    pub fn mode(&self, index: usize) -> Option<&Mode> {
        self.collection.mode(index)
    }
}

impl From<Collection> for Axis {
    fn from(collection: Collection) -> Self {
        Self::new(collection)
    }
}

/// Resolve collection references into axes.
///
/// Fails with [`PlanError::NoAxesSelected`] when `refs` is empty, without
/// calling `lookup`. A reference the lookup cannot satisfy is dropped and
/// resolution carries on; callers that need every reference to exist must
/// check before calling. A collection referenced twice becomes one axis at
/// its first position.
pub fn resolve_axes<F>(refs: &[CollectionRef], lookup: F) -> Result<Vec<Axis>, PlanError>
where
    F: FnMut(&CollectionRef) -> Option<Collection>,
{
    if refs.is_empty() {
        return Err(PlanError::NoAxesSelected);
    }

    let mut seen = HashSet::new();
    let axes = refs
        .iter()
        .filter_map(lookup)
        .filter(|c| seen.insert(c.id()))
        .map(Axis::new)
        .collect();

    Ok(axes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ModeId;
    use crate::value_objects::ModeName;

    fn collection(name: &str, modes: &[&str]) -> Collection {
        Collection::new(
            CollectionId::new(),
            CollectionName::new(name).unwrap(),
            modes
                .iter()
                .map(|m| Mode::new(ModeId::new(), ModeName::new(*m).unwrap()))
                .collect(),
        )
    }

    #[test]
    fn empty_refs_fail_without_lookup() {
        let mut lookups = 0;
        let result = resolve_axes(&[], |_| {
            lookups += 1;
            None
        });

        assert_eq!(result, Err(PlanError::NoAxesSelected));
        assert_eq!(lookups, 0);
    }

    #[test]
    fn preserves_input_order() {
        let theme = collection("Theme", &["Light", "Dark"]);
        let size = collection("Size", &["S", "M", "L"]);
        let refs = vec![CollectionRef::Id(size.id()), CollectionRef::Id(theme.id())];
        let store = [theme.clone(), size.clone()];

        let axes = resolve_axes(&refs, |r| match r {
            CollectionRef::Id(id) => store.iter().find(|c| c.id() == *id).cloned(),
            CollectionRef::Name(_) => None,
        })
        .unwrap();

        let names: Vec<&str> = axes.iter().map(|a| a.name().as_str()).collect();
        assert_eq!(names, vec!["Size", "Theme"]);
    }

    #[test]
    fn drops_unresolved_refs() {
        let theme = collection("Theme", &["Light", "Dark"]);
        let refs = vec![
            CollectionRef::Id(CollectionId::new()),
            CollectionRef::Id(theme.id()),
            CollectionRef::Name("Missing".into()),
        ];

        let axes = resolve_axes(&refs, |r| match r {
            CollectionRef::Id(id) if *id == theme.id() => Some(theme.clone()),
            _ => None,
        })
        .unwrap();

        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].collection_id(), theme.id());
    }

    #[test]
    fn all_unresolved_yields_empty_list() {
        let refs = vec![CollectionRef::Name("Theme".into())];
        let axes = resolve_axes(&refs, |_| None).unwrap();
        assert!(axes.is_empty());
    }

    #[test]
    fn duplicate_refs_collapse_to_first_position() {
        let theme = collection("Theme", &["Light", "Dark"]);
        let size = collection("Size", &["S"]);
        let refs = vec![
            CollectionRef::Id(theme.id()),
            CollectionRef::Id(size.id()),
            CollectionRef::Name("theme".into()),
        ];

        let axes = resolve_axes(&refs, |r| match r {
            CollectionRef::Id(id) if *id == theme.id() => Some(theme.clone()),
            CollectionRef::Id(id) if *id == size.id() => Some(size.clone()),
            CollectionRef::Name(n) if theme.name().matches(n) => Some(theme.clone()),
            _ => None,
        })
        .unwrap();

        let names: Vec<&str> = axes.iter().map(|a| a.name().as_str()).collect();
        assert_eq!(names, vec!["Theme", "Size"]);
    }

    #[test]
    fn collection_ref_wire_format() {
        let json = serde_json::to_value(CollectionRef::Name("Theme".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "by": "name", "value": "Theme" }));
    }
}
