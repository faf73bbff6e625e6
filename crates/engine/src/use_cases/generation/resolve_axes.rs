//! Axis resolution against the host's variable store.

use std::sync::Arc;

use modegrid_domain::{resolve_axes, Axis, Collection, CollectionRef, PlanError};

use super::GenerateError;
use crate::infrastructure::ports::VariableStore;

/// Turns the collections a user enabled into axes.
pub struct ResolveAxes {
    variables: Arc<dyn VariableStore>,
}

impl ResolveAxes {
    pub fn new(variables: Arc<dyn VariableStore>) -> Self {
        Self { variables }
    }

    /// Resolve references in order, dropping any the store cannot find.
    ///
    /// An empty reference list fails with `NoAxesSelected` before the store
    /// is queried.
    pub fn execute(&self, refs: &[CollectionRef]) -> Result<Vec<Axis>, PlanError> {
        resolve_axes(refs, |r| self.lookup(r))
    }

    /// Resolve collections by conventional name; every name must exist.
    pub fn conventional(&self, names: &[String]) -> Result<Vec<Axis>, GenerateError> {
        if names.is_empty() {
            return Err(PlanError::NoAxesSelected.into());
        }

        let mut collections = Vec::with_capacity(names.len());
        for name in names {
            let collection = self
                .variables
                .collection_by_name(name)?
                .ok_or_else(|| GenerateError::CollectionNotFound { name: name.clone() })?;
            collections.push(collection);
        }

        let refs: Vec<CollectionRef> = collections.iter().map(|c| c.id().into()).collect();
        let axes = resolve_axes(&refs, |r| match r {
            CollectionRef::Id(id) => collections.iter().find(|c| c.id() == *id).cloned(),
            CollectionRef::Name(_) => None,
        })?;
        Ok(axes)
    }

    fn lookup(&self, reference: &CollectionRef) -> Option<Collection> {
        let result = match reference {
            CollectionRef::Id(id) => self.variables.collection(*id),
            CollectionRef::Name(name) => self.variables.collection_by_name(name),
        };

        match result {
            Ok(Some(collection)) => Some(collection),
            Ok(None) => {
                tracing::debug!(reference = ?reference, "Collection not found, dropping axis");
                None
            }
            Err(e) => {
                tracing::debug!(reference = ?reference, error = %e, "Collection lookup failed, dropping axis");
                None
            }
        }
    }
}
