//! Variant plans produced by the combination grid builder.

use serde::{Deserialize, Serialize};

use crate::entities::{Axis, Mode};
use crate::ids::{CollectionId, ModeId};
use crate::value_objects::{Point, Rect};

/// The mode chosen for one axis of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSelection {
    pub axis_index: usize,
    pub mode_index: usize,
}

impl ModeSelection {
    pub fn new(axis_index: usize, mode_index: usize) -> Self {
        Self {
            axis_index,
            mode_index,
        }
    }
}

/// Plan for one generated artifact.
///
/// Never mutated after the builder emits it. `selections` holds exactly one
/// entry per axis, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantSpec {
    /// 0-based position in generation order
    pub index: usize,
    pub label: String,
    pub grid_row: usize,
    pub grid_col: usize,
    pub selections: Vec<ModeSelection>,
    /// Wrapper frame in canvas coordinates
    pub wrapper: Rect,
    /// Clone position relative to the wrapper's top-left corner
    pub clone_offset: Point,
}

impl VariantSpec {
    /// Mode index chosen for `axis_index`
    pub fn mode_index(&self, axis_index: usize) -> Option<usize> {
        self.selections
            .iter()
            .find(|s| s.axis_index == axis_index)
            .map(|s| s.mode_index)
    }
}

/// Ordered list of variant specs plus the axes they index into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPlan {
    axes: Vec<Axis>,
    variants: Vec<VariantSpec>,
    column_count: usize,
    row_count: usize,
}

impl GridPlan {
    pub(crate) fn new(
        axes: Vec<Axis>,
        variants: Vec<VariantSpec>,
        column_count: usize,
        row_count: usize,
    ) -> Self {
        Self {
            axes,
            variants,
            column_count,
            row_count,
        }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn variants(&self) -> &[VariantSpec] {
        &self.variants
    }

    pub fn into_variants(self) -> Vec<VariantSpec> {
        self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Resolve a variant's selections to concrete (collection, mode) pairs,
    /// in axis order.
    pub fn modes_for<'a>(
        &'a self,
        variant: &'a VariantSpec,
    ) -> impl Iterator<Item = (CollectionId, &'a Mode)> + 'a {
        variant.selections.iter().filter_map(move |s| {
            let axis = self.axes.get(s.axis_index)?;
            Some((axis.collection_id(), axis.mode(s.mode_index)?))
        })
    }

    /// Same as [`GridPlan::modes_for`] but yields mode ids only
    pub fn mode_ids_for<'a>(
        &'a self,
        variant: &'a VariantSpec,
    ) -> impl Iterator<Item = (CollectionId, ModeId)> + 'a {
        self.modes_for(variant).map(|(c, m)| (c, m.id()))
    }
}
