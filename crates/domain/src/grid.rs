//! Combination grid builder.
//!
//! Turns a list of axes into one [`VariantSpec`] per combination of modes,
//! laid out to the right of the base node:
//!
//! ```text
//!  base │ outer │ wrap(0,0) │ outer │ wrap(1,0) │ ...
//!       │       │           │       │           │
//!       │ row_margin below each row of wrappers │
//!       │       │ wrap(0,1) │ outer │ wrap(1,1) │ ...
//! ```
//!
//! The last axis varies fastest and sets the column count, so each row is one
//! full sweep of the last axis.

use crate::entities::{Axis, GridPlan, ModeSelection, VariantSpec};
use crate::error::PlanError;
use crate::odometer::MixedRadix;
use crate::value_objects::{LabelStyle, LayoutConstants, Point, Rect};

/// Builds [`GridPlan`]s. Pure: holds only layout settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombinationGridBuilder {
    layout: LayoutConstants,
    label_style: LabelStyle,
}

impl CombinationGridBuilder {
    pub fn new(layout: LayoutConstants) -> Self {
        Self {
            layout,
            label_style: LabelStyle::default(),
        }
    }

    pub fn with_label_style(mut self, label_style: LabelStyle) -> Self {
        self.label_style = label_style;
        self
    }

    /// Plan the grid for `axes` next to a base node occupying `base`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::NoAxesSelected`] if `axes` is empty
    /// - [`PlanError::EmptyAxis`] if any axis has no modes
    pub fn build(&self, axes: &[Axis], base: Rect) -> Result<GridPlan, PlanError> {
        let last = axes.last().ok_or(PlanError::NoAxesSelected)?;
        if let Some(empty) = axes.iter().find(|a| a.mode_count() == 0) {
            return Err(PlanError::EmptyAxis {
                collection: empty.name().clone(),
            });
        }

        let columns = last.mode_count();
        let radices: Vec<usize> = axes.iter().map(Axis::mode_count).collect();
        let odometer = MixedRadix::new(radices);
        let total = odometer.len();

        let variants: Vec<VariantSpec> = odometer
            .enumerate()
            .map(|(index, digits)| self.variant(axes, base, columns, index, &digits))
            .collect();

        Ok(GridPlan::new(
            axes.to_vec(),
            variants,
            columns,
            total / columns,
        ))
    }

    fn variant(
        &self,
        axes: &[Axis],
        base: Rect,
        columns: usize,
        index: usize,
        digits: &[usize],
    ) -> VariantSpec {
        let grid_col = index % columns;
        let grid_row = index / columns;

        let selections = digits
            .iter()
            .enumerate()
            .map(|(axis_index, mode_index)| ModeSelection::new(axis_index, *mode_index))
            .collect();

        VariantSpec {
            index,
            label: self.label(axes, digits),
            grid_row,
            grid_col,
            selections,
            wrapper: self.wrapper_rect(base, grid_row, grid_col),
            clone_offset: Point::new(self.layout.clone_inset(), self.layout.clone_inset()),
        }
    }

    fn label(&self, axes: &[Axis], digits: &[usize]) -> String {
        let parts: Vec<String> = axes
            .iter()
            .zip(digits)
            .filter_map(|(axis, mode_index)| {
                let mode = axis.mode(*mode_index)?;
                Some(match self.label_style {
                    LabelStyle::ModeNames => mode.name().to_string(),
                    LabelStyle::Qualified => format!("{} - {}", axis.name(), mode.name()),
                })
            })
            .collect();
        parts.join(LabelStyle::SEPARATOR)
    }

    /// Wrapper frame for grid cell (`row`, `col`).
    pub fn wrapper_rect(&self, base: Rect, row: usize, col: usize) -> Rect {
        let LayoutConstants {
            outer_margin,
            inner_padding,
            row_margin,
        } = self.layout;
        let width = base.width + inner_padding;
        let height = base.height + inner_padding;

        Rect::new(
            base.right() + outer_margin + col as f64 * (width + outer_margin),
            base.y + row as f64 * (base.height + row_margin),
            width,
            height,
        )
    }
}
