//! Mode grid generation.
//!
//! One wrapper frame per combination of modes, each holding a clone of the
//! selected node pinned to that combination.

use std::sync::Arc;

use modegrid_domain::{Axis, CollectionRef, CombinationGridBuilder, GridPlan, NodeId, VariantSpec};

use super::{rollback, selected_base, GenerateError, ResolveAxes};
use crate::infrastructure::ports::{HostError, SceneNode, ScenePort};

/// Outcome of a successful mode grid run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGrid {
    /// Wrapper frames in generation order
    pub wrappers: Vec<NodeId>,
    /// Wrapper labels, parallel to `wrappers`
    pub labels: Vec<String>,
}

impl GeneratedGrid {
    pub fn count(&self) -> usize {
        self.wrappers.len()
    }
}

pub struct GenerateModeGrid {
    scene: Arc<dyn ScenePort>,
    axes: Arc<ResolveAxes>,
    builder: CombinationGridBuilder,
}

impl GenerateModeGrid {
    pub fn new(
        scene: Arc<dyn ScenePort>,
        axes: Arc<ResolveAxes>,
        builder: CombinationGridBuilder,
    ) -> Self {
        Self {
            scene,
            axes,
            builder,
        }
    }

    /// Generate the grid for the collections the user enabled.
    pub fn execute(&self, refs: &[CollectionRef]) -> Result<GeneratedGrid, GenerateError> {
        // Selection is checked before the collections are looked up
        let base = selected_base(self.scene.as_ref())?;
        let axes = self.axes.execute(refs)?;
        self.apply_plan(base, &axes)
    }

    /// Generate the grid for conventionally named collections, e.g.
    /// `["Theme", "Dynamic Type"]`. Every name must exist.
    pub fn execute_named(&self, names: &[String]) -> Result<GeneratedGrid, GenerateError> {
        let base = selected_base(self.scene.as_ref())?;
        let axes = self.axes.conventional(names)?;
        self.apply_plan(base, &axes)
    }

    /// Generate the grid for axes that are already resolved.
    pub fn execute_with_axes(&self, axes: &[Axis]) -> Result<GeneratedGrid, GenerateError> {
        let base = selected_base(self.scene.as_ref())?;
        self.apply_plan(base, axes)
    }

    /// Nothing in the scene changes unless the base kind and every axis are
    /// valid.
    fn apply_plan(&self, base: SceneNode, axes: &[Axis]) -> Result<GeneratedGrid, GenerateError> {
        if !base.kind.is_grid_source() {
            return Err(GenerateError::UnsupportedArtifactType { kind: base.kind });
        }

        let plan = self.builder.build(axes, base.frame)?;
        tracing::info!(
            base_id = %base.id,
            axes = plan.axes().len(),
            variants = plan.len(),
            columns = plan.column_count(),
            rows = plan.row_count(),
            "Generating mode grid"
        );

        let mut created = Vec::with_capacity(plan.len());
        for variant in plan.variants() {
            if let Err(e) = self.apply(&plan, variant, base.id, &mut created) {
                tracing::error!(
                    variant = variant.index,
                    label = %variant.label,
                    error = %e,
                    "Host failed while generating mode grid"
                );
                rollback(self.scene.as_ref(), &created);
                return Err(e.into());
            }
        }

        self.scene.set_selection(&created);
        self.scene
            .notify(&format!("Created {} mode variants.", created.len()));

        let labels = plan.into_variants().into_iter().map(|v| v.label).collect();
        Ok(GeneratedGrid {
            wrappers: created,
            labels,
        })
    }

    /// Create one wrapper with its pinned clone.
    ///
    /// `created` always lists the top-level nodes this run has added, so a
    /// failure at any step can be undone.
    fn apply(
        &self,
        plan: &GridPlan,
        variant: &VariantSpec,
        base_id: NodeId,
        created: &mut Vec<NodeId>,
    ) -> Result<(), HostError> {
        let wrapper = self.scene.create_wrapper(&variant.label, variant.wrapper)?;
        created.push(wrapper);

        let clone = self.scene.clone_node(base_id)?;
        created.push(clone);
        self.scene.append_child(wrapper, clone)?;
        // Now owned by the wrapper
        created.pop();

        self.scene.move_node(clone, variant.clone_offset)?;
        for (collection_id, mode_id) in plan.mode_ids_for(variant) {
            self.scene.set_explicit_mode(clone, collection_id, mode_id)?;
        }

        tracing::debug!(
            variant = variant.index,
            label = %variant.label,
            wrapper_id = %wrapper,
            clone_id = %clone,
            "Created mode variant"
        );
        Ok(())
    }
}
