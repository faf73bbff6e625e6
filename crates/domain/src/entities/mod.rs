//! Domain entities - Collections as the host reports them, axes, and variant plans

mod axis;
mod collection;
mod variant;

pub use axis::{resolve_axes, Axis, CollectionRef};
pub use collection::{Collection, Mode};
pub use variant::{GridPlan, ModeSelection, VariantSpec};
