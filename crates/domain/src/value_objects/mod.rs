//! Value objects - Immutable objects defined by their attributes

mod geometry;
mod layout;
mod names;
mod node_kind;

pub use geometry::{Point, Rect};
pub use layout::{
    LabelStyle, LayoutConstants, DEFAULT_INNER_PADDING, DEFAULT_OUTER_MARGIN, DEFAULT_ROW_MARGIN,
};
pub use names::{CollectionName, ModeName};
pub use node_kind::NodeKind;
