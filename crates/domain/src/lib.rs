//! ModeGrid Domain - pure types and algorithms for mode grids.
//!
//! Nothing in this crate talks to the host. Collections come in as values,
//! plans go out as values, and applying a plan is the engine's job.

extern crate self as modegrid_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod grid;
pub mod ids;
pub mod legacy;
pub mod odometer;
pub mod value_objects;

pub use entities::{
    resolve_axes, Axis, Collection, CollectionRef, GridPlan, Mode, ModeSelection, VariantSpec,
};

pub use error::{DomainError, PlanError};

pub use grid::CombinationGridBuilder;

pub use ids::{CollectionId, ModeId, NodeId, VariableId};

pub use legacy::{LegacyLayout, LegacyPlacement, LegacyRequest};

pub use odometer::MixedRadix;

pub use value_objects::{
    CollectionName, LabelStyle, LayoutConstants, ModeName, NodeKind, Point, Rect,
};
