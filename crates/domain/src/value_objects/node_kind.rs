//! Scene node kinds as reported by the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Kind of a scene-graph node.
///
/// Only a handful of kinds can serve as the base of a mode grid; everything
/// else is carried so the engine can say what was selected instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Component,
    ComponentSet,
    Section,
    Instance,
    Group,
    Text,
    Rectangle,
    Vector,
    Other,
}

impl NodeKind {
    /// Whether a node of this kind can be cloned into a mode grid
    pub fn is_grid_source(&self) -> bool {
        matches!(
            self,
            Self::Frame | Self::Component | Self::Section | Self::Instance
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Section => "SECTION",
            Self::Instance => "INSTANCE",
            Self::Group => "GROUP",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Vector => "VECTOR",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRAME" => Ok(Self::Frame),
            "COMPONENT" => Ok(Self::Component),
            "COMPONENT_SET" => Ok(Self::ComponentSet),
            "SECTION" => Ok(Self::Section),
            "INSTANCE" => Ok(Self::Instance),
            "GROUP" => Ok(Self::Group),
            "TEXT" => Ok(Self::Text),
            "RECTANGLE" => Ok(Self::Rectangle),
            "VECTOR" => Ok(Self::Vector),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::parse(format!("Unknown node kind: {}", s))),
        }
    }
}
