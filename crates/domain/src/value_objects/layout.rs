//! Layout settings for generated grids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Default gap between the base node and the first column, and between columns
pub const DEFAULT_OUTER_MARGIN: f64 = 100.0;
/// Default padding added around each clone inside its wrapper
pub const DEFAULT_INNER_PADDING: f64 = 25.0;
/// Default vertical gap between rows of wrappers (leaves room for the label)
pub const DEFAULT_ROW_MARGIN: f64 = 240.0;

/// Spacing constants for the wrapped mode grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConstants {
    pub outer_margin: f64,
    pub inner_padding: f64,
    pub row_margin: f64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            outer_margin: DEFAULT_OUTER_MARGIN,
            inner_padding: DEFAULT_INNER_PADDING,
            row_margin: DEFAULT_ROW_MARGIN,
        }
    }
}

impl LayoutConstants {
    /// Offset of the clone inside its wrapper, on both axes
    pub fn clone_inset(&self) -> f64 {
        self.inner_padding / 2.0
    }
}

/// How a variant's wrapper is labeled.
///
/// One style is used for a whole run so every wrapper in a grid reads the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `Light + S` - mode names joined in axis order
    #[default]
    ModeNames,
    /// `Theme - Light + Size - S` - each mode prefixed by its collection
    Qualified,
}

impl LabelStyle {
    /// Separator placed between the per-axis parts of a label
    pub const SEPARATOR: &'static str = " + ";
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeNames => write!(f, "mode_names"),
            Self::Qualified => write!(f, "qualified"),
        }
    }
}

impl FromStr for LabelStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mode_names" | "modes" => Ok(Self::ModeNames),
            "qualified" => Ok(Self::Qualified),
            other => Err(DomainError::parse(format!("Unknown label style: {}", other))),
        }
    }
}
