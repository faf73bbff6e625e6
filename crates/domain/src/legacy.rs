//! Brand × size variation grid.
//!
//! The first generator the plugin shipped with: it predates variable
//! collections and only repeats the base node on a plain grid. Brands run
//! along x, sizes along y, and clones are not wrapped or pinned to modes.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Point, Rect};

/// Brand count used when the theme option is on
pub const DEFAULT_BRAND_COUNT: usize = 7;
/// Size count used when the dynamic type option is on
pub const DEFAULT_SIZE_COUNT: usize = 10;
/// Gap between neighbouring clones
pub const DEFAULT_SPACING: f64 = 40.0;

/// Options posted by the UI for the brand × size generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyRequest {
    pub theme: bool,
    pub dynamic: bool,
}

/// Brand/size counts and spacing for the legacy grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLayout {
    pub brand_count: usize,
    pub size_count: usize,
    pub spacing: f64,
}

impl Default for LegacyLayout {
    fn default() -> Self {
        Self {
            brand_count: DEFAULT_BRAND_COUNT,
            size_count: DEFAULT_SIZE_COUNT,
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Where one legacy clone goes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPlacement {
    pub brand_index: usize,
    pub size_index: usize,
    pub position: Point,
}

impl LegacyLayout {
    /// (brands, sizes) for a request; a disabled option contributes a single step
    pub fn dimensions(&self, request: LegacyRequest) -> (usize, usize) {
        let brands = if request.theme { self.brand_count } else { 1 };
        let sizes = if request.dynamic { self.size_count } else { 1 };
        (brands, sizes)
    }

    /// Placements in brand-major, size-minor order.
    ///
    /// With both options off this is a single clone on top of the base.
    pub fn plan(&self, request: LegacyRequest, base: Rect) -> Vec<LegacyPlacement> {
        let (brands, sizes) = self.dimensions(request);
        let step_x = base.width + self.spacing;
        let step_y = base.height + self.spacing;

        (0..brands)
            .flat_map(|brand_index| {
                (0..sizes).map(move |size_index| LegacyPlacement {
                    brand_index,
                    size_index,
                    position: Point::new(
                        base.x + brand_index as f64 * step_x,
                        base.y + size_index as f64 * step_y,
                    ),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brands_by_sizes_yields_seventy() {
        let request = LegacyRequest {
            theme: true,
            dynamic: true,
        };
        let placements = LegacyLayout::default().plan(request, Rect::new(0.0, 0.0, 100.0, 60.0));

        assert_eq!(placements.len(), 70);
        // brand-major: the first ten are all brand 0
        assert!(placements[..10].iter().all(|p| p.brand_index == 0));
        assert_eq!(placements[10].brand_index, 1);
        assert_eq!(placements[10].size_index, 0);

        let last = placements[69];
        assert_eq!((last.brand_index, last.size_index), (6, 9));
        assert_eq!(last.position, Point::new(6.0 * 140.0, 9.0 * 100.0));
    }

    #[test]
    fn options_off_collapse_to_one_step() {
        let layout = LegacyLayout::default();
        let base = Rect::new(5.0, 5.0, 10.0, 10.0);

        let only_theme = layout.plan(
            LegacyRequest {
                theme: true,
                dynamic: false,
            },
            base,
        );
        assert_eq!(only_theme.len(), 7);
        assert!(only_theme.iter().all(|p| p.position.y == 5.0));

        let neither = layout.plan(LegacyRequest::default(), base);
        assert_eq!(neither.len(), 1);
        assert_eq!(neither[0].position, Point::new(5.0, 5.0));
    }

    #[test]
    fn spacing_is_additive_on_dimensions() {
        let layout = LegacyLayout {
            brand_count: 2,
            size_count: 2,
            spacing: 8.0,
        };
        let placements = layout.plan(
            LegacyRequest {
                theme: true,
                dynamic: true,
            },
            Rect::new(100.0, 200.0, 50.0, 30.0),
        );
        let positions: Vec<Point> = placements.iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(100.0, 200.0),
                Point::new(100.0, 238.0),
                Point::new(158.0, 200.0),
                Point::new(158.0, 238.0),
            ]
        );
    }
}
