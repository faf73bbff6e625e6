//! Canvas geometry in host units (pixels).

use serde::{Deserialize, Serialize};

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (x + width)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Same size, new top-left corner
    pub fn moved_to(&self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_to_keeps_size() {
        let rect = Rect::new(10.0, 20.0, 300.0, 200.0).moved_to(Point::new(0.0, 5.0));
        assert_eq!(rect, Rect::new(0.0, 5.0, 300.0, 200.0));
        assert_eq!(rect.right(), 300.0);
    }
}
