use serde::{Deserialize, Serialize};

/// A position in device-independent units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in device-independent units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-side box used for margins and paddings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    /// Same value on every side.
    pub fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Rounding of the four chrome corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CornerGeometry {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_right: i32,
    pub bottom_left: i32,
}

impl CornerGeometry {
    /// Same radius on every corner.
    pub fn uniform(radius: i32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Whether every corner is square.
    pub fn is_square(&self) -> bool {
        self.top_left == 0
            && self.top_right == 0
            && self.bottom_right == 0
            && self.bottom_left == 0
    }
}

/// Fixed height of a layout row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowHeight(pub i32);

impl RowHeight {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Translate a window-relative position into screen space.
///
/// `window_origin` is the window's top-left corner on screen. The result is
/// a plain sum: no rounding, clamping or monitor normalization happens here.
pub fn to_screen(window_origin: Point, relative: Point) -> Point {
    Point::new(window_origin.x + relative.x, window_origin.y + relative.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_window_origin_when_to_screen_then_offsets_are_added() {
        let screen = to_screen(Point::new(100.0, 50.0), Point::new(10.0, 5.0));
        assert_eq!(screen, Point::new(110.0, 55.0));
    }

    #[test]
    fn given_negative_origin_when_to_screen_then_result_is_not_clamped() {
        let screen =
            to_screen(Point::new(-1920.0, -20.0), Point::new(4.5, 2.25));
        assert_eq!(screen, Point::new(-1915.5, -17.75));
    }

    #[test]
    fn given_uniform_thickness_when_summing_sides_then_doubles_value() {
        let thickness = Thickness::uniform(26);
        assert_eq!(thickness.horizontal(), 52);
        assert_eq!(thickness.vertical(), 52);
    }

    #[test]
    fn given_zero_radius_when_checking_corners_then_geometry_is_square() {
        assert!(CornerGeometry::uniform(0).is_square());
        assert!(!CornerGeometry::uniform(10).is_square());
    }
}
