//! Integer pointer geometry.

/// Pointer position in layout pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the squared euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when `point` lies inside; right and bottom edges are
    /// exclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        let left = i64::from(self.x);
        let top = i64::from(self.y);
        let px = i64::from(point.x);
        let py = i64::from(point.y);
        px >= left
            && py >= top
            && px < left + i64::from(self.width)
            && py < top + i64::from(self.height)
    }
}
