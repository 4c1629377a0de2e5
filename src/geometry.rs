//! Integer points and half-open rectangles in pixel space.
//!
//! Coordinates are signed so that layouts computed for very small images may
//! produce rectangles extending past the image origin without wrapping.

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: i64,
    /// Vertical coordinate, growing downwards.
    pub y: i64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle covering `min.x <= x < max.x`, `min.y <= y < max.y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub min: Point,
    /// Exclusive bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its corners.
    #[must_use]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// A rectangle anchored at the origin with the given size.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            Point::ZERO,
            Point::new(i64::from(width), i64::from(height)),
        )
    }

    /// Horizontal extent. Negative for inverted rectangles.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    /// Vertical extent. Negative for inverted rectangles.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    /// Size as a point, `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Half-open containment test.
    #[must_use]
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        self.min.x <= x && x < self.max.x && self.min.y <= y && y < self.max.y
    }

    /// Whether `other` lies entirely inside `self`. Empty rectangles are
    /// contained in everything.
    #[cfg(test)]
    pub(crate) const fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.min.x <= other.min.x
                && other.max.x <= self.max.x
                && self.min.y <= other.min.y
                && other.max.y <= self.max.y)
    }

    /// The overlap of two rectangles, or an empty rectangle at `self.min`.
    #[must_use]
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect::new(
            Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        );
        if r.is_empty() {
            Rect::new(self.min, self.min)
        } else {
            r
        }
    }
}
