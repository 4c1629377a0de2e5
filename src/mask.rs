//! Binary alpha masks computed per pixel.
//!
//! A mask never stores pixels: [`AlphaMask::opacity`] answers for any
//! coordinate by testing it against the mask's shape. Edges are hard, so every
//! answer is either [`OPAQUE`] or [`TRANSPARENT`].

use crate::geometry::Rect;

/// Opacity of a pixel inside the kept area.
pub const OPAQUE: u8 = 255;

/// Opacity of a pixel in the cleared area.
pub const TRANSPARENT: u8 = 0;

/// Shape tested against the mask's inner region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Disc centered in the inner region, radius half its width.
    Circle,
    /// The inner region itself.
    Rectangle,
}

/// A lazily evaluated single-channel mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaMask {
    /// The coordinate space the mask is sampled in.
    pub outer: Rect,
    /// Region the shape is fitted to.
    pub inner: Rect,
    /// Make the shape's interior transparent and its exterior opaque.
    pub reverse: bool,
    /// Containment test to apply.
    pub shape: Shape,
}

impl AlphaMask {
    /// Create a mask.
    #[must_use]
    pub const fn new(outer: Rect, inner: Rect, reverse: bool, shape: Shape) -> Self {
        Self {
            outer,
            inner,
            reverse,
            shape,
        }
    }

    /// Bounds of the mask's own coordinate space.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.outer
    }

    /// Whether `(x, y)` falls inside the shape, ignoring `reverse`.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        match self.shape {
            Shape::Circle => in_circle(&self.inner, x, y),
            Shape::Rectangle => self.inner.contains(x, y),
        }
    }

    /// Opacity at `(x, y)`: [`OPAQUE`] or [`TRANSPARENT`].
    ///
    /// Defined for every coordinate, including ones outside [`Self::bounds`].
    #[must_use]
    pub fn opacity(&self, x: i64, y: i64) -> u8 {
        alpha_of(self.contains(x, y), self.reverse)
    }
}

fn alpha_of(inside: bool, reverse: bool) -> u8 {
    if inside != reverse {
        OPAQUE
    } else {
        TRANSPARENT
    }
}

/// Sample at the pixel center against a circle of radius `inner.width() / 2`.
///
/// The radius ignores the region's height, so non-square regions clip to a
/// circle sized by width alone.
#[allow(clippy::cast_precision_loss)]
fn in_circle(inner: &Rect, x: i64, y: i64) -> bool {
    let x = x - inner.min.x;
    let y = y - inner.min.y;
    let (cx, cy, r) = (inner.width() / 2, inner.height() / 2, inner.width() / 2);

    let dx = (x - cx) as f64 + 0.5;
    let dy = (y - cy) as f64 + 0.5;
    let r = r as f64;
    dx * dx + dy * dy < r * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn square(d: u32) -> Rect {
        Rect::from_size(d, d)
    }

    fn count_opaque(mask: &AlphaMask) -> usize {
        let b = mask.bounds();
        let mut n = 0;
        for y in b.min.y..b.max.y {
            for x in b.min.x..b.max.x {
                if mask.opacity(x, y) == OPAQUE {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn reverse_is_strict_complement() {
        let outer = Rect::from_size(40, 30);
        let inners = [
            Rect::new(Point::new(5, 5), Point::new(25, 25)),
            Rect::new(Point::new(30, -3), Point::new(41, 9)),
            Rect::new(Point::new(3, 4), Point::new(3, 20)),
        ];

        for inner in inners {
            for shape in [Shape::Circle, Shape::Rectangle] {
                let normal = AlphaMask::new(outer, inner, false, shape);
                let reversed = AlphaMask::new(outer, inner, true, shape);
                for y in -2..32 {
                    for x in -2..42 {
                        assert_eq!(
                            normal.opacity(x, y),
                            255 - reversed.opacity(x, y),
                            "{shape:?} {inner:?} at ({x},{y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn circle_area_approximates_pi_r_squared() {
        for d in [10u32, 33, 64, 101] {
            let mask = AlphaMask::new(square(d), square(d), false, Shape::Circle);
            let count = count_opaque(&mask);

            let r = f64::from(d / 2);
            let expected = std::f64::consts::PI * r * r;
            // Half a pixel row plus half a pixel column.
            let tolerance = f64::from(d) / 2.0;
            #[allow(clippy::cast_precision_loss)]
            let diff = (count as f64 - expected).abs();
            assert!(
                diff <= tolerance,
                "d={d}: {count} opaque vs expected {expected:.1}"
            );
        }
    }

    #[test]
    fn circle_samples_pixel_centers() {
        // Sampling at pixel corners (or the far side of the center) gives 69 or 72.
        let mask = AlphaMask::new(square(10), square(10), false, Shape::Circle);
        assert_eq!(count_opaque(&mask), 80);
    }

    #[test]
    fn circle_center_opaque_corners_transparent() {
        let mask = AlphaMask::new(square(20), square(20), false, Shape::Circle);
        assert_eq!(mask.opacity(10, 10), OPAQUE);
        assert_eq!(mask.opacity(9, 9), OPAQUE);
        assert_eq!(mask.opacity(0, 0), TRANSPARENT);
        assert_eq!(mask.opacity(19, 0), TRANSPARENT);
        assert_eq!(mask.opacity(0, 19), TRANSPARENT);
        assert_eq!(mask.opacity(19, 19), TRANSPARENT);
    }

    #[test]
    fn circle_follows_translated_inner_region() {
        let inner = Rect::new(Point::new(100, 50), Point::new(120, 70));
        let mask = AlphaMask::new(Rect::from_size(200, 200), inner, false, Shape::Circle);
        assert_eq!(mask.opacity(110, 60), OPAQUE);
        assert_eq!(mask.opacity(10, 10), TRANSPARENT);
        assert_eq!(mask.opacity(100, 50), TRANSPARENT);
    }

    #[test]
    fn circle_is_symmetric_about_pixel_centers() {
        let d = 16;
        let mask = AlphaMask::new(square(d), square(d), false, Shape::Circle);
        let last = i64::from(d) - 1;
        for y in 0..i64::from(d) {
            for x in 0..i64::from(d) {
                assert_eq!(mask.opacity(x, y), mask.opacity(last - x, y));
                assert_eq!(mask.opacity(x, y), mask.opacity(x, last - y));
            }
        }
    }

    #[test]
    fn circle_radius_uses_width_only() {
        // 20 wide, 4 tall: radius 10 around center (10, 2).
        let inner = Rect::new(Point::ZERO, Point::new(20, 4));
        let mask = AlphaMask::new(Rect::from_size(20, 20), inner, false, Shape::Circle);
        assert_eq!(mask.opacity(10, 11), OPAQUE);
        assert_eq!(mask.opacity(10, 12), TRANSPARENT);
    }

    #[test]
    fn empty_circle_is_fully_transparent() {
        let mask = AlphaMask::new(square(8), Rect::default(), false, Shape::Circle);
        assert_eq!(count_opaque(&mask), 0);
    }

    #[test]
    fn rectangle_mask_matches_half_open_region() {
        let inner = Rect::new(Point::new(3, 2), Point::new(7, 5));
        let mask = AlphaMask::new(Rect::from_size(10, 10), inner, false, Shape::Rectangle);

        for y in 0..10 {
            for x in 0..10 {
                let expected = if (3..7).contains(&x) && (2..5).contains(&y) {
                    OPAQUE
                } else {
                    TRANSPARENT
                };
                assert_eq!(mask.opacity(x, y), expected, "({x},{y})");
            }
        }
        assert_eq!(count_opaque(&mask), 12);
    }
}
