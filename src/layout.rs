//! Badge geometry derived from the source image size.

use crate::geometry::{Point, Rect};

/// Gap in pixels between the badge content and the cleared circle.
pub const BORDER_WIDTH: i64 = 1;

/// Fraction of the source width and height taken by the badge content.
pub const BADGE_RATIO: u32 = 3;

/// The three regions that drive compositing, all anchored at the top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width of the source image.
    pub width: u32,
    /// Height of the source image.
    pub height: u32,
    /// Badge content size, `(width / 3, height / 3)`.
    pub badge: Point,
    /// Region whose inscribed circle is cleared from the source.
    pub circle_rect: Rect,
    /// Corner notch cleared so no square edge shows around the badge.
    pub corner_rect: Rect,
    /// Where the resized overlay is drawn.
    pub dog_rect: Rect,
}

impl Layout {
    /// Plan the layout for a `width` x `height` source.
    ///
    /// Tiny sources give degenerate (possibly empty or negative-origin)
    /// rectangles rather than an error.
    #[must_use]
    pub fn plan(width: u32, height: u32) -> Self {
        let bw = BORDER_WIDTH;
        let (sw, sh) = (i64::from(width), i64::from(height));
        let w = i64::from(width / BADGE_RATIO);
        let h = i64::from(height / BADGE_RATIO);

        Self {
            width,
            height,
            badge: Point::new(w, h),
            circle_rect: Rect::new(Point::new(sw - w - 2 * bw, 0), Point::new(sw, h + 2 * bw)),
            corner_rect: Rect::new(Point::new(sw - w / 2 - bw, 0), Point::new(sw, h / 2 + bw)),
            dog_rect: Rect::new(Point::new(sw - w - bw, bw), Point::new(sw - bw, h + bw)),
        }
    }

    /// Full bounds of the output image.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Badge content size in pixels as `(width, height)`.
    #[must_use]
    pub fn badge_size(&self) -> (u32, u32) {
        // badge holds thirds of the u32 source size, so both conversions succeed.
        (
            u32::try_from(self.badge.x).unwrap_or(0),
            u32::try_from(self.badge.y).unwrap_or(0),
        )
    }
}
