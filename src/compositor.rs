//! Three-pass masked compositing of the source image and the badge overlay.
//!
//! 1. **Rounding**: copy the source, clearing the badge circle.
//! 2. **Corner clip**: clear a rectangular notch in the top-right corner.
//! 3. **Overlay**: blend the resized overlay, clipped to a circle, into the badge.
//!
//! Passes 1 and 2 replace pixels outright; pass 3 uses straight-alpha "over"
//! blending so a transparent overlay shows the cleared badge behind it.

use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgba, RgbaImage};

use crate::geometry::Rect;
use crate::layout::Layout;
use crate::mask::{AlphaMask, Shape, TRANSPARENT};

/// Fully transparent black, the value of every cleared pixel.
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Run the full pipeline: plan the layout from `src`, then apply all passes.
#[must_use]
pub fn compose<S, O>(src: &S, overlay: &O) -> RgbaImage
where
    S: GenericImageView<Pixel = Rgba<u8>>,
    O: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = src.dimensions();
    let layout = Layout::plan(width, height);

    let mut out = round_pass(src, &layout);
    corner_clip_pass(&mut out, &layout);
    overlay_pass(&mut out, overlay, &layout);
    out
}

/// Mask keeping everything outside the circle inscribed in `circle_rect`.
#[must_use]
pub fn rounding_mask(layout: &Layout) -> AlphaMask {
    AlphaMask::new(layout.bounds(), layout.circle_rect, true, Shape::Circle)
}

/// Mask keeping everything outside `corner_rect`.
#[must_use]
pub fn corner_mask(layout: &Layout) -> AlphaMask {
    AlphaMask::new(layout.bounds(), layout.corner_rect, true, Shape::Rectangle)
}

/// Circle mask in the overlay's local frame, sized to `dog_rect`.
#[must_use]
pub fn badge_mask(layout: &Layout) -> AlphaMask {
    let (w, h) = layout.badge_size();
    let local = Rect::from_size(w, h);
    AlphaMask::new(local, local, false, Shape::Circle)
}

/// Pass 1: a new canvas of the layout's size holding `src` with the badge
/// circle cleared.
#[must_use]
pub fn round_pass<S>(src: &S, layout: &Layout) -> RgbaImage
where
    S: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut out = RgbaImage::new(layout.width, layout.height);
    draw_mask_src(&mut out, src, &rounding_mask(layout));
    out
}

/// Pass 2: clear the corner notch in place.
pub fn corner_clip_pass(out: &mut RgbaImage, layout: &Layout) {
    apply_mask(out, &corner_mask(layout));
}

/// Pass 3: resize `overlay` to the badge size (nearest neighbor) and blend its
/// circular interior into `dog_rect`.
///
/// Skipped when the badge is empty, which happens for sources under 3 pixels
/// on either side.
pub fn overlay_pass<O>(out: &mut RgbaImage, overlay: &O, layout: &Layout)
where
    O: GenericImageView<Pixel = Rgba<u8>>,
{
    let (w, h) = layout.badge_size();
    let (ow, oh) = overlay.dimensions();
    if w == 0 || h == 0 || ow == 0 || oh == 0 || layout.dog_rect.is_empty() {
        return;
    }

    let resized = imageops::resize(overlay, w, h, FilterType::Nearest);
    draw_mask_over(out, layout.dog_rect, &resized, &badge_mask(layout));
}

/// Replace every pixel of `dst` with the matching `src` pixel where `mask` is
/// opaque, and with [`CLEAR`] elsewhere.
///
/// `dst`, `src`, and `mask` share one coordinate frame anchored at the origin.
/// Pixels outside `src` are cleared.
pub fn draw_mask_src<S>(dst: &mut RgbaImage, src: &S, mask: &AlphaMask)
where
    S: GenericImageView<Pixel = Rgba<u8>>,
{
    let (sw, sh) = src.dimensions();
    for (x, y, px) in dst.enumerate_pixels_mut() {
        let keep = x < sw && y < sh && mask.opacity(i64::from(x), i64::from(y)) != TRANSPARENT;
        *px = if keep { src.get_pixel(x, y) } else { CLEAR };
    }
}

/// Clear every pixel of `dst` where `mask` is transparent.
///
/// Same as [`draw_mask_src`] with `dst` as its own source.
pub fn apply_mask(dst: &mut RgbaImage, mask: &AlphaMask) {
    for (x, y, px) in dst.enumerate_pixels_mut() {
        if mask.opacity(i64::from(x), i64::from(y)) == TRANSPARENT {
            *px = CLEAR;
        }
    }
}

/// Blend `src` over the `target` area of `dst` wherever `mask` is opaque.
///
/// `src` and `mask` are sampled at the offset from `target.min`, with the mask
/// offset further shifted by its own bounds origin. Drawing is clipped to
/// `dst`, to `src`, and to the mask bounds.
pub fn draw_mask_over<S>(dst: &mut RgbaImage, target: Rect, src: &S, mask: &AlphaMask)
where
    S: GenericImageView<Pixel = Rgba<u8>>,
{
    let clip = target.intersect(&Rect::from_size(dst.width(), dst.height()));
    if clip.is_empty() {
        return;
    }

    let (sw, sh) = src.dimensions();
    let mask_bounds = mask.bounds();

    for y in clip.min.y..clip.max.y {
        for x in clip.min.x..clip.max.x {
            let (dx, dy) = (x - target.min.x, y - target.min.y);
            let (mx, my) = (mask_bounds.min.x + dx, mask_bounds.min.y + dy);
            if !mask_bounds.contains(mx, my) || mask.opacity(mx, my) == TRANSPARENT {
                continue;
            }

            // clip lies inside both target and dst, so all four are non-negative.
            let (Ok(sx), Ok(sy), Ok(tx), Ok(ty)) = (
                u32::try_from(dx),
                u32::try_from(dy),
                u32::try_from(x),
                u32::try_from(y),
            ) else {
                continue;
            };
            if sx >= sw || sy >= sh {
                continue;
            }

            blend_over(dst.get_pixel_mut(tx, ty), src.get_pixel(sx, sy));
        }
    }
}

/// Straight-alpha "over": `out = src * a_s + dst * a_d * (1 - a_s)`,
/// normalized by the resulting alpha.
pub fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    match src[3] {
        0 => return,
        255 => {
            *dst = src;
            return;
        }
        _ => {}
    }

    let sa = f32::from(src[3]) / 255.0;
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);

    for ch in 0..3 {
        let c = (f32::from(src[ch]) * sa + f32::from(dst[ch]) * da * (1.0 - sa)) / out_a;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            dst[ch] = c.round().clamp(0.0, 255.0) as u8;
        }
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}
