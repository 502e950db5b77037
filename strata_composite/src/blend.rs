// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer alpha blending of tinted masks.
//!
//! A layer pixel is its tint color with the mask value as alpha. Layers are
//! blended with the source-over operator in 8-bit integer arithmetic,
//! rounding to nearest.

use strata_layers::{Mask, Rgb};
use strata_view::IntRect;

/// `x / 255`, rounded to nearest, for `x ≤ 255 * 255`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "x <= 255 * 255 so the quotient fits in u8"
)]
#[must_use]
pub const fn div255(x: u32) -> u8 {
    ((x + 127) / 255) as u8
}

/// Source-over of color channel `c` with alpha `a` onto opaque channel `d`.
///
/// `out = (c·a + d·(255 − a) + 127) / 255`
#[must_use]
pub const fn blend_channel(c: u8, a: u8, d: u8) -> u8 {
    div255(c as u32 * a as u32 + d as u32 * (255 - a as u32))
}

/// Source-over of a tinted pixel onto an opaque RGB pixel.
#[must_use]
pub const fn blend_rgb(color: Rgb, a: u8, dst: [u8; 3]) -> [u8; 3] {
    [
        blend_channel(color.r, a, dst[0]),
        blend_channel(color.g, a, dst[1]),
        blend_channel(color.b, a, dst[2]),
    ]
}

/// Fills an RGB buffer with one color.
pub(crate) fn fill_rgb(dst: &mut [u8], color: Rgb) {
    for px in dst.chunks_exact_mut(3) {
        px.copy_from_slice(&color.to_array());
    }
}

/// Blends `mask` (over `region`) tinted by `color` onto an opaque RGB buffer.
pub(crate) fn blend_mask_rgb(dst: &mut [u8], mask: &Mask, region: IntRect, color: Rgb) {
    for_each_alpha(mask, region, |i, a| {
        if a == 0 {
            return;
        }
        let px = &mut dst[i * 3..i * 3 + 3];
        let out = blend_rgb(color, a, [px[0], px[1], px[2]]);
        px.copy_from_slice(&out);
    });
}

/// Composites a tinted mask over a premultiplied RGBA overlay buffer.
pub(crate) fn over_mask_premul(dst: &mut [u8], mask: &Mask, region: IntRect, color: Rgb) {
    for_each_alpha(mask, region, |i, a| {
        if a == 0 {
            return;
        }
        let px = &mut dst[i * 4..i * 4 + 4];
        let inv = 255 - u32::from(a);
        for (out, src) in px[..3].iter_mut().zip(color.to_array()) {
            let src = u32::from(div255(u32::from(src) * u32::from(a)));
            *out = clamp_u8(src + u32::from(div255(u32::from(*out) * inv)));
        }
        px[3] = clamp_u8(u32::from(a) + u32::from(div255(u32::from(px[3]) * inv)));
    });
}

/// Applies a premultiplied RGBA overlay onto an opaque RGB buffer.
pub(crate) fn apply_overlay(dst: &mut [u8], overlay: &[u8]) {
    for (px, over) in dst.chunks_exact_mut(3).zip(overlay.chunks_exact(4)) {
        let a = over[3];
        if a == 0 {
            continue;
        }
        let inv = 255 - u32::from(a);
        for (out, &src) in px.iter_mut().zip(over) {
            *out = clamp_u8(u32::from(src) + u32::from(div255(u32::from(*out) * inv)));
        }
    }
}

/// Calls `f(index, alpha)` for every mask pixel in `region`, with `index`
/// counting row-major from the region's top-left corner.
fn for_each_alpha(mask: &Mask, region: IntRect, mut f: impl FnMut(usize, u8)) {
    let start = region.x as usize;
    let end = region.max_x() as usize;
    let mut i = 0;
    for y in region.y..region.max_y() {
        for &a in &mask.row(y)[start..end] {
            f(i, a);
            i += 1;
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to the u8 range first"
)]
fn clamp_u8(v: u32) -> u8 {
    v.min(255) as u8
}
