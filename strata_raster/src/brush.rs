// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hard-edged brush shapes written straight into a [`Mask`].
//!
//! Both shapes are tested per pixel center with exact integer arithmetic, so
//! the result does not depend on floating point rounding. Pixels outside the
//! mask are skipped. Each function returns a rectangle covering every pixel
//! it may have written, clipped to the mask, or [`IntRect::ZERO`] if the
//! shape misses the mask entirely.

use strata_layers::Mask;
use strata_view::{IntPoint, IntRect};

/// Sets every pixel with `dx² + dy² ≤ radius²` around `center` to `value`.
///
/// A radius of zero (or less) writes just the center pixel.
pub fn fill_disc(mask: &mut Mask, center: IntPoint, radius: i32, value: u8) -> IntRect {
    let r = radius.max(0);
    let rect = IntRect::from_edges(
        center.x - r,
        center.y - r,
        center.x + r + 1,
        center.y + r + 1,
    );
    let r2 = i64::from(r) * i64::from(r);
    fill_where(mask, rect, value, |x, y| {
        let dx = i64::from(x - center.x);
        let dy = i64::from(y - center.y);
        dx * dx + dy * dy <= r2
    })
}

/// Sets every pixel within `radius` of the segment `from..to` to `value`.
///
/// This is the swept disc between two brush samples: a rectangle of width
/// `2 * radius` along the segment, capped by a disc at each end.
pub fn fill_capsule(
    mask: &mut Mask,
    from: IntPoint,
    to: IntPoint,
    radius: i32,
    value: u8,
) -> IntRect {
    let r = radius.max(0);
    let rect = IntRect::from_edges(
        from.x.min(to.x) - r,
        from.y.min(to.y) - r,
        from.x.max(to.x) + r + 1,
        from.y.max(to.y) + r + 1,
    );
    let r2 = i64::from(r) * i64::from(r);
    let sx = i64::from(to.x - from.x);
    let sy = i64::from(to.y - from.y);
    let len2 = sx * sx + sy * sy;
    fill_where(mask, rect, value, |x, y| {
        let px = i64::from(x - from.x);
        let py = i64::from(y - from.y);
        let proj = px * sx + py * sy;
        if proj <= 0 {
            px * px + py * py <= r2
        } else if proj >= len2 {
            let qx = i64::from(x - to.x);
            let qy = i64::from(y - to.y);
            qx * qx + qy * qy <= r2
        } else {
            // Perpendicular distance² is cross² / len2.
            let cross = px * sy - py * sx;
            cross * cross <= r2 * len2
        }
    })
}

fn fill_where(
    mask: &mut Mask,
    rect: IntRect,
    value: u8,
    inside: impl Fn(i32, i32) -> bool,
) -> IntRect {
    let rect = rect.intersect(mask.bounds());
    if rect.is_empty() {
        return IntRect::ZERO;
    }
    let start = rect.x as usize;
    let end = rect.max_x() as usize;
    for y in rect.y..rect.max_y() {
        let row = &mut mask.row_mut(y)[start..end];
        for (x, px) in (rect.x..).zip(row.iter_mut()) {
            if inside(x, y) {
                *px = value;
            }
        }
    }
    rect
}
