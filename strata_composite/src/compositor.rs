// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use strata_layers::{Layer, LayerStack};
use strata_view::{IntPoint, IntRect, Viewport};

use crate::Frame;
use crate::blend::{apply_overlay, blend_mask_rgb, fill_rgb, over_mask_premul};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CacheKey {
    region: IntRect,
    active: usize,
    show_all: bool,
}

/// Composites of everything except the active layer over one mask region.
#[derive(Clone, Debug)]
struct Backdrop {
    key: CacheKey,
    /// Background and the contributing layers below the active one, opaque RGB.
    below: Vec<u8>,
    /// Contributing layers above the active one, premultiplied RGBA.
    above: Vec<u8>,
}

impl Backdrop {
    fn build(stack: &LayerStack, key: CacheKey) -> Self {
        let n = key.region.size().area();
        let mut below = vec![0; n * 3];
        let mut above = vec![0; n * 4];
        fill_rgb(&mut below, stack.background());
        for (i, layer) in stack.layers().iter().enumerate() {
            if i == key.active || !contributes(layer, key.show_all) {
                continue;
            }
            if i < key.active {
                blend_mask_rgb(&mut below, layer.mask(), key.region, layer.color());
            } else {
                over_mask_premul(&mut above, layer.mask(), key.region, layer.color());
            }
        }
        Self { key, below, above }
    }

    /// Writes the finished RGB composite of the region into `out`.
    fn composite(&self, stack: &LayerStack, out: &mut Vec<u8>) {
        out.clear();
        out.extend_from_slice(&self.below);
        let active = stack.active_layer();
        blend_mask_rgb(out, active.mask(), self.key.region, active.color());
        apply_overlay(out, &self.above);
    }
}

fn contributes(layer: &Layer, show_all: bool) -> bool {
    show_all || layer.is_visible()
}

/// Renders the visible part of a [`LayerStack`] through a [`Viewport`].
///
/// Compositing happens at mask resolution over [`Viewport::crop_mask`], so
/// the cost follows the canvas size rather than the mask size. The result is
/// then upsampled so each mask pixel becomes a `zoom × zoom` block aligned to
/// the world pixel grid.
///
/// Layers below and above the active one are cached between renders while
/// the crop, the active index and `show_all` stay the same. Painting only
/// changes the active layer, so consecutive brush samples re-blend a single
/// layer. Any other change to the stack (visibility, colors, structure,
/// undo) must be followed by [`Compositor::invalidate`].
///
/// Layers above the active one are pre-blended, in ascending order, into one
/// premultiplied overlay. Rounding then differs from blending each layer in
/// turn: a pixel can drift by up to one step per channel for every layer
/// above the active one that covers it partially. Fully transparent and
/// fully opaque coverage is exact.
/// [`render_full`] uses the same pipeline, so exports match the canvas.
#[derive(Debug, Default)]
pub struct Compositor {
    backdrop: Option<Backdrop>,
    scratch: Vec<u8>,
    frame: Frame,
    backdrop_builds: u64,
}

impl Compositor {
    /// Creates a compositor with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached backdrop so the next render rebuilds it.
    pub fn invalidate(&mut self) {
        self.backdrop = None;
    }

    /// Returns `true` if a backdrop is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.backdrop.is_some()
    }

    /// Number of times the backdrop has been rebuilt.
    #[must_use]
    pub fn backdrop_builds(&self) -> u64 {
        self.backdrop_builds
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Renders the visible crop of `stack`.
    ///
    /// The frame covers [`Viewport::crop_world`] and is placed at
    /// [`Viewport::crop_screen`]. The active layer always contributes;
    /// other layers contribute when visible, or always when `show_all` is set.
    pub fn render_crop(
        &mut self,
        stack: &LayerStack,
        viewport: &Viewport,
        show_all: bool,
    ) -> &Frame {
        let mask_bounds = IntRect::from_origin_size(IntPoint::ORIGIN, stack.mask_size());
        let region = viewport.crop_mask().intersect(mask_bounds);
        let world = viewport.crop_world();
        self.frame.reset(viewport.crop_screen(), world.size());
        if region.is_empty() || world.is_empty() {
            return &self.frame;
        }

        let key = CacheKey {
            region,
            active: stack.active_index(),
            show_all,
        };
        if self.backdrop.as_ref().is_none_or(|b| b.key != key) {
            self.backdrop = Some(Backdrop::build(stack, key));
            self.backdrop_builds += 1;
        }
        let Some(backdrop) = &self.backdrop else {
            return &self.frame;
        };
        backdrop.composite(stack, &mut self.scratch);
        upsample(
            &self.scratch,
            region,
            world,
            viewport.zoom(),
            self.frame.data_mut(),
        );
        &self.frame
    }
}

/// Composites the whole stack at mask resolution, for export.
///
/// This never reads or updates any [`Compositor`] cache. The frame sits at
/// the origin and has the mask's size.
#[must_use]
pub fn render_full(stack: &LayerStack, show_all: bool) -> Frame {
    let size = stack.mask_size();
    let region = IntRect::from_origin_size(IntPoint::ORIGIN, size);
    let mut frame = Frame::new(IntPoint::ORIGIN, size);
    if region.is_empty() {
        return frame;
    }
    let backdrop = Backdrop::build(
        stack,
        CacheKey {
            region,
            active: stack.active_index(),
            show_all,
        },
    );
    let mut rgb = Vec::new();
    backdrop.composite(stack, &mut rgb);
    upsample(&rgb, region, region, 1, frame.data_mut());
    frame
}

/// Nearest-neighbor upsampling from mask to world resolution.
///
/// `src` is RGB over `region` (mask space); `dst` is RGBA over `world`
/// (world space). Frame pixel `i` shows mask pixel `floor((world.x + i) /
/// zoom)`.
fn upsample(src: &[u8], region: IntRect, world: IntRect, zoom: i32, dst: &mut [u8]) {
    let src_stride = region.width as usize * 3;
    let columns: Vec<usize> = (world.x..world.max_x())
        .map(|x| mask_offset(x, zoom, region.x, region.width) * 3)
        .collect();
    for (y, dst_row) in (world.y..).zip(dst.chunks_exact_mut(world.width as usize * 4)) {
        let row = mask_offset(y, zoom, region.y, region.height);
        let src_row = &src[row * src_stride..(row + 1) * src_stride];
        for (px, &col) in dst_row.chunks_exact_mut(4).zip(&columns) {
            px[..3].copy_from_slice(&src_row[col..col + 3]);
            px[3] = 255;
        }
    }
}

/// Index within `origin..origin + len` of the mask pixel under world coordinate `w`.
fn mask_offset(w: i32, zoom: i32, origin: i32, len: i32) -> usize {
    (w.div_euclid(zoom) - origin).clamp(0, len - 1) as usize
}
