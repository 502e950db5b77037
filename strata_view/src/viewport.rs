// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Circle, Point, Rect};

use crate::geom::{IntPoint, IntRect, IntSize};

/// Default lower zoom limit.
pub const DEFAULT_MIN_ZOOM: i32 = 1;
/// Default upper zoom limit.
pub const DEFAULT_MAX_ZOOM: i32 = 8;

/// Integer viewport over a zoomed mask image.
///
/// Three coordinate spaces are involved:
/// - **mask space**: native mask pixels, `0..mask_size`.
/// - **world space**: mask space scaled by the integer `zoom`, so one mask
///   pixel covers a `zoom × zoom` block.
/// - **screen space**: the visible canvas window, `0..canvas_size`.
///
/// The camera is the world-space point shown at the center of the canvas.
/// Every mutator re-derives the crop rectangles, so the accessors always
/// describe the current state:
/// - [`Viewport::crop_world`]: visible part of the world, at most the canvas
///   size per axis, centered on the camera and always inside the world.
/// - [`Viewport::crop_mask`]: mask pixels covered by the world crop.
/// - [`Viewport::crop_screen`]: where the world crop lands on the canvas.
#[derive(Clone, Debug)]
pub struct Viewport {
    zoom: i32,
    min_zoom: i32,
    max_zoom: i32,
    mask_size: IntSize,
    world_size: IntSize,
    canvas_size: IntSize,
    camera: IntPoint,
    crop_world: IntRect,
    crop_mask: IntRect,
    crop_screen: IntPoint,
    canvas_world: IntPoint,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an empty viewport with zoom `1` and limits `1..=8`.
    ///
    /// Nothing is visible until [`Viewport::load`] supplies a mask size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            mask_size: IntSize::ZERO,
            world_size: IntSize::ZERO,
            canvas_size: IntSize::ZERO,
            camera: IntPoint::ORIGIN,
            crop_world: IntRect::ZERO,
            crop_mask: IntRect::ZERO,
            crop_screen: IntPoint::ORIGIN,
            canvas_world: IntPoint::ORIGIN,
        }
    }

    /// Resets the viewport for a freshly loaded mask.
    ///
    /// Zoom returns to the lower limit (`1` by default) and the camera is
    /// centered on the world.
    pub fn load(&mut self, mask_size: IntSize, canvas_size: IntSize) {
        self.zoom = self.min_zoom;
        self.mask_size = mask_size;
        self.canvas_size = canvas_size;
        self.world_size = mask_size.scale(self.zoom);
        self.camera = IntPoint::new(self.world_size.width / 2, self.world_size.height / 2);
        self.derive_world_crop();
        self.clamp_camera();
        self.derive_space_vars();
    }

    /// Current zoom factor, always a power of two within the zoom limits.
    #[must_use]
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Current `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (i32, i32) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the zoom limits.
    ///
    /// Both limits are rounded down to powers of two and swapped if given in
    /// the wrong order. The current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: i32, max_zoom: i32) {
        let (lo, hi) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = floor_pow2(lo);
        self.max_zoom = floor_pow2(hi);
        self.set_zoom(self.zoom);
    }

    /// Size of the mask image in mask pixels.
    #[must_use]
    pub fn mask_size(&self) -> IntSize {
        self.mask_size
    }

    /// Size of the zoomed world, `mask_size * zoom`.
    #[must_use]
    pub fn world_size(&self) -> IntSize {
        self.world_size
    }

    /// Size of the visible canvas window.
    #[must_use]
    pub fn canvas_size(&self) -> IntSize {
        self.canvas_size
    }

    /// World-space point at the center of the canvas.
    #[must_use]
    pub fn camera(&self) -> IntPoint {
        self.camera
    }

    /// Visible world-space rectangle.
    #[must_use]
    pub fn crop_world(&self) -> IntRect {
        self.crop_world
    }

    /// Mask-space rectangle covering [`Viewport::crop_world`].
    ///
    /// Its origin is `floor(crop_world.origin / zoom)`. When the world crop
    /// starts on a block boundary the extent is `ceil(crop_world.size /
    /// zoom)`; otherwise it includes the partially visible block on each
    /// side.
    #[must_use]
    pub fn crop_mask(&self) -> IntRect {
        self.crop_mask
    }

    /// Screen-space position of the world crop's top-left corner.
    #[must_use]
    pub fn crop_screen(&self) -> IntPoint {
        self.crop_screen
    }

    /// World-space position of the canvas' top-left corner.
    ///
    /// This is negative when the world is smaller than the canvas.
    #[must_use]
    pub fn canvas_world(&self) -> IntPoint {
        self.canvas_world
    }

    /// Visible world-space rectangle as a kurbo rectangle.
    #[must_use]
    pub fn crop_world_rect(&self) -> Rect {
        self.crop_world.to_rect()
    }

    /// Moves the camera to a world-space point, clamped to the world bounds.
    ///
    /// Returns `true` if the clamped camera actually moved; derived crops are
    /// only recomputed in that case.
    pub fn set_camera(&mut self, camera: IntPoint) -> bool {
        let old = self.camera;
        self.camera = camera;
        self.clamp_camera();
        if self.camera == old {
            return false;
        }
        self.derive_space_vars();
        true
    }

    /// Moves the camera by a world-space delta.
    pub fn move_camera(&mut self, dx: i32, dy: i32) -> bool {
        self.set_camera(IntPoint::new(self.camera.x + dx, self.camera.y + dy))
    }

    /// Changes the canvas size, keeping the camera where possible.
    pub fn resize_canvas(&mut self, canvas_size: IntSize) {
        self.canvas_size = canvas_size;
        // The crop size must be known before the camera can be clamped.
        self.derive_world_crop();
        self.clamp_camera();
        self.derive_space_vars();
    }

    /// Sets the zoom factor.
    ///
    /// The value is clamped into the zoom limits and rounded down to a power
    /// of two. The camera keeps its world coordinates and is re-clamped
    /// against the new world size. Returns `true` if the zoom changed.
    pub fn set_zoom(&mut self, zoom: i32) -> bool {
        let zoom = self.normalize_zoom(zoom);
        if zoom == self.zoom {
            return false;
        }
        self.apply_zoom(zoom, self.camera);
        true
    }

    /// Zooms while keeping the world point under `anchor` (screen space) fixed.
    ///
    /// The world point under the anchor is scaled by `new / old`, and the
    /// camera moves so the anchor still covers it. Zooming in and back out
    /// around the same anchor is exact as long as the camera did not hit the
    /// world bounds in between.
    pub fn zoom_about(&mut self, anchor: IntPoint, zoom: i32) -> bool {
        let zoom = self.normalize_zoom(zoom);
        if zoom == self.zoom {
            return false;
        }
        let old = i64::from(self.zoom);
        let new = i64::from(zoom);
        let world_x = anchor.x - self.crop_screen.x + self.crop_world.x;
        let world_y = anchor.y - self.crop_screen.y + self.crop_world.y;
        let offset_x = world_x - self.camera.x;
        let offset_y = world_y - self.camera.y;
        let scaled_x = scale_floor(world_x, new, old);
        let scaled_y = scale_floor(world_y, new, old);
        self.apply_zoom(
            zoom,
            IntPoint::new(scaled_x - offset_x, scaled_y - offset_y),
        );
        true
    }

    /// Next zoom level when zooming in one step, limited by the maximum.
    #[must_use]
    pub fn zoom_in_step(&self) -> i32 {
        self.normalize_zoom(self.zoom.saturating_mul(2))
    }

    /// Next zoom level when zooming out one step, limited by the minimum.
    #[must_use]
    pub fn zoom_out_step(&self) -> i32 {
        self.normalize_zoom(self.zoom / 2)
    }

    /// Maps a screen-space pixel to the mask pixel shown there.
    ///
    /// This is the exact inverse of the render mapping: frame pixel `i` of
    /// the world crop shows mask pixel `floor((crop_world.x + i) / zoom)`.
    /// Points outside the visible crop map outside it in mask space as well,
    /// possibly outside the mask.
    ///
    /// At zoom 1 this equals
    /// `screen - crop_screen + max(0, camera - canvas / 2)`. At higher zooms
    /// that form adds an unscaled world offset to a scaled screen offset and
    /// drifts away from the pixel actually drawn under the pointer, so the
    /// two agree only at zoom 1.
    #[must_use]
    pub fn screen_to_mask(&self, screen: IntPoint) -> IntPoint {
        let world_x = screen.x - self.crop_screen.x + self.crop_world.x;
        let world_y = screen.y - self.crop_screen.y + self.crop_world.y;
        IntPoint::new(world_x.div_euclid(self.zoom), world_y.div_euclid(self.zoom))
    }

    /// Like [`Viewport::screen_to_mask`], flooring a fractional pointer position first.
    #[must_use]
    pub fn screen_point_to_mask(&self, screen: Point) -> IntPoint {
        self.screen_to_mask(IntPoint::from_point_floor(screen))
    }

    /// Screen position of the top-left corner of a mask pixel's block.
    #[must_use]
    pub fn mask_to_screen(&self, mask: IntPoint) -> IntPoint {
        IntPoint::new(
            mask.x * self.zoom - self.crop_world.x + self.crop_screen.x,
            mask.y * self.zoom - self.crop_world.y + self.crop_screen.y,
        )
    }

    /// Screen-space outline of a brush of `radius` mask pixels at `screen`.
    ///
    /// The radius scales with the zoom so the outline matches the painted disc.
    #[must_use]
    pub fn brush_outline(&self, screen: Point, radius: i32) -> Circle {
        Circle::new(screen, f64::from(radius) * f64::from(self.zoom))
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            mask_size: self.mask_size,
            world_size: self.world_size,
            canvas_size: self.canvas_size,
            camera: self.camera,
            crop_world: self.crop_world,
            crop_mask: self.crop_mask,
            crop_screen: self.crop_screen,
        }
    }

    fn normalize_zoom(&self, zoom: i32) -> i32 {
        floor_pow2(zoom.clamp(self.min_zoom, self.max_zoom))
    }

    fn apply_zoom(&mut self, zoom: i32, camera: IntPoint) {
        self.zoom = zoom;
        self.world_size = self.mask_size.scale(zoom);
        self.camera = camera;
        self.derive_world_crop();
        self.clamp_camera();
        self.derive_space_vars();
    }

    fn clamp_camera(&mut self) {
        self.camera.x = clamp_axis(self.camera.x, self.crop_world.width, self.world_size.width);
        self.camera.y = clamp_axis(
            self.camera.y,
            self.crop_world.height,
            self.world_size.height,
        );
    }

    fn derive_world_crop(&mut self) {
        let width = self.world_size.width.min(self.canvas_size.width);
        let height = self.world_size.height.min(self.canvas_size.height);
        self.crop_world = IntRect::new(
            self.camera.x - width / 2,
            self.camera.y - height / 2,
            width,
            height,
        );
    }

    fn derive_space_vars(&mut self) {
        self.derive_world_crop();
        self.canvas_world = IntPoint::new(
            self.camera.x - self.canvas_size.width / 2,
            self.camera.y - self.canvas_size.height / 2,
        );

        let z = self.zoom;
        let cw = self.crop_world;
        self.crop_mask = IntRect::from_edges(
            cw.x.div_euclid(z),
            cw.y.div_euclid(z),
            (cw.max_x() + z - 1).div_euclid(z),
            (cw.max_y() + z - 1).div_euclid(z),
        );

        self.crop_screen = IntPoint::new(cw.x - self.canvas_world.x, cw.y - self.canvas_world.y);
    }
}

/// Keeps a crop of `crop` pixels centered on `c` inside `0..world`.
fn clamp_axis(c: i32, crop: i32, world: i32) -> i32 {
    let lo = crop / 2;
    let hi = world - (crop + 1) / 2;
    c.min(hi).max(lo)
}

fn floor_pow2(zoom: i32) -> i32 {
    if zoom <= 1 {
        return 1;
    }
    1 << (31 - zoom.leading_zeros())
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "world coordinates scaled by at most the zoom range stay within i32"
)]
fn scale_floor(value: i32, num: i64, den: i64) -> i32 {
    (i64::from(value) * num).div_euclid(den) as i32
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportDebugInfo {
    /// Current zoom factor.
    pub zoom: i32,
    /// Minimum zoom factor.
    pub min_zoom: i32,
    /// Maximum zoom factor.
    pub max_zoom: i32,
    /// Mask size in mask pixels.
    pub mask_size: IntSize,
    /// World size in world pixels.
    pub world_size: IntSize,
    /// Canvas size in screen pixels.
    pub canvas_size: IntSize,
    /// Camera position in world space.
    pub camera: IntPoint,
    /// Visible world rectangle.
    pub crop_world: IntRect,
    /// Mask rectangle covering the visible world rectangle.
    pub crop_mask: IntRect,
    /// Screen position of the world crop.
    pub crop_screen: IntPoint,
}
