// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use strata_raster::{BrushSettings, ERASE_VALUE, PAINT_VALUE};
use strata_view::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, IntSize};

/// Construction-time settings for a [`Session`](crate::Session).
///
/// Every field has a default; the `with_*` methods override one at a time.
///
/// ```rust
/// use strata_session::SessionConfig;
/// use strata_view::IntSize;
///
/// let config = SessionConfig::default()
///     .with_canvas_size(IntSize::new(1280, 720))
///     .with_history_capacity(50);
/// assert_eq!(config.zoom_limits, (1, 8));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Initial canvas (window) size in screen pixels.
    pub canvas_size: IntSize,
    /// Inclusive `(min, max)` zoom factors, rounded to powers of two.
    pub zoom_limits: (i32, i32),
    /// Maximum number of undo snapshots.
    pub history_capacity: usize,
    /// Initial brush radius and its limits.
    pub brush: BrushSettings,
    /// Mask value written by painting.
    pub paint_value: u8,
    /// Mask value written by erasing.
    pub erase_value: u8,
    /// Zoom multiplier applied per wheel step. Values below 2 act as 2.
    pub wheel_zoom_factor: i32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_size: IntSize::new(640, 360),
            zoom_limits: (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
            history_capacity: strata_history::DEFAULT_CAPACITY,
            brush: BrushSettings::default(),
            paint_value: PAINT_VALUE,
            erase_value: ERASE_VALUE,
            wheel_zoom_factor: 2,
        }
    }
}

impl SessionConfig {
    /// Sets the initial canvas size.
    #[must_use]
    pub fn with_canvas_size(mut self, size: IntSize) -> Self {
        self.canvas_size = size;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min: i32, max: i32) -> Self {
        self.zoom_limits = (min, max);
        self
    }

    /// Sets the undo depth.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the brush settings.
    #[must_use]
    pub fn with_brush(mut self, brush: BrushSettings) -> Self {
        self.brush = brush;
        self
    }

    /// Sets the values written by painting and erasing.
    #[must_use]
    pub fn with_stroke_values(mut self, paint: u8, erase: u8) -> Self {
        self.paint_value = paint;
        self.erase_value = erase;
        self
    }

    /// Sets the zoom multiplier per wheel step; values below 2 are raised to 2.
    #[must_use]
    pub fn with_wheel_zoom_factor(mut self, factor: i32) -> Self {
        self.wheel_zoom_factor = factor.max(2);
        self
    }
}
