// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default brush radius in mask pixels.
pub const DEFAULT_RADIUS: i32 = 10;
/// Default smallest brush radius.
pub const DEFAULT_MIN_RADIUS: i32 = 2;
/// Default largest brush radius.
pub const DEFAULT_MAX_RADIUS: i32 = 40;

/// Brush radius with inclusive limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrushSettings {
    radius: i32,
    min_radius: i32,
    max_radius: i32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

impl BrushSettings {
    /// Creates settings with the given limits; the radius is clamped into them.
    ///
    /// Limits given in the wrong order are swapped, and negative limits are
    /// raised to zero.
    #[must_use]
    pub fn new(radius: i32, min_radius: i32, max_radius: i32) -> Self {
        let lo = min_radius.min(max_radius).max(0);
        let hi = min_radius.max(max_radius).max(0);
        Self {
            radius: radius.clamp(lo, hi),
            min_radius: lo,
            max_radius: hi,
        }
    }

    /// Current radius.
    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Inclusive `(min, max)` radius limits.
    #[must_use]
    pub fn limits(&self) -> (i32, i32) {
        (self.min_radius, self.max_radius)
    }

    /// Sets the radius, clamped into the limits, and returns the stored value.
    pub fn set_radius(&mut self, radius: i32) -> i32 {
        self.radius = radius.clamp(self.min_radius, self.max_radius);
        self.radius
    }
}
