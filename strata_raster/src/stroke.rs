// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke state: turn a sequence of pointer samples into a continuous line.
//!
//! ## Usage
//!
//! 1) Start a stroke with [`StrokeState::begin`], choosing paint or erase.
//! 2) Before the first sample, check [`StrokeState::needs_snapshot`] and save
//!    undo state if it returns `true`. It does so exactly once per stroke.
//! 3) Feed every pointer sample (in mask space) to [`StrokeState::sample`].
//!    The first sample stamps a disc; later ones sweep a capsule from the
//!    previous sample, so fast pointer motion leaves no gaps.
//! 4) End the stroke with [`StrokeState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use strata_layers::Mask;
//! use strata_raster::{Stroke, StrokeState};
//! use strata_view::{IntPoint, IntSize};
//!
//! let mut mask = Mask::new(IntSize::new(32, 32));
//! let mut state = StrokeState::default();
//!
//! state.begin(Stroke::paint(2));
//! assert!(state.needs_snapshot());
//! state.sample(&mut mask, IntPoint::new(4, 4));
//! assert!(!state.needs_snapshot());
//! state.sample(&mut mask, IntPoint::new(20, 4));
//! state.end();
//!
//! // The whole segment between the two samples is covered.
//! assert_eq!(mask.get(IntPoint::new(12, 4)), Some(255));
//! ```

use strata_layers::Mask;
use strata_view::{IntPoint, IntRect};

use crate::{fill_capsule, fill_disc};

/// Mask value written by painting.
pub const PAINT_VALUE: u8 = 255;
/// Mask value written by erasing.
pub const ERASE_VALUE: u8 = 0;

/// Parameters of one stroke: the value written and the brush radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    /// Value written into every covered pixel.
    pub value: u8,
    /// Brush radius in mask pixels.
    pub radius: i32,
}

impl Stroke {
    /// A stroke writing `value` with the given radius.
    #[must_use]
    pub const fn new(value: u8, radius: i32) -> Self {
        Self { value, radius }
    }

    /// A painting stroke (writes [`PAINT_VALUE`]).
    #[must_use]
    pub const fn paint(radius: i32) -> Self {
        Self::new(PAINT_VALUE, radius)
    }

    /// An erasing stroke (writes [`ERASE_VALUE`]).
    #[must_use]
    pub const fn erase(radius: i32) -> Self {
        Self::new(ERASE_VALUE, radius)
    }
}

/// Tracks an in-progress stroke between pointer samples.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrokeState {
    stroke: Option<Stroke>,
    last: Option<IntPoint>,
}

impl StrokeState {
    /// Starts a new stroke, discarding any previous one.
    pub fn begin(&mut self, stroke: Stroke) {
        self.stroke = Some(stroke);
        self.last = None;
    }

    /// Applies one sample at `pt` (mask space) and returns the touched rectangle.
    ///
    /// Returns `None` when no stroke is active.
    pub fn sample(&mut self, mask: &mut Mask, pt: IntPoint) -> Option<IntRect> {
        let stroke = self.stroke?;
        let dirty = match self.last {
            None => fill_disc(mask, pt, stroke.radius, stroke.value),
            Some(last) => {
                let band = fill_capsule(mask, last, pt, stroke.radius, stroke.value);
                band.union(fill_disc(mask, pt, stroke.radius, stroke.value))
            }
        };
        self.last = Some(pt);
        Some(dirty)
    }

    /// Ends the stroke. Returns `true` if a stroke was active.
    pub fn end(&mut self) -> bool {
        self.last = None;
        self.stroke.take().is_some()
    }

    /// Returns `true` while a stroke is active.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Returns `true` if a stroke is active and has not been sampled yet.
    #[must_use]
    pub fn needs_snapshot(&self) -> bool {
        self.stroke.is_some() && self.last.is_none()
    }

    /// The active stroke's parameters.
    #[must_use]
    pub fn stroke(&self) -> Option<Stroke> {
        self.stroke
    }

    /// Mask position of the previous sample in the active stroke.
    #[must_use]
    pub fn last_point(&self) -> Option<IntPoint> {
        self.last
    }
}
