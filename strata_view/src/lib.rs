// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata View: integer viewport over a zoomed mask image.
//!
//! Strata edits masks whose pixels are shown as `zoom × zoom` blocks on a
//! canvas window. This crate models the three integer coordinate spaces that
//! arise from that setup and the mappings between them:
//! - **mask space**: native mask pixels.
//! - **world space**: mask space scaled by the integer zoom factor.
//! - **screen space**: pixels of the visible canvas window.
//!
//! It does **not** own any pixel data or rendering backend. Callers are
//! expected to:
//! - Feed canvas resizes, pans and zoom requests into a [`Viewport`].
//! - Read back the crop rectangles to decide which mask pixels to composite
//!   and where to place them on screen.
//! - Use [`Viewport::screen_to_mask`] to turn pointer positions into brush
//!   sample coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use strata_view::{IntPoint, IntRect, IntSize, Viewport};
//!
//! let mut view = Viewport::new();
//! view.load(IntSize::new(640, 360), IntSize::new(200, 100));
//!
//! // The camera starts in the middle of the world.
//! assert_eq!(view.camera(), IntPoint::new(320, 180));
//! assert_eq!(view.crop_world(), IntRect::new(220, 130, 200, 100));
//!
//! // Zoom in around the canvas center; the world point under it stays put.
//! view.zoom_about(IntPoint::new(100, 50), 2);
//! assert_eq!(view.zoom(), 2);
//! assert_eq!(view.screen_to_mask(IntPoint::new(100, 50)), IntPoint::new(320, 180));
//! ```
//!
//! ## Design notes
//!
//! - Zoom factors are powers of two within configurable limits (`1..=8` by
//!   default).
//! - The camera is always clamped so the visible crop stays inside the world.
//!   When the world is smaller than the canvas along an axis, the whole world
//!   is shown centered on the canvas and the camera is pinned on that axis.
//! - All positions are integers; fractional pointer positions are floored.
//!
//! This crate is `no_std`.

#![no_std]

mod geom;
mod viewport;

pub use geom::{IntPoint, IntRect, IntSize};
pub use viewport::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, Viewport, ViewportDebugInfo};
