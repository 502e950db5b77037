// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Raster: hard-edged brush strokes on grayscale masks.
//!
//! - [`fill_disc`] and [`fill_capsule`] write a constant value into every
//!   mask pixel covered by a disc or a swept disc.
//! - [`StrokeState`] turns a sequence of pointer samples into a continuous
//!   stroke and tells the caller when to save undo state.
//! - [`BrushSettings`] holds the clamped brush radius.
//!
//! All coordinates are mask pixels; converting pointer positions is the
//! job of [`strata_view::Viewport`].
//!
//! This crate is `no_std`.

#![no_std]

mod brush;
mod settings;
pub mod stroke;

pub use brush::{fill_capsule, fill_disc};
pub use settings::{BrushSettings, DEFAULT_MAX_RADIUS, DEFAULT_MIN_RADIUS, DEFAULT_RADIUS};
pub use stroke::{ERASE_VALUE, PAINT_VALUE, Stroke, StrokeState};
