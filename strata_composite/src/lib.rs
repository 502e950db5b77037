// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Composite: turn a layer stack into RGBA8 frames.
//!
//! The composite of a pixel is defined bottom-up:
//! 1. The background color.
//! 2. Each contributing layer below the active one, in ascending order,
//!    as its tint with the mask value as alpha, blended source-over.
//! 3. The active layer, which always contributes.
//! 4. The contributing layers above the active one, in ascending order.
//!
//! A layer other than the active one contributes when it is visible, or
//! unconditionally in `show_all` mode (used for exports).
//!
//! - [`Compositor::render_crop`] renders what the [`strata_view::Viewport`]
//!   shows, caching everything but the active layer between brush samples.
//! - [`render_full`] renders the entire mask at native resolution.
//!
//! ## Example
//!
//! ```rust
//! use strata_composite::{Compositor, Frame, render_full};
//! use strata_layers::StackTemplate;
//! use strata_view::{IntSize, Viewport};
//!
//! let stack = StackTemplate::default().build().unwrap();
//! let mut view = Viewport::new();
//! view.load(stack.mask_size(), IntSize::new(200, 100));
//!
//! let mut compositor = Compositor::new();
//! let frame = compositor.render_crop(&stack, &view, false);
//! assert_eq!(frame.size(), IntSize::new(200, 100));
//! // Blank masks show only the background.
//! assert_eq!(frame.pixel(0, 0), Some([0x33, 0x99, 0xff, 255]));
//!
//! let export: Frame = render_full(&stack, true);
//! assert_eq!(export.size(), stack.mask_size());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod blend;
mod compositor;
mod frame;

pub use compositor::{Compositor, render_full};
pub use frame::Frame;
