// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Layers: the layer stack model.
//!
//! A Strata project is a solid background under an ordered stack of layers.
//! Each layer is a grayscale [`Mask`] (coverage 0–255 per pixel) tinted by an
//! [`Rgb`] color. This crate provides:
//! - [`Mask`]: a copy-on-write pixel buffer, so cloning a whole stack for an
//!   undo snapshot only copies the masks that are later painted.
//! - [`LayerStack`]: active-layer tracking, visibility, and structural edits
//!   (insert, remove, rename, recolor) with index validation.
//! - [`StackTemplate`]: settings for a new blank project.
//! - [`parse_hex_color`]: `#rgb` / `#rrggbb` parsing for user-entered colors.
//!
//! ## Example
//!
//! ```rust
//! use strata_layers::{LayerError, StackTemplate};
//!
//! let mut stack = StackTemplate::default().build().unwrap();
//! assert_eq!(stack.len(), 3);
//!
//! // A new layer between "Lowlands" and "Hills" blends their tints.
//! stack.insert(1).unwrap();
//! assert_eq!(stack.active_index(), 1);
//! assert_eq!(stack.active_layer().color().to_string(), "#d9ffa6");
//!
//! // Invalid indices are reported, never clamped.
//! assert_eq!(
//!     stack.remove(9),
//!     Err(LayerError::IndexOutOfBounds { index: 9, len: 4 })
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod error;
mod layer;
mod mask;
mod stack;
mod template;

pub use color::{Rgb, parse_hex_color};
pub use error::{ColorParseError, LayerError};
pub use layer::Layer;
pub use mask::Mask;
pub use stack::LayerStack;
pub use template::{LayerTemplate, StackTemplate};
