// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use strata_view::IntSize;

use crate::{Layer, LayerError, LayerStack, Mask, Rgb};

/// Name and tint of one layer in a [`StackTemplate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerTemplate {
    /// Display name.
    pub name: String,
    /// Tint color.
    pub color: Rgb,
}

impl LayerTemplate {
    /// Creates a layer description.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Settings for a new, blank project.
///
/// The default is a 640×360 terrain map: an `Ocean` background under
/// `Lowlands`, `Hills` and `Mountains` layers.
///
/// ```rust
/// use strata_layers::StackTemplate;
///
/// let stack = StackTemplate::default().build().unwrap();
/// assert_eq!(stack.len(), 3);
/// assert_eq!(stack.background().to_string(), "#3399ff");
/// assert_eq!(stack.layers()[2].name(), "Mountains");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackTemplate {
    /// Size of every mask.
    pub mask_size: IntSize,
    /// Background name.
    pub background_name: String,
    /// Background color.
    pub background: Rgb,
    /// Layers, bottom first.
    pub layers: Vec<LayerTemplate>,
}

impl Default for StackTemplate {
    fn default() -> Self {
        Self {
            mask_size: IntSize::new(640, 360),
            background_name: "Ocean".into(),
            background: Rgb::new(0x33, 0x99, 0xff),
            layers: vec![
                LayerTemplate::new("Lowlands", Rgb::new(0xff, 0xff, 0xb3)),
                LayerTemplate::new("Hills", Rgb::new(0xb3, 0xff, 0x99)),
                LayerTemplate::new("Mountains", Rgb::new(0xdf, 0xbf, 0x9f)),
            ],
        }
    }
}

impl StackTemplate {
    /// Returns this template with a different mask size.
    #[must_use]
    pub fn with_mask_size(mut self, size: IntSize) -> Self {
        self.mask_size = size;
        self
    }

    /// Returns this template with one more layer on top.
    #[must_use]
    pub fn with_layer(mut self, name: impl Into<String>, color: Rgb) -> Self {
        self.layers.push(LayerTemplate::new(name, color));
        self
    }

    /// Builds a stack of blank masks, with the bottom layer active.
    pub fn build(&self) -> Result<LayerStack, LayerError> {
        let layers = self
            .layers
            .iter()
            .map(|t| Layer::new(t.name.clone(), t.color, Mask::new(self.mask_size)))
            .collect();
        LayerStack::new(self.background_name.clone(), self.background, layers)
    }
}
