// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{Mask, Rgb};

/// One tinted mask in a [`LayerStack`](crate::LayerStack).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    name: String,
    color: Rgb,
    mask: Mask,
    visible: bool,
}

impl Layer {
    /// Creates a visible layer.
    #[must_use]
    pub fn new(name: impl Into<String>, color: Rgb, mask: Mask) -> Self {
        Self {
            name: name.into(),
            color,
            mask,
            visible: true,
        }
    }

    /// Returns this layer with the given visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tint color.
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Coverage mask.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Whether the layer is shown in normal (non-export) renders.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn mask_mut(&mut self) -> &mut Mask {
        &mut self.mask
    }
}
