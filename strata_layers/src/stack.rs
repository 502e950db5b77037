// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use strata_view::IntSize;

use crate::{Layer, LayerError, Mask, Rgb};

/// An ordered stack of tinted masks over a solid background.
///
/// Index `0` is the bottom layer. The stack always holds at least one layer,
/// every mask has the same size, and the active index is always valid.
///
/// Structural operations ([`insert`](Self::insert), [`remove`](Self::remove),
/// [`rename`](Self::rename), [`recolor`](Self::recolor)) only touch the stack
/// itself. Callers that keep undo history snapshot the stack before calling
/// them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerStack {
    background_name: String,
    background: Rgb,
    layers: Vec<Layer>,
    active: usize,
}

impl LayerStack {
    /// Creates a stack from its background and layers.
    ///
    /// The first layer becomes active. Fails with [`LayerError::Empty`] when
    /// `layers` is empty and [`LayerError::SizeMismatch`] when the masks do
    /// not all share one size.
    pub fn new(
        background_name: impl Into<String>,
        background: Rgb,
        layers: Vec<Layer>,
    ) -> Result<Self, LayerError> {
        let Some(first) = layers.first() else {
            return Err(LayerError::Empty);
        };
        let expected = first.mask().size();
        if let Some((index, layer)) = layers
            .iter()
            .enumerate()
            .find(|(_, l)| l.mask().size() != expected)
        {
            return Err(LayerError::SizeMismatch {
                index,
                expected,
                actual: layer.mask().size(),
            });
        }
        Ok(Self {
            background_name: background_name.into(),
            background,
            layers,
            active: 0,
        })
    }

    /// Number of layers (never zero).
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; a stack holds at least one layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Size shared by every mask in the stack.
    #[must_use]
    pub fn mask_size(&self) -> IntSize {
        self.layers[0].mask().size()
    }

    /// All layers, bottom first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer at `index`.
    pub fn layer(&self, index: usize) -> Result<&Layer, LayerError> {
        self.layers.get(index).ok_or(LayerError::IndexOutOfBounds {
            index,
            len: self.layers.len(),
        })
    }

    /// Index of the active layer.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active layer.
    #[must_use]
    pub fn active_layer(&self) -> &Layer {
        &self.layers[self.active]
    }

    /// Mutable access to the active layer's mask, for painting.
    ///
    /// The mask must keep its size; replace pixels, not the mask.
    pub fn active_mask_mut(&mut self) -> &mut Mask {
        self.layers[self.active].mask_mut()
    }

    /// Background color.
    #[must_use]
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Background display name.
    #[must_use]
    pub fn background_name(&self) -> &str {
        &self.background_name
    }

    /// Changes the background color.
    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    /// Renames the background.
    pub fn rename_background(&mut self, name: impl Into<String>) {
        self.background_name = name.into();
    }

    /// Makes `index` the active layer and forces it visible.
    pub fn set_active(&mut self, index: usize) -> Result<(), LayerError> {
        self.check(index)?;
        self.active = index;
        self.layers[index].set_visible(true);
        Ok(())
    }

    /// Shows or hides a layer. Hiding the active layer is allowed.
    pub fn set_visibility(&mut self, index: usize, visible: bool) -> Result<(), LayerError> {
        self.check(index)?;
        self.layers[index].set_visible(visible);
        Ok(())
    }

    /// Flips a layer's visibility and returns the new state.
    pub fn toggle_visibility(&mut self, index: usize) -> Result<bool, LayerError> {
        self.check(index)?;
        let layer = &mut self.layers[index];
        let visible = !layer.is_visible();
        layer.set_visible(visible);
        Ok(visible)
    }

    /// Inserts a blank layer at `index` (`0..=len`) and makes it active.
    ///
    /// The new layer is visible, named `Layer N` where `N` is the new layer
    /// count, and tinted with the average of its two neighbors' colors, or
    /// with the single neighbor's color at either end of the stack.
    pub fn insert(&mut self, index: usize) -> Result<(), LayerError> {
        let len = self.layers.len();
        if index > len {
            return Err(LayerError::IndexOutOfBounds { index, len });
        }
        let color = match (
            index.checked_sub(1).map(|i| &self.layers[i]),
            self.layers.get(index),
        ) {
            (Some(below), Some(above)) => below.color().average(above.color()),
            (Some(only), None) | (None, Some(only)) => only.color(),
            // Unreachable while the stack is non-empty.
            (None, None) => self.background,
        };
        let layer = Layer::new(
            format!("Layer {}", len + 1),
            color,
            Mask::new(self.mask_size()),
        );
        self.layers.insert(index, layer);
        self.active = index;
        Ok(())
    }

    /// Removes the layer at `index` and returns it.
    ///
    /// Removing the active layer makes layer `0` active; removing a layer
    /// below the active one keeps the same layer active. The last remaining
    /// layer cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<Layer, LayerError> {
        self.check(index)?;
        if self.layers.len() == 1 {
            return Err(LayerError::LastLayer);
        }
        let removed = self.layers.remove(index);
        if index == self.active {
            self.active = 0;
        } else if index < self.active {
            self.active -= 1;
        }
        Ok(removed)
    }

    /// Renames a layer.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), LayerError> {
        self.check(index)?;
        self.layers[index].set_name(name.into());
        Ok(())
    }

    /// Changes a layer's tint.
    pub fn recolor(&mut self, index: usize, color: Rgb) -> Result<(), LayerError> {
        self.check(index)?;
        self.layers[index].set_color(color);
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), LayerError> {
        if index < self.layers.len() {
            Ok(())
        } else {
            Err(LayerError::IndexOutOfBounds {
                index,
                len: self.layers.len(),
            })
        }
    }
}
