// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use peniko::{ImageAlphaType, ImageFormat};
use strata_view::{IntPoint, IntRect, IntSize};

/// A rendered RGBA8 image and where it goes on screen.
///
/// Pixels are row-major, four bytes each, with straight (unpremultiplied)
/// alpha. Composites are always opaque.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    origin: IntPoint,
    size: IntSize,
    data: Vec<u8>,
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame")
            .field("origin", &self.origin)
            .field("size", &self.size)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(IntPoint::ORIGIN, IntSize::ZERO)
    }
}

impl Frame {
    /// Pixel layout of [`Frame::data`].
    pub const FORMAT: ImageFormat = ImageFormat::Rgba8;
    /// Alpha interpretation of [`Frame::data`].
    pub const ALPHA_TYPE: ImageAlphaType = ImageAlphaType::Alpha;

    /// Creates a transparent frame.
    #[must_use]
    pub fn new(origin: IntPoint, size: IntSize) -> Self {
        Self {
            origin,
            size,
            data: vec![0; size.area() * 4],
        }
    }

    /// Screen position of the top-left pixel.
    #[must_use]
    pub fn origin(&self) -> IntPoint {
        self.origin
    }

    /// Frame extent in pixels.
    #[must_use]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Screen rectangle covered by the frame.
    #[must_use]
    pub fn screen_rect(&self) -> IntRect {
        IntRect::from_origin_size(self.origin, self.size)
    }

    /// Returns `true` if the frame has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// RGBA8 bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the frame, returning its RGBA8 bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)` relative to the frame origin.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = (y as usize * self.size.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Resizes and moves the frame, reusing the allocation.
    pub(crate) fn reset(&mut self, origin: IntPoint, size: IntSize) {
        self.origin = origin;
        self.size = size;
        self.data.clear();
        self.data.resize(size.area() * 4, 0);
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
