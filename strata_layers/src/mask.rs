// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use strata_view::{IntPoint, IntRect, IntSize};

use crate::LayerError;

/// A grayscale coverage mask, one byte per pixel, row-major.
///
/// The pixel buffer is shared copy-on-write: cloning a mask is cheap, and the
/// first mutable access after a clone copies the buffer. Clones therefore
/// behave as independent deep copies.
#[derive(Clone, PartialEq, Eq)]
pub struct Mask {
    size: IntSize,
    data: Arc<Vec<u8>>,
}

impl core::fmt::Debug for Mask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mask")
            .field("size", &self.size)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

impl Mask {
    /// Creates a blank (all zero) mask.
    #[must_use]
    pub fn new(size: IntSize) -> Self {
        Self::filled(size, 0)
    }

    /// Creates a mask with every pixel set to `value`.
    #[must_use]
    pub fn filled(size: IntSize, value: u8) -> Self {
        Self {
            size,
            data: Arc::new(vec![value; size.area()]),
        }
    }

    /// Wraps an existing buffer of exactly `width * height` bytes.
    pub fn from_data(size: IntSize, data: Vec<u8>) -> Result<Self, LayerError> {
        if data.len() != size.area() {
            return Err(LayerError::DataLength {
                expected: size.area(),
                actual: data.len(),
            });
        }
        Ok(Self {
            size,
            data: Arc::new(data),
        })
    }

    /// Mask extent in pixels.
    #[must_use]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Mask width in pixels.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    /// Mask height in pixels.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// The rectangle `0..width` by `0..height`.
    #[must_use]
    pub fn bounds(&self) -> IntRect {
        IntRect::from_origin_size(IntPoint::ORIGIN, self.size)
    }

    /// Raw pixel bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable pixel bytes. Copies the buffer first if it is shared.
    pub fn data_mut(&mut self) -> &mut [u8] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Pixel value at `pt`, or `None` outside the mask.
    #[must_use]
    pub fn get(&self, pt: IntPoint) -> Option<u8> {
        self.index(pt).map(|i| self.data[i])
    }

    /// Sets the pixel at `pt`. Returns `false` if `pt` is outside the mask.
    pub fn set(&mut self, pt: IntPoint, value: u8) -> bool {
        match self.index(pt) {
            Some(i) => {
                self.data_mut()[i] = value;
                true
            }
            None => false,
        }
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside `0..height`.
    #[must_use]
    pub fn row(&self, y: i32) -> &[u8] {
        let (start, end) = self.row_span(y);
        &self.data[start..end]
    }

    /// One mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside `0..height`.
    pub fn row_mut(&mut self, y: i32) -> &mut [u8] {
        let (start, end) = self.row_span(y);
        &mut self.data_mut()[start..end]
    }

    /// Sets every pixel to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data_mut().fill(value);
    }

    /// Returns `true` if both masks currently share one pixel buffer.
    #[must_use]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Number of pixels with a non-zero value.
    #[must_use]
    pub fn coverage(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    fn index(&self, pt: IntPoint) -> Option<usize> {
        if !self.bounds().contains(pt) {
            return None;
        }
        Some(offset(pt.y, self.size.width) + offset(pt.x, 1))
    }

    fn row_span(&self, y: i32) -> (usize, usize) {
        assert!(
            (0..self.size.height).contains(&y),
            "row {y} outside mask of height {}",
            self.size.height
        );
        let start = offset(y, self.size.width);
        (start, start + offset(self.size.width, 1))
    }
}

/// `a * b` as a buffer offset; both factors are non-negative here.
fn offset(a: i32, b: i32) -> usize {
    a as usize * b as usize
}
