// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use strata_view::IntSize;

/// Errors reported by [`LayerStack`](crate::LayerStack) and [`Mask`](crate::Mask) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerError {
    /// A layer index was outside `0..len` (or `0..=len` for insertion).
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of layers at the time of the call.
        len: usize,
    },
    /// Removing the only remaining layer was refused.
    LastLayer,
    /// A stack was constructed without any layers.
    Empty,
    /// A layer's mask size differs from the first layer's.
    SizeMismatch {
        /// Index of the mismatched layer.
        index: usize,
        /// Size shared by the stack.
        expected: IntSize,
        /// Size of the offending mask.
        actual: IntSize,
    },
    /// A mask buffer does not hold `width * height` bytes.
    DataLength {
        /// Bytes required by the mask size.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "layer index {index} is out of bounds for {len} layers")
            }
            Self::LastLayer => f.write_str("cannot remove the last remaining layer"),
            Self::Empty => f.write_str("a layer stack needs at least one layer"),
            Self::SizeMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "layer {index} has a {}x{} mask, expected {}x{}",
                actual.width, actual.height, expected.width, expected.height
            ),
            Self::DataLength { expected, actual } => {
                write!(f, "mask buffer holds {actual} bytes, expected {expected}")
            }
        }
    }
}

impl core::error::Error for LayerError {}

/// Error returned when a string is not a valid 3- or 6-digit hex color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    /// The digit count (after an optional leading `#`) was neither 3 nor 6.
    Length {
        /// Number of characters after the optional `#`.
        len: usize,
    },
    /// The digits were not all hexadecimal.
    InvalidDigit,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { len } => {
                write!(f, "expected 3 or 6 hex digits, found {len} characters")
            }
            Self::InvalidDigit => f.write_str("hex color contains a non-hexadecimal digit"),
        }
    }
}

impl core::error::Error for ColorParseError {}
