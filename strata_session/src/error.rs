// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use strata_layers::LayerError;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The operation needs a loaded project.
    NotLoaded,
    /// The layer stack refused the operation.
    Layer(LayerError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotLoaded => f.write_str("no project is loaded"),
            Self::Layer(err) => write!(f, "layer operation failed: {err}"),
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NotLoaded => None,
            Self::Layer(err) => Some(err),
        }
    }
}

impl From<LayerError> for SessionError {
    fn from(err: LayerError) -> Self {
        Self::Layer(err)
    }
}
