// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace hooks for session activity.
//!
//! The session does not log on its own. Embedders that want to know what it
//! is doing install a [`TraceSink`] with
//! [`Session::set_trace`](crate::Session::set_trace):
//! - [`TraceRecorder`] keeps every event in memory, which suits tests and
//!   debugging overlays.
//! - `LogTrace` (with the `log` feature) forwards events to the `log` facade
//!   at debug level.

use alloc::vec::Vec;
use core::fmt;

use strata_view::IntSize;

use crate::{Gesture, PointerButton};

/// A structural layer edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerOp {
    /// A layer was inserted at this index.
    Insert(usize),
    /// The layer at this index was removed.
    Remove(usize),
    /// The layer at this index was renamed.
    Rename(usize),
    /// The layer at this index got a new color.
    Recolor(usize),
    /// The background got a new color.
    Background,
    /// The background was renamed.
    RenameBackground,
}

/// Something notable that happened inside a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A project was loaded.
    Loaded {
        /// Size of every mask.
        mask_size: IntSize,
        /// Number of layers.
        layers: usize,
    },
    /// The project was unloaded.
    Unloaded,
    /// A paint or erase stroke started on a layer.
    StrokeBegan {
        /// Paint or erase.
        gesture: Gesture,
        /// Index of the painted layer.
        layer: usize,
    },
    /// The running stroke ended.
    StrokeEnded,
    /// A press or release was ignored because another gesture owns the pointer.
    GestureIgnored {
        /// The ignored button.
        button: PointerButton,
    },
    /// A stroke was refused because the active layer is hidden.
    HiddenLayerRejected {
        /// Index of the hidden active layer.
        layer: usize,
    },
    /// An undo snapshot was recorded.
    SnapshotPushed {
        /// Undo depth after the push.
        undo_len: usize,
    },
    /// The stack was restored from an undo snapshot.
    Undo,
    /// The stack was restored from a redo snapshot.
    Redo,
    /// A structural layer edit was applied.
    LayerOp(LayerOp),
    /// The zoom factor changed.
    Zoom {
        /// New zoom factor.
        zoom: i32,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded { mask_size, layers } => write!(
                f,
                "loaded {layers} layers of {}x{}",
                mask_size.width, mask_size.height
            ),
            Self::Unloaded => f.write_str("unloaded"),
            Self::StrokeBegan { gesture, layer } => {
                write!(f, "{gesture:?} stroke began on layer {layer}")
            }
            Self::StrokeEnded => f.write_str("stroke ended"),
            Self::GestureIgnored { button } => write!(f, "ignored {button:?} button"),
            Self::HiddenLayerRejected { layer } => {
                write!(f, "refused to paint hidden layer {layer}")
            }
            Self::SnapshotPushed { undo_len } => write!(f, "snapshot pushed, undo depth {undo_len}"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::LayerOp(op) => write!(f, "layer edit {op:?}"),
            Self::Zoom { zoom } => write!(f, "zoom {zoom}x"),
        }
    }
}

/// A callback sink for session trace events.
pub trait TraceSink {
    /// Called once per event, in the order the events happen.
    fn event(&mut self, event: &TraceEvent);
}

/// Keeps every traced event in memory.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for TraceRecorder {
    fn event(&mut self, event: &TraceEvent) {
        self.events.push(*event);
    }
}

/// Forwards trace events to the `log` facade at debug level.
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

#[cfg(feature = "log")]
impl TraceSink for LogTrace {
    fn event(&mut self, event: &TraceEvent) {
        log::debug!(target: "strata_session", "{event}");
    }
}
