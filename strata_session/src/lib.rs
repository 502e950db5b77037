// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strata Session: the editing core behind a Strata window.
//!
//! A [`Session`] ties the other Strata crates together. It owns the
//! [`Viewport`](strata_view::Viewport), the loaded
//! [`LayerStack`](strata_layers::LayerStack), an undo
//! [`History`](strata_history::History) and a
//! [`Compositor`](strata_composite::Compositor), and maps pointer input to
//! edits:
//! - primary button paints the active layer, secondary erases it;
//! - middle button drags the camera;
//! - the wheel zooms in powers of two around the pointer.
//!
//! Every mutating call returns a [`Changes`] set and publishes an [`Update`]
//! to subscribers, carrying a freshly rendered frame when the canvas content
//! changed. Embedders that want to watch the session's decisions install a
//! [`TraceSink`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use strata_layers::StackTemplate;
//! use strata_session::{Changes, PointerButton, PointerOutcome, Session, SessionConfig};
//! use strata_view::IntSize;
//!
//! let config = SessionConfig::default().with_canvas_size(IntSize::new(320, 180));
//! let mut session = Session::new(config);
//! session.load(
//!     StackTemplate::default()
//!         .with_mask_size(IntSize::new(320, 180))
//!         .build()
//!         .unwrap(),
//! );
//!
//! let outcome = session
//!     .pointer_down(PointerButton::Primary, Point::new(100.0, 50.0))
//!     .unwrap();
//! assert_eq!(
//!     outcome,
//!     PointerOutcome::Started(Changes::HISTORY | Changes::MASK)
//! );
//! session.pointer_move(Point::new(140.0, 60.0)).unwrap();
//! assert_eq!(
//!     session.pointer_up(PointerButton::Primary).unwrap(),
//!     Changes::SAVE
//! );
//!
//! assert!(session.can_undo());
//! assert!(!session.is_saved());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod change;
mod config;
mod error;
mod gesture;
mod observer;
mod session;
mod trace;

pub use change::{Changes, Status, Update};
pub use config::SessionConfig;
pub use error::SessionError;
pub use gesture::{Gesture, GestureMove, GestureTracker, PointerButton};
pub use observer::SubscriberId;
pub use session::{PointerOutcome, Session};
#[cfg(feature = "log")]
pub use trace::LogTrace;
pub use trace::{LayerOp, TraceEvent, TraceSink, TraceRecorder};
