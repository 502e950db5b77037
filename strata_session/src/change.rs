// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use strata_composite::Frame;

bitflags::bitflags! {
    /// What a session operation changed.
    ///
    /// Every mutating [`Session`](crate::Session) method returns the set it
    /// caused and publishes the same set to subscribers. An empty set means
    /// the call had no effect and nothing was published.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// Layer structure, names, colors, visibility or the active index.
        const LAYERS  = 0b0000_0001;
        /// Mask pixels.
        const MASK    = 0b0000_0010;
        /// Zoom, camera or canvas size.
        const VIEW    = 0b0000_0100;
        /// The saved/unsaved flag.
        const SAVE    = 0b0000_1000;
        /// The undo history.
        const HISTORY = 0b0001_0000;
        /// A project was loaded or unloaded.
        const PROJECT = 0b0010_0000;
    }
}

impl Changes {
    /// Changes that alter what the canvas shows.
    pub const VISUAL: Self = Self::LAYERS
        .union(Self::MASK)
        .union(Self::VIEW)
        .union(Self::PROJECT);

    /// Changes that stale the compositor's cached layers.
    ///
    /// Painting only touches the active layer, which is never cached, and
    /// view changes alter the cache key on their own.
    pub const RESTRUCTURE: Self = Self::LAYERS.union(Self::PROJECT);
}

/// Session state summary shipped with every [`Update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status {
    /// A project is loaded.
    pub loaded: bool,
    /// There are no unsaved edits.
    pub saved: bool,
    /// Undo is possible.
    pub can_undo: bool,
    /// Redo is possible.
    pub can_redo: bool,
    /// Current zoom factor.
    pub zoom: i32,
    /// Index of the active layer, if a project is loaded.
    pub active_layer: Option<usize>,
}

/// Notification passed to subscribers after each effective change.
#[derive(Clone, Copy, Debug)]
pub struct Update<'a> {
    /// What changed.
    pub changes: Changes,
    /// Freshly rendered canvas frame, when the visible content changed and a
    /// project is loaded.
    pub frame: Option<&'a Frame>,
    /// State after the change.
    pub status: Status,
}
