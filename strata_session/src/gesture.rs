// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracking: which button owns the pointer and where it was last.
//!
//! Only one gesture runs at a time. The button that started it owns it until
//! that same button is released; presses and releases of other buttons in
//! between are ignored.

use kurbo::{Point, Vec2};

/// Pointer buttons the session understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button: paints.
    Primary,
    /// Usually the right button: erases.
    Secondary,
    /// Usually the wheel button: pans.
    Middle,
}

/// What a pointer gesture does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Writes the paint value into the active mask.
    Paint,
    /// Writes the erase value into the active mask.
    Erase,
    /// Drags the camera.
    Pan,
}

impl Gesture {
    /// The gesture a button starts.
    #[must_use]
    pub fn for_button(button: PointerButton) -> Self {
        match button {
            PointerButton::Primary => Self::Paint,
            PointerButton::Secondary => Self::Erase,
            PointerButton::Middle => Self::Pan,
        }
    }

    /// Returns `true` for gestures that modify mask pixels.
    #[must_use]
    pub fn is_stroke(self) -> bool {
        matches!(self, Self::Paint | Self::Erase)
    }
}

/// One pointer move within a gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureMove {
    /// The running gesture.
    pub gesture: Gesture,
    /// Previous pointer position.
    pub from: Point,
    /// New pointer position.
    pub to: Point,
}

impl GestureMove {
    /// Movement since the previous position.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.to - self.from
    }
}

/// Tracks the running gesture and the last pointer position.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    active: Option<(PointerButton, Gesture)>,
    last_pos: Option<Point>,
}

impl GestureTracker {
    /// Starts a gesture for `button` at `pos`.
    ///
    /// Returns the started gesture, or `None` if another gesture is running.
    pub fn press(&mut self, button: PointerButton, pos: Point) -> Option<Gesture> {
        if self.active.is_some() {
            return None;
        }
        let gesture = Gesture::for_button(button);
        self.active = Some((button, gesture));
        self.last_pos = Some(pos);
        Some(gesture)
    }

    /// Records a pointer move during the running gesture.
    ///
    /// Returns `None` when no gesture is running.
    pub fn update(&mut self, pos: Point) -> Option<GestureMove> {
        let (_, gesture) = self.active?;
        let from = self.last_pos.unwrap_or(pos);
        self.last_pos = Some(pos);
        Some(GestureMove {
            gesture,
            from,
            to: pos,
        })
    }

    /// Ends the gesture if `button` owns it, returning the ended gesture.
    pub fn release(&mut self, button: PointerButton) -> Option<Gesture> {
        match self.active {
            Some((owner, gesture)) if owner == button => {
                self.cancel();
                Some(gesture)
            }
            _ => None,
        }
    }

    /// Drops the running gesture, if any.
    pub fn cancel(&mut self) {
        self.active = None;
        self.last_pos = None;
    }

    /// The running gesture.
    #[must_use]
    pub fn active(&self) -> Option<Gesture> {
        self.active.map(|(_, gesture)| gesture)
    }

    /// The button that owns the running gesture.
    #[must_use]
    pub fn owner(&self) -> Option<PointerButton> {
        self.active.map(|(button, _)| button)
    }

    /// Last recorded pointer position during the gesture.
    #[must_use]
    pub fn last_pos(&self) -> Option<Point> {
        self.last_pos
    }
}
