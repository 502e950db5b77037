// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::{Circle, Point};
use strata_composite::{Compositor, Frame, render_full};
use strata_history::History;
use strata_layers::{LayerError, LayerStack, Rgb};
use strata_raster::{BrushSettings, Stroke, StrokeState};
use strata_view::{IntPoint, IntSize, Viewport};

use crate::observer::Observers;
use crate::{
    Changes, Gesture, GestureTracker, LayerOp, PointerButton, SessionConfig, SessionError, Status,
    SubscriberId, TraceEvent, TraceSink, Update,
};

/// Result of [`Session::pointer_down`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The gesture started. Carries what its first sample changed.
    Started(Changes),
    /// Another gesture owns the pointer, so the press was ignored.
    Ignored,
    /// Painting or erasing was refused because the active layer is hidden.
    ///
    /// Nothing changed. Call [`Session::reveal_active_layer`] (or pick a
    /// visible layer) before trying again.
    ActiveLayerHidden,
}

/// An editing session over one loaded project.
///
/// The session owns the viewport, the layer stack, the undo history and the
/// compositor, and turns pointer input into edits. Every mutating method
/// returns the [`Changes`] it caused and, when that set is not empty,
/// publishes an [`Update`] to all subscribers before returning: the canvas is
/// re-rendered first when visible content changed, then subscribers are
/// called in registration order.
///
/// Undo snapshots are taken before every paint gesture (once, on its first
/// sample) and before every structural layer edit. Selecting the active layer
/// and toggling visibility are view state and are not recorded.
pub struct Session {
    config: SessionConfig,
    viewport: Viewport,
    stack: Option<LayerStack>,
    history: History<LayerStack>,
    compositor: Compositor,
    brush: BrushSettings,
    saved: bool,
    gesture: GestureTracker,
    stroke: StrokeState,
    observers: Observers,
    trace: Option<Box<dyn TraceSink>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("viewport", &self.viewport)
            .field("stack", &self.stack)
            .field("brush", &self.brush)
            .field("saved", &self.saved)
            .field("gesture", &self.gesture)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Creates a session with nothing loaded.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut viewport = Viewport::new();
        viewport.set_zoom_limits(config.zoom_limits.0, config.zoom_limits.1);
        viewport.resize_canvas(config.canvas_size);
        Self {
            viewport,
            stack: None,
            history: History::new(config.history_capacity),
            compositor: Compositor::new(),
            brush: config.brush,
            saved: true,
            gesture: GestureTracker::default(),
            stroke: StrokeState::default(),
            observers: Observers::default(),
            trace: None,
            config,
        }
    }

    /// The configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Installs a trace sink, replacing any previous one.
    pub fn set_trace(&mut self, sink: impl TraceSink + 'static) {
        self.trace = Some(Box::new(sink));
    }

    /// Removes and returns the trace sink.
    pub fn take_trace(&mut self) -> Option<Box<dyn TraceSink>> {
        self.trace.take()
    }

    /// Registers a callback for every published [`Update`].
    pub fn subscribe(&mut self, callback: impl FnMut(&Update<'_>) + 'static) -> SubscriberId {
        self.observers.subscribe(Box::new(callback))
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    // --- project lifecycle ---

    /// Loads a project, replacing any current one.
    ///
    /// History is cleared so snapshots never cross projects, any gesture is
    /// dropped, the project counts as saved, and the viewport is reset to the
    /// lowest zoom centered on the mask.
    pub fn load(&mut self, stack: LayerStack) -> Changes {
        self.cancel_gesture();
        self.history.clear();
        self.viewport
            .load(stack.mask_size(), self.viewport.canvas_size());
        self.emit(TraceEvent::Loaded {
            mask_size: stack.mask_size(),
            layers: stack.len(),
        });
        self.stack = Some(stack);
        self.saved = true;
        let changes = Changes::all();
        self.publish(changes);
        changes
    }

    /// Closes the current project. Returns no changes if nothing was loaded.
    pub fn unload(&mut self) -> Changes {
        if self.stack.take().is_none() {
            return Changes::empty();
        }
        self.cancel_gesture();
        self.history.clear();
        self.viewport.load(IntSize::ZERO, self.viewport.canvas_size());
        self.saved = true;
        self.emit(TraceEvent::Unloaded);
        let changes = Changes::all();
        self.publish(changes);
        changes
    }

    /// Returns `true` if a project is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.stack.is_some()
    }

    /// The loaded layer stack.
    #[must_use]
    pub fn stack(&self) -> Option<&LayerStack> {
        self.stack.as_ref()
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The compositor, for inspecting its cache.
    #[must_use]
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Returns `true` if there are no unsaved edits.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Records that the project was saved.
    pub fn mark_saved(&mut self) -> Changes {
        if self.saved {
            return Changes::empty();
        }
        self.saved = true;
        self.publish(Changes::SAVE);
        Changes::SAVE
    }

    /// Returns `true` if [`undo`](Self::undo) would restore a snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.has_undo()
    }

    /// Returns `true` if [`redo`](Self::redo) would restore a snapshot.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.has_redo()
    }

    /// Current state summary.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            loaded: self.stack.is_some(),
            saved: self.saved,
            can_undo: self.history.has_undo(),
            can_redo: self.history.has_redo(),
            zoom: self.viewport.zoom(),
            active_layer: self.stack.as_ref().map(LayerStack::active_index),
        }
    }

    // --- brush ---

    /// Current brush settings.
    #[must_use]
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    /// Sets the brush radius (clamped into its limits) and returns the stored value.
    ///
    /// A running stroke keeps the radius it started with.
    pub fn set_brush_radius(&mut self, radius: i32) -> i32 {
        self.brush.set_radius(radius)
    }

    /// Screen-space outline of the brush at a pointer position.
    #[must_use]
    pub fn brush_outline(&self, pos: Point) -> Option<Circle> {
        self.stack
            .as_ref()
            .map(|_| self.viewport.brush_outline(pos, self.brush.radius()))
    }

    // --- pointer input ---

    /// Handles a button press at a screen position.
    ///
    /// [`PointerButton::Primary`] paints, [`PointerButton::Secondary`]
    /// erases and [`PointerButton::Middle`] pans. A press while another
    /// gesture is running is ignored. Painting or erasing a hidden active
    /// layer is refused without touching masks or history.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        pos: Point,
    ) -> Result<PointerOutcome, SessionError> {
        let stack = self.stack.as_ref().ok_or(SessionError::NotLoaded)?;
        let layer = stack.active_index();
        let layer_visible = stack.active_layer().is_visible();

        if self.gesture.active().is_some() {
            self.emit(TraceEvent::GestureIgnored { button });
            return Ok(PointerOutcome::Ignored);
        }
        let gesture = Gesture::for_button(button);
        if gesture.is_stroke() && !layer_visible {
            self.emit(TraceEvent::HiddenLayerRejected { layer });
            return Ok(PointerOutcome::ActiveLayerHidden);
        }
        if self.gesture.press(button, pos).is_none() {
            return Ok(PointerOutcome::Ignored);
        }

        let value = match gesture {
            Gesture::Paint => self.config.paint_value,
            Gesture::Erase => self.config.erase_value,
            Gesture::Pan => return Ok(PointerOutcome::Started(Changes::empty())),
        };
        self.stroke.begin(Stroke::new(value, self.brush.radius()));
        self.emit(TraceEvent::StrokeBegan { gesture, layer });
        let changes = self.stroke_sample(pos);
        self.publish(changes);
        Ok(PointerOutcome::Started(changes))
    }

    /// Handles pointer motion at a screen position.
    ///
    /// Outside a gesture this changes nothing. During a stroke it paints from
    /// the previous sample; during a pan it moves the camera against the
    /// pointer motion.
    pub fn pointer_move(&mut self, pos: Point) -> Result<Changes, SessionError> {
        if self.stack.is_none() {
            return Err(SessionError::NotLoaded);
        }
        let Some(motion) = self.gesture.update(pos) else {
            return Ok(Changes::empty());
        };
        let changes = match motion.gesture {
            Gesture::Pan => {
                let from = IntPoint::from_point_floor(motion.from);
                let to = IntPoint::from_point_floor(motion.to);
                if self.viewport.move_camera(from.x - to.x, from.y - to.y) {
                    Changes::VIEW
                } else {
                    Changes::empty()
                }
            }
            Gesture::Paint | Gesture::Erase => self.stroke_sample(pos),
        };
        self.publish(changes);
        Ok(changes)
    }

    /// Handles a button release, wherever the pointer is.
    ///
    /// Only the button that started the running gesture ends it. Ending a
    /// stroke marks the project unsaved.
    pub fn pointer_up(&mut self, button: PointerButton) -> Result<Changes, SessionError> {
        if self.stack.is_none() {
            return Err(SessionError::NotLoaded);
        }
        let Some(gesture) = self.gesture.release(button) else {
            if self.gesture.active().is_some() {
                self.emit(TraceEvent::GestureIgnored { button });
            }
            return Ok(Changes::empty());
        };
        let mut changes = Changes::empty();
        if gesture.is_stroke() && self.stroke.end() {
            self.emit(TraceEvent::StrokeEnded);
            changes |= self.mark_dirty();
        }
        self.publish(changes);
        Ok(changes)
    }

    /// Zooms one step per wheel notch around the pointer.
    ///
    /// A positive `delta` zooms in, a negative one zooms out. The mask pixel
    /// under the pointer stays under the pointer unless the camera hits the
    /// world bounds.
    pub fn wheel(&mut self, pos: Point, delta: f64) -> Result<Changes, SessionError> {
        if self.stack.is_none() {
            return Err(SessionError::NotLoaded);
        }
        let zoom = self.viewport.zoom();
        let factor = self.config.wheel_zoom_factor.max(2);
        let target = if delta > 0.0 {
            zoom.saturating_mul(factor)
        } else if delta < 0.0 {
            zoom / factor
        } else {
            return Ok(Changes::empty());
        };
        let anchor = IntPoint::from_point_floor(pos);
        if !self.viewport.zoom_about(anchor, target) {
            return Ok(Changes::empty());
        }
        Ok(self.zoom_changed())
    }

    /// Sets the zoom factor directly, keeping the camera.
    pub fn set_zoom(&mut self, zoom: i32) -> Result<Changes, SessionError> {
        if self.stack.is_none() {
            return Err(SessionError::NotLoaded);
        }
        if !self.viewport.set_zoom(zoom) {
            return Ok(Changes::empty());
        }
        Ok(self.zoom_changed())
    }

    /// Updates the canvas size.
    ///
    /// Works with or without a loaded project.
    pub fn resize_canvas(&mut self, size: IntSize) -> Changes {
        if size == self.viewport.canvas_size() {
            return Changes::empty();
        }
        self.viewport.resize_canvas(size);
        self.publish(Changes::VIEW);
        Changes::VIEW
    }

    // --- layer view state (not recorded in history) ---

    /// Makes a layer active and visible.
    pub fn set_active_layer(&mut self, index: usize) -> Result<Changes, SessionError> {
        self.view_edit(|stack| stack.set_active(index))
    }

    /// Shows or hides a layer.
    pub fn set_layer_visibility(
        &mut self,
        index: usize,
        visible: bool,
    ) -> Result<Changes, SessionError> {
        self.view_edit(|stack| stack.set_visibility(index, visible))
    }

    /// Flips a layer's visibility.
    pub fn toggle_layer_visibility(&mut self, index: usize) -> Result<Changes, SessionError> {
        self.view_edit(|stack| stack.toggle_visibility(index).map(|_| ()))
    }

    /// Makes the hidden active layer visible again.
    ///
    /// This is how an embedder recovers from
    /// [`PointerOutcome::ActiveLayerHidden`]. Returns no changes if the
    /// active layer is already visible.
    pub fn reveal_active_layer(&mut self) -> Result<Changes, SessionError> {
        let stack = self.stack.as_ref().ok_or(SessionError::NotLoaded)?;
        if stack.active_layer().is_visible() {
            return Ok(Changes::empty());
        }
        let index = stack.active_index();
        self.view_edit(|stack| stack.set_visibility(index, true))
    }

    // --- structural layer edits (recorded in history) ---

    /// Inserts a blank layer at `index` (`0..=len`) and makes it active.
    pub fn insert_layer(&mut self, index: usize) -> Result<Changes, SessionError> {
        self.edit(LayerOp::Insert(index), |stack| stack.insert(index))
    }

    /// Removes a layer. The last remaining layer cannot be removed.
    pub fn remove_layer(&mut self, index: usize) -> Result<Changes, SessionError> {
        self.edit(LayerOp::Remove(index), |stack| stack.remove(index).map(|_| ()))
    }

    /// Renames a layer.
    pub fn rename_layer(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<Changes, SessionError> {
        let name = name.into();
        self.edit(LayerOp::Rename(index), |stack| stack.rename(index, name))
    }

    /// Changes a layer's color.
    pub fn recolor_layer(&mut self, index: usize, color: Rgb) -> Result<Changes, SessionError> {
        self.edit(LayerOp::Recolor(index), |stack| stack.recolor(index, color))
    }

    /// Changes the background color.
    pub fn set_background_color(&mut self, color: Rgb) -> Result<Changes, SessionError> {
        self.edit(LayerOp::Background, |stack| {
            stack.set_background(color);
            Ok(())
        })
    }

    /// Renames the background.
    pub fn rename_background(&mut self, name: impl Into<String>) -> Result<Changes, SessionError> {
        let name = name.into();
        self.edit(LayerOp::RenameBackground, |stack| {
            stack.rename_background(name);
            Ok(())
        })
    }

    // --- history ---

    /// Restores the previous snapshot. Returns no changes if there is none.
    pub fn undo(&mut self) -> Result<Changes, SessionError> {
        let stack = self.stack.as_mut().ok_or(SessionError::NotLoaded)?;
        let Some(previous) = self.history.undo(stack) else {
            return Ok(Changes::empty());
        };
        *stack = previous;
        self.emit(TraceEvent::Undo);
        Ok(self.restored())
    }

    /// Re-applies the most recently undone snapshot.
    pub fn redo(&mut self) -> Result<Changes, SessionError> {
        let stack = self.stack.as_mut().ok_or(SessionError::NotLoaded)?;
        let Some(next) = self.history.redo(stack) else {
            return Ok(Changes::empty());
        };
        *stack = next;
        self.emit(TraceEvent::Redo);
        Ok(self.restored())
    }

    // --- output ---

    /// Renders the visible canvas crop, or `None` without a project.
    pub fn render(&mut self) -> Option<&Frame> {
        let stack = self.stack.as_ref()?;
        Some(self.compositor.render_crop(stack, &self.viewport, false))
    }

    /// Composites the whole mask with every layer shown, for export.
    pub fn export(&self) -> Result<Frame, SessionError> {
        let stack = self.stack.as_ref().ok_or(SessionError::NotLoaded)?;
        Ok(render_full(stack, true))
    }

    // --- internals ---

    fn stroke_sample(&mut self, pos: Point) -> Changes {
        let point = self.viewport.screen_point_to_mask(pos);
        let Some(stack) = self.stack.as_mut() else {
            return Changes::empty();
        };
        let mut changes = Changes::empty();
        let mut snapshot = None;
        if self.stroke.needs_snapshot() {
            self.history.push(stack);
            snapshot = Some(self.history.undo_len());
            changes |= Changes::HISTORY;
        }
        if self
            .stroke
            .sample(stack.active_mask_mut(), point)
            .is_some_and(|dirty| !dirty.is_empty())
        {
            changes |= Changes::MASK;
        }
        if let Some(undo_len) = snapshot {
            self.emit(TraceEvent::SnapshotPushed { undo_len });
        }
        changes
    }

    fn edit(
        &mut self,
        op: LayerOp,
        apply: impl FnOnce(&mut LayerStack) -> Result<(), LayerError>,
    ) -> Result<Changes, SessionError> {
        let stack = self.stack.as_mut().ok_or(SessionError::NotLoaded)?;
        let before = stack.clone();
        apply(stack)?;
        self.history.push(&before);
        let ended = self.end_stroke();
        self.emit(TraceEvent::SnapshotPushed {
            undo_len: self.history.undo_len(),
        });
        self.emit(TraceEvent::LayerOp(op));
        let changes = Changes::LAYERS | Changes::HISTORY | ended | self.mark_dirty();
        self.publish(changes);
        Ok(changes)
    }

    fn view_edit(
        &mut self,
        apply: impl FnOnce(&mut LayerStack) -> Result<(), LayerError>,
    ) -> Result<Changes, SessionError> {
        let stack = self.stack.as_mut().ok_or(SessionError::NotLoaded)?;
        apply(stack)?;
        let changes = Changes::LAYERS | self.end_stroke();
        self.publish(changes);
        Ok(changes)
    }

    fn restored(&mut self) -> Changes {
        let ended = self.end_stroke();
        let changes =
            Changes::LAYERS | Changes::MASK | Changes::HISTORY | ended | self.mark_dirty();
        self.publish(changes);
        changes
    }

    fn zoom_changed(&mut self) -> Changes {
        self.emit(TraceEvent::Zoom {
            zoom: self.viewport.zoom(),
        });
        self.publish(Changes::VIEW);
        Changes::VIEW
    }

    fn mark_dirty(&mut self) -> Changes {
        if self.saved {
            self.saved = false;
            Changes::SAVE
        } else {
            Changes::empty()
        }
    }

    /// Ends a running stroke early, as a release would.
    ///
    /// A stroke that already painted marks the project dirty; the returned
    /// set carries `SAVE` when that flips the saved flag.
    fn end_stroke(&mut self) -> Changes {
        if !self.gesture.active().is_some_and(Gesture::is_stroke) {
            return Changes::empty();
        }
        self.gesture.cancel();
        let painted = self.stroke.last_point().is_some();
        self.stroke.end();
        self.emit(TraceEvent::StrokeEnded);
        if painted {
            self.mark_dirty()
        } else {
            Changes::empty()
        }
    }

    fn cancel_gesture(&mut self) {
        self.gesture.cancel();
        self.stroke.end();
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.event(&event);
        }
    }

    fn publish(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        if changes.intersects(Changes::RESTRUCTURE) {
            self.compositor.invalidate();
        }
        let status = self.status();
        let frame = match &self.stack {
            Some(stack) if changes.intersects(Changes::VISUAL) => {
                Some(&*self.compositor.render_crop(stack, &self.viewport, false))
            }
            _ => None,
        };
        self.observers.notify(&Update {
            changes,
            frame,
            status,
        });
    }
}
