// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `strata_session` crate.
//!
//! Canvas and mask share one size in most scenarios, so at zoom 1 screen
//! positions map straight to mask pixels.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use strata_layers::{Layer, LayerError, LayerStack, Mask, Rgb, StackTemplate};
use strata_session::{
    Changes, Gesture, LayerOp, PointerButton, PointerOutcome, Session, SessionConfig,
    SessionError, TraceEvent, TraceRecorder, TraceSink,
};
use strata_view::{IntPoint, IntSize};

const MASK: IntSize = IntSize::new(64, 36);
const BACKGROUND: [u8; 4] = [0x33, 0x99, 0xff, 255];
const LOWLANDS: [u8; 4] = [0xff, 0xff, 0xb3, 255];

fn session_with(canvas: IntSize) -> Session {
    let mut session = Session::new(SessionConfig::default().with_canvas_size(canvas));
    session.load(StackTemplate::default().with_mask_size(MASK).build().unwrap());
    session
}

fn session() -> Session {
    session_with(MASK)
}

fn pixel(session: &Session, layer: usize, x: i32, y: i32) -> Option<u8> {
    session
        .stack()
        .unwrap()
        .layer(layer)
        .unwrap()
        .mask()
        .get(IntPoint::new(x, y))
}

fn coverage(session: &Session, layer: usize) -> usize {
    session
        .stack()
        .unwrap()
        .layer(layer)
        .unwrap()
        .mask()
        .coverage()
}

fn stroke(session: &mut Session, button: PointerButton, from: (f64, f64), to: (f64, f64)) {
    let outcome = session.pointer_down(button, from.into()).unwrap();
    assert!(
        matches!(outcome, PointerOutcome::Started(_)),
        "stroke should start, got {outcome:?}"
    );
    session.pointer_move(to.into()).unwrap();
    session.pointer_up(button).unwrap();
}

struct SharedTrace(Rc<RefCell<TraceRecorder>>);

impl TraceSink for SharedTrace {
    fn event(&mut self, event: &TraceEvent) {
        self.0.borrow_mut().event(event);
    }
}

#[test]
fn paint_stroke_fills_active_mask_and_records_snapshot() {
    let mut s = session();
    let status = s.status();
    assert!(status.loaded);
    assert!(status.saved);
    assert!(!status.can_undo);
    assert_eq!(status.zoom, 1);
    assert_eq!(status.active_layer, Some(0));

    s.set_brush_radius(3);
    let outcome = s
        .pointer_down(PointerButton::Primary, Point::new(10.0, 10.0))
        .unwrap();
    assert_eq!(
        outcome,
        PointerOutcome::Started(Changes::HISTORY | Changes::MASK)
    );
    assert_eq!(
        s.pointer_move(Point::new(30.5, 10.5)).unwrap(),
        Changes::MASK
    );
    assert_eq!(s.pointer_up(PointerButton::Primary).unwrap(), Changes::SAVE);

    for x in 10..=30 {
        assert_eq!(pixel(&s, 0, x, 10), Some(255), "gap in stroke at x={x}");
    }
    assert_eq!(pixel(&s, 0, 20, 13), Some(255));
    assert_eq!(pixel(&s, 0, 20, 14), Some(0));
    assert_eq!(coverage(&s, 1), 0);

    let status = s.status();
    assert!(!status.saved);
    assert!(status.can_undo);
    assert!(!status.can_redo);

    // A second stroke pushes exactly one more snapshot.
    stroke(&mut s, PointerButton::Primary, (50.0, 30.0), (55.0, 30.0));
    s.undo().unwrap();
    assert_eq!(pixel(&s, 0, 52, 30), Some(0));
    assert_eq!(pixel(&s, 0, 20, 10), Some(255));
}

#[test]
fn three_layer_scenario_paints_a_disc_with_one_snapshot() {
    let size = IntSize::new(32, 24);
    let layers = vec![
        Layer::new("Lowlands", "#ffffb3".parse().unwrap(), Mask::new(size)),
        Layer::new("Hills", "#b3ff99".parse().unwrap(), Mask::new(size)).with_visible(false),
        Layer::new("Mountains", "#dfbf9f".parse().unwrap(), Mask::new(size)),
    ];
    let stack = LayerStack::new("Ocean", "#3399ff".parse().unwrap(), layers).unwrap();
    let mut s = Session::new(SessionConfig::default().with_canvas_size(size));
    s.load(stack);
    s.set_active_layer(1).unwrap();
    let before = s.stack().unwrap().clone();

    s.set_brush_radius(5);
    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (10.0, 10.0));

    for y in 0..size.height {
        for x in 0..size.width {
            let inside = (x - 10) * (x - 10) + (y - 10) * (y - 10) <= 25;
            let expected = if inside { 255 } else { 0 };
            assert_eq!(pixel(&s, 1, x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
    assert_eq!(coverage(&s, 0), 0);
    assert!(s.can_undo());
    s.undo().unwrap();
    assert!(!s.can_undo());
    assert_eq!(s.stack().unwrap(), &before);
}

#[test]
fn erase_writes_zero() {
    let mut s = session();
    stroke(&mut s, PointerButton::Primary, (5.0, 5.0), (40.0, 5.0));
    stroke(&mut s, PointerButton::Secondary, (20.0, 5.0), (20.0, 5.0));
    assert_eq!(pixel(&s, 0, 20, 5), Some(0));
    assert_eq!(pixel(&s, 0, 5, 5), Some(255));
}

#[test]
fn hidden_active_layer_refuses_strokes() {
    let mut s = session();
    assert_eq!(s.set_layer_visibility(0, false).unwrap(), Changes::LAYERS);
    assert!(s.is_saved());

    for button in [PointerButton::Primary, PointerButton::Secondary] {
        assert_eq!(
            s.pointer_down(button, Point::new(10.0, 10.0)).unwrap(),
            PointerOutcome::ActiveLayerHidden
        );
    }
    assert_eq!(coverage(&s, 0), 0);
    assert!(!s.can_undo());

    // Panning is not a stroke and still works.
    assert_eq!(
        s.pointer_down(PointerButton::Middle, Point::new(10.0, 10.0))
            .unwrap(),
        PointerOutcome::Started(Changes::empty())
    );
    s.pointer_up(PointerButton::Middle).unwrap();

    assert_eq!(s.reveal_active_layer().unwrap(), Changes::LAYERS);
    assert_eq!(s.reveal_active_layer().unwrap(), Changes::empty());
    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (12.0, 10.0));
    assert_eq!(pixel(&s, 0, 11, 10), Some(255));
}

#[test]
fn selecting_a_layer_shows_it() {
    let mut s = session();
    s.set_layer_visibility(2, false).unwrap();
    s.set_active_layer(2).unwrap();
    let stack = s.stack().unwrap();
    assert_eq!(stack.active_index(), 2);
    assert!(stack.active_layer().is_visible());
    assert!(!s.can_undo());
    assert_eq!(
        s.set_active_layer(7),
        Err(SessionError::Layer(LayerError::IndexOutOfBounds { index: 7, len: 3 }))
    );
}

#[test]
fn undo_and_redo_are_inverse() {
    let mut s = session();
    assert_eq!(s.undo().unwrap(), Changes::empty());
    assert_eq!(s.redo().unwrap(), Changes::empty());

    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (20.0, 20.0));
    let painted = s.stack().unwrap().clone();
    s.rename_layer(1, "Plains").unwrap();
    let renamed = s.stack().unwrap().clone();

    let changes = s.undo().unwrap();
    assert!(changes.contains(Changes::LAYERS | Changes::MASK | Changes::HISTORY));
    assert_eq!(s.stack().unwrap(), &painted);
    assert!(s.can_redo());

    s.undo().unwrap();
    assert_eq!(coverage(&s, 0), 0);
    assert!(!s.can_undo());

    s.redo().unwrap();
    assert_eq!(s.stack().unwrap(), &painted);
    s.redo().unwrap();
    assert_eq!(s.stack().unwrap(), &renamed);
    assert!(!s.can_redo());
}

#[test]
fn new_edit_clears_redo() {
    let mut s = session();
    s.insert_layer(0).unwrap();
    s.undo().unwrap();
    assert!(s.can_redo());
    s.recolor_layer(0, Rgb::new(1, 2, 3)).unwrap();
    assert!(!s.can_redo());
}

#[test]
fn history_capacity_bounds_undo_depth() {
    let mut s = Session::new(
        SessionConfig::default()
            .with_canvas_size(MASK)
            .with_history_capacity(2),
    );
    s.load(StackTemplate::default().with_mask_size(MASK).build().unwrap());
    for name in ["a", "b", "c"] {
        s.rename_background(name).unwrap();
    }
    s.undo().unwrap();
    s.undo().unwrap();
    assert!(!s.can_undo());
    assert_eq!(s.stack().unwrap().background_name(), "a");
}

#[test]
fn insert_and_remove_track_the_active_layer() {
    let mut s = session();
    let changes = s.insert_layer(1).unwrap();
    assert_eq!(changes, Changes::LAYERS | Changes::HISTORY | Changes::SAVE);
    let stack = s.stack().unwrap();
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.active_index(), 1);
    assert_eq!(stack.active_layer().name(), "Layer 4");

    // Removing a layer below the active one keeps the same layer active.
    assert_eq!(
        s.remove_layer(0).unwrap(),
        Changes::LAYERS | Changes::HISTORY
    );
    let stack = s.stack().unwrap();
    assert_eq!(stack.active_index(), 0);
    assert_eq!(stack.active_layer().name(), "Layer 4");

    s.set_active_layer(2).unwrap();
    s.remove_layer(2).unwrap();
    assert_eq!(s.stack().unwrap().active_index(), 0);

    s.remove_layer(0).unwrap();
    assert_eq!(
        s.remove_layer(0),
        Err(SessionError::Layer(LayerError::LastLayer))
    );
    assert_eq!(s.stack().unwrap().len(), 1);
}

#[test]
fn failed_edit_leaves_history_untouched() {
    let mut s = session();
    assert!(s.rename_layer(3, "x").is_err());
    assert!(!s.can_undo());
    assert!(s.is_saved());
}

#[test]
fn export_shows_hidden_layers() {
    let mut s = session();
    stroke(&mut s, PointerButton::Primary, (30.0, 18.0), (32.0, 18.0));
    s.set_active_layer(1).unwrap();
    s.set_layer_visibility(0, false).unwrap();

    let frame = s.render().unwrap();
    assert_eq!(frame.pixel(31, 18), Some(BACKGROUND));

    let export = s.export().unwrap();
    assert_eq!(export.size(), MASK);
    assert_eq!(export.pixel(31, 18), Some(LOWLANDS));
    assert_eq!(export.pixel(0, 0), Some(BACKGROUND));
    // Export leaves the visibility alone.
    assert!(!s.stack().unwrap().layer(0).unwrap().is_visible());
}

#[test]
fn wheel_zooms_around_the_pointer() {
    let mut s = session();
    let anchor = Point::new(10.0, 10.0);
    assert_eq!(s.wheel(anchor, 1.0).unwrap(), Changes::VIEW);
    assert_eq!(s.viewport().zoom(), 2);
    assert_eq!(
        s.viewport().screen_to_mask(IntPoint::new(10, 10)),
        IntPoint::new(10, 10)
    );

    s.wheel(anchor, 1.0).unwrap();
    s.wheel(anchor, 1.0).unwrap();
    assert_eq!(s.viewport().zoom(), 8);
    assert_eq!(s.wheel(anchor, 1.0).unwrap(), Changes::empty());
    assert_eq!(s.wheel(anchor, 0.0).unwrap(), Changes::empty());

    assert_eq!(s.wheel(anchor, -3.0).unwrap(), Changes::VIEW);
    assert_eq!(s.viewport().zoom(), 4);
    assert_eq!(s.status().zoom, 4);

    assert_eq!(s.set_zoom(1).unwrap(), Changes::VIEW);
    assert_eq!(s.wheel(anchor, -1.0).unwrap(), Changes::empty());
}

#[test]
fn middle_drag_pans_the_camera() {
    let mut s = session_with(IntSize::new(32, 18));
    let start = s.viewport().camera();
    s.pointer_down(PointerButton::Middle, Point::new(10.0, 10.0))
        .unwrap();
    assert_eq!(
        s.pointer_move(Point::new(5.0, 8.0)).unwrap(),
        Changes::VIEW
    );
    assert_eq!(
        s.viewport().camera(),
        IntPoint::new(start.x + 5, start.y + 2)
    );
    assert_eq!(s.pointer_up(PointerButton::Middle).unwrap(), Changes::empty());
    assert!(s.is_saved());
    assert!(!s.can_undo());
}

#[test]
fn second_button_is_ignored_while_a_gesture_runs() {
    let rec = Rc::new(RefCell::new(TraceRecorder::new()));
    let mut s = session();
    s.set_trace(SharedTrace(rec.clone()));

    s.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0))
        .unwrap();
    assert_eq!(
        s.pointer_down(PointerButton::Secondary, Point::new(20.0, 10.0))
            .unwrap(),
        PointerOutcome::Ignored
    );
    assert_eq!(
        s.pointer_up(PointerButton::Secondary).unwrap(),
        Changes::empty()
    );
    // Still painting.
    assert_eq!(
        s.pointer_move(Point::new(14.0, 10.0)).unwrap(),
        Changes::MASK
    );
    // The release ends the stroke wherever the pointer went.
    s.pointer_move(Point::new(500.0, -40.0)).unwrap();
    assert_eq!(s.pointer_up(PointerButton::Primary).unwrap(), Changes::SAVE);
    assert_eq!(
        s.pointer_move(Point::new(20.0, 20.0)).unwrap(),
        Changes::empty()
    );

    let events = rec.borrow();
    let ignored: Vec<_> = events
        .events()
        .iter()
        .filter(|e| matches!(e, TraceEvent::GestureIgnored { .. }))
        .collect();
    assert_eq!(ignored.len(), 2);
}

#[test]
fn view_edit_during_a_stroke_keeps_the_paint_unsaved() {
    let mut s = session();
    s.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0))
        .unwrap();
    assert!(coverage(&s, 0) > 0);

    assert_eq!(
        s.set_layer_visibility(2, false).unwrap(),
        Changes::LAYERS | Changes::SAVE
    );
    assert_eq!(
        s.pointer_up(PointerButton::Primary).unwrap(),
        Changes::empty()
    );
    assert!(!s.is_saved());
    assert!(s.can_undo());

    // The same holds for switching layers mid-stroke.
    s.mark_saved();
    s.pointer_down(PointerButton::Secondary, Point::new(10.0, 10.0))
        .unwrap();
    s.set_active_layer(1).unwrap();
    s.pointer_up(PointerButton::Secondary).unwrap();
    assert!(!s.is_saved());
}

#[test]
fn wheel_factor_below_two_acts_as_two() {
    let config = SessionConfig {
        wheel_zoom_factor: 0,
        ..SessionConfig::default().with_canvas_size(MASK)
    };
    let mut s = Session::new(config);
    s.load(StackTemplate::default().with_mask_size(MASK).build().unwrap());
    s.set_zoom(4).unwrap();
    assert_eq!(s.wheel(Point::new(5.0, 5.0), -1.0).unwrap(), Changes::VIEW);
    assert_eq!(s.viewport().zoom(), 2);
    s.wheel(Point::new(5.0, 5.0), 1.0).unwrap();
    assert_eq!(s.viewport().zoom(), 4);
}

#[test]
fn undo_during_a_stroke_ends_it() {
    let mut s = session();
    s.pointer_down(PointerButton::Primary, Point::new(10.0, 10.0))
        .unwrap();
    s.undo().unwrap();
    assert_eq!(coverage(&s, 0), 0);
    assert_eq!(
        s.pointer_move(Point::new(20.0, 10.0)).unwrap(),
        Changes::empty()
    );
    assert_eq!(
        s.pointer_up(PointerButton::Primary).unwrap(),
        Changes::empty()
    );
    assert_eq!(coverage(&s, 0), 0);
}

#[test]
fn subscribers_run_in_order_until_removed() {
    let log: Rc<RefCell<Vec<(u8, Changes, bool)>>> = Rc::default();
    let mut s = session();

    let first = {
        let log = log.clone();
        s.subscribe(move |u| log.borrow_mut().push((1, u.changes, u.frame.is_some())))
    };
    {
        let log = log.clone();
        s.subscribe(move |u| log.borrow_mut().push((2, u.changes, u.frame.is_some())));
    }
    assert_eq!(s.subscriber_count(), 2);

    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (10.0, 10.0));
    assert_eq!(
        log.borrow().as_slice(),
        &[
            (1, Changes::HISTORY | Changes::MASK, true),
            (2, Changes::HISTORY | Changes::MASK, true),
            (1, Changes::MASK, true),
            (2, Changes::MASK, true),
            (1, Changes::SAVE, false),
            (2, Changes::SAVE, false),
        ]
    );

    log.borrow_mut().clear();
    assert!(s.unsubscribe(first));
    assert!(!s.unsubscribe(first));
    assert_eq!(s.mark_saved(), Changes::SAVE);
    assert_eq!(s.mark_saved(), Changes::empty());
    assert_eq!(log.borrow().as_slice(), &[(2, Changes::SAVE, false)]);
}

#[test]
fn updates_carry_the_new_status() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut s = session();
    {
        let seen = seen.clone();
        s.subscribe(move |u| seen.borrow_mut().push(u.status));
    }
    s.insert_layer(3).unwrap();
    let status = *seen.borrow().last().unwrap();
    assert!(status.can_undo);
    assert!(!status.saved);
    assert_eq!(status.active_layer, Some(3));
}

#[test]
fn operations_need_a_project() {
    let mut s = Session::default();
    assert!(!s.is_loaded());
    assert_eq!(
        s.pointer_down(PointerButton::Primary, Point::ORIGIN),
        Err(SessionError::NotLoaded)
    );
    assert_eq!(s.pointer_move(Point::ORIGIN), Err(SessionError::NotLoaded));
    assert_eq!(
        s.pointer_up(PointerButton::Primary),
        Err(SessionError::NotLoaded)
    );
    assert_eq!(s.undo(), Err(SessionError::NotLoaded));
    assert_eq!(s.insert_layer(0), Err(SessionError::NotLoaded));
    assert_eq!(s.wheel(Point::ORIGIN, 1.0), Err(SessionError::NotLoaded));
    assert!(s.export().is_err());
    assert!(s.render().is_none());
    assert!(s.brush_outline(Point::ORIGIN).is_none());

    // The canvas can be resized before anything is loaded.
    assert_eq!(s.resize_canvas(IntSize::new(100, 50)), Changes::VIEW);
    assert_eq!(s.resize_canvas(IntSize::new(100, 50)), Changes::empty());
    assert_eq!(s.unload(), Changes::empty());
}

#[test]
fn load_resets_history_and_unload_clears_project() {
    let mut s = session();
    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (20.0, 10.0));
    s.wheel(Point::new(5.0, 5.0), 1.0).unwrap();

    let changes = s.load(StackTemplate::default().with_mask_size(MASK).build().unwrap());
    assert_eq!(changes, Changes::all());
    assert!(!s.can_undo());
    assert!(s.is_saved());
    assert_eq!(s.viewport().zoom(), 1);

    assert_eq!(s.unload(), Changes::all());
    assert!(!s.is_loaded());
    assert_eq!(s.status().active_layer, None);
}

#[test]
fn trace_follows_a_stroke() {
    let rec = Rc::new(RefCell::new(TraceRecorder::new()));
    let mut s = Session::new(SessionConfig::default().with_canvas_size(MASK));
    s.set_trace(SharedTrace(rec.clone()));
    s.load(StackTemplate::default().with_mask_size(MASK).build().unwrap());
    s.set_layer_visibility(1, false).unwrap();
    s.set_active_layer(2).unwrap();
    stroke(&mut s, PointerButton::Secondary, (1.0, 1.0), (2.0, 2.0));
    s.insert_layer(0).unwrap();
    s.undo().unwrap();

    assert_eq!(
        rec.borrow().events(),
        &[
            TraceEvent::Loaded {
                mask_size: MASK,
                layers: 3
            },
            TraceEvent::StrokeBegan {
                gesture: Gesture::Erase,
                layer: 2
            },
            TraceEvent::SnapshotPushed { undo_len: 1 },
            TraceEvent::StrokeEnded,
            TraceEvent::SnapshotPushed { undo_len: 2 },
            TraceEvent::LayerOp(LayerOp::Insert(0)),
            TraceEvent::Undo,
        ]
    );
}

#[test]
fn brush_radius_is_clamped_and_outlined_at_zoom() {
    let mut s = session();
    assert_eq!(s.set_brush_radius(100), 40);
    assert_eq!(s.set_brush_radius(0), 2);
    s.set_brush_radius(5);
    s.set_zoom(4).unwrap();
    let outline = s.brush_outline(Point::new(8.0, 9.0)).unwrap();
    assert_eq!(outline.center, Point::new(8.0, 9.0));
    assert!((outline.radius - 20.0).abs() < 1e-9, "outline scales with zoom");
}

#[test]
fn compositor_cache_survives_painting() {
    let mut s = session();
    s.render();
    let builds = s.compositor().backdrop_builds();
    stroke(&mut s, PointerButton::Primary, (10.0, 10.0), (30.0, 10.0));
    assert_eq!(s.compositor().backdrop_builds(), builds);

    s.set_background_color(Rgb::BLACK).unwrap();
    assert_eq!(s.compositor().backdrop_builds(), builds + 1);
    assert_eq!(s.render().unwrap().pixel(0, 0), Some([0, 0, 0, 255]));
}
