use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use zoomer::pan::PAN_TICK_MS;
use zoomer::{
    BoxLayoutStyle, Easing, Key, Listener, Point, Rect, Scheduler, Surface, TimerId, Viewport,
    ZoomError, ZoomOptions, ZoomOutOptions, ZoomRequest,
};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn surface() -> HeadlessSurface {
    HeadlessSurface::new(Viewport::new(1000.0, 800.0), Viewport::new(4000.0, 3000.0))
        .with_element(ElementId(1), Rect::new(500.0, 400.0, 100.0, 50.0))
}

#[test]
fn timer_queue_releases_in_due_order() {
    let mut q = TimerQueue::new();
    let a = q.schedule_timeout(50);
    let b = q.schedule_interval(20);
    let c = q.schedule_timeout(20);

    let mut fired = Vec::new();
    while let Some(id) = q.pop_due(100) {
        fired.push(id);
    }
    assert_eq!(fired, [b, c, b, a, b, b, b]);
    assert_eq!(q.now_ms(), 100);
    assert!(q.is_armed(b));
    assert!(!q.is_armed(a));
    assert_eq!(q.next_due_ms(), Some(120));
}

#[test]
fn timer_queue_cancel_is_idempotent() {
    let mut q = TimerQueue::new();
    let id = q.schedule_timeout(10);
    q.cancel(TimerId(42));
    assert_eq!(q.len(), 1);
    q.cancel(id);
    q.cancel(id);
    assert!(q.is_empty());
    assert_eq!(q.pop_due(1000), None);
}

#[test]
fn timer_queue_schedules_relative_to_now() {
    let mut q = TimerQueue::new();
    q.set_now(500);
    q.set_now(100);
    assert_eq!(q.now_ms(), 500);
    q.schedule_timeout(800);
    assert_eq!(q.next_due_ms(), Some(1300));
}

#[test]
fn headless_surface_clamps_scrolling() {
    let mut s = surface();
    assert_eq!(s.max_scroll(), Point::new(3000.0, 2200.0));
    s.scroll_to(Point::new(-5.0, 5000.0));
    assert_eq!(s.scroll_offset(), Point::new(0.0, 2200.0));
    assert_eq!(s.scroll_writes(), 1);

    s.set_viewport(Viewport::new(2000.0, 2900.0));
    assert_eq!(s.scroll_offset(), Point::new(0.0, 100.0));
}

#[test]
fn headless_surface_reports_viewport_relative_bounds() {
    let mut s = surface();
    s.scroll_to(Point::new(100.0, 50.0));
    assert_eq!(
        s.bounding_rect(&ElementId(1)),
        Rect::new(400.0, 350.0, 100.0, 50.0)
    );
    assert_eq!(s.bounding_rect(&ElementId(9)), Rect::new(-100.0, -50.0, 0.0, 0.0));
}

#[test]
fn session_zooms_pans_and_escapes() {
    let mut c = Controller::new(surface(), ZoomOptions::default()).unwrap();
    assert_eq!(c.surface().listeners(), [Listener::PointerMove, Listener::KeyUp]);
    assert_eq!(c.surface().transition(), Some("transform 0.8s ease-in-out"));

    let outcome = c.zoom_to(ZoomRequest::element(ElementId(1)), 0);
    let target = outcome.target.unwrap();
    assert_eq!((target.width, target.height), (140.0, 90.0));
    let scale = 1000.0 / 140.0;
    assert!(approx_eq(c.zoom().zoom_level(), scale));
    assert!(c.surface().is_marked_zoomed());
    assert_eq!(c.surface().transform_origin(), Some("0px 0px"));

    // Pan engages only once the transition has elapsed.
    assert_eq!(c.tick(799), 0);
    assert!(c.zoom().snapshot().pan_engaging);
    assert_eq!(c.tick(800), 1);
    assert!(c.zoom().snapshot().panning);

    c.on_pointer_move(1000.0, 400.0);
    // Ticks at 816, 832, ..., 992.
    let fired = c.tick(1000);
    assert_eq!(fired, 12);
    let step = 14.0 / scale;
    assert!(approx_eq(c.surface().scroll_offset().x, 12.0 * step));
    assert_eq!(c.surface().scroll_offset().y, 0.0);

    c.on_key_up(Key::Escape, 1000);
    assert_eq!(c.zoom().zoom_level(), 1.0);
    assert!(c.timers().is_empty());
    assert_eq!(c.surface().transform(), "");
    assert!(!c.surface().is_marked_zoomed());

    // Nothing moves after zooming out.
    let scroll = c.surface().scroll_offset();
    assert_eq!(c.tick(2000), 0);
    assert_eq!(c.surface().scroll_offset(), scroll);
}

#[test]
fn pan_tick_period_is_sixty_hertz() {
    assert_eq!(PAN_TICK_MS, 16);
}

#[test]
fn frames_follow_the_transition() {
    let mut c = Controller::new(surface(), ZoomOptions::default()).unwrap();
    assert_eq!(c.frame(0), TransformFrame::IDENTITY);

    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0), 0);
    assert!(c.is_animating());
    assert_eq!(c.frame(0), TransformFrame::IDENTITY);

    let mid = c.frame(400);
    assert!(mid.scale > 1.0 && mid.scale < 8.0);
    assert!((mid.scale - 4.5).abs() < 1e-6);

    assert_eq!(c.frame(800), TransformFrame::new(8.0, c.zoom().offset()));
    c.tick(800);
    assert!(!c.is_animating());

    c.zoom_out(ZoomOutOptions::default(), 1000);
    assert!(c.is_animating());
    assert_eq!(c.frame(1000).scale, 8.0);
    assert!(c.frame(1800).is_identity());
}

#[test]
fn interrupted_zoom_reverses_from_the_current_frame() {
    let mut c = Controller::new(surface(), ZoomOptions::default()).unwrap();
    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0), 0);
    let mid = c.frame(400);

    c.zoom_out(ZoomOutOptions::default(), 400);
    assert_eq!(c.frame(400), mid);
    assert!(c.frame(1200).is_identity());
}

#[test]
fn retargeting_reports_the_intermediate_zoom_out() {
    let mut c = Controller::new(surface(), ZoomOptions::default()).unwrap();
    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0), 0);
    let outcome = c.zoom_to(ZoomRequest::rect(0.0, 0.0, 250.0, 200.0), 100);
    assert!(outcome.zoomed_out_first);
    assert_eq!(c.zoom().zoom_level(), 4.0);
    // Only the new engage timer remains.
    assert_eq!(c.timers().len(), 1);
    assert_eq!(c.timers().next_due_ms(), Some(900));
}

#[test]
fn fallback_surface_uses_box_layout() {
    let s = surface().with_transforms(false);
    let mut c = Controller::new(s, ZoomOptions::default()).unwrap();
    assert_eq!(c.surface().transition(), None);

    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0), 0);
    assert!(matches!(
        c.surface().box_layout(),
        BoxLayoutStyle::Relative { zoom, .. } if zoom == 8.0
    ));
    assert_eq!(c.surface().transform(), "");

    c.zoom_out(ZoomOutOptions::default(), 10);
    assert_eq!(c.surface().box_layout(), BoxLayoutStyle::Reset);
}

#[test]
fn unrenderable_surface_is_rejected() {
    let s = surface().with_renderable(false);
    let err = Controller::new(s, ZoomOptions::default()).unwrap_err();
    assert_eq!(err, ZoomError::NoSurface);
}

#[test]
fn zoom_out_callback_fires_after_the_duration() {
    let mut c = Controller::new(surface(), ZoomOptions::default().with_duration_ms(300)).unwrap();
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);

    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0).with_pan(false), 0);
    c.zoom_out(
        ZoomOutOptions::default().with_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
        50,
    );
    c.tick(349);
    assert_eq!(count.load(Ordering::SeqCst), 0);
    c.tick(350);
    assert_eq!(count.load(Ordering::SeqCst), 1);
    c.tick(5000);
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn dispose_releases_everything() {
    let mut c = Controller::new(surface(), ZoomOptions::default()).unwrap();
    c.zoom_to(ZoomRequest::rect(0.0, 0.0, 100.0, 100.0), 0);
    c.dispose();
    assert!(c.surface().listeners().is_empty());
    assert!(c.timers().is_empty());
    assert_eq!(c.zoom().zoom_level(), 1.0);
    assert!(!c.is_animating());
}

#[test]
fn tween_retarget_starts_from_the_current_sample() {
    let zoomed = TransformFrame::new(4.0, Point::new(100.0, 0.0));
    let mut t = Tween::new(TransformFrame::IDENTITY, zoomed, 0, 100, Easing::Linear);
    assert_eq!(t.sample(50).scale, 2.5);
    assert_eq!(t.sample(50).offset, Point::new(50.0, 0.0));

    t.retarget(50, TransformFrame::IDENTITY, 100);
    assert_eq!(t.from.scale, 2.5);
    assert_eq!(t.sample(100).scale, 1.75);
    assert!(!t.is_done(149));
    assert!(t.is_done(150));
}
