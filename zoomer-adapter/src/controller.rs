use zoomer::{
    BoxLayoutStyle, Events, Key, Listener, Point, Rect, RenderTarget, ResetOptions, Scheduler,
    Surface, TimerId, TransformStyle, Transition, Viewport, ZoomController, ZoomOptions,
    ZoomOutOptions, ZoomOutcome, ZoomRequest, ZoomResult,
};

use crate::{TimerQueue, TransformFrame, Tween};

/// A framework-neutral driver that owns a surface, a virtual-time [`TimerQueue`] and a
/// [`ZoomController`].
///
/// Adapters drive it by calling:
/// - `zoom_to` / `zoom_out` / `reset` for user intents
/// - `on_pointer_move` / `on_key_up` when input events occur
/// - `tick(now_ms)` each frame/timer tick (fires due timers: pan engagement, pan steps and
///   completion callbacks)
///
/// For hosts that cannot rely on a native transition, `frame(now_ms)` samples the zoom
/// transition with the configured easing.
pub struct Controller<S: Surface> {
    zoom: ZoomController<S::Element>,
    surface: S,
    timers: TimerQueue,
    tween: Option<Tween>,
}

impl<S: Surface + Events> Controller<S> {
    pub fn new(surface: S, options: ZoomOptions) -> ZoomResult<Self> {
        let mut surface = surface;
        let mut timers = TimerQueue::new();
        let zoom = ZoomController::new(
            &mut Bound {
                surface: &mut surface,
                timers: &mut timers,
            },
            options,
        )?;
        Ok(Self {
            zoom,
            surface,
            timers,
            tween: None,
        })
    }

    pub fn zoom(&self) -> &ZoomController<S::Element> {
        &self.zoom
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for host-side changes (viewport resize, element moves).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn zoom_to(&mut self, request: ZoomRequest<S::Element>, now_ms: u64) -> ZoomOutcome {
        let before = self.begin(now_ms);
        let (zoom, mut host) = self.split();
        let outcome = zoom.zoom_to(&mut host, request);
        self.animate_from(before, now_ms);
        outcome
    }

    pub fn zoom_out(&mut self, options: ZoomOutOptions, now_ms: u64) -> f64 {
        let before = self.begin(now_ms);
        let (zoom, mut host) = self.split();
        let level = zoom.zoom_out(&mut host, options);
        self.animate_from(before, now_ms);
        level
    }

    pub fn reset(&mut self, options: ResetOptions, now_ms: u64) -> f64 {
        let before = self.begin(now_ms);
        let (zoom, mut host) = self.split();
        let level = zoom.reset(&mut host, options);
        self.animate_from(before, now_ms);
        level
    }

    pub fn set_origin(&mut self, render_target: RenderTarget<S::Element>, now_ms: u64) {
        let before = self.begin(now_ms);
        let (zoom, mut host) = self.split();
        zoom.set_origin(&mut host, render_target);
        self.animate_from(before, now_ms);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.zoom.on_pointer_move(x, y);
    }

    pub fn on_key_up(&mut self, key: Key, now_ms: u64) {
        let before = self.begin(now_ms);
        let (zoom, mut host) = self.split();
        zoom.on_key_up(&mut host, key);
        self.animate_from(before, now_ms);
    }

    /// Advances virtual time to `now_ms`, firing every timer due on the way in order.
    ///
    /// Returns the number of timers fired.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0usize;
        while let Some(id) = self.timers.pop_due(now_ms) {
            let (zoom, mut host) = self.split();
            zoom.on_timer(&mut host, id);
            fired = fired.saturating_add(1);
        }
        self.timers.set_now(now_ms);
        if self.tween.is_some_and(|t| t.is_done(now_ms)) {
            self.tween = None;
        }
        #[cfg(feature = "tracing")]
        if fired > 0 {
            tracing::trace!(
                target: "zoomer_adapter",
                now_ms,
                fired,
                pending = self.timers.len(),
                "tick"
            );
        }
        fired
    }

    /// The magnification a renderer should show at `now_ms`.
    pub fn frame(&self, now_ms: u64) -> TransformFrame {
        match self.tween {
            Some(tween) if !tween.is_done(now_ms) => tween.sample(now_ms),
            _ => self.settled(),
        }
    }

    /// Cancels timers, resets the surface and drops the event subscriptions.
    pub fn dispose(&mut self) {
        let (zoom, mut host) = self.split();
        zoom.dispose(&mut host);
        self.tween = None;
    }

    fn settled(&self) -> TransformFrame {
        TransformFrame::new(self.zoom.zoom_level(), self.zoom.offset())
    }

    fn begin(&mut self, now_ms: u64) -> TransformFrame {
        self.timers.set_now(now_ms);
        self.frame(now_ms)
    }

    fn animate_from(&mut self, before: TransformFrame, now_ms: u64) {
        let after = self.settled();
        if before == after {
            return;
        }
        let transition = self.zoom.options().transition;
        self.tween = Some(Tween::from_transition(before, after, now_ms, &transition));
    }

    fn split(&mut self) -> (&mut ZoomController<S::Element>, Bound<'_, S>) {
        let Self {
            zoom,
            surface,
            timers,
            ..
        } = self;
        (zoom, Bound { surface, timers })
    }
}

impl<S> core::fmt::Debug for Controller<S>
where
    S: Surface + core::fmt::Debug,
    S::Element: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("zoom", &self.zoom)
            .field("surface", &self.surface)
            .field("timers", &self.timers)
            .field("tween", &self.tween)
            .finish()
    }
}

/// A surface paired with the controller's timer queue, presented to the core as one host.
struct Bound<'a, S> {
    surface: &'a mut S,
    timers: &'a mut TimerQueue,
}

impl<S: Surface> Surface for Bound<'_, S> {
    type Element = S::Element;

    fn is_renderable(&self) -> bool {
        self.surface.is_renderable()
    }

    fn supports_transforms(&self) -> bool {
        self.surface.supports_transforms()
    }

    fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    fn scroll_offset(&self) -> Point {
        self.surface.scroll_offset()
    }

    fn scroll_to(&mut self, offset: Point) {
        self.surface.scroll_to(offset);
    }

    fn bounding_rect(&self, element: &S::Element) -> Rect {
        self.surface.bounding_rect(element)
    }

    fn apply_transform(&mut self, target: &RenderTarget<S::Element>, style: &TransformStyle) {
        self.surface.apply_transform(target, style);
    }

    fn apply_box_layout(&mut self, target: &RenderTarget<S::Element>, style: &BoxLayoutStyle) {
        self.surface.apply_box_layout(target, style);
    }

    fn set_zoomed_marker(&mut self, zoomed: bool) {
        self.surface.set_zoomed_marker(zoomed);
    }

    fn install_transition(&mut self, target: &RenderTarget<S::Element>, transition: &Transition) {
        self.surface.install_transition(target, transition);
    }
}

impl<S> Scheduler for Bound<'_, S> {
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.timers.schedule_timeout(delay_ms)
    }

    fn schedule_interval(&mut self, period_ms: u64) -> TimerId {
        self.timers.schedule_interval(period_ms)
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.cancel(id);
    }
}

impl<S: Events> Events for Bound<'_, S> {
    fn subscribe(&mut self, listener: Listener) {
        self.surface.subscribe(listener);
    }

    fn unsubscribe(&mut self, listener: Listener) {
        self.surface.unsubscribe(listener);
    }
}
