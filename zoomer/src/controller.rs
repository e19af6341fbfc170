use crate::geometry;
use crate::pan::{self, PAN_TICK_MS};
use crate::state::ZoomState;
use crate::transform::{self, Applied, Strategy};
use crate::{
    Host, Key, Listener, Point, RenderTarget, ResetOptions, ResolvedOptions, ResolvedTarget,
    Scheduler, TimerId, Viewport, ZoomCallback, ZoomError, ZoomOptions, ZoomOutOptions,
    ZoomRequest, ZoomResult, ZoomSnapshot,
};

/// What a [`ZoomController::zoom_to`] call did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomOutcome {
    /// The controller was zoomed and reverted to idle before resolving the new request.
    pub zoomed_out_first: bool,
    /// The applied target, or `None` when the request resolved to a no-op.
    pub target: Option<ResolvedTarget>,
}

impl ZoomOutcome {
    pub fn is_zoomed(&self) -> bool {
        self.target.is_some()
    }
}

/// A headless zoom/pan controller.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects besides the render target handle.
/// - Every operation borrows a [`Host`] for queries, style writes, timers and subscriptions.
/// - The host reports fired timers via [`Self::on_timer`] and input via
///   [`Self::on_pointer_move`] / [`Self::on_key_up`].
///
/// States are `Idle` (`zoom_level() == 1`, no pan timers) and `Zoomed`. Retargeting while
/// zoomed always passes through `Idle` first.
pub struct ZoomController<E> {
    options: ZoomOptions,
    state: ZoomState<E>,
}

impl<E> ZoomController<E> {
    /// Creates a controller magnifying the surface root.
    ///
    /// Fails when the host has no renderable surface or `options` are out of range.
    pub fn new<H>(host: &mut H, options: ZoomOptions) -> ZoomResult<Self>
    where
        H: Host<Element = E> + ?Sized,
    {
        Self::with_render_target(host, options, RenderTarget::Root)
    }

    /// Creates a controller magnifying `render_target`.
    pub fn with_render_target<H>(
        host: &mut H,
        options: ZoomOptions,
        render_target: RenderTarget<E>,
    ) -> ZoomResult<Self>
    where
        H: Host<Element = E> + ?Sized,
    {
        if !host.is_renderable() {
            zwarn!("ZoomController::new: no renderable surface");
            return Err(ZoomError::NoSurface);
        }
        options.validate().inspect_err(|_err| {
            zwarn!(error = %_err, "ZoomController::new: invalid options");
        })?;

        let mut controller = Self {
            options,
            state: ZoomState::new(render_target),
        };
        controller.init(host, None);
        Ok(controller)
    }

    /// (Re)initializes the controller to idle.
    ///
    /// Cancels every timer, resets a magnified target, re-subscribes the pointer/key listeners
    /// (unsubscribing first, so listeners never duplicate), re-probes transform support and
    /// installs the transition on the render target.
    pub fn init<H>(&mut self, host: &mut H, render_target: Option<RenderTarget<E>>) -> &mut Self
    where
        H: Host<Element = E> + ?Sized,
    {
        self.cancel_timers(host);
        if self.is_zoomed() {
            self.apply(host, Point::ZERO, 1.0);
        }
        if let Some(target) = render_target {
            self.state.render_target = target;
        }

        self.state.level = 1.0;
        self.state.offset = Point::ZERO;
        self.state.pointer = Point::ZERO;
        self.state.current = None;

        if self.state.subscribed {
            for listener in Listener::ALL {
                host.unsubscribe(listener);
            }
        }
        for listener in Listener::ALL {
            host.subscribe(listener);
        }
        self.state.subscribed = true;

        self.state.supports_transforms = host.supports_transforms();
        if self.state.supports_transforms {
            host.install_transition(&self.state.render_target, &self.options.transition);
        }
        zdebug!(
            supports_transforms = self.state.supports_transforms,
            duration_ms = self.options.transition.duration_ms,
            "ZoomController::init"
        );
        self
    }

    /// Cancels all timers, resets the surface and drops the event subscriptions.
    pub fn dispose<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        self.cancel_timers(host);
        if self.is_zoomed() {
            self.apply(host, Point::ZERO, 1.0);
        }
        if self.state.subscribed {
            for listener in Listener::ALL {
                host.unsubscribe(listener);
            }
            self.state.subscribed = false;
        }
        zdebug!("ZoomController::dispose");
    }

    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Replaces the configuration. Takes effect from the next request.
    pub fn set_options(&mut self, options: ZoomOptions) -> ZoomResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Options retained from the last request, or the defaults before any request.
    pub fn current_options(&self) -> ResolvedOptions {
        self.state
            .current
            .unwrap_or_else(|| ResolvedOptions::from_defaults(&self.options))
    }

    /// Current scale; `1` when idle.
    pub fn zoom_level(&self) -> f64 {
        self.state.level
    }

    pub fn is_zoomed(&self) -> bool {
        self.state.level != 1.0
    }

    /// Last applied translation, in scaled space.
    pub fn offset(&self) -> Point {
        self.state.offset
    }

    /// Last pointer position recorded while zoomed.
    pub fn pointer(&self) -> Point {
        self.state.pointer
    }

    pub fn supports_transforms(&self) -> bool {
        self.state.supports_transforms
    }

    pub fn strategy(&self) -> Strategy {
        Strategy::from_capability(self.state.supports_transforms)
    }

    pub fn snapshot(&self) -> ZoomSnapshot {
        self.state.snapshot()
    }

    /// The node that receives the magnification.
    pub fn origin(&self) -> &RenderTarget<E> {
        &self.state.render_target
    }

    /// Switches the render target. A magnified surface is zoomed out first.
    pub fn set_origin<H>(&mut self, host: &mut H, render_target: RenderTarget<E>) -> &mut Self
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_zoomed() {
            self.zoom_out(host, ZoomOutOptions::default());
        }
        self.state.render_target = render_target;
        if self.state.supports_transforms {
            host.install_transition(&self.state.render_target, &self.options.transition);
        }
        self
    }

    /// Zooms onto a rectangle, an explicit scale or an element.
    ///
    /// If the controller is already zoomed it zooms out first; the new request is then
    /// resolved from idle. Requests that would not magnify leave the controller idle.
    pub fn zoom_to<H>(&mut self, host: &mut H, request: ZoomRequest<E>) -> ZoomOutcome
    where
        H: Host<Element = E> + ?Sized,
    {
        let zoomed_out_first = self.is_zoomed();
        if zoomed_out_first {
            zdebug!(level = self.state.level, "zoom_to: zooming out before retargeting");
            self.zoom_out(host, ZoomOutOptions::default());
        }

        let resolved = self.current_options().merge(&request);
        self.state.current = Some(resolved);

        let viewport = host.viewport();
        let target = geometry::resolve(&request, resolved.padding, viewport, |element| {
            host.bounding_rect(element)
        });
        let Some(target) = target else {
            ztrace!(has_geometry = request.has_geometry(), "zoom_to: no-op");
            return ZoomOutcome {
                zoomed_out_first,
                target: None,
            };
        };

        let translate = geometry::centered_offset(&target, viewport);
        self.apply(host, translate, target.scale);
        zdebug!(
            scale = target.scale,
            offset_x = self.state.offset.x,
            offset_y = self.state.offset.y,
            pan = resolved.pan,
            "zoom_to"
        );

        if resolved.pan {
            // Panning waits for the zoom transition so it does not fight the animation.
            if let Some(prev) = self.state.pan_engage.take() {
                host.cancel(prev);
            }
            let delay_ms = self.options.transition.duration_ms;
            self.state.pan_engage = Some(host.schedule_timeout(delay_ms));
        }
        if let Some(callback) = request.callback {
            self.arm_callback(host, callback);
        }

        ZoomOutcome {
            zoomed_out_first,
            target: Some(target),
        }
    }

    /// Alias of [`Self::zoom_to`].
    pub fn magnify<H>(&mut self, host: &mut H, request: ZoomRequest<E>) -> ZoomOutcome
    where
        H: Host<Element = E> + ?Sized,
    {
        self.zoom_to(host, request)
    }

    /// Returns to idle.
    ///
    /// All timers are cancelled (armed or not), the render target is reset to identity and the
    /// level returns to `1`. An optional callback fires once the reverse transition's duration
    /// has elapsed. Returns the applied scale.
    pub fn zoom_out<H>(&mut self, host: &mut H, options: ZoomOutOptions) -> f64
    where
        H: Host<Element = E> + ?Sized,
    {
        self.cancel_timers(host);
        self.apply(host, Point::ZERO, 1.0);
        zdebug!("zoom_out");
        if let Some(callback) = options.callback {
            self.arm_callback(host, callback);
        }
        self.state.level
    }

    /// Merges pan-tuning overrides into the defaults and the retained options, then zooms out.
    ///
    /// Overrides that would produce an invalid tuning are ignored.
    pub fn reset<H>(&mut self, host: &mut H, options: ResetOptions) -> f64
    where
        H: Host<Element = E> + ?Sized,
    {
        let defaults = options.apply_to(self.options.defaults);
        match defaults.validate() {
            Ok(()) => self.options.defaults = defaults,
            Err(_err) => {
                zwarn!(error = %_err, "reset: ignoring pan tuning overrides");
            }
        }
        if let Some(current) = &mut self.state.current {
            let tuning = options.apply_to(current.tuning);
            if tuning.validate().is_ok() {
                current.tuning = tuning;
            }
        }
        self.zoom_out(
            host,
            ZoomOutOptions {
                callback: options.callback,
            },
        )
    }

    /// Dispatches a fired timer. Ids the controller no longer owns are ignored.
    pub fn on_timer<H>(&mut self, host: &mut H, id: TimerId)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.state.pan_engage == Some(id) {
            self.state.pan_engage = None;
            if let Some(prev) = self.state.pan_update.take() {
                host.cancel(prev);
            }
            self.state.pan_update = Some(host.schedule_interval(PAN_TICK_MS));
            ztrace!("pan engaged");
        } else if self.state.pan_update == Some(id) {
            self.pan(host);
        } else if self.state.callback_timer == Some(id) {
            self.state.callback_timer = None;
            if let Some(callback) = self.state.callback.take() {
                callback();
            }
        } else {
            ztrace!(id = id.0, "on_timer: stale timer");
        }
    }

    /// Records the pointer position. Ignored while idle.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        if self.is_zoomed() {
            self.state.pointer = Point::new(x, y);
        }
    }

    /// Escape zooms out while zoomed.
    pub fn on_key_up<H>(&mut self, host: &mut H, key: Key)
    where
        H: Host<Element = E> + ?Sized,
    {
        if self.is_zoomed() && key == Key::Escape {
            self.zoom_out(host, ZoomOutOptions::default());
        }
    }

    /// The scroll step the next pan tick would take for the given viewport.
    pub fn pan_delta(&self, viewport: Viewport) -> Point {
        if !self.is_zoomed() {
            return Point::ZERO;
        }
        let tuning = self.current_options().tuning;
        pan::edge_pan_delta(self.state.pointer, viewport, self.state.level, &tuning)
    }

    fn pan<H>(&mut self, host: &mut H)
    where
        H: Host<Element = E> + ?Sized,
    {
        let delta = self.pan_delta(host.viewport());
        if delta.is_zero() {
            return;
        }
        let scroll = host.scroll_offset();
        host.scroll_to(Point::new(scroll.x + delta.x, scroll.y + delta.y));
    }

    fn apply<H>(&mut self, host: &mut H, translate: Point, scale: f64)
    where
        H: Host<Element = E> + ?Sized,
    {
        let scroll = host.scroll_offset();
        let Applied { scale, offset } = transform::apply(
            host,
            &self.state.render_target,
            self.strategy(),
            scroll,
            translate,
            scale,
        );
        self.state.level = scale;
        self.state.offset = offset;
    }

    fn arm_callback<H>(&mut self, host: &mut H, callback: ZoomCallback)
    where
        H: Scheduler + ?Sized,
    {
        if let Some(prev) = self.state.callback_timer.take() {
            host.cancel(prev);
        }
        let delay_ms = self.options.transition.duration_ms;
        self.state.callback_timer = Some(host.schedule_timeout(delay_ms));
        self.state.callback = Some(callback);
    }

    fn cancel_timers<H>(&mut self, host: &mut H)
    where
        H: Scheduler + ?Sized,
    {
        let timers = [
            self.state.pan_engage.take(),
            self.state.pan_update.take(),
            self.state.callback_timer.take(),
        ];
        for id in timers.into_iter().flatten() {
            host.cancel(id);
        }
        self.state.callback = None;
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for ZoomController<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZoomController")
            .field("options", &self.options)
            .field("level", &self.state.level)
            .field("offset", &self.state.offset)
            .field("render_target", &self.state.render_target)
            .field("supports_transforms", &self.state.supports_transforms)
            .finish_non_exhaustive()
    }
}
