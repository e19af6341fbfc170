//! Collaborator traits a host implements to drive a [`crate::ZoomController`].
//!
//! The controller never touches a UI object directly. Every read (viewport, scroll position,
//! element bounds, transform capability) and every write (styles, scrolling, timers, event
//! subscriptions) goes through these traits, so the same state machine can back a DOM binding,
//! a canvas renderer or a test double.

use crate::{BoxLayoutStyle, Listener, Point, Rect, RenderTarget, TimerId, TransformStyle};
use crate::{Transition, Viewport};

/// Geometry queries and style writes against the rendered surface.
///
/// Queries are re-issued for every computation; implementations should not cache them.
pub trait Surface {
    /// Handle to a rendered node (an element reference, a node id, ...).
    type Element;

    /// Whether a renderable surface exists at all. Controllers cannot be built otherwise.
    fn is_renderable(&self) -> bool {
        true
    }

    /// Capability probe: whether the render target accepts 2D transform styling.
    fn supports_transforms(&self) -> bool;

    fn viewport(&self) -> Viewport;

    fn scroll_offset(&self) -> Point;

    fn scroll_to(&mut self, offset: Point);

    /// The element's rendered bounds, relative to the visible top-left corner.
    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    /// Writes (or clears) the transform and transform-origin of `target`.
    fn apply_transform(&mut self, target: &RenderTarget<Self::Element>, style: &TransformStyle);

    /// Writes (or clears) the fallback positioning used when transforms are unsupported.
    fn apply_box_layout(&mut self, target: &RenderTarget<Self::Element>, style: &BoxLayoutStyle);

    /// Toggles the document-wide "zoomed" marker (e.g. a class on the root element).
    fn set_zoomed_marker(&mut self, zoomed: bool);

    /// Installs transition timing/easing on `target`.
    fn install_transition(&mut self, target: &RenderTarget<Self::Element>, transition: &Transition);
}

/// Wall-clock timers.
///
/// When a timer fires, the host calls [`crate::ZoomController::on_timer`] with its id.
pub trait Scheduler {
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerId;

    fn schedule_interval(&mut self, period_ms: u64) -> TimerId;

    /// Cancels a timer. Unknown or already-fired ids must be ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Event subscriptions.
///
/// Hosts forward delivered events to [`crate::ZoomController::on_pointer_move`] and
/// [`crate::ZoomController::on_key_up`].
pub trait Events {
    fn subscribe(&mut self, listener: Listener);

    fn unsubscribe(&mut self, listener: Listener);
}

/// Everything a controller needs from its environment.
pub trait Host: Surface + Scheduler + Events {}

impl<T: Surface + Scheduler + Events + ?Sized> Host for T {}
