use crate::options::ZoomCallback;
use crate::{Point, RenderTarget, ResolvedOptions, TimerId};

/// A lightweight, serializable snapshot of the controller's observable state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomSnapshot {
    pub level: f64,
    pub offset: Point,
    pub pointer: Point,
    pub pan_engaging: bool,
    pub panning: bool,
    pub callback_pending: bool,
}

/// Mutable per-controller state.
///
/// Invariant: `level == 1` implies no pan timer is armed and the render target carries the
/// identity transform.
pub(crate) struct ZoomState<E> {
    pub(crate) level: f64,
    pub(crate) offset: Point,
    pub(crate) pointer: Point,
    pub(crate) current: Option<ResolvedOptions>,
    pub(crate) pan_engage: Option<TimerId>,
    pub(crate) pan_update: Option<TimerId>,
    pub(crate) callback_timer: Option<TimerId>,
    pub(crate) callback: Option<ZoomCallback>,
    pub(crate) render_target: RenderTarget<E>,
    pub(crate) supports_transforms: bool,
    pub(crate) subscribed: bool,
}

impl<E> ZoomState<E> {
    pub(crate) fn new(render_target: RenderTarget<E>) -> Self {
        Self {
            level: 1.0,
            offset: Point::ZERO,
            pointer: Point::ZERO,
            current: None,
            pan_engage: None,
            pan_update: None,
            callback_timer: None,
            callback: None,
            render_target,
            supports_transforms: false,
            subscribed: false,
        }
    }

    pub(crate) fn snapshot(&self) -> ZoomSnapshot {
        ZoomSnapshot {
            level: self.level,
            offset: self.offset,
            pointer: self.pointer,
            pan_engaging: self.pan_engage.is_some(),
            panning: self.pan_update.is_some(),
            callback_pending: self.callback_timer.is_some(),
        }
    }
}
