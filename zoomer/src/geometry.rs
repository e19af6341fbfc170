//! Zoom request → target resolution.

use crate::{Point, Rect, ResolvedTarget, Viewport, ZoomRequest};

/// The largest uniform scale that fits a `width`×`height` rectangle inside the viewport.
///
/// Degenerate sizes are treated as `1` and the result is never below `1`: zooming never
/// demagnifies.
pub fn fit_scale(viewport: Viewport, width: f64, height: f64) -> f64 {
    let sx = viewport.width / width.max(1.0);
    let sy = viewport.height / height.max(1.0);
    sx.min(sy).max(1.0)
}

/// Resolves a request into a canonical target.
///
/// - `element` (when set) wins over any rectangle fields: its bounds, grown by `padding`, become
///   the target rectangle.
/// - A `width`/`height` pair derives the scale via [`fit_scale`]; otherwise the explicit
///   `scale` is used.
/// - `x`/`y` default to `0`, are converted into scaled space and clamped to `>= 0`.
///
/// Returns `None` when the request would not magnify (`scale <= 1`, no usable geometry, or
/// non-finite numbers).
pub fn resolve<E>(
    request: &ZoomRequest<E>,
    padding: f64,
    viewport: Viewport,
    bounds: impl FnOnce(&E) -> Rect,
) -> Option<ResolvedTarget> {
    let mut x = request.x.unwrap_or(0.0);
    let mut y = request.y.unwrap_or(0.0);
    let mut width = request.width;
    let mut height = request.height;

    if let Some(element) = &request.element {
        let rect = bounds(element).inflate(padding);
        x = rect.x;
        y = rect.y;
        width = Some(rect.width);
        height = Some(rect.height);
    }

    let scale = match (width, height) {
        (Some(w), Some(h)) => fit_scale(viewport, w, h),
        _ => request.scale?,
    };

    if !(scale.is_finite() && scale > 1.0) {
        ztrace!(scale, "resolve: target does not magnify");
        return None;
    }
    if !(x.is_finite() && y.is_finite()) {
        zwarn!(x, y, "resolve: non-finite target origin");
        return None;
    }

    Some(ResolvedTarget {
        x: (x * scale).max(0.0),
        y: (y * scale).max(0.0),
        width: width.unwrap_or(0.0).max(0.0),
        height: height.unwrap_or(0.0).max(0.0),
        scale,
    })
}

/// The translation that centers a resolved target inside the viewport.
///
/// When the scaled target overflows an axis it stays aligned to that axis' start instead.
pub fn centered_offset(target: &ResolvedTarget, viewport: Viewport) -> Point {
    let dx = ((viewport.width - target.width * target.scale) / 2.0).max(0.0);
    let dy = ((viewport.height - target.height * target.scale) / 2.0).max(0.0);
    Point::new(target.x - dx, target.y - dy)
}
