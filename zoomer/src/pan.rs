//! Edge-triggered panning.
//!
//! While zoomed, the surface scrolls toward any viewport edge the pointer is close to. Each axis
//! has a sensitivity zone along both of its edges; inside a zone the step grows linearly from
//! `0` at the zone's inner boundary to `acceleration_factor / level` at the viewport edge.

use crate::{PanTuning, Point, Viewport};

/// Pan tick cadence: 60 Hz, in whole milliseconds.
pub const PAN_TICK_MS: u64 = 1000 / 60;

/// Step size for a pointer at `ratio` of the zone depth away from the edge.
///
/// `ratio` is clamped to `0..=1`: `0` is the viewport edge (largest step), `1` the zone's inner
/// boundary (no movement). Dividing by `level` keeps the visual speed constant across
/// magnifications.
pub fn acceleration(ratio: f64, acceleration_factor: f64, level: f64) -> f64 {
    (1.0 - ratio.clamp(0.0, 1.0)) * acceleration_factor / level
}

/// Signed scroll step along one axis.
///
/// `pointer` is the pointer coordinate on the axis, `extent` the viewport size on that axis and
/// `zone_ratio` the zone depth as a fraction of `extent`. The near edge wins if both zones
/// overlap.
pub fn axis_delta(
    pointer: f64,
    extent: f64,
    zone_ratio: f64,
    acceleration_factor: f64,
    level: f64,
) -> f64 {
    let zone = extent * zone_ratio;
    if !(zone > 0.0 && level > 0.0) {
        return 0.0;
    }
    if pointer < zone {
        -acceleration(pointer / zone, acceleration_factor, level)
    } else if pointer > extent - zone {
        acceleration((extent - pointer) / zone, acceleration_factor, level)
    } else {
        0.0
    }
}

/// Scroll delta for one pan tick. Both axes are independent, so corners pan diagonally.
pub fn edge_pan_delta(pointer: Point, viewport: Viewport, level: f64, tuning: &PanTuning) -> Point {
    Point {
        x: axis_delta(
            pointer.x,
            viewport.width,
            tuning.zone_x,
            tuning.acceleration_factor,
            level,
        ),
        y: axis_delta(
            pointer.y,
            viewport.height,
            tuning.zone_y,
            tuning.acceleration_factor,
            level,
        ),
    }
}
