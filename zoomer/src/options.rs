use alloc::sync::Arc;

use crate::{Rect, Transition, ZoomError, ZoomResult};

/// A callback fired once the zoom-in (or zoom-out) transition is assumed finished.
///
/// Completion is approximated by elapsed time equal to the transition duration.
pub type ZoomCallback = Arc<dyn Fn() + Send + Sync>;

/// Edge-pan tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanTuning {
    /// Width of the left/right sensitivity zones, as a fraction of the viewport width.
    pub zone_x: f64,
    /// Height of the top/bottom sensitivity zones, as a fraction of the viewport height.
    pub zone_y: f64,
    /// Maximum scroll step per tick at zoom level 1, reached at the viewport edge.
    pub acceleration_factor: f64,
}

impl Default for PanTuning {
    fn default() -> Self {
        // The vertical zone is taller so both zones end up similar in pixels on 16:9 screens.
        Self {
            zone_x: 0.12,
            zone_y: 0.12 * 16.0 / 9.0,
            acceleration_factor: 14.0,
        }
    }
}

impl PanTuning {
    pub fn validate(&self) -> ZoomResult<()> {
        check_ratio("zone_x", self.zone_x)?;
        check_ratio("zone_y", self.zone_y)?;
        if !(self.acceleration_factor.is_finite() && self.acceleration_factor > 0.0) {
            return Err(ZoomError::InvalidOption {
                name: "acceleration_factor",
                value: self.acceleration_factor,
            });
        }
        Ok(())
    }

    fn merged(
        mut self,
        zone_x: Option<f64>,
        zone_y: Option<f64>,
        acceleration_factor: Option<f64>,
    ) -> Self {
        if let Some(v) = zone_x {
            self.zone_x = v;
        }
        if let Some(v) = zone_y {
            self.zone_y = v;
        }
        if let Some(v) = acceleration_factor {
            self.acceleration_factor = v;
        }
        self
    }
}

fn check_ratio(name: &'static str, value: f64) -> ZoomResult<()> {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ZoomError::InvalidOption { name, value })
    }
}

fn check_padding(value: f64) -> ZoomResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ZoomError::InvalidOption {
            name: "padding",
            value,
        })
    }
}

/// Configuration for [`crate::ZoomController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomOptions {
    /// Pan tuning used when a request does not override it.
    pub defaults: PanTuning,
    pub transition: Transition,
    /// Space left around a zoomed element, in pixels.
    pub padding: f64,
    /// Whether edge panning engages after a zoom-in unless a request says otherwise.
    pub pan: bool,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            defaults: PanTuning::default(),
            transition: Transition::default(),
            padding: 20.0,
            pan: true,
        }
    }
}

impl ZoomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(mut self, defaults: PanTuning) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition.duration_ms = duration_ms;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_pan(mut self, pan: bool) -> Self {
        self.pan = pan;
        self
    }

    /// Checks every value against its accepted range.
    pub fn validate(&self) -> ZoomResult<()> {
        self.defaults.validate()?;
        if self.transition.duration_ms == 0 {
            return Err(ZoomError::InvalidOption {
                name: "duration_ms",
                value: 0.0,
            });
        }
        check_padding(self.padding)
    }
}

/// The options retained from the last `zoom_to` call.
///
/// Later requests inherit these values for every field they leave unset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedOptions {
    pub tuning: PanTuning,
    pub padding: f64,
    pub pan: bool,
}

impl ResolvedOptions {
    pub(crate) fn from_defaults(options: &ZoomOptions) -> Self {
        Self {
            tuning: options.defaults,
            padding: options.padding,
            pan: options.pan,
        }
    }

    /// Applies the request's tuning fields.
    ///
    /// Overrides that fail validation are dropped and the previous values are kept.
    pub(crate) fn merge<E>(mut self, request: &ZoomRequest<E>) -> Self {
        let tuning = self.tuning.merged(
            request.zone_x,
            request.zone_y,
            request.acceleration_factor,
        );
        match tuning.validate() {
            Ok(()) => self.tuning = tuning,
            Err(_err) => {
                zwarn!(error = %_err, "zoom_to: ignoring pan tuning overrides");
            }
        }
        if let Some(padding) = request.padding {
            match check_padding(padding) {
                Ok(()) => self.padding = padding,
                Err(_err) => {
                    zwarn!(error = %_err, "zoom_to: ignoring padding override");
                }
            }
        }
        if let Some(pan) = request.pan {
            self.pan = pan;
        }
        self
    }
}

/// A zoom intent.
///
/// The target comes from `element` when set (it takes precedence), otherwise from `x`/`y` plus
/// either `width`/`height` or an explicit `scale`. Coordinates are untransformed surface pixels
/// measured from the visible top-left corner.
///
/// Tuning fields left unset fall back to the previous request's values, then to
/// [`ZoomOptions`]. Geometry and `callback` are never inherited.
pub struct ZoomRequest<E> {
    pub element: Option<E>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Used only when no `width`/`height` pair is available.
    pub scale: Option<f64>,
    pub padding: Option<f64>,
    pub pan: Option<bool>,
    pub callback: Option<ZoomCallback>,
    pub zone_x: Option<f64>,
    pub zone_y: Option<f64>,
    pub acceleration_factor: Option<f64>,
}

impl<E> Default for ZoomRequest<E> {
    fn default() -> Self {
        Self {
            element: None,
            x: None,
            y: None,
            width: None,
            height: None,
            scale: None,
            padding: None,
            pan: None,
            callback: None,
            zone_x: None,
            zone_y: None,
            acceleration_factor: None,
        }
    }
}

impl<E: Clone> Clone for ZoomRequest<E> {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            scale: self.scale,
            padding: self.padding,
            pan: self.pan,
            callback: self.callback.clone(),
            zone_x: self.zone_x,
            zone_y: self.zone_y,
            acceleration_factor: self.acceleration_factor,
        }
    }
}

impl<E> ZoomRequest<E> {
    /// Zooms onto a rendered element (plus padding).
    pub fn element(element: E) -> Self {
        Self {
            element: Some(element),
            ..Self::default()
        }
    }

    /// Zooms so that the rectangle fills the viewport.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Zooms by an explicit scale, centering the point `(x, y)`.
    pub fn scale_at(x: f64, y: f64, scale: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::rect(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn with_pan(mut self, pan: bool) -> Self {
        self.pan = Some(pan);
        self
    }

    pub fn with_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub fn with_zones(mut self, zone_x: f64, zone_y: f64) -> Self {
        self.zone_x = Some(zone_x);
        self.zone_y = Some(zone_y);
        self
    }

    pub fn with_acceleration_factor(mut self, acceleration_factor: f64) -> Self {
        self.acceleration_factor = Some(acceleration_factor);
        self
    }

    /// Whether the request carries anything that can determine a target.
    pub fn has_geometry(&self) -> bool {
        self.element.is_some()
            || (self.width.is_some() && self.height.is_some())
            || self.scale.is_some()
    }
}

impl<E: core::fmt::Debug> core::fmt::Debug for ZoomRequest<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZoomRequest")
            .field("element", &self.element)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("scale", &self.scale)
            .field("padding", &self.padding)
            .field("pan", &self.pan)
            .field("zone_x", &self.zone_x)
            .field("zone_y", &self.zone_y)
            .field("acceleration_factor", &self.acceleration_factor)
            .finish_non_exhaustive()
    }
}

/// Options for [`crate::ZoomController::zoom_out`].
#[derive(Clone, Default)]
pub struct ZoomOutOptions {
    pub callback: Option<ZoomCallback>,
}

impl ZoomOutOptions {
    pub fn with_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.callback = Some(Arc::new(callback));
        self
    }
}

impl core::fmt::Debug for ZoomOutOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZoomOutOptions")
            .field("callback", &self.callback.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Options for [`crate::ZoomController::reset`].
///
/// Tuning overrides are merged into both the controller defaults and the retained options of
/// the last request before zooming out.
#[derive(Clone, Default)]
pub struct ResetOptions {
    pub zone_x: Option<f64>,
    pub zone_y: Option<f64>,
    pub acceleration_factor: Option<f64>,
    pub callback: Option<ZoomCallback>,
}

impl ResetOptions {
    pub fn with_zones(mut self, zone_x: f64, zone_y: f64) -> Self {
        self.zone_x = Some(zone_x);
        self.zone_y = Some(zone_y);
        self
    }

    pub fn with_acceleration_factor(mut self, acceleration_factor: f64) -> Self {
        self.acceleration_factor = Some(acceleration_factor);
        self
    }

    pub fn with_callback(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub(crate) fn apply_to(&self, tuning: PanTuning) -> PanTuning {
        tuning.merged(self.zone_x, self.zone_y, self.acceleration_factor)
    }
}

impl core::fmt::Debug for ResetOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResetOptions")
            .field("zone_x", &self.zone_x)
            .field("zone_y", &self.zone_y)
            .field("acceleration_factor", &self.acceleration_factor)
            .finish_non_exhaustive()
    }
}
