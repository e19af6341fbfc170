//! Transform application: the CSS-transform path and the box-layout fallback.

use alloc::format;
use alloc::string::String;

use crate::{Point, RenderTarget, Surface};

/// What the transform path writes to the render target.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformStyle {
    /// `transform-origin: origin; transform: translate(-translate) scale(scale)`.
    Magnify {
        origin: Point,
        translate: Point,
        scale: f64,
    },
    /// Clears the transform. The transform-origin is left as is so the reverse transition
    /// animates around the same pivot.
    Identity,
}

impl TransformStyle {
    /// The `transform-origin` value, or `None` when the origin must stay untouched.
    pub fn css_origin(&self) -> Option<String> {
        match self {
            Self::Magnify { origin, .. } => Some(format!("{}px {}px", px(origin.x), px(origin.y))),
            Self::Identity => None,
        }
    }

    /// The `transform` value; empty when the transform is cleared.
    pub fn css_transform(&self) -> String {
        match self {
            Self::Magnify {
                translate, scale, ..
            } => format!(
                "translate({}px,{}px) scale({})",
                px(-translate.x),
                px(-translate.y),
                scale
            ),
            Self::Identity => String::new(),
        }
    }
}

/// What the fallback path writes when transforms are unsupported.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxLayoutStyle {
    /// `position: relative` with the given `left`/`top` (px), `width`/`height` (%), and the
    /// legacy `zoom` property.
    Relative {
        left: f64,
        top: f64,
        width_percent: f64,
        height_percent: f64,
        zoom: f64,
    },
    /// Clears position, left, top, width, height and zoom back to their defaults.
    Reset,
}

/// Which of the two application strategies a render target uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Transform,
    BoxLayout,
}

impl Strategy {
    pub fn from_capability(supports_transforms: bool) -> Self {
        if supports_transforms {
            Self::Transform
        } else {
            Self::BoxLayout
        }
    }
}

/// The result of applying a magnification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Applied {
    pub scale: f64,
    pub offset: Point,
}

/// Builds the transform-path style for a magnification (or its reset when `scale == 1`).
pub fn transform_style(scroll: Point, translate: Point, scale: f64) -> TransformStyle {
    if scale == 1.0 {
        TransformStyle::Identity
    } else {
        TransformStyle::Magnify {
            origin: scroll,
            translate,
            scale,
        }
    }
}

/// Builds the fallback style for a magnification (or its reset when `scale == 1`).
pub fn box_layout_style(scroll: Point, translate: Point, scale: f64) -> BoxLayoutStyle {
    if scale == 1.0 {
        BoxLayoutStyle::Reset
    } else {
        BoxLayoutStyle::Relative {
            left: -(scroll.x + translate.x) / scale,
            top: -(scroll.y + translate.y) / scale,
            width_percent: scale * 100.0,
            height_percent: scale * 100.0,
            zoom: scale,
        }
    }
}

/// Writes the magnification to `target` with the chosen strategy and toggles the zoomed marker.
///
/// `translate` is the already-centered offset in scaled space; `scroll` is the current scroll
/// position. Passing `scale == 1` resets the target to identity.
pub fn apply<S: Surface + ?Sized>(
    surface: &mut S,
    target: &RenderTarget<S::Element>,
    strategy: Strategy,
    scroll: Point,
    translate: Point,
    scale: f64,
) -> Applied {
    let identity = scale == 1.0;
    let offset = if identity { Point::ZERO } else { translate };
    match strategy {
        Strategy::Transform => {
            surface.apply_transform(target, &transform_style(scroll, offset, scale));
        }
        Strategy::BoxLayout => {
            surface.apply_box_layout(target, &box_layout_style(scroll, offset, scale));
        }
    }
    surface.set_zoomed_marker(!identity);
    Applied { scale, offset }
}

// Avoids "-0px" in generated CSS.
fn px(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
