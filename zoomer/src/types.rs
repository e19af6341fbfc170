/// A point (or 2D offset) in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// The surface's scroll position, re-read from the host on every computation.
pub type ScrollOffset = Point;

/// An axis-aligned rectangle in untransformed surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grows the rectangle by `padding` on every side.
    pub fn inflate(&self, padding: f64) -> Self {
        Self {
            x: self.x - padding,
            y: self.y - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// The visible area of the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The outcome of resolving a zoom request.
///
/// `x`/`y` are already expressed in scaled space (multiplied by `scale` and clamped to `>= 0`).
/// `width`/`height` are the unscaled target size; both are `0` when the request only carried an
/// explicit scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedTarget {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Always `> 1`; targets that would not magnify are never resolved.
    pub scale: f64,
}

/// The node that receives the magnification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RenderTarget<E> {
    /// The surface root (e.g. the document body).
    #[default]
    Root,
    Element(E),
}

impl<E> RenderTarget<E> {
    pub fn element(&self) -> Option<&E> {
        match self {
            Self::Root => None,
            Self::Element(e) => Some(e),
        }
    }
}

/// Opaque handle returned by a [`crate::Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);

/// Host event streams the controller listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Listener {
    PointerMove,
    KeyUp,
}

impl Listener {
    pub const ALL: [Self; 2] = [Self::PointerMove, Self::KeyUp];
}

/// Keys the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Maps a legacy DOM `keyCode`.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            27 => Self::Escape,
            _ => Self::Other,
        }
    }
}
