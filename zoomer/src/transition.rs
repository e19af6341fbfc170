use alloc::format;
use alloc::string::String;

/// Timing curve of the zoom transition, named after the CSS keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Control points `(x1, y1, x2, y2)` of the equivalent CSS `cubic-bezier()`.
    pub fn control_points(self) -> (f64, f64, f64, f64) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Samples the curve at progress `t` (clamped to `0..=1`).
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if self == Self::Linear || t == 0.0 || t == 1.0 {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();
        // x(u) is monotonic for every CSS keyword curve, so bisection always converges.
        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        let mut u = t;
        for _ in 0..32 {
            let x = bezier(u, x1, x2);
            if x < t {
                lo = u;
            } else {
                hi = u;
            }
            u = (lo + hi) * 0.5;
        }
        bezier(u, y1, y2)
    }
}

fn bezier(u: f64, p1: f64, p2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

/// How long the zoom transition takes and how it is eased.
///
/// The controller uses `duration_ms` to delay pan engagement and completion callbacks; it
/// never waits for an actual transition-end signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 800,
            easing: Easing::EaseInOut,
        }
    }
}

impl Transition {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// The CSS `transition` shorthand for the transform property, e.g.
    /// `transform 0.8s ease-in-out`.
    pub fn css(&self) -> String {
        format!(
            "transform {}s {}",
            self.duration_ms as f64 / 1000.0,
            self.easing.css_name()
        )
    }
}
