use zoomer::{Easing, Point, Transition};

/// A magnification state: uniform scale plus translation in scaled space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformFrame {
    pub scale: f64,
    pub offset: Point,
}

impl TransformFrame {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Point::ZERO,
    };

    pub fn new(scale: f64, offset: Point) -> Self {
        Self { scale, offset }
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset.is_zero()
    }
}

/// A small tween helper for hosts that animate the zoom transition themselves (canvas or
/// terminal renderers without CSS transitions).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: TransformFrame,
    pub to: TransformFrame,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(
        from: TransformFrame,
        to: TransformFrame,
        start_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn from_transition(
        from: TransformFrame,
        to: TransformFrame,
        start_ms: u64,
        transition: &Transition,
    ) -> Self {
        Self::new(from, to, start_ms, transition.duration_ms, transition.easing)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> TransformFrame {
        let eased = self.easing.sample(self.progress(now_ms));
        let lerp = |a: f64, b: f64| a + (b - a) * eased;
        TransformFrame {
            scale: lerp(self.from.scale, self.to.scale),
            offset: Point::new(
                lerp(self.from.offset.x, self.to.offset.x),
                lerp(self.from.offset.y, self.to.offset.y),
            ),
        }
    }

    /// Restarts from the current sample toward `new_to`, e.g. when a zoom-out interrupts a
    /// zoom-in that is still animating.
    pub fn retarget(&mut self, now_ms: u64, new_to: TransformFrame, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}
