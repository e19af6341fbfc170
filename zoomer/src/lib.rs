//! A headless viewport magnification engine.
//!
//! For adapter-level utilities (virtual-time timers, a recording surface, transition tweens),
//! see the `zoomer-adapter` crate.
//!
//! Given a target rectangle or element inside a larger scrollable surface, this crate computes
//! the scale and translation that zoom the surface to fill the viewport around that target, and
//! reverses the effect on request. While zoomed, it nudges the scroll position whenever the
//! pointer approaches a viewport edge, simulating panning inside the magnified view.
//!
//! It is UI-agnostic. A host (DOM binding, canvas, TUI, ...) is expected to provide:
//! - viewport size, scroll position and element bounds
//! - the primitive that writes a transform (or a fallback box layout) to the render target
//! - one-shot/interval timers and pointer/key event subscriptions
//!
//! See [`host`] for the collaborator traits and [`ZoomController`] for the state machine.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod options;
mod state;
mod transition;
mod types;

pub mod geometry;
pub mod host;
pub mod pan;
pub mod transform;


pub use controller::{ZoomController, ZoomOutcome};
pub use error::{ZoomError, ZoomResult};
pub use host::{Events, Host, Scheduler, Surface};
pub use options::{
    PanTuning, ResetOptions, ResolvedOptions, ZoomCallback, ZoomOptions, ZoomOutOptions,
    ZoomRequest,
};
pub use state::ZoomSnapshot;
pub use transform::{BoxLayoutStyle, TransformStyle};
pub use transition::{Easing, Transition};
pub use types::{
    Key, Listener, Point, Rect, RenderTarget, ResolvedTarget, ScrollOffset, TimerId, Viewport,
};
