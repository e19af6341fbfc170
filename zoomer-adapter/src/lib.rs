//! Adapter utilities for the `zoomer` crate.
//!
//! The `zoomer` crate is UI-agnostic and focuses on the zoom/pan math and state machine. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A deterministic virtual-time timer queue
//! - An in-memory surface that records style writes (simulation, tests)
//! - A driver that binds a surface to the timer queue and runs the controller via `tick`
//! - Tween-based sampling of the zoom transition (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod surface;
mod timers;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use surface::{ElementId, HeadlessSurface};
pub use timers::TimerQueue;
pub use tween::{TransformFrame, Tween};
