/// Result type for fallible controller construction and configuration.
pub type ZoomResult<T> = Result<T, ZoomError>;

/// Errors raised while building or configuring a [`crate::ZoomController`].
///
/// Runtime operations (`zoom_to`, `zoom_out`, timers, events) never fail: requests that cannot
/// be honored resolve to a no-op instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ZoomError {
    /// The host has no renderable surface (no document/body to magnify).
    #[error("no renderable surface is available")]
    NoSurface,
    /// A configuration value is out of its accepted range.
    #[error("invalid option `{name}`: {value}")]
    InvalidOption { name: &'static str, value: f64 },
}
