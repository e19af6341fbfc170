#[cfg(feature = "tracing")]
macro_rules! ztrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "zoomer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ztrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! zdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "zoomer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! zdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! zwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "zoomer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! zwarn {
    ($($tt:tt)*) => {};
}
