//! Conditional logging macros.
//!
//! With the `tracing` feature this re-exports `tracing::debug`. Without it the
//! macro expands to nothing, so call sites cost nothing in the default build.

#[cfg(feature = "tracing")]
pub(crate) use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
