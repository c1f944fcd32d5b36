//! Internal logging shim.
//!
//! `heap_event!` forwards to the `tracing` macro of the same level when the
//! `tracing` feature is enabled and expands to nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! heap_event {
    (trace, $($arg:tt)+) => { ::tracing::trace!($($arg)+) };
    (debug, $($arg:tt)+) => { ::tracing::debug!($($arg)+) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! heap_event {
    ($level:ident, $($arg:tt)+) => {};
}
