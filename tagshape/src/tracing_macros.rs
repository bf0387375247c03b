//! `tracing` forwarding for the mapper.
//!
//! Each macro takes the same arguments as its `tracing` namesake. Builds
//! without the `tracing` feature drop the call, arguments included.

/// Trace a per-field mapping decision.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

/// Report a shape table that cannot be mapped.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Open a `TRACE` span guarded by a local that lives until the end of the
/// calling block.
macro_rules! trace_span {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!($($arg)*).entered();
    };
}

pub(crate) use debug;
pub(crate) use trace;
pub(crate) use trace_span;
