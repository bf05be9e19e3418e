//! Logging macros that abstract the `tracing` ones.
//!
//! Since these macros are internal API, we only have ones that we need.

// Re-export the logging crate so macros can use it.
#[doc(hidden)]
pub(crate) use tracing;

#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log::tracing::trace!($($arg)*)
    }
}
