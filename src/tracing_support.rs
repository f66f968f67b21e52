//! Logging support.
//!
//! This module provides the `tracing` macros used by the graph when the
//! `tracing` feature is enabled, and no-op replacements when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a `fmt` subscriber that writes through the test harness.  Safe
    /// to call any number of times; an already installed global subscriber is
    /// left alone.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::TRACE)
                .with_test_writer()
                .try_init();
        });
    }

    pub(crate) use tracing::{debug, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! trace {
        ($($tokens:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($tokens:tt)*) => {{}};
    }

    pub(crate) use {debug, trace};
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, trace};
