//! Wall-clock access for the miner.
//!
//! The mining loop needs two readings: time elapsed since it started (for
//! the timeout) and the current Unix time (for `created_at`). Both go
//! through [`Clock`] so the loop also runs where `std::time` is missing,
//! such as `wasm32-unknown-unknown`.

use core::time::Duration;

/// A started clock.
pub trait Clock {
    /// Time since the clock was started.
    fn elapsed(&self) -> Duration;

    /// Current Unix time in seconds.
    fn unix_timestamp(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }

    fn unix_timestamp(&self) -> u64 {
        (**self).unix_timestamp()
    }
}

/// Clock backed by `std::time`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Start a clock at the current instant.
    pub fn start() -> Self {
        SystemClock { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn unix_timestamp(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
