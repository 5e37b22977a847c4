//! Clock backed by the JavaScript `Date`.

use core::time::Duration;
use nip13_core::Clock;

/// Started clock reading `Date.now()`; `std::time::Instant` panics on wasm32.
#[derive(Debug, Clone, Copy)]
pub struct JsClock {
    start_ms: f64,
}

impl JsClock {
    pub fn start() -> Self {
        JsClock { start_ms: js_sys::Date::now() }
    }
}

impl Clock for JsClock {
    fn elapsed(&self) -> Duration {
        let ms = (js_sys::Date::now() - self.start_ms).max(0.0);
        Duration::from_secs_f64(ms / 1000.0)
    }

    fn unix_timestamp(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }
}
