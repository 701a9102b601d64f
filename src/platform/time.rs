//! Clocks
//!
//! Two readings are needed: a high-resolution monotonic time for measuring
//! reaction latency, and a wall-clock Unix timestamp for stamping scores.

use std::cell::Cell;
use std::rc::Rc;

/// Time source injected into engines and the score store
pub trait Clock {
    /// Monotonic milliseconds (sub-millisecond resolution where available)
    fn now_ms(&self) -> f64;

    /// Wall-clock Unix timestamp in milliseconds
    fn epoch_ms(&self) -> u64;
}

/// Native clock: `Instant` for monotonic time, `SystemTime` for timestamps
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn epoch_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Hand-driven clock for tests and headless runs
///
/// Clones share the same reading, so a test can keep one handle and give
/// another to the engine under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
    epoch_base: u64,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
            epoch_base: 0,
        }
    }

    /// Wall-clock timestamp corresponding to `now_ms() == 0`
    pub fn with_epoch(mut self, epoch_base: u64) -> Self {
        self.epoch_base = epoch_base;
        self
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, dt_ms: f64) {
        self.now.set(self.now.get() + dt_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }

    fn epoch_ms(&self) -> u64 {
        self.epoch_base + self.now.get().max(0.0) as u64
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }

    fn epoch_ms(&self) -> u64 {
        (**self).epoch_ms()
    }
}

/// Browser clock: `performance.now()` and `Date.now()` (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(target_arch = "wasm32")]
impl Clock for BrowserClock {
    fn now_ms(&self) -> f64 {
        // Fall back to the millisecond wall clock when Performance is missing
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn epoch_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
