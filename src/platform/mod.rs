//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (high-resolution monotonic clock + wall clock)
//! - Storage (LocalStorage on web, in-memory elsewhere)

pub mod storage;
pub mod time;

pub use storage::{KeyValueStore, MemoryStore};
pub use time::{Clock, ManualClock, SystemClock};

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use time::BrowserClock;
