//! Mind Games - browser cognitive mini-games
//!
//! Core modules:
//! - `sim`: Deterministic game engines (reaction, word memory, tile memory)
//! - `scores`: Score log with best/average aggregation
//! - `platform`: Browser/native clock and storage abstraction
//! - `settings`: Tunable timings and difficulty
//! - `web`: wasm-bindgen facade for the browser UI

pub mod error;
pub mod games;
pub mod platform;
pub mod scores;
pub mod settings;
pub mod sim;
pub mod words;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{EngineError, StorageError};
pub use games::{GameKind, ScoreUnit};
pub use scores::{GameMetrics, GameScore, ScoreStore};
pub use settings::Settings;
