//! Deterministic game engines
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time only advances through `tick(dt_ms)` or an injected clock
//! - No rendering or platform dependencies

pub mod rand_set;
pub mod reaction;
pub mod tile_memory;
pub mod timer;
pub mod word_memory;

pub use rand_set::RandSet;
pub use reaction::{ReactionPhase, ReactionState, ReactionTest};
pub use tile_memory::{
    ClickOutcome, Tile, TileMemory, TileMemoryState, TilePhase, generate_targets,
    grid_size_for_level,
};
pub use timer::OneShot;
pub use word_memory::{AnswerOutcome, WordMemory, WordMemoryState, WordPhase, WordPick, pick_word};
