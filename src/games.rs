//! Game catalog
//!
//! Static metadata for the three games: the id scores are filed under, how
//! a score is displayed and which direction counts as better.

use serde::{Deserialize, Serialize};

/// Unit a game's score is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreUnit {
    Ms,
    Points,
    Level,
}

impl ScoreUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreUnit::Ms => "ms",
            ScoreUnit::Points => "points",
            ScoreUnit::Level => "level",
        }
    }
}

/// One of the available games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    ReactionTest,
    WordMemory,
    TileMemory,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [
        GameKind::ReactionTest,
        GameKind::WordMemory,
        GameKind::TileMemory,
    ];

    /// Id used in the persisted score log
    pub fn id(&self) -> &'static str {
        match self {
            GameKind::ReactionTest => "reaction-test",
            GameKind::WordMemory => "word-memory",
            GameKind::TileMemory => "tile-memory",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameKind::ReactionTest => "Reaction Test",
            GameKind::WordMemory => "Word Memory",
            GameKind::TileMemory => "Tile Memory",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameKind::ReactionTest => "Test your reaction time. Click when the screen turns green!",
            GameKind::WordMemory => "Keep track of which words you have already seen.",
            GameKind::TileMemory => "Memorize the pattern of tiles and repeat it.",
        }
    }

    pub fn score_unit(&self) -> ScoreUnit {
        match self {
            GameKind::ReactionTest => ScoreUnit::Ms,
            GameKind::WordMemory => ScoreUnit::Points,
            GameKind::TileMemory => ScoreUnit::Level,
        }
    }

    /// Reaction time is the only metric where smaller wins
    pub fn higher_is_better(&self) -> bool {
        !matches!(self, GameKind::ReactionTest)
    }

    pub fn lower_is_better(&self) -> bool {
        !self.higher_is_better()
    }
}
