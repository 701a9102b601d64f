//! Score log shared by all games
//!
//! Append-only list of attempts, persisted as one JSON array under a fixed
//! key. Every mutation rewrites the whole array.

use serde::{Deserialize, Serialize};

use crate::games::GameKind;
use crate::platform::{Clock, KeyValueStore};

/// Free-form extra data attached to a score
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Number of rows shown in the "recent attempts" list
pub const RECENT_ATTEMPTS: usize = 5;

/// A single recorded attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScore {
    pub game_id: String,
    pub score: f64,
    /// Unix timestamp (ms) when recorded
    pub timestamp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Summary numbers for one game's stats card
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetrics {
    pub best_score: Option<f64>,
    pub last_score: Option<f64>,
    pub average_score: Option<f64>,
    pub total_attempts: usize,
}

/// One row of the recent attempts list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentAttempt {
    pub when: String,
    pub score: f64,
}

/// Everything the stats page shows for one game
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReport {
    pub game_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub metrics: GameMetrics,
    pub recent: Vec<RecentAttempt>,
}

/// Score log backed by a key-value store
pub struct ScoreStore {
    scores: Vec<GameScore>,
    backend: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for ScoreStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreStore")
            .field("scores", &self.scores)
            .finish_non_exhaustive()
    }
}

impl ScoreStore {
    /// Storage key for the serialized log
    pub const STORAGE_KEY: &'static str = "game_platform_scores";

    /// Load the log from `backend`. Missing or corrupt data starts empty.
    pub fn load(backend: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let scores = match backend.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<serde_json::Value>>(&json) {
                Ok(records) => {
                    let scores: Vec<GameScore> = records
                        .into_iter()
                        .filter_map(|record| match serde_json::from_value(record) {
                            Ok(score) => Some(score),
                            Err(e) => {
                                log::warn!("Skipping unreadable score record: {}", e);
                                None
                            }
                        })
                        .collect();
                    log::info!("Loaded {} scores", scores.len());
                    scores
                }
                Err(e) => {
                    log::warn!("Discarding unreadable score log: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                log::info!("No scores found, starting fresh");
                Vec::new()
            }
            Err(e) => {
                log::warn!("Could not read score log: {}", e);
                Vec::new()
            }
        };

        Self {
            scores,
            backend,
            clock,
        }
    }

    /// Append an attempt and persist the log
    pub fn add_score(&mut self, game_id: &str, score: f64, metadata: Option<Metadata>) -> GameScore {
        let entry = GameScore {
            game_id: game_id.to_string(),
            score,
            timestamp: self.clock.epoch_ms(),
            metadata,
        };
        log::info!("Recorded {} score {}", game_id, score);
        self.scores.push(entry.clone());
        self.save();
        entry
    }

    /// Shorthand for [`add_score`](Self::add_score) with a catalog game
    pub fn record(&mut self, game: GameKind, score: f64, metadata: Option<Metadata>) -> GameScore {
        self.add_score(game.id(), score, metadata)
    }

    /// Every attempt, in insertion order
    pub fn scores(&self) -> &[GameScore] {
        &self.scores
    }

    pub fn scores_by_game(&self, game_id: &str) -> Vec<&GameScore> {
        self.scores.iter().filter(|s| s.game_id == game_id).collect()
    }

    /// Extreme score for a game; on ties the earliest attempt wins
    pub fn best_score(&self, game_id: &str, lower_is_better: bool) -> Option<&GameScore> {
        self.scores
            .iter()
            .filter(|s| s.game_id == game_id)
            .fold(None, |best: Option<&GameScore>, s| match best {
                None => Some(s),
                Some(b) => {
                    let better = if lower_is_better {
                        s.score < b.score
                    } else {
                        s.score > b.score
                    };
                    Some(if better { s } else { b })
                }
            })
    }

    pub fn average_score(&self, game_id: &str) -> Option<f64> {
        let (sum, count) = self
            .scores
            .iter()
            .filter(|s| s.game_id == game_id)
            .fold((0.0, 0usize), |(sum, n), s| (sum + s.score, n + 1));
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// Newest-first attempts for a game, at most `limit`
    pub fn recent_scores(&self, game_id: &str, limit: usize) -> Vec<&GameScore> {
        let mut scores = self.scores_by_game(game_id);
        scores.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        scores.truncate(limit);
        scores
    }

    /// Stats card numbers, using the game's own better-direction
    pub fn metrics(&self, game: GameKind) -> GameMetrics {
        let id = game.id();
        GameMetrics {
            best_score: self.best_score(id, game.lower_is_better()).map(|s| s.score),
            last_score: self.scores.iter().rev().find(|s| s.game_id == id).map(|s| s.score),
            average_score: self.average_score(id),
            total_attempts: self.scores.iter().filter(|s| s.game_id == id).count(),
        }
    }

    /// Stats card for one game, dates relative to `now` (Unix ms)
    pub fn report(&self, game: GameKind, now: u64) -> GameReport {
        GameReport {
            game_id: game.id(),
            name: game.name(),
            description: game.description(),
            unit: game.score_unit().as_str(),
            metrics: self.metrics(game),
            recent: self
                .recent_scores(game.id(), RECENT_ATTEMPTS)
                .into_iter()
                .map(|s| RecentAttempt {
                    when: format_relative(s.timestamp, now),
                    score: s.score,
                })
                .collect(),
        }
    }

    /// Stats page data for every game
    pub fn reports(&self, now: u64) -> Vec<GameReport> {
        GameKind::ALL
            .into_iter()
            .map(|game| self.report(game, now))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Drop every attempt and persist the empty log
    pub fn clear_scores(&mut self) {
        self.scores.clear();
        self.save();
        log::info!("Scores cleared");
    }

    fn save(&mut self) {
        match serde_json::to_string(&self.scores) {
            Ok(json) => {
                if let Err(e) = self.backend.set(Self::STORAGE_KEY, &json) {
                    log::warn!("Failed to persist scores: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize scores: {}", e),
        }
    }
}

/// Format a timestamp relative to `now` (both Unix ms)
pub fn format_relative(timestamp: u64, now: u64) -> String {
    let diff_mins = now.saturating_sub(timestamp) / 60_000;
    let diff_hours = diff_mins / 60;
    let diff_days = diff_hours / 24;

    if diff_days >= 1 {
        if diff_days == 1 {
            "Yesterday".to_string()
        } else if diff_days < 7 {
            format!("{} days ago", diff_days)
        } else {
            short_date(timestamp)
        }
    } else if diff_hours >= 1 {
        if diff_hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", diff_hours)
        }
    } else if diff_mins >= 1 {
        if diff_mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", diff_mins)
        }
    } else {
        "Just now".to_string()
    }
}

/// `M/D/YY` in the player's local time zone
#[cfg(target_arch = "wasm32")]
fn short_date(timestamp: u64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp as f64));
    format!(
        "{}/{}/{:02}",
        date.get_month() + 1,
        date.get_date(),
        date.get_full_year() % 100
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn short_date(timestamp: u64) -> String {
    short_date_in(&chrono::Local, timestamp)
}

#[cfg(not(target_arch = "wasm32"))]
fn short_date_in<Tz: chrono::TimeZone>(tz: &Tz, timestamp: u64) -> String {
    use chrono::Datelike;

    let date = i64::try_from(timestamp)
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single());
    match date {
        Some(date) => format!("{}/{}/{:02}", date.month(), date.day(), date.year() % 100),
        None => "N/A".to_string(),
    }
}
