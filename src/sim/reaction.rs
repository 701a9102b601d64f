//! Reaction time test
//!
//! Ready -> Waiting (random delay) -> ClickNow -> Complete. Triggering while
//! still waiting ends the round early in TooEarly.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::timer::OneShot;
use crate::games::GameKind;
use crate::platform::Clock;
use crate::scores::ScoreStore;
use crate::settings::ReactionSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReactionPhase {
    /// Idle, waiting for the player to start
    Ready,
    /// Stimulus scheduled but not shown yet
    Waiting,
    /// Stimulus visible, clock running
    ClickNow,
    /// Player triggered before the stimulus
    TooEarly,
    /// Reaction measured
    Complete,
}

/// Read-only view handed to the UI
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionState {
    pub phase: ReactionPhase,
    /// Clock reading when the stimulus appeared
    pub armed_at: Option<f64>,
    pub reaction_time_ms: Option<u32>,
}

impl Default for ReactionState {
    fn default() -> Self {
        Self {
            phase: ReactionPhase::Ready,
            armed_at: None,
            reaction_time_ms: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReactionTimer {
    ShowStimulus,
}

pub struct ReactionTest {
    state: ReactionState,
    settings: ReactionSettings,
    rng: Pcg32,
    timer: OneShot<ReactionTimer>,
    clock: Box<dyn Clock>,
}

impl ReactionTest {
    pub fn new(settings: ReactionSettings, seed: u64, clock: Box<dyn Clock>) -> Self {
        Self {
            state: ReactionState::default(),
            settings,
            rng: Pcg32::seed_from_u64(seed),
            timer: OneShot::new(),
            clock,
        }
    }

    pub fn state(&self) -> &ReactionState {
        &self.state
    }

    pub fn phase(&self) -> ReactionPhase {
        self.state.phase
    }

    pub fn reaction_time_ms(&self) -> Option<u32> {
        self.state.reaction_time_ms
    }

    /// Time left until the stimulus shows (only while waiting)
    pub fn pending_delay_ms(&self) -> Option<f64> {
        self.timer.remaining_ms()
    }

    /// The player's click/keypress. Effect depends on the phase.
    pub fn trigger(&mut self, scores: &mut ScoreStore) -> ReactionPhase {
        match self.state.phase {
            ReactionPhase::Ready => self.start_round(),
            ReactionPhase::Waiting => {
                self.timer.cancel();
                self.set_phase(ReactionPhase::TooEarly);
            }
            ReactionPhase::ClickNow => self.finish_round(scores),
            ReactionPhase::TooEarly | ReactionPhase::Complete => {
                self.state.armed_at = None;
                self.state.reaction_time_ms = None;
                self.set_phase(ReactionPhase::Ready);
            }
        }
        self.state.phase
    }

    /// Advance the stimulus timer. Returns true if the phase changed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        match self.timer.advance(dt_ms) {
            Some(ReactionTimer::ShowStimulus) if self.state.phase == ReactionPhase::Waiting => {
                self.state.armed_at = Some(self.clock.now_ms());
                self.set_phase(ReactionPhase::ClickNow);
                true
            }
            Some(event) => {
                log::warn!("Dropping stale {:?} timer in {:?}", event, self.state.phase);
                false
            }
            None => false,
        }
    }

    /// Abandon the round and go back to Ready
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.state = ReactionState::default();
    }

    fn start_round(&mut self) {
        self.state.reaction_time_ms = None;
        self.state.armed_at = None;
        let spread = self.rng.random_range(0..self.settings.delay_spread_ms.max(1));
        let delay = self.settings.min_delay_ms.saturating_add(spread);
        self.timer.schedule(delay as f64, ReactionTimer::ShowStimulus);
        log::debug!("Stimulus in {} ms", delay);
        self.set_phase(ReactionPhase::Waiting);
    }

    fn finish_round(&mut self, scores: &mut ScoreStore) {
        let Some(armed_at) = self.state.armed_at else {
            return;
        };
        let elapsed = (self.clock.now_ms() - armed_at).round().max(0.0) as u32;
        self.state.reaction_time_ms = Some(elapsed);
        self.set_phase(ReactionPhase::Complete);
        log::info!("Reaction time: {} ms", elapsed);
        scores.record(GameKind::ReactionTest, elapsed as f64, None);
    }

    fn set_phase(&mut self, phase: ReactionPhase) {
        log::debug!("Reaction: {:?} -> {:?}", self.state.phase, phase);
        self.state.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{ManualClock, MemoryStore};

    fn setup() -> (ReactionTest, ManualClock, ScoreStore) {
        let clock = ManualClock::new(0.0);
        let game = ReactionTest::new(ReactionSettings::default(), 42, Box::new(clock.clone()));
        let scores = ScoreStore::load(Box::new(MemoryStore::new()), Box::new(clock.clone()));
        (game, clock, scores)
    }

    #[test]
    fn test_full_round_measures_latency() {
        let (mut game, clock, mut scores) = setup();
        assert_eq!(game.phase(), ReactionPhase::Ready);

        assert_eq!(game.trigger(&mut scores), ReactionPhase::Waiting);
        let delay = game.pending_delay_ms().unwrap();
        assert!((900.0..4900.0).contains(&delay));

        clock.set(1000.0);
        assert!(game.tick(delay));
        assert_eq!(game.phase(), ReactionPhase::ClickNow);
        assert_eq!(game.state().armed_at, Some(1000.0));

        clock.set(1250.0);
        assert_eq!(game.trigger(&mut scores), ReactionPhase::Complete);
        assert_eq!(game.reaction_time_ms(), Some(250));

        let recorded = scores.scores_by_game("reaction-test");
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].score, 250.0);

        assert_eq!(game.trigger(&mut scores), ReactionPhase::Ready);
        assert_eq!(game.reaction_time_ms(), None);
    }

    #[test]
    fn test_rounds_fractional_latency() {
        let (mut game, clock, mut scores) = setup();
        game.trigger(&mut scores);
        clock.set(100.25);
        game.tick(5000.0);
        clock.set(412.75);
        game.trigger(&mut scores);
        assert_eq!(game.reaction_time_ms(), Some(313));
    }

    #[test]
    fn test_early_click_records_nothing() {
        let (mut game, _clock, mut scores) = setup();
        game.trigger(&mut scores);
        assert_eq!(game.trigger(&mut scores), ReactionPhase::TooEarly);
        assert!(game.pending_delay_ms().is_none());

        // The cancelled timer must not fire later
        assert!(!game.tick(10_000.0));
        assert_eq!(game.phase(), ReactionPhase::TooEarly);
        assert!(scores.is_empty());

        assert_eq!(game.trigger(&mut scores), ReactionPhase::Ready);
    }

    #[test]
    fn test_reset_cancels_pending_stimulus() {
        let (mut game, _clock, mut scores) = setup();
        game.trigger(&mut scores);
        game.reset();
        assert_eq!(game.phase(), ReactionPhase::Ready);
        assert!(!game.tick(10_000.0));
        assert_eq!(game.phase(), ReactionPhase::Ready);

        game.reset();
        assert_eq!(game.state(), &ReactionState::default());
    }

    #[test]
    fn test_delays_stay_in_range() {
        let (mut game, _clock, mut scores) = setup();
        for _ in 0..200 {
            game.trigger(&mut scores);
            let delay = game.pending_delay_ms().unwrap();
            assert!((900.0..4900.0).contains(&delay), "delay {}", delay);
            assert_eq!(delay.fract(), 0.0);
            game.reset();
        }
    }

    #[test]
    fn test_huge_delay_saturates() {
        let clock = ManualClock::new(0.0);
        let settings = ReactionSettings {
            min_delay_ms: u32::MAX,
            delay_spread_ms: 4000,
        };
        let mut game = ReactionTest::new(settings, 7, Box::new(clock.clone()));
        let mut scores = ScoreStore::load(Box::new(MemoryStore::new()), Box::new(clock));
        assert_eq!(game.trigger(&mut scores), ReactionPhase::Waiting);
        assert_eq!(game.pending_delay_ms(), Some(u32::MAX as f64));
    }
}
