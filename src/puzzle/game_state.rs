//! Game state tracking for the daily puzzle
//!
//! Owns the ordered guess history and the attempt budget, and moves the game
//! from in-progress to won or lost. Completion is reported to the caller as a
//! `GuessOutcome::Completed` exactly once; restoring saved progress never
//! reports it.

use log::{debug, info, warn};
use ordered_float::OrderedFloat;

use super::config::PuzzleConfig;
use super::evaluate::{evaluate_guess_with_threshold, GuessResult};
use super::pool::CandidatePool;
use super::types::Country;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No target has been chosen yet (dataset not loaded)
    NotReady,
    /// The game already ended
    GameOver,
    /// This country was already guessed today
    Duplicate,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    Rejected(RejectReason),
    /// Appended; the game continues
    Accepted(GuessResult),
    /// Appended and the game just ended
    Completed { result: GuessResult, won: bool },
}

impl GuessOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, GuessOutcome::Rejected(_))
    }

    pub fn result(&self) -> Option<&GuessResult> {
        match self {
            GuessOutcome::Rejected(_) => None,
            GuessOutcome::Accepted(result) | GuessOutcome::Completed { result, .. } => Some(result),
        }
    }
}

/// One player's game for one day
#[derive(Debug, Clone)]
pub struct GameState {
    target: Option<Country>,
    guesses: Vec<GuessResult>,
    attempt_budget: usize,
    found_threshold_km: f64,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh game for `target`
    pub fn new(target: Country, config: &PuzzleConfig) -> Self {
        Self {
            target: Some(target),
            ..Self::pending(config)
        }
    }

    /// A game with no target yet; every guess is rejected as not ready
    pub fn pending(config: &PuzzleConfig) -> Self {
        Self {
            target: None,
            guesses: Vec::new(),
            attempt_budget: config.attempt_budget.max(1),
            found_threshold_km: config.found_threshold_km,
            status: GameStatus::InProgress,
        }
    }

    pub fn target(&self) -> Option<&Country> {
        self.target.as_ref()
    }

    pub fn guesses(&self) -> &[GuessResult] {
        &self.guesses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempt_budget(&self) -> usize {
        self.attempt_budget
    }

    pub fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    pub fn attempts_remaining(&self) -> usize {
        self.attempt_budget.saturating_sub(self.guesses.len())
    }

    pub fn has_guessed(&self, name: &str) -> bool {
        self.guesses.iter().any(|g| g.country.name == name)
    }

    /// Guessed country names in submission order
    pub fn guess_names(&self) -> Vec<String> {
        self.guesses.iter().map(|g| g.country.name.clone()).collect()
    }

    /// The guess that landed nearest the target so far
    pub fn closest_guess(&self) -> Option<&GuessResult> {
        self.guesses
            .iter()
            .min_by_key(|g| OrderedFloat(g.distance_km))
    }

    /// Submit a guess and advance the game
    pub fn submit_guess(&mut self, country: &Country) -> GuessOutcome {
        let Some(target) = &self.target else {
            debug!("Rejected guess {}: no target yet", country.name);
            return GuessOutcome::Rejected(RejectReason::NotReady);
        };
        if self.is_over() {
            debug!("Rejected guess {}: game is over", country.name);
            return GuessOutcome::Rejected(RejectReason::GameOver);
        }
        if self.has_guessed(&country.name) {
            debug!("Rejected guess {}: already guessed", country.name);
            return GuessOutcome::Rejected(RejectReason::Duplicate);
        }

        let result = evaluate_guess_with_threshold(country, target, self.found_threshold_km);
        let won = country.is_same_as(target);
        self.guesses.push(result.clone());
        self.status = self.status_after_guess(won);

        if self.is_over() {
            info!(
                "Game over after {} of {} guesses: {}",
                self.guesses.len(),
                self.attempt_budget,
                if won { "won" } else { "lost" }
            );
            GuessOutcome::Completed { result, won }
        } else {
            GuessOutcome::Accepted(result)
        }
    }

    fn status_after_guess(&self, won: bool) -> GameStatus {
        if won {
            GameStatus::Won
        } else if self.guesses.len() >= self.attempt_budget {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Rebuild today's guess history from saved country names.
    ///
    /// Names missing from `pool` are dropped, as are repeats and anything after
    /// the game ended. A game saved as over stays over even if dropped names
    /// leave it short of the budget. Returns the number of names dropped.
    pub fn restore(
        &mut self,
        saved_names: &[String],
        pool: &CandidatePool,
        saved_over: bool,
        saved_won: bool,
    ) -> usize {
        let Some(target) = self.target.clone() else {
            warn!("Cannot restore saved guesses before a target is chosen");
            return saved_names.len();
        };

        self.guesses.clear();
        self.status = GameStatus::InProgress;
        let mut dropped = 0;

        for name in saved_names {
            if self.is_over() {
                warn!("Dropping saved guess {} recorded after the game ended", name);
                dropped += 1;
                continue;
            }
            let Some(country) = pool.find_by_name(name) else {
                warn!("Dropping saved guess {}: not in the candidate pool", name);
                dropped += 1;
                continue;
            };
            if self.has_guessed(name) {
                warn!("Dropping repeated saved guess {}", name);
                dropped += 1;
                continue;
            }
            let result = evaluate_guess_with_threshold(country, &target, self.found_threshold_km);
            self.guesses.push(result);
            self.status = self.status_after_guess(country.is_same_as(&target));
        }

        if saved_over && !self.is_over() {
            self.status = GameStatus::Lost;
        }
        if saved_won != self.is_won() {
            warn!(
                "Saved win flag ({}) disagrees with restored guesses; using restored guesses",
                saved_won
            );
        }

        info!(
            "Restored {} guesses ({} dropped), status {:?}",
            self.guesses.len(),
            dropped,
            self.status
        );
        dropped
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        let closest = self
            .closest_guess()
            .map(|g| format!("{:.0} km", g.distance_km))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "Guesses: {}/{} | Closest: {} | Status: {:?}",
            self.guesses.len(),
            self.attempt_budget,
            closest,
            self.status
        )
    }
}
