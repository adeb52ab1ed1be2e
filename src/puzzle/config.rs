//! Tunable constants for the daily puzzle
//!
//! All thresholds live here so the scoring code never carries bare literals.

/// Maximum number of guesses before the game is lost
pub const ATTEMPT_BUDGET: usize = 6;

/// A guess closer than this (km) counts as "found" for direction purposes
pub const FOUND_THRESHOLD_KM: f64 = 50.0;

/// A guess closer than this (km) earns the "close" share glyph
pub const CLOSE_THRESHOLD_KM: f64 = 1000.0;

/// Countries must have strictly more inhabitants than this to be playable
pub const MIN_POPULATION: u64 = 100_000;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maximum number of suggestions offered for a partial name
pub const SUGGESTION_LIMIT: usize = 5;

/// Runtime configuration for a puzzle session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleConfig {
    pub attempt_budget: usize,
    pub found_threshold_km: f64,
    pub close_threshold_km: f64,
    pub min_population: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            attempt_budget: ATTEMPT_BUDGET,
            found_threshold_km: FOUND_THRESHOLD_KM,
            close_threshold_km: CLOSE_THRESHOLD_KM,
            min_population: MIN_POPULATION,
        }
    }
}
