//! Scoring a single guess against the target

use super::config::FOUND_THRESHOLD_KM;
use super::types::{Country, Direction};

/// The scored outcome of one guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessResult {
    pub country: Country,
    /// Great-circle distance from the guess to the target in kilometers
    pub distance_km: f64,
    pub direction: Direction,
    pub region_match: bool,
    /// Primary continents are equal
    pub continent_match: bool,
}

impl GuessResult {
    pub fn is_found(&self) -> bool {
        self.direction == Direction::Found
    }
}

/// Score `guess` against `target` with the default found threshold
pub fn evaluate_guess(guess: &Country, target: &Country) -> GuessResult {
    evaluate_guess_with_threshold(guess, target, FOUND_THRESHOLD_KM)
}

pub fn evaluate_guess_with_threshold(
    guess: &Country,
    target: &Country,
    found_threshold_km: f64,
) -> GuessResult {
    let distance_km = guess.coordinates.distance_km(&target.coordinates);
    let direction = if distance_km < found_threshold_km || guess.is_same_as(target) {
        Direction::Found
    } else {
        guess.coordinates.direction_to(&target.coordinates)
    };

    // Two countries without any continent listed count as matching
    let continent_match = guess.primary_continent() == target.primary_continent();

    GuessResult {
        country: guess.clone(),
        distance_km,
        direction,
        region_match: guess.region == target.region,
        continent_match,
    }
}
