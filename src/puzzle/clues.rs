//! Hints and display text derived from the target

use super::game_state::GameState;
use super::types::Country;

/// Hints shown before the first guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clues {
    pub continent: String,
    pub population: String,
    pub first_letter: Option<char>,
}

impl Clues {
    pub fn for_target(target: &Country) -> Self {
        Self {
            continent: target.primary_continent().unwrap_or("Unknown").to_string(),
            population: format_population(target.population),
            first_letter: target.name.chars().next(),
        }
    }
}

/// Compact population, e.g. `67.4M`, `632K`, `1.4B`
pub fn format_population(population: u64) -> String {
    let n = population as f64;
    if n >= 1e9 {
        format!("{:.1}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.1}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.0}K", n / 1e3)
    } else {
        population.to_string()
    }
}

/// Closing line for a finished game
pub fn result_message(game: &GameState) -> Option<String> {
    if !game.is_over() {
        return None;
    }
    if game.is_won() {
        return Some(format!("🎉 Found it in {}!", game.attempts_used()));
    }
    let target = game.target()?;
    Some(format!(
        "The answer was {} {}",
        target.flag_emoji(),
        target.name
    ))
}
