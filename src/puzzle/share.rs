//! Shareable text summary of a finished game
//!
//! The layout and glyphs are shared with every other installation of the
//! puzzle, so results pasted from different clients look the same:
//!
//! ```text
//! 🌍 Geodle 10/17/2026
//! 🟥🟧🟨🟩 4/6
//! ↗️⬅️↙️🎯
//!
//! geodle.app
//! ```

use chrono::NaiveDate;

use super::config::CLOSE_THRESHOLD_KM;
use super::evaluate::GuessResult;
use super::game_state::GameState;
use super::types::Country;

/// Footer identifying the puzzle
pub const SHARE_FOOTER: &str = "geodle.app";

/// Per-guess result square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareGlyph {
    Correct,
    Close,
    SameContinent,
    Far,
}

impl ShareGlyph {
    pub fn classify(guess: &GuessResult, target: &Country, close_threshold_km: f64) -> Self {
        if guess.country.is_same_as(target) {
            ShareGlyph::Correct
        } else if guess.distance_km < close_threshold_km {
            ShareGlyph::Close
        } else if guess.continent_match {
            ShareGlyph::SameContinent
        } else {
            ShareGlyph::Far
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShareGlyph::Correct => "🟩",
            ShareGlyph::Close => "🟨",
            ShareGlyph::SameContinent => "🟧",
            ShareGlyph::Far => "🟥",
        }
    }
}

/// Render the share block for a finished game, or `None` while it is still running
pub fn share_text(game: &GameState, date: NaiveDate) -> Option<String> {
    share_text_with_threshold(game, date, CLOSE_THRESHOLD_KM)
}

pub fn share_text_with_threshold(
    game: &GameState,
    date: NaiveDate,
    close_threshold_km: f64,
) -> Option<String> {
    if !game.is_over() {
        return None;
    }
    let target = game.target()?;

    let glyphs: String = game
        .guesses()
        .iter()
        .map(|g| ShareGlyph::classify(g, target, close_threshold_km).as_str())
        .collect();
    let directions: String = game
        .guesses()
        .iter()
        .map(|g| g.direction.glyph())
        .collect();
    let score = if game.is_won() {
        game.attempts_used().to_string()
    } else {
        "X".to_string()
    };

    Some(format!(
        "🌍 Geodle {}\n{} {}/{}\n{}\n\n{}",
        date.format("%-m/%-d/%Y"),
        glyphs,
        score,
        game.attempt_budget(),
        directions,
        SHARE_FOOTER
    ))
}
