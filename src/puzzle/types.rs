//! Core types for the daily puzzle
//!
//! These are plain data types shared by every other puzzle module.

use std::fmt;

use super::geo;

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another position in kilometers
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        geo::distance_km(*self, *other)
    }

    /// Compass octant pointing from this position toward another
    pub fn direction_to(&self, other: &Coordinates) -> Direction {
        geo::bearing_octant(*self, *other)
    }
}

/// Compass direction from a guess toward the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    /// The guess is the target, or close enough to count
    Found,
}

impl Direction {
    /// The eight compass octants, clockwise from north
    pub const OCTANTS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Emoji used on screen and in share text
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::North => "⬆️",
            Direction::NorthEast => "↗️",
            Direction::East => "➡️",
            Direction::SouthEast => "↘️",
            Direction::South => "⬇️",
            Direction::SouthWest => "↙️",
            Direction::West => "⬅️",
            Direction::NorthWest => "↖️",
            Direction::Found => "🎯",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A country from the reference dataset
///
/// Identity is the common name; two countries with the same name are the same
/// country as far as the puzzle is concerned.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub code: String,
    pub region: String,
    pub subregion: String,
    /// Continents, primary first
    pub continents: Vec<String>,
    pub population: u64,
    pub area: f64,
    pub coordinates: Coordinates,
    pub capital: Vec<String>,
}

impl Country {
    pub fn is_same_as(&self, other: &Country) -> bool {
        self.name == other.name
    }

    pub fn primary_continent(&self) -> Option<&str> {
        self.continents.first().map(String::as_str)
    }

    /// Flag emoji built from the regional indicator symbols of the country code
    pub fn flag_emoji(&self) -> String {
        self.code
            .to_ascii_uppercase()
            .chars()
            .filter(char::is_ascii_uppercase)
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }
}
