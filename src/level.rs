//! Level encoding: tiles, parsing, and the degenerate-edge rule.
//!
//! A level is an ordered row of tiles addressed by index, with the last
//! index as the goal. The textual encoding maps `'^'` to a hazard, `'*'` to
//! a portal, and every other character to a safe tile. Levels whose first or
//! last tile is a hazard are *degenerate* and rejected by every algorithm.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A single tile of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Inert tile; landing here has no effect.
    Safe,
    /// Landing here is fatal.
    Hazard,
    /// Landing here throws the traveller [`PORTAL_REACH`] tiles forward.
    ///
    /// [`PORTAL_REACH`]: crate::constants::PORTAL_REACH
    Portal,
}

impl Tile {
    /// Decodes one level character.
    ///
    /// Anything that is not `'^'` or `'*'` is a safe tile; the encoding
    /// reserves no other characters.
    #[must_use]
    pub const fn from_char(symbol: char) -> Self {
        match symbol {
            '^' => Self::Hazard,
            '*' => Self::Portal,
            _ => Self::Safe,
        }
    }
}

/// Error returned when a level string cannot be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseLevelError {
    /// Levels must contain at least one tile.
    #[error("level must not be empty")]
    Empty,
}

/// An ordered tile sequence; index `len() - 1` is the goal.
///
/// Parsed from its textual encoding and immutable afterwards. The source
/// string is retained so [`fmt::Display`] round-trips.
///
/// # Examples
///
/// ```
/// use dashline::{Level, Tile};
/// let level: Level = "  * ^".parse().unwrap();
/// assert_eq!(level.len(), 5);
/// assert_eq!(level.tile(2), Some(Tile::Portal));
/// assert!(level.is_degenerate());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Level {
    text: String,
    tiles: Vec<Tile>,
}

impl Level {
    /// Number of tiles in the level. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; parsing rejects empty levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the goal tile.
    #[must_use]
    pub fn goal(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Tile at `index`, or `None` past the end of the level.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Whether the level starts or ends on a hazard.
    ///
    /// Degenerate levels admit no successful play: the checker and filter
    /// report structural failure, the search raises
    /// [`UnplayableLevel::Degenerate`] and the counter yields zero.
    ///
    /// [`UnplayableLevel::Degenerate`]: crate::search::UnplayableLevel::Degenerate
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self.tiles.first(), Some(Tile::Hazard))
            || matches!(self.tiles.last(), Some(Tile::Hazard))
    }

    /// Borrows the textual encoding the level was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(ParseLevelError::Empty);
        }
        let tiles = text.chars().map(Tile::from_char).collect();
        Ok(Self {
            text: text.to_owned(),
            tiles,
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_tiles() {
        let level: Level = "a^* ".parse().expect("level should parse");
        assert_eq!(level.tile(0), Some(Tile::Safe));
        assert_eq!(level.tile(1), Some(Tile::Hazard));
        assert_eq!(level.tile(2), Some(Tile::Portal));
        assert_eq!(level.tile(3), Some(Tile::Safe));
        assert_eq!(level.tile(4), None);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Level>(), Err(ParseLevelError::Empty));
    }

    #[test]
    fn flags_hazard_edges_as_degenerate() {
        let leading: Level = "^  ".parse().expect("level should parse");
        let trailing: Level = "  ^".parse().expect("level should parse");
        let interior: Level = " ^ ".parse().expect("level should parse");
        assert!(leading.is_degenerate());
        assert!(trailing.is_degenerate());
        assert!(!interior.is_degenerate());
    }

    #[test]
    fn display_round_trips_the_encoding() {
        let text = "  * ^ ";
        let level: Level = text.parse().expect("level should parse");
        assert_eq!(level.to_string(), text);
    }
}
