//! Plays and the four-move alphabet.
//!
//! The original encoding spelled moves as the digit characters `'0'`–`'3'`
//! and did arithmetic on them; here each digit is a [`Move`] variant
//! carrying its distance and energy cost, and a [`Play`] is a sequence of
//! moves that still parses from and prints as the digit string.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One move of a play.
///
/// `Charge` adjusts energy without advancing; the dashes advance by their
/// digit and consume that much energy. The exact charge rule differs between
/// the filter and the search/counter (see [`crate::filter`] and
/// [`crate::rules`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Digit `0`: stay put and interact with the charge rule.
    Charge,
    /// Digit `1`: advance one tile for one energy unit.
    Dash1,
    /// Digit `2`: advance two tiles for two energy units.
    Dash2,
    /// Digit `3`: advance three tiles for three energy units.
    Dash3,
}

impl Move {
    /// The move alphabet in ascending digit order.
    ///
    /// The search expands successors in this order, which is what breaks
    /// ties between equal-length shortest plays.
    pub const ALL: [Self; 4] = [Self::Charge, Self::Dash1, Self::Dash2, Self::Dash3];

    /// Tiles this move advances the traveller.
    #[must_use]
    pub const fn distance(self) -> usize {
        match self {
            Self::Charge => 0,
            Self::Dash1 => 1,
            Self::Dash2 => 2,
            Self::Dash3 => 3,
        }
    }

    /// Energy units a dash consumes. Zero for a charge.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Self::Charge => 0,
            Self::Dash1 => 1,
            Self::Dash2 => 2,
            Self::Dash3 => 3,
        }
    }

    /// Decodes a move digit, or `None` for any other character.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '0' => Some(Self::Charge),
            '1' => Some(Self::Dash1),
            '2' => Some(Self::Dash2),
            '3' => Some(Self::Dash3),
            _ => None,
        }
    }

    /// The digit this move prints as.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Charge => '0',
            Self::Dash1 => '1',
            Self::Dash2 => '2',
            Self::Dash3 => '3',
        }
    }
}

/// Error returned when a play string cannot be decoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParsePlayError {
    /// Plays may only contain the digits `0` through `3`.
    #[error("invalid move character {0:?}")]
    InvalidMove(char),
}

/// A finite move sequence attempting to traverse a level.
///
/// Plays are immutable inputs; the search builds its answer as one. The
/// empty play is a valid value (it is the shortest play of a one-tile
/// level) although callers normally supply non-empty candidates.
///
/// # Examples
///
/// ```
/// use dashline::{Move, Play};
/// let play: Play = "103".parse().unwrap();
/// assert_eq!(play.moves(), [Move::Dash1, Move::Charge, Move::Dash3]);
/// assert_eq!(play.to_string(), "103");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Play {
    moves: Vec<Move>,
}

impl Play {
    /// Borrows the move sequence.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves in the play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether the play contains no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl From<Vec<Move>> for Play {
    fn from(moves: Vec<Move>) -> Self {
        Self { moves }
    }
}

impl FromIterator<Move> for Play {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl FromStr for Play {
    type Err = ParsePlayError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.chars()
            .map(|symbol| Move::from_char(symbol).ok_or(ParsePlayError::InvalidMove(symbol)))
            .collect()
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            fmt::Write::write_char(f, mv.to_char())?;
        }
        Ok(())
    }
}

impl Serialize for Play {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Play {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_alphabet() {
        let play: Play = "0123".parse().expect("play should parse");
        assert_eq!(
            play.moves(),
            [Move::Charge, Move::Dash1, Move::Dash2, Move::Dash3]
        );
    }

    #[test]
    fn rejects_characters_outside_the_alphabet() {
        assert_eq!("14".parse::<Play>(), Err(ParsePlayError::InvalidMove('4')));
        assert_eq!("x".parse::<Play>(), Err(ParsePlayError::InvalidMove('x')));
    }

    #[test]
    fn empty_play_parses_and_prints() {
        let play: Play = "".parse().expect("empty play should parse");
        assert!(play.is_empty());
        assert_eq!(play.to_string(), "");
    }

    #[test]
    fn alphabet_order_matches_digit_order() {
        let digits: String = Move::ALL.iter().map(|mv| mv.to_char()).collect();
        assert_eq!(digits, "0123");
    }
}
