//! Shared helpers for dashline's integration tests.

pub mod oracle;

use dashline::{Level, Play};

/// Parses a level, panicking on bad test input.
///
/// # Examples
/// ```
/// let level = test_utils::level("  * ");
/// assert_eq!(level.len(), 4);
/// ```
pub fn level(text: &str) -> Level {
    text.parse().expect("test level should parse")
}

/// Parses a play, panicking on bad test input.
///
/// # Examples
/// ```
/// let play = test_utils::play("103");
/// assert_eq!(play.len(), 3);
/// ```
pub fn play(text: &str) -> Play {
    text.parse().expect("test play should parse")
}

/// Parses a batch of plays into a set.
pub fn plays(texts: &[&str]) -> hashbrown::HashSet<Play> {
    texts.iter().map(|text| play(text)).collect()
}
