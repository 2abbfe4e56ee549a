//! Linear play checker: structural survivability only.
//!
//! This is the simplified rule set: it ignores energy and portal teleports
//! entirely and asks whether the play's positions survive the level. The
//! authoritative energy-aware evaluation lives in [`crate::filter`].

use crate::level::{Level, Tile};
use crate::play::Play;

/// Returns whether `play` survives `level`, ignoring energy and portals.
///
/// Positions accumulate move by move. Reaching or passing the goal index
/// succeeds immediately; landing on a hazard fails immediately; a play that
/// runs out of moves mid-level without either counts as a success.
/// Degenerate levels fail for every play.
///
/// # Examples
///
/// ```
/// use dashline::{is_successful_play, Level, Play};
/// let level: Level = "    ".parse().unwrap();
/// let play: Play = "3".parse().unwrap();
/// assert!(is_successful_play(&level, &play));
/// ```
#[must_use]
pub fn is_successful_play(level: &Level, play: &Play) -> bool {
    if level.is_degenerate() {
        return false;
    }
    let mut position = 0;
    for mv in play.moves() {
        position += mv.distance();
        if position >= level.goal() {
            return true;
        }
        if level.tile(position) == Some(Tile::Hazard) {
            return false;
        }
    }
    true
}
