//! Brute-force enumeration of successful plays on small levels.
//!
//! An independent re-statement of the search/count transition rules,
//! written as plain recursion so it can serve as an oracle for
//! `number_of_plays` (count equality) and `shortest_play` (minimality).
//! Every dash makes progress and every charge raises energy towards the
//! threshold, so the recursion terminates without an explicit depth bound.
//!
//! The enumeration is exponential in level size; keep oracle levels short.

use dashline::{Level, Move, Play, Tile};

const CHARGE_THRESHOLD: u32 = 3;
const PORTAL_REACH: usize = 4;

/// All plays that reach the goal of `level` with at least
/// `target_resting_energy` left, under the search/count rules.
///
/// # Examples
/// ```
/// use test_utils::oracle::enumerate_successful_plays;
/// let level = test_utils::level("  * ");
/// let found = enumerate_successful_plays(&level, 3, 0);
/// assert_eq!(found.len(), 3);
/// ```
pub fn enumerate_successful_plays(
    level: &Level,
    starting_energy: u32,
    target_resting_energy: u32,
) -> Vec<Play> {
    let mut found = Vec::new();
    if level.is_degenerate() {
        return found;
    }
    let mut prefix = Vec::new();
    extend(
        level,
        0,
        starting_energy,
        target_resting_energy,
        &mut prefix,
        &mut found,
    );
    found
}

/// Fewest moves among all successful plays, if any play succeeds.
pub fn shortest_length(
    level: &Level,
    starting_energy: u32,
    target_resting_energy: u32,
) -> Option<usize> {
    enumerate_successful_plays(level, starting_energy, target_resting_energy)
        .iter()
        .map(Play::len)
        .min()
}

fn extend(
    level: &Level,
    position: usize,
    energy: u32,
    target_resting_energy: u32,
    prefix: &mut Vec<Move>,
    found: &mut Vec<Play>,
) {
    if position == level.goal() {
        // The goal admits no further moves; the play ends here.
        if energy >= target_resting_energy {
            found.push(Play::from(prefix.clone()));
        }
        return;
    }
    if energy < CHARGE_THRESHOLD {
        prefix.push(Move::Charge);
        extend(level, position, energy + 1, target_resting_energy, prefix, found);
        prefix.pop();
    }
    for mv in [Move::Dash1, Move::Dash2, Move::Dash3] {
        let Some(remaining) = energy.checked_sub(mv.cost()) else {
            continue;
        };
        let Some(landing) = resolve(level, position + mv.distance()) else {
            continue;
        };
        prefix.push(mv);
        extend(level, landing, remaining, target_resting_energy, prefix, found);
        prefix.pop();
    }
}

fn resolve(level: &Level, position: usize) -> Option<usize> {
    match level.tile(position)? {
        Tile::Hazard => None,
        Tile::Safe => Some(position),
        Tile::Portal => {
            let thrown = position + PORTAL_REACH;
            match level.tile(thrown)? {
                Tile::Hazard => None,
                Tile::Safe | Tile::Portal => Some(thrown),
            }
        }
    }
}
