//! Energy-aware play filter: the authoritative per-candidate rule set.
//!
//! The filter's charge gate is the opposite of the search and counter's: a
//! charge *fails* the play below [`CHARGE_THRESHOLD`] and gains energy at or
//! above it, where [`crate::rules`] permits a charge only below the
//! threshold. Both behaviours are long-standing and callers rely on each,
//! so the filter keeps its own move loop instead of sharing `rules`.
//!
//! One further quirk is preserved: the portal check runs after *every*
//! move, including a charge. Charging while standing on a portal tile
//! therefore teleports, even though position did not change.

use hashbrown::HashSet;
use log::trace;

use crate::constants::{CHARGE_GAIN, CHARGE_THRESHOLD, PORTAL_REACH};
use crate::level::{Level, Tile};
use crate::play::{Move, Play};

/// Energy left after `mv`, or `None` when the move fails the play.
///
/// This is the filter's gate: a charge below [`CHARGE_THRESHOLD`] fails, a
/// charge at or above it gains [`CHARGE_GAIN`], and a dash fails on energy
/// underflow.
fn spend(mv: Move, energy: u32) -> Option<u32> {
    match mv {
        Move::Charge => (energy >= CHARGE_THRESHOLD).then(|| energy + CHARGE_GAIN),
        dash => energy.checked_sub(dash.cost()),
    }
}

/// Simulates one candidate to completion under the filter's rules.
fn survives(level: &Level, play: &Play, starting_energy: u32, target_resting_energy: u32) -> bool {
    let mut position = 0;
    let mut energy = starting_energy;
    let final_index = play.len().checked_sub(1);
    for (index, &mv) in play.moves().iter().enumerate() {
        position += mv.distance();
        let Some(remaining) = spend(mv, energy) else {
            return false;
        };
        energy = remaining;
        if level.tile(position) == Some(Tile::Portal) {
            position += PORTAL_REACH;
            if position > level.goal() {
                return false;
            }
        }
        if position == level.goal() {
            return energy >= target_resting_energy && Some(index) == final_index;
        }
        match level.tile(position) {
            None | Some(Tile::Hazard) => return false,
            Some(Tile::Safe | Tile::Portal) => {}
        }
    }
    false
}

/// Returns the subset of `candidates` that complete `level`.
///
/// Each candidate is simulated independently under the full energy and
/// portal rules; a play succeeds only if its *final* move lands exactly on
/// the goal with at least `target_resting_energy` left. Reaching the goal
/// mid-sequence fails (no further in-bounds move is possible), as does a
/// hazard landing, energy underflow, a portal throw past the goal, a dash
/// past the end of the level, or a refused charge. Degenerate levels yield
/// the empty set.
///
/// # Examples
///
/// ```
/// use dashline::{successful_plays, Level, Play};
/// use hashbrown::HashSet;
/// let level: Level = "    ".parse().unwrap();
/// let candidates: HashSet<Play> = ["3", "30", "111"]
///     .iter()
///     .map(|p| p.parse().unwrap())
///     .collect();
/// let winners = successful_plays(&level, &candidates, 3, 0);
/// assert_eq!(winners.len(), 2); // "30" reaches the goal too early
/// ```
#[must_use]
pub fn successful_plays(
    level: &Level,
    candidates: &HashSet<Play>,
    starting_energy: u32,
    target_resting_energy: u32,
) -> HashSet<Play> {
    if level.is_degenerate() {
        return HashSet::new();
    }
    candidates
        .iter()
        .filter(|play| {
            let accepted = survives(level, play, starting_energy, target_resting_energy);
            if !accepted {
                trace!("play {play} fails level {level}");
            }
            accepted
        })
        .cloned()
        .collect()
}
