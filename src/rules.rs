//! Transition rules shared by the shortest-play search and the counter.
//!
//! A traversal is fully described by its [`TraversalState`]: two move
//! histories arriving at the same (position, energy) pair are
//! interchangeable for every downstream decision, which is what lets the
//! search prune visited states and the counter aggregate paths per state.
//!
//! Under these rules a charge is permitted *only* below
//! [`CHARGE_THRESHOLD`]. The candidate filter gates the charge the opposite
//! way round and therefore owns its own loop; see [`crate::filter`].

use crate::constants::{CHARGE_GAIN, CHARGE_THRESHOLD, PORTAL_REACH};
use crate::level::{Level, Tile};
use crate::play::{Move, Play};

/// A (position, energy) pair describing a traversal in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TraversalState {
    /// Tile index of the traveller.
    pub position: usize,
    /// Remaining energy units.
    pub energy: u32,
}

impl TraversalState {
    /// The state on the start tile with `energy` units in hand.
    #[must_use]
    pub const fn start(energy: u32) -> Self {
        Self {
            position: 0,
            energy,
        }
    }

    /// Whether this state sits on the goal with enough resting energy.
    #[must_use]
    pub fn satisfies(self, level: &Level, target_resting_energy: u32) -> bool {
        self.position == level.goal() && self.energy >= target_resting_energy
    }
}

/// Greatest energy any state can hold for the given starting energy.
///
/// Charges stop at [`CHARGE_THRESHOLD`] and dashes only spend, so the
/// informative region of the counter's table is bounded by this.
#[must_use]
pub const fn max_energy(starting_energy: u32) -> u32 {
    if starting_energy > CHARGE_THRESHOLD {
        starting_energy
    } else {
        CHARGE_THRESHOLD
    }
}

/// Resolves a dash landing on `position`.
///
/// Rejects out-of-bounds and hazard tiles. A portal throws the traveller
/// [`PORTAL_REACH`] tiles further exactly once; the thrown-to tile must
/// itself be in bounds and hazard-free, and a second portal there does not
/// chain.
fn land(level: &Level, position: usize) -> Option<usize> {
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

/// Applies `mv` to `state`, or `None` if the move is illegal here.
///
/// A charge is legal only below [`CHARGE_THRESHOLD`] and never moves, so it
/// never lands on a portal. A dash must keep energy non-negative and must
/// [`land`] legally.
fn apply(level: &Level, state: TraversalState, mv: Move) -> Option<TraversalState> {
    match mv {
        Move::Charge => (state.energy < CHARGE_THRESHOLD).then(|| TraversalState {
            position: state.position,
            energy: state.energy + CHARGE_GAIN,
        }),
        dash => {
            let energy = state.energy.checked_sub(dash.cost())?;
            let position = land(level, state.position + dash.distance())?;
            Some(TraversalState { position, energy })
        }
    }
}

/// All legal successor states of `state`, in [`Move::ALL`] order.
pub(crate) fn successors(
    level: &Level,
    state: TraversalState,
) -> impl Iterator<Item = (Move, TraversalState)> + '_ {
    Move::ALL
        .into_iter()
        .filter_map(move |mv| apply(level, state, mv).map(|next| (mv, next)))
}

/// Replays `play` move by move under the search/count rules.
///
/// Returns the final state when every move is legal, `None` as soon as one
/// is not. Useful for validating a play produced elsewhere:
///
/// ```
/// use dashline::{simulate, Level, Play};
/// let level: Level = "    ".parse().unwrap();
/// let play: Play = "12".parse().unwrap();
/// let state = simulate(&level, &play, 3).unwrap();
/// assert_eq!(state.position, level.goal());
/// assert_eq!(state.energy, 0);
/// ```
#[must_use]
pub fn simulate(level: &Level, play: &Play, starting_energy: u32) -> Option<TraversalState> {
    play.moves()
        .iter()
        .try_fold(TraversalState::start(starting_energy), |state, &mv| {
            apply(level, state, mv)
        })
}
