//! Breadth-first search for a shortest successful play.

use std::collections::VecDeque;

use hashbrown::HashSet;
use log::debug;
use thiserror::Error;

use crate::level::Level;
use crate::play::{Move, Play};
use crate::rules::{successors, TraversalState};

/// Error returned when no play can complete a level.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnplayableLevel {
    /// The level starts or ends on a hazard tile.
    #[error("level starts or ends on a hazard")]
    Degenerate,
    /// Every reachable (position, energy) state was expanded without
    /// meeting the goal and resting-energy condition.
    #[error("no play reaches the goal with the required resting energy")]
    Exhausted,
}

/// Finds a fewest-moves play completing `level` under the search rules.
///
/// Breadth-first search over [`TraversalState`], seeded with the start tile
/// and `starting_energy`. The goal test runs on dequeue, *before* the
/// visited check, so the first satisfying state dequeued carries a shortest
/// play; ties between equal-length plays fall to expansion order, which is
/// [`Move::ALL`] (digit ascending). Already-visited states are dropped, not
/// re-expanded. The state space is finite, so the search always terminates.
///
/// # Errors
///
/// [`UnplayableLevel::Degenerate`] when the level starts or ends on a
/// hazard; [`UnplayableLevel::Exhausted`] when the frontier empties without
/// a satisfying state.
///
/// # Examples
///
/// ```
/// use dashline::{shortest_play, Level};
/// let level: Level = "    ".parse().unwrap();
/// let play = shortest_play(&level, 3, 0).unwrap();
/// assert_eq!(play.to_string(), "3");
/// ```
pub fn shortest_play(
    level: &Level,
    starting_energy: u32,
    target_resting_energy: u32,
) -> Result<Play, UnplayableLevel> {
    if level.is_degenerate() {
        return Err(UnplayableLevel::Degenerate);
    }
    let mut frontier: VecDeque<(TraversalState, Vec<Move>)> = VecDeque::new();
    let mut visited: HashSet<TraversalState> = HashSet::new();
    frontier.push_back((TraversalState::start(starting_energy), Vec::new()));

    while let Some((state, moves)) = frontier.pop_front() {
        if state.satisfies(level, target_resting_energy) {
            debug!(
                "found {}-move play for level {level} after {} expansions",
                moves.len(),
                visited.len()
            );
            return Ok(Play::from(moves));
        }
        if !visited.insert(state) {
            continue;
        }
        for (mv, next) in successors(level, state) {
            let mut history = moves.clone();
            history.push(mv);
            frontier.push_back((next, history));
        }
    }
    debug!(
        "search space exhausted for level {level} after {} states",
        visited.len()
    );
    Err(UnplayableLevel::Exhausted)
}
