//! Dynamic-programming count of all successful plays.

use log::debug;

use crate::level::Level;
use crate::rules::{max_energy, successors, TraversalState};

/// Row-major table over (position, energy); the value is the number of
/// distinct move sequences reaching that state.
struct WayTable {
    cells: Vec<u64>,
    width: usize,
}

impl WayTable {
    fn new(positions: usize, energy_ceiling: u32) -> Self {
        let width = energy_ceiling as usize + 1;
        Self {
            cells: vec![0; positions * width],
            width,
        }
    }

    fn get(&self, position: usize, energy: u32) -> u64 {
        self.cells
            .get(position * self.width + energy as usize)
            .copied()
            .unwrap_or(0)
    }

    fn add(&mut self, position: usize, energy: u32, ways: u64) {
        if let Some(cell) = self.cells.get_mut(position * self.width + energy as usize) {
            *cell += ways;
        }
    }
}

/// Counts the distinct plays completing `level` under the search rules.
///
/// Dynamic programming over (position, energy), seeded with one way to be
/// on the start tile holding `starting_energy`. Positions are processed in
/// increasing order and energies in increasing order within a position, so
/// a charge's contribution (same position, one energy higher) is picked up
/// in the same pass. The goal generates no outgoing moves. Transitions are
/// exactly the search's ([`crate::rules`]): charges only below the
/// threshold, dashes with the bounds, hazard and portal rules. The result
/// is the goal row summed over energies of at least
/// `target_resting_energy`.
///
/// Degenerate levels count zero plays, as does any level whose goal is
/// unreachable with the given energy parameters.
///
/// # Examples
///
/// ```
/// use dashline::{number_of_plays, Level};
/// let level: Level = "  * ".parse().unwrap();
/// // "3", "12" and "102"; a dash onto the portal overshoots the level.
/// assert_eq!(number_of_plays(&level, 3, 0), 3);
/// ```
#[must_use]
pub fn number_of_plays(level: &Level, starting_energy: u32, target_resting_energy: u32) -> u64 {
    if level.is_degenerate() {
        return 0;
    }
    let energy_ceiling = max_energy(starting_energy);
    let mut table = WayTable::new(level.len(), energy_ceiling);
    table.add(0, starting_energy, 1);

    for position in 0..level.len() {
        if position == level.goal() {
            continue;
        }
        for energy in 0..=energy_ceiling {
            let ways = table.get(position, energy);
            if ways == 0 {
                continue;
            }
            let state = TraversalState { position, energy };
            for (_, next) in successors(level, state) {
                table.add(next.position, next.energy, ways);
            }
        }
    }

    let total = (target_resting_energy..=energy_ceiling)
        .map(|energy| table.get(level.goal(), energy))
        .sum();
    debug!("level {level} admits {total} plays resting at >= {target_resting_energy}");
    total
}
