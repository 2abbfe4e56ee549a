//! Traversal engine for one-dimensional rhythm-platformer levels.
//!
//! A [`Level`] is a row of tiles (safe, hazard `^`, portal `*`) whose last
//! index is the goal; a [`Play`] is a sequence of moves from the four-digit
//! alphabet (charge, dash 1–3) attempting to traverse it under an energy
//! budget. Four independent entry points share that model:
//!
//! - [`is_successful_play`] — single-pass survivability, ignoring energy;
//! - [`successful_plays`] — full energy/portal evaluation of a candidate
//!   set;
//! - [`shortest_play`] — breadth-first search for a fewest-moves play;
//! - [`number_of_plays`] — dynamic-programming count of all successful
//!   plays.
//!
//! All four are pure functions of their inputs; every call allocates its
//! own accumulators and tears them down on return, so independent calls may
//! run concurrently without coordination.
//!
//! ```
//! use dashline::{number_of_plays, shortest_play, Level};
//!
//! let level: Level = "    ".parse().unwrap();
//! assert_eq!(shortest_play(&level, 3, 0).unwrap().to_string(), "3");
//! assert_eq!(number_of_plays(&level, 3, 0), 11);
//! ```

pub mod checker;
pub mod constants;
pub mod count;
pub mod filter;
pub mod level;
pub mod logging;
pub mod play;
pub mod rules;
pub mod search;

pub use constants::*;

// Re-export commonly used items
pub use checker::is_successful_play;
pub use count::number_of_plays;
pub use filter::successful_plays;
pub use level::{Level, ParseLevelError, Tile};
pub use logging::init as init_logging;
pub use play::{Move, ParsePlayError, Play};
pub use rules::{simulate, TraversalState};
pub use search::{shortest_play, UnplayableLevel};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use dashline::prelude::*;
    //! ```

    pub use crate::is_successful_play;
    pub use crate::number_of_plays;
    pub use crate::shortest_play;
    pub use crate::simulate;
    pub use crate::successful_plays;
    pub use crate::Level;
    pub use crate::Move;
    pub use crate::Play;
    pub use crate::TraversalState;
    pub use crate::UnplayableLevel;
}
