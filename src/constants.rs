//! Traversal constants shared by every algorithm.

/// Energy threshold gating the charge move.
///
/// The two rule sets gate the charge move on this threshold in opposite
/// directions: the candidate filter refuses a charge *below* it, while the
/// search and counter permit a charge *only* below it. See [`crate::filter`]
/// and [`crate::rules`] for the respective gates.
pub const CHARGE_THRESHOLD: u32 = 3;
/// Energy gained by a permitted charge move.
pub const CHARGE_GAIN: u32 = 1;
/// Tiles a portal throws the traveller forward when landed on.
pub const PORTAL_REACH: usize = 4;
