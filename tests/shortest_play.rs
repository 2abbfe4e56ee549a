//! Integration tests for the shortest-play search.

use dashline::{shortest_play, simulate, UnplayableLevel};
use rstest::rstest;
use test_utils::{level, oracle};

#[rstest]
#[case::single_dash("    ", 3, 0, "3")]
#[case::charge_from_empty("    ", 0, 0, "0003")]
#[case::one_tile_level(" ", 0, 0, "")]
#[case::charge_to_meet_target(" ", 0, 1, "0")]
#[case::hazard_must_be_jumped("   ^ ", 4, 0, "13")]
fn finds_expected_play(
    #[case] level_text: &str,
    #[case] starting_energy: u32,
    #[case] target_resting_energy: u32,
    #[case] expected: &str,
) {
    let found = shortest_play(&level(level_text), starting_energy, target_resting_energy)
        .expect("level should be playable");
    assert_eq!(found.to_string(), expected);
}

#[rstest]
#[case::degenerate_start("^   ", 3, 0, UnplayableLevel::Degenerate)]
#[case::degenerate_end("   ^", 3, 0, UnplayableLevel::Degenerate)]
#[case::walled_off(" ^^^ ", 3, 0, UnplayableLevel::Exhausted)]
#[case::target_beyond_reach("    ", 3, 4, UnplayableLevel::Exhausted)]
fn reports_unplayable(
    #[case] level_text: &str,
    #[case] starting_energy: u32,
    #[case] target_resting_energy: u32,
    #[case] expected: UnplayableLevel,
) {
    assert_eq!(
        shortest_play(&level(level_text), starting_energy, target_resting_energy),
        Err(expected)
    );
}

#[rstest]
#[case::flat("    ", 3, 0)]
#[case::flat_low_energy("      ", 1, 0)]
#[case::portal("  *   ", 3, 0)]
#[case::hazard_with_resting_target("   ^ ", 4, 1)]
fn result_replays_cleanly_and_is_minimal(
    #[case] level_text: &str,
    #[case] starting_energy: u32,
    #[case] target_resting_energy: u32,
) {
    let lvl = level(level_text);
    let found = shortest_play(&lvl, starting_energy, target_resting_energy)
        .expect("level should be playable");
    let state =
        simulate(&lvl, &found, starting_energy).expect("search result should replay cleanly");
    assert!(
        state.satisfies(&lvl, target_resting_energy),
        "replayed play must rest on the goal: {state:?}"
    );
    assert_eq!(
        Some(found.len()),
        oracle::shortest_length(&lvl, starting_energy, target_resting_energy),
        "no accepted play may be shorter"
    );
}
