//! Tests for the string-backed serde forms of the model types.

use dashline::{Level, Move, Play, Tile};

#[test]
fn play_serializes_as_its_digit_string() {
    let play: Play = "103".parse().expect("play should parse");
    let json = serde_json::to_string(&play).expect("play should serialize");
    assert_eq!(json, "\"103\"");
    let back: Play = serde_json::from_str(&json).expect("play should deserialize");
    assert_eq!(back, play);
}

#[test]
fn level_serializes_as_its_encoding() {
    let level: Level = "  * ^".parse().expect("level should parse");
    let json = serde_json::to_string(&level).expect("level should serialize");
    assert_eq!(json, "\"  * ^\"");
}

#[test]
fn invalid_play_fails_to_deserialize() {
    let result: Result<Play, _> = serde_json::from_str("\"9\"");
    assert!(result.is_err());
}

#[test]
fn empty_level_fails_to_deserialize() {
    let result: Result<Level, _> = serde_json::from_str("\"\"");
    assert!(result.is_err());
}

#[test]
fn tiles_and_moves_serialize_as_variant_names() {
    assert_eq!(
        serde_json::to_string(&Tile::Portal).expect("tile should serialize"),
        "\"Portal\""
    );
    assert_eq!(
        serde_json::to_string(&Move::Dash2).expect("move should serialize"),
        "\"Dash2\""
    );
}
