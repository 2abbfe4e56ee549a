//! Behavioural tests asserting the four operations are pure functions.
//!
//! Nothing in the engine holds state between calls, so calling any
//! operation twice with identical inputs must yield identical outputs.

use dashline::{
    is_successful_play, number_of_plays, shortest_play, successful_plays, Level, Play,
};
use hashbrown::HashSet;

#[derive(Clone, Debug)]
struct Env {
    level: Level,
    candidates: HashSet<Play>,
}

impl Default for Env {
    fn default() -> Self {
        dashline::init_logging(false);
        let level: Level = "  * ".parse().expect("level should parse");
        let candidates = ["3", "12", "102", "21", "0"]
            .iter()
            .map(|text| text.parse().expect("play should parse"))
            .collect();
        Self { level, candidates }
    }
}

#[test]
fn repeated_calls_agree() {
    rspec::run(&rspec::given(
        "a level and a candidate set",
        Env::default(),
        |ctx| {
            ctx.then("the checker is idempotent", |env| {
                let probe: Play = "12".parse().expect("play should parse");
                let first = is_successful_play(&env.level, &probe);
                assert_eq!(first, is_successful_play(&env.level, &probe));
            });
            ctx.then("the filter is idempotent", |env| {
                let first = successful_plays(&env.level, &env.candidates, 3, 0);
                assert_eq!(first, successful_plays(&env.level, &env.candidates, 3, 0));
            });
            ctx.then("the search is idempotent", |env| {
                let first = shortest_play(&env.level, 3, 0);
                assert_eq!(first, shortest_play(&env.level, 3, 0));
            });
            ctx.then("the counter is idempotent", |env| {
                let first = number_of_plays(&env.level, 3, 0);
                assert_eq!(first, number_of_plays(&env.level, 3, 0));
            });
        },
    ));
}
