//! Property tests: structural guarantees of coverage runs on random maps.

use proptest::prelude::*;
use tether_core::{CellPos, Environment};
use tether_engine::{CoverageConfig, CoverageSession, StepKind};
use tether_space::GridEnvironment;
use tether_test_utils::{
    assert_full_coverage, assert_nodes_traversable, assert_tree_invariant, reachable_free_cells,
    scattered_obstacles,
};

/// Scattered-obstacle map with the station on a random cell.
fn arb_map() -> impl Strategy<Value = GridEnvironment> {
    (1u32..=8, 1u32..=8, 0u32..=35, any::<u64>(), any::<u32>()).prop_map(
        |(w, h, percent, seed, pick)| {
            let base = scattered_obstacles(w, h, percent, seed);
            let cells = w * h;
            let idx = pick % cells;
            let station = CellPos::new((idx / w) as i32, (idx % w) as i32);
            let obstacles: Vec<CellPos> = base.obstacles().filter(|&o| o != station).collect();
            GridEnvironment::new(w, h, station, &obstacles).unwrap()
        },
    )
}

fn run(env: GridEnvironment, budget: u32) -> CoverageSession {
    let mut config = CoverageConfig::new(Box::new(env), budget);
    config.record_trace = true;
    let mut session = CoverageSession::new(config).unwrap();
    session.run().unwrap();
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn graph_stays_a_tree_over_free_cells(env in arb_map(), budget in 2u32..80) {
        let s = run(env, budget);
        assert_tree_invariant(s.graph());
        assert_nodes_traversable(s.environment(), s.graph());
        let reachable = reachable_free_cells(s.environment());
        for node in s.graph().iter().skip(1) {
            prop_assert!(reachable.contains(&node.pos()));
        }
    }

    #[test]
    fn ample_budget_covers_every_reachable_cell(env in arb_map()) {
        let budget = 2 * env.width() * env.height() + 2;
        let s = run(env, budget);
        assert_full_coverage(s.environment(), s.graph());
    }

    #[test]
    fn forward_steps_fit_their_frame_budget(env in arb_map(), budget in 2u32..80) {
        let s = run(env, budget);
        for step in s.trace().unwrap() {
            if step.kind == StepKind::Forward {
                prop_assert!(step.distance <= step.budget.unwrap());
            }
        }
    }

    #[test]
    fn agent_ends_home_with_balanced_walks(env in arb_map(), budget in 2u32..80) {
        let s = run(env, budget);
        let station = s.environment().station();
        prop_assert_eq!(s.position(), station);
        let c = s.metrics().counters;
        prop_assert_eq!(c.forward, c.backtrack);
        prop_assert_eq!(c.discovered as usize + 1, s.graph().len());
        prop_assert_eq!(c.visited as usize + 1, s.graph().visited_count());
        prop_assert_eq!(s.metrics().rounds_run, s.round_cap());
    }

    #[test]
    fn walk_is_adjacent_and_stays_on_nodes(env in arb_map(), budget in 2u32..60) {
        let s = run(env, budget);
        let mut at = s.environment().station();
        for step in s.trace().unwrap() {
            prop_assert_eq!(step.from, at);
            prop_assert!(step.from.is_adjacent(step.to));
            prop_assert!(s.graph().contains(step.to));
            at = step.to;
        }
    }
}
