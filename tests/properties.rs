use gameoflife::{next_state, Cell, DenseEngine, Engine, Pattern, SparseEngine, Topology};
use proptest::prelude::*;

const SIDE: usize = 64;
const ORIGIN: i64 = 24;

/// Small random soups placed well inside the dense grid.
fn soup() -> impl Strategy<Value = Pattern> {
    prop::collection::vec((0i64..12, 0i64..12), 0..80).prop_map(|cells| {
        Pattern::new(
            cells
                .into_iter()
                .map(|(x, y)| Cell::new(x + ORIGIN, y + ORIGIN)),
        )
    })
}

fn engines(pattern: &Pattern) -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(SparseEngine::from_pattern(pattern)),
        Box::new(DenseEngine::from_pattern(SIDE, Topology::Bounded, pattern).unwrap()),
        Box::new(DenseEngine::from_pattern(SIDE, Topology::Torus, pattern).unwrap()),
    ]
}

proptest! {
    #[test]
    fn step_applies_rule_to_every_cell(pattern in soup()) {
        for mut engine in engines(&pattern) {
            let region = (ORIGIN - 2..ORIGIN + 14)
                .flat_map(|y| (ORIGIN - 2..ORIGIN + 14).map(move |x| Cell::new(x, y)));
            let expected = region
                .map(|c| (c, next_state(engine.is_alive(c), engine.count_live_neighbors(c))))
                .collect::<Vec<_>>();
            engine.step();
            for (c, alive) in expected {
                prop_assert_eq!(engine.is_alive(c), alive, "cell {:?}", c);
            }
            // nothing appears away from the previous population
            for c in engine.alive_cells() {
                prop_assert!((ORIGIN - 1..ORIGIN + 13).contains(&c.x));
                prop_assert!((ORIGIN - 1..ORIGIN + 13).contains(&c.y));
            }
        }
    }

    #[test]
    fn neighbor_count_is_at_most_eight(pattern in soup(), x in 0i64..SIDE as i64, y in 0i64..SIDE as i64) {
        for engine in engines(&pattern) {
            let n = engine.count_live_neighbors(Cell::new(x, y));
            prop_assert!(n <= 8);
            let direct = Cell::new(x, y).neighbors().filter(|&c| pattern.contains(c)).count();
            prop_assert_eq!(n as usize, direct);
        }
    }

    #[test]
    fn sparse_and_dense_agree(pattern in soup(), steps in 0u64..10) {
        let mut engines = engines(&pattern);
        for engine in engines.iter_mut() {
            engine.update(steps);
        }
        let first = engines[0].current_state();
        for engine in engines.iter().skip(1) {
            prop_assert_eq!(&engine.current_state(), &first);
        }
    }

    #[test]
    fn identical_seeds_stay_identical(pattern in soup(), steps in 0u64..20) {
        let shuffled = Pattern::new(pattern.cells().iter().rev().copied());
        let mut a = SparseEngine::from_pattern(&pattern);
        let mut b = SparseEngine::from_pattern(&shuffled);
        a.update(steps);
        b.update(steps);
        prop_assert_eq!(a.current_state(), b.current_state());
    }
}

#[test]
fn empty_field_stays_empty() {
    for mut engine in engines(&Pattern::default()) {
        engine.update(10);
        assert_eq!(engine.population(), 0);
    }
}
