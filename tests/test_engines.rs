#[cfg(test)]
mod tests {
    use gameoflife::{
        patterns, Cell, DenseEngine, Engine, Pattern, Seed, SparseEngine, Topology,
    };

    const SEED: u64 = 42;
    const SIDE: usize = 128;

    fn glider_gun_engines(origin: Cell) -> Vec<Box<dyn Engine>> {
        let gun = Pattern::from_offsets(patterns::GLIDER_GUN).translated(origin);
        let engines: Vec<Box<dyn Engine>> = vec![
            Box::new(SparseEngine::from_pattern(&gun)),
            Box::new(DenseEngine::from_pattern(SIDE, Topology::Bounded, &gun).unwrap()),
            Box::new(DenseEngine::from_pattern(SIDE, Topology::Torus, &gun).unwrap()),
        ];

        assert_fields_equal(&engines);
        engines
    }

    fn assert_fields_equal(engines: &[Box<dyn Engine>]) {
        let example = engines[0].current_state();
        for engine in engines.iter().skip(1) {
            let state = engine.current_state();
            if state == example {
                continue;
            }

            // drawing both fields side by side around the first mismatch
            const K: i64 = 10;
            let c = state
                .cells()
                .iter()
                .find(|&&c| !example.contains(c))
                .or_else(|| example.cells().iter().find(|&&c| !state.contains(c)))
                .copied()
                .unwrap_or_default();
            let mut picture = String::new();
            for y in c.y - K..c.y + K {
                for field in [&state, &example] {
                    picture.push('|');
                    picture.extend((c.x - K..c.x + K).map(|x| {
                        if field.contains(Cell::new(x, y)) {
                            '#'
                        } else {
                            ' '
                        }
                    }));
                }
                picture.push_str("|\n");
            }
            panic!(
                "Mismatch at ({}, {}) with {}:\n{}",
                c.x,
                c.y,
                engine.topology().name(),
                picture
            );
        }
    }

    #[test]
    fn test_glider_gun_sparse_matches_dense() {
        let mut engines = glider_gun_engines(Cell::new(10, 10));
        for _ in 0..120 {
            for engine in engines.iter_mut() {
                engine.step();
            }
            assert_fields_equal(&engines);
        }
        // the gun has fired gliders
        assert!(engines[0].population() > 36);
    }

    #[test]
    fn test_glider_gun_period() {
        let mut engine = SparseEngine::from_pattern(&Pattern::from_offsets(patterns::GLIDER_GUN));
        let start = engine.current_state();
        engine.update(30);
        let after = engine.current_state();
        // the gun itself is back in place and one glider was added
        assert_eq!(after.len(), start.len() + 5);
        assert!(start.cells().iter().all(|&c| after.contains(c)));
    }

    #[test]
    fn test_random_fields_are_deterministic() {
        for topology in [Topology::Torus, Topology::Bounded] {
            let mut engines: Vec<Box<dyn Engine>> = vec![
                Box::new(DenseEngine::random(64, topology, Some(SEED)).unwrap()),
                Box::new(DenseEngine::random(64, topology, Some(SEED)).unwrap()),
            ];
            for _ in 0..50 {
                for engine in engines.iter_mut() {
                    engine.step();
                }
                assert_fields_equal(&engines);
            }
        }
    }

    #[test]
    fn test_sparse_independent_of_insertion_order() {
        let random = Seed::Random {
            width: 40,
            height: 40,
            rng_seed: Some(SEED),
        }
        .to_pattern();
        let reversed = random.cells().iter().rev().copied().collect::<Vec<_>>();

        let mut a = SparseEngine::new();
        a.seed(&Seed::pattern(random.clone())).unwrap();
        let mut b = SparseEngine::from_pattern(&Pattern::new(reversed));

        let mut engines: Vec<Box<dyn Engine>> = vec![Box::new(a), Box::new(b)];
        for _ in 0..50 {
            for engine in engines.iter_mut() {
                engine.step();
            }
            assert_fields_equal(&engines);
        }
        b = SparseEngine::from_pattern(&random);
        b.update(50);
        assert_eq!(b.current_state(), engines[0].current_state());
    }
}
