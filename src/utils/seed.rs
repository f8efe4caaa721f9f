use super::{Cell, Pattern};

/// Initial population of an engine.
#[derive(Clone, Debug)]
pub enum Seed {
    /// Each cell of the `width x height` rectangle at `(0, 0)` is alive with probability 1/2.
    ///
    /// `rng_seed` - random seed (if `None`, then random seed is generated)
    Random {
        width: u32,
        height: u32,
        rng_seed: Option<u64>,
    },
    /// Cells of `pattern` placed relative to `origin`.
    Pattern { pattern: Pattern, origin: Cell },
}

impl Seed {
    pub const FILL_RATE: f64 = 0.5;

    pub fn pattern(pattern: Pattern) -> Self {
        Self::Pattern {
            pattern,
            origin: Cell::default(),
        }
    }

    /// Resolves the seed into the concrete set of alive cells.
    pub fn to_pattern(&self) -> Pattern {
        match self {
            Seed::Random {
                width,
                height,
                rng_seed,
            } => {
                use rand::{Rng, SeedableRng};
                let mut rng = if let Some(x) = rng_seed {
                    rand_chacha::ChaCha8Rng::seed_from_u64(*x)
                } else {
                    rand_chacha::ChaCha8Rng::from_entropy()
                };
                let mut cells = vec![];
                for y in 0..*height as i64 {
                    for x in 0..*width as i64 {
                        if rng.gen_bool(Self::FILL_RATE) {
                            cells.push(Cell::new(x, y));
                        }
                    }
                }
                Pattern::new(cells)
            }
            Seed::Pattern { pattern, origin } => pattern.translated(*origin),
        }
    }
}
