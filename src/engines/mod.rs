mod dense;
mod sparse;

pub use dense::DenseEngine;
pub use sparse::SparseEngine;

use crate::{Engine, Error, Result, Seed, Topology, WorldConfig};

/// Builds the engine matching `config.topology` and fills it with random cells.
///
/// Torus and bounded worlds get a [`DenseEngine`] of `config.side`, the
/// unbounded world gets a [`SparseEngine`] seeded over a `side x side` square.
/// Either way `side` is limited by [`DenseEngine::MAX_SIDE`].
pub fn new_engine(config: &WorldConfig) -> Result<Box<dyn Engine>> {
    let engine: Box<dyn Engine> = match config.topology {
        Topology::Torus | Topology::Bounded => Box::new(DenseEngine::random(
            config.side,
            config.topology,
            config.rng_seed,
        )?),
        Topology::Unbounded => {
            if config.side > DenseEngine::MAX_SIDE {
                return Err(Error::GridTooLarge {
                    side: config.side,
                    max: DenseEngine::MAX_SIDE,
                });
            }
            let side = config.side as u32;
            let mut engine = SparseEngine::new();
            engine.seed(&Seed::Random {
                width: side,
                height: side,
                rng_seed: config.rng_seed,
            })?;
            Box::new(engine)
        }
    };
    Ok(engine)
}

/// Builds an empty engine for `topology`; `side` is ignored for the unbounded world.
pub fn blank_engine(topology: Topology, side: usize) -> Result<Box<dyn Engine>> {
    Ok(match topology {
        Topology::Unbounded => Box::new(SparseEngine::new()),
        _ => Box::new(DenseEngine::blank(side, topology)?),
    })
}
