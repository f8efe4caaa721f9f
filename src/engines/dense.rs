use crate::{next_state, Cell, Engine, Error, Pattern, Result, Seed, Topology};

/// Fixed `side x side` field stored as a flat row-major vector of booleans.
pub struct DenseEngine {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    side: usize,
    topology: Topology,
}

impl DenseEngine {
    /// Largest supported side; the field keeps two `side * side` buffers.
    pub const MAX_SIDE: usize = 1 << 14;

    /// Creates an empty field.
    ///
    /// `topology` must be [`Topology::Torus`] or [`Topology::Bounded`].
    pub fn blank(side: usize, topology: Topology) -> Result<Self> {
        if side == 0 {
            return Err(Error::EmptyGrid);
        }
        if side > Self::MAX_SIDE {
            return Err(Error::GridTooLarge {
                side,
                max: Self::MAX_SIDE,
            });
        }
        if topology == Topology::Unbounded {
            return Err(Error::UnsupportedTopology(topology));
        }
        log::info!("dense engine: {side}x{side}, {}", topology.name());
        Ok(Self {
            cells_curr: vec![false; side * side],
            cells_next: vec![false; side * side],
            side,
            topology,
        })
    }

    /// Creates a field where every cell is alive with probability 1/2.
    ///
    /// `rng_seed` - random seed (if `None`, then random seed is generated)
    pub fn random(side: usize, topology: Topology, rng_seed: Option<u64>) -> Result<Self> {
        let mut engine = Self::blank(side, topology)?;
        // `blank` bounds the side by `MAX_SIDE`
        let n = side as u32;
        engine.seed(&Seed::Random {
            width: n,
            height: n,
            rng_seed,
        })?;
        Ok(engine)
    }

    pub fn from_pattern(side: usize, topology: Topology, pattern: &Pattern) -> Result<Self> {
        let mut engine = Self::blank(side, topology)?;
        engine.seed(&Seed::pattern(pattern.clone()))?;
        Ok(engine)
    }

    /// Index of an in-grid cell.
    fn index_inside(&self, cell: Cell) -> Option<usize> {
        let n = self.side as i64;
        ((0..n).contains(&cell.x) && (0..n).contains(&cell.y))
            .then(|| cell.x as usize + cell.y as usize * self.side)
    }

    /// Index of the cell after applying the edge policy.
    fn index(&self, cell: Cell) -> Option<usize> {
        match self.topology {
            Topology::Torus => {
                let n = self.side as i64;
                let (x, y) = (cell.x.rem_euclid(n), cell.y.rem_euclid(n));
                Some(x as usize + y as usize * self.side)
            }
            _ => self.index_inside(cell),
        }
    }
}

impl Engine for DenseEngine {
    fn seed(&mut self, seed: &Seed) -> Result<()> {
        let pattern = seed.to_pattern();
        let mut indices = Vec::with_capacity(pattern.len());
        for &cell in pattern.cells() {
            let i = self.index_inside(cell).ok_or(Error::OutOfBounds {
                x: cell.x,
                y: cell.y,
                side: self.side,
            })?;
            indices.push(i);
        }

        self.cells_curr.fill(false);
        for i in indices {
            self.cells_curr[i] = true;
        }
        log::info!("dense engine seeded with {} cells", pattern.len());
        Ok(())
    }

    fn step(&mut self) {
        let n = self.side as i64;
        for y in 0..n {
            for x in 0..n {
                let cell = Cell::new(x, y);
                let i = x as usize + y as usize * self.side;
                let state = next_state(self.cells_curr[i], self.count_live_neighbors(cell));
                self.cells_next[i] = state;
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        log::debug!("dense step: population {}", self.population());
    }

    fn is_alive(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.cells_curr[i])
    }

    fn alive_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        Box::new(
            self.cells_curr
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(|(i, _)| Cell::new((i % self.side) as i64, (i / self.side) as i64)),
        )
    }

    fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn stats(&self) -> String {
        format!(
            "Topology: {}\nGrid: {}x{}\nPopulation: {}",
            self.topology.name(),
            self.side,
            self.side,
            self.population()
        )
    }
}
