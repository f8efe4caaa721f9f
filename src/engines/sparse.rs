use crate::{next_state, Cell, Engine, Pattern, Result, Seed, Topology};
use ahash::AHashSet as HashSet;

/// Unbounded field storing only the coordinates of alive cells.
#[derive(Default)]
pub struct SparseEngine {
    alive: HashSet<Cell>,
}

impl SparseEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pattern(pattern: &Pattern) -> Self {
        log::info!("sparse engine seeded with {} cells", pattern.len());
        Self {
            alive: pattern.cells().iter().copied().collect(),
        }
    }
}

impl Engine for SparseEngine {
    fn seed(&mut self, seed: &Seed) -> Result<()> {
        *self = Self::from_pattern(&seed.to_pattern());
        Ok(())
    }

    fn step(&mut self) {
        // only alive cells and their neighbours can be alive in the next generation
        let mut candidates = HashSet::with_capacity(self.alive.len() * 9);
        for &cell in &self.alive {
            candidates.insert(cell);
            candidates.extend(cell.neighbors());
        }

        let next = candidates
            .into_iter()
            .filter(|&cell| next_state(self.is_alive(cell), self.count_live_neighbors(cell)))
            .collect::<HashSet<_>>();
        self.alive = next;
        log::debug!("sparse step: population {}", self.alive.len());
    }

    fn is_alive(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }

    fn alive_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        Box::new(self.alive.iter().copied())
    }

    fn population(&self) -> usize {
        self.alive.len()
    }

    fn topology(&self) -> Topology {
        Topology::Unbounded
    }

    fn stats(&self) -> String {
        let bounds = match self.current_state().bounding_box() {
            Some((lo, hi)) => format!("({}, {})..=({}, {})", lo.x, lo.y, hi.x, hi.y),
            None => "empty".to_string(),
        };
        format!(
            "Topology: unbounded\nPopulation: {}\nBounds: {bounds}",
            self.alive.len()
        )
    }
}
