use super::{Cell, Pattern, Result, Seed, Topology};

/// B3/S23: a live cell survives with 2 or 3 neighbours, a dead one is born with 3.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    neighbors == 3 || (alive && neighbors == 2)
}

/// Engine trait for Game of Life.
///
/// Stepping needs `&mut self` while every query takes `&self`, so readers can
/// never observe a half-computed generation.
pub trait Engine {
    /// Replaces the whole population with the cells described by `seed`.
    ///
    /// On error the previous population is left untouched.
    fn seed(&mut self, seed: &Seed) -> Result<()>;

    /// Advances the field by one generation.
    fn step(&mut self);

    /// Advances the field by `generations` generations.
    fn update(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    fn is_alive(&self, cell: Cell) -> bool;

    /// Number of alive cells among the 8 neighbours, in `0..=8`.
    fn count_live_neighbors(&self, cell: Cell) -> u8 {
        cell.neighbors().filter(|&c| self.is_alive(c)).count() as u8
    }

    /// Lazily enumerates alive cells; call again to restart.
    fn alive_cells(&self) -> Box<dyn Iterator<Item = Cell> + '_>;

    fn population(&self) -> usize {
        self.alive_cells().count()
    }

    /// Snapshot of the field independent of the storage strategy.
    fn current_state(&self) -> Pattern {
        self.alive_cells().collect()
    }

    fn topology(&self) -> Topology;

    /// Returns a short string reporting engine stats.
    fn stats(&self) -> String {
        format!(
            "Topology: {}\nPopulation: {}",
            self.topology().name(),
            self.population()
        )
    }
}
