use super::Cell;

/// A finite set of cells, kept sorted and deduplicated.
///
/// Two patterns are equal iff they contain the same cells, so a pattern is
/// also used as a storage-independent snapshot of an engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        let mut cells = cells.into_iter().collect::<Vec<_>>();
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    pub fn from_offsets(offsets: &[(i64, i64)]) -> Self {
        Self::new(offsets.iter().copied().map(Cell::from))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Returns the pattern moved so that its `(0, 0)` lands on `origin`.
    pub fn translated(&self, origin: Cell) -> Self {
        Self::new(self.cells.iter().map(|c| c.offset(origin.x, origin.y)))
    }

    /// Inclusive `(min, max)` corners, `None` for an empty pattern.
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let first = *self.cells.first()?;
        Some(self.cells.iter().fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for Pattern {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_order_and_duplicates() {
        let a = Pattern::from_offsets(&[(1, 0), (0, 0), (1, 0)]);
        let b = Pattern::from_offsets(&[(0, 0), (1, 0)]);
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(Cell::new(1, 0)));
        assert!(!a.contains(Cell::new(0, 1)));
    }

    #[test]
    fn translation_and_bounds() {
        let p = Pattern::from_offsets(&[(0, 2), (3, -1)]).translated(Cell::new(10, 10));
        assert_eq!(
            p.bounding_box(),
            Some((Cell::new(10, 9), Cell::new(13, 12)))
        );
        assert_eq!(Pattern::default().bounding_box(), None);
    }
}
