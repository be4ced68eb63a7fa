//! Padded cell storage: the logical area plus a one-cell Wall ring.

use crate::cell::Cell;

/// Row-major `(width + 2) × (height + 2)` buffer. Row 0 is the bottom border.
///
/// Coordinates here are internal: the logical cell `(x, y)` lives at
/// `(x + 1, y + 1)`. Callers outside the crate go through [`crate::Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    stride: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Buffer {
    /// All-Empty interior with the Wall ring already stamped.
    ///
    /// Dimensions are validated by the caller.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let stride = width + 2;
        let rows = height + 2;
        let mut buffer = Self {
            stride,
            rows,
            cells: vec![Cell::EMPTY; stride * rows],
        };
        buffer.stamp_border();
        buffer
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.stride && y < self.rows
    }

    /// Internal read. Anything past the padded edge reads as Wall.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if self.contains(x, y) {
            self.cells[self.index(x, y)]
        } else {
            Cell::WALL
        }
    }

    /// Internal write. Anything past the padded edge is dropped.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.contains(x, y) {
            let i = self.index(x, y);
            self.cells[i] = cell;
        }
    }

    /// Overwrite every slot, border included.
    pub(crate) fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Force the outer ring back to Wall.
    pub(crate) fn stamp_border(&mut self) {
        let (w, h) = (self.stride, self.rows);
        self.cells[..w].fill(Cell::WALL);
        let top = self.index(0, h - 1);
        self.cells[top..top + w].fill(Cell::WALL);
        for y in 1..h - 1 {
            let left = self.index(0, y);
            self.cells[left] = Cell::WALL;
            self.cells[left + w - 1] = Cell::WALL;
        }
    }

    /// True when every ring slot is Wall.
    #[must_use]
    pub fn border_intact(&self) -> bool {
        let (w, h) = (self.stride, self.rows);
        (0..w).all(|x| self.get(x, 0).is_wall() && self.get(x, h - 1).is_wall())
            && (0..h).all(|y| self.get(0, y).is_wall() && self.get(w - 1, y).is_wall())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_pads_and_walls_the_ring() {
        let buf = Buffer::new(3, 2);
        assert_eq!(buf.stride(), 5);
        assert_eq!(buf.rows(), 4);
        assert_eq!(buf.as_slice().len(), 20);
        assert!(buf.border_intact());
        for y in 1..=2 {
            for x in 1..=3 {
                assert_eq!(buf.get(x, y), Cell::EMPTY);
            }
        }
    }

    #[test]
    fn one_by_one_has_single_interior_slot() {
        let buf = Buffer::new(1, 1);
        let walls = buf.as_slice().iter().filter(|c| c.is_wall()).count();
        assert_eq!(walls, 8);
        assert_eq!(buf.get(1, 1), Cell::EMPTY);
    }

    #[test]
    fn past_the_edge_reads_wall_and_drops_writes() {
        let mut buf = Buffer::new(2, 2);
        let before = buf.clone();
        assert_eq!(buf.get(4, 0), Cell::WALL);
        assert_eq!(buf.get(0, 4), Cell::WALL);
        buf.set(4, 1, Cell::from_tag(1));
        buf.set(1, 99, Cell::from_tag(1));
        assert_eq!(buf, before);
    }

    #[test]
    fn fill_then_stamp_restores_ring() {
        let mut buf = Buffer::new(4, 3);
        buf.fill(Cell::EMPTY);
        assert!(!buf.border_intact());
        buf.stamp_border();
        assert!(buf.border_intact());
        assert_eq!(buf, Buffer::new(4, 3));
    }

    proptest! {
        #[test]
        fn prop_ring_is_exactly_perimeter(w in 1usize..=32, h in 1usize..=32) {
            let buf = Buffer::new(w, h);
            let walls = buf.as_slice().iter().filter(|c| c.is_wall()).count();
            prop_assert_eq!(walls, 2 * (w + 2) + 2 * h);
            prop_assert!(buf.border_intact());
        }
    }
}
