//! Relative-offset view of the buffer for the movement rule.

use crate::buffer::Buffer;
use crate::cell::Cell;

/// Read-only neighborhood of the cell at internal `(x, y)`. `dy = -1` is below.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors<'a> {
    pub buffer: &'a Buffer,
    pub x: usize,
    pub y: usize,
}

impl<'a> Neighbors<'a> {
    pub fn new(buffer: &'a Buffer, x: usize, y: usize) -> Self {
        Self { buffer, x, y }
    }

    /// Out-of-buffer reads return Wall.
    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        let x = self.x.checked_add_signed(dx as isize);
        let y = self.y.checked_add_signed(dy as isize);
        match (x, y) {
            (Some(x), Some(y)) => self.buffer.get(x, y),
            _ => Cell::WALL,
        }
    }
}

/// Mutable neighborhood of the cell at internal `(x, y)`. `dy = -1` is below.
///
/// Out-of-buffer reads return Wall, writes are no-ops. Inside the
/// logical area every offset in `-1..=1` lands on a real slot.
#[derive(Debug)]
pub struct NeighborApi<'a> {
    pub buffer: &'a mut Buffer,
    pub x: usize,
    pub y: usize,
}

impl<'a> NeighborApi<'a> {
    pub fn new(buffer: &'a mut Buffer, x: usize, y: usize) -> Self {
        Self { buffer, x, y }
    }

    /// Read-only view of the same neighborhood.
    #[must_use]
    pub fn view(&self) -> Neighbors<'_> {
        Neighbors::new(&*self.buffer, self.x, self.y)
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Cell {
        self.view().get(dx, dy)
    }

    pub fn set(&mut self, dx: i32, dy: i32, cell: Cell) {
        let x = self.x.checked_add_signed(dx as isize);
        let y = self.y.checked_add_signed(dy as isize);
        if let (Some(x), Some(y)) = (x, y) {
            self.buffer.set(x, y, cell);
        }
    }

    /// Move the centre cell to `(dx, dy)` and leave Empty behind.
    pub fn move_to(&mut self, dx: i32, dy: i32) {
        let me = self.get(0, 0);
        self.set(dx, dy, me);
        self.set(0, 0, Cell::EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_cell() -> impl Strategy<Value = Cell> {
        any::<u8>().prop_map(Cell::from_tag)
    }

    #[test]
    fn move_to_leaves_empty_behind() {
        let mut buffer = Buffer::new(3, 3);
        let sand = Cell::from_tag(1);
        buffer.set(2, 2, sand);
        let mut api = NeighborApi::new(&mut buffer, 2, 2);
        api.move_to(-1, -1);
        assert_eq!(api.get(0, 0), Cell::EMPTY);
        assert_eq!(api.get(-1, -1), sand);
        assert_eq!(buffer.get(1, 1), sand);
    }

    #[test]
    fn view_matches_mutable_api() {
        let mut buffer = Buffer::new(3, 3);
        buffer.set(1, 1, Cell::from_tag(2));
        let api = NeighborApi::new(&mut buffer, 2, 2);
        let view = api.view();
        for dy in -1..=1 {
            for dx in -1..=1 {
                assert_eq!(view.get(dx, dy), api.get(dx, dy));
            }
        }
        assert_eq!(view.get(-1, -1), Cell::from_tag(2));
    }

    #[test]
    fn corner_sees_wall_ring() {
        let buffer = Buffer::new(2, 2);
        let api = Neighbors::new(&buffer, 1, 1);
        assert!(api.get(0, -1).is_wall());
        assert!(api.get(-1, -1).is_wall());
        assert!(api.get(-1, 0).is_wall());
        assert!(api.get(1, -1).is_wall());
        assert!(api.get(1, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_neighbor_get_set_round_trip(
            base_x in 1usize..=16,
            base_y in 1usize..=16,
            dx in -1i32..=1,
            dy in -1i32..=1,
            cell in arb_cell(),
        ) {
            let mut buffer = Buffer::new(16, 16);
            let mut api = NeighborApi::new(&mut buffer, base_x, base_y);
            api.set(dx, dy, cell);
            prop_assert_eq!(api.get(dx, dy), cell);
        }

        #[test]
        fn prop_neighbor_out_of_buffer_is_wall_and_untouched(
            base_x in 0usize..18,
            base_y in 0usize..18,
            dx in -64i32..64,
            dy in -64i32..64,
            cell in arb_cell(),
        ) {
            let tx = base_x as i64 + i64::from(dx);
            let ty = base_y as i64 + i64::from(dy);
            prop_assume!(!(0..18).contains(&tx) || !(0..18).contains(&ty));

            let mut buffer = Buffer::new(16, 16);
            let before = buffer.clone();
            let mut api = NeighborApi::new(&mut buffer, base_x, base_y);

            prop_assert_eq!(api.get(dx, dy), Cell::WALL);
            api.set(dx, dy, cell);
            prop_assert_eq!(&buffer, &before);
        }
    }
}
