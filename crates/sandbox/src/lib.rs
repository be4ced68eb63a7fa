//! Falling sand grid engine.

pub mod api;
pub mod buffer;
pub mod cell;
pub mod config;
pub mod error;
pub mod fall;

use std::fmt;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::prelude::*;

use api::{NeighborApi, Neighbors};
use buffer::Buffer;
use cell::Cell;
use error::GridError;

/// Walled 2D grid of cells. `y` grows upward: row 0 is the bottom.
///
/// Logical `(x, y)` in `[0, width) × [0, height)` is stored at `(x + 1, y + 1)`
/// inside a Wall ring. Out-of-bounds reads return Wall, writes are no-ops.
/// `R` supplies the coin flip for diagonal falls that could go either way.
#[derive(Debug)]
pub struct Grid<R = StdRng> {
    width: usize,
    height: usize,
    buffer: Buffer,
    rng: R,
}

impl Grid {
    /// Grid with an entropy-seeded tie-break.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for zero or oversized dimensions.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    /// Grid whose diagonal tie-breaks replay identically for the same seed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for zero or oversized dimensions.
    pub fn seeded(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R> Grid<R> {
    /// # Errors
    ///
    /// Returns [`GridError`] for zero or oversized dimensions.
    pub fn with_rng(width: usize, height: usize, rng: R) -> Result<Self, GridError>
    where
        R: Rng,
    {
        check_dimensions(width, height)?;
        debug!("new grid {width}x{height}");
        Ok(Self {
            width,
            height,
            buffer: Buffer::new(width, height),
            rng,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Internal buffer coordinates for a logical position, if in bounds.
    fn interior(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((x + 1, y + 1))
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.interior(x, y).is_some()
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.interior(x, y)
            .map_or(Cell::WALL, |(ix, iy)| self.buffer.get(ix, iy))
    }

    /// Overwrite a cell. Any value is accepted, Wall included.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        match self.interior(x, y) {
            Some((ix, iy)) => self.buffer.set(ix, iy, cell),
            None => trace!("dropped write of {cell} at ({x}, {y})"),
        }
    }

    /// Empty the whole playfield and restore the Wall ring.
    pub fn clear(&mut self) {
        self.buffer.fill(Cell::EMPTY);
        self.buffer.stamp_border();
        debug!("cleared {}x{} grid", self.width, self.height);
    }

    /// Advance the simulation by one tick and return how many cells moved.
    ///
    /// Scans bottom-to-top, left-to-right, mutating in place. A moved cell
    /// always lands in the current row or the one below, both already
    /// visited, so nothing moves twice in a tick.
    pub fn update(&mut self) -> usize
    where
        R: Rng,
    {
        let mut moved = 0;
        for y in 1..=self.height {
            for x in 1..=self.width {
                if !self.buffer.get(x, y).is_material() {
                    continue;
                }
                let mut api = NeighborApi::new(&mut self.buffer, x, y);
                if fall::update_material(&mut api, &mut self.rng).is_some() {
                    moved += 1;
                }
            }
        }
        trace!("update moved {moved} cells");
        moved
    }

    /// Padded storage, Wall ring included.
    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Every logical cell as `(x, y, cell)`, bottom row first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| (x, y, self.buffer.get(x + 1, y + 1)))
        })
    }

    /// Number of logical cells equal to `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, _, c)| c == cell).count()
    }

    /// Number of logical cells holding falling material.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells().filter(|&(_, _, c)| c.is_material()).count()
    }

    /// True if the next [`Grid::update`] would move nothing.
    ///
    /// Reads only; the tie-break source is left untouched.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.cells().any(|(x, y, c)| {
            c.is_material() && fall::can_fall(&Neighbors::new(&self.buffer, x + 1, y + 1))
        })
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::ZeroDimension { width, height });
    }
    // Logical coordinates are addressed with i32.
    let limit = i32::MAX as usize;
    let fits = width < limit
        && height < limit
        && (width + 2).checked_mul(height + 2).is_some();
    if fits {
        Ok(())
    } else {
        Err(GridError::TooLarge { width, height })
    }
}

/// Top row first: `.` Empty, `#` Wall, material tags as base-36 digits.
impl<R> fmt::Display for Grid<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (1..=self.height).rev() {
            for x in 1..=self.width {
                let cell = self.buffer.get(x, y);
                let ch = match cell {
                    Cell::EMPTY => '.',
                    Cell::WALL => '#',
                    c => char::from_digit(u32::from(c.tag()), 36).unwrap_or('?'),
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Browser-facing handle: the renderer ticks, reads, paints and clears.
///
/// Coordinates are the engine's y-up convention; flipping screen y is the
/// caller's job.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Fails for zero or oversized dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize) -> Result<Universe, JsError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// One simulation step; returns the number of cells that moved.
    pub fn tick(&mut self) -> u32 {
        u32::try_from(self.grid.update()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.grid.get(x, y).tag()
    }

    pub fn set_cell(&mut self, x: i32, y: i32, tag: u8) {
        self.grid.set(x, y, Cell::from_tag(tag));
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Logical cell tags, row-major, bottom row first.
    #[must_use]
    pub fn cells(&self) -> Vec<u8> {
        self.grid.cells().map(|(_, _, c)| c.tag()).collect()
    }
}
