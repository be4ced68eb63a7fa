//! Grid configuration.
//!
//! Defaults match the demo playfield the renderer draws at 4x scale.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::GridError;
use crate::Grid;

/// Default logical width in cells.
pub const DEFAULT_WIDTH: usize = 80;

/// Default logical height in cells.
pub const DEFAULT_HEIGHT: usize = 120;

/// Size of the grid and the tie-break seed. `seed: None` draws from entropy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SandboxConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
        }
    }
}

impl SandboxConfig {
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// Returns [`GridError`] if the dimensions are rejected.
    pub fn build(&self) -> Result<Grid, GridError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Grid::with_rng(self.width, self.height, rng)
    }
}
