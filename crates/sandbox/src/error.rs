//! Construction errors. Every other grid operation is total.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid dimensions {width}x{height} exceed the addressable range")]
    TooLarge { width: usize, height: usize },
}
