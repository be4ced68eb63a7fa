//! Cell tag stored in every slot of the grid buffer.

use std::fmt;

/// One byte per cell. `0` is empty, `0xFF` is wall, everything in between
/// is a falling material whose tag only matters to the renderer's palette.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell(u8);

impl Cell {
    pub const EMPTY: Self = Self(0);
    pub const WALL: Self = Self(u8::MAX);

    /// Raw constructor. Tags 0 and 0xFF yield Empty and Wall.
    #[must_use]
    pub const fn from_tag(tag: u8) -> Self {
        Self(tag)
    }

    /// Material cell for `tag`, or `None` if the tag is reserved.
    #[must_use]
    pub const fn material(tag: u8) -> Option<Self> {
        match tag {
            0 | u8::MAX => None,
            t => Some(Self(t)),
        }
    }

    #[must_use]
    pub const fn tag(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    #[must_use]
    pub const fn is_wall(self) -> bool {
        self.0 == Self::WALL.0
    }

    /// Anything that falls: neither Empty nor Wall.
    #[must_use]
    pub const fn is_material(self) -> bool {
        !self.is_empty() && !self.is_wall()
    }
}

impl From<u8> for Cell {
    fn from(tag: u8) -> Self {
        Self::from_tag(tag)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.tag()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::EMPTY => write!(f, "Empty"),
            Self::WALL => write!(f, "Wall"),
            Self(tag) => write!(f, "Material({tag})"),
        }
    }
}
