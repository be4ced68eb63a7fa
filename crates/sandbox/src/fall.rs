//! Material movement: fall straight down, else slide diagonally.
//!
//! The scan runs bottom-to-top, left-to-right over a single buffer, so a
//! cell's left neighbor has already moved this tick while its right
//! neighbor has not. The right-hand check therefore also looks at the
//! same-row neighbor: an occupant there may still be about to drop into
//! the shared diagonal slot. The left-hand check only needs the diagonal.

use rand::Rng;

use crate::api::{NeighborApi, Neighbors};

/// Where a material cell went during one tick.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Fall {
    Down,
    DownLeft,
    DownRight,
}

impl Fall {
    /// Horizontal offset of the destination.
    #[must_use]
    pub fn dx(self) -> i32 {
        match self {
            Self::Down => 0,
            Self::DownLeft => -1,
            Self::DownRight => 1,
        }
    }
}

/// Resolve a diagonal slide from the two blocking flags.
///
/// Only the open-on-both-sides case touches `rng`, with a fair coin.
pub fn diagonal<R: Rng + ?Sized>(blocked_left: bool, blocked_right: bool, rng: &mut R) -> Option<Fall> {
    match (blocked_left, blocked_right) {
        (true, true) => None,
        (false, true) => Some(Fall::DownLeft),
        (true, false) => Some(Fall::DownRight),
        (false, false) => Some(if rng.gen_bool(0.5) {
            Fall::DownLeft
        } else {
            Fall::DownRight
        }),
    }
}

/// `(blocked_left, blocked_right)` for the centre cell of `api`.
#[must_use]
pub fn blocked_sides(api: &Neighbors) -> (bool, bool) {
    let blocked_left = !api.get(-1, -1).is_empty();
    let blocked_right = !api.get(1, -1).is_empty() || !api.get(1, 0).is_empty();
    (blocked_left, blocked_right)
}

/// True if the centre material cell has somewhere to go, without moving it.
#[must_use]
pub fn can_fall(api: &Neighbors) -> bool {
    if api.get(0, -1).is_empty() {
        return true;
    }
    let (left, right) = blocked_sides(api);
    !(left && right)
}

/// Apply one tick of gravity to the material cell at the centre of `api`.
///
/// Returns the move taken, or `None` if the cell stays put.
pub fn update_material<R: Rng + ?Sized>(api: &mut NeighborApi, rng: &mut R) -> Option<Fall> {
    if api.get(0, -1).is_empty() {
        api.move_to(0, -1);
        return Some(Fall::Down);
    }

    let (blocked_left, blocked_right) = blocked_sides(&api.view());
    let fall = diagonal(blocked_left, blocked_right, rng)?;
    api.move_to(fall.dx(), -1);
    Some(fall)
}
