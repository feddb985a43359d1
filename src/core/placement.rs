//! Ship placement validator and the sequential placement plan.

use rand::Rng;

use crate::core::board::{Board, Cell};
use crate::core::common::BoardError;
use crate::core::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use crate::core::ship::{Orientation, ShipKind, ShipPlacement};

/// Maximum random draws per ship before [`random_placement`] gives up.
const MAX_RANDOM_ATTEMPTS: usize = 100;

/// Check a candidate placement against `board`, reporting why it fails.
pub fn validate(board: &Board, placement: &ShipPlacement) -> Result<(), BoardError> {
    if !placement.in_bounds() {
        return Err(BoardError::ShipOutOfBounds);
    }
    if placement
        .cells()
        .any(|(r, c)| board.cell(r, c) != Some(Cell::Empty))
    {
        return Err(BoardError::ShipOverlaps);
    }
    Ok(())
}

/// `true` when `placement` fits inside the grid and only covers `Empty` cells.
pub fn can_place(board: &Board, placement: &ShipPlacement) -> bool {
    validate(board, placement).is_ok()
}

/// Returns a random legal placement of `kind` on `board`.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    kind: ShipKind,
    rng: &mut R,
) -> Result<ShipPlacement, BoardError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = match orientation {
            Orientation::Vertical => BOARD_SIZE - kind.size(),
            Orientation::Horizontal => BOARD_SIZE - 1,
        };
        let max_c = match orientation {
            Orientation::Horizontal => BOARD_SIZE - kind.size(),
            Orientation::Vertical => BOARD_SIZE - 1,
        };
        let candidate = ShipPlacement::new(
            kind,
            rng.random_range(0..=max_r),
            rng.random_range(0..=max_c),
            orientation,
        );
        if can_place(board, &candidate) {
            return Ok(candidate);
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

/// Tracks the fixed-order placement of the fleet.
///
/// Ships go down one at a time in [`FLEET`] order. The orientation is a
/// single toggle shared by all ships; a ship keeps whatever orientation was
/// active when it was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementPlan {
    next: usize,
    orientation: Orientation,
    placed: [Option<ShipPlacement>; NUM_SHIPS],
}

impl PlacementPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ship that must be placed next, or `None` when the fleet is down.
    pub fn current(&self) -> Option<ShipKind> {
        FLEET.get(self.next).copied()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Flip the shared orientation toggle.
    pub fn rotate(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    pub fn is_complete(&self) -> bool {
        self.next >= NUM_SHIPS
    }

    /// Ships placed so far, in placement order.
    pub fn placements(&self) -> impl Iterator<Item = &ShipPlacement> {
        self.placed.iter().flatten()
    }

    /// Ships still waiting to be placed.
    pub fn remaining(&self) -> &[ShipKind] {
        &FLEET[self.next.min(NUM_SHIPS)..]
    }

    /// Place `kind` anchored at (`row`, `col`) with the current orientation.
    ///
    /// `kind` must be the ship returned by [`Self::current`]. On success the
    /// ship is written to `board` and the plan advances.
    pub fn place(
        &mut self,
        board: &mut Board,
        kind: ShipKind,
        row: usize,
        col: usize,
    ) -> Result<ShipPlacement, BoardError> {
        let expected = self.current().ok_or(BoardError::PlacementComplete)?;
        if kind != expected {
            return Err(BoardError::OutOfOrder {
                expected: expected.name(),
            });
        }
        let placement = ShipPlacement::new(kind, row, col, self.orientation);
        validate(board, &placement)?;
        self.commit(board, placement);
        Ok(placement)
    }

    /// Place every remaining ship at a random legal position.
    /// Returns how many ships were placed.
    pub fn auto_place<R: Rng + ?Sized>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Result<usize, BoardError> {
        let mut count = 0;
        while let Some(kind) = self.current() {
            let placement = random_placement(board, kind, rng)?;
            self.commit(board, placement);
            count += 1;
        }
        Ok(count)
    }

    fn commit(&mut self, board: &mut Board, placement: ShipPlacement) {
        board.place(&placement);
        self.placed[self.next] = Some(placement);
        self.next += 1;
    }
}
