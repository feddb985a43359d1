//! The 10×10 grid of cell states.
//!
//! One `Board` holds the local fleet, a second one records what has been
//! observed of the opponent. Cell transitions only move forward:
//! `Empty -> ShipOccupied` during placement and `Empty/ShipOccupied -> Hit/Miss`
//! when an attack result arrives.

use core::fmt;

use crate::core::common::{AttackOutcome, BoardError};
use crate::core::config::BOARD_SIZE;
use crate::core::ship::ShipPlacement;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ShipOccupied,
    Hit,
    Miss,
}

impl Cell {
    /// `true` once an attack has landed on the cell.
    pub fn is_attacked(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-`Empty` board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Cell at (`row`, `col`), or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn check_coord(row: usize, col: usize) -> Result<(), BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(())
        } else {
            Err(BoardError::InvalidCoordinate { row, col })
        }
    }

    /// Mark every cell of `placement` as `ShipOccupied`.
    ///
    /// This does not validate; run the placement through
    /// [`crate::core::placement::validate`] first. Cells falling off the grid
    /// are skipped.
    pub fn place(&mut self, placement: &ShipPlacement) {
        for (r, c) in placement.cells() {
            if let Some(cell) = self.cells.get_mut(r).and_then(|row| row.get_mut(c)) {
                *cell = Cell::ShipOccupied;
            }
        }
    }

    /// `true` if (`row`, `col`) already carries `Hit` or `Miss`.
    pub fn is_attacked(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).map(Cell::is_attacked).unwrap_or(false)
    }

    /// Record an attack result at (`row`, `col`).
    ///
    /// `Hit`/`Sunk` become `Cell::Hit`, `Miss` becomes `Cell::Miss`. A cell
    /// that was already attacked never changes again.
    pub fn mark_attack(
        &mut self,
        row: usize,
        col: usize,
        outcome: AttackOutcome,
    ) -> Result<Cell, BoardError> {
        Self::check_coord(row, col)?;
        let cell = &mut self.cells[row][col];
        if cell.is_attacked() {
            return Err(BoardError::AlreadyAttacked);
        }
        *cell = if outcome.is_hit() { Cell::Hit } else { Cell::Miss };
        Ok(*cell)
    }

    /// Number of cells currently in state `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == kind)
            .count()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipOccupied => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
