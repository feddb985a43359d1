//! Ship kinds, orientation and the cell span of a placement.

use super::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Extends downwards (increasing row) from the anchor.
    #[default]
    Vertical,
    /// Extends rightwards (increasing column) from the anchor.
    Horizontal,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }

    /// Wire encoding used in `QUEUE_ENTER_REQ`: 0 = vertical, 1 = horizontal.
    pub fn wire_flag(self) -> u8 {
        match self {
            Orientation::Vertical => 0,
            Orientation::Horizontal => 1,
        }
    }

    /// Decode the wire flag. The server treats anything but 1 as vertical.
    pub fn from_wire_flag(flag: u8) -> Self {
        if flag == 1 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// The five ship classes of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Lowercase name used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
        }
    }

    /// Number of cells the ship occupies.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser | ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }
}

impl core::fmt::Display for ShipKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship anchored at (`row`, `col`) extending along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub kind: ShipKind,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl ShipPlacement {
    pub fn new(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            row,
            col,
            orientation,
        }
    }

    /// Cells covered by the span, anchor first. Cells may lie off the board
    /// when the placement is out of bounds; check [`Self::in_bounds`]. Cells
    /// past `usize::MAX` are dropped.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.kind.size()).filter_map(move |i| match orientation {
            Orientation::Vertical => row.checked_add(i).map(|r| (r, col)),
            Orientation::Horizontal => col.checked_add(i).map(|c| (row, c)),
        })
    }

    /// `true` when every cell of the span lies within the grid.
    pub fn in_bounds(&self) -> bool {
        let len = self.kind.size();
        if self.row >= BOARD_SIZE || self.col >= BOARD_SIZE {
            return false;
        }
        match self.orientation {
            Orientation::Vertical => self.row + len <= BOARD_SIZE,
            Orientation::Horizontal => self.col + len <= BOARD_SIZE,
        }
    }

    /// `true` if (`row`, `col`) is part of the span.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}
