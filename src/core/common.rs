//! Common types: board errors and attack outcomes.

/// Outcome of an attack as reported by the match server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum AttackOutcome {
    /// Attack struck a ship segment.
    Hit,
    /// Attack struck the last intact segment of a ship.
    Sunk,
    /// Attack landed in open water.
    Miss,
}

impl AttackOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Sunk)
    }
}

impl core::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackOutcome::Hit => write!(f, "HIT"),
            AttackOutcome::Sunk => write!(f, "SUNK"),
            AttackOutcome::Miss => write!(f, "MISS"),
        }
    }
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the 10×10 grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Ship span leaves the grid for its orientation.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// A ship other than the next one in fleet order was offered.
    OutOfOrder { expected: &'static str },
    /// Every ship of the fleet has already been placed.
    PlacementComplete,
    /// Cell was already marked by an earlier attack.
    AlreadyAttacked,
    /// Random placement gave up after too many attempts.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::OutOfOrder { expected } => {
                write!(f, "Ships are placed in order; place the {} next", expected)
            }
            BoardError::PlacementComplete => write!(f, "All ships are already placed"),
            BoardError::AlreadyAttacked => write!(f, "That cell was already attacked"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
