//! Battleship game core (no_std compatible)
//!
//! Fleet constants, the 10×10 board model, ship spans and the placement
//! validator. Nothing in here touches the network or allocates, so the same
//! rules can be shared with embedded or WebAssembly front-ends.

pub mod board;
pub mod common;
pub mod config;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use common::{AttackOutcome, BoardError};
pub use config::*;
pub use placement::{can_place, random_placement, validate, PlacementPlan};
pub use ship::{Orientation, ShipKind, ShipPlacement};
