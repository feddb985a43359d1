#![cfg_attr(not(feature = "std"), no_std)]

pub mod core;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub mod client;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod receiver;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;

pub use crate::core::{
    can_place, random_placement, validate, AttackOutcome, Board, BoardError, Cell, Orientation,
    PlacementPlan, ShipKind, ShipPlacement, BOARD_SIZE, FLEET, NUM_SHIPS,
};

#[cfg(feature = "std")]
pub use client::Client;
#[cfg(feature = "std")]
pub use config::{ClientConfig, FirstTurnEncoding};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::{ClientMessage, FrameDecoder, FrameError, MatchOutcome, ServerMessage};
#[cfg(feature = "std")]
pub use receiver::ReceiverLoop;
#[cfg(feature = "std")]
pub use session::{Command, Phase, Session, SessionEvent, SessionSnapshot, TurnOwner};
