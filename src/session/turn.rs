//! Turn coordination: who moves, which attacks are legal, and how a
//! `MOVE_RESULT` lands on the boards.

use std::fmt;

use log::warn;

use super::MatchInfo;
use crate::config::FirstTurnEncoding;
use crate::core::{AttackOutcome, Board, BoardError};
use crate::protocol::{UserId, NO_PLAYER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOwner {
    Me,
    Opponent,
    /// The match is decided or abandoned; nobody may attack.
    Nobody,
}

/// Why a local attack was refused before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackRejection {
    NoBattle,
    MatchOver,
    NotYourTurn,
    AwaitingResult,
    OffBoard,
    AlreadyAttacked,
}

impl fmt::Display for AttackRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackRejection::NoBattle => write!(f, "No battle in progress"),
            AttackRejection::MatchOver => write!(f, "The match is over"),
            AttackRejection::NotYourTurn => write!(f, "Not your turn"),
            AttackRejection::AwaitingResult => write!(f, "Waiting for the last shot to land"),
            AttackRejection::OffBoard => write!(f, "That cell is off the board"),
            AttackRejection::AlreadyAttacked => write!(f, "Cell already attacked"),
        }
    }
}

/// The opponent is whichever of the two players is not us.
pub fn opponent_name<'a>(local: &str, player1: &'a str, player2: &'a str) -> &'a str {
    if local == player1 {
        player2
    } else {
        player1
    }
}

/// Decide from `MATCH_FOUND` whether we move first.
///
/// A missing `first_turn` means player1 (the lobby host) starts. Under
/// [`FirstTurnEncoding::RoleFlag`] a value other than 0 or 1 is read as a
/// user id instead.
pub fn first_turn_is_mine(
    encoding: FirstTurnEncoding,
    first_turn: Option<i64>,
    local_id: UserId,
    local_is_player1: bool,
) -> bool {
    let Some(first_turn) = first_turn else {
        return local_is_player1;
    };
    match encoding {
        FirstTurnEncoding::UserId => first_turn == local_id,
        FirstTurnEncoding::RoleFlag => match first_turn {
            0 => local_is_player1,
            1 => !local_is_player1,
            other => {
                warn!(
                    "first_turn {} is not a role flag, comparing as user id",
                    other
                );
                other == local_id
            }
        },
    }
}

/// Turn owner after a `MOVE_RESULT` naming `next_turn`.
pub fn turn_owner_after(next_turn: UserId, local_id: UserId) -> TurnOwner {
    if next_turn == NO_PLAYER {
        TurnOwner::Nobody
    } else if next_turn == local_id {
        TurnOwner::Me
    } else {
        TurnOwner::Opponent
    }
}

/// Local guard run before any `MOVE_REQ` is sent.
pub fn check_attack(
    current: &MatchInfo,
    opponent_board: &Board,
    row: usize,
    col: usize,
) -> Result<(), AttackRejection> {
    if current.concluded {
        return Err(AttackRejection::MatchOver);
    }
    if current.pending_attack.is_some() {
        return Err(AttackRejection::AwaitingResult);
    }
    if current.turn_owner != TurnOwner::Me {
        return Err(AttackRejection::NotYourTurn);
    }
    if Board::check_coord(row, col).is_err() {
        return Err(AttackRejection::OffBoard);
    }
    if opponent_board.is_attacked(row, col) {
        return Err(AttackRejection::AlreadyAttacked);
    }
    Ok(())
}

/// Mark a shot on the board it landed on: the opponent's when we fired,
/// ours otherwise.
pub fn record_move(
    own_board: &mut Board,
    opponent_board: &mut Board,
    we_attacked: bool,
    row: usize,
    col: usize,
    outcome: AttackOutcome,
) -> Result<(), BoardError> {
    let board = if we_attacked {
        opponent_board
    } else {
        own_board
    };
    board.mark_attack(row, col, outcome).map(|_| ())
}
