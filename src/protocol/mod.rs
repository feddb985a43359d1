//! Wire protocol spoken with the match server.
//!
//! Every message is one JSON object discriminated by its `type` field.
//! Outbound and inbound kinds are closed enums: a frame whose `type` is not
//! listed here fails to decode instead of being silently dropped.

pub mod codec;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{AttackOutcome, ShipPlacement};

pub use codec::{encode, FrameDecoder, FrameError, MAX_FRAME_LEN};

/// Server-assigned account id.
pub type UserId = i64;
/// Server-assigned match id.
pub type MatchId = i64;

/// `next_turn` value meaning "nobody moves next": the match is over.
pub const NO_PLAYER: UserId = 0;

/// Ship entry in `QUEUE_ENTER_REQ`: `[row, col, orientation]` where the
/// orientation flag is 0 for vertical and 1 for horizontal.
pub type WireShip = (u8, u8, u8);

/// Messages sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientMessage {
    RegisterReq { username: String, password: String },
    LoginReq { username: String, password: String },
    Logout,
    /// Submit the fleet; the server queues the player or attaches the fleet
    /// to the pending lobby match.
    QueueEnterReq { ships: BTreeMap<String, WireShip> },
    QueueExitReq,
    CreateRoomReq { user_id: UserId },
    JoinRoomReq { code: String },
    RoomCloseReq { code: String },
    MoveReq { match_id: MatchId, row: u8, col: u8 },
    ResignReq { match_id: MatchId, user_id: UserId },
}

impl ClientMessage {
    /// Wire name of the message kind. Used for logging, since the full
    /// message may carry a password.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientMessage::RegisterReq { .. } => "REGISTER_REQ",
            ClientMessage::LoginReq { .. } => "LOGIN_REQ",
            ClientMessage::Logout => "LOGOUT",
            ClientMessage::QueueEnterReq { .. } => "QUEUE_ENTER_REQ",
            ClientMessage::QueueExitReq => "QUEUE_EXIT_REQ",
            ClientMessage::CreateRoomReq { .. } => "CREATE_ROOM_REQ",
            ClientMessage::JoinRoomReq { .. } => "JOIN_ROOM_REQ",
            ClientMessage::RoomCloseReq { .. } => "ROOM_CLOSE_REQ",
            ClientMessage::MoveReq { .. } => "MOVE_REQ",
            ClientMessage::ResignReq { .. } => "RESIGN_REQ",
        }
    }
}

/// Final result of a match from the receiving player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    #[serde(alias = "win")]
    Win,
    #[serde(alias = "lose")]
    Lose,
    #[serde(alias = "draw")]
    Draw,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "win"),
            MatchOutcome::Lose => write!(f, "lose"),
            MatchOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Messages sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerMessage {
    RegisterRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    LoginRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        username: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        elo: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    LogoutRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    QueueEnterRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    QueueExitRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    CreateRoomRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    JoinRoomRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    RoomCloseRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    PlaceShipRes {
        result: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MatchFound {
        match_id: MatchId,
        player1: String,
        player2: String,
        /// Absent on lobby matches from older servers.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_turn: Option<i64>,
    },
    MoveResult {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        match_id: Option<MatchId>,
        attacker: String,
        row: u8,
        col: u8,
        result: AttackOutcome,
        next_turn: UserId,
    },
    MatchResult {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        match_id: Option<MatchId>,
        result: MatchOutcome,
        new_elo: i32,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ServerMessage::RegisterRes { .. } => "REGISTER_RES",
            ServerMessage::LoginRes { .. } => "LOGIN_RES",
            ServerMessage::LogoutRes { .. } => "LOGOUT_RES",
            ServerMessage::QueueEnterRes { .. } => "QUEUE_ENTER_RES",
            ServerMessage::QueueExitRes { .. } => "QUEUE_EXIT_RES",
            ServerMessage::CreateRoomRes { .. } => "CREATE_ROOM_RES",
            ServerMessage::JoinRoomRes { .. } => "JOIN_ROOM_RES",
            ServerMessage::RoomCloseRes { .. } => "ROOM_CLOSE_RES",
            ServerMessage::PlaceShipRes { .. } => "PLACE_SHIP_RES",
            ServerMessage::MatchFound { .. } => "MATCH_FOUND",
            ServerMessage::MoveResult { .. } => "MOVE_RESULT",
            ServerMessage::MatchResult { .. } => "MATCH_RESULT",
            ServerMessage::Error { .. } => "ERROR",
        }
    }
}

/// Build the `ships` map of `QUEUE_ENTER_REQ` from placed ships.
pub fn fleet_to_wire<'a, I>(placements: I) -> BTreeMap<String, WireShip>
where
    I: IntoIterator<Item = &'a ShipPlacement>,
{
    placements
        .into_iter()
        .map(|p| {
            (
                p.kind.name().to_string(),
                (p.row as u8, p.col as u8, p.orientation.wire_flag()),
            )
        })
        .collect()
}
