//! The session aggregate: identity, phase, boards, match and lobby data.
//!
//! A [`Session`] is the only place client state lives. It is driven from two
//! directions, both on the thread that owns it:
//!
//! - [`Session::apply`] takes a user [`Command`], updates local state and
//!   returns the request to send, if any. State is updated before the request
//!   leaves, so it never needs to be rolled back.
//! - [`Session::handle_event`] takes what the receiver loop decoded, in the
//!   exact order it arrived.
//!
//! Rejections never surface as errors; they become notifications that the
//! UI drains with [`Session::take_notifications`].

mod command;
mod inbound;
mod snapshot;
pub mod turn;

use std::collections::VecDeque;
use std::fmt;

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::ClientConfig;
use crate::core::{Board, PlacementPlan};
use crate::protocol::{MatchId, MatchOutcome, ServerMessage, UserId};

pub use command::{validate_lobby_code, Command, MAX_LOBBY_CODE_LEN};
pub use snapshot::{PlacementView, SessionSnapshot};
pub use turn::{AttackRejection, TurnOwner};

/// What the receiver loop hands to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Message(ServerMessage),
    /// The stream closed or failed; carries a user-facing reason.
    Disconnected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Anonymous,
    Authenticating,
    LoggedIn,
    Queued,
    CustomLobbyHost,
    CustomLobbyGuest,
    Placement,
    Battle,
    MatchEnded,
}

impl Phase {
    /// Phases from which lobby-level commands may be issued.
    pub fn is_idle(self) -> bool {
        matches!(self, Phase::LoggedIn | Phase::MatchEnded)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Anonymous => "anonymous",
            Phase::Authenticating => "authenticating",
            Phase::LoggedIn => "logged-in",
            Phase::Queued => "queued",
            Phase::CustomLobbyHost => "lobby-host",
            Phase::CustomLobbyGuest => "lobby-guest",
            Phase::Placement => "placement",
            Phase::Battle => "battle",
            Phase::MatchEnded => "match-ended",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub username: String,
    pub elo: Option<i32>,
}

/// How the current match came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrigin {
    Queue,
    Lobby,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    pub match_id: MatchId,
    pub opponent_name: String,
    pub turn_owner: TurnOwner,
    pub origin: MatchOrigin,
    /// Set once a terminal move result arrived or we resigned; the match
    /// stays until `MATCH_RESULT` closes it.
    pub concluded: bool,
    /// Cell of a `MOVE_REQ` still waiting for its `MOVE_RESULT`.
    pub pending_attack: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyInfo {
    pub code: String,
    pub is_host: bool,
    pub opponent_joined: bool,
}

/// Outcome of the last finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub outcome: MatchOutcome,
    pub new_elo: i32,
    pub elo_delta: Option<i32>,
    pub opponent_name: String,
}

pub struct Session {
    config: ClientConfig,
    phase: Phase,
    identity: Option<Identity>,
    pending_username: Option<String>,
    own_board: Board,
    opponent_board: Board,
    placement: PlacementPlan,
    current_match: Option<MatchInfo>,
    lobby: Option<LobbyInfo>,
    /// `CREATE_ROOM_REQ` sent, `CREATE_ROOM_RES` not yet received.
    host_pending: bool,
    last_result: Option<MatchSummary>,
    notifications: VecDeque<String>,
    last_notification: Option<String>,
    connected: bool,
    rng: SmallRng,
}

impl Session {
    /// A fresh session for a newly opened connection.
    pub fn new(config: ClientConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        Self {
            config,
            phase: Phase::Anonymous,
            identity: None,
            pending_username: None,
            own_board: Board::new(),
            opponent_board: Board::new(),
            placement: PlacementPlan::new(),
            current_match: None,
            lobby: None,
            host_pending: false,
            last_result: None,
            notifications: VecDeque::new(),
            last_notification: None,
            connected: true,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn own_board(&self) -> &Board {
        &self.own_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    pub fn placement(&self) -> &PlacementPlan {
        &self.placement
    }

    pub fn current_match(&self) -> Option<&MatchInfo> {
        self.current_match.as_ref()
    }

    pub fn lobby(&self) -> Option<&LobbyInfo> {
        self.lobby.as_ref()
    }

    pub fn last_result(&self) -> Option<&MatchSummary> {
        self.last_result.as_ref()
    }

    pub fn last_notification(&self) -> Option<&str> {
        self.last_notification.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn in_queue(&self) -> bool {
        self.phase == Phase::Queued
    }

    /// `true` while hosting, joining, or waiting for a room to be created.
    pub fn in_lobby(&self) -> bool {
        self.lobby.is_some() || self.host_pending
    }

    pub fn in_match(&self) -> bool {
        self.current_match.is_some()
    }

    /// Drain pending notifications, oldest first.
    pub fn take_notifications(&mut self) -> Vec<String> {
        self.notifications.drain(..).collect()
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Message(msg) => self.handle_message(msg),
            SessionEvent::Disconnected(reason) => self.handle_disconnect(&reason),
        }
    }

    /// The connection is gone: drop everything and go back to `Anonymous`.
    /// There is no reconnect; further commands are refused.
    pub fn handle_disconnect(&mut self, reason: &str) {
        self.connected = false;
        self.identity = None;
        self.pending_username = None;
        self.current_match = None;
        self.lobby = None;
        self.host_pending = false;
        self.reset_boards();
        self.set_phase(Phase::Anonymous);
        self.notify(reason);
    }

    fn notify(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("notice: {}", text);
        while self.notifications.len() >= self.config.notification_capacity.max(1) {
            self.notifications.pop_front();
        }
        self.notifications.push_back(text.clone());
        self.last_notification = Some(text);
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!("phase {} -> {}", self.phase, phase);
            self.phase = phase;
        }
    }

    fn reset_boards(&mut self) {
        self.own_board.clear();
        self.opponent_board.clear();
        self.placement = PlacementPlan::new();
    }
}
