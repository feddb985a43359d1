use log::{debug, warn};

use super::turn::{self, TurnOwner};
use super::{Identity, LobbyInfo, MatchInfo, MatchOrigin, MatchSummary, Phase, Session};
use crate::core::AttackOutcome;
use crate::protocol::{MatchId, MatchOutcome, ServerMessage, UserId, NO_PLAYER};

fn or_default(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

impl Session {
    /// Apply one decoded server message. Messages that make no sense in the
    /// current phase are logged and dropped without touching state.
    pub fn handle_message(&mut self, msg: ServerMessage) {
        debug!("<- {} in phase {}", msg.kind(), self.phase);
        match msg {
            ServerMessage::RegisterRes { result, message } => {
                if result == 1 {
                    self.notify(or_default(message, "Registration successful! Please log in."));
                } else {
                    self.notify(or_default(message, "Registration failed"));
                }
            }
            ServerMessage::LoginRes {
                result,
                user_id,
                username,
                elo,
                message,
            } => self.on_login(result, user_id, username, elo, message),
            ServerMessage::LogoutRes { result, message } => {
                if result != 1 {
                    self.notify(or_default(message, "Logout failed"));
                }
            }
            ServerMessage::QueueEnterRes { result, message } => {
                self.on_queue_enter(result, message)
            }
            ServerMessage::QueueExitRes { result, message } => self.on_queue_exit(result, message),
            ServerMessage::CreateRoomRes {
                result,
                code,
                message,
            } => self.on_room_created(result, code, message),
            ServerMessage::JoinRoomRes { result, message } => self.on_room_joined(result, message),
            ServerMessage::RoomCloseRes { result, message } => {
                if result == 1 {
                    self.notify(or_default(message, "Lobby closed"));
                } else {
                    self.notify(or_default(message, "Failed to close lobby"));
                }
            }
            ServerMessage::PlaceShipRes { result, message } => {
                if result != 1 {
                    self.notify(or_default(message, "Ship placement rejected"));
                }
            }
            ServerMessage::MatchFound {
                match_id,
                player1,
                player2,
                first_turn,
            } => self.on_match_found(match_id, &player1, &player2, first_turn),
            ServerMessage::MoveResult {
                match_id,
                attacker,
                row,
                col,
                result,
                next_turn,
            } => self.on_move_result(match_id, &attacker, row, col, result, next_turn),
            ServerMessage::MatchResult {
                match_id,
                result,
                new_elo,
            } => self.on_match_result(match_id, result, new_elo),
            ServerMessage::Error { message } => {
                if let Some(current) = self.current_match.as_mut() {
                    current.pending_attack = None;
                }
                if self.phase == Phase::Authenticating {
                    self.pending_username = None;
                    self.set_phase(Phase::Anonymous);
                }
                self.notify(format!("Error: {}", message));
            }
        }
    }

    fn on_login(
        &mut self,
        result: u8,
        user_id: Option<UserId>,
        username: Option<String>,
        elo: Option<i32>,
        message: Option<String>,
    ) {
        if self.phase != Phase::Authenticating {
            warn!("LOGIN_RES outside of authentication, ignoring");
            return;
        }
        let pending = self.pending_username.take();
        let user_id = match (result, user_id) {
            (1, Some(user_id)) => user_id,
            (1, None) => {
                warn!("LOGIN_RES success without a user_id");
                self.set_phase(Phase::Anonymous);
                self.notify("Login failed: server sent no user id");
                return;
            }
            _ => {
                self.set_phase(Phase::Anonymous);
                self.notify(or_default(message, "Login failed"));
                return;
            }
        };
        let username = username.or(pending).unwrap_or_default();
        self.notify(format!("Logged in as {}", username));
        self.identity = Some(Identity {
            user_id,
            username,
            elo,
        });
        self.set_phase(Phase::LoggedIn);
    }

    fn on_queue_enter(&mut self, result: u8, message: Option<String>) {
        match (result, self.phase) {
            (1, Phase::Queued) => self.notify(or_default(message, "Waiting for an opponent...")),
            (1, _) => debug!("fleet accepted"),
            (_, Phase::Queued) => {
                self.reset_boards();
                self.set_phase(Phase::LoggedIn);
                self.notify(or_default(message, "Failed to enter queue"));
            }
            (_, _) => self.notify(or_default(message, "Fleet rejected")),
        }
    }

    fn on_queue_exit(&mut self, result: u8, message: Option<String>) {
        if self.phase != Phase::Queued {
            warn!("QUEUE_EXIT_RES while {}, ignoring", self.phase);
            return;
        }
        if result == 1 {
            self.reset_boards();
            self.set_phase(Phase::LoggedIn);
            self.notify(or_default(message, "Left the queue"));
        } else {
            self.notify(or_default(message, "Failed to leave the queue"));
        }
    }

    fn on_room_created(&mut self, result: u8, code: Option<String>, message: Option<String>) {
        self.host_pending = false;
        if result != 1 {
            self.notify(or_default(message, "Failed to create lobby"));
            return;
        }
        if !(self.phase.is_idle() || self.phase == Phase::CustomLobbyHost) {
            warn!("CREATE_ROOM_RES while {}, ignoring", self.phase);
            return;
        }
        // Older servers put the code in `message`.
        let Some(code) = code.or(message) else {
            warn!("CREATE_ROOM_RES without a code");
            self.notify("Failed to create lobby");
            return;
        };
        self.notify(format!("Lobby created. Code: {}", code));
        self.lobby = Some(LobbyInfo {
            code,
            is_host: true,
            opponent_joined: false,
        });
        self.set_phase(Phase::CustomLobbyHost);
    }

    fn on_room_joined(&mut self, result: u8, message: Option<String>) {
        // The server reports failures around the host's room on the host's
        // socket with this message kind.
        if self.phase == Phase::CustomLobbyHost && result != 1 {
            self.notify(or_default(message, "Lobby error"));
            return;
        }
        if self.phase != Phase::CustomLobbyGuest {
            warn!("JOIN_ROOM_RES while {}, ignoring", self.phase);
            return;
        }
        if result == 1 {
            if let Some(lobby) = self.lobby.as_mut() {
                lobby.opponent_joined = true;
            }
            self.notify(or_default(message, "Joined lobby, waiting for the host"));
        } else {
            self.notify(or_default(message, "Failed to join lobby"));
        }
    }

    fn on_match_found(
        &mut self,
        match_id: MatchId,
        player1: &str,
        player2: &str,
        first_turn: Option<i64>,
    ) {
        let origin = match self.phase {
            Phase::Queued => MatchOrigin::Queue,
            Phase::CustomLobbyHost | Phase::CustomLobbyGuest => MatchOrigin::Lobby,
            other => {
                warn!("MATCH_FOUND while {}, ignoring", other);
                return;
            }
        };
        let Some(identity) = self.identity.as_ref() else {
            warn!("MATCH_FOUND without identity, ignoring");
            return;
        };
        let local_is_player1 = identity.username == player1;
        let mine = turn::first_turn_is_mine(
            self.config.turn_encoding(origin == MatchOrigin::Lobby),
            first_turn,
            identity.user_id,
            local_is_player1,
        );
        let opponent = turn::opponent_name(&identity.username, player1, player2).to_string();

        self.current_match = Some(MatchInfo {
            match_id,
            opponent_name: opponent.clone(),
            turn_owner: if mine {
                TurnOwner::Me
            } else {
                TurnOwner::Opponent
            },
            origin,
            concluded: false,
            pending_attack: None,
        });
        self.lobby = None;
        match origin {
            // Fleet already submitted with QUEUE_ENTER_REQ.
            MatchOrigin::Queue => {
                self.opponent_board.clear();
                self.set_phase(Phase::Battle);
            }
            MatchOrigin::Lobby => {
                self.reset_boards();
                self.set_phase(Phase::Placement);
            }
        }
        self.notify(format!("Match found! Opponent: {}", opponent));
        if mine {
            self.notify("You move first");
        }
    }

    fn on_move_result(
        &mut self,
        match_id: Option<MatchId>,
        attacker: &str,
        row: u8,
        col: u8,
        outcome: AttackOutcome,
        next_turn: UserId,
    ) {
        let Some(identity) = self.identity.as_ref() else {
            warn!("MOVE_RESULT without identity, ignoring");
            return;
        };
        let Some(current) = self.current_match.as_mut() else {
            warn!("MOVE_RESULT without a match, ignoring");
            return;
        };
        if match_id.is_some_and(|id| id != current.match_id) {
            warn!("MOVE_RESULT for match {:?}, expected {}", match_id, current.match_id);
            return;
        }

        let we_attacked = identity.username == attacker;
        let (row, col) = (row as usize, col as usize);
        if let Err(e) = turn::record_move(
            &mut self.own_board,
            &mut self.opponent_board,
            we_attacked,
            row,
            col,
            outcome,
        ) {
            warn!("MOVE_RESULT at ({}, {}): {}", row, col, e);
        }
        if we_attacked {
            current.pending_attack = None;
        }
        current.turn_owner = turn::turn_owner_after(next_turn, identity.user_id);
        let over = next_turn == NO_PLAYER;
        if over {
            current.concluded = true;
        }

        let who = if we_attacked { "You" } else { attacker };
        self.notify(format!("{} fired at ({}, {}): {}", who, row, col, outcome));
        if over {
            self.notify("GAME OVER!");
        }
    }

    fn on_match_result(&mut self, match_id: Option<MatchId>, outcome: MatchOutcome, new_elo: i32) {
        let Some(current) = self.current_match.as_ref() else {
            warn!("MATCH_RESULT without a match, ignoring");
            return;
        };
        if match_id.is_some_and(|id| id != current.match_id) {
            warn!("MATCH_RESULT for match {:?}, expected {}", match_id, current.match_id);
            return;
        }
        let opponent_name = current.opponent_name.clone();
        let elo_delta = self
            .identity
            .as_mut()
            .and_then(|identity| identity.elo.replace(new_elo))
            .map(|old| new_elo - old);

        self.last_result = Some(MatchSummary {
            outcome,
            new_elo,
            elo_delta,
            opponent_name,
        });
        self.current_match = None;
        self.lobby = None;
        self.set_phase(Phase::MatchEnded);
        self.notify(format!("Match over: you {} (elo {})", outcome, new_elo));
    }
}
