use log::debug;

use super::turn::{self, AttackRejection, TurnOwner};
use super::{LobbyInfo, Phase, Session};
use crate::core::ShipKind;
use crate::protocol::{fleet_to_wire, ClientMessage};

/// Longest lobby code a guest may type.
pub const MAX_LOBBY_CODE_LEN: usize = 5;

/// Discrete user intents issued by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Register { username: String, password: String },
    Logout,
    /// Start placing ships for the automatic queue.
    EnterQueue,
    ExitQueue,
    HostLobby,
    JoinLobby { code: String },
    /// Close a hosted lobby or stop waiting as a guest.
    LeaveLobby,
    RotateShipOrientation,
    PlaceShip { kind: ShipKind, row: usize, col: usize },
    /// Place every remaining ship at random.
    AutoPlace,
    Attack { row: usize, col: usize },
    Resign,
    /// Leave the end-of-match screen.
    ReturnToLobby,
}

impl Command {
    fn is_idle_command(&self) -> bool {
        matches!(
            self,
            Command::Logout
                | Command::EnterQueue
                | Command::HostLobby
                | Command::JoinLobby { .. }
                | Command::ReturnToLobby
        )
    }
}

/// A lobby code is 1 to [`MAX_LOBBY_CODE_LEN`] ASCII letters or digits.
pub fn validate_lobby_code(code: &str) -> Result<(), String> {
    if code.is_empty() {
        return Err("Please enter a lobby code.".to_string());
    }
    if code.len() > MAX_LOBBY_CODE_LEN {
        return Err(format!(
            "Lobby codes are at most {} characters",
            MAX_LOBBY_CODE_LEN
        ));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("Lobby codes only contain letters and digits".to_string());
    }
    Ok(())
}

impl Session {
    /// Apply a user command. Returns the request to send to the server, or
    /// `None` when the command was purely local or was rejected.
    pub fn apply(&mut self, command: Command) -> Option<ClientMessage> {
        if !self.connected {
            self.notify("Not connected to server");
            return None;
        }
        if self.phase == Phase::MatchEnded && command.is_idle_command() {
            self.set_phase(Phase::LoggedIn);
        }

        match command {
            Command::Login { username, password } => self.login(username, password),
            Command::Register { username, password } => self.register(username, password),
            Command::Logout => self.logout(),
            Command::EnterQueue => self.enter_queue(),
            Command::ExitQueue => self.exit_queue(),
            Command::HostLobby => self.host_lobby(),
            Command::JoinLobby { code } => self.join_lobby(code),
            Command::LeaveLobby => self.leave_lobby(),
            Command::RotateShipOrientation => {
                if self.phase == Phase::Placement {
                    let orientation = self.placement.rotate();
                    debug!("orientation now {:?}", orientation);
                }
                None
            }
            Command::PlaceShip { kind, row, col } => self.place_ship(kind, row, col),
            Command::AutoPlace => self.auto_place(),
            Command::Attack { row, col } => self.attack(row, col),
            Command::Resign => self.resign(),
            Command::ReturnToLobby => {
                if self.phase != Phase::LoggedIn {
                    self.notify("Finish the current game first");
                }
                None
            }
        }
    }

    fn login(&mut self, username: String, password: String) -> Option<ClientMessage> {
        if self.phase != Phase::Anonymous {
            self.notify("Already logged in");
            return None;
        }
        if username.trim().is_empty() || password.is_empty() {
            self.notify("Username and password are required");
            return None;
        }
        self.pending_username = Some(username.clone());
        self.set_phase(Phase::Authenticating);
        Some(ClientMessage::LoginReq { username, password })
    }

    fn register(&mut self, username: String, password: String) -> Option<ClientMessage> {
        if self.phase != Phase::Anonymous {
            self.notify("Log out before registering a new account");
            return None;
        }
        if username.trim().is_empty() || password.is_empty() {
            self.notify("Username and password are required");
            return None;
        }
        Some(ClientMessage::RegisterReq { username, password })
    }

    /// Refuse lobby-level commands while a room creation is in flight.
    fn awaiting_room(&mut self) -> bool {
        if self.host_pending {
            self.notify("Waiting for the lobby to be created");
        }
        self.host_pending
    }

    fn logout(&mut self) -> Option<ClientMessage> {
        if self.awaiting_room() {
            return None;
        }
        if !self.phase.is_idle() {
            self.notify("Leave the queue, lobby or match before logging out");
            return None;
        }
        self.identity = None;
        self.last_result = None;
        self.reset_boards();
        self.set_phase(Phase::Anonymous);
        self.notify("Logged out");
        Some(ClientMessage::Logout)
    }

    fn enter_queue(&mut self) -> Option<ClientMessage> {
        if self.awaiting_room() {
            return None;
        }
        if !self.phase.is_idle() {
            self.notify("Cannot enter the queue right now");
            return None;
        }
        self.reset_boards();
        self.current_match = None;
        self.last_result = None;
        self.set_phase(Phase::Placement);
        None
    }

    fn exit_queue(&mut self) -> Option<ClientMessage> {
        match self.phase {
            Phase::Queued => Some(ClientMessage::QueueExitReq),
            Phase::Placement if self.current_match.is_none() => {
                self.reset_boards();
                self.set_phase(Phase::LoggedIn);
                self.notify("Placement cancelled");
                None
            }
            _ => {
                self.notify("Not in the queue");
                None
            }
        }
    }

    fn host_lobby(&mut self) -> Option<ClientMessage> {
        if self.awaiting_room() {
            return None;
        }
        let user_id = match (&self.identity, self.phase.is_idle()) {
            (Some(identity), true) => identity.user_id,
            _ => {
                self.notify("Cannot host a lobby right now");
                return None;
            }
        };
        self.host_pending = true;
        self.notify("Creating lobby...");
        Some(ClientMessage::CreateRoomReq { user_id })
    }

    fn join_lobby(&mut self, code: String) -> Option<ClientMessage> {
        if self.awaiting_room() {
            return None;
        }
        if !(self.phase.is_idle() || self.phase == Phase::CustomLobbyGuest) {
            self.notify("Cannot join a lobby right now");
            return None;
        }
        let code = code.trim().to_string();
        if let Err(reason) = validate_lobby_code(&code) {
            self.notify(reason);
            return None;
        }
        self.lobby = Some(LobbyInfo {
            code: code.clone(),
            is_host: false,
            opponent_joined: false,
        });
        self.set_phase(Phase::CustomLobbyGuest);
        self.notify(format!("Attempting to join room: {}", code));
        Some(ClientMessage::JoinRoomReq { code })
    }

    fn leave_lobby(&mut self) -> Option<ClientMessage> {
        match self.phase {
            Phase::CustomLobbyHost => {
                let code = self.lobby.take().map(|lobby| lobby.code);
                self.set_phase(Phase::LoggedIn);
                code.map(|code| ClientMessage::RoomCloseReq { code })
            }
            Phase::CustomLobbyGuest => {
                self.lobby = None;
                self.set_phase(Phase::LoggedIn);
                None
            }
            _ => {
                self.notify("Not in a lobby");
                None
            }
        }
    }

    fn place_ship(&mut self, kind: ShipKind, row: usize, col: usize) -> Option<ClientMessage> {
        if self.phase != Phase::Placement {
            self.notify("Not placing ships right now");
            return None;
        }
        match self.placement.place(&mut self.own_board, kind, row, col) {
            Ok(placement) => {
                debug!("placed {:?}", placement);
                self.fleet_ready()
            }
            Err(e) => {
                self.notify(e.to_string());
                None
            }
        }
    }

    fn auto_place(&mut self) -> Option<ClientMessage> {
        if self.phase != Phase::Placement {
            self.notify("Not placing ships right now");
            return None;
        }
        match self.placement.auto_place(&mut self.own_board, &mut self.rng) {
            Ok(count) => {
                debug!("auto-placed {} ships", count);
                self.fleet_ready()
            }
            Err(e) => {
                self.notify(e.to_string());
                None
            }
        }
    }

    /// Submit the fleet once the last ship is down.
    fn fleet_ready(&mut self) -> Option<ClientMessage> {
        if !self.placement.is_complete() {
            return None;
        }
        let ships = fleet_to_wire(self.placement.placements());
        if self.current_match.is_some() {
            self.set_phase(Phase::Battle);
            self.notify("Ships placed! Waiting for the battle");
        } else {
            self.set_phase(Phase::Queued);
            self.notify("Ships placed! Entering queue...");
        }
        Some(ClientMessage::QueueEnterReq { ships })
    }

    fn attack(&mut self, row: usize, col: usize) -> Option<ClientMessage> {
        let checked = match (&self.current_match, self.phase) {
            (Some(current), Phase::Battle) => {
                turn::check_attack(current, &self.opponent_board, row, col)
                    .map(|()| current.match_id)
            }
            _ => Err(AttackRejection::NoBattle),
        };
        match checked {
            Ok(match_id) => {
                if let Some(current) = self.current_match.as_mut() {
                    current.pending_attack = Some((row, col));
                }
                Some(ClientMessage::MoveReq {
                    match_id,
                    row: row as u8,
                    col: col as u8,
                })
            }
            Err(reason) => {
                self.notify(reason.to_string());
                None
            }
        }
    }

    fn resign(&mut self) -> Option<ClientMessage> {
        let user_id = self.identity.as_ref().map(|identity| identity.user_id);
        let target = match (self.current_match.as_mut(), user_id) {
            (Some(current), Some(user_id)) if !current.concluded => {
                current.concluded = true;
                current.turn_owner = TurnOwner::Nobody;
                current.pending_attack = None;
                Some((current.match_id, user_id))
            }
            _ => None,
        };
        match target {
            Some((match_id, user_id)) => {
                self.notify("You resigned");
                Some(ClientMessage::ResignReq { match_id, user_id })
            }
            None => {
                self.notify("No match to resign from");
                None
            }
        }
    }
}
