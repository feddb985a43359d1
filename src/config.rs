//! Runtime configuration of the client.

use std::time::Duration;

/// Default server endpoint.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:8080";

/// Default UI cadence (about 60 ticks per second).
pub const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// How `MATCH_FOUND.first_turn` identifies the player who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FirstTurnEncoding {
    /// `first_turn` is the user id of the first mover.
    #[default]
    UserId,
    /// `first_turn` indexes `[player1, player2]`: 0 means player1 moves
    /// first, 1 means player2 does.
    RoleFlag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_addr: String,
    pub tick: Duration,
    /// Encoding used for matches found through the automatic queue.
    pub queue_turn_encoding: FirstTurnEncoding,
    /// Encoding used for matches started from a host/join lobby.
    pub lobby_turn_encoding: FirstTurnEncoding,
    /// Seed for random ship placement; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Notifications kept before the oldest is dropped.
    pub notification_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            tick: DEFAULT_TICK,
            queue_turn_encoding: FirstTurnEncoding::UserId,
            lobby_turn_encoding: FirstTurnEncoding::UserId,
            seed: None,
            notification_capacity: 32,
        }
    }
}

impl ClientConfig {
    /// Encoding to apply to a `MATCH_FOUND` depending on how the match began.
    pub fn turn_encoding(&self, from_lobby: bool) -> FirstTurnEncoding {
        if from_lobby {
            self.lobby_turn_encoding
        } else {
            self.queue_turn_encoding
        }
    }
}
