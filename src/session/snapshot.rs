use super::{Identity, LobbyInfo, MatchInfo, MatchSummary, Phase, Session, TurnOwner};
use crate::core::{Board, Orientation, ShipKind};

/// Placement progress as the UI shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementView {
    /// Next ship to place, `None` once the fleet is complete.
    pub current: Option<ShipKind>,
    pub orientation: Orientation,
    pub placed: usize,
}

/// Read-only copy of everything the UI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub connected: bool,
    pub identity: Option<Identity>,
    pub own_board: Board,
    pub opponent_board: Board,
    pub match_info: Option<MatchInfo>,
    pub lobby: Option<LobbyInfo>,
    pub placement: PlacementView,
    pub last_result: Option<MatchSummary>,
    pub last_notification: Option<String>,
}

impl SessionSnapshot {
    pub fn my_turn(&self) -> bool {
        self.match_info
            .as_ref()
            .is_some_and(|m| m.turn_owner == TurnOwner::Me)
    }

    pub fn enemy_name(&self) -> Option<&str> {
        self.match_info.as_ref().map(|m| m.opponent_name.as_str())
    }
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            connected: self.connected,
            identity: self.identity.clone(),
            own_board: self.own_board,
            opponent_board: self.opponent_board,
            match_info: self.current_match.clone(),
            lobby: self.lobby.clone(),
            placement: PlacementView {
                current: self.placement.current(),
                orientation: self.placement.orientation(),
                placed: self.placement.placements().count(),
            },
            last_result: self.last_result.clone(),
            last_notification: self.last_notification.clone(),
        }
    }
}
