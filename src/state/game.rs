#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use crate::net::types::GameResponse;

/// Sentinel current-player value that triggers automatic move selection.
pub const MACHINE_PLAYER: &str = "machine";

/// Phase of the game view, driven entirely by the service query.
///
/// Modeled as an explicit variant (rather than separate loading/absent
/// flags) so the container's match is exhaustive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    /// No fetch has resolved yet.
    #[default]
    Loading,
    /// The service reported no active game.
    Absent,
    /// The latest snapshot from the service.
    Present(GameResponse),
}

/// Game-level state: the current phase, mutation status, and the last
/// mutation error exposed for the container to surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub phase: GamePhase,
    /// Set while a move mutation (and its follow-up refetch) is
    /// outstanding; further dispatches are blocked until it clears.
    pub move_in_flight: bool,
    pub last_move_error: Option<String>,
    /// Bumped each time a move's refetch lands. Poll results that started
    /// under an older generation are stale and must not be applied.
    pub fetch_generation: u64,
}

impl GameState {
    /// Replace the view with a move's refetch result. `None` means the
    /// service has no active game. Invalidates any poll fetch still in
    /// flight.
    pub fn apply_fetch(&mut self, snapshot: Option<GameResponse>) {
        self.fetch_generation += 1;
        self.phase = match snapshot {
            Some(game) => GamePhase::Present(game),
            None => GamePhase::Absent,
        };
    }

    /// Apply a poll result, unless a move refetch resolved after the poll
    /// started — the poll snapshot would then be older than the view it
    /// replaces. Returns whether the result was applied.
    pub fn apply_poll(&mut self, started_generation: u64, snapshot: Option<GameResponse>) -> bool {
        if started_generation != self.fetch_generation {
            return false;
        }
        self.phase = match snapshot {
            Some(game) => GamePhase::Present(game),
            None => GamePhase::Absent,
        };
        true
    }

    /// Whether the machine's automatic move should fire now.
    ///
    /// The turn transition is only consumed when a dispatch can actually
    /// be accepted: while a mutation is in flight the observation is
    /// deferred, so the move still fires once the flag clears instead of
    /// being lost to the dispatch guard.
    pub fn machine_move_due(&self, turns: &mut MachineTurnTracker) -> bool {
        if self.move_in_flight {
            return false;
        }
        match self.snapshot() {
            Some(game) => turns.observe(&game.current_player),
            None => false,
        }
    }

    /// The snapshot, if one is present.
    pub fn snapshot(&self) -> Option<&GameResponse> {
        match &self.phase {
            GamePhase::Present(game) => Some(game),
            GamePhase::Loading | GamePhase::Absent => None,
        }
    }
}

/// Tracks player-turn transitions so the machine's automatic move fires
/// exactly once per transition into [`MACHINE_PLAYER`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MachineTurnTracker {
    last_player: Option<String>,
}

impl MachineTurnTracker {
    /// Record the current player from the latest snapshot. Returns `true`
    /// iff the turn just changed to the machine player.
    pub fn observe(&mut self, current_player: &str) -> bool {
        let changed = self.last_player.as_deref() != Some(current_player);
        if changed {
            self.last_player = Some(current_player.to_owned());
        }
        changed && current_player == MACHINE_PLAYER
    }
}
