//! Snapshot poller and move dispatcher bridging the game service to the
//! Leptos UI state.
//!
//! The poller fetches the current game on an interval and replaces the
//! phase wholesale, so only the newest snapshot is ever rendered. Network
//! failures back off exponentially and reset on the next success.
//!
//! All HTTP logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(test)]
#[path = "poller_test.rs"]
mod poller_test;

use leptos::prelude::RwSignal;

use crate::net::types::MoveRequest;
use crate::state::game::GameState;

/// Base interval between snapshot fetches.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Ceiling for the error backoff.
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Next fetch delay after a failure: doubled, capped at [`MAX_BACKOFF_MS`].
pub fn next_backoff(current_ms: u32) -> u32 {
    current_ms.saturating_mul(2).min(MAX_BACKOFF_MS)
}

/// Spawn the snapshot polling loop as a local async task.
pub fn spawn_game_poller(game: RwSignal<GameState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(poll_loop(game));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = game;
    }
}

#[cfg(feature = "hydrate")]
async fn poll_loop(game: RwSignal<GameState>) {
    use leptos::prelude::{GetUntracked, Update};

    let mut delay_ms = POLL_INTERVAL_MS;
    loop {
        // A move refetch resolving while this fetch is in flight bumps the
        // generation; the poll result is then stale and gets discarded.
        let started = game.get_untracked().fetch_generation;
        match crate::net::api::fetch_game().await {
            Ok(snapshot) => {
                let applied = game
                    .try_update(|g| g.apply_poll(started, snapshot))
                    .unwrap_or(false);
                if !applied {
                    leptos::logging::log!("poll result discarded: a move resolved mid-fetch");
                }
                delay_ms = POLL_INTERVAL_MS;
            }
            Err(e) => {
                leptos::logging::warn!("game fetch failed: {e}");
                delay_ms = next_backoff(delay_ms);
            }
        }
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
    }
}

/// Send a guarded move intent to the service.
///
/// Blocked while a prior mutation is still outstanding, so a user cannot
/// double-submit before the server state updates. On success the snapshot
/// is refetched immediately; on failure the error is recorded in
/// [`GameState::last_move_error`] for the container to surface.
pub fn dispatch_move(game: RwSignal<GameState>, request: MoveRequest) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::{GetUntracked, Update};

        if game.get_untracked().move_in_flight {
            leptos::logging::log!("move dropped: mutation already in flight");
            return;
        }
        game.update(|g| {
            g.move_in_flight = true;
            g.last_move_error = None;
        });

        leptos::task::spawn_local(async move {
            match crate::net::api::make_move(&request).await {
                Ok(()) => {
                    // Refetch so the board reflects the server's resolution
                    // without waiting for the next poll tick.
                    match crate::net::api::fetch_game().await {
                        Ok(snapshot) => game.update(|g| g.apply_fetch(snapshot)),
                        Err(e) => leptos::logging::warn!("refetch after move failed: {e}"),
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("move failed: {e}");
                    game.update(|g| g.last_move_error = Some(e));
                }
            }
            game.update(|g| g.move_in_flight = false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (game, request);
    }
}
