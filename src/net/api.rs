//! REST API helpers for communicating with the game service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch and mutation
//! failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

use super::types::{GameResponse, MoveRequest};

/// Fetch the current game snapshot from `GET /api/game`.
///
/// Returns `Ok(None)` when the service reports no active game (404 or 204),
/// `Ok(Some(..))` with the snapshot otherwise.
///
/// # Errors
///
/// Returns an error string on network failure, an unexpected status, or a
/// malformed response body.
pub async fn fetch_game() -> Result<Option<GameResponse>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/game")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            204 | 404 => return Ok(None),
            _ if !resp.ok() => return Err(format!("game fetch failed: {}", resp.status())),
            _ => {}
        }
        let game: GameResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(Some(game))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Submit a move to `POST /api/game/move`.
///
/// The service owns all side effects; a successful response carries no body
/// the client needs — callers refetch the snapshot to see the result.
///
/// # Errors
///
/// Returns an error string if the request cannot be built or sent, or if
/// the service rejects the move.
pub async fn make_move(request: &MoveRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/game/move")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("move rejected: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
