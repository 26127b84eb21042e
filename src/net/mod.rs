//! Network layer: wire types, REST helpers, and the snapshot poller that
//! bridges the game service to the UI state.

pub mod api;
pub mod poller;
pub mod types;
