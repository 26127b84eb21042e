//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain: `game` models the fetch/phase state machine,
//! `moves` holds the pure move logic (coordinate codec, legality, random
//! selection) so it is testable without a browser.

pub mod game;
pub mod moves;
