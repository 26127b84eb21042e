//! Top-level pages.

pub mod game;
