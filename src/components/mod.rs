//! UI components for the game page.

pub mod board;
pub mod cell;
pub mod winner_banner;
