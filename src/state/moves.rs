//! Pure move logic: coordinate codec, legality lookup, the dispatch guard,
//! and random move selection.
//!
//! DESIGN
//! ======
//! A single legality representation backs everything: the set derived by
//! [`legal_targets`] is used both for cell availability and for the dispatch
//! guard, so the two checks cannot drift. Moves are always attributed to the
//! snapshot's current player; cells report only their coordinate.

#[cfg(test)]
#[path = "moves_test.rs"]
mod moves_test;

use std::collections::HashSet;

use crate::net::types::{Coord, GameResponse, MoveRequest};
use crate::util::random::RandomSource;

/// Encode a (column, row) pair as a unique, stable string key.
///
/// Used as a render key and for set membership; distinct pairs never
/// collide because both components are delimited.
pub fn coord_key(x: usize, y: usize) -> String {
    format!("x:{x}:y:{y}")
}

/// Build the legal-target lookup set from a snapshot's legal-coordinate
/// list, keyed via [`coord_key`].
pub fn legal_targets(coords: &[Coord]) -> HashSet<String> {
    coords.iter().map(|c| coord_key(c.x, c.y)).collect()
}

/// Guard a requested move: returns the move intent iff the coordinate is a
/// legal target, attributed to the snapshot's current player and game type.
/// Illegal coordinates yield `None` (dropped silently by the caller).
pub fn guard_move(
    game: &GameResponse,
    legal: &HashSet<String>,
    coord: Coord,
) -> Option<MoveRequest> {
    if !legal.contains(&coord_key(coord.x, coord.y)) {
        return None;
    }
    Some(MoveRequest {
        x: coord.x,
        y: coord.y,
        player: game.current_player.clone(),
        game_type: game.game_type.clone(),
    })
}

/// Pick a uniformly random legal coordinate and build a move intent for the
/// current player. Returns `None` when no legal coordinates exist.
pub fn random_move(game: &GameResponse, random: &mut dyn RandomSource) -> Option<MoveRequest> {
    let index = random.pick_index(game.possible_coords.len())?;
    let coord = *game.possible_coords.get(index)?;
    Some(MoveRequest {
        x: coord.x,
        y: coord.y,
        player: game.current_player.clone(),
        game_type: game.game_type.clone(),
    })
}

/// Derive the CSS class list for one cell.
///
/// Unoccupied cells are `cell--empty`, plus `cell--unavailable` when they
/// are not a legal target. Occupied cells get the color class of whichever
/// player name matches; they are never marked unavailable.
pub fn cell_class(
    occupant: Option<&str>,
    available: bool,
    player_one: &str,
    player_two: &str,
) -> String {
    let mut class = String::from("cell");
    match occupant {
        None => {
            class.push_str(" cell--empty");
            if !available {
                class.push_str(" cell--unavailable");
            }
        }
        Some(name) if name == player_one => class.push_str(" cell--red"),
        Some(name) if name == player_two => class.push_str(" cell--yellow"),
        // Occupant matching neither display name: base class only.
        Some(_) => {}
    }
    class
}
