//! Wire types for the game service's JSON contract.
//!
//! The service speaks camelCase JSON (`possibleCoords`, `playerOneName`),
//! mapped here via serde renames. The snapshot replaces the client's view
//! wholesale on every fetch; nothing in it is mutated locally.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A board position: `x` is the column index, `y` the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Full current-game view returned by `GET /api/game`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Cell occupants, row-major: `field[row][column]`. `None` (or an empty
    /// string) means the cell is unoccupied.
    pub field: Vec<Vec<Option<String>>>,
    /// Positions the service currently permits as move destinations.
    pub possible_coords: Vec<Coord>,
    pub current_player: String,
    pub player_one_name: String,
    pub player_two_name: String,
    pub game_type: String,
    #[serde(default)]
    pub winner: Option<String>,
}

impl GameResponse {
    /// Number of board rows.
    pub fn rows(&self) -> usize {
        self.field.len()
    }

    /// Number of board columns, taken from row zero. The board is assumed
    /// rectangular; irregular row lengths are unsupported.
    pub fn cols(&self) -> usize {
        self.field.first().map_or(0, Vec::len)
    }

    /// Occupant of the cell at (`x`, `y`), with empty strings normalized
    /// to `None` (some service versions send `""` for empty cells).
    pub fn occupant(&self, x: usize, y: usize) -> Option<&str> {
        self.field
            .get(y)
            .and_then(|row| row.get(x))
            .and_then(Option::as_deref)
            .filter(|name| !name.is_empty())
    }
}

/// Move intent sent to `POST /api/game/move`.
///
/// `player` is always the snapshot's current player; the service alone
/// decides legality and the resulting state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub x: usize,
    pub y: usize,
    pub player: String,
    pub game_type: String,
}
