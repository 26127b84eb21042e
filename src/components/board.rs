//! The game board: composes cells into a grid and guards move dispatch.

use leptos::prelude::*;

use crate::components::cell::Cell;
use crate::net::types::{Coord, GameResponse, MoveRequest};
use crate::state::moves::{coord_key, guard_move, legal_targets};

/// Grid of cells built from a snapshot.
///
/// One legal-target set (keyed by the coordinate codec) backs both cell
/// availability and the dispatch guard. Clicks on coordinates outside the
/// set are dropped without feedback; legal clicks are forwarded as a move
/// intent attributed to the snapshot's current player.
///
/// A board is rebuilt whenever the snapshot changes, so everything here is
/// recomputed from the snapshot alone. An empty field renders zero rows;
/// the column count comes from row zero (the board is assumed rectangular).
#[component]
pub fn Board(game: GameResponse, on_move: Callback<MoveRequest>) -> impl IntoView {
    let legal = legal_targets(&game.possible_coords);
    let rows = game.rows();
    let cols = game.cols();

    let guarded = {
        let game = game.clone();
        let legal = legal.clone();
        Callback::new(move |coord: Coord| match guard_move(&game, &legal, coord) {
            Some(request) => on_move.run(request),
            None => {
                leptos::logging::log!(
                    "move dropped: {} is not a legal target",
                    coord_key(coord.x, coord.y)
                );
            }
        })
    };

    view! {
        <div class="board">
            {(0..rows)
                .map(|y| {
                    view! {
                        <div class="board__row">
                            {(0..cols)
                                .map(|x| {
                                    view! {
                                        <Cell
                                            x=x
                                            y=y
                                            occupant=game.occupant(x, y).map(str::to_owned)
                                            available=legal.contains(&coord_key(x, y))
                                            player_one=game.player_one_name.clone()
                                            player_two=game.player_two_name.clone()
                                            on_move=guarded
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
