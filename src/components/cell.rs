//! A single grid position.

use leptos::prelude::*;

use crate::net::types::Coord;
use crate::state::moves::{cell_class, coord_key};

/// One board cell. Visual state is derived entirely from the inputs; a
/// click reports the cell's coordinate and nothing else — attribution to a
/// player happens in the board's dispatch guard.
#[component]
pub fn Cell(
    x: usize,
    y: usize,
    occupant: Option<String>,
    available: bool,
    player_one: String,
    player_two: String,
    on_move: Callback<Coord>,
) -> impl IntoView {
    let class = cell_class(occupant.as_deref(), available, &player_one, &player_two);

    view! {
        <button
            class=class
            data-coord=coord_key(x, y)
            on:click=move |_| on_move.run(Coord { x, y })
        ></button>
    }
}
