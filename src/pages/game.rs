//! Game page — the container over the loading / absent / present phases.

use leptos::prelude::*;

use crate::components::board::Board;
use crate::components::winner_banner::WinnerBanner;
use crate::net::poller::dispatch_move;
use crate::net::types::MoveRequest;
use crate::state::game::{GamePhase, GameState, MachineTurnTracker};
use crate::state::moves::random_move;
use crate::util::random::BrowserRandom;

/// Game page — renders the phase the service query is in: a loading
/// indicator, a "no game" placeholder, or the board (with a winner banner
/// when the snapshot carries one). Phase is re-evaluated on every snapshot
/// change; there is no terminal state.
#[component]
pub fn GamePage() -> impl IntoView {
    let game = expect_context::<RwSignal<GameState>>();

    // The tracker is deliberately non-reactive: updating it while observing
    // the snapshot must not retrigger this effect.
    let machine_turns = StoredValue::new(MachineTurnTracker::default());

    // Fire one random move per turn transition into the machine player.
    // While a mutation is outstanding the transition is not consumed; the
    // effect re-runs when the in-flight flag clears and fires then.
    Effect::new(move || {
        let state = game.get();
        let due = machine_turns
            .try_update_value(|t| state.machine_move_due(t))
            .unwrap_or(false);
        if !due {
            return;
        }
        if let Some(snapshot) = state.snapshot() {
            if let Some(request) = random_move(snapshot, &mut BrowserRandom) {
                dispatch_move(game, request);
            }
        }
    });

    let on_move = Callback::new(move |request: MoveRequest| dispatch_move(game, request));

    view! {
        <div class="game-page">
            {move || match game.get().phase {
                GamePhase::Loading => {
                    view! { <p class="game-page__loading">"Loading..."</p> }.into_any()
                }
                GamePhase::Absent => {
                    view! { <p class="game-page__absent">"No game in progress."</p> }.into_any()
                }
                GamePhase::Present(snapshot) => {
                    let winner = snapshot.winner.clone();
                    view! {
                        {winner.map(|w| view! { <WinnerBanner winner=w/> })}
                        <Board game=snapshot on_move=on_move/>
                    }
                        .into_any()
                }
            }}
            {move || {
                game.get()
                    .last_move_error
                    .map(|error| {
                        view! {
                            <p class="game-page__error">
                                <span class="game-page__error-text">{error}</span>
                                <button
                                    class="game-page__error-dismiss"
                                    on:click=move |_| game.update(|g| g.last_move_error = None)
                                >
                                    "Dismiss"
                                </button>
                            </p>
                        }
                    })
            }}
        </div>
    }
}
