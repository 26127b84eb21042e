//! Banner shown above the board when the snapshot carries a winner.

use leptos::prelude::*;

/// Winner announcement. The board stays visible underneath it.
#[component]
pub fn WinnerBanner(winner: String) -> impl IntoView {
    view! {
        <div class="winner-banner">
            <span class="winner-banner__label">"Winner: "</span>
            <span class="winner-banner__name">{winner}</span>
        </div>
    }
}
