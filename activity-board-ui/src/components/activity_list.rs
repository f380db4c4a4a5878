//! Activity List Component
//!
//! One card per activity. Every field is rendered as a text node.

use activity_board::ActivityCard;
use leptos::*;

use crate::components::Loading;
use crate::state::{BoardState, Listing};

/// Activity cards, or the loading/empty/failed placeholder
#[component]
pub fn ActivityList(
    /// Called with the activity name when "View Participants" is clicked
    #[prop(into)]
    on_view: Callback<String>,
) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        <div id="activities-list" class="space-y-4">
            {move || match state.listing.get() {
                Listing::Loading => view! { <Loading /> }.into_view(),
                Listing::Placeholder(text) => view! {
                    <p class="text-gray-400 text-center py-8">{text}</p>
                }.into_view(),
                Listing::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card on_view=on_view /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard, on_view: Callback<String>) -> impl IntoView {
    let ActivityCard {
        name,
        description,
        schedule,
        availability,
        full,
        ..
    } = card;
    let target = name.clone();

    view! {
        <div
            class="activity-card bg-gray-800 rounded-lg p-4"
            class:full=full
        >
            <h4 class="text-lg font-semibold">{name}</h4>
            <p class="text-gray-300">{description}</p>
            <p class="text-sm">
                <strong>"Schedule: "</strong>
                {schedule}
            </p>
            <p class=if full { "text-sm text-red-400" } else { "text-sm" }>
                <strong>"Availability: "</strong>
                {availability}
            </p>
            <button
                type="button"
                class="view-participants mt-2 px-3 py-1 rounded bg-gray-700 hover:bg-gray-600 text-sm"
                on:click=move |_| on_view.call(target.clone())
            >
                "View Participants"
            </button>
        </div>
    }
}
