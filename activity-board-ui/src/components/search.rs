//! Search Component

use leptos::*;

use crate::state::BoardState;

/// Search input; each keystroke goes to the controller's debounce
#[component]
pub fn SearchBox(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        <input
            id="activity-search"
            type="text"
            placeholder="Search activities..."
            class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2 mb-4"
            prop:value=move || state.search.get()
            on:input=move |ev| {
                let text = event_target_value(&ev);
                state.search.set(text.clone());
                on_search.call(text);
            }
        />
    }
}
