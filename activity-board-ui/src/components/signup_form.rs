//! Signup Form Component
//!
//! Email input, activity select and submit button.

use activity_board::view::SELECT_PLACEHOLDER_TEXT;
use activity_board::SignupForm;
use leptos::*;

use crate::state::BoardState;

/// Signup form; submission is handed to the controller
#[component]
pub fn SignupPanel(#[prop(into)] on_submit: Callback<SignupForm>) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(SignupForm::new(
            state.activity.get_untracked(),
            state.email.get_untracked(),
        ));
    };

    view! {
        <form id="signup-form" on:submit=submit class="space-y-4">
            <div>
                <label for="email" class="block text-sm mb-1">"Student Email:"</label>
                <input
                    id="email"
                    type="email"
                    required
                    placeholder="your-email@mergington.edu"
                    class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>

            <div>
                <label for="activity" class="block text-sm mb-1">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-2"
                    prop:value=move || state.activity.get()
                    on:change=move |ev| state.activity.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER_TEXT}</option>
                    {move || state
                        .options
                        .get()
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect_view()}
                </select>
            </div>

            <button
                type="submit"
                disabled=move || state.submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold"
            >
                {move || if state.submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
