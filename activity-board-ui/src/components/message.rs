//! Message Component
//!
//! Shows either a status message or the participants panel.

use activity_board::ParticipantsPanel;
use leptos::*;

use crate::state::{BoardState, Notice};

/// Message area; hidden while there is nothing to show
#[component]
pub fn MessagePanel() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        {move || state.notice.get().map(|notice| match notice {
            Notice::Message(message) => view! {
                <div id="message" class=format!("message {}", message.kind.css_class())>
                    {message.text}
                </div>
            }.into_view(),
            Notice::Participants(panel) => view! {
                <div id="message" class="message info">
                    <ParticipantsView panel=panel />
                </div>
            }.into_view(),
        })}
    }
}

#[component]
fn ParticipantsView(panel: ParticipantsPanel) -> impl IntoView {
    view! {
        <h4 class="font-semibold">{panel.header}</h4>
        <p class="text-sm">{panel.count_line}</p>
        <ul class="participants-list list-disc pl-5">
            {panel
                .entries
                .into_iter()
                .map(|entry| view! { <li>{entry}</li> })
                .collect_view()}
        </ul>
    }
}
