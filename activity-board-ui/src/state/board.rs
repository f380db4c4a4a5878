//! Board State
//!
//! Reactive state using Leptos signals. The controller writes it through
//! [`LeptosSurface`]; components only read it (plus the form fields they own).

use activity_board::view::{LOAD_FAILED_TEXT, NO_RESULTS_TEXT};
use activity_board::{ActivityCard, BoardRender, Message, ParticipantsPanel, SelectOption, Surface};
use leptos::*;

/// What the activity list area shows
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    Loading,
    Cards(Vec<ActivityCard>),
    Placeholder(&'static str),
}

/// What the message area shows
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    Message(Message),
    Participants(ParticipantsPanel),
}

/// Board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Activity cards or a placeholder
    pub listing: RwSignal<Listing>,
    /// Options for the activity select (full activities excluded)
    pub options: RwSignal<Vec<SelectOption>>,
    /// Message area content; `None` is hidden
    pub notice: RwSignal<Option<Notice>>,
    /// Submit button disabled while a signup is in flight
    pub submitting: RwSignal<bool>,
    pub email: RwSignal<String>,
    pub activity: RwSignal<String>,
    pub search: RwSignal<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            listing: create_rw_signal(Listing::Loading),
            options: create_rw_signal(Vec::new()),
            notice: create_rw_signal(None),
            submitting: create_rw_signal(false),
            email: create_rw_signal(String::new()),
            activity: create_rw_signal(String::new()),
            search: create_rw_signal(String::new()),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide board state to the component tree
pub fn provide_board_state() -> BoardState {
    let state = BoardState::new();
    provide_context(state);
    state
}

/// Surface that draws by setting signals
pub struct LeptosSurface {
    state: BoardState,
}

impl LeptosSurface {
    pub fn new(state: BoardState) -> Self {
        Self { state }
    }

    /// Replace the select options, dropping a selection that is no longer
    /// offered. The browser shows the placeholder in that case without
    /// firing `change`, so the signal has to follow.
    fn set_options(&self, options: Vec<SelectOption>) {
        let selected = self.state.activity.get_untracked();
        if !selected.is_empty() && !options.iter().any(|o| o.value == selected) {
            self.state.activity.set(String::new());
        }
        self.state.options.set(options);
    }
}

impl Surface for LeptosSurface {
    fn show_board(&self, board: &BoardRender) {
        match board {
            BoardRender::Cards { cards, options } => {
                self.state.listing.set(Listing::Cards(cards.clone()));
                self.set_options(options.clone());
            }
            BoardRender::NoResults => {
                self.state.listing.set(Listing::Placeholder(NO_RESULTS_TEXT));
                self.set_options(Vec::new());
            }
            BoardRender::Failed => {
                self.state.listing.set(Listing::Placeholder(LOAD_FAILED_TEXT));
            }
        }
    }

    fn show_participants(&self, panel: &ParticipantsPanel) {
        self.state.notice.set(Some(Notice::Participants(panel.clone())));
    }

    fn show_message(&self, message: &Message) {
        self.state.notice.set(Some(Notice::Message(message.clone())));
    }

    fn hide_message(&self) {
        self.state.notice.set(None);
    }

    fn set_submitting(&self, submitting: bool) {
        self.state.submitting.set(submitting);
    }

    fn reset_form(&self) {
        self.state.email.set(String::new());
        self.state.activity.set(String::new());
    }
}
