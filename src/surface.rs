//! Display surface
//!
//! The controller never touches a DOM or a terminal directly; it hands view
//! models to a [`Surface`]. The browser front-end implements it with Leptos
//! signals, the CLI with [`crate::terminal::TerminalSurface`].

use crate::view::{BoardRender, Message, ParticipantsPanel};

/// Where the board is drawn
pub trait Surface {
    /// Replace the activity list.
    ///
    /// `Cards` also replaces the select options, `NoResults` empties them,
    /// `Failed` leaves them as they were.
    fn show_board(&self, board: &BoardRender);

    /// Show the participants panel in the message area
    fn show_participants(&self, panel: &ParticipantsPanel);

    /// Show a status message in the message area
    fn show_message(&self, message: &Message);

    /// Hide the message area
    fn hide_message(&self);

    /// Disable (`true`) or re-enable the submit control
    fn set_submitting(&self, submitting: bool);

    /// Clear the signup form fields
    fn reset_form(&self);
}
