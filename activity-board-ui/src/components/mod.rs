//! UI Components
//!
//! Reusable Leptos components for the activity board.

mod activity_list;
mod loading;
mod message;
mod search;
mod signup_form;

pub use activity_list::ActivityList;
pub use loading::Loading;
pub use message::MessagePanel;
pub use search::SearchBox;
pub use signup_form::SignupPanel;
