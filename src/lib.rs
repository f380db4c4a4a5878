//! # Activity Board
//!
//! Client for a school's extracurricular-activity signup service: list and
//! search activities, view who signed up, and sign up or unregister.
//!
//! ## Modules
//!
//! - [`api`]: The three-plus-one REST endpoints and their native client
//! - [`controller`]: Page-session controller driving loads, signups and timers
//! - [`view`]: View models built from API data (text only, never markup)
//! - [`surface`]: The trait front-ends implement to draw view models
//! - [`timer`]: Replaceable deferred tasks for debounce and auto-hide
//! - [`config`]: TOML and environment configuration
//!
//! The browser front-end lives in the `activity-board-ui` package and drives
//! the same [`BoardController`] through Leptos signals.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_board::*;
//! use std::rc::Rc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpActivitiesClient::new(&config.api)?;
//!     let surface = TerminalSurface::new(std::io::stdout());
//!     let board = Rc::new(BoardController::new(api, surface, TokioScheduler, config.ui));
//!
//!     tokio::task::LocalSet::new()
//!         .run_until(async move {
//!             board.start().await;
//!             board
//!                 .submit_signup(&SignupForm::new("Chess Club", "emma@mergington.edu"))
//!                 .await;
//!         })
//!         .await;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod surface;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
pub mod timer;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use api::{decode_response, ActivitiesApi};
#[cfg(not(target_arch = "wasm32"))]
pub use api::HttpActivitiesClient;

pub use config::{generate_default_config, ApiConfig, Config, LoggingConfig, UiConfig};
#[cfg(not(target_arch = "wasm32"))]
pub use config::ConfigError;

pub use controller::{BoardController, SignupOutcome};
pub use error::{BoardError, BoardResult};
pub use models::{Activity, ActivityMap, ParticipantsView, SignupReceipt};
pub use surface::Surface;
#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalSurface;
pub use timer::{Scheduler, TimerHandle, TimerSlot};
#[cfg(not(target_arch = "wasm32"))]
pub use timer::TokioScheduler;
pub use validation::{validate_signup, SignupForm, ValidSignup, ValidationError};
pub use view::{
    render_board, render_participants, ActivityCard, BoardRender, Message, MessageKind,
    ParticipantsPanel, SelectOption,
};
