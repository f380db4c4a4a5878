//! State Management
//!
//! Reactive board state and the browser implementations of the
//! controller's surface and scheduler.

pub mod board;
pub mod scheduler;

pub use board::{provide_board_state, BoardState, LeptosSurface, Listing, Notice};
pub use scheduler::GlooScheduler;
