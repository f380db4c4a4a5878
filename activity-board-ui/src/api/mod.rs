//! HTTP API
//!
//! Browser transport for the activities API.

pub mod client;

pub use client::{get_api_base, GlooActivitiesClient};
