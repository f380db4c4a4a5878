//! Activities API
//!
//! Client side of the activities REST API.
//!
//! # Endpoints
//!
//! - `GET /activities[?search=...]` - Activity name to activity mapping
//! - `GET /activities/{name}/participants` - Participant detail
//! - `POST /activities/{name}/signup?email=...` - Sign up, `{message}` or `{detail}`
//! - `DELETE /activities/{name}/signup?email=...` - Unregister, `{message}` or `{detail}`
//!
//! The transport is behind [`ActivitiesApi`] so the same controller runs
//! over reqwest natively and over `fetch` in the browser.

pub mod routes;

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpActivitiesClient;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{BoardError, BoardResult};
use crate::models::{ActivityMap, ParticipantsView, SignupReceipt};

/// Operations the board needs from the server
#[async_trait(?Send)]
pub trait ActivitiesApi {
    /// Fetch all activities, filtered server-side when `search` is non-empty
    async fn list_activities(&self, search: Option<&str>) -> BoardResult<ActivityMap>;

    /// Fetch participant detail for one activity
    async fn participants(&self, activity: &str) -> BoardResult<ParticipantsView>;

    /// Sign a student up for an activity
    async fn signup(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt>;

    /// Remove a student from an activity
    async fn unregister(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt>;
}

/// Error body returned by the server on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Turn a status code and body into a typed result.
///
/// Non-2xx responses are failures even when the body is valid JSON; the
/// `detail` field is kept only when it is a plain string.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> BoardResult<T> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_string));

    Err(BoardError::Status { status, detail })
}
