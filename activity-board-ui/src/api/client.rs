//! HTTP API Client
//!
//! `fetch`-based implementation of the board's API trait.

use activity_board::api::{decode_response, routes, ActivitiesApi};
use activity_board::{ActivityMap, BoardError, BoardResult, ParticipantsView, SignupReceipt};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Local storage key overriding the API location
const API_URL_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage, or same origin when unset
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage.get_item(API_URL_KEY).ok().flatten().unwrap_or_default()
        } else {
            String::new()
        }
    } else {
        String::new()
    };
    routes::normalize_base(&url)
}

/// Activities API client over gloo-net
#[derive(Debug, Clone)]
pub struct GlooActivitiesClient {
    base_url: String,
}

impl GlooActivitiesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

fn network_error(err: gloo_net::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

async fn read<T: DeserializeOwned>(response: Response) -> BoardResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    decode_response(status, &body)
}

#[async_trait(?Send)]
impl ActivitiesApi for GlooActivitiesClient {
    async fn list_activities(&self, search: Option<&str>) -> BoardResult<ActivityMap> {
        let url = routes::activities_url(&self.base_url, search);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read(response).await
    }

    async fn participants(&self, activity: &str) -> BoardResult<ParticipantsView> {
        let url = routes::participants_url(&self.base_url, activity);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        let url = routes::signup_url(&self.base_url, activity, email);
        let response = Request::post(&url).send().await.map_err(network_error)?;
        read(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        let url = routes::signup_url(&self.base_url, activity, email);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        read(response).await
    }
}
