//! Native HTTP client
//!
//! reqwest implementation of [`ActivitiesApi`]. No request timeout is set;
//! the platform default applies.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{decode_response, routes, ActivitiesApi};
use crate::config::ApiConfig;
use crate::error::{BoardError, BoardResult};
use crate::models::{ActivityMap, ParticipantsView, SignupReceipt};

/// Activities API client over reqwest
#[derive(Debug, Clone)]
pub struct HttpActivitiesClient {
    client: Client,
    base_url: String,
}

impl HttpActivitiesClient {
    /// Create a client for the configured server
    pub fn new(config: &ApiConfig) -> BoardResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BoardError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: routes::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn transport_error(err: reqwest::Error) -> BoardError {
    if err.is_connect() {
        BoardError::Network(format!("cannot connect: {}", err))
    } else {
        BoardError::Network(err.to_string())
    }
}

async fn read<T: DeserializeOwned>(response: Response) -> BoardResult<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;
    decode_response(status, &body)
}

#[async_trait(?Send)]
impl ActivitiesApi for HttpActivitiesClient {
    async fn list_activities(&self, search: Option<&str>) -> BoardResult<ActivityMap> {
        let url = routes::activities_url(&self.base_url, search);
        tracing::debug!(url = %url, "Fetching activities");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        read(response).await
    }

    async fn participants(&self, activity: &str) -> BoardResult<ParticipantsView> {
        let url = routes::participants_url(&self.base_url, activity);
        tracing::debug!(url = %url, "Fetching participants");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        read(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        let url = routes::signup_url(&self.base_url, activity, email);
        tracing::debug!(activity = %activity, "Submitting signup");

        let response = self.client.post(&url).send().await.map_err(transport_error)?;
        read(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> BoardResult<SignupReceipt> {
        let url = routes::signup_url(&self.base_url, activity, email);
        tracing::debug!(activity = %activity, "Submitting unregister");

        let response = self.client.delete(&url).send().await.map_err(transport_error)?;
        read(response).await
    }
}
