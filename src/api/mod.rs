//! Client for the external dashboard REST API.
//!
//! Each endpoint group lives in its own file; the shared request plumbing
//! (base URL, bearer token, status handling) is here.

pub mod analytics;
pub mod employees;
pub mod goals;
pub mod labels;

pub use labels::BulkOutcome;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}: {body}")]
    Status {
        status: StatusCode,
        path: String,
        body: String,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Envelope used by list endpoints: `{ "data": [...] }`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(path, "GET");
        let resp = self.request(self.http.get(self.url(path))).send().await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        debug!(path, "POST");
        let resp = self
            .request(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(resp, path).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        debug!(path, "PUT");
        let resp = self
            .request(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(resp, path).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        debug!(path, "DELETE");
        let resp = self.request(self.http.delete(self.url(path))).send().await?;
        Self::check(resp, path).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> ApiResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
                body,
            });
        }
        Ok(resp.json().await?)
    }

    async fn check(resp: Response, path: &str) -> ApiResult<()> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status,
                path: path.to_string(),
                body,
            });
        }
        Ok(())
    }
}
