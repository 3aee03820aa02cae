//! HTTP client for the remote catalog API.

mod attributes;
mod products;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use catadmin_core::AppConfig;

use crate::error::ClientError;

/// HTTP client for the catalog API's `/api/attributes` and `/api/products`
/// endpoints.
///
/// A 401 maps to [`ClientError::Unauthorized`]; any other non-2xx response
/// maps to [`ClientError::Api`] carrying the server's `message` when it sent
/// one. Requests are not retried.
pub struct CatalogClient {
    pub(super) client: Client,
    /// Base URL with no trailing slash; endpoint paths are appended to it.
    pub(super) base_url: String,
    pub(super) access_token: Option<String>,
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the given timeout and `User-Agent`.
    ///
    /// When `access_token` is set it is sent as a bearer token on every
    /// request.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`ClientError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        access_token: Option<String>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        if access_token.is_none() {
            tracing::warn!(%base_url, "no access token configured; requests may be unauthorized");
        }

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &config.api_url,
            config.access_token.clone(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Builds the full URL for `path` with `query` pairs appended.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if the joined URL does not
    /// parse.
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<String, ClientError> {
        let joined = format!("{}{path}", self.base_url);
        let mut url = reqwest::Url::parse(&joined).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            reason: format!("\"{joined}\" is not a valid URL: {e}"),
        })?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");

        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends `request`, maps error statuses, and returns the raw body.
    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<String, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(error_for_status(response, fallback).await);
        }

        Ok(response.text().await?)
    }

    /// Sends `request` and decodes a successful JSON body as `T`.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let body = self.send(request, fallback).await?;
        serde_json::from_str::<T>(&body).map_err(|e| ClientError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Converts a non-2xx response into a typed error, preferring the server's
/// own `message` over `fallback`.
async fn error_for_status(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    if status == StatusCode::UNAUTHORIZED {
        return ClientError::Unauthorized;
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ApiErrorBody>(&body).ok())
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned());

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
