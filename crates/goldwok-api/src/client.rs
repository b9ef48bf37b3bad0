//! # HTTP Client
//!
//! Thin reqwest wrapper shared by the catalog, menu, and order modules.
//! Appends the restaurant scope parameter to every request and maps HTTP
//! status codes to [`ApiError`] variants.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Client for the remote storefront API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client for the given configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(ApiClient {
            http,
            config,
            token: None,
        })
    }

    /// Builds a client from environment configuration.
    pub fn from_env() -> ApiResult<Self> {
        ApiClient::new(ApiConfig::from_env())
    }

    /// Attaches a bearer token for authenticated endpoints (order history,
    /// profile). Catalog reads work without one.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The configured restaurant slug.
    pub fn restaurant(&self) -> &str {
        &self.config.restaurant
    }

    /// Full URL for `path`, with the restaurant scope parameter appended.
    fn endpoint_url(&self, path: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}restaurant={}",
            self.config.base_url, path, separator, self.config.restaurant
        )
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.endpoint_url(path);
        debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        Self::decode(request.send().await?).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.endpoint_url(path);
        debug!(%url, "POST");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        Self::decode(request.send().await?).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::NOT_FOUND => {
                let message = Self::error_message(response).await;
                Err(ApiError::NotFound(message))
            }
            status if !status.is_success() => {
                let message = Self::error_message(response).await;
                Err(ApiError::Server {
                    status: status.as_u16(),
                    message,
                })
            }
            _ => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|err| ApiError::InvalidResponse(err.to_string()))
            }
        }
    }

    /// Best-effort error message: the server's `message` field when the
    /// body is JSON, otherwise the raw text.
    async fn error_message(response: reqwest::Response) -> String {
        let fallback = response.status().to_string();
        match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| value.get("message").and_then(|m| m.as_str().map(String::from)))
                .unwrap_or(if body.is_empty() { fallback } else { body }),
            Err(_) => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_appends_restaurant() {
        let client = ApiClient::new(ApiConfig::new(
            "http://localhost:5000/api",
            "goldenchopsticks",
        ))
        .unwrap();

        assert_eq!(
            client.endpoint_url("/combos"),
            "http://localhost:5000/api/combos?restaurant=goldenchopsticks"
        );
        // Paths that already carry a query keep it.
        assert_eq!(
            client.endpoint_url("/orders/admin?status=pending"),
            "http://localhost:5000/api/orders/admin?status=pending&restaurant=goldenchopsticks"
        );
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_http_error() {
        // Port 9 (discard) has no listener; the request fails at the
        // transport layer before any status mapping.
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9", "goldenchopsticks"))
            .unwrap();

        let result: ApiResult<serde_json::Value> = client.get("/combos").await;
        assert!(matches!(result, Err(ApiError::Http(_))));
    }
}
