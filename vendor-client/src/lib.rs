//! # Vendor Client SDK
//!
//! A typed Rust client for the vendor panel API: seller auth, registration,
//! support messaging and presigned document uploads.

mod auth;
mod sellers;
mod support;
mod uploads;

pub use uploads::UploadFile;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use vendor_types::DomainError;

/// Header carrying the storefront publishable key.
pub const PUBLISHABLE_KEY_HEADER: &str = "x-publishable-api-key";

/// Upper bound for a whole request, upload included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Upload failed: {status} {body}")]
    Upload { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Authentication requires a redirect to {0}")]
    UnexpectedRedirect(String),

    #[error("Invalid upload method: {0}")]
    InvalidMethod(String),
}

/// Vendor panel API client.
pub struct VendorClient {
    base_url: String,
    publishable_key: Option<String>,
    token: Option<String>,
    http: Client,
}

impl VendorClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            publishable_key: None,
            token: None,
            http: build_http(DEFAULT_TIMEOUT),
        }
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Sets the publishable key sent with every request.
    pub fn with_publishable_key(mut self, key: impl Into<String>) -> Self {
        self.publishable_key = Some(key.into());
        self
    }

    /// Sets the bearer token of an existing session.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the bearer token currently held, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a request with the publishable key and, when `authed`, the
    /// session token.
    fn request(&self, method: Method, path: &str, authed: bool) -> RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(key) = &self.publishable_key {
            req = req.header(PUBLISHABLE_KEY_HEADER, key);
        }
        if authed && let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self.request(Method::GET, path, true).send().await?;
        let body = Self::check(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .request(Method::POST, path, true)
            .json(body)
            .send()
            .await?;
        let body = Self::check(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Like `post`, ignoring the response body.
    async fn post_unit<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let resp = self
            .request(Method::POST, path, true)
            .json(body)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Returns the body of a successful response, or the API error.
    async fn check(resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("message")
                        .or_else(|| v.get("error"))
                        .and_then(|e| e.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| {
                    if body.is_empty() {
                        status.canonical_reason().unwrap_or_default().to_string()
                    } else {
                        body
                    }
                });
            tracing::debug!(status = status.as_u16(), %message, "API request failed");
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn build_http(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not build HTTP client with timeout");
        Client::new()
    })
}
