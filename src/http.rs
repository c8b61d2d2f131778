//! Thin HTTP request layer.
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] pinned to one base URL. Each
//! call is a single attempt with no retry or backoff; a rejected status or a
//! transport failure is terminal for that operation and surfaces to the
//! calling test as a [`RequestError`].

use crate::error::RequestError;
use crate::fixtures::{Credentials, FixtureData};
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use url::Url;

/// Maximum time to establish a TCP connection.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Maximum time for an entire request, connection and transfer included.
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Decides whether a response status is acceptable.
pub type StatusPredicate = fn(StatusCode) -> bool;

/// Default acceptance: any 2xx status.
pub fn accept_success(status: StatusCode) -> bool {
    status.is_success()
}

/// Per-request knobs: optional JSON payload, optional credentials, and the
/// status-acceptance predicate.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub body: Option<serde_json::Value>,
    pub basic_auth: Option<Credentials>,
    pub token: Option<String>,
    pub accept: StatusPredicate,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            body: None,
            basic_auth: None,
            token: None,
            accept: accept_success,
        }
    }
}

impl RequestOptions {
    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn basic_auth(mut self, credentials: Credentials) -> Self {
        self.basic_auth = Some(credentials);
        self
    }

    /// Conduit's `Authorization: Token <jwt>` scheme.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn accept(mut self, predicate: StatusPredicate) -> Self {
        self.accept = predicate;
        self
    }
}

/// HTTP client bound to a fixed base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the given absolute base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidBaseUrl`] if the URL is relative or
    /// malformed.
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        match Url::parse(base_url) {
            Ok(url) if url.has_host() => {}
            Ok(_) => {
                return Err(RequestError::InvalidBaseUrl {
                    url: base_url.to_string(),
                    details: "URL has no host".to_string(),
                });
            }
            Err(err) => {
                return Err(RequestError::InvalidBaseUrl {
                    url: base_url.to_string(),
                    details: err.to_string(),
                });
            }
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .user_agent("conduit-testkit")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client for the fixture's public API host.
    pub fn from_fixtures(data: &FixtureData) -> Result<Self, RequestError> {
        let base_url = data
            .public_api_base_url()
            .ok_or_else(|| RequestError::InvalidBaseUrl {
                url: String::new(),
                details: "fixture data has no public API base URL entry".to_string(),
            })?;
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a relative resource path against the base URL.
    ///
    /// Plain concatenation, not RFC 3986 resolution: a base of
    /// `https://host/api` plus `/users` must yield `https://host/api/users`.
    fn endpoint(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }

    /// Issue one HTTP request and return the raw response.
    ///
    /// # Errors
    ///
    /// [`RequestError::Transport`] for network failures,
    /// [`RequestError::UnexpectedStatus`] when the acceptance predicate
    /// rejects the response status.
    pub async fn request(
        &self,
        method: Method,
        resource: &str,
        options: RequestOptions,
    ) -> Result<Response, RequestError> {
        let url = self.endpoint(resource);
        debug!("{method} {url}");

        let mut builder = self.client.request(method.clone(), url.as_str());
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }
        if let Some(credentials) = &options.basic_auth {
            builder = builder.basic_auth(&credentials.email, Some(&credentials.password));
        }
        if let Some(token) = &options.token {
            builder = builder.header(AUTHORIZATION, format!("Token {token}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        if !(options.accept)(status) {
            return Err(RequestError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                context: format!("{method} {resource}"),
            });
        }

        Ok(response)
    }
}
