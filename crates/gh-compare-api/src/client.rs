// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Authenticated HTTP client for the GitHub REST API
//!
//! Every request carries the GitHub JSON media type, the pinned API version
//! and a bearer token. Non-2xx responses become [`CompareError::Http`]; there
//! are no retries.

use std::fmt;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::CompareError;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type requested from the API
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned by every request
pub const API_VERSION: &str = "2022-11-28";

const API_VERSION_HEADER: &str = "x-github-api-version";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Opaque bearer token
///
/// The token is only ever turned into an `Authorization` header; `Debug`
/// output is redacted so it cannot end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Whether the token is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn header_value(&self) -> Result<HeaderValue, CompareError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|_| CompareError::InvalidCredential)?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Blocking GitHub API client
///
/// Holds the connection pool, default headers and base URL. It is not meant
/// to be shared across threads; create one per invocation.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client for `https://api.github.com`
    ///
    /// # Errors
    ///
    /// Returns `CompareError::InvalidCredential` if the token cannot be used
    /// as a header value, or `CompareError::Transport` if the TLS backend
    /// fails to initialise.
    pub fn new(credential: &Credential) -> Result<Self, CompareError> {
        Self::with_base_url(credential, DEFAULT_API_URL)
    }

    /// Create a client for another API root (GitHub Enterprise, test servers)
    ///
    /// # Errors
    ///
    /// Same as [`GitHubClient::new`].
    pub fn with_base_url(
        credential: &Credential,
        base_url: impl Into<String>,
    ) -> Result<Self, CompareError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );
        headers.insert(AUTHORIZATION, credential.header_value()?);

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// The API root requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body
    ///
    /// Query parameters are only attached when `query` is non-empty.
    ///
    /// # Errors
    ///
    /// - `CompareError::Http` for any non-2xx status, with the response body
    /// - `CompareError::Decode` if the body does not decode into `T`
    /// - `CompareError::Transport` if the request could not be completed
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, u32)],
    ) -> Result<T, CompareError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Request failed");
            return Err(CompareError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("ghp_supersecret");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_credential_is_blank() {
        assert!(Credential::new("").is_blank());
        assert!(Credential::new("  \t").is_blank());
        assert!(!Credential::new("ghp_x").is_blank());
    }

    #[test]
    fn test_credential_header_is_sensitive() {
        let value = Credential::new("token").header_value().expect("header");
        assert!(value.is_sensitive());
        assert_eq!(value.to_str().expect("ascii"), "Bearer token");
    }

    #[test]
    fn test_credential_with_newline_is_rejected() {
        let result = GitHubClient::new(&Credential::new("bad\ntoken"));
        assert!(matches!(result, Err(CompareError::InvalidCredential)));
    }

    #[test]
    fn test_default_base_url() {
        let client = GitHubClient::new(&Credential::new("token")).expect("client");
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::with_base_url(&Credential::new("token"), "http://127.0.0.1:1/")
            .expect("client");
        assert_eq!(client.base_url(), "http://127.0.0.1:1");
    }

    #[test]
    fn test_client_debug_hides_headers() {
        let client = GitHubClient::new(&Credential::new("ghp_supersecret")).expect("client");
        let debug = format!("{client:?}");
        assert!(debug.contains("api.github.com"));
        assert!(!debug.contains("supersecret"));
    }
}
