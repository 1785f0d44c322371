// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gh-compare-api

use thiserror::Error;

/// Errors that can occur while talking to the compare endpoint
#[derive(Debug, Error)]
pub enum CompareError {
    /// The service answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, as returned by the service
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, TLS or protocol failure below the HTTP status level
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The credential cannot be sent as an HTTP header value
    #[error("Credential contains characters not allowed in an HTTP header")]
    InvalidCredential,

    /// A page size of zero was requested
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(u32),

    /// The service stopped returning commits before `total_commits` was reached
    #[error("Comparison ended early: received {seen} of {total} commits")]
    IncompleteComparison {
        /// Commits received so far
        seen: u64,
        /// Total reported by the first page
        total: u64,
    },

    /// Writing rendered output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CompareError {
    /// HTTP status code, if this error came from a non-2xx response
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
