// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gh-compare-api: GitHub compare API client for gh-compare
//!
//! This library crate lists the commits between two references of a GitHub
//! repository, paging through the REST compare endpoint on demand.
//!
//! # Example
//!
//! ```no_run
//! use gh_compare_api::{Credential, GitHubClient, Repository};
//!
//! let client = GitHubClient::new(&Credential::new("ghp_...")).expect("client");
//! let repo = Repository::new(&client, "rust-lang", "rust");
//!
//! for commit in repo.fetch_paginated("1.80.0", "1.81.0", 100) {
//!     let commit = commit.expect("fetch page");
//!     println!("{} {}", commit.short_sha(), commit.subject());
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod commit;
pub mod compare;
pub mod error;
pub mod render;

pub use client::{Credential, GitHubClient};
pub use commit::CommitRecord;
pub use compare::{CompareCommits, CompareRequest, CompareResult, CompareStatus, Repository};
pub use error::CompareError;
pub use render::{PrintSummary, RenderOptions, render, render_line};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::{Credential, GitHubClient};
    pub use crate::commit::CommitRecord;
    pub use crate::compare::{CompareResult, Repository};
    pub use crate::error::CompareError;
    pub use crate::render::RenderOptions;
}
