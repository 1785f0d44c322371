// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Comparison fetching
//!
//! This module retrieves the commits between two references through the
//! `/repos/{owner}/{repo}/compare/{base}...{head}` endpoint, either as one
//! response or as a lazy, page-by-page sequence of commits.

use std::iter::FusedIterator;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Deserialize;
use tracing::debug;

use crate::client::GitHubClient;
use crate::commit::CommitRecord;
use crate::error::CompareError;

/// Page size used by the service when none is given
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Largest page size the service accepts
pub const MAX_PAGE_SIZE: u32 = 100;

/// Characters escaped inside a path segment
///
/// `/` is left alone so `feature/x` style references reach the endpoint as
/// typed.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Relationship of head to base, as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareStatus {
    /// Head contains commits not in base
    Ahead,
    /// Base contains commits not in head
    Behind,
    /// Both sides have commits the other lacks
    Diverged,
    /// Both references point at the same commit
    Identical,
}

/// One response from the compare endpoint
///
/// In paginated mode this is a single page; otherwise it is the whole
/// payload, which the service may truncate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompareResult {
    /// Number of commits in the full comparison
    pub total_commits: u64,
    /// Commits in this response, in service order
    pub commits: Vec<CommitRecord>,
    /// Relationship between head and base
    pub status: Option<CompareStatus>,
    /// Commits on head not on base
    pub ahead_by: Option<u64>,
    /// Commits on base not on head
    pub behind_by: Option<u64>,
    /// Web page for the comparison
    pub html_url: Option<String>,
}

/// What to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    /// Owning organization or user
    pub organization: String,
    /// Repository name
    pub repository: String,
    /// Base reference (branch, tag or SHA)
    pub base: String,
    /// Head reference (branch, tag or SHA)
    pub head: String,
}

impl CompareRequest {
    /// Create a request
    pub fn new(
        organization: impl Into<String>,
        repository: impl Into<String>,
        base: impl Into<String>,
        head: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            repository: repository.into(),
            base: base.into(),
            head: head.into(),
        }
    }

    /// Endpoint path, relative to the API root
    ///
    /// Each component is percent-encoded, so references such as `fix#42`
    /// are sent whole instead of being cut at the fragment marker.
    #[must_use]
    pub fn path(&self) -> String {
        format!(
            "/repos/{}/{}/compare/{}...{}",
            utf8_percent_encode(&self.organization, PATH_SEGMENT),
            utf8_percent_encode(&self.repository, PATH_SEGMENT),
            utf8_percent_encode(&self.base, PATH_SEGMENT),
            utf8_percent_encode(&self.head, PATH_SEGMENT),
        )
    }
}

/// A GitHub repository to run comparisons against
#[derive(Debug)]
pub struct Repository<'c> {
    client: &'c GitHubClient,
    organization: String,
    repository: String,
}

impl<'c> Repository<'c> {
    /// Bind a repository to a client
    pub fn new(
        client: &'c GitHubClient,
        organization: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            client,
            organization: organization.into(),
            repository: repository.into(),
        }
    }

    /// Owning organization or user
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Repository name
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Build the request for `base...head` on this repository
    #[must_use]
    pub fn request(&self, base: &str, head: &str) -> CompareRequest {
        CompareRequest::new(&self.organization, &self.repository, base, head)
    }

    /// Fetch the comparison with a single request
    ///
    /// No pagination parameters are sent, so the service decides how many
    /// commits to include.
    ///
    /// # Errors
    ///
    /// - `CompareError::Http` for a non-2xx status (e.g. unknown references)
    /// - `CompareError::Decode` if the body is not a compare payload
    /// - `CompareError::Transport` if the request could not be completed
    pub fn fetch_all(&self, base: &str, head: &str) -> Result<CompareResult, CompareError> {
        let request = self.request(base, head);
        let result: CompareResult = self.client.get_json(&request.path(), &[])?;
        debug!(
            total = result.total_commits,
            received = result.commits.len(),
            status = ?result.status,
            "Fetched comparison"
        );
        Ok(result)
    }

    /// Lazily fetch every commit of the comparison, `page_size` at a time
    ///
    /// No request is made until the first item is pulled. Iteration ends once
    /// the number of commits received reaches the `total_commits` reported by
    /// the first page. A failed page yields one `Err` and ends iteration.
    #[must_use]
    pub fn fetch_paginated(&self, base: &str, head: &str, page_size: u32) -> CompareCommits<'c> {
        CompareCommits::new(self.client, self.request(base, head), page_size)
    }
}

/// Lazy sequence of the commits in a comparison
///
/// Created by [`Repository::fetch_paginated`].
#[derive(Debug)]
pub struct CompareCommits<'c> {
    client: &'c GitHubClient,
    request: CompareRequest,
    page_size: u32,
    next_page: u32,
    seen: u64,
    total: Option<u64>,
    buffered: std::vec::IntoIter<CommitRecord>,
    finished: bool,
}

impl<'c> CompareCommits<'c> {
    fn new(client: &'c GitHubClient, request: CompareRequest, page_size: u32) -> Self {
        Self {
            client,
            request,
            page_size,
            next_page: 1,
            seen: 0,
            total: None,
            buffered: Vec::new().into_iter(),
            finished: false,
        }
    }

    /// Total reported by the first page, once it has been fetched
    #[must_use]
    pub fn total_commits(&self) -> Option<u64> {
        self.total
    }

    /// Number of pages received so far
    #[must_use]
    pub fn pages_fetched(&self) -> u32 {
        self.next_page - 1
    }

    fn fetch_next_page(&mut self) -> Result<(), CompareError> {
        if self.page_size == 0 {
            return Err(CompareError::InvalidPageSize(self.page_size));
        }

        let query = [("page", self.next_page), ("per_page", self.page_size)];
        let page: CompareResult = self.client.get_json(&self.request.path(), &query)?;

        let total = *self.total.get_or_insert(page.total_commits);
        let received = page.commits.len() as u64;
        debug!(
            page = self.next_page,
            per_page = self.page_size,
            received,
            seen = self.seen,
            total,
            "Fetched compare page"
        );

        if received == 0 && self.seen < total {
            return Err(CompareError::IncompleteComparison {
                seen: self.seen,
                total,
            });
        }

        self.seen += received;
        self.next_page += 1;
        if self.seen >= total {
            self.finished = true;
        }
        self.buffered = page.commits.into_iter();
        Ok(())
    }
}

impl Iterator for CompareCommits<'_> {
    type Item = Result<CommitRecord, CompareError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(commit) = self.buffered.next() {
                return Some(Ok(commit));
            }
            if self.finished {
                return None;
            }
            if let Err(err) = self.fetch_next_page() {
                self.finished = true;
                return Some(Err(err));
            }
        }
    }
}

impl FusedIterator for CompareCommits<'_> {}
