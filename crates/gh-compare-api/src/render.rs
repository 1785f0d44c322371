// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Rendering commits as `<short sha>\t<message>` lines
//!
//! The `print_*` entry points on [`Repository`] never fail: any error while
//! fetching or writing is reported as a single `ERROR` event and the caller
//! gets a [`PrintSummary`] back instead of the error itself.

use std::io::Write;

use tracing::{debug, error};

use crate::commit::CommitRecord;
use crate::compare::{DEFAULT_PAGE_SIZE, Repository};
use crate::error::CompareError;

/// Message logged when a print entry point fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to get compare commit(s)";

/// Options for the print entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print only the first line of each message
    pub oneline: bool,
    /// Commits requested per page
    pub page_size: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            oneline: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Outcome of a print entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrintSummary {
    /// Lines written before completion or failure
    pub printed: usize,
    /// Whether an error was logged
    pub failed: bool,
}

/// Render one commit
#[must_use]
pub fn render_line(commit: &CommitRecord, oneline: bool) -> String {
    let message = if oneline {
        commit.subject()
    } else {
        commit.message.as_str()
    };
    format!("{}\t{}", commit.short_sha(), message)
}

/// Render each commit, in order
#[must_use]
pub fn render<'a, I>(commits: I, oneline: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a CommitRecord>,
{
    commits
        .into_iter()
        .map(|commit| render_line(commit, oneline))
        .collect()
}

fn write_commits<W, I>(
    out: &mut W,
    commits: I,
    oneline: bool,
    printed: &mut usize,
) -> Result<(), CompareError>
where
    W: Write,
    I: IntoIterator<Item = Result<CommitRecord, CompareError>>,
{
    for commit in commits {
        writeln!(out, "{}", render_line(&commit?, oneline))?;
        *printed += 1;
    }
    out.flush()?;
    Ok(())
}

fn summarize(outcome: Result<(), CompareError>, printed: usize) -> PrintSummary {
    match outcome {
        Ok(()) => PrintSummary {
            printed,
            failed: false,
        },
        Err(err) => {
            debug!(error = %err, printed, "Comparison aborted");
            error!("{FETCH_FAILED_MESSAGE}");
            PrintSummary {
                printed,
                failed: true,
            }
        }
    }
}

impl Repository<'_> {
    /// Write every commit of `base...head` to `out`, fetching page by page
    ///
    /// Lines are written as soon as their page arrives. Failures are logged
    /// once at error level and never returned.
    pub fn print_compare_commits<W: Write>(
        &self,
        out: &mut W,
        base: &str,
        head: &str,
        options: &RenderOptions,
    ) -> PrintSummary {
        let mut printed = 0;
        let commits = self.fetch_paginated(base, head, options.page_size);
        let outcome = write_commits(out, commits, options.oneline, &mut printed);
        summarize(outcome, printed)
    }

    /// Write the commits of a single-request comparison to `out`
    ///
    /// Same contract as [`Repository::print_compare_commits`], but uses
    /// [`Repository::fetch_all`], so the service may truncate the list.
    /// `options.page_size` is ignored.
    pub fn print_compare<W: Write>(
        &self,
        out: &mut W,
        base: &str,
        head: &str,
        options: &RenderOptions,
    ) -> PrintSummary {
        let mut printed = 0;
        let outcome = self.fetch_all(base, head).and_then(|result| {
            let commits = result.commits.into_iter().map(Ok);
            write_commits(out, commits, options.oneline, &mut printed)
        });
        summarize(outcome, printed)
    }
}
