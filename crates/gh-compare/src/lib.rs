//! gh-compare library
//!
//! This module exports the command-line configuration and the run loop for
//! use in integration tests and by the `gh-compare` binary.

use std::io::Write;

use anyhow::Context;
use gh_compare_api::{GitHubClient, PrintSummary, Repository};
use tracing::{debug, info};

pub mod config;

use config::Config;

/// Run one comparison and write the listing to `out`
///
/// The credential is checked before any client is built, so a missing
/// `GH_TOKEN` never reaches the network. Fetch failures are not errors here:
/// they are logged by the print entry points and reported through the
/// returned [`PrintSummary`].
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the credential is
/// missing, or the HTTP client cannot be created.
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<PrintSummary> {
    config.validate()?;
    let credential = config.credential()?;

    let client = GitHubClient::with_base_url(&credential, &config.api_url)
        .context("Failed to create GitHub client")?;
    let repo = Repository::new(&client, &config.organization, &config.repository);

    info!(
        organization = %config.organization,
        repository = %config.repository,
        base = %config.base,
        head = %config.head,
        "Comparing"
    );

    let options = config.render_options();
    let summary = if config.no_paginate {
        repo.print_compare(out, &config.base, &config.head, &options)
    } else {
        repo.print_compare_commits(out, &config.base, &config.head, &options)
    };

    debug!(printed = summary.printed, failed = summary.failed, "Done");
    Ok(summary)
}
