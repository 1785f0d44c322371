//! Configuration for the gh-compare command line
//!
//! This module provides the clap argument definitions, startup validation
//! (including the mandatory `GH_TOKEN` credential) and logging options.

use std::fmt;

use clap::Parser;
use gh_compare_api::client::DEFAULT_API_URL;
use gh_compare_api::compare::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use gh_compare_api::{Credential, RenderOptions};

/// Environment variable holding the bearer token
pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";

/// Shown when the token is missing and in `--help`
pub const TOKEN_REQUIRED_MESSAGE: &str =
    "Set environment variable $GH_TOKEN with GitHub Personal Access Token for authentication";

/// List the commits between two references of a GitHub repository
#[derive(Parser, Clone)]
#[command(name = "gh-compare")]
#[command(version, about, long_about = None, after_help = TOKEN_REQUIRED_MESSAGE)]
pub struct Config {
    /// GitHub organization (or user) owning the repository
    pub organization: String,

    /// Repository name
    pub repository: String,

    /// Base commit, branch or tag
    pub base: String,

    /// Head commit, branch or tag
    pub head: String,

    /// GitHub personal access token
    ///
    /// Normally supplied through the environment rather than on the command
    /// line, where it would be visible in the process list.
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API root
    ///
    /// Override for GitHub Enterprise Server, e.g. https://ghe.example.com/api/v3
    #[arg(long, env = "GH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Commits requested per page (1-100)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE))
    )]
    pub per_page: u32,

    /// Print complete commit messages instead of their first line
    #[arg(long, default_value = "false")]
    pub full_message: bool,

    /// Fetch the comparison in a single request
    ///
    /// The service may then list fewer commits than the comparison contains.
    #[arg(long, default_value = "false")]
    pub no_paginate: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs each page request. Logs are written to stderr so they never mix
    /// with the commit listing on stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: String::new(),
            repository: String::new(),
            base: String::new(),
            head: String::new(),
            token: None,
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PAGE_SIZE,
            full_message: false,
            no_paginate: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("organization", &self.organization)
            .field("repository", &self.repository)
            .field("base", &self.base)
            .field("head", &self.head)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("per_page", &self.per_page)
            .field("full_message", &self.full_message)
            .field("no_paginate", &self.no_paginate)
            .field("verbose", &self.verbose)
            .field("quiet", &self.quiet)
            .finish()
    }
}

impl Config {
    /// Resolve the bearer credential
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if no token was given or it
    /// is blank.
    pub fn credential(&self) -> Result<Credential, ConfigError> {
        self.token
            .as_deref()
            .map(Credential::new)
            .filter(|credential| !credential.is_blank())
            .ok_or(ConfigError::MissingCredential { var: TOKEN_ENV_VAR })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A positional argument is empty
    /// - The API URL is not an http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("organization", &self.organization),
            ("repository", &self.repository),
            ("base", &self.base),
            ("head", &self.head),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyArgument(name));
            }
        }

        let scheme_ok = ["https://", "http://"]
            .iter()
            .any(|scheme| self.api_url.starts_with(scheme) && self.api_url.len() > scheme.len());
        if !scheme_ok {
            return Err(ConfigError::InvalidApiUrl(self.api_url.clone()));
        }

        Ok(())
    }

    /// Rendering options derived from the flags
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            oneline: !self.full_message,
            page_size: self.per_page,
        }
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Bearer token not provided
    #[error("Set environment variable ${var} with GitHub Personal Access Token for authentication")]
    MissingCredential {
        /// Environment variable that should hold the token
        var: &'static str,
    },

    /// A required argument was given as an empty string
    #[error("Argument <{0}> must not be empty")]
    EmptyArgument(&'static str),

    /// API root is not an http(s) URL
    #[error("Invalid API URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),
}
