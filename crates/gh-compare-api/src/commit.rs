//! Commit records returned by the compare endpoint

use serde::Deserialize;

/// Number of SHA characters shown in rendered output
pub const SHORT_SHA_LEN: usize = 10;

/// A commit as listed in a comparison
///
/// Decoded from one element of the response `commits` array, which nests the
/// message under `commit.message`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireCommit")]
pub struct CommitRecord {
    /// The commit SHA
    pub sha: String,
    /// Full commit message, possibly multi-line
    pub message: String,
}

#[derive(Deserialize)]
struct WireCommit {
    sha: String,
    commit: WireCommitDetails,
}

#[derive(Deserialize)]
struct WireCommitDetails {
    message: String,
}

impl From<WireCommit> for CommitRecord {
    fn from(wire: WireCommit) -> Self {
        Self {
            sha: wire.sha,
            message: wire.commit.message,
        }
    }
}

impl CommitRecord {
    /// Create a record from its parts
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// Get the short SHA (first 10 characters)
    ///
    /// Shorter SHAs are returned whole; they are never padded.
    #[must_use]
    pub fn short_sha(&self) -> &str {
        match self.sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &self.sha[..end],
            None => &self.sha,
        }
    }

    /// Get the first line of the commit message (subject)
    ///
    /// Any line break character ends the subject, including a lone `\r`.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.split(is_line_break).next().unwrap_or("")
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
