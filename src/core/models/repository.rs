//! Repository identifier model
//!
//! A repository is addressed as `owner/name` on the hosting service.
//!
//! # Examples
//!
//! ```
//! use issue_mafia::core::models::RepositoryId;
//!
//! let repo = RepositoryId::parse("octocat/hello-world").unwrap();
//! assert_eq!(repo.owner(), "octocat");
//! assert_eq!(repo.name(), "hello-world");
//!
//! assert!(RepositoryId::parse("octocat").is_err());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Exactly two `[-a-zA-Z0-9_]+` segments joined by a single slash
static REPOSITORY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-a-zA-Z0-9_]+/[-a-zA-Z0-9_]+$").expect("repository pattern compiles")
});

/// Errors raised while validating user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input is not an `owner/name` pair
    #[error("invalid repository address: {0:?}")]
    InvalidRepository(String),

    /// Input is not a single branch path segment
    #[error("invalid branch name: {0:?}")]
    InvalidBranch(String),
}

/// A validated `owner/name` repository identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    raw: String,
    split: usize,
}

impl RepositoryId {
    /// Validate and wrap a repository identifier
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if !Self::is_valid(input) {
            return Err(ParseError::InvalidRepository(input.to_string()));
        }

        // The pattern guarantees exactly one slash
        let split = input.find('/').unwrap_or_default();
        Ok(Self {
            raw: input.to_string(),
            split,
        })
    }

    /// Whether `input` matches the `owner/name` format
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        REPOSITORY_PATTERN.is_match(input)
    }

    /// Owning user or organisation
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.raw[..self.split]
    }

    /// Repository name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    /// The identifier as typed, `owner/name`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
