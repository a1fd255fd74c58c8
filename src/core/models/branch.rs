//! Branch name model
//!
//! Hooks are fetched from a single branch of the remote repository.
//! Only one path segment is accepted, so `feature/x` style names are rejected.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ParseError;

/// Branch used when the user leaves the prompt empty
pub const DEFAULT_BRANCH: &str = "main";

static BRANCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("branch pattern compiles"));

/// A validated branch name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a branch name typed by the user
    ///
    /// Empty input selects [`DEFAULT_BRANCH`].
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Ok(Self::default());
        }
        if !Self::is_valid(input) {
            return Err(ParseError::InvalidBranch(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    /// Whether `input` is a non-empty single-segment branch name
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        BRANCH_PATTERN.is_match(input)
    }

    /// The branch name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
