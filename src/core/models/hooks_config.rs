//! The `.issue-mafia` configuration line
//!
//! The sync engine reads a single line `<owner/name> <branch>` with no
//! trailing newline.

use std::fmt;

use super::{BranchName, RepositoryId};

/// Repository and branch that hooks are synchronised from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksConfig {
    /// Remote repository
    pub repository: RepositoryId,
    /// Branch hooks are read from
    pub branch: BranchName,
}

impl HooksConfig {
    /// Pair a repository with a branch
    #[must_use]
    pub const fn new(repository: RepositoryId, branch: BranchName) -> Self {
        Self { repository, branch }
    }
}

impl fmt::Display for HooksConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.repository, self.branch)
    }
}
