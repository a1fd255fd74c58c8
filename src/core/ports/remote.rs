//! Remote repository port
//!
//! Defines the lookups the wizard performs against the hosting service.
//! Both lookups are blocking and never retried.

use crate::core::models::{BranchName, RepositoryId};

/// HTTP status that marks a successful lookup
pub const STATUS_OK: u16 = 200;

/// Reported when no HTTP response was received at all
pub const STATUS_UNREACHABLE: u16 = 0;

/// Outcome of listing the hook files on a branch
///
/// `files` is `None` when the repository or branch could not be resolved.
/// `Some(vec![])` means the branch exists but holds no recognised hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    /// Hook filenames found on the branch
    pub files: Option<Vec<String>>,
    /// HTTP status of the listing request
    pub status: u16,
}

impl FileListing {
    /// A successful listing
    #[must_use]
    pub const fn found(files: Vec<String>) -> Self {
        Self {
            files: Some(files),
            status: STATUS_OK,
        }
    }

    /// A listing that could not be resolved
    #[must_use]
    pub const fn failed(status: u16) -> Self {
        Self {
            files: None,
            status,
        }
    }
}

/// Client for the remote hosting service
pub trait RemoteRepository {
    /// Check that the repository exists and is accessible
    ///
    /// Returns the HTTP status; only [`STATUS_OK`] means reachable.
    fn fetch_repository(&self, repo: &RepositoryId) -> u16;

    /// List the hook files present on `branch`
    fn fetch_intersecting_files(&self, repo: &RepositoryId, branch: &BranchName) -> FileListing;
}
