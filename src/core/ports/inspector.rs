//! Directory inspection port
//!
//! Answers questions about the directory the wizard runs in.

use std::path::Path;

/// Inspects a working directory before configuration is written
pub trait DirectoryInspector {
    /// Whether `path` is the root of a Git repository
    fn is_repo(&self, path: &Path) -> bool;

    /// Whether `path` already holds an `.issue-mafia` file
    fn has_config(&self, path: &Path) -> bool;
}
