//! Git integration adapter
//!
//! Implements `DirectoryInspector` using libgit2.

use std::path::Path;

use git2::Repository;
use log::debug;

use crate::core::ports::DirectoryInspector;
use crate::paths;

/// Inspects directories with libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct GitInspector;

impl GitInspector {
    /// Create a new inspector
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DirectoryInspector for GitInspector {
    fn is_repo(&self, path: &Path) -> bool {
        // Only the directory itself counts; hooks are installed relative to it
        match Repository::open(path) {
            Ok(_) => true,
            Err(e) => {
                debug!("{} is not a git repository: {}", path.display(), e.message());
                false
            },
        }
    }

    fn has_config(&self, path: &Path) -> bool {
        paths::config_file(path).exists()
    }
}
