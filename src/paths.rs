//! Centralized path definitions for issue-mafia
//!
//! This module provides a single source of truth for all filesystem paths used by issue-mafia.
//!
//! ## Storage Layout
//!
//! ### Per-Project (Working Directory)
//!
//! ```text
//! repo/
//! └── .issue-mafia               # "<owner/name> <branch>", read by the sync engine
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.config/issue-mafia/
//! └── config.toml               # Remote API settings
//! ```
//!
//! `ISSUE_MAFIA_CONFIG_DIR` relocates the global directory.

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths
// =============================================================================

/// Hooks configuration filename
pub const CONFIG_FILE: &str = ".issue-mafia";

/// Get path to the `.issue-mafia` file inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "ISSUE_MAFIA_CONFIG_DIR";

/// Global config directory name
const GLOBAL_DIR: &str = "issue-mafia";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global issue-mafia directory.
///
/// Returns `$ISSUE_MAFIA_CONFIG_DIR` when set, otherwise
/// `<config dir>/issue-mafia` (`~/.config/issue-mafia` on Linux).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
