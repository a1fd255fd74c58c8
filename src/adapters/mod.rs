//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Repository detection via libgit2
//! - `github/` - GitHub REST API client
//! - `file/` - `.issue-mafia` file writer
//! - `terminal/` - Stdin/stdout prompts and `log`-backed reporting

pub mod file;
pub mod git;
pub mod github;
pub mod terminal;

pub use file::FileConfigStore;
pub use git::GitInspector;
pub use github::GitHubClient;
pub use terminal::{LogReporter, TerminalPrompter};
