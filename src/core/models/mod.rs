//! Domain models for issue-mafia
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`RepositoryId`] - `owner/name` address of the hooks repository
//! - [`BranchName`] - Branch the hooks are read from
//! - [`HooksConfig`] - The persisted repository/branch pair
//! - [`hook`] - Names Git recognises as hooks

pub mod hook;

mod branch;
mod hooks_config;
mod repository;

pub use branch::{BranchName, DEFAULT_BRANCH};
pub use hook::{GIT_HOOKS, intersect_hooks, is_hook_name};
pub use hooks_config::HooksConfig;
pub use repository::{ParseError, RepositoryId};
