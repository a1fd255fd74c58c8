//! issue-mafia - Synchronize Git hooks from a shared GitHub repository
//!
//! This library provides the `init` setup wizard that records which remote
//! repository and branch a working directory pulls its hooks from.
//!
//! - [`core`] - Wizard logic, domain models and port traits (no I/O)
//! - [`adapters`] - Terminal, filesystem, libgit2 and GitHub implementations
//! - [`config`] - User-level settings
//! - [`paths`] - Filenames and directories

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod paths;
