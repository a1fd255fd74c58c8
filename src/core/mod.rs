//! Core domain logic for issue-mafia
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`RepositoryId`, `BranchName`, `HooksConfig`)
//! - `services/` - The setup wizard and its confirmation gates
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
