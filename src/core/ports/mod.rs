//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the setup wizard
//! and external systems (terminal, filesystem, git, GitHub).
//!
//! Implementations live in the `adapters` module.
//!
//! The wizard depends only on these traits, never on concrete
//! implementations, so every step can be driven by mocks in tests.

mod config_store;
mod inspector;
mod prompt;
mod remote;
mod reporter;

pub use config_store::ConfigStore;
pub use inspector::DirectoryInspector;
pub use prompt::Prompter;
pub use remote::{FileListing, RemoteRepository, STATUS_OK, STATUS_UNREACHABLE};
pub use reporter::{Level, Reporter};
