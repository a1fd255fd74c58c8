//! Command implementations

mod init;

pub use init::init;
