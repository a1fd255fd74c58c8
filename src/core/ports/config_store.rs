//! Configuration persistence port

use crate::core::models::HooksConfig;

/// Destination for the `.issue-mafia` configuration
pub trait ConfigStore {
    /// Replace any existing configuration with `config`
    fn write(&self, config: &HooksConfig) -> anyhow::Result<()>;
}
