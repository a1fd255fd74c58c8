//! File-based configuration storage
//!
//! Implements `ConfigStore` by writing `.issue-mafia`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::HooksConfig;
use crate::core::ports::ConfigStore;
use crate::paths;

/// Mode the sync engine expects on the configuration file
#[cfg(unix)]
const CONFIG_MODE: u32 = 0o755;

/// Writes the configuration into a directory
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    dir: PathBuf,
}

impl FileConfigStore {
    /// Store the configuration in `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the configuration file
    #[must_use]
    pub fn path(&self) -> PathBuf {
        paths::config_file(&self.dir)
    }

    /// Directory the file is written to
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ConfigStore for FileConfigStore {
    fn write(&self, config: &HooksConfig) -> anyhow::Result<()> {
        let path = self.path();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(CONFIG_MODE);
        }

        let mut file = options.open(&path)?;
        file.write_all(config.to_string().as_bytes())?;
        file.flush()?;
        debug!("wrote {} ({config})", path.display());
        Ok(())
    }
}
