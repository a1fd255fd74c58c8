//! `log`-backed reporter

use log::{error, info, warn};

use crate::core::ports::{Level, Reporter};

/// Forwards wizard messages to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Info => info!("{message}"),
            Level::Warning => warn!("{message}"),
            Level::Error => error!("{message}"),
        }
    }
}
