//! Status reporting port
//!
//! The wizard reports progress and fatal outcomes through this trait
//! instead of writing to global loggers or exiting the process.

use std::fmt;

/// Severity of a reported message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress information
    Info,
    /// The user declined to continue
    Warning,
    /// Invalid input or a failed remote check
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receives wizard status messages
pub trait Reporter {
    /// Emit a message at `level`
    fn report(&self, level: Level, message: &str);

    /// Emit progress information
    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    /// Emit a warning
    fn warning(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    /// Emit an error
    fn error(&self, message: &str) {
        self.report(Level::Error, message);
    }
}
