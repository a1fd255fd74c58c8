//! Business logic orchestration
//!
//! - [`confirm`] - Yes/no confirmation gates
//! - [`wizard`] - The `init` setup wizard

pub mod confirm;
pub mod wizard;

pub use confirm::{confirm, is_affirmative};
pub use wizard::{Gate, SetupWizard, WizardError, WizardState};
