//! Run the configuration wizard in the current directory

use std::process::ExitCode;

use issue_mafia::adapters::{
    FileConfigStore, GitHubClient, GitInspector, LogReporter, TerminalPrompter,
};
use issue_mafia::config::GlobalConfig;
use issue_mafia::core::services::SetupWizard;

/// Create or overwrite `.issue-mafia` interactively
///
/// Wizard aborts have already been reported when this returns
/// [`ExitCode::FAILURE`]; `Err` is reserved for setup failures.
pub fn init() -> anyhow::Result<ExitCode> {
    let config = GlobalConfig::load();
    log::debug!("using API at {}", config.remote.api_base());

    let inspector = GitInspector::new();
    let remote = GitHubClient::new(&config.remote)?;
    let store = FileConfigStore::new(".");
    let reporter = LogReporter;
    let mut prompter = TerminalPrompter::stdio();

    let wizard =
        SetupWizard::new(&inspector, &remote, &store, &reporter).in_dir(store.dir());
    match wizard.run(&mut prompter) {
        Ok(hooks) => {
            log::debug!("configured {hooks}");
            Ok(ExitCode::SUCCESS)
        },
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
