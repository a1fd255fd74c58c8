//! Setup wizard - builds the `.issue-mafia` configuration interactively
//!
//! The wizard is a linear sequence of steps. Every step may end the run:
//!
//! 1. Directory check - confirm when the directory is not a Git repository
//! 2. Overwrite check - confirm when a configuration already exists
//! 3. Repository input - validate `owner/name`
//! 4. Reachability check - the remote must answer 200
//! 5. Branch input - validate, empty selects `main`
//! 6. Intersection check - the branch must resolve; confirm when it holds no hooks
//! 7. Persist - write `<repository> <branch>`
//!
//! Nothing is written unless all steps succeed. Fatal outcomes are reported
//! through the [`Reporter`] and returned as a [`WizardError`]; the wizard
//! never exits the process itself.

use std::fmt;
use std::path::PathBuf;

use log::debug;
use thiserror::Error;

use super::confirm;
use crate::core::models::{BranchName, HooksConfig, ParseError, RepositoryId};
use crate::core::ports::{
    ConfigStore, DirectoryInspector, Level, Prompter, RemoteRepository, Reporter, STATUS_OK,
};

const REPOSITORY_PROMPT: &str = "Welcome to issue-mafia!\n\
     Please, type the repository with which you would like to synchronize Git hooks:\n\
     github.com/";

const BRANCH_PROMPT: &str =
    "Please, specify the branch that issue-mafia should look for hooks (default is main):";

const CREATED_MESSAGE: &str =
    "Configuration file created successfully! Run issue-mafia to synchronize hooks.";

const TRUST_REMINDER: &str =
    "Always make sure you trust the repository that you are executing scripts from!";

/// A confirmation gate the user can decline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// The working directory is not a Git repository
    NotARepository,
    /// An `.issue-mafia` file would be overwritten
    OverwriteConfig,
    /// The branch holds no recognised hook files
    NoHooksFound,
}

impl Gate {
    /// Question shown to the user
    #[must_use]
    pub const fn question(self) -> &'static str {
        match self {
            Self::NotARepository => {
                "Hang on! This does not look like a Git repository \
                 (which means issue-mafia won't be able to synchronize hooks).\n\
                 Do you want to proceed anyway? (Y/n):"
            },
            Self::OverwriteConfig => {
                "It appears this directory already contains an issue-mafia configuration file.\n\
                 Continuing the process will overwrite settings. Do you want to proceed anyway? (Y/n):"
            },
            Self::NoHooksFound => {
                "This does not look like an issue-mafia repository. \
                 Do you want to add it anyway? (Y/n):"
            },
        }
    }
}

/// Reasons a wizard run ends without writing a file
#[derive(Debug, Error)]
pub enum WizardError {
    /// The user answered anything but `Y`/`y` at a gate
    #[error("no files generated.")]
    Declined(Gate),

    /// Repository or branch input failed validation
    #[error(transparent)]
    Invalid(#[from] ParseError),

    /// The repository lookup did not answer 200
    #[error("could not access the specified repository. received status {0}.")]
    RepositoryUnreachable(u16),

    /// The branch listing could not be resolved
    #[error("could not access the specified branch. received status {0}.")]
    BranchUnreachable(u16),

    /// Reading input or writing prompts failed
    #[error("terminal i/o failed: {0:#}")]
    Io(anyhow::Error),

    /// The configuration file could not be written
    #[error("could not write configuration: {0:#}")]
    Persist(anyhow::Error),
}

impl WizardError {
    /// Severity the error is reported with
    ///
    /// Declined gates are the user's choice and report as warnings.
    #[must_use]
    pub const fn level(&self) -> Level {
        match self {
            Self::Declined(_) => Level::Warning,
            _ => Level::Error,
        }
    }
}

/// Facts and answers collected during one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Validated repository, once entered
    pub repository: Option<RepositoryId>,
    /// Validated branch, once entered
    pub branch: Option<BranchName>,
    /// Whether the working directory is a Git repository
    pub directory_is_repo: bool,
    /// Whether `.issue-mafia` already exists
    pub config_already_exists: bool,
}

/// The `init` wizard, wired to its collaborators
pub struct SetupWizard<'a> {
    inspector: &'a dyn DirectoryInspector,
    remote: &'a dyn RemoteRepository,
    store: &'a dyn ConfigStore,
    reporter: &'a dyn Reporter,
    workdir: PathBuf,
}

impl<'a> SetupWizard<'a> {
    /// Create a wizard operating on the current directory
    #[must_use]
    pub fn new(
        inspector: &'a dyn DirectoryInspector,
        remote: &'a dyn RemoteRepository,
        store: &'a dyn ConfigStore,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            inspector,
            remote,
            store,
            reporter,
            workdir: PathBuf::from("."),
        }
    }

    /// Inspect `workdir` instead of the current directory
    #[must_use]
    pub fn in_dir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = workdir.into();
        self
    }

    /// Run the wizard to completion
    ///
    /// On failure the fatal message has already been reported at the
    /// error's [`level`](WizardError::level).
    pub fn run<P>(&self, prompter: &mut P) -> Result<HooksConfig, WizardError>
    where
        P: Prompter + ?Sized,
    {
        let mut state = WizardState::default();
        self.execute(prompter, &mut state).inspect_err(|err| match err.level() {
            Level::Warning => self.reporter.warning(&err.to_string()),
            _ => self.reporter.error(&err.to_string()),
        })
    }

    fn execute<P>(
        &self,
        prompter: &mut P,
        state: &mut WizardState,
    ) -> Result<HooksConfig, WizardError>
    where
        P: Prompter + ?Sized,
    {
        state.directory_is_repo = self.inspector.is_repo(&self.workdir);
        state.config_already_exists = self.inspector.has_config(&self.workdir);

        if !state.directory_is_repo {
            self.gate(prompter, Gate::NotARepository)?;
        }
        if state.config_already_exists {
            self.gate(prompter, Gate::OverwriteConfig)?;
        }

        let answer = prompter.ask(REPOSITORY_PROMPT).map_err(WizardError::Io)?;
        let repository = RepositoryId::parse(&answer)?;
        state.repository = Some(repository.clone());

        self.reporter.info("checking if repository is accessible...");
        let status = self.remote.fetch_repository(&repository);
        if status != STATUS_OK {
            return Err(WizardError::RepositoryUnreachable(status));
        }

        let answer = prompter.ask(BRANCH_PROMPT).map_err(WizardError::Io)?;
        let branch = BranchName::parse(&answer)?;
        state.branch = Some(branch.clone());

        self.reporter.info("checking repository integrity...");
        let listing = self.remote.fetch_intersecting_files(&repository, &branch);
        let Some(files) = listing.files else {
            return Err(WizardError::BranchUnreachable(listing.status));
        };
        if files.is_empty() {
            self.gate(prompter, Gate::NoHooksFound)?;
        }

        let config = HooksConfig::new(repository, branch);
        self.reporter.info("generating file...");
        self.store.write(&config).map_err(WizardError::Persist)?;

        // The file is on disk; a closed terminal no longer fails the run
        for message in [CREATED_MESSAGE, TRUST_REMINDER] {
            if let Err(e) = prompter.say(message) {
                debug!("could not print completion message: {e:#}");
            }
        }

        Ok(config)
    }

    fn gate<P>(&self, prompter: &mut P, gate: Gate) -> Result<(), WizardError>
    where
        P: Prompter + ?Sized,
    {
        if confirm(prompter, gate.question()).map_err(WizardError::Io)? {
            Ok(())
        } else {
            Err(WizardError::Declined(gate))
        }
    }
}

impl fmt::Debug for SetupWizard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetupWizard").field("workdir", &self.workdir).finish_non_exhaustive()
    }
}
