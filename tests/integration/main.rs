//! Integration tests for the issue-mafia CLI
//!
//! These tests run the real binary against a fake GitHub API and
//! feed the wizard through stdin.

#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

use common::fake_github::FakeGitHub;

/// Helper function to create an issue-mafia command
fn issue_mafia() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("issue-mafia"))
}

/// Workspace with an isolated global config directory
struct Workspace {
    dir: TempDir,
    config_dir: TempDir,
}

impl Workspace {
    fn git_repo() -> Self {
        let ws = Self::plain();
        git2::Repository::init(ws.dir.path()).expect("Failed to init git repo");
        ws
    }

    fn plain() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            config_dir: TempDir::new().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_file(&self) -> std::path::PathBuf {
        self.path().join(".issue-mafia")
    }

    /// `issue-mafia init` wired to `server`
    fn init(&self, server: &FakeGitHub, stdin: &str) -> assert_cmd::Command {
        let mut cmd = issue_mafia();
        cmd.arg("init")
            .current_dir(self.path())
            .env("ISSUE_MAFIA_API_URL", server.url())
            .env("ISSUE_MAFIA_CONFIG_DIR", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("ISSUE_MAFIA_TOKEN")
            .env_remove("GITHUB_TOKEN")
            .write_stdin(stdin);
        cmd
    }
}

// =============================================================================
// BASIC CLI
// =============================================================================

#[test]
fn test_version() {
    issue_mafia()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-mafia"));
}

#[test]
fn test_no_args_shows_hint() {
    issue_mafia()
        .assert()
        .success()
        .stdout(predicate::str::contains("issue-mafia init"));
}

// =============================================================================
// END-TO-END WIZARD RUNS
// =============================================================================

/// Repo, no config, default branch, hooks present
#[test]
fn test_init_writes_default_branch() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "octocat/hello-world\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created successfully"));

    assert_eq!(fs::read_to_string(ws.config_file()).unwrap(), "octocat/hello-world main");
}

/// Malformed identifier aborts before any request
#[test]
fn test_init_rejects_bad_repository() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "bad repo\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository address"));

    assert!(!ws.config_file().exists());
    assert!(server.requests().is_empty());
}

/// Declining the not-a-repository gate stops the wizard
#[test]
fn test_init_outside_repo_declined() {
    let ws = Workspace::plain();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "n\noctocat/hello-world\n\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Welcome").not())
        .stderr(predicate::str::contains("no files generated."));

    assert!(!ws.config_file().exists());
}

/// Zero hooks found, accepted anyway
#[test]
fn test_init_without_hooks_accepted() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("README.md", "file")]);

    ws.init(&server, "octocat/hello-world\n\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("does not look like an issue-mafia repository"));

    assert_eq!(fs::read_to_string(ws.config_file()).unwrap(), "octocat/hello-world main");
}

#[test]
fn test_init_without_hooks_declined() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[]);

    ws.init(&server, "octocat/hello-world\n\nyes\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no files generated."));

    assert!(!ws.config_file().exists());
}

// =============================================================================
// REMOTE FAILURES
// =============================================================================

#[test]
fn test_init_unknown_repository_reports_status() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::start(&[]);

    ws.init(&server, "octocat/missing\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("received status 404."));

    assert!(!ws.config_file().exists());
}

#[test]
fn test_init_unknown_branch_reports_status() {
    let ws = Workspace::git_repo();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "octocat/hello-world\nrelease\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not access the specified branch"));

    assert!(!ws.config_file().exists());
}

// =============================================================================
// EXISTING CONFIGURATION
// =============================================================================

#[test]
fn test_init_overwrite_declined_keeps_file() {
    let ws = Workspace::git_repo();
    fs::write(ws.config_file(), "old/hooks develop").unwrap();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "no\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no files generated."));

    assert_eq!(fs::read_to_string(ws.config_file()).unwrap(), "old/hooks develop");
}

#[test]
fn test_init_overwrite_accepted_replaces_file() {
    let ws = Workspace::git_repo();
    fs::write(ws.config_file(), "a-much-longer-owner/old-hooks develop\n").unwrap();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-push", "file")]);

    ws.init(&server, "y\noctocat/hello-world\n\n").assert().success();

    assert_eq!(fs::read_to_string(ws.config_file()).unwrap(), "octocat/hello-world main");
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

#[test]
fn test_init_uses_token_from_global_config() {
    let ws = Workspace::git_repo();
    fs::write(ws.config_dir.path().join("config.toml"), "[remote]\ntoken = \"from-file\"\n").unwrap();
    let server = FakeGitHub::with_repository("octocat/hello-world", &[("pre-commit", "file")]);

    ws.init(&server, "octocat/hello-world\n\n").assert().success();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.authorization.as_deref() == Some("Bearer from-file")));
}
