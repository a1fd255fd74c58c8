//! Known Git hook names
//!
//! A remote repository "looks like" a hooks repository when at least one
//! file at its root carries one of these names.

/// Hook names documented in `githooks(5)`
pub const GIT_HOOKS: &[&str] = &[
    "applypatch-msg",
    "pre-applypatch",
    "post-applypatch",
    "pre-commit",
    "pre-merge-commit",
    "prepare-commit-msg",
    "commit-msg",
    "post-commit",
    "pre-rebase",
    "post-checkout",
    "post-merge",
    "pre-push",
    "pre-receive",
    "update",
    "proc-receive",
    "post-receive",
    "post-update",
    "reference-transaction",
    "push-to-checkout",
    "pre-auto-gc",
    "post-rewrite",
    "sendemail-validate",
    "fsmonitor-watchman",
    "p4-changelist",
    "p4-prepare-changelist",
    "p4-post-changelist",
    "p4-pre-submit",
    "post-index-change",
];

/// Whether `name` is a recognised hook filename
#[must_use]
pub fn is_hook_name(name: &str) -> bool {
    GIT_HOOKS.contains(&name)
}

/// Keep the names that are hooks, preserving input order
#[must_use]
pub fn intersect_hooks<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|n| is_hook_name(n.as_ref()))
        .map(|n| n.as_ref().to_string())
        .collect()
}
