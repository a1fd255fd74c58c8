//! Yes/no confirmation gates

use crate::core::ports::Prompter;

/// Whether an answer accepts a confirmation gate
///
/// Only the first token counts, and it must be exactly `Y` or `y`.
/// `yes`, `N` and an empty answer all reject.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.split_whitespace().next(), Some("Y" | "y"))
}

/// Ask a yes/no question and report whether the user accepted
pub fn confirm<P>(prompter: &mut P, question: &str) -> anyhow::Result<bool>
where
    P: Prompter + ?Sized,
{
    let answer = prompter.ask(question)?;
    Ok(is_affirmative(&answer))
}
