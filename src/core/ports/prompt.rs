//! Interactive prompt port
//!
//! Splits the terminal into a message writer and a token reader so the
//! wizard can be driven by scripted input.

/// Line-oriented interactive channel
pub trait Prompter {
    /// Show a message to the user
    fn say(&mut self, message: &str) -> anyhow::Result<()>;

    /// Read the first whitespace-delimited token of the next input line
    ///
    /// A blank line or end of input yields an empty string.
    fn read_token(&mut self) -> anyhow::Result<String>;

    /// Show `question` and read the answer token
    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        self.say(question)?;
        self.read_token()
    }
}
