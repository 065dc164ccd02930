use super::{ConfirmationConfig, InputSource, Prompt};
use crate::{constants::TRUTHY_ANSWERS, error::Result};
use std::io::Write;

impl<I: InputSource, W: Write> Prompt<I, W> {
    /// Asks a yes/no question once.
    ///
    /// Empty input yields the default. Anything outside `y`, `yes`, `true`
    /// and `1` (any case) is a "no"; this prompt never asks twice.
    pub fn confirm(&mut self, config: &ConfirmationConfig) -> Result<bool> {
        let hint = if config.default { "[Y/n]" } else { "[y/N]" };
        self.write(&format!("{} {hint}: ", config.message))?;

        let value = self.read_line()?.to_lowercase();
        if value.is_empty() {
            return Ok(config.default);
        }
        Ok(TRUTHY_ANSWERS.contains(&value.as_str()))
    }
}
