use super::{InputSource, MultipleChoiceConfig, Prompt, SingleChoiceConfig};
use crate::{
    choice::Choice,
    constants::messages,
    error::{Error, Result},
};
use std::{
    io::Write,
    num::{IntErrorKind, ParseIntError},
};

/// Converts a 1-based number into a position in a list of `len` choices.
fn position_of(number: i64, len: usize) -> Option<usize> {
    let position = usize::try_from(number.checked_sub(1)?).ok()?;
    (position < len).then_some(position)
}

/// Parses one typed number into a position.
///
/// `Err` means the token is not an integer at all. `Ok(None)` is an integer
/// outside the list, including one too large for `i64`.
fn parse_token(token: &str, len: usize) -> Result<Option<usize>, ParseIntError> {
    match token.trim().parse::<i64>() {
        Ok(number) => Ok(position_of(number, len)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn parse_position(token: &str, len: usize) -> Option<usize> {
    parse_token(token, len).ok().flatten()
}

/// Parses a comma-separated answer into positions, `None` for numbers
/// outside the list.
///
/// Fails as soon as one token is not an integer.
fn parse_positions(value: &str, len: usize) -> Result<Vec<Option<usize>>, ParseIntError> {
    value.split(',').map(|token| parse_token(token, len)).collect()
}

/// A `max_select` of zero places no upper bound.
fn upper_bound(max_select: Option<usize>) -> Option<usize> {
    max_select.filter(|&max| max > 0)
}

fn disabled_suffix<T>(choice: &Choice<T>) -> &'static str {
    if choice.is_disabled() {
        " (disabled)"
    } else {
        ""
    }
}

impl<I: InputSource, W: Write> Prompt<I, W> {
    /// Asks for one choice by its number and returns its value.
    ///
    /// Empty input returns the default choice, even a disabled one.
    ///
    /// # Errors
    /// [`Error::InvalidPrompt`] when there are no choices or the default index
    /// is out of range; I/O errors and end of input from the source.
    pub fn select<T: Clone>(&mut self, config: &SingleChoiceConfig<T>) -> Result<T> {
        let choices = &config.choices;
        if choices.is_empty() {
            return Err(Error::InvalidPrompt(format!(
                "'{}' has no choices to select from",
                config.message
            )));
        }
        if config.default_index >= choices.len() {
            return Err(Error::InvalidPrompt(format!(
                "default index {} is out of range for {} choices",
                config.default_index,
                choices.len()
            )));
        }

        let mut listing = format!("{}\n", config.message);
        for (index, choice) in choices.iter().enumerate() {
            let marker = if index == config.default_index { ">" } else { " " };
            let hint = if choice.hint().is_empty() {
                String::new()
            } else {
                format!(" - {}", choice.hint())
            };
            listing.push_str(&format!(
                "  {marker} {}. {}{}{hint}\n",
                index + 1,
                choice.label(),
                disabled_suffix(choice)
            ));
        }
        self.write(&listing)?;

        let question = format!("Enter choice [1-{}]: ", choices.len());
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.write(&question)?;
            let value = self.read_line()?;

            if value.is_empty() {
                return Ok(choices[config.default_index].value().clone());
            }

            let reason = match parse_position(&value, choices.len()) {
                Some(position) if !choices[position].is_disabled() => {
                    return Ok(choices[position].value().clone());
                }
                Some(_) => messages::OPTION_DISABLED,
                None => messages::INVALID_SELECTION,
            };
            self.log_rejection(&config.message, attempt, reason);
            self.reject(reason)?;
        }
    }

    /// Asks for a comma-separated list of choice numbers.
    ///
    /// Numbers that are out of range or point at disabled choices are dropped
    /// without complaint; the remaining values keep the typed order, repeats
    /// included, and must respect the configured bounds. A `max_select` of
    /// zero means no upper bound.
    ///
    /// # Errors
    /// [`Error::InvalidPrompt`] when `min_select` exceeds `max_select`; I/O
    /// errors and end of input from the source.
    pub fn multi_select<T: Clone>(
        &mut self,
        config: &MultipleChoiceConfig<T>,
    ) -> Result<Vec<T>> {
        let choices = &config.choices;
        if let Some(max) = upper_bound(config.max_select) {
            if config.min_select > max {
                return Err(Error::InvalidPrompt(format!(
                    "at least {} selections can never fit in at most {max}",
                    config.min_select
                )));
            }
        }

        let mut listing = format!("{} (comma-separated numbers)\n", config.message);
        for (index, choice) in choices.iter().enumerate() {
            listing.push_str(&format!(
                "  {}. {}{}\n",
                index + 1,
                choice.label(),
                disabled_suffix(choice)
            ));
        }
        self.write(&listing)?;

        let too_few = format!("Select at least {} options", config.min_select);
        let mut attempt = 0;
        loop {
            attempt += 1;
            self.write("Enter choices: ")?;
            let value = self.read_line()?;

            if value.is_empty() {
                if config.min_select == 0 {
                    return Ok(Vec::new());
                }
                self.log_rejection(&config.message, attempt, &too_few);
                self.reject(&too_few)?;
                continue;
            }

            let Ok(positions) = parse_positions(&value, choices.len()) else {
                self.log_rejection(&config.message, attempt, messages::INVALID_INPUT);
                self.reject(messages::INVALID_INPUT)?;
                continue;
            };

            let selected: Vec<T> = positions
                .into_iter()
                .flatten()
                .filter(|&position| !choices[position].is_disabled())
                .map(|position| choices[position].value().clone())
                .collect();

            let reason = if selected.len() < config.min_select {
                too_few.clone()
            } else if let Some(max) =
                upper_bound(config.max_select).filter(|&max| selected.len() > max)
            {
                format!("Select at most {max} options")
            } else {
                return Ok(selected);
            };
            self.log_rejection(&config.message, attempt, &reason);
            self.reject(&reason)?;
        }
    }
}
