//! Answer validators
//!
//! A [`Validator`] turns one raw answer into a [`ValidationResult`]. Validators
//! hold no state between calls, so the same value can be shared by any number
//! of prompts. A chain of validators is evaluated left to right and stops at
//! the first failure, see [`validate_all`].

use crate::{
    constants::{messages, EMAIL_PATTERN},
    error::Result,
};
use regex::Regex;
use std::{fmt, sync::Arc, sync::LazyLock};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Verdict for a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Human readable reason; empty when `valid` is true.
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { valid: true, message: String::new() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}

type CustomCheck = dyn Fn(&str) -> ValidationResult + Send + Sync;

/// A single answer check.
#[derive(Clone)]
pub enum Validator {
    /// Rejects empty and whitespace-only answers.
    Required,
    /// Rejects answers shorter than the given number of characters.
    MinLength(usize),
    /// Rejects answers longer than the given number of characters.
    MaxLength(usize),
    /// Rejects answers the regex does not match from the first character.
    Pattern { regex: Regex, message: String },
    Email,
    /// Rejects non-numeric answers and numbers outside the inclusive bounds.
    Number { min: Option<f64>, max: Option<f64> },
    Custom(Arc<CustomCheck>),
}

impl Validator {
    pub fn required() -> Self {
        Self::Required
    }

    pub fn min_length(length: usize) -> Self {
        Self::MinLength(length)
    }

    pub fn max_length(length: usize) -> Self {
        Self::MaxLength(length)
    }

    /// Builds a pattern validator.
    ///
    /// The match is anchored at the start of the answer only, so a regex that
    /// matches a prefix is enough. Add `$` to require a full match.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidPattern`] when `regex` does not compile.
    pub fn pattern(regex: &str, message: Option<&str>) -> Result<Self> {
        let anchored = Regex::new(&format!(r"\A(?:{regex})"))?;
        Ok(Self::Pattern {
            regex: anchored,
            message: message.unwrap_or(messages::INVALID_FORMAT).to_string(),
        })
    }

    pub fn email() -> Self {
        Self::Email
    }

    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        Self::Number { min, max }
    }

    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&str) -> ValidationResult + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(check))
    }

    /// Evaluates the answer. Never panics, whatever the input.
    pub fn validate(&self, value: &str) -> ValidationResult {
        match self {
            Self::Required => {
                if value.trim().is_empty() {
                    ValidationResult::fail(messages::REQUIRED)
                } else {
                    ValidationResult::ok()
                }
            }
            Self::MinLength(length) => {
                if value.chars().count() < *length {
                    ValidationResult::fail(format!("Minimum length is {length}"))
                } else {
                    ValidationResult::ok()
                }
            }
            Self::MaxLength(length) => {
                if value.chars().count() > *length {
                    ValidationResult::fail(format!("Maximum length is {length}"))
                } else {
                    ValidationResult::ok()
                }
            }
            Self::Pattern { regex, message } => {
                if regex.is_match(value) {
                    ValidationResult::ok()
                } else {
                    ValidationResult::fail(message.clone())
                }
            }
            Self::Email => {
                if EMAIL_REGEX.is_match(value) {
                    ValidationResult::ok()
                } else {
                    ValidationResult::fail(messages::INVALID_EMAIL)
                }
            }
            Self::Number { min, max } => validate_number(value, *min, *max),
            Self::Custom(check) => check(value),
        }
    }
}

fn validate_number(value: &str, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    let Ok(number) = value.trim().parse::<f64>() else {
        return ValidationResult::fail(messages::NOT_A_NUMBER);
    };
    if let Some(min) = min {
        if number < min {
            return ValidationResult::fail(format!("Minimum value is {min}"));
        }
    }
    if let Some(max) = max {
        if number > max {
            return ValidationResult::fail(format!("Maximum value is {max}"));
        }
    }
    ValidationResult::ok()
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("Required"),
            Self::MinLength(length) => f.debug_tuple("MinLength").field(length).finish(),
            Self::MaxLength(length) => f.debug_tuple("MaxLength").field(length).finish(),
            Self::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
            Self::Email => f.write_str("Email"),
            Self::Number { min, max } => {
                f.debug_struct("Number").field("min", min).field("max", max).finish()
            }
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Runs the chain in order and returns the first failure, or success.
pub fn validate_all(validators: &[Validator], value: &str) -> ValidationResult {
    validators
        .iter()
        .map(|validator| validator.validate(value))
        .find(|result| !result.valid)
        .unwrap_or_else(ValidationResult::ok)
}
