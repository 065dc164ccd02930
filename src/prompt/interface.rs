//! Prompt descriptions passed to the engine
//!
//! Each prompt kind has a configuration value built with chained setters:
//!
//! ```
//! use roadprompt::{prompt::TextPromptConfig, validation::Validator};
//!
//! let config = TextPromptConfig::new("Project name")
//!     .default("demo")
//!     .validator(Validator::required());
//! assert_eq!(config.default, "demo");
//! ```

use crate::{choice::Choice, validation::Validator};

/// Free text input, optionally without echo.
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub message: String,
    /// Used when the answer is empty. An empty string means no default.
    pub default: String,
    pub validators: Vec<Validator>,
    pub password: bool,
}

impl TextPromptConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: String::new(),
            validators: Vec::new(),
            password: false,
        }
    }

    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators.extend(validators);
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }
}

/// Yes/no question.
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub message: String,
    pub default: bool,
}

impl ConfirmationConfig {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), default: false }
    }

    pub fn default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

/// Pick exactly one of a list of choices.
#[derive(Debug, Clone)]
pub struct SingleChoiceConfig<T> {
    pub message: String,
    pub choices: Vec<Choice<T>>,
    /// Returned on empty input, even when that choice is disabled.
    pub default_index: usize,
}

impl<T> SingleChoiceConfig<T> {
    pub fn new(message: impl Into<String>, choices: Vec<Choice<T>>) -> Self {
        Self { message: message.into(), choices, default_index: 0 }
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }
}

/// Pick any number of choices within cardinality bounds.
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig<T> {
    pub message: String,
    pub choices: Vec<Choice<T>>,
    pub min_select: usize,
    pub max_select: Option<usize>,
}

impl<T> MultipleChoiceConfig<T> {
    pub fn new(message: impl Into<String>, choices: Vec<Choice<T>>) -> Self {
        Self { message: message.into(), choices, min_select: 0, max_select: None }
    }

    pub fn min_select(mut self, min: usize) -> Self {
        self.min_select = min;
        self
    }

    pub fn max_select(mut self, max: usize) -> Self {
        self.max_select = Some(max);
        self
    }
}

/// Free text with prefix suggestions on request.
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    pub message: String,
    pub suggestions: Vec<String>,
    pub validators: Vec<Validator>,
}

impl AutocompleteConfig {
    pub fn new(message: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self { message: message.into(), suggestions, validators: Vec::new() }
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators.extend(validators);
        self
    }
}
