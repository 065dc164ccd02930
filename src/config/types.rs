//! Basic types and enums for wizard definitions

use crate::{
    choice::Choice,
    constants::messages,
    error::Result,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    validation::{ValidationResult, Validator},
};
use serde::Deserialize;
use serde_json::Value;

/// Type of answer a step collects
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    /// String answer: free text, autocomplete or choices
    Str,
    /// Boolean (yes/no) answer
    Bool,
}

#[derive(Debug, PartialEq)]
pub enum QuestionType {
    MultipleChoice,
    SingleChoice,
    Autocomplete,
    Text,
    Boolean,
}

/// A choice written either as a bare string or with all its attributes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChoiceEntry {
    Plain(String),
    Detailed {
        value: Value,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        disabled: bool,
        #[serde(default)]
        hint: String,
    },
}

impl ChoiceEntry {
    pub fn value(&self) -> Value {
        match self {
            Self::Plain(value) => Value::String(value.clone()),
            Self::Detailed { value, .. } => value.clone(),
        }
    }

    pub fn to_choice(&self) -> Choice<Value> {
        match self {
            Self::Plain(value) => Choice::new(Value::String(value.clone()), value.clone()),
            Self::Detailed { value, label, disabled, hint } => {
                let label = label.clone().unwrap_or_else(|| match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                });
                let choice = Choice::new(value.clone(), label).with_hint(hint.clone());
                if *disabled {
                    choice.disabled()
                } else {
                    choice
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NumberRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Checks applied to text answers, in field order.
#[derive(Debug, Clone, Deserialize)]
pub struct Validation {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub pattern_message: Option<String>,
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub number: Option<NumberRange>,
    /// MiniJinja expression; the candidate answer is bound to `value`.
    #[serde(default)]
    pub condition: String,
    #[serde(default = "get_default_error_message")]
    pub error_message: String,
}

impl Default for Validation {
    fn default() -> Self {
        get_default_validation()
    }
}

impl Validation {
    /// Compiles the declared checks into a validator chain.
    ///
    /// `answers` is the rendering context for `condition` and
    /// `error_message`.
    pub fn validators(
        &self,
        renderer: &MiniJinjaRenderer,
        answers: &Value,
    ) -> Result<Vec<Validator>> {
        let mut validators = Vec::new();
        if self.required {
            validators.push(Validator::required());
        }
        if let Some(length) = self.min_length {
            validators.push(Validator::min_length(length));
        }
        if let Some(length) = self.max_length {
            validators.push(Validator::max_length(length));
        }
        if let Some(pattern) = &self.pattern {
            validators.push(Validator::pattern(pattern, self.pattern_message.as_deref())?);
        }
        if self.email {
            validators.push(Validator::email());
        }
        if let Some(range) = &self.number {
            validators.push(Validator::number(range.min, range.max));
        }
        if !self.condition.trim().is_empty() {
            validators.push(condition_validator(
                renderer.clone(),
                self.condition.clone(),
                self.error_message.clone(),
                answers.clone(),
            ));
        }
        Ok(validators)
    }
}

fn condition_validator(
    renderer: MiniJinjaRenderer,
    condition: String,
    error_message: String,
    answers: Value,
) -> Validator {
    Validator::custom(move |value| {
        let mut context = answers.clone();
        if let Value::Object(map) = &mut context {
            map.insert("value".to_string(), Value::String(value.to_string()));
        }

        let is_valid = renderer.execute_expression(&condition, &context).unwrap_or_else(|e| {
            log::warn!("Failed to evaluate condition '{condition}': {e}");
            true
        });
        if is_valid {
            return ValidationResult::ok();
        }

        let message = renderer
            .render(&error_message, &context)
            .unwrap_or_else(|_| messages::INVALID_ANSWER.to_string());
        ValidationResult::fail(message)
    })
}

fn get_default_error_message() -> String {
    messages::INVALID_ANSWER.to_string()
}

pub fn get_default_validation() -> Validation {
    Validation {
        required: false,
        min_length: None,
        max_length: None,
        pattern: None,
        pattern_message: None,
        email: false,
        number: None,
        condition: String::new(),
        error_message: get_default_error_message(),
    }
}
