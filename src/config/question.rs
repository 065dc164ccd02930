//! Step definition and rendering logic

use crate::{
    choice::Choice,
    config::types::{get_default_validation, ChoiceEntry, QuestionType, Type, Validation},
    error::Result,
    prompt::{
        AutocompleteConfig, ConfirmationConfig, InputSource, MultipleChoiceConfig, Prompt,
        SingleChoiceConfig, TextPromptConfig,
    },
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    wizard::Answers,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::io::Write;

/// Represents a single step in a wizard definition
#[derive(Debug, Deserialize)]
pub struct Question {
    /// Message shown to the user; a MiniJinja template over earlier answers
    #[serde(default)]
    pub help: String,
    /// Type of the question (string or boolean)
    #[serde(rename = "type")]
    pub r#type: Type,
    /// Optional default value for the question
    #[serde(default)]
    pub default: Value,
    /// Available choices for string questions
    #[serde(default)]
    pub choices: Vec<ChoiceEntry>,
    /// Whether several choices may be picked
    #[serde(default)]
    pub multiselect: bool,
    #[serde(default)]
    pub min_select: usize,
    #[serde(default)]
    pub max_select: Option<usize>,
    /// Completion candidates for free text questions
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Whether the answer is read without echo
    #[serde(default)]
    pub secret: bool,
    #[serde(default)]
    pub ask_if: String,
    #[serde(default = "get_default_validation")]
    pub validation: Validation,
}

#[derive(Debug)]
pub struct QuestionRendered {
    pub ask_if: bool,
    pub default: Value,
    pub help: String,
    pub r#type: QuestionType,
}

pub trait IntoQuestionType {
    #[allow(clippy::wrong_self_convention)]
    fn into_question_type(&self) -> QuestionType;
}

impl IntoQuestionType for Question {
    fn into_question_type(&self) -> QuestionType {
        match (&self.r#type, self.choices.is_empty()) {
            (Type::Str, false) => {
                if self.multiselect {
                    QuestionType::MultipleChoice
                } else {
                    QuestionType::SingleChoice
                }
            }
            (Type::Str, true) if !self.suggestions.is_empty() => QuestionType::Autocomplete,
            (Type::Str, true) => QuestionType::Text,
            (Type::Bool, _) => QuestionType::Boolean,
        }
    }
}

impl Question {
    fn render_default_value(
        &self,
        answers: &Value,
        engine: &dyn TemplateRenderer,
        question_type: &QuestionType,
    ) -> Value {
        match question_type {
            QuestionType::Boolean => Value::Bool(self.default.as_bool().unwrap_or(false)),
            QuestionType::MultipleChoice => self.default.clone(),
            QuestionType::SingleChoice | QuestionType::Text | QuestionType::Autocomplete => {
                match &self.default {
                    Value::String(template) => {
                        let rendered = engine.render(template, answers).unwrap_or_else(|e| {
                            log::warn!("Failed to render default '{template}': {e}");
                            template.clone()
                        });
                        Value::String(rendered)
                    }
                    other => other.clone(),
                }
            }
        }
    }

    fn render_help_text(&self, answers: &Value, engine: &dyn TemplateRenderer) -> String {
        engine.render(&self.help, answers).unwrap_or(self.help.clone())
    }

    fn evaluate_condition(&self, answers: &Value, engine: &dyn TemplateRenderer) -> bool {
        engine.execute_expression(&self.ask_if, answers).unwrap_or(true)
    }

    pub fn render(&self, answers: &Value, engine: &dyn TemplateRenderer) -> QuestionRendered {
        let question_type = self.into_question_type();
        let default = self.render_default_value(answers, engine, &question_type);
        let help = self.render_help_text(answers, engine);
        let ask_if = self.evaluate_condition(answers, engine);

        QuestionRendered { default, ask_if, help, r#type: question_type }
    }

    fn choices(&self) -> Vec<Choice<Value>> {
        self.choices.iter().map(ChoiceEntry::to_choice).collect()
    }

    /// Asks this question and returns the answer as JSON.
    ///
    /// When `ask_if` is false nothing is asked and the rendered default is
    /// returned instead.
    pub fn ask<I: InputSource, W: Write>(
        &self,
        prompt: &mut Prompt<I, W>,
        answers: &Answers,
        renderer: &MiniJinjaRenderer,
    ) -> Result<Value> {
        let context = json!(answers);
        let QuestionRendered { ask_if, default, help, r#type } =
            self.render(&context, renderer);

        if !ask_if {
            log::debug!("Skipping '{help}', ask_if is false; using default {default}");
            return Ok(default);
        }

        match r#type {
            QuestionType::Text => {
                let mut config = TextPromptConfig::new(help)
                    .default(value_to_default_string(&default))
                    .validators(self.validation.validators(renderer, &context)?);
                if self.secret {
                    config = config.password();
                }
                Ok(Value::String(prompt.text(&config)?))
            }
            QuestionType::Autocomplete => {
                let config = AutocompleteConfig::new(help, self.suggestions.clone())
                    .validators(self.validation.validators(renderer, &context)?);
                Ok(Value::String(prompt.autocomplete(&config)?))
            }
            QuestionType::Boolean => {
                let config =
                    ConfirmationConfig::new(help).default(default.as_bool().unwrap_or(false));
                Ok(Value::Bool(prompt.confirm(&config)?))
            }
            QuestionType::SingleChoice => {
                let choices = self.choices();
                let default_index = find_default_choice_index(&choices, &default);
                let config = SingleChoiceConfig::new(help, choices).default_index(default_index);
                prompt.select(&config)
            }
            QuestionType::MultipleChoice => {
                let mut config =
                    MultipleChoiceConfig::new(help, self.choices()).min_select(self.min_select);
                if let Some(max) = self.max_select {
                    config = config.max_select(max);
                }
                Ok(Value::Array(prompt.multi_select(&config)?))
            }
        }
    }
}

fn value_to_default_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

fn find_default_choice_index(choices: &[Choice<Value>], default_value: &Value) -> usize {
    choices.iter().position(|choice| choice.value() == default_value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::*;

    fn base_question(r#type: Type, default: Value) -> Question {
        Question {
            help: "Help".to_string(),
            r#type,
            default,
            choices: vec![],
            multiselect: false,
            min_select: 0,
            max_select: None,
            suggestions: vec![],
            secret: false,
            ask_if: String::new(),
            validation: get_default_validation(),
        }
    }

    fn plain_choices(values: &[&str]) -> Vec<ChoiceEntry> {
        values.iter().map(|value| ChoiceEntry::Plain(value.to_string())).collect()
    }

    #[test]
    fn derives_question_type() {
        let mut question = base_question(Type::Str, Value::Null);
        assert_eq!(question.into_question_type(), QuestionType::Text);

        question.suggestions = vec!["main".to_string()];
        assert_eq!(question.into_question_type(), QuestionType::Autocomplete);

        question.choices = plain_choices(&["a"]);
        assert_eq!(question.into_question_type(), QuestionType::SingleChoice);

        question.multiselect = true;
        assert_eq!(question.into_question_type(), QuestionType::MultipleChoice);

        let question = base_question(Type::Bool, Value::Null);
        assert_eq!(question.into_question_type(), QuestionType::Boolean);
    }

    #[test]
    fn renders_help_default_and_condition() {
        let mut question = base_question(Type::Str, json!("{{ name | lower }}-app"));
        question.help = "Project for {{ name }}".to_string();
        question.ask_if = "name != 'skip'".to_string();

        let rendered = question.render(&json!({"name": "Demo"}), &MiniJinjaRenderer::new());
        assert!(rendered.ask_if);
        assert_eq!(rendered.help, "Project for Demo");
        assert_eq!(rendered.default, json!("demo-app"));
        assert_eq!(rendered.r#type, QuestionType::Text);

        let rendered = question.render(&json!({"name": "skip"}), &MiniJinjaRenderer::new());
        assert!(!rendered.ask_if);
    }

    #[test]
    fn boolean_default_falls_back_to_false() {
        let question = base_question(Type::Bool, json!("yes"));
        let rendered = question.render(&json!({}), &MiniJinjaRenderer::new());
        assert_eq!(rendered.default, json!(false));
    }

    #[test]
    fn skipped_question_returns_default_without_reading() {
        let mut question = base_question(Type::Str, json!("fallback"));
        question.ask_if = "false".to_string();
        let mut prompt = prompt_with(&[]);
        let answer =
            question.ask(&mut prompt, &Answers::new(), &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!("fallback"));
        assert_eq!(output_of(&prompt), "");
    }

    #[test]
    fn asks_text_with_rendered_default() {
        let question = base_question(Type::Str, json!("{{ name }}"));
        let mut answers = Answers::new();
        answers.insert("name".to_string(), json!("ada"));

        let mut prompt = prompt_with(&[""]);
        let answer = question.ask(&mut prompt, &answers, &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!("ada"));
        assert_eq!(output_of(&prompt), "Help [ada]: ");
    }

    #[test]
    fn asks_single_choice_with_matching_default() {
        let mut question = base_question(Type::Str, json!("green"));
        question.choices = plain_choices(&["red", "green", "blue"]);

        let mut prompt = prompt_with(&[""]);
        let answer =
            question.ask(&mut prompt, &Answers::new(), &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!("green"));
        assert!(output_of(&prompt).contains("  > 2. green\n"));
    }

    #[test]
    fn asks_multiple_choice_within_bounds() {
        let mut question = base_question(Type::Str, Value::Null);
        question.choices = plain_choices(&["auth", "api", "db"]);
        question.multiselect = true;
        question.min_select = 1;
        question.max_select = Some(2);

        let mut prompt = prompt_with(&["1,2,3", "3,1"]);
        let answer =
            question.ask(&mut prompt, &Answers::new(), &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!(["db", "auth"]));
    }

    #[test]
    fn asks_confirmation_and_autocomplete() {
        let question = base_question(Type::Bool, json!(true));
        let mut prompt = prompt_with(&[""]);
        let answer =
            question.ask(&mut prompt, &Answers::new(), &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!(true));

        let mut question = base_question(Type::Str, Value::Null);
        question.suggestions = vec!["postgres".to_string(), "sqlite".to_string()];
        let mut prompt = prompt_with(&["p\t", "postgres"]);
        let answer =
            question.ask(&mut prompt, &Answers::new(), &MiniJinjaRenderer::new()).unwrap();
        assert_eq!(answer, json!("postgres"));
        assert!(output_of(&prompt).contains("Suggestions: postgres\n"));
    }
}
