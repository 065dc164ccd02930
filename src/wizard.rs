//! Guided flows built from named steps
//!
//! A [`Wizard`] calls its steps in registration order. Each step gets the
//! prompt engine and the answers collected so far, and its return value is
//! stored under the step name once the step has returned.

use crate::{
    constants::BANNER_WIDTH,
    error::{Error, Result},
    prompt::{InputSource, Prompt},
};
use indexmap::IndexMap;
use log::Level;
use serde_json::Value;
use std::{collections::HashSet, io::Write};

/// Answers keyed by step name, in the order the steps ran.
pub type Answers = IndexMap<String, Value>;

type StepFn<'a, I, W> = Box<dyn FnMut(&mut Prompt<I, W>, &Answers) -> Result<Value> + 'a>;

struct Step<'a, I, W> {
    name: String,
    run: StepFn<'a, I, W>,
}

/// Ordered collection of named steps.
pub struct Wizard<'a, I, W> {
    title: String,
    steps: Vec<Step<'a, I, W>>,
}

impl<'a, I: InputSource, W: Write> Wizard<'a, I, W> {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), steps: Vec::new() }
    }

    pub fn add_step<F>(mut self, name: impl Into<String>, step: F) -> Self
    where
        F: FnMut(&mut Prompt<I, W>, &Answers) -> Result<Value> + 'a,
    {
        self.steps.push(Step { name: name.into(), run: Box::new(step) });
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.name.as_str())
    }

    /// Runs every step and returns the collected answers.
    ///
    /// # Errors
    /// [`Error::DuplicateStep`] before anything is asked when two steps share
    /// a name; otherwise the first error returned by a step, which ends the run.
    pub fn run(mut self, prompt: &mut Prompt<I, W>) -> Result<Answers> {
        if let Some(name) = first_duplicate(&self.steps) {
            return Err(Error::DuplicateStep { name });
        }

        let rule = "=".repeat(BANNER_WIDTH);
        prompt.write(&format!("\n{rule}\n  {}\n{rule}\n\n", self.title))?;

        let total = self.steps.len();
        let mut answers = Answers::new();
        for (index, step) in self.steps.iter_mut().enumerate() {
            prompt.write(&format!("Step {}/{total}: {}\n", index + 1, step.name))?;
            prompt.log(
                Level::Info,
                format_args!("Running step '{}' ({}/{total})", step.name, index + 1),
            );

            let answer = (step.run)(prompt, &answers)?;
            prompt.log(Level::Debug, format_args!("Step '{}' answered", step.name));
            answers.insert(step.name.clone(), answer);
            prompt.write("\n")?;
        }

        prompt.write(&format!("{rule}\n  Setup complete!\n{rule}\n\n"))?;
        Ok(answers)
    }
}

fn first_duplicate<I, W>(steps: &[Step<'_, I, W>]) -> Option<String> {
    let mut seen = HashSet::new();
    steps.iter().find(|step| !seen.insert(step.name.as_str())).map(|step| step.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{testing::*, ConfirmationConfig, TextPromptConfig};
    use serde_json::json;

    #[test]
    fn runs_steps_in_order_and_shares_answers() {
        let mut prompt = prompt_with(&["Ada", "y"]);
        let answers = Wizard::<TestSource, Vec<u8>>::new("Profile")
            .add_step("name", |prompt, _| {
                Ok(Value::from(prompt.text(&TextPromptConfig::new("Name"))?))
            })
            .add_step("greeting", |_, answers| {
                Ok(json!(format!("Hi {}", answers["name"].as_str().unwrap_or_default())))
            })
            .add_step("agree", |prompt, _| {
                Ok(Value::from(prompt.confirm(&ConfirmationConfig::new("Agree?"))?))
            })
            .run(&mut prompt)
            .unwrap();

        assert_eq!(answers.keys().collect::<Vec<_>>(), ["name", "greeting", "agree"]);
        assert_eq!(answers["greeting"], json!("Hi Ada"));
        assert_eq!(answers["agree"], json!(true));

        let output = output_of(&prompt);
        assert!(output.starts_with(&format!("\n{}\n  Profile\n", "=".repeat(40))));
        assert!(output.contains("Step 1/3: name\nName: \nStep 2/3: greeting\n"));
        assert!(output.ends_with("  Setup complete!\n========================================\n\n"));
    }

    #[test]
    fn exposes_title_and_step_names() {
        let wizard = Wizard::<TestSource, Vec<u8>>::new("Profile")
            .add_step("name", |_, _| Ok(Value::Null))
            .add_step("email", |_, _| Ok(Value::Null));
        assert_eq!(wizard.title(), "Profile");
        assert_eq!(wizard.step_names().collect::<Vec<_>>(), ["name", "email"]);
    }

    #[test]
    fn step_logs_never_carry_answers() {
        static LOGS: CaptureLogger = CaptureLogger::new();
        let mut prompt = prompt_with(&["hunter2"]).with_logger(&LOGS);
        let answers = Wizard::<TestSource, Vec<u8>>::new("Login")
            .add_step("pw", |prompt, _| {
                Ok(Value::from(prompt.text(&TextPromptConfig::new("Password").password())?))
            })
            .run(&mut prompt)
            .unwrap();

        assert_eq!(answers["pw"], json!("hunter2"));
        let records = LOGS.records();
        assert!(records.contains(&"roadprompt INFO Running step 'pw' (1/1)".to_string()));
        assert!(records.contains(&"roadprompt DEBUG Step 'pw' answered".to_string()));
        assert!(records.iter().all(|line| !line.contains("hunter2")));
    }

    #[test]
    fn rejects_duplicate_names_before_asking() {
        let mut prompt = prompt_with(&["x"]);
        let result = Wizard::<TestSource, Vec<u8>>::new("Dup")
            .add_step("name", |_, _| Ok(Value::Null))
            .add_step("name", |_, _| Ok(Value::Null))
            .run(&mut prompt);
        assert!(matches!(result, Err(Error::DuplicateStep { name }) if name == "name"));
        assert_eq!(output_of(&prompt), "");
    }

    #[test]
    fn step_error_stops_the_run() {
        let mut prompt = prompt_with(&[]);
        let mut later_ran = false;
        let result = Wizard::<TestSource, Vec<u8>>::new("Eof")
            .add_step("name", |prompt, _| {
                Ok(Value::from(prompt.text(&TextPromptConfig::new("Name"))?))
            })
            .add_step("later", |_, _| {
                later_ran = true;
                Ok(Value::Null)
            })
            .run(&mut prompt);
        assert!(matches!(result, Err(Error::EndOfInput)));
        assert!(!later_ran);
    }
}
