use crate::{
    choice::Choice,
    cli::{DemoArgs, OutputFormat, RunArgs},
    config::{Config, ConfigV1},
    error::Result,
    prompt::{
        ConfirmationConfig, InputSource, MultipleChoiceConfig, Prompt, SingleChoiceConfig,
        TextPromptConfig,
    },
    renderer::MiniJinjaRenderer,
    validation::Validator,
    wizard::{Answers, Wizard},
};
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Runs a wizard definition and writes the collected answers
pub struct Runner {
    args: RunArgs,
}

impl Runner {
    pub fn new(args: RunArgs) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let config = self.load_and_validate_config()?;
        let renderer = MiniJinjaRenderer::new();

        let mut prompt = Prompt::stdio();
        let answers = config.build_wizard(&renderer).run(&mut prompt)?;
        log::info!("Collected {} answers", answers.len());

        write_answers(&answers, self.args.format, self.args.output.as_deref())
    }

    fn load_and_validate_config(&self) -> Result<ConfigV1> {
        let config = Config::load_config(&self.args.wizard)?.into_v1();
        config.validate()?;
        Ok(config)
    }
}

/// Serializes answers in the requested format.
pub fn format_answers(answers: &Answers, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(answers)?),
        OutputFormat::Yaml => serde_yaml::to_string(answers)?,
    })
}

/// Writes answers to `output`, or to stdout when no file is given.
pub fn write_answers(
    answers: &Answers,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let content = format_answers(answers, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            log::info!("Answers written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// The demonstration flow: a required name, a bounded age, a terms
/// confirmation, a colour with one disabled option and at least one feature.
pub fn demo_wizard<'a, I: InputSource, W: Write>() -> Wizard<'a, I, W> {
    Wizard::new("Roadprompt Demo")
        .add_step("name", |prompt: &mut Prompt<I, W>, _: &Answers| {
            let name = prompt.text(
                &TextPromptConfig::new("What's your name?").validator(Validator::required()),
            )?;
            prompt.write(&format!("Hello, {name}!\n"))?;
            Ok(Value::String(name))
        })
        .add_step("age", |prompt: &mut Prompt<I, W>, _: &Answers| {
            let age = prompt.text(
                &TextPromptConfig::new("How old are you?")
                    .validator(Validator::number(Some(0.0), Some(150.0))),
            )?;
            prompt.write(&format!("You are {age} years old\n"))?;
            Ok(Value::String(age))
        })
        .add_step("terms", |prompt: &mut Prompt<I, W>, _: &Answers| {
            let agreed = prompt
                .confirm(&ConfirmationConfig::new("Do you agree to the terms?").default(false))?;
            prompt.write(&format!("Agreed: {agreed}\n"))?;
            Ok(Value::Bool(agreed))
        })
        .add_step("color", |prompt: &mut Prompt<I, W>, _: &Answers| {
            let choices = vec![
                Choice::new("red", "Red").with_hint("Hot"),
                Choice::new("green", "Green").with_hint("Nature"),
                Choice::new("blue", "Blue").with_hint("Ocean"),
                Choice::new("purple", "Purple").disabled(),
            ];
            let color = prompt.select(&SingleChoiceConfig::new("Pick a color:", choices))?;
            prompt.write(&format!("Selected: {color}\n"))?;
            Ok(Value::from(color))
        })
        .add_step("features", |prompt: &mut Prompt<I, W>, _: &Answers| {
            let choices = vec![
                Choice::new("auth", "Authentication"),
                Choice::new("api", "REST API"),
                Choice::new("db", "Database"),
                Choice::new("cache", "Caching"),
            ];
            let features = prompt.multi_select(
                &MultipleChoiceConfig::new("Select features:", choices).min_select(1),
            )?;
            prompt.write(&format!("Features: {}\n", features.join(", ")))?;
            Ok(Value::from(features))
        })
}

pub fn run(args: RunArgs) -> Result<()> {
    Runner::new(args).run()
}

pub fn run_demo(args: DemoArgs) -> Result<()> {
    log::debug!("Starting demo with verbosity {}", args.verbose);
    let mut prompt = Prompt::stdio();
    let answers = demo_wizard().run(&mut prompt)?;
    write_answers(&answers, OutputFormat::Json, None)
}
