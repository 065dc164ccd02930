//! Wizard definition loading and management

use crate::config::question::Question;
use crate::config::types::Type;
use crate::constants::{CONFIG_FILENAMES, DEFAULT_WIZARD_TITLE};
use crate::error::{Error, Result};
use crate::prompt::InputSource;
use crate::renderer::MiniJinjaRenderer;
use crate::validation::Validator;
use crate::wizard::Wizard;
use indexmap::IndexMap;
use serde::Deserialize;
use std::io::Write;
use std::path::Path;

/// Main definition structure holding all steps
#[derive(Debug, Deserialize)]
pub struct ConfigV1 {
    #[serde(default = "get_default_title")]
    pub title: String,
    #[serde(default)]
    pub steps: IndexMap<String, Question>,
}

impl ConfigV1 {
    pub fn validate(&self) -> Result<(), Error> {
        for (name, question) in &self.steps {
            if question.r#type == Type::Bool && !question.choices.is_empty() {
                return Err(Error::ConfigValidation(format!(
                    "step '{name}' is a bool question and cannot have choices"
                )));
            }
            if let Some(max) = question.max_select.filter(|&max| max > 0) {
                if question.min_select > max {
                    return Err(Error::ConfigValidation(format!(
                        "step '{name}' requires at least {} selections but allows at most {max}",
                        question.min_select
                    )));
                }
            }
            if let Some(pattern) = &question.validation.pattern {
                Validator::pattern(pattern, None).map_err(|e| {
                    Error::ConfigValidation(format!("step '{name}' has an invalid pattern: {e}"))
                })?;
            }
        }
        Ok(())
    }

    /// Turns every step into a wizard step asking its question.
    pub fn build_wizard<'a, I: InputSource, W: Write>(
        &'a self,
        renderer: &'a MiniJinjaRenderer,
    ) -> Wizard<'a, I, W> {
        self.steps.iter().fold(Wizard::new(&self.title), |wizard, (name, question)| {
            wizard.add_step(name.clone(), move |prompt, answers| {
                question.ask(prompt, answers, renderer)
            })
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum Config {
    #[serde(rename = "v1")]
    V1(ConfigV1),
}

impl Config {
    /// Loads a definition from a file, or from the first known file name
    /// found in a directory.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.is_file() {
            return Self::load_file(path);
        }

        if path.is_dir() {
            for config_file_name in CONFIG_FILENAMES.iter() {
                let config_file_path = path.join(config_file_name);
                if config_file_path.exists() {
                    return Self::load_file(&config_file_path);
                }
            }
        }

        Err(Error::ConfigNotFound {
            path: path.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Loading wizard definition from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        Ok(config)
    }

    pub fn into_v1(self) -> ConfigV1 {
        match self {
            Config::V1(config) => config,
        }
    }
}

fn get_default_title() -> String {
    DEFAULT_WIZARD_TITLE.to_string()
}
