use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The input source was exhausted before a prompt accepted an answer.
    #[error("Input ended before a valid answer was given.")]
    EndOfInput,

    #[error("Invalid validation pattern. Original error: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Malformed prompt arguments, such as an empty choice list.
    #[error("Invalid prompt: {0}.")]
    InvalidPrompt(String),

    #[error("Step '{name}' is registered more than once.")]
    DuplicateStep { name: String },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("No wizard definition found in '{path}'. Tried: {config_files}.")]
    ConfigNotFound { path: String, config_files: String },

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
