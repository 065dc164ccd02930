/// Handles argument parsing and command dispatch.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Shared constants and user-facing messages.
pub mod constants;

/// Template rendering for help texts, defaults and conditions.
pub mod renderer;

/// Interactive prompt engine.
pub mod prompt;

/// Selectable options shown by choice prompts.
pub mod choice;

/// Wizard definition handling.
pub mod config;

/// Answer validators
pub mod validation;

/// Multi-step guided flows.
pub mod wizard;
