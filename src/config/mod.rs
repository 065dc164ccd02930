//! Wizard definitions
//!
//! This module contains the definition system components:
//! - `types`: Basic types and enums used throughout the definition system
//! - `question`: Step definition and rendering logic
//! - `loader`: Definition file loading and parsing

pub mod loader;
pub mod question;
pub mod types;


pub use loader::{Config, ConfigV1};
pub use question::{IntoQuestionType, Question, QuestionRendered};
pub use types::{ChoiceEntry, QuestionType, Type, Validation};
