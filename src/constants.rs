//! Constants used throughout roadprompt

/// Wizard definition file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["wizard.json", "wizard.yaml", "wizard.yml"];

/// Default wizard title
pub const DEFAULT_WIZARD_TITLE: &str = "Setup Wizard";

/// Log target used by the prompt engine
pub const LOG_TARGET: &str = "roadprompt";

/// Trailing character that asks an autocomplete prompt for suggestions
pub const SUGGESTION_MARKER: char = '\t';

/// Maximum number of suggestions shown per request
pub const MAX_SUGGESTIONS: usize = 5;

/// Answers accepted as "yes" by confirmation prompts (compared lowercased)
pub const TRUTHY_ANSWERS: &[&str] = &["y", "yes", "true", "1"];

/// Width of the wizard banner rule
pub const BANNER_WIDTH: usize = 40;

/// User-facing diagnostics
pub mod messages {
    pub const REQUIRED: &str = "This field is required";
    pub const INVALID_FORMAT: &str = "Invalid format";
    pub const INVALID_EMAIL: &str = "Invalid email address";
    pub const NOT_A_NUMBER: &str = "Must be a number";
    pub const INVALID_SELECTION: &str = "Invalid selection";
    pub const OPTION_DISABLED: &str = "This option is disabled";
    pub const INVALID_INPUT: &str = "Invalid input";
    pub const INVALID_ANSWER: &str = "Invalid answer";
}

/// Regex used by the email validator
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
