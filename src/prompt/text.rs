use super::{AutocompleteConfig, InputSource, Prompt, TextPromptConfig};
use crate::{
    constants::{MAX_SUGGESTIONS, SUGGESTION_MARKER},
    error::Result,
    validation::{validate_all, Validator},
};
use log::Level;
use std::io::Write;

impl<I: InputSource, W: Write> Prompt<I, W> {
    /// Asks for free text until the validator chain accepts it.
    ///
    /// An empty answer is replaced by the default when one is configured, and
    /// the default then goes through the validators like typed input would.
    pub fn text(&mut self, config: &TextPromptConfig) -> Result<String> {
        let question = if config.default.is_empty() {
            format!("{}: ", config.message)
        } else {
            format!("{} [{}]: ", config.message, config.default)
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            self.write(&question)?;

            let mut value =
                if config.password { self.read_secret()? } else { self.read_line()? };
            if value.is_empty() && !config.default.is_empty() {
                value = config.default.clone();
            }

            if self.accepts(&config.message, attempt, &config.validators, &value)? {
                return Ok(value);
            }
        }
    }

    /// Asks for free text, listing matching suggestions on request.
    ///
    /// A line ending in a tab is a request for suggestions starting with the
    /// text before it; it is answered and the question is asked again without
    /// counting as an attempt.
    pub fn autocomplete(&mut self, config: &AutocompleteConfig) -> Result<String> {
        let question = format!("{} (tab for suggestions): ", config.message);

        let mut attempt = 0;
        loop {
            self.write(&question)?;
            let value = self.read_line()?;

            if value.ends_with(SUGGESTION_MARKER) {
                let prefix = value.trim_end_matches(SUGGESTION_MARKER);
                let matches: Vec<&str> = config
                    .suggestions
                    .iter()
                    .map(String::as_str)
                    .filter(|suggestion| suggestion.starts_with(prefix))
                    .take(MAX_SUGGESTIONS)
                    .collect();
                self.log(
                    Level::Debug,
                    format_args!("suggestions for {prefix:?}: {}", matches.len()),
                );
                if !matches.is_empty() {
                    self.write(&format!("  Suggestions: {}\n", matches.join(", ")))?;
                }
                continue;
            }

            attempt += 1;
            if self.accepts(&config.message, attempt, &config.validators, &value)? {
                return Ok(value);
            }
        }
    }

    /// Runs the chain, explaining the first failure to the user.
    fn accepts(
        &mut self,
        message: &str,
        attempt: usize,
        validators: &[Validator],
        value: &str,
    ) -> Result<bool> {
        let result = validate_all(validators, value);
        if !result.valid {
            self.log_rejection(message, attempt, &result.message);
            self.reject(&result.message)?;
        }
        Ok(result.valid)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::Error,
        prompt::{testing::*, AutocompleteConfig, TextPromptConfig},
        validation::Validator,
    };

    fn suggestions() -> Vec<String> {
        ["main", "maintenance", "master", "develop", "mainline", "mainframe", "maintainer"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn returns_first_line_without_validators() {
        let mut prompt = prompt_with(&["  spaced  ", "ignored"]);
        let answer = prompt.text(&TextPromptConfig::new("Name")).unwrap();
        assert_eq!(answer, "  spaced  ");
        assert_eq!(output_of(&prompt), "Name: ");
    }

    #[test]
    fn substitutes_default_for_empty_input() {
        let mut prompt = prompt_with(&[""]);
        let answer = prompt.text(&TextPromptConfig::new("Name").default("anon")).unwrap();
        assert_eq!(answer, "anon");
        assert_eq!(output_of(&prompt), "Name [anon]: ");
    }

    #[test]
    fn typed_input_wins_over_default() {
        let mut prompt = prompt_with(&["bob"]);
        let answer = prompt.text(&TextPromptConfig::new("Name").default("anon")).unwrap();
        assert_eq!(answer, "bob");
    }

    #[test]
    fn retries_until_chain_passes() {
        let mut prompt = prompt_with(&["", "ab", "abcd"]);
        let config = TextPromptConfig::new("Code")
            .validator(Validator::required())
            .validator(Validator::min_length(3));
        assert_eq!(prompt.text(&config).unwrap(), "abcd");
        assert_eq!(
            output_of(&prompt),
            "Code:   ✗ This field is required\nCode:   ✗ Minimum length is 3\nCode: "
        );
    }

    #[test]
    fn default_is_validated_too() {
        let mut prompt = prompt_with(&["", "42"]);
        let config = TextPromptConfig::new("Age")
            .default("old")
            .validator(Validator::number(Some(0.0), Some(150.0)));
        assert_eq!(prompt.text(&config).unwrap(), "42");
        assert!(output_of(&prompt).contains("✗ Must be a number"));
    }

    #[test]
    fn password_reads_secret_line() {
        let mut prompt = prompt_with(&["s3cret"]);
        let answer = prompt.text(&TextPromptConfig::new("Password").password()).unwrap();
        assert_eq!(answer, "s3cret");
    }

    #[test]
    fn end_of_input_aborts_the_loop() {
        let mut prompt = prompt_with(&[""]);
        let config = TextPromptConfig::new("Name").validator(Validator::required());
        assert!(matches!(prompt.text(&config), Err(Error::EndOfInput)));
    }

    #[test]
    fn autocomplete_lists_at_most_five_prefix_matches() {
        let mut prompt = prompt_with(&["mai\t", "main"]);
        let config = AutocompleteConfig::new("Branch", suggestions());
        assert_eq!(prompt.autocomplete(&config).unwrap(), "main");
        assert_eq!(
            output_of(&prompt),
            "Branch (tab for suggestions):   Suggestions: main, maintenance, mainline, mainframe, maintainer\n\
             Branch (tab for suggestions): "
        );
    }

    #[test]
    fn autocomplete_is_case_sensitive_and_silent_without_matches() {
        let mut prompt = prompt_with(&["Dev\t", "develop"]);
        let config = AutocompleteConfig::new("Branch", suggestions());
        assert_eq!(prompt.autocomplete(&config).unwrap(), "develop");
        assert!(!output_of(&prompt).contains("Suggestions"));
    }

    #[test]
    fn autocomplete_request_skips_validation() {
        let mut prompt = prompt_with(&["\t", "", "dev"]);
        let config =
            AutocompleteConfig::new("Branch", suggestions()).validator(Validator::required());
        assert_eq!(prompt.autocomplete(&config).unwrap(), "dev");
        let output = output_of(&prompt);
        assert_eq!(output.matches("✗ This field is required").count(), 1);
        assert!(output.contains("Suggestions: main, maintenance, master, develop, mainline\n"));
    }
}
