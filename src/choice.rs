//! Selectable options for single and multiple choice prompts

/// One option of a choice prompt.
///
/// `value` is what the prompt returns, `label` and `hint` are only displayed.
/// A choice is identified by its position in the list it is presented in.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    value: T,
    label: String,
    disabled: bool,
    hint: String,
}

impl<T> Choice<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self { value, label: label.into(), disabled: false, hint: String::new() }
    }

    /// Marks the choice as displayed but not selectable.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }
}
