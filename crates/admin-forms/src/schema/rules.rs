use crate::form::FieldErrors;

/// Constraint on a text field
#[derive(Debug, Clone, Copy)]
pub enum TextRule {
    /// At least `min` characters
    MinLength { min: usize, message: &'static str },
    /// One of a fixed set of strings; blank input reports `required`
    OneOf {
        options: &'static [&'static str],
        required: &'static str,
        message: &'static str,
    },
}

impl TextRule {
    pub fn check(&self, input: &str) -> Result<(), &'static str> {
        match self {
            TextRule::MinLength { min, message } => {
                if input.chars().count() >= *min {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
            TextRule::OneOf {
                options,
                required,
                message,
            } => {
                if input.is_empty() {
                    Err(*required)
                } else if options.iter().any(|option| *option == input) {
                    Ok(())
                } else {
                    Err(*message)
                }
            }
        }
    }
}

/// Collects field errors while a schema walks its values
pub struct Checker<F: Ord> {
    errors: FieldErrors<F>,
}

impl<F: Ord + Copy> Checker<F> {
    pub fn new() -> Self {
        Self {
            errors: FieldErrors::default(),
        }
    }

    /// Check a text field, returning whether it passed
    pub fn text(&mut self, field: F, input: &str, rule: TextRule) -> bool {
        match rule.check(input) {
            Ok(()) => true,
            Err(message) => {
                self.errors.insert(field, message);
                false
            }
        }
    }

    /// Require a value to be present
    pub fn required<T: Copy>(&mut self, field: F, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.errors.insert(field, message);
        }
        value
    }

    /// Build the payload when every check passed
    pub fn finish<T>(self, build: impl FnOnce() -> Option<T>) -> Result<T, FieldErrors<F>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        build().ok_or(self.errors)
    }
}

impl<F: Ord + Copy> Default for Checker<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty strings become `None`
pub(crate) fn optional_text(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}
