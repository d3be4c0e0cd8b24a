/// Field validation rules
///
/// A rule checks one string value and yields a message on failure.
use std::sync::OnceLock;

use regex::Regex;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // Deliberately loose: one '@', at least one '.' in the domain part.
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded pattern"))
}

/// One validation rule for a single field value.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Value must contain at least `min` characters.
    MinLen { min: usize, message: String },

    /// Value must look like an email address.
    Email { message: String },

    /// Value must match the given pattern.
    Pattern { pattern: Regex, message: String },
}

impl FieldRule {
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        FieldRule::MinLen {
            min,
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        FieldRule::Email {
            message: message.into(),
        }
    }

    pub fn pattern(pattern: Regex, message: impl Into<String>) -> Self {
        FieldRule::Pattern {
            pattern,
            message: message.into(),
        }
    }

    /// Check a value against this rule. `None` means the value passes;
    /// otherwise the rule's failure message is returned.
    pub fn check(&self, value: &str) -> Option<&str> {
        match self {
            FieldRule::MinLen { min, message } => {
                (value.chars().count() < *min).then_some(message.as_str())
            }
            FieldRule::Email { message } => {
                (!email_pattern().is_match(value)).then_some(message.as_str())
            }
            FieldRule::Pattern { pattern, message } => {
                (!pattern.is_match(value)).then_some(message.as_str())
            }
        }
    }
}
