//! Field validation for the auth forms.
//!
//! Every rule returns a [`ValidationResult`]; nothing here fails. Whether a
//! result is shown is decided by [`FieldDisplay::for_result`] from the event
//! that triggered validation.

pub mod rules;
pub mod strength;

pub use rules::{
    PasswordMatches, PasswordReport, PasswordRule, ValidationResult, validate_basic_password,
    validate_confirm, validate_email, validate_strong_password, validate_text,
};
pub use strength::{StrengthMeter, StrengthTier};

/// Validation rule attached to an input (`data-validate`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Email,
    Password,
    PasswordBasic,
    Confirm,
    Text,
}

impl Rule {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Rule::Email),
            "password" => Some(Rule::Password),
            "password-basic" => Some(Rule::PasswordBasic),
            "confirm" => Some(Rule::Confirm),
            "text" => Some(Rule::Text),
            _ => None,
        }
    }

    pub fn attr(&self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Password => "password",
            Rule::PasswordBasic => "password-basic",
            Rule::Confirm => "confirm",
            Rule::Text => "text",
        }
    }

    /// Run the rule. `paired` is the password a confirm field must equal;
    /// other rules ignore it. Strong passwords are checked untrimmed.
    pub fn check(&self, value: &str, paired: &str) -> ValidationResult {
        let trimmed = value.trim();
        match self {
            Rule::Email => validate_email(trimmed),
            Rule::Password => validate_strong_password(value).result,
            Rule::PasswordBasic => validate_basic_password(trimmed),
            Rule::Confirm => validate_confirm(value, paired),
            Rule::Text => validate_text(trimmed),
        }
    }
}

/// Event that caused a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Keystroke. Empty fields stay quiet so errors don't flash mid-typing.
    Input,
    Change,
    Blur,
    /// Submit-time reveal of every field.
    Submit,
}

impl Trigger {
    pub fn force(&self) -> bool {
        !matches!(self, Trigger::Input)
    }
}

/// What the input group shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldDisplay {
    #[default]
    Cleared,
    Valid(String),
    Invalid(String),
}

impl FieldDisplay {
    pub fn for_result(result: &ValidationResult, value: &str, force: bool) -> Self {
        if !force && value.trim().is_empty() {
            return FieldDisplay::Cleared;
        }
        if result.is_valid {
            FieldDisplay::Valid(result.message.clone())
        } else {
            FieldDisplay::Invalid(result.message.clone())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldDisplay::Cleared => "",
            FieldDisplay::Valid(m) | FieldDisplay::Invalid(m) => m,
        }
    }

    /// `aria-invalid` value.
    pub fn aria_invalid(&self) -> bool {
        matches!(self, FieldDisplay::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_attributes_round_trip() {
        for rule in [
            Rule::Email,
            Rule::Password,
            Rule::PasswordBasic,
            Rule::Confirm,
            Rule::Text,
        ] {
            assert_eq!(Rule::from_attr(rule.attr()), Some(rule));
        }
        assert_eq!(Rule::from_attr("phone"), None);
    }

    #[test]
    fn empty_field_stays_quiet_until_forced() {
        let result = Rule::Email.check("  ", "");
        assert_eq!(
            FieldDisplay::for_result(&result, "  ", Trigger::Input.force()),
            FieldDisplay::Cleared
        );
        assert_eq!(
            FieldDisplay::for_result(&result, "  ", Trigger::Blur.force()),
            FieldDisplay::Invalid("Email is required.".to_string())
        );
    }

    #[test]
    fn typed_value_shows_feedback_on_input() {
        let result = Rule::Email.check("learner@", "");
        let display = FieldDisplay::for_result(&result, "learner@", false);
        assert!(display.aria_invalid());
        assert_eq!(display.message(), "Use a valid email like learner@example.com.");
    }
}
