use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum length of a strong password, in characters.
pub const STRONG_PASSWORD_MIN_LEN: usize = 8;
/// Minimum length accepted by the sign-in password field.
pub const BASIC_PASSWORD_MIN_LEN: usize = 4;
/// Minimum length of a required text field.
pub const TEXT_MIN_LEN: usize = 2;

/// Outcome of validating one field. Never an error: invalid input is
/// just a result with `is_valid == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// The four independent strong-password checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    Length,
    Case,
    Number,
    Special,
}

impl PasswordRule {
    pub const ALL: [PasswordRule; 4] = [
        PasswordRule::Length,
        PasswordRule::Case,
        PasswordRule::Number,
        PasswordRule::Special,
    ];

    /// Value of the `data-password-rule` hint this check lights up.
    pub fn key(&self) -> &'static str {
        match self {
            PasswordRule::Length => "length",
            PasswordRule::Case => "case",
            PasswordRule::Number => "number",
            PasswordRule::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordRule::Length => "8+ characters",
            PasswordRule::Case => "upper and lower case",
            PasswordRule::Number => "a number",
            PasswordRule::Special => "a special character",
        }
    }

    pub fn test(&self, value: &str) -> bool {
        match self {
            PasswordRule::Length => value.chars().count() >= STRONG_PASSWORD_MIN_LEN,
            PasswordRule::Case => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
            }
            PasswordRule::Number => value.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => value.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

/// Which strong-password checks a value passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordMatches {
    pub length: bool,
    pub case: bool,
    pub number: bool,
    pub special: bool,
}

impl PasswordMatches {
    pub fn evaluate(value: &str) -> Self {
        Self {
            length: PasswordRule::Length.test(value),
            case: PasswordRule::Case.test(value),
            number: PasswordRule::Number.test(value),
            special: PasswordRule::Special.test(value),
        }
    }

    pub fn passed(&self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::Length => self.length,
            PasswordRule::Case => self.case,
            PasswordRule::Number => self.number,
            PasswordRule::Special => self.special,
        }
    }

    /// Number of checks passed, 0 through 4.
    pub fn score(&self) -> u8 {
        PasswordRule::ALL
            .iter()
            .filter(|rule| self.passed(**rule))
            .count() as u8
    }

    pub fn missing(&self) -> impl Iterator<Item = PasswordRule> + '_ {
        PasswordRule::ALL
            .into_iter()
            .filter(move |rule| !self.passed(*rule))
    }
}

/// Strong-password validation plus the data the meter and hints need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    pub result: ValidationResult,
    pub matches: PasswordMatches,
    pub score: u8,
}

pub fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("Email is required.");
    }
    if !EMAIL_PATTERN.is_match(value) {
        return ValidationResult::invalid("Use a valid email like learner@example.com.");
    }
    ValidationResult::valid("Looks good.")
}

/// Checks the raw, untrimmed value: spaces count as special characters.
pub fn validate_strong_password(value: &str) -> PasswordReport {
    let matches = PasswordMatches::evaluate(value);
    let score = matches.score();

    if value.is_empty() {
        return PasswordReport {
            result: ValidationResult::invalid("Password is required."),
            matches,
            score,
        };
    }

    let missing: Vec<&str> = matches.missing().map(|rule| rule.label()).collect();
    let result = if missing.is_empty() {
        ValidationResult::valid("Strong password ready.")
    } else {
        ValidationResult::invalid(format!("Add {}.", missing.join(", ")))
    };

    PasswordReport {
        result,
        matches,
        score,
    }
}

pub fn validate_basic_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("Password is required.");
    }
    if value.chars().count() < BASIC_PASSWORD_MIN_LEN {
        return ValidationResult::invalid("Password must be at least 4 characters.");
    }
    ValidationResult::valid("")
}

pub fn validate_confirm(value: &str, password: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("Confirm your password.");
    }
    if value != password {
        return ValidationResult::invalid("Passwords must match exactly.");
    }
    ValidationResult::valid("Passwords match.")
}

pub fn validate_text(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::invalid("This field is required.");
    }
    if value.chars().count() < TEXT_MIN_LEN {
        return ValidationResult::invalid("Please enter at least two characters.");
    }
    ValidationResult::valid("")
}
