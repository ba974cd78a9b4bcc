use super::rules::PasswordRule;

const LABELS: [&str; 5] = [
    "Add at least 8 characters.",
    "Add uppercase and lowercase letters.",
    "Add a number or special character.",
    "Almost there — include any missing rule.",
    "Strong password ready.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    /// CSS custom property the meter bar is painted with.
    pub fn color_var(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "--accent-danger",
            StrengthTier::Medium => "--accent-highlight",
            StrengthTier::Strong => "--accent-success",
        }
    }
}

/// Password strength meter state for a score of 0..=4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthMeter {
    pub score: u8,
    pub percent: u8,
    pub tier: StrengthTier,
    pub label: &'static str,
}

impl StrengthMeter {
    pub fn from_score(score: u8) -> Self {
        let rules = PasswordRule::ALL.len() as u32;
        let percent = (u32::from(score) * 100 / rules).min(100) as u8;

        let tier = if usize::from(score) >= PasswordRule::ALL.len() {
            StrengthTier::Strong
        } else if score >= 2 {
            StrengthTier::Medium
        } else {
            StrengthTier::Weak
        };

        Self {
            score,
            percent,
            tier,
            label: LABELS[usize::from(score).min(LABELS.len() - 1)],
        }
    }
}

impl Default for StrengthMeter {
    fn default() -> Self {
        Self::from_score(0)
    }
}
