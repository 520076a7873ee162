// 🔐 Password Strength - three character classes, all required
//
// A password is strong when it has at least one uppercase letter,
// one lowercase letter and one decimal digit (0-9). No length rule beyond
// non-empty. Fractions and roman numerals are not digits.

use crate::error::{BankError, BankResult};

// ============================================================================
// PASSWORD REPORT
// ============================================================================

/// Which character classes a password contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordReport {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
}

impl PasswordReport {
    /// Scan the password once, recording each class seen
    pub fn evaluate(password: &str) -> BankResult<Self> {
        if password.is_empty() {
            return Err(BankError::EmptyPassword);
        }

        let report = password.chars().fold(PasswordReport::default(), |mut acc, c| {
            acc.has_uppercase |= c.is_uppercase();
            acc.has_lowercase |= c.is_lowercase();
            acc.has_digit |= c.is_ascii_digit();
            acc
        });

        Ok(report)
    }

    pub fn is_strong(&self) -> bool {
        self.has_uppercase && self.has_lowercase && self.has_digit
    }

    /// Human-readable names of the missing classes
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_uppercase {
            missing.push("an uppercase letter");
        }
        if !self.has_lowercase {
            missing.push("a lowercase letter");
        }
        if !self.has_digit {
            missing.push("a digit");
        }
        missing
    }
}

/// True iff the password mixes uppercase, lowercase and digits.
///
/// An empty password is a precondition violation, not a weak password.
pub fn is_strong_password(password: &str) -> BankResult<bool> {
    PasswordReport::evaluate(password).map(|report| report.is_strong())
}

// ============================================================================
// TESTS
// ============================================================================
