// ⚠️ Domain Errors - validation failures and business-rule rejections
//
// Precondition violations (empty password, negative opening balance,
// non-positive amount) abort the operation before any state changes.
// Business-rule rejections (insufficient funds, unknown account) are
// reported and the caller's loop keeps going.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Initial balance cannot be negative: {0}")]
    NegativeInitialBalance(f64),

    #[error("Amount must be positive: {0}")]
    NonPositiveAmount(f64),

    #[error("Insufficient funds to withdraw {requested}. Current balance: {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Account number not found: {0}")]
    AccountNotFound(String),

    #[error("Not a valid number: {0:?}")]
    InvalidAmount(String),
}

impl BankError {
    /// Precondition violations vs. business-rule rejections
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BankError::EmptyPassword
                | BankError::NegativeInitialBalance(_)
                | BankError::NonPositiveAmount(_)
                | BankError::InvalidAmount(_)
        )
    }
}

pub type BankResult<T> = Result<T, BankError>;
