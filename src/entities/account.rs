// 💳 Account Entity - identifier, owner, balance, category
//
// The balance is the only value that changes after construction, and it
// never goes below zero:
// - construction rejects a negative opening balance
// - withdraw rejects an amount larger than the balance
//
// The registry owns every account by value, keyed by account number.

use crate::error::{BankError, BankResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// Account number (unique key in the registry)
    id: String,

    /// Account holder
    owner: String,

    /// Current balance, always >= 0
    balance: f64,

    /// Free-form label ("Ahorros", "Savings", "Checking", ...)
    category: String,

    /// When this record was constructed
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account. Fails if the opening balance is negative.
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: f64,
        category: impl Into<String>,
    ) -> BankResult<Self> {
        if !initial_balance.is_finite() {
            return Err(BankError::InvalidAmount(initial_balance.to_string()));
        }
        if initial_balance < 0.0 {
            return Err(BankError::NegativeInitialBalance(initial_balance));
        }

        Ok(Account {
            id: id.into(),
            owner: owner.into(),
            balance: initial_balance,
            category: category.into(),
            opened_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Add `amount` to the balance, returning the new balance.
    ///
    /// A deposit that would overflow the balance is rejected unchanged.
    pub fn deposit(&mut self, amount: f64) -> BankResult<f64> {
        check_amount(amount)?;

        let balance = self.balance + amount;
        if !balance.is_finite() {
            return Err(BankError::InvalidAmount(amount.to_string()));
        }

        self.balance = balance;
        Ok(self.balance)
    }

    /// Take `amount` out of the balance, returning the new balance.
    ///
    /// Withdrawing more than the balance leaves it untouched and
    /// returns `InsufficientFunds`.
    pub fn withdraw(&mut self, amount: f64) -> BankResult<f64> {
        check_amount(amount)?;

        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}

fn check_amount(amount: f64) -> BankResult<()> {
    if !amount.is_finite() {
        return Err(BankError::InvalidAmount(amount.to_string()));
    }
    if amount <= 0.0 {
        return Err(BankError::NonPositiveAmount(amount));
    }
    Ok(())
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account number: {}", self.id)?;
        writeln!(f, "Owner: {}", self.owner)?;
        writeln!(f, "Current balance: {}", self.balance)?;
        write!(f, "Account type: {}", self.category)
    }
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

/// All accounts known to the running session, keyed by account number.
///
/// Inserting an existing number replaces the previous record.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        AccountRegistry {
            accounts: HashMap::new(),
        }
    }

    /// Store an account, returning the record it replaced (if any)
    pub fn insert(&mut self, account: Account) -> Option<Account> {
        self.accounts.insert(account.id.clone(), account)
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts, sorted by account number
    pub fn all_accounts(&self) -> Vec<&Account> {
        let mut all: Vec<&Account> = self.accounts.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Sum of every balance
    pub fn total_balance(&self) -> f64 {
        self.accounts.values().map(|acc| acc.balance).sum()
    }

    /// Pretty JSON array of all accounts (sorted by account number)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.all_accounts())
    }
}

// ============================================================================
// TESTS
// ============================================================================
