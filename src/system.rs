// 🏛️ Banking System - the container the console flow drives
//
// Owns the account registry (injected at construction) and exposes the
// three features: password check, summation, account management.

use crate::console::Console;
use crate::entities::{Account, AccountRegistry};
use crate::error::{BankError, BankResult};
use crate::password;
use crate::session::AccountSession;
use crate::summation;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const ACCOUNT_PROMPT: &str = "Enter the account number: ";

/// How a `manage_account` call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageOutcome {
    NotFound,
    Closed,
}

pub struct BankingSystem {
    registry: AccountRegistry,
}

impl BankingSystem {
    pub fn new(registry: AccountRegistry) -> Self {
        BankingSystem { registry }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> AccountRegistry {
        self.registry
    }

    pub fn is_strong_password(&self, password: &str) -> BankResult<bool> {
        password::is_strong_password(password)
    }

    pub fn sum_until_blank<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<f64> {
        summation::sum_until_blank(console)
    }

    /// Construct an account and store it, replacing any account with the
    /// same number. Returns the replaced account.
    pub fn open_account(
        &mut self,
        id: &str,
        owner: &str,
        initial_balance: f64,
        category: &str,
    ) -> BankResult<Option<Account>> {
        let account = Account::new(id, owner, initial_balance, category)?;
        let replaced = self.registry.insert(account);

        if replaced.is_some() {
            tracing::warn!(account_id = %id, "existing account replaced");
        }
        tracing::info!(account_id = %id, owner = %owner, initial_balance, category = %category, "account created");

        Ok(replaced)
    }

    /// `open_account` plus console feedback.
    ///
    /// Returns `Ok(false)` when the account was rejected; the reason has
    /// already been printed and the registry is unchanged.
    pub fn create_account<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        id: &str,
        owner: &str,
        initial_balance: f64,
        category: &str,
    ) -> Result<bool> {
        match self.open_account(id, owner, initial_balance, category) {
            Ok(_) => {
                console.success("Account created successfully.")?;
                Ok(true)
            }
            Err(err) => {
                tracing::warn!(account_id = %id, error = %err, "account rejected");
                console.error(format!("Error: {}", err))?;
                Ok(false)
            }
        }
    }

    /// Ask for an account number and, if it exists, run a management
    /// session on it until `salir`.
    pub fn manage_account<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<ManageOutcome> {
        let id = console.prompt(ACCOUNT_PROMPT)?.unwrap_or_default();

        let Some(account) = self.registry.get_mut(&id) else {
            let err = BankError::AccountNotFound(id.clone());
            tracing::warn!(account_id = %id, "account not found");
            console.error(err)?;
            return Ok(ManageOutcome::NotFound);
        };

        tracing::info!(account_id = %id, "session started");
        AccountSession::new(account).run(console)?;
        tracing::info!(account_id = %id, "session ended");

        match self.registry.to_json() {
            Ok(snapshot) => tracing::debug!(%snapshot, "registry snapshot"),
            Err(err) => tracing::debug!(error = %err, "registry snapshot unavailable"),
        }

        Ok(ManageOutcome::Closed)
    }
}

impl Default for BankingSystem {
    fn default() -> Self {
        Self::new(AccountRegistry::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================
