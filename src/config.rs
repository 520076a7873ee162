// ⚙️ Command Line Configuration
//
// The demo flow opens one account before the management loop; these flags
// choose its number, owner, opening balance and category.

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bank-console")]
#[command(about = "Password check, running sum and a small in-memory bank", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of the account opened at startup
    #[arg(long, default_value = "123456789")]
    pub account_id: String,

    /// Holder of the account opened at startup
    #[arg(long, default_value = "Juan Pérez")]
    pub owner: String,

    /// Opening balance (must not be negative)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub initial_balance: f64,

    /// Account type label
    #[arg(long, default_value = "Ahorros")]
    pub category: String,

    /// Log filter (RUST_LOG takes precedence), e.g. "info" or "bank_console=debug"
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

/// The account the demo flow creates before the management loop
#[derive(Debug, Clone, PartialEq)]
pub struct StartupAccount {
    pub id: String,
    pub owner: String,
    pub initial_balance: f64,
    pub category: String,
}

impl Cli {
    pub fn startup_account(&self) -> StartupAccount {
        StartupAccount {
            id: self.account_id.clone(),
            owner: self.owner.clone(),
            initial_balance: self.initial_balance,
            category: self.category.clone(),
        }
    }
}

impl Default for StartupAccount {
    fn default() -> Self {
        StartupAccount {
            id: "123456789".to_string(),
            owner: "Juan Pérez".to_string(),
            initial_balance: 1000.0,
            category: "Ahorros".to_string(),
        }
    }
}
