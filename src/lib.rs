// Bank Console - Core Library
// Exposes all modules for use by the CLI binary and tests

pub mod error;
pub mod console;
pub mod password;
pub mod summation;
pub mod entities;
pub mod session;
pub mod system;
pub mod config;
pub mod app;

// Re-export commonly used types
pub use error::{BankError, BankResult};
pub use console::{Console, parse_number};
pub use password::{PasswordReport, is_strong_password};
pub use summation::sum_until_blank;
pub use entities::{Account, AccountRegistry};
pub use session::{AccountSession, Command, SessionState};
pub use system::{BankingSystem, ManageOutcome};
pub use config::{Cli, StartupAccount};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
