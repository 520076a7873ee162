// ▶️ Demo Flow - password → sum → create account → manage account
//
// Every step reports its own failures and the flow moves on; only I/O
// errors stop it.

use crate::config::StartupAccount;
use crate::console::Console;
use crate::password::PasswordReport;
use crate::system::BankingSystem;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const PASSWORD_PROMPT: &str = "Enter a password: ";

pub fn run<R: BufRead, W: Write>(
    system: &mut BankingSystem,
    startup: &StartupAccount,
    console: &mut Console<R, W>,
) -> Result<()> {
    // 1. Password
    let password = console.prompt(PASSWORD_PROMPT)?.unwrap_or_default();
    check_password(&password, console)?;

    // 2. Running sum
    let total = system.sum_until_blank(console)?;
    console.say(format!("The total is: {}", total))?;

    // 3. Startup account
    system.create_account(
        console,
        &startup.id,
        &startup.owner,
        startup.initial_balance,
        &startup.category,
    )?;
    if let Some(account) = system.registry().get(&startup.id) {
        console.say(account)?;
    }

    // 4. Management loop
    system.manage_account(console)?;

    Ok(())
}

fn check_password<R: BufRead, W: Write>(password: &str, console: &mut Console<R, W>) -> Result<()> {
    match PasswordReport::evaluate(password) {
        Ok(report) if report.is_strong() => console.success("The password is strong."),
        Ok(report) => console.error(format!(
            "The password is not strong. Missing: {}.",
            report.missing().join(", ")
        )),
        Err(err) => {
            tracing::warn!(error = %err, "password rejected");
            console.error(format!("Error: {}", err))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
