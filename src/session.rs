// 🏦 Account Session - interactive deposit / withdraw / balance loop
//
// States: AwaitingCommand → (d | r | s | anything else) → AwaitingCommand
//         AwaitingCommand → salir → Terminated
//
// End of input counts as `salir`.

use crate::console::Console;
use crate::entities::Account;
use crate::error::BankError;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const COMMAND_PROMPT: &str =
    "Deposit (d), withdraw (r) or check balance (s)? ('salir' to finish): ";
pub const DEPOSIT_PROMPT: &str = "Enter the amount to deposit: ";
pub const WITHDRAW_PROMPT: &str = "Enter the amount to withdraw: ";

// ============================================================================
// COMMANDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Deposit,
    Withdraw,
    Balance,
    Exit,
    Invalid(String),
}

impl Command {
    /// Parse a command token (case-insensitive, otherwise exact)
    pub fn parse(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "d" => Command::Deposit,
            "r" => Command::Withdraw,
            "s" => Command::Balance,
            "salir" => Command::Exit,
            _ => Command::Invalid(input.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Command::Deposit => "d",
            Command::Withdraw => "r",
            Command::Balance => "s",
            Command::Exit => "salir",
            Command::Invalid(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCommand,
    Terminated,
}

// ============================================================================
// SESSION
// ============================================================================

/// One management session over a single account
pub struct AccountSession<'a> {
    account: &'a mut Account,
    state: SessionState,
}

impl<'a> AccountSession<'a> {
    pub fn new(account: &'a mut Account) -> Self {
        AccountSession {
            account,
            state: SessionState::AwaitingCommand,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn account(&self) -> &Account {
        self.account
    }

    /// Read and apply commands until `salir` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        while self.state == SessionState::AwaitingCommand {
            let command = match console.prompt(COMMAND_PROMPT)? {
                Some(line) => Command::parse(&line),
                None => Command::Exit,
            };
            self.step(command, console)?;
        }
        Ok(())
    }

    /// Apply one command and return the resulting state
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        tracing::debug!(account_id = %self.account.id(), command = %command.token(), "command");

        match command {
            Command::Deposit => {
                if let Some(amount) = console.prompt_number(DEPOSIT_PROMPT)? {
                    match self.account.deposit(amount) {
                        Ok(balance) => {
                            tracing::info!(account_id = %self.account.id(), amount, balance, "deposit");
                            console.success(format!(
                                "Deposited {}. New balance: {}",
                                amount, balance
                            ))?;
                        }
                        Err(err) => self.reject(console, &err)?,
                    }
                }
            }
            Command::Withdraw => {
                if let Some(amount) = console.prompt_number(WITHDRAW_PROMPT)? {
                    match self.account.withdraw(amount) {
                        Ok(balance) => {
                            tracing::info!(account_id = %self.account.id(), amount, balance, "withdrawal");
                            console.success(format!(
                                "Withdrew {}. New balance: {}",
                                amount, balance
                            ))?;
                        }
                        Err(err) => self.reject(console, &err)?,
                    }
                }
            }
            Command::Balance => {
                console.say(format!("Current balance: {}", self.account.balance()))?;
            }
            Command::Exit => {
                self.state = SessionState::Terminated;
            }
            Command::Invalid(raw) => {
                tracing::warn!(input = %raw, "invalid action");
                console.error("Invalid action.")?;
            }
        }

        Ok(self.state)
    }

    fn reject<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        err: &BankError,
    ) -> Result<()> {
        tracing::warn!(
            account_id = %self.account.id(),
            error = %err,
            precondition = err.is_precondition(),
            "operation rejected"
        );
        console.error(err)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn scripted(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &TestConsole) -> String {
        String::from_utf8_lossy(console.writer()).into_owned()
    }

    fn account(balance: f64) -> Account {
        Account::new("A1", "Jane", balance, "Savings").unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("d"), Command::Deposit);
        assert_eq!(Command::parse("R"), Command::Withdraw);
        assert_eq!(Command::parse("S"), Command::Balance);
        assert_eq!(Command::parse(" s "), Command::Invalid(" s ".to_string()));
        assert_eq!(Command::parse("SALIR"), Command::Exit);
        assert_eq!(Command::parse("x"), Command::Invalid("x".to_string()));
        assert_eq!(Command::parse(""), Command::Invalid(String::new()));
        assert_eq!(Command::parse("deposit"), Command::Invalid("deposit".to_string()));
    }

    #[test]
    fn test_command_token() {
        assert_eq!(Command::Exit.token(), "salir");
        assert_eq!(Command::Invalid("zz".to_string()).token(), "zz");
    }

    #[test]
    fn test_deposit_then_exit() {
        let mut acc = account(100.0);
        let mut console = scripted("d\n50\nsalir\n");
        let mut session = AccountSession::new(&mut acc);

        session.run(&mut console).unwrap();

        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(acc.balance(), 150.0);
        assert!(output(&console).contains("Deposited 50. New balance: 150"));
    }

    #[test]
    fn test_withdraw_and_query() {
        let mut acc = account(100.0);
        let mut console = scripted("r\n30\ns\nsalir\n");
        AccountSession::new(&mut acc).run(&mut console).unwrap();

        let out = output(&console);
        assert!(out.contains("Withdrew 30. New balance: 70"));
        assert!(out.contains("Current balance: 70"));
        assert_eq!(acc.balance(), 70.0);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut acc = account(50.0);
        let mut console = scripted("r\n100\nsalir\n");
        AccountSession::new(&mut acc).run(&mut console).unwrap();

        assert_eq!(acc.balance(), 50.0);
        assert!(output(&console).contains("Insufficient funds to withdraw 100. Current balance: 50"));
    }

    #[test]
    fn test_invalid_action_keeps_awaiting() {
        let mut acc = account(100.0);
        let mut console = scripted("");
        let mut session = AccountSession::new(&mut acc);

        let state = session
            .step(Command::Invalid("x".to_string()), &mut console)
            .unwrap();

        assert_eq!(state, SessionState::AwaitingCommand);
        assert_eq!(session.account().balance(), 100.0);
        assert_eq!(output(&console), "Invalid action.\n");
    }

    #[test]
    fn test_non_positive_amount_is_reported() {
        let mut acc = account(100.0);
        let mut console = scripted("d\n-5\nr\n0\nsalir\n");
        AccountSession::new(&mut acc).run(&mut console).unwrap();

        let out = output(&console);
        assert_eq!(out.matches("Amount must be positive").count(), 2);
        assert_eq!(acc.balance(), 100.0);
    }

    #[test]
    fn test_malformed_amount_is_reprompted() {
        let mut acc = account(100.0);
        let mut console = scripted("d\nten\n10\nsalir\n");
        AccountSession::new(&mut acc).run(&mut console).unwrap();

        let out = output(&console);
        assert_eq!(out.matches(DEPOSIT_PROMPT).count(), 2);
        assert!(out.contains("Error: Not a valid number"));
        assert_eq!(acc.balance(), 110.0);
    }

    #[test]
    fn test_padded_command_is_invalid() {
        let mut acc = account(100.0);
        let mut console = scripted("d 
Salir
");
        let mut session = AccountSession::new(&mut acc);

        session.run(&mut console).unwrap();

        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(output(&console).matches("Invalid action.").count(), 1);
        assert!(!output(&console).contains(DEPOSIT_PROMPT));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let mut acc = account(100.0);
        let mut console = scripted("s\n");
        let mut session = AccountSession::new(&mut acc);

        session.run(&mut console).unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
    }

    #[test]
    fn test_end_of_input_during_amount_prompt() {
        let mut acc = account(100.0);
        let mut console = scripted("d\n");
        let mut session = AccountSession::new(&mut acc);

        session.run(&mut console).unwrap();
        assert_eq!(session.state(), SessionState::Terminated);
        assert_eq!(acc.balance(), 100.0);
    }

    #[test]
    fn test_terminated_session_ignores_commands() {
        let mut acc = account(100.0);
        let mut console = scripted("");
        let mut session = AccountSession::new(&mut acc);

        session.step(Command::Exit, &mut console).unwrap();
        let state = session.step(Command::Balance, &mut console).unwrap();

        assert_eq!(state, SessionState::Terminated);
        assert!(output(&console).is_empty());
    }
}
