use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bank_console::{app, AccountRegistry, BankingSystem, Cli, Console};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);
    tracing::info!(version = bank_console::VERSION, "starting bank console");

    let mut console = Console::stdio();
    if cli.plain {
        console = console.with_style(false);
    }

    let mut system = BankingSystem::new(AccountRegistry::new());
    app::run(&mut system, &cli.startup_account(), &mut console)?;

    tracing::info!(
        accounts = system.registry().len(),
        total_balance = system.registry().total_balance(),
        "bank console finished"
    );

    Ok(())
}

/// Logs go to stderr so they never interleave with prompts on stdout
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
