use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendlog::cli::{handle_expense_command, handle_summary_command, ExpenseCommands};
use spendlog::config::{SpendlogPaths, Settings};
use spendlog::services::Ledger;
use spendlog::storage::ExpenseRepository;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense ledger",
    long_about = "spendlog records discrete spending events and derives summaries \
                  from them: the running total against a budget limit, totals per \
                  category, and spending over time."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Show the spend summary (totals, categories, over time)
    Summary,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let repository = ExpenseRepository::new(paths.expenses_file());
    let mut ledger = Ledger::open(repository);

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&mut ledger, cmd)?,
        Commands::Summary => handle_summary_command(&ledger, &settings)?,
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense store:  {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!(
                "Budget limit:   {}",
                settings
                    .budget_limit
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("Expenses:       {}", ledger.len());
        }
    }

    Ok(())
}
