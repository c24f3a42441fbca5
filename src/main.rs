use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::cli::{handle_add_command, handle_month_command, run_session};
use expense_ledger::config::{paths::ExpensePaths, settings::Settings};
use expense_ledger::services::ExpenseSession;
use expense_ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Record expenses into monthly ledgers",
    long_about = "Records expenses as description/amount pairs, keeps a running \
                  total for the current run, and appends every entry to a plain \
                  text ledger for the current calendar month."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter expenses interactively (default)
    Session,

    /// Record a single expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount spent (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show this month's expenses and total
    Month {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the data directories and write the settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    expense_ledger::logging::init_tracing();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut session = ExpenseSession::new(LedgerStore::new(paths.clone()));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = std::io::stdin();
            run_session(&mut session, &settings, &mut stdin.lock(), &mut out)?;
        }
        Commands::Add {
            description,
            amount,
        } => {
            handle_add_command(&mut session, &settings, &description, &amount, &mut out)?;
        }
        Commands::Month { json } => {
            handle_month_command(&session, &settings, json, &mut out)?;
        }
        Commands::Init => {
            writeln!(out, "Initializing expense ledger at: {}", paths.base_dir().display())?;
            paths.ensure_directories()?;
            settings.save(&paths)?;
            writeln!(out, "Ledger directory: {}", paths.ledger_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out, "Initialization complete!")?;
        }
        Commands::Config => {
            writeln!(out, "Expense Ledger Configuration")?;
            writeln!(out, "============================")?;
            writeln!(out, "Base directory:   {}", paths.base_dir().display())?;
            writeln!(out, "Ledger directory: {}", paths.ledger_dir().display())?;
            writeln!(out, "Settings file:    {}", paths.settings_file().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Currency symbol:      {}", settings.currency_symbol)?;
            writeln!(out, "  Report skipped lines: {}", settings.report_skipped_lines)?;
        }
    }

    Ok(())
}
