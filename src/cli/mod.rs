pub mod accounts;
pub mod categories;
pub mod clear;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod init;
pub mod recurring;
pub mod tx;

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::settings::{db_path, load_settings};
use crate::store::{Session, SqliteStore};

/// Open the store for the active profile from settings.
pub(crate) fn open_store() -> Result<(SqliteStore, Session)> {
    let settings = load_settings();
    let session = Session::new(settings.profile);
    let store = SqliteStore::open_for(&db_path(), &session)?;
    Ok((store, session))
}

/// Ask before a destructive action; `--yes` skips the prompt.
pub(crate) fn confirm(prompt: &str, yes: bool) -> bool {
    if yes {
        return true;
    }
    print!("{prompt} [y/N] ");
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[derive(Parser)]
#[command(name = "satang", about = "Personal finance tracker for Thai bank and credit-card statements.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up satang: choose a data directory and profile, initialize the database.
    Init {
        /// Path for satang data (default: ~/Documents/satang)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Profile to scope all data to (default: guest)
        #[arg(long)]
        profile: Option<String>,
    },
    /// Manage accounts.
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Manage transactions.
    Tx {
        #[command(subcommand)]
        command: TxCommands,
    },
    /// Manage recurring bill templates.
    Recurring {
        #[command(subcommand)]
        command: RecurringCommands,
    },
    /// Manage the transaction category list.
    Categories {
        #[command(subcommand)]
        command: CategoriesCommands,
    },
    /// Import a bank/credit-card statement CSV.
    Import {
        /// Path to the statement file
        file: String,
    },
    /// Export all transactions as CSV.
    Export {
        /// Output path (default: stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show net worth, expense breakdown and per-bank summary.
    Dashboard {
        /// Restrict to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// Delete every account and transaction for the active profile.
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// Add an account.
    Add {
        name: String,
        #[arg(long)]
        bank: String,
        /// bank, credit or cash
        #[arg(long = "type", default_value = "bank")]
        account_type: String,
        #[arg(long, default_value_t = 0.0)]
        balance: f64,
        /// Credit limit (credit accounts)
        #[arg(long, default_value_t = 0.0)]
        limit: f64,
        #[arg(long)]
        number: Option<String>,
        #[arg(long = "card-type")]
        card_type: Option<String>,
        #[arg(long = "statement-day", default_value_t = 0)]
        statement_day: u32,
        #[arg(long = "due-day", default_value_t = 0)]
        due_day: u32,
        /// Externally tracked debt burden
        #[arg(long = "total-debt", default_value_t = 0.0)]
        total_debt: f64,
    },
    /// List accounts with balances.
    List,
    /// Edit an account's fields.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bank: Option<String>,
        #[arg(long = "type")]
        account_type: Option<String>,
        #[arg(long)]
        balance: Option<f64>,
        #[arg(long)]
        limit: Option<f64>,
        #[arg(long = "total-debt")]
        total_debt: Option<f64>,
        #[arg(long = "statement-day")]
        statement_day: Option<u32>,
        #[arg(long = "due-day")]
        due_day: Option<u32>,
    },
    /// Delete an account. Its transactions are kept.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TxCommands {
    /// Record a transaction and adjust the account balance.
    Add {
        description: String,
        #[arg(long)]
        amount: f64,
        /// Source account id
        #[arg(long)]
        account: i64,
        /// expense, income or transfer
        #[arg(long = "type", default_value = "expense")]
        tx_type: String,
        /// Destination account id (transfers only)
        #[arg(long)]
        to: Option<i64>,
        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "ทั่วไป")]
        category: String,
        /// paid or unpaid
        #[arg(long, default_value = "unpaid")]
        status: String,
    },
    /// List transactions, optionally filtered.
    List {
        /// YYYY-MM
        #[arg(long)]
        month: Option<String>,
        #[arg(long = "type")]
        tx_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Edit a transaction; balances are reverted and reapplied.
    Edit {
        id: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        account: Option<i64>,
        #[arg(long = "type")]
        tx_type: Option<String>,
        #[arg(long)]
        to: Option<i64>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a transaction and revert its balance effect.
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Toggle paid/unpaid.
    Toggle { id: i64 },
}

#[derive(Subcommand)]
pub enum CategoriesCommands {
    /// Add a category.
    Add { name: String },
    /// List categories.
    List,
}

#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring bill template.
    Add {
        description: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        account: i64,
        #[arg(long, default_value = "ทั่วไป")]
        category: String,
        /// Day of month the bill lands on
        #[arg(long, default_value_t = 1)]
        day: u32,
    },
    /// List templates.
    List,
    /// Instantiate a template into this month's unpaid expense.
    Use { id: i64 },
    /// Delete a template.
    Delete { id: i64 },
}
