mod cli;
mod columns;
mod db;
mod encoding;
mod error;
mod export;
mod fmt;
mod importer;
mod ledger;
mod models;
mod normalize;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{AccountsCommands, CategoriesCommands, Cli, Commands, RecurringCommands, TxCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, profile } => cli::init::run(data_dir, profile),
        Commands::Accounts { command } => match command {
            AccountsCommands::Add {
                name,
                bank,
                account_type,
                balance,
                limit,
                number,
                card_type,
                statement_day,
                due_day,
                total_debt,
            } => cli::accounts::add(
                &name,
                &bank,
                &account_type,
                balance,
                limit,
                number.as_deref(),
                card_type.as_deref(),
                statement_day,
                due_day,
                total_debt,
            ),
            AccountsCommands::List => cli::accounts::list(),
            AccountsCommands::Edit {
                id,
                name,
                bank,
                account_type,
                balance,
                limit,
                total_debt,
                statement_day,
                due_day,
            } => cli::accounts::edit(
                id,
                name.as_deref(),
                bank.as_deref(),
                account_type.as_deref(),
                balance,
                limit,
                total_debt,
                statement_day,
                due_day,
            ),
            AccountsCommands::Delete { id, yes } => cli::accounts::delete(id, yes),
        },
        Commands::Tx { command } => match command {
            TxCommands::Add {
                description,
                amount,
                account,
                tx_type,
                to,
                date,
                category,
                status,
            } => cli::tx::add(
                &description,
                amount,
                account,
                &tx_type,
                to,
                date.as_deref(),
                &category,
                &status,
            ),
            TxCommands::List {
                month,
                tx_type,
                status,
            } => cli::tx::list(month.as_deref(), tx_type.as_deref(), status.as_deref()),
            TxCommands::Edit {
                id,
                description,
                amount,
                account,
                tx_type,
                to,
                date,
                category,
            } => cli::tx::edit(
                id,
                description.as_deref(),
                amount,
                account,
                tx_type.as_deref(),
                to,
                date.as_deref(),
                category.as_deref(),
            ),
            TxCommands::Delete { id, yes } => cli::tx::delete(id, yes),
            TxCommands::Toggle { id } => cli::tx::toggle(id),
        },
        Commands::Recurring { command } => match command {
            RecurringCommands::Add {
                description,
                amount,
                account,
                category,
                day,
            } => cli::recurring::add(&description, amount, account, &category, day),
            RecurringCommands::List => cli::recurring::list(),
            RecurringCommands::Use { id } => cli::recurring::use_item(id),
            RecurringCommands::Delete { id } => cli::recurring::delete(id),
        },
        Commands::Categories { command } => match command {
            CategoriesCommands::Add { name } => cli::categories::add(&name),
            CategoriesCommands::List => cli::categories::list(),
        },
        Commands::Import { file } => cli::import::run(&file),
        Commands::Export { output } => cli::export::run(output.as_deref()),
        Commands::Dashboard { month } => cli::dashboard::run(month.as_deref()),
        Commands::Clear { yes } => cli::clear::run(yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
