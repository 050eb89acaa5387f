use std::path::Path;

use colored::Colorize;

use crate::cli::open_store;
use crate::error::Result;
use crate::importer::import_file;

pub fn run(file: &str) -> Result<()> {
    let (store, session) = open_store()?;
    let report = import_file(&store, &session, Path::new(file))?;
    println!(
        "{} {} new accounts, {} updated, {} transactions",
        "Imported:".green().bold(),
        report.accounts_created,
        report.accounts_updated,
        report.transactions_imported
    );
    if report.total() == 0 {
        println!("Nothing recognized in {file}.");
    }
    Ok(())
}
