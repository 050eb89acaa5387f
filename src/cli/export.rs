use std::fs::File;

use crate::cli::open_store;
use crate::error::Result;
use crate::export::export_csv;

pub fn run(output: Option<&str>) -> Result<()> {
    let (store, session) = open_store()?;
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let count = export_csv(&store, &session, file)?;
            println!("Wrote {count} transactions to {path}");
        }
        None => {
            export_csv(&store, &session, std::io::stdout().lock())?;
        }
    }
    Ok(())
}
