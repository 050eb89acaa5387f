use std::collections::HashMap;
use std::io::Write;

use crate::error::Result;
use crate::store::{Session, Store};

pub const EXPORT_HEADER: [&str; 8] = [
    "Date", "Type", "Description", "Amount", "Account", "Bank", "Status", "Category",
];

/// Write every transaction, newest first, as UTF-8 CSV with a fixed column
/// order. Transactions whose account has since been deleted export with blank
/// account and bank columns.
pub fn export_csv<W: Write>(store: &dyn Store, session: &Session, out: W) -> Result<usize> {
    let accounts: HashMap<i64, (String, String)> = store
        .accounts(session)?
        .into_iter()
        .map(|a| (a.id, (a.name, a.bank)))
        .collect();

    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(EXPORT_HEADER)?;
    let transactions = store.transactions(session)?;
    for tx in &transactions {
        let (name, bank) = accounts
            .get(&tx.account_id)
            .map(|(n, b)| (n.as_str(), b.as_str()))
            .unwrap_or(("", ""));
        let amount = tx.amount.to_string();
        wtr.write_record([
            tx.date.as_str(),
            tx.tx_type.as_str(),
            tx.description.as_str(),
            amount.as_str(),
            name,
            bank,
            tx.status.as_str(),
            tx.category.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(transactions.len())
}
