use comfy_table::{Cell, Table};

use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::money;
use crate::ledger;
use crate::store::{RecurringData, Store};

pub fn add(description: &str, amount: f64, account: i64, category: &str, day: u32) -> Result<()> {
    let (store, session) = open_store()?;
    store.get_account(&session, account)?;
    let id = store.insert_recurring(
        &session,
        &RecurringData {
            description: description.to_string(),
            amount,
            account_id: account,
            category: category.to_string(),
            day,
        },
    )?;
    println!("Added recurring bill {id}: {} {} on day {day}", description, money(amount));
    Ok(())
}

pub fn list() -> Result<()> {
    let (store, session) = open_store()?;
    let accounts = store.accounts(&session)?;
    let items = store.recurring(&session)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Description", "Amount", "Account", "Category", "Day"]);
    for item in &items {
        let account = accounts
            .iter()
            .find(|a| a.id == item.account_id)
            .map(|a| format!("{} - {}", a.bank, a.name))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(item.id),
            Cell::new(&item.description),
            Cell::new(money(item.amount)),
            Cell::new(account),
            Cell::new(&item.category),
            Cell::new(item.day),
        ]);
    }
    println!("Recurring bills\n{table}");
    Ok(())
}

pub fn use_item(id: i64) -> Result<()> {
    let (store, session) = open_store()?;
    let tx_id = ledger::use_recurring(&store, &session, id)?;
    let tx = store.get_transaction(&session, tx_id)?;
    println!("Created transaction {tx_id}: {} {} on {}", tx.description, money(tx.amount), tx.date);
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let (store, session) = open_store()?;
    store.delete_recurring(&session, id)?;
    println!("Deleted recurring bill {id}");
    Ok(())
}
