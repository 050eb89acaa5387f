use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{confirm, open_store};
use crate::error::Result;
use crate::fmt::money;
use crate::ledger;
use crate::models::{TxData, TxStatus, TxType};
use crate::normalize::today;
use crate::reports::{filter_transactions, TxFilter};
use crate::store::Store;

#[allow(clippy::too_many_arguments)]
pub fn add(
    description: &str,
    amount: f64,
    account: i64,
    tx_type: &str,
    to: Option<i64>,
    date: Option<&str>,
    category: &str,
    status: &str,
) -> Result<()> {
    let (store, session) = open_store()?;
    let data = TxData {
        description: description.to_string(),
        amount,
        date: date
            .map(str::to_string)
            .unwrap_or_else(|| today().format("%Y-%m-%d").to_string()),
        account_id: account,
        to_account_id: to,
        status: TxStatus::parse(status)?,
        category: category.to_string(),
        tx_type: TxType::parse(tx_type)?,
        installment: None,
    };
    let id = ledger::create_tx(&store, &session, &data)?;
    println!("Recorded transaction {id}: {} {}", description, money(amount));
    Ok(())
}

pub fn list(month: Option<&str>, tx_type: Option<&str>, status: Option<&str>) -> Result<()> {
    let (store, session) = open_store()?;
    let accounts = store.accounts(&session)?;
    let transactions = store.transactions(&session)?;

    let filter = TxFilter {
        month: month.map(str::to_string),
        tx_type: tx_type.map(TxType::parse).transpose()?,
        status: status.map(TxStatus::parse).transpose()?,
    };
    let filtered = filter_transactions(&transactions, &filter);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Description", "Type", "Amount", "Account", "Status", "Category"]);
    for tx in &filtered {
        let account = accounts
            .iter()
            .find(|a| a.id == tx.account_id)
            .map(|a| format!("{} - {}", a.bank, a.name))
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(tx.id),
            Cell::new(&tx.date),
            Cell::new(&tx.description),
            Cell::new(tx.tx_type.as_str()),
            Cell::new(money(tx.amount)),
            Cell::new(account),
            Cell::new(tx.status.as_str()),
            Cell::new(&tx.category),
        ]);
    }
    println!("Transactions ({})\n{table}", filtered.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn edit(
    id: i64,
    description: Option<&str>,
    amount: Option<f64>,
    account: Option<i64>,
    tx_type: Option<&str>,
    to: Option<i64>,
    date: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let (store, session) = open_store()?;
    let old = store.get_transaction(&session, id)?;
    let new_type = match tx_type {
        Some(t) => TxType::parse(t)?,
        None => old.tx_type,
    };
    let data = TxData {
        description: description.map(str::to_string).unwrap_or(old.description),
        amount: amount.unwrap_or(old.amount),
        date: date.map(str::to_string).unwrap_or(old.date),
        account_id: account.unwrap_or(old.account_id),
        to_account_id: match new_type {
            TxType::Transfer => to.or(old.to_account_id),
            _ => None,
        },
        status: old.status,
        category: category.map(str::to_string).unwrap_or(old.category),
        tx_type: new_type,
        installment: old.installment,
    };
    ledger::edit_tx(&store, &session, id, &data)?;
    println!("Updated transaction {id}");
    Ok(())
}

pub fn delete(id: i64, yes: bool) -> Result<()> {
    let (store, session) = open_store()?;
    let tx = store.get_transaction(&session, id)?;
    if !confirm(
        &format!("Delete \"{}\" ({})? Balances will be reverted.", tx.description, money(tx.amount)),
        yes,
    ) {
        println!("Cancelled.");
        return Ok(());
    }
    ledger::delete_tx(&store, &session, id)?;
    println!("Deleted transaction {id}");
    Ok(())
}

pub fn toggle(id: i64) -> Result<()> {
    let (store, session) = open_store()?;
    let status = ledger::toggle_status(&store, &session, id)?;
    let label = match status {
        TxStatus::Paid => "paid".green(),
        TxStatus::Unpaid => "unpaid".yellow(),
    };
    println!("Transaction {id} is now {label}");
    Ok(())
}
