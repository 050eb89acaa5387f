use comfy_table::{Cell, Table};

use crate::cli::{confirm, open_store};
use crate::error::Result;
use crate::fmt::money;
use crate::models::{bank_color, AccountData, AccountType};
use crate::store::Store;

#[allow(clippy::too_many_arguments)]
pub fn add(
    name: &str,
    bank: &str,
    account_type: &str,
    balance: f64,
    limit: f64,
    number: Option<&str>,
    card_type: Option<&str>,
    statement_day: u32,
    due_day: u32,
    total_debt: f64,
) -> Result<()> {
    let (store, session) = open_store()?;
    let data = AccountData {
        name: name.to_string(),
        bank: bank.to_string(),
        account_type: AccountType::parse(account_type)?,
        account_number: number.map(str::to_string),
        card_type: card_type.map(str::to_string),
        balance,
        limit,
        total_debt,
        statement_day,
        due_day,
        color: bank_color(bank).to_string(),
    };
    let id = store.insert_account(&session, &data)?;
    println!("Added account {id}: {bank} - {name}");
    Ok(())
}

pub fn list() -> Result<()> {
    let (store, session) = open_store()?;
    let accounts = store.accounts(&session)?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Bank", "Name", "Type", "Balance", "Limit", "Debt burden"]);
    for acc in &accounts {
        table.add_row(vec![
            Cell::new(acc.id),
            Cell::new(&acc.bank),
            Cell::new(&acc.name),
            Cell::new(acc.account_type.as_str()),
            Cell::new(money(acc.balance)),
            Cell::new(if acc.limit > 0.0 { money(acc.limit) } else { String::new() }),
            Cell::new(if acc.total_debt > 0.0 { money(acc.total_debt) } else { String::new() }),
        ]);
    }
    println!("Accounts\n{table}");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn edit(
    id: i64,
    name: Option<&str>,
    bank: Option<&str>,
    account_type: Option<&str>,
    balance: Option<f64>,
    limit: Option<f64>,
    total_debt: Option<f64>,
    statement_day: Option<u32>,
    due_day: Option<u32>,
) -> Result<()> {
    let (store, session) = open_store()?;
    let old = store.get_account(&session, id)?;
    let bank_name = bank.map(str::to_string).unwrap_or(old.bank);
    let data = AccountData {
        name: name.map(str::to_string).unwrap_or(old.name),
        color: bank_color(&bank_name).to_string(),
        bank: bank_name,
        account_type: match account_type {
            Some(t) => AccountType::parse(t)?,
            None => old.account_type,
        },
        account_number: old.account_number,
        card_type: old.card_type,
        balance: balance.unwrap_or(old.balance),
        limit: limit.unwrap_or(old.limit),
        total_debt: total_debt.unwrap_or(old.total_debt),
        statement_day: statement_day.unwrap_or(old.statement_day),
        due_day: due_day.unwrap_or(old.due_day),
    };
    store.update_account(&session, id, &data)?;
    println!("Updated account {id}");
    Ok(())
}

pub fn delete(id: i64, yes: bool) -> Result<()> {
    let (store, session) = open_store()?;
    let acc = store.get_account(&session, id)?;
    if !confirm(
        &format!("Delete account {} - {}? Its transactions are kept.", acc.bank, acc.name),
        yes,
    ) {
        println!("Cancelled.");
        return Ok(());
    }
    store.delete_account(&session, id)?;
    println!("Deleted account {id}");
    Ok(())
}
