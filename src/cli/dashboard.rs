use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::open_store;
use crate::error::Result;
use crate::fmt::money;
use crate::models::TxType;
use crate::reports::{bank_summary, category_breakdown, dashboard, filter_transactions, TxFilter};
use crate::store::Store;

pub fn run(month: Option<&str>) -> Result<()> {
    let (store, session) = open_store()?;
    let accounts = store.accounts(&session)?;
    let transactions = store.transactions(&session)?;

    let summary = dashboard(&accounts);
    println!("{}", "Overview".bold());
    println!("  Total assets     {}", money(summary.total_assets));
    println!("  Credit used      {}", money(summary.credit_used));
    println!("  Debt burden      {}", money(summary.debt_burden));
    println!("  Liabilities      {}", money(summary.total_liabilities()));
    let net = summary.net_worth();
    let net_str = if net < 0.0 {
        money(net).red().to_string()
    } else {
        money(net).green().to_string()
    };
    println!("  Net worth        {net_str}");

    let filter = TxFilter {
        month: month.map(str::to_string),
        tx_type: Some(TxType::Expense),
        status: None,
    };
    let expenses = filter_transactions(&transactions, &filter);
    let scope = month.unwrap_or("all time");

    let by_category = category_breakdown(&expenses);
    if !by_category.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Category", "Spent"]);
        for (category, total) in &by_category {
            table.add_row(vec![Cell::new(category), Cell::new(money(*total))]);
        }
        println!("\nExpenses by category ({scope})\n{table}");
    }

    let by_bank = bank_summary(&expenses, &accounts);
    if !by_bank.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Bank", "Spent"]);
        for (bank, total) in &by_bank {
            table.add_row(vec![Cell::new(bank), Cell::new(money(*total))]);
        }
        println!("\nExpenses by bank ({scope})\n{table}");
    }

    Ok(())
}
