use std::collections::HashMap;

use crate::models::{Account, AccountType, Transaction, TxStatus, TxType};

#[derive(Debug, PartialEq)]
pub struct DashboardSummary {
    /// Cash held across bank and cash accounts.
    pub total_assets: f64,
    /// Sum of credit limits.
    pub credit_limit: f64,
    /// Sum of remaining credit across credit accounts.
    pub credit_balance: f64,
    /// Amount actually drawn: limit minus remaining credit.
    pub credit_used: f64,
    /// Manually maintained debt burden across all accounts.
    pub debt_burden: f64,
}

impl DashboardSummary {
    pub fn total_liabilities(&self) -> f64 {
        self.credit_used + self.debt_burden
    }

    pub fn net_worth(&self) -> f64 {
        self.total_assets - self.total_liabilities()
    }
}

pub fn dashboard(accounts: &[Account]) -> DashboardSummary {
    let total_assets = accounts
        .iter()
        .filter(|a| a.account_type != AccountType::Credit)
        .map(|a| a.balance)
        .sum();
    let credit: Vec<&Account> = accounts
        .iter()
        .filter(|a| a.account_type == AccountType::Credit)
        .collect();
    let credit_limit: f64 = credit.iter().map(|a| a.limit).sum();
    let credit_balance: f64 = credit.iter().map(|a| a.balance).sum();
    let debt_burden = accounts.iter().map(|a| a.total_debt).sum();
    DashboardSummary {
        total_assets,
        credit_limit,
        credit_balance,
        credit_used: credit_limit - credit_balance,
        debt_burden,
    }
}

#[derive(Debug, Default)]
pub struct TxFilter {
    /// `YYYY-MM`; `None` means all months.
    pub month: Option<String>,
    pub tx_type: Option<TxType>,
    pub status: Option<TxStatus>,
}

pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TxFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| match &filter.month {
            Some(m) => t.date.starts_with(m.as_str()),
            None => true,
        })
        .filter(|t| filter.tx_type.map_or(true, |ty| t.tx_type == ty))
        .filter(|t| filter.status.map_or(true, |st| t.status == st))
        .collect()
}

/// Distinct transaction months (`YYYY-MM`), newest first.
pub fn available_months(transactions: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = transactions
        .iter()
        .filter(|t| t.date.len() >= 7)
        .map(|t| t.date[..7].to_string())
        .collect();
    months.sort();
    months.dedup();
    months.reverse();
    months
}

/// Expense totals per category, largest first.
pub fn category_breakdown(transactions: &[&Transaction]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.tx_type == TxType::Expense) {
        *totals.entry(t.category.as_str()).or_default() += t.amount;
    }
    sorted_desc(totals)
}

/// Expense totals per issuing bank, largest first. Orphaned account
/// references land in the "Other" bucket.
pub fn bank_summary(transactions: &[&Transaction], accounts: &[Account]) -> Vec<(String, f64)> {
    let banks: HashMap<i64, &str> = accounts.iter().map(|a| (a.id, a.bank.as_str())).collect();
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| t.tx_type == TxType::Expense) {
        let bank = banks.get(&t.account_id).copied().unwrap_or("Other");
        *totals.entry(bank).or_default() += t.amount;
    }
    sorted_desc(totals)
}

fn sorted_desc(totals: HashMap<&str, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
}
