use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SatangError};
use crate::models::{Transaction, TxData, TxStatus, TxType};
use crate::normalize::today;
use crate::store::{Session, Store};

/// Balance effect of a transaction as signed deltas per account. For credit
/// accounts an expense shrinks remaining credit and a transfer in restores it
/// (a bill payment); the arithmetic is the same either way.
fn effect(data: &TxData) -> Vec<(i64, f64)> {
    match data.tx_type {
        TxType::Income => vec![(data.account_id, data.amount)],
        TxType::Expense => vec![(data.account_id, -data.amount)],
        TxType::Transfer => {
            let mut legs = vec![(data.account_id, -data.amount)];
            if let Some(to) = data.to_account_id {
                legs.push((to, data.amount));
            }
            legs
        }
    }
}

fn negated(deltas: &[(i64, f64)]) -> Vec<(i64, f64)> {
    deltas.iter().map(|(id, d)| (*id, -d)).collect()
}

fn tx_to_data(tx: &Transaction) -> TxData {
    TxData {
        description: tx.description.clone(),
        amount: tx.amount,
        date: tx.date.clone(),
        account_id: tx.account_id,
        to_account_id: tx.to_account_id,
        status: tx.status,
        category: tx.category.clone(),
        tx_type: tx.tx_type,
        installment: tx.installment.clone(),
    }
}

fn validate(data: &TxData) -> Result<()> {
    if data.amount <= 0.0 || !data.amount.is_finite() {
        return Err(SatangError::Validation(
            "amount must be greater than zero".into(),
        ));
    }
    if data.account_id <= 0 {
        return Err(SatangError::Validation("an account must be selected".into()));
    }
    match (data.tx_type, data.to_account_id) {
        (TxType::Transfer, None) => Err(SatangError::Validation(
            "a transfer needs a destination account".into(),
        )),
        (TxType::Transfer, Some(to)) if to == data.account_id => Err(SatangError::Validation(
            "a transfer needs two different accounts".into(),
        )),
        (TxType::Transfer, Some(_)) => Ok(()),
        (_, Some(_)) => Err(SatangError::Validation(
            "only transfers carry a destination account".into(),
        )),
        (_, None) => Ok(()),
    }
}

/// Apply the new transaction's balance effect, then persist it.
pub fn create_tx(store: &dyn Store, session: &Session, data: &TxData) -> Result<i64> {
    validate(data)?;
    store.adjust_balances(session, &effect(data))?;
    store.insert_transaction(session, data)
}

/// Fully reverse the stored transaction's prior impact, apply the effect of
/// the new fields, then overwrite the document. The two steps stay separate
/// because old and new may touch entirely different accounts.
pub fn edit_tx(store: &dyn Store, session: &Session, id: i64, data: &TxData) -> Result<()> {
    validate(data)?;
    let old = store.get_transaction(session, id)?;
    let mut adjustments = negated(&effect(&tx_to_data(&old)));
    adjustments.extend(effect(data));
    store.adjust_balances(session, &adjustments)?;
    store.update_transaction(session, id, data)
}

/// Reverse the stored effect, then remove the document.
pub fn delete_tx(store: &dyn Store, session: &Session, id: i64) -> Result<()> {
    let old = store.get_transaction(session, id)?;
    store.adjust_balances(session, &negated(&effect(&tx_to_data(&old))))?;
    store.delete_transaction(session, id)
}

/// Flip paid/unpaid. Status is a tracking tag only; the expense already hit
/// the balance at creation time, so no balance moves here.
pub fn toggle_status(store: &dyn Store, session: &Session, id: i64) -> Result<TxStatus> {
    let old = store.get_transaction(session, id)?;
    let mut data = tx_to_data(&old);
    data.status = old.status.toggled();
    store.update_transaction(session, id, &data)?;
    Ok(data.status)
}

/// Stamp a recurring template into a new unpaid expense dated this month at
/// the template's day, clamped to the month's length.
pub fn use_recurring(store: &dyn Store, session: &Session, item_id: i64) -> Result<i64> {
    let item = store.get_recurring(session, item_id)?;
    let now = today();
    let date = date_in_month(now.year(), now.month(), item.day);
    create_tx(
        store,
        session,
        &TxData {
            description: item.description,
            amount: item.amount,
            date: date.format("%Y-%m-%d").to_string(),
            account_id: item.account_id,
            to_account_id: None,
            status: TxStatus::Unpaid,
            category: item.category,
            tx_type: TxType::Expense,
            installment: None,
        },
    )
}

fn date_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day.max(1)).unwrap_or_else(|| {
        let last = last_day_of_month(year, month);
        NaiveDate::from_ymd_opt(year, month, last).expect("valid month end")
    })
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}
