use std::collections::HashMap;
use std::path::Path;

use crate::columns::{ColumnMap, Field};
use crate::encoding::{decode_statement, SENTINEL_HEADER};
use crate::error::{Result, SatangError};
use crate::models::{bank_color, AccountData, AccountType, TxData, TxStatus, TxType};
use crate::normalize::{fix_scientific_notation, parse_amount, parse_thai_month, today};
use crate::store::{AccountRef, Session, StagedWrite, Store};

// Keyword sets driving account-type inference and status parsing. Substring
// containment, same precedence as the source export's conventions.
const TYPE_BANK_KEYWORD: &str = "บัญชี";
const BANK_NAME_KEYWORD: &str = "ธนาคาร";
const TYPE_CASH_KEYWORD: &str = "เงินสด";
const STATUS_PAID_KEYWORD: &str = "จ่ายแล้ว";

/// Row placeholder meaning "no expense on this row".
const DESCRIPTION_NONE: &str = "ไม่มี";
/// Account-name placeholder rows that carry a transaction but no account.
const NAME_NONE: &str = "N/A";

const DEFAULT_NAME: &str = "General";
const DEFAULT_BANK: &str = "Other";
const IMPORT_CATEGORY: &str = "Import";

/// Rows with fewer fields than this are treated as noise (summary lines,
/// decorative separators) and skipped.
const MIN_ROW_FIELDS: usize = 5;

#[derive(Debug, Default)]
pub struct ImportReport {
    pub accounts_created: usize,
    pub accounts_updated: usize,
    pub transactions_imported: usize,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.accounts_created + self.accounts_updated + self.transactions_imported
    }
}

pub fn import_file(store: &dyn Store, session: &Session, path: &Path) -> Result<ImportReport> {
    let buf = std::fs::read(path)?;
    import_bytes(store, session, &buf)
}

/// Run the whole pipeline over a raw file buffer: decode, locate the header,
/// map columns, derive accounts and transactions row by row, then flush the
/// staged writes in size-bounded batches.
pub fn import_bytes(store: &dyn Store, session: &Session, buf: &[u8]) -> Result<ImportReport> {
    let text = decode_statement(buf)?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();

    let header_idx = lines
        .iter()
        .position(|l| l.contains(SENTINEL_HEADER))
        .ok_or_else(|| {
            SatangError::MalformedFile(format!("header row \"{SENTINEL_HEADER}\" not found"))
        })?;
    let headers: Vec<String> = lines[header_idx]
        .split(',')
        .map(|h| h.replace('"', "").trim().to_string())
        .collect();
    let map = ColumnMap::from_headers(&headers);

    // Accounts persisted before this import, keyed bank-name. Accounts first
    // seen during this run get a staged handle instead.
    let existing: HashMap<String, i64> = store
        .accounts(session)?
        .iter()
        .map(|a| (a.dedup_key(), a.id))
        .collect();
    let mut staged_handles: HashMap<String, usize> = HashMap::new();
    let mut next_handle = 0usize;
    let mut writes: Vec<StagedWrite> = Vec::new();

    // The sentinel scan needs raw lines, but data rows go through a real CSV
    // reader so quoted fields containing commas stay intact.
    let body = lines[header_idx + 1..].join("\n");
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    for record in rdr.records() {
        let Ok(record) = record else { continue };
        if record.len() < MIN_ROW_FIELDS {
            continue;
        }
        let clean = |field: Field| -> String {
            map.get(field)
                .and_then(|idx| record.get(idx))
                .map(|v| v.replace('"', "").trim().to_string())
                .unwrap_or_default()
        };
        let num = |field: Field| -> f64 { parse_amount(&clean(field)) };

        let raw_name = clean(Field::AccountName);
        let name = if raw_name.is_empty() { DEFAULT_NAME.to_string() } else { raw_name };
        let raw_bank = clean(Field::BankName);
        let bank = if raw_bank.is_empty() { DEFAULT_BANK.to_string() } else { raw_bank };
        let type_raw = clean(Field::AccountType);
        let cash_balance = num(Field::CashBalance);
        let account_type = infer_account_type(&type_raw, &bank, cash_balance);
        let key = format!("{bank}-{name}");

        let mut account: Option<AccountRef> = existing
            .get(&key)
            .map(|id| AccountRef::Existing(*id))
            .or_else(|| staged_handles.get(&key).map(|h| AccountRef::Staged(*h)));

        if name != NAME_NONE {
            let limit = num(Field::LimitTotal);
            let balance = match account_type {
                AccountType::Credit => derive_credit_balance(
                    limit,
                    num(Field::LimitRemaining),
                    num(Field::LimitUsed),
                ),
                _ => cash_balance,
            };
            let balance = if balance.is_finite() { balance } else { 0.0 };
            let data = AccountData {
                name: name.clone(),
                bank: bank.clone(),
                account_type,
                account_number: non_empty(fix_scientific_notation(&clean(Field::AccountNumber))),
                card_type: non_empty(clean(Field::CardType)),
                balance,
                limit,
                total_debt: num(Field::TotalDebt),
                statement_day: clean(Field::StatementDay).parse().unwrap_or(0),
                due_day: clean(Field::DueDay).parse().unwrap_or(0),
                color: bank_color(&bank).to_string(),
            };
            match account {
                Some(account_ref) => {
                    writes.push(StagedWrite::UpdateAccount { account: account_ref, data });
                }
                None => {
                    let handle = next_handle;
                    next_handle += 1;
                    writes.push(StagedWrite::InsertAccount { handle, data });
                    staged_handles.insert(key, handle);
                    account = Some(AccountRef::Staged(handle));
                }
            }
        }

        let description = clean(Field::TxDescription);
        let amount = num(Field::TxAmount);
        if let Some(account_ref) = account {
            if !description.is_empty() && description != DESCRIPTION_NONE && amount > 0.0 {
                let month_raw = clean(Field::TxMonth);
                let date = if month_raw.is_empty() { today() } else { parse_thai_month(&month_raw) };
                let status = if clean(Field::TxStatus).contains(STATUS_PAID_KEYWORD) {
                    TxStatus::Paid
                } else {
                    TxStatus::Unpaid
                };
                writes.push(StagedWrite::InsertTransaction {
                    account: account_ref,
                    data: TxData {
                        description,
                        amount,
                        date: date.format("%Y-%m-%d").to_string(),
                        account_id: 0, // resolved from account_ref at flush
                        to_account_id: None,
                        status,
                        category: IMPORT_CATEGORY.to_string(),
                        tx_type: TxType::Expense,
                        installment: non_empty(clean(Field::Installment)),
                    },
                });
            }
        }
    }

    let summary = store.apply_batch(session, writes)?;
    Ok(ImportReport {
        accounts_created: summary.accounts_created,
        accounts_updated: summary.accounts_updated,
        transactions_imported: summary.transactions_created,
    })
}

/// Type precedence: an account keyword in the raw type, a bank keyword in the
/// issuer, or any positive cash balance all mean a bank account — a positive
/// balance deliberately overrides an ambiguous type label. Cash is next, and
/// credit is the default.
fn infer_account_type(type_raw: &str, bank: &str, cash_balance: f64) -> AccountType {
    if type_raw.contains(TYPE_BANK_KEYWORD)
        || bank.contains(BANK_NAME_KEYWORD)
        || cash_balance > 0.0
    {
        AccountType::Bank
    } else if type_raw.contains(TYPE_CASH_KEYWORD) {
        AccountType::Cash
    } else {
        AccountType::Credit
    }
}

/// The export either supplies the remaining figure directly or only the used
/// figure. A used figure of exactly zero is ambiguous between "nothing drawn"
/// and "field not populated"; it resolves to fully available.
fn derive_credit_balance(limit: f64, limit_remaining: f64, limit_used: f64) -> f64 {
    if limit_remaining > 0.0 {
        limit_remaining
    } else if limit_used == 0.0 {
        limit
    } else {
        limit - limit_used
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;
    use encoding_rs::WINDOWS_874;

    const HEADER: &str = "ประเภทบัญชี,ธนาคาร,ชื่อบัตร,เลขบัตร,ประเภทบัตร,วงเงินทั้งหมด,วงเงินที่ใช้ไป,วงเงินคงเหลือ,ยอดเงินในบัญชี,รายละเอียดค่าใช้จ่าย,ยอดชำระ,สถานะ,ธุรกรรมเดือน,งวดผ่อน,ภาระหนี้,วันสรุปยอด,กำหนดชำระ";

    fn statement(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from("สรุปบัญชีและบัตรเครดิต,,,,,\n\n");
        text.push_str(HEADER);
        text.push('\n');
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        text.into_bytes()
    }

    fn test_store() -> (SqliteStore, Session) {
        (SqliteStore::in_memory().unwrap(), Session::guest())
    }

    #[test]
    fn test_credit_row_with_zero_used_is_fully_available() {
        // Credit keyword absent, no bank keyword, zero cash balance.
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,ไม่มี,0,,,,,16,1",
        ]);
        let report = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(report.accounts_created, 1);
        let acc = &store.accounts(&session).unwrap()[0];
        assert_eq!(acc.account_type, AccountType::Credit);
        assert_eq!(acc.balance, 20000.0);
        assert_eq!(acc.limit, 20000.0);
        assert_eq!(acc.statement_day, 16);
        assert_eq!(acc.due_day, 1);
    }

    #[test]
    fn test_credit_balance_from_used_figure() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Gold,,VISA,\"10,000\",\"3,000\",0,0,ไม่มี,0,,,,,,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        assert_eq!(store.accounts(&session).unwrap()[0].balance, 7000.0);
    }

    #[test]
    fn test_credit_balance_remaining_wins_over_used() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Gold,,VISA,10000,3000,6000,0,ไม่มี,0,,,,,,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        assert_eq!(store.accounts(&session).unwrap()[0].balance, 6000.0);
    }

    #[test]
    fn test_bank_account_from_type_keyword_and_cash_balance() {
        let (store, session) = test_store();
        let file = statement(&[
            // Type keyword says bank.
            "บัญชีออมทรัพย์,กสิกรไทย,Savings,,,0,0,0,\"15,000\",ไม่มี,0,,,,,,",
            // Ambiguous label, positive cash balance forces bank.
            "อื่นๆ,SCB,Spare,,,0,0,0,500,ไม่มี,0,,,,,,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        let accounts = store.accounts(&session).unwrap();
        assert_eq!(accounts.len(), 2);
        assert!(accounts.iter().all(|a| a.account_type == AccountType::Bank));
        let savings = accounts.iter().find(|a| a.name == "Savings").unwrap();
        assert_eq!(savings.balance, 15000.0);
    }

    #[test]
    fn test_cash_account_keyword() {
        let (store, session) = test_store();
        let file = statement(&["เงินสด,เงินสด,Wallet,,,0,0,0,0,ไม่มี,0,,,,,,"]);
        import_bytes(&store, &session, &file).unwrap();
        assert_eq!(
            store.accounts(&session).unwrap()[0].account_type,
            AccountType::Cash
        );
    }

    #[test]
    fn test_reimport_updates_instead_of_duplicating() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,5000,0,0,ไม่มี,0,,,,,,",
        ]);
        let first = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(first.accounts_created, 1);
        assert_eq!(first.accounts_updated, 0);

        let second = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(second.accounts_created, 0);
        assert_eq!(second.accounts_updated, 1);
        assert_eq!(store.accounts(&session).unwrap().len(), 1);
    }

    #[test]
    fn test_same_run_rows_share_one_account() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,Lazada,1500,จ่ายแล้ว,ธ.ค.-68,1/3,,,",
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,Shopee,900,รอจ่าย,ธ.ค.-68,,,,",
        ]);
        let report = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(report.accounts_created, 1);
        assert_eq!(report.accounts_updated, 1);
        assert_eq!(report.transactions_imported, 2);
        let accounts = store.accounts(&session).unwrap();
        assert_eq!(accounts.len(), 1);
        let txs = store.transactions(&session).unwrap();
        assert!(txs.iter().all(|t| t.account_id == accounts[0].id));
    }

    #[test]
    fn test_transaction_fields_from_row() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,\"Lazada, 12.12 sale\",1500,จ่ายแล้ว,ธ.ค.-68,1/3,,,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        let tx = &store.transactions(&session).unwrap()[0];
        assert_eq!(tx.description, "Lazada, 12.12 sale");
        assert_eq!(tx.amount, 1500.0);
        assert_eq!(tx.date, "2025-12-01");
        assert_eq!(tx.status, TxStatus::Paid);
        assert_eq!(tx.tx_type, TxType::Expense);
        assert_eq!(tx.category, "Import");
        assert_eq!(tx.installment.as_deref(), Some("1/3"));
    }

    #[test]
    fn test_none_description_stages_no_transaction() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,ไม่มี,0,,,,,,",
            "บัตรเครดิต,KBank,Gold,,VISA,10000,0,0,0,,0,,,,,,",
        ]);
        let report = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(report.transactions_imported, 0);
    }

    #[test]
    fn test_zero_amount_stages_no_transaction() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,ค่าธรรมเนียม,0,,,,,,",
        ]);
        let report = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(report.transactions_imported, 0);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let (store, session) = test_store();
        let file = statement(&[
            "รวม,152000",
            ",,,",
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,ไม่มี,0,,,,,,",
        ]);
        let report = import_bytes(&store, &session, &file).unwrap();
        assert_eq!(report.accounts_created, 1);
    }

    #[test]
    fn test_blank_name_and_bank_get_placeholders() {
        let (store, session) = test_store();
        let file = statement(&["บัตรเครดิต,,,,,5000,0,0,0,ไม่มี,0,,,,,,"]);
        import_bytes(&store, &session, &file).unwrap();
        let acc = &store.accounts(&session).unwrap()[0];
        assert_eq!(acc.name, "General");
        assert_eq!(acc.bank, "Other");
    }

    #[test]
    fn test_account_number_scientific_repair() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,4.56E+15,VISA,20000,0,0,0,ไม่มี,0,,,,,,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        let acc = &store.accounts(&session).unwrap()[0];
        assert_eq!(acc.account_number.as_deref(), Some("4560000000000000"));
    }

    #[test]
    fn test_missing_header_is_malformed() {
        let (store, session) = test_store();
        let err = import_bytes(&store, &session, b"Date,Description,Amount\n1,2,3\n");
        assert!(matches!(err, Err(SatangError::MalformedFile(_))));
        assert!(store.accounts(&session).unwrap().is_empty());
    }

    #[test]
    fn test_windows_874_statement_imports() {
        let (store, session) = test_store();
        let mut text = String::from(HEADER);
        text.push('\n');
        text.push_str("บัญชีออมทรัพย์,กสิกรไทย,Savings,,,0,0,0,2500,ไม่มี,0,,,,,,\n");
        let (encoded, _, had_errors) = WINDOWS_874.encode(&text);
        assert!(!had_errors);
        let report = import_bytes(&store, &session, &encoded).unwrap();
        assert_eq!(report.accounts_created, 1);
        assert_eq!(store.accounts(&session).unwrap()[0].balance, 2500.0);
    }

    #[test]
    fn test_total_debt_carried_onto_account() {
        let (store, session) = test_store();
        let file = statement(&[
            "บัตรเครดิต,KBank,Platinum,,VISA,20000,0,0,0,ไม่มี,0,,,,\"45,000\",,",
        ]);
        import_bytes(&store, &session, &file).unwrap();
        assert_eq!(store.accounts(&session).unwrap()[0].total_debt, 45000.0);
    }
}
