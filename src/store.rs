use std::collections::HashMap;
use std::path::Path;

use rusqlite::Connection;

use crate::db::{get_connection, init_db, seed_categories};
use crate::error::{Result, SatangError};
use crate::models::{
    Account, AccountData, AccountType, RecurringItem, Transaction, TxData, TxStatus, TxType,
};

/// Upper bound on operations per committed batch group. Mirrors the write
/// batch cap of hosted document stores; each group commits independently.
pub const MAX_BATCH_OPS: usize = 450;

/// The authenticated user every store call is scoped to. `guest` is the
/// anonymous identity.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn guest() -> Self {
        Self::new("guest")
    }
}

/// Reference to an account from a staged transaction insert: either an id
/// already persisted, or the handle of an account staged earlier in the same
/// flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRef {
    Existing(i64),
    Staged(usize),
}

#[derive(Debug, Clone)]
pub enum StagedWrite {
    InsertAccount { handle: usize, data: AccountData },
    UpdateAccount { account: AccountRef, data: AccountData },
    InsertTransaction { account: AccountRef, data: TxData },
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub accounts_created: usize,
    pub accounts_updated: usize,
    pub transactions_created: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.accounts_created + self.accounts_updated + self.transactions_created
    }
}

#[derive(Debug, Clone)]
pub struct RecurringData {
    pub description: String,
    pub amount: f64,
    pub account_id: i64,
    pub category: String,
    pub day: u32,
}

/// Narrow persistence interface. The importer and ledger only ever see this
/// trait plus an explicit `Session`, so tests run against the same SQLite
/// implementation on an in-memory connection.
pub trait Store {
    fn accounts(&self, session: &Session) -> Result<Vec<Account>>;
    fn get_account(&self, session: &Session, id: i64) -> Result<Account>;
    fn insert_account(&self, session: &Session, data: &AccountData) -> Result<i64>;
    fn update_account(&self, session: &Session, id: i64, data: &AccountData) -> Result<()>;
    fn delete_account(&self, session: &Session, id: i64) -> Result<()>;

    /// Apply a set of atomic in-place balance increments, all-or-nothing.
    /// Each entry is (account id, signed delta). An entry referencing a
    /// missing account fails the whole set.
    fn adjust_balances(&self, session: &Session, adjustments: &[(i64, f64)]) -> Result<()>;

    /// Transactions ordered by creation time descending.
    fn transactions(&self, session: &Session) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, session: &Session, id: i64) -> Result<Transaction>;
    fn insert_transaction(&self, session: &Session, data: &TxData) -> Result<i64>;
    fn update_transaction(&self, session: &Session, id: i64, data: &TxData) -> Result<()>;
    fn delete_transaction(&self, session: &Session, id: i64) -> Result<()>;

    fn recurring(&self, session: &Session) -> Result<Vec<RecurringItem>>;
    fn get_recurring(&self, session: &Session, id: i64) -> Result<RecurringItem>;
    fn insert_recurring(&self, session: &Session, data: &RecurringData) -> Result<i64>;
    fn delete_recurring(&self, session: &Session, id: i64) -> Result<()>;

    fn categories(&self, session: &Session) -> Result<Vec<String>>;
    fn add_category(&self, session: &Session, name: &str) -> Result<()>;

    /// Flush staged writes in groups of at most [`MAX_BATCH_OPS`] operations.
    /// Each group commits before the next begins; there is no cross-group
    /// atomicity. Staged account handles stay resolvable across groups.
    fn apply_batch(&self, session: &Session, writes: Vec<StagedWrite>) -> Result<BatchSummary>;

    /// Delete every account and transaction for the user. Recurring templates
    /// and the category list survive.
    fn clear_all(&self, session: &Session) -> Result<()>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = get_connection(db_path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_for(db_path: &Path, session: &Session) -> Result<Self> {
        let store = Self::open(db_path)?;
        seed_categories(&store.conn, &session.user_id)?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    fn insert_account_inner(conn: &Connection, user_id: &str, data: &AccountData) -> Result<i64> {
        conn.execute(
            "INSERT INTO accounts (user_id, name, bank, account_type, account_number, card_type,
                                   balance, credit_limit, total_debt, statement_day, due_day, color)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            rusqlite::params![
                user_id,
                data.name,
                data.bank,
                data.account_type.as_str(),
                data.account_number,
                data.card_type,
                data.balance,
                data.limit,
                data.total_debt,
                data.statement_day,
                data.due_day,
                data.color,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update_account_inner(
        conn: &Connection,
        user_id: &str,
        id: i64,
        data: &AccountData,
    ) -> Result<()> {
        let changed = conn.execute(
            "UPDATE accounts SET name = ?1, bank = ?2, account_type = ?3, account_number = ?4,
                                 card_type = ?5, balance = ?6, credit_limit = ?7, total_debt = ?8,
                                 statement_day = ?9, due_day = ?10, color = ?11,
                                 updated_at = datetime('now')
             WHERE id = ?12 AND user_id = ?13",
            rusqlite::params![
                data.name,
                data.bank,
                data.account_type.as_str(),
                data.account_number,
                data.card_type,
                data.balance,
                data.limit,
                data.total_debt,
                data.statement_day,
                data.due_day,
                data.color,
                id,
                user_id,
            ],
        )?;
        if changed == 0 {
            return Err(SatangError::UnknownAccount(id.to_string()));
        }
        Ok(())
    }

    fn insert_transaction_inner(conn: &Connection, user_id: &str, data: &TxData) -> Result<i64> {
        conn.execute(
            "INSERT INTO transactions (user_id, description, amount, date, account_id,
                                       to_account_id, status, category, tx_type, installment)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                user_id,
                data.description,
                data.amount,
                data.date,
                data.account_id,
                data.to_account_id,
                data.status.as_str(),
                data.category,
                data.tx_type.as_str(),
                data.installment,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn row_to_account(row: &rusqlite::Row<'_>) -> rusqlite::Result<(Account, String)> {
        let type_str: String = row.get(3)?;
        Ok((
            Account {
                id: row.get(0)?,
                name: row.get(1)?,
                bank: row.get(2)?,
                account_type: AccountType::Bank, // patched below from type_str
                account_number: row.get(4)?,
                card_type: row.get(5)?,
                balance: row.get(6)?,
                limit: row.get(7)?,
                total_debt: row.get(8)?,
                statement_day: row.get(9)?,
                due_day: row.get(10)?,
                color: row.get(11)?,
            },
            type_str,
        ))
    }

    fn finish_account(pair: (Account, String)) -> Result<Account> {
        let (mut account, type_str) = pair;
        account.account_type = AccountType::parse(&type_str)?;
        Ok(account)
    }

    fn row_to_transaction(row: &rusqlite::Row<'_>) -> rusqlite::Result<(Transaction, String, String)> {
        let status_str: String = row.get(6)?;
        let type_str: String = row.get(8)?;
        Ok((
            Transaction {
                id: row.get(0)?,
                description: row.get(1)?,
                amount: row.get(2)?,
                date: row.get(3)?,
                account_id: row.get(4)?,
                to_account_id: row.get(5)?,
                status: TxStatus::Unpaid, // patched below
                category: row.get(7)?,
                tx_type: TxType::Expense, // patched below
                installment: row.get(9)?,
            },
            status_str,
            type_str,
        ))
    }

    fn finish_transaction(triple: (Transaction, String, String)) -> Result<Transaction> {
        let (mut tx, status_str, type_str) = triple;
        tx.status = TxStatus::parse(&status_str)?;
        tx.tx_type = TxType::parse(&type_str)?;
        Ok(tx)
    }

    fn apply_staged(
        conn: &Connection,
        user_id: &str,
        write: &StagedWrite,
        staged_ids: &mut HashMap<usize, i64>,
        summary: &mut BatchSummary,
    ) -> Result<()> {
        let resolve = |account: &AccountRef, staged_ids: &HashMap<usize, i64>| match account {
            AccountRef::Existing(id) => Ok(*id),
            AccountRef::Staged(handle) => staged_ids.get(handle).copied().ok_or_else(|| {
                SatangError::Other(format!(
                    "staged write references unresolved account handle {handle}"
                ))
            }),
        };
        match write {
            StagedWrite::InsertAccount { handle, data } => {
                let id = Self::insert_account_inner(conn, user_id, data)?;
                staged_ids.insert(*handle, id);
                summary.accounts_created += 1;
            }
            StagedWrite::UpdateAccount { account, data } => {
                let id = resolve(account, staged_ids)?;
                Self::update_account_inner(conn, user_id, id, data)?;
                summary.accounts_updated += 1;
            }
            StagedWrite::InsertTransaction { account, data } => {
                let account_id = resolve(account, staged_ids)?;
                let mut resolved = data.clone();
                resolved.account_id = account_id;
                Self::insert_transaction_inner(conn, user_id, &resolved)?;
                summary.transactions_created += 1;
            }
        }
        Ok(())
    }
}

const ACCOUNT_COLS: &str = "id, name, bank, account_type, account_number, card_type, balance, \
                            credit_limit, total_debt, statement_day, due_day, color";
const TX_COLS: &str = "id, description, amount, date, account_id, to_account_id, status, \
                       category, tx_type, installment";

impl Store for SqliteStore {
    fn accounts(&self, session: &Session) -> Result<Vec<Account>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {ACCOUNT_COLS} FROM accounts WHERE user_id = ?1 ORDER BY bank, name"
        ))?;
        let rows = stmt
            .query_map([&session.user_id], Self::row_to_account)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(Self::finish_account).collect()
    }

    fn get_account(&self, session: &Session, id: i64) -> Result<Account> {
        let pair = self
            .conn
            .query_row(
                &format!("SELECT {ACCOUNT_COLS} FROM accounts WHERE id = ?1 AND user_id = ?2"),
                rusqlite::params![id, session.user_id],
                Self::row_to_account,
            )
            .map_err(|_| SatangError::UnknownAccount(id.to_string()))?;
        Self::finish_account(pair)
    }

    fn insert_account(&self, session: &Session, data: &AccountData) -> Result<i64> {
        Self::insert_account_inner(&self.conn, &session.user_id, data)
    }

    fn update_account(&self, session: &Session, id: i64, data: &AccountData) -> Result<()> {
        Self::update_account_inner(&self.conn, &session.user_id, id, data)
    }

    fn delete_account(&self, session: &Session, id: i64) -> Result<()> {
        // Transactions referencing the account are kept; readers tolerate
        // orphaned references.
        let changed = self.conn.execute(
            "DELETE FROM accounts WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![id, session.user_id],
        )?;
        if changed == 0 {
            return Err(SatangError::UnknownAccount(id.to_string()));
        }
        Ok(())
    }

    fn adjust_balances(&self, session: &Session, adjustments: &[(i64, f64)]) -> Result<()> {
        let txn = self.conn.unchecked_transaction()?;
        for (account_id, delta) in adjustments {
            let changed = txn.execute(
                "UPDATE accounts SET balance = balance + ?1, updated_at = datetime('now')
                 WHERE id = ?2 AND user_id = ?3",
                rusqlite::params![delta, account_id, session.user_id],
            )?;
            if changed == 0 {
                return Err(SatangError::UnknownAccount(account_id.to_string()));
            }
        }
        txn.commit()?;
        Ok(())
    }

    fn transactions(&self, session: &Session) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {TX_COLS} FROM transactions WHERE user_id = ?1
             ORDER BY created_at DESC, id DESC"
        ))?;
        let rows = stmt
            .query_map([&session.user_id], Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(Self::finish_transaction).collect()
    }

    fn get_transaction(&self, session: &Session, id: i64) -> Result<Transaction> {
        let triple = self
            .conn
            .query_row(
                &format!("SELECT {TX_COLS} FROM transactions WHERE id = ?1 AND user_id = ?2"),
                rusqlite::params![id, session.user_id],
                Self::row_to_transaction,
            )
            .map_err(|_| SatangError::UnknownTransaction(id.to_string()))?;
        Self::finish_transaction(triple)
    }

    fn insert_transaction(&self, session: &Session, data: &TxData) -> Result<i64> {
        Self::insert_transaction_inner(&self.conn, &session.user_id, data)
    }

    fn update_transaction(&self, session: &Session, id: i64, data: &TxData) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE transactions SET description = ?1, amount = ?2, date = ?3, account_id = ?4,
                                     to_account_id = ?5, status = ?6, category = ?7, tx_type = ?8,
                                     installment = ?9, updated_at = datetime('now')
             WHERE id = ?10 AND user_id = ?11",
            rusqlite::params![
                data.description,
                data.amount,
                data.date,
                data.account_id,
                data.to_account_id,
                data.status.as_str(),
                data.category,
                data.tx_type.as_str(),
                data.installment,
                id,
                session.user_id,
            ],
        )?;
        if changed == 0 {
            return Err(SatangError::UnknownTransaction(id.to_string()));
        }
        Ok(())
    }

    fn delete_transaction(&self, session: &Session, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM transactions WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![id, session.user_id],
        )?;
        if changed == 0 {
            return Err(SatangError::UnknownTransaction(id.to_string()));
        }
        Ok(())
    }

    fn recurring(&self, session: &Session) -> Result<Vec<RecurringItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, amount, account_id, category, day
             FROM recurring WHERE user_id = ?1 ORDER BY day, id",
        )?;
        let rows = stmt
            .query_map([&session.user_id], |row| {
                Ok(RecurringItem {
                    id: row.get(0)?,
                    description: row.get(1)?,
                    amount: row.get(2)?,
                    account_id: row.get(3)?,
                    category: row.get(4)?,
                    day: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn get_recurring(&self, session: &Session, id: i64) -> Result<RecurringItem> {
        self.conn
            .query_row(
                "SELECT id, description, amount, account_id, category, day
                 FROM recurring WHERE id = ?1 AND user_id = ?2",
                rusqlite::params![id, session.user_id],
                |row| {
                    Ok(RecurringItem {
                        id: row.get(0)?,
                        description: row.get(1)?,
                        amount: row.get(2)?,
                        account_id: row.get(3)?,
                        category: row.get(4)?,
                        day: row.get(5)?,
                    })
                },
            )
            .map_err(|_| SatangError::Other(format!("unknown recurring item: {id}")))
    }

    fn insert_recurring(&self, session: &Session, data: &RecurringData) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO recurring (user_id, description, amount, account_id, category, day)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                session.user_id,
                data.description,
                data.amount,
                data.account_id,
                data.category,
                data.day,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn delete_recurring(&self, session: &Session, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM recurring WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![id, session.user_id],
        )?;
        if changed == 0 {
            return Err(SatangError::Other(format!("unknown recurring item: {id}")));
        }
        Ok(())
    }

    fn categories(&self, session: &Session) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM categories WHERE user_id = ?1 ORDER BY id")?;
        let rows = stmt
            .query_map([&session.user_id], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn add_category(&self, session: &Session, name: &str) -> Result<()> {
        let exists: i64 = self.conn.query_row(
            "SELECT count(*) FROM categories WHERE user_id = ?1 AND name = ?2",
            rusqlite::params![session.user_id, name],
            |row| row.get(0),
        )?;
        if exists > 0 {
            return Err(SatangError::Validation(format!(
                "category already exists: {name}"
            )));
        }
        self.conn.execute(
            "INSERT INTO categories (user_id, name) VALUES (?1, ?2)",
            rusqlite::params![session.user_id, name],
        )?;
        Ok(())
    }

    fn apply_batch(&self, session: &Session, writes: Vec<StagedWrite>) -> Result<BatchSummary> {
        let mut staged_ids: HashMap<usize, i64> = HashMap::new();
        let mut summary = BatchSummary::default();
        for group in writes.chunks(MAX_BATCH_OPS) {
            let txn = self.conn.unchecked_transaction()?;
            for write in group {
                Self::apply_staged(&txn, &session.user_id, write, &mut staged_ids, &mut summary)?;
            }
            txn.commit()?;
        }
        Ok(summary)
    }

    fn clear_all(&self, session: &Session) -> Result<()> {
        let txn = self.conn.unchecked_transaction()?;
        txn.execute(
            "DELETE FROM transactions WHERE user_id = ?1",
            [&session.user_id],
        )?;
        txn.execute("DELETE FROM accounts WHERE user_id = ?1", [&session.user_id])?;
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    fn account_data(name: &str, bank: &str) -> AccountData {
        AccountData {
            name: name.into(),
            bank: bank.into(),
            account_type: AccountType::Bank,
            account_number: None,
            card_type: None,
            balance: 1000.0,
            limit: 0.0,
            total_debt: 0.0,
            statement_day: 0,
            due_day: 0,
            color: "slate".into(),
        }
    }

    fn tx_data(account_id: i64, amount: f64) -> TxData {
        TxData {
            description: "coffee".into(),
            amount,
            date: "2025-06-01".into(),
            account_id,
            to_account_id: None,
            status: TxStatus::Unpaid,
            category: "อาหาร".into(),
            tx_type: TxType::Expense,
            installment: None,
        }
    }

    #[test]
    fn test_account_crud_roundtrip() {
        let store = test_store();
        let session = Session::guest();
        let id = store.insert_account(&session, &account_data("Savings", "KBank")).unwrap();
        let acc = store.get_account(&session, id).unwrap();
        assert_eq!(acc.name, "Savings");
        assert_eq!(acc.account_type, AccountType::Bank);
        assert_eq!(acc.balance, 1000.0);

        let mut data = account_data("Savings", "KBank");
        data.balance = 1200.0;
        store.update_account(&session, id, &data).unwrap();
        assert_eq!(store.get_account(&session, id).unwrap().balance, 1200.0);

        store.delete_account(&session, id).unwrap();
        assert!(store.get_account(&session, id).is_err());
    }

    #[test]
    fn test_rows_scoped_by_user() {
        let store = test_store();
        let alice = Session::new("alice");
        let bob = Session::new("bob");
        store.insert_account(&alice, &account_data("Savings", "KBank")).unwrap();
        assert_eq!(store.accounts(&alice).unwrap().len(), 1);
        assert!(store.accounts(&bob).unwrap().is_empty());
    }

    #[test]
    fn test_adjust_balances_increments_in_place() {
        let store = test_store();
        let session = Session::guest();
        let id = store.insert_account(&session, &account_data("Savings", "KBank")).unwrap();
        store.adjust_balances(&session, &[(id, -250.0), (id, 50.0)]).unwrap();
        assert_eq!(store.get_account(&session, id).unwrap().balance, 800.0);
    }

    #[test]
    fn test_adjust_balances_unknown_account_rolls_back() {
        let store = test_store();
        let session = Session::guest();
        let id = store.insert_account(&session, &account_data("Savings", "KBank")).unwrap();
        let err = store.adjust_balances(&session, &[(id, -250.0), (9999, 250.0)]);
        assert!(matches!(err, Err(SatangError::UnknownAccount(_))));
        // First leg rolled back with the failed set.
        assert_eq!(store.get_account(&session, id).unwrap().balance, 1000.0);
    }

    #[test]
    fn test_transactions_newest_first() {
        let store = test_store();
        let session = Session::guest();
        let acc = store.insert_account(&session, &account_data("Savings", "KBank")).unwrap();
        store.insert_transaction(&session, &tx_data(acc, 10.0)).unwrap();
        store.insert_transaction(&session, &tx_data(acc, 20.0)).unwrap();
        let txs = store.transactions(&session).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].amount, 20.0);
        assert_eq!(txs[1].amount, 10.0);
    }

    #[test]
    fn test_apply_batch_resolves_staged_account_refs() {
        let store = test_store();
        let session = Session::guest();
        let writes = vec![
            StagedWrite::InsertAccount { handle: 0, data: account_data("Platinum", "KBank") },
            StagedWrite::InsertTransaction {
                account: AccountRef::Staged(0),
                data: tx_data(0, 99.0),
            },
        ];
        let summary = store.apply_batch(&session, writes).unwrap();
        assert_eq!(summary.accounts_created, 1);
        assert_eq!(summary.transactions_created, 1);
        let accounts = store.accounts(&session).unwrap();
        let txs = store.transactions(&session).unwrap();
        assert_eq!(txs[0].account_id, accounts[0].id);
    }

    #[test]
    fn test_apply_batch_staged_refs_survive_group_boundary() {
        let store = test_store();
        let session = Session::guest();
        let mut writes = vec![StagedWrite::InsertAccount {
            handle: 0,
            data: account_data("Platinum", "KBank"),
        }];
        // Push the referencing transaction past the first commit group.
        for _ in 0..MAX_BATCH_OPS {
            writes.push(StagedWrite::InsertTransaction {
                account: AccountRef::Staged(0),
                data: tx_data(0, 1.0),
            });
        }
        let summary = store.apply_batch(&session, writes).unwrap();
        assert_eq!(summary.transactions_created, MAX_BATCH_OPS);
        let accounts = store.accounts(&session).unwrap();
        let txs = store.transactions(&session).unwrap();
        assert!(txs.iter().all(|t| t.account_id == accounts[0].id));
    }

    #[test]
    fn test_add_category_rejects_duplicates() {
        let store = test_store();
        let session = Session::guest();
        store.add_category(&session, "ของขวัญ").unwrap();
        assert!(store.categories(&session).unwrap().contains(&"ของขวัญ".to_string()));
        assert!(matches!(
            store.add_category(&session, "ของขวัญ"),
            Err(SatangError::Validation(_))
        ));
    }

    #[test]
    fn test_clear_all_leaves_recurring() {
        let store = test_store();
        let session = Session::guest();
        let acc = store.insert_account(&session, &account_data("Savings", "KBank")).unwrap();
        store.insert_transaction(&session, &tx_data(acc, 10.0)).unwrap();
        store
            .insert_recurring(&session, &RecurringData {
                description: "Netflix".into(),
                amount: 419.0,
                account_id: acc,
                category: "บันเทิง".into(),
                day: 5,
            })
            .unwrap();
        store.clear_all(&session).unwrap();
        assert!(store.accounts(&session).unwrap().is_empty());
        assert!(store.transactions(&session).unwrap().is_empty());
        assert_eq!(store.recurring(&session).unwrap().len(), 1);
    }
}
