use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS accounts (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL,
    bank TEXT NOT NULL,
    account_type TEXT NOT NULL,
    account_number TEXT,
    card_type TEXT,
    balance REAL NOT NULL DEFAULT 0,
    credit_limit REAL NOT NULL DEFAULT 0,
    total_debt REAL NOT NULL DEFAULT 0,
    statement_day INTEGER NOT NULL DEFAULT 0,
    due_day INTEGER NOT NULL DEFAULT 0,
    color TEXT NOT NULL DEFAULT 'slate',
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    description TEXT NOT NULL,
    amount REAL NOT NULL,
    date TEXT NOT NULL,
    account_id INTEGER NOT NULL,
    to_account_id INTEGER,
    status TEXT NOT NULL DEFAULT 'unpaid',
    category TEXT NOT NULL DEFAULT 'ทั่วไป',
    tx_type TEXT NOT NULL DEFAULT 'expense',
    installment TEXT,
    created_at TEXT DEFAULT (datetime('now')),
    updated_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS recurring (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    description TEXT NOT NULL,
    amount REAL NOT NULL,
    account_id INTEGER NOT NULL,
    category TEXT NOT NULL DEFAULT 'ทั่วไป',
    day INTEGER NOT NULL DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY,
    user_id TEXT NOT NULL,
    name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_accounts_user ON accounts(user_id);
CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions(user_id);
CREATE INDEX IF NOT EXISTS idx_transactions_account ON transactions(account_id);
CREATE INDEX IF NOT EXISTS idx_recurring_user ON recurring(user_id);
";

/// Default category list, user-customizable after seeding.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "ทั่วไป",
    "อาหาร",
    "เดินทาง",
    "ช้อปปิ้ง",
    "บิล/สาธารณูปโภค",
    "ผ่อนสินค้า",
    "สุขภาพ",
    "บันเทิง",
    "อื่นๆ",
];

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Seed the default category list for a user the first time they are seen.
pub fn seed_categories(conn: &Connection, user_id: &str) -> Result<()> {
    let count: i64 = conn.query_row(
        "SELECT count(*) FROM categories WHERE user_id = ?1",
        [user_id],
        |row| row.get(0),
    )?;
    if count == 0 {
        for name in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (user_id, name) VALUES (?1, ?2)",
                rusqlite::params![user_id, name],
            )?;
        }
    }
    Ok(())
}
