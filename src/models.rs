use crate::error::{Result, SatangError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Bank,
    Credit,
    Cash,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bank => "bank",
            Self::Credit => "credit",
            Self::Cash => "cash",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "bank" => Ok(Self::Bank),
            "credit" => Ok(Self::Credit),
            "cash" => Ok(Self::Cash),
            other => Err(SatangError::Validation(format!(
                "unknown account type: {other} (expected bank, credit or cash)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Expense,
    Income,
    Transfer,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Transfer => "transfer",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            "transfer" => Ok(Self::Transfer),
            other => Err(SatangError::Validation(format!(
                "unknown transaction type: {other} (expected expense, income or transfer)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Paid,
    Unpaid,
}

impl TxStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "paid" => Ok(Self::Paid),
            "unpaid" => Ok(Self::Unpaid),
            other => Err(SatangError::Validation(format!(
                "unknown status: {other} (expected paid or unpaid)"
            ))),
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Paid => Self::Unpaid,
            Self::Unpaid => Self::Paid,
        }
    }
}

/// For credit accounts `balance` holds the remaining available credit, so
/// `limit - balance` is the amount currently drawn. For bank and cash
/// accounts it is the cash actually held.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub bank: String,
    pub account_type: AccountType,
    pub account_number: Option<String>,
    pub card_type: Option<String>,
    pub balance: f64,
    pub limit: f64,
    pub total_debt: f64,
    pub statement_day: u32,
    pub due_day: u32,
    pub color: String,
}

impl Account {
    pub fn dedup_key(&self) -> String {
        format!("{}-{}", self.bank, self.name)
    }
}

/// Account fields as written by an import row or a manual save, before an id
/// has been assigned.
#[derive(Debug, Clone)]
pub struct AccountData {
    pub name: String,
    pub bank: String,
    pub account_type: AccountType,
    pub account_number: Option<String>,
    pub card_type: Option<String>,
    pub balance: f64,
    pub limit: f64,
    pub total_debt: f64,
    pub statement_day: u32,
    pub due_day: u32,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub account_id: i64,
    pub to_account_id: Option<i64>,
    pub status: TxStatus,
    pub category: String,
    pub tx_type: TxType,
    pub installment: Option<String>,
}

/// Transaction fields for create/edit, validated by the ledger before any
/// balance is touched.
#[derive(Debug, Clone)]
pub struct TxData {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub account_id: i64,
    pub to_account_id: Option<i64>,
    pub status: TxStatus,
    pub category: String,
    pub tx_type: TxType,
    pub installment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecurringItem {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub account_id: i64,
    pub category: String,
    pub day: u32,
}

// (bank-name keyword, card color) — first case-insensitive substring hit wins.
const BANK_COLORS: &[(&str, &str)] = &[
    ("ไทยพาณิชย์", "purple"),
    ("scb", "purple"),
    ("กสิกรไทย", "emerald"),
    ("kbank", "emerald"),
    ("kplus", "emerald"),
    ("กรุงศรี", "yellow"),
    ("bay", "yellow"),
    ("krungsri", "yellow"),
    ("กรุงเทพ", "blue"),
    ("bbl", "blue"),
    ("bangkok", "blue"),
    ("ทหารไทย", "navy"),
    ("ttb", "navy"),
    ("ยูโอบี", "slate"),
    ("uob", "slate"),
    ("ซิตี้", "cyan"),
    ("citi", "cyan"),
    ("ออมสิน", "pink"),
    ("gsb", "pink"),
    ("เงินสด", "green"),
    ("cash", "green"),
];

pub fn bank_color(bank: &str) -> &'static str {
    let lower = bank.to_lowercase();
    BANK_COLORS
        .iter()
        .find(|(kw, _)| lower.contains(&kw.to_lowercase()))
        .map(|(_, color)| *color)
        .unwrap_or("slate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_roundtrip() {
        for t in [AccountType::Bank, AccountType::Credit, AccountType::Cash] {
            assert_eq!(AccountType::parse(t.as_str()).unwrap(), t);
        }
        assert!(AccountType::parse("checking").is_err());
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(TxStatus::Paid.toggled(), TxStatus::Unpaid);
        assert_eq!(TxStatus::Unpaid.toggled(), TxStatus::Paid);
    }

    #[test]
    fn test_bank_color_thai_and_english() {
        assert_eq!(bank_color("ธนาคารไทยพาณิชย์"), "purple");
        assert_eq!(bank_color("KBank"), "emerald");
        assert_eq!(bank_color("SCB EASY"), "purple");
        assert_eq!(bank_color("Somewhere Else"), "slate");
    }

    #[test]
    fn test_dedup_key() {
        let acc = Account {
            id: 1,
            name: "Platinum".into(),
            bank: "KBank".into(),
            account_type: AccountType::Credit,
            account_number: None,
            card_type: None,
            balance: 0.0,
            limit: 0.0,
            total_debt: 0.0,
            statement_day: 0,
            due_day: 0,
            color: "emerald".into(),
        };
        assert_eq!(acc.dedup_key(), "KBank-Platinum");
    }
}
