/// Semantic fields a statement export may carry. Column order varies between
/// exports, so each field is located by keyword rather than position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AccountType,
    BankName,
    AccountName,
    AccountNumber,
    CardType,
    StatementDay,
    DueDay,
    TotalDebt,
    LimitTotal,
    LimitRemaining,
    LimitUsed,
    CashBalance,
    TxDescription,
    TxAmount,
    TxStatus,
    TxMonth,
    Installment,
}

/// Ordered keyword table: a field resolves to the first header token that
/// contains one of its keywords, earlier keywords taking precedence. Keywords
/// are the column captions of the source export format.
const FIELD_KEYWORDS: &[(Field, &[&str])] = &[
    (Field::AccountType, &["ประเภทบัญชี"]),
    (Field::BankName, &["ธนาคาร"]),
    (Field::AccountName, &["ชื่อบัตร"]),
    (Field::AccountNumber, &["เลขบัตร"]),
    (Field::CardType, &["ประเภทบัตร"]),
    (Field::StatementDay, &["วันสรุปยอด"]),
    (Field::DueDay, &["กำหนดชำระ"]),
    (Field::TotalDebt, &["ภาระหนี้"]),
    (Field::LimitTotal, &["วงเงินทั้งหมด"]),
    (Field::LimitRemaining, &["วงเงินคงเหลือ"]),
    (Field::LimitUsed, &["วงเงินที่ใช้ไป"]),
    (Field::CashBalance, &["ยอดเงินในบัญชี"]),
    (Field::TxDescription, &["รายละเอียดค่าใช้จ่าย"]),
    (Field::TxAmount, &["ยอดชำระ"]),
    (Field::TxStatus, &["สถานะ"]),
    // Two captions observed for the same column across export revisions.
    (Field::TxMonth, &["ธุรกรรมเดือน", "รายการเดือน"]),
    (Field::Installment, &["งวดผ่อน"]),
];

/// Resolved field-to-column positions for one header row. A missing field is
/// valid and simply means the export does not carry it.
#[derive(Debug)]
pub struct ColumnMap {
    positions: Vec<(Field, usize)>,
}

impl ColumnMap {
    /// `headers` are the comma-split, quote-stripped, trimmed tokens of the
    /// header row.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut positions = Vec::new();
        for (field, keywords) in FIELD_KEYWORDS {
            let hit = keywords
                .iter()
                .find_map(|kw| headers.iter().position(|h| h.contains(kw)));
            if let Some(idx) = hit {
                positions.push((*field, idx));
            }
        }
        Self { positions }
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        self.positions
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, idx)| *idx)
    }
}
