use chrono::{Local, NaiveDate};

/// Thai month abbreviations in calendar order, as they appear in statement
/// exports (ม.ค. = January ... ธ.ค. = December).
pub const THAI_MONTHS: &[&str] = &[
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.",
    "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.", "ธ.ค.",
];

/// Offset added to a 2-digit Buddhist-era short year before era conversion:
/// "68" means 2568 BE.
const SHORT_YEAR_BASE: i32 = 2500;
/// Buddhist era runs 543 years ahead of the Gregorian calendar.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Strip thousands separators and stray quotes, parse as float. Dirty input
/// coerces to 0 rather than failing the row.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "");
    s.trim().parse().unwrap_or(0.0)
}

/// Parse a localized month token like `"ธ.ค.-68"` (Thai month abbreviation,
/// separator, 2- or 4-digit Buddhist-era year) into the first day of the
/// Gregorian month. Any failure falls back silently to today.
pub fn parse_thai_month(raw: &str) -> NaiveDate {
    parse_thai_month_opt(raw).unwrap_or_else(today)
}

fn parse_thai_month_opt(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split(['-', '/']);
    let month_str = parts.next()?;
    let year_str = parts.next()?;
    let month_idx = THAI_MONTHS.iter().position(|m| month_str.contains(m))?;
    let mut year: i32 = year_str.trim().parse().ok()?;
    if year < 100 {
        year += SHORT_YEAR_BASE;
    }
    year -= BUDDHIST_ERA_OFFSET;
    NaiveDate::from_ymd_opt(year, month_idx as u32 + 1, 1)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Repair account numbers that a spreadsheet round-trip corrupted into
/// scientific notation ("4.56E+15") or a bare-plus exponent ("4.56+15").
/// Numeric values re-expand to a fixed, ungrouped decimal string; anything
/// else passes through unchanged.
pub fn fix_scientific_notation(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let mut clean = raw.to_uppercase();
    if clean.contains('+') && !clean.contains('E') {
        clean = clean.replacen('+', "E+", 1);
    }
    if clean.contains('E') {
        if let Ok(num) = clean.trim().parse::<f64>() {
            if num.is_finite() {
                return if num.fract() == 0.0 {
                    format!("{num:.0}")
                } else {
                    format!("{num}")
                };
            }
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.56"), 1234.56);
        assert_eq!(parse_amount("\"500.00\""), 500.0);
        assert_eq!(parse_amount("  -42.50  "), -42.5);
        assert_eq!(parse_amount("0"), 0.0);
        assert_eq!(parse_amount("ไม่มี"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn test_thai_month_short_year() {
        assert_eq!(
            parse_thai_month("ธ.ค.-68"),
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert_eq!(
            parse_thai_month("ม.ค.-67"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_thai_month_full_year_and_slash() {
        assert_eq!(
            parse_thai_month("มี.ค./2568"),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_thai_month_substring_match() {
        // Extra surrounding text still matches the month token.
        assert_eq!(
            parse_thai_month("เดือน ก.พ.-68"),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
    }

    #[test]
    fn test_thai_month_fallback_is_today() {
        assert_eq!(parse_thai_month(""), today());
        assert_eq!(parse_thai_month("December-25"), today());
        assert_eq!(parse_thai_month("ธ.ค."), today()); // no year token
        assert_eq!(parse_thai_month("ธ.ค.-xx"), today());
    }

    #[test]
    fn test_scientific_notation_expands() {
        assert_eq!(fix_scientific_notation("4.56E+15"), "4560000000000000");
        assert_eq!(fix_scientific_notation("4.56e+15"), "4560000000000000");
        // Bare plus without an exponent marker.
        assert_eq!(fix_scientific_notation("4.56+15"), "4560000000000000");
    }

    #[test]
    fn test_scientific_notation_passthrough() {
        assert_eq!(fix_scientific_notation("1234567890123456"), "1234567890123456");
        assert_eq!(fix_scientific_notation("4111-1111"), "4111-1111");
        assert_eq!(fix_scientific_notation("EXPIRED"), "EXPIRED");
        assert_eq!(fix_scientific_notation(""), "");
    }
}
