/// Format a baht amount with thousands separators: ฿1,234.56. Whole amounts
/// drop the fraction entirely, matching the th-TH display convention.
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    let body = if dec_part == "00" {
        with_commas
    } else {
        format!("{with_commas}.{dec_part}")
    };
    if negative {
        format!("-฿{body}")
    } else {
        format!("฿{body}")
    }
}
