use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a monetary cell into a `Decimal`.
///
/// Accepts the export's locale notation with a decimal comma, with or
/// without period thousands separators (`"1234,56"`, `"1.234,56"`), and
/// machine notation (`"1234.56"`, `"1234"`), which passes through unchanged.
///
/// Returns the failure reason for malformed cells: empty text, more than
/// one comma, or non-numeric residue after separator substitution.
pub fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }

    match trimmed.matches(',').count() {
        0 => Decimal::from_str(trimmed).map_err(|e| e.to_string()),
        1 => {
            let normalized = trimmed.replace('.', "").replace(',', ".");
            Decimal::from_str(&normalized).map_err(|e| e.to_string())
        }
        n => Err(format!("expected a single decimal comma, found {}", n)),
    }
}

/// Renders a monetary value as locale text: rounded to 2 decimal places,
/// comma as the decimal separator, period as the thousands separator.
/// 1234.5 becomes `"1.234,50"`.
pub fn format_amount(value: Decimal) -> String {
    let machine = format!("{:.2}", value.round_dp(2));
    let (sign, digits) = match machine.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", machine.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{},{}", sign, grouped, frac_part)
}
