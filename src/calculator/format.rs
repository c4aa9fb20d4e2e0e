//! Display strings for calculator output.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_DECIMALS: usize = 2;

/// `1234.5` → `$1,234.50`. The symbol goes in front of the sign: `$-12.00`.
pub fn format_currency(value: f64, symbol: &str, decimals: usize) -> String {
    format!("{symbol}{}", format_grouped(value, decimals))
}

/// `12.345` → `12.35%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{}%", format_grouped(value, decimals))
}

/// Fixed-decimal rendering with `,` thousands separators.
fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // Rounding to zero must not leave a "-0.00".
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
