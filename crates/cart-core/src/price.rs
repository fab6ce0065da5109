//! Price scraping and display.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// Read a price out of display text such as `"₱1,299.00"`.
///
/// Every character other than an ASCII digit or `.` is dropped first, so signs
/// and separators never survive. Text with no readable number yields `0.0`.
pub fn parse_price(text: &str) -> f64 {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    leading_number(&digits).unwrap_or(0.0)
}

/// The longest decimal number at the start of `text`, ignoring leading
/// whitespace. Trailing garbage is tolerated (`"12.5kg"` reads as `12.5`).
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format an amount with two decimals, dropping trailing fractional zeros:
/// `240.0` → `₱240`, `125.5` → `₱125.5`, `12.05` → `₱12.05`.
pub fn format_price(amount: f64, symbol: &str) -> String {
    // Avoid rendering "-0" for a negative zero subtotal.
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{symbol}{trimmed}")
}
