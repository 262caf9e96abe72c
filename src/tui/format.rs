//! Text formatting shared by the board components.

use unicode_width::UnicodeWidthChar;

/// Compact value, rounded to the nearest thousand: `$45k`.
pub fn compact_value(value: u64) -> String {
    format!("${}k", value.saturating_add(500) / 1000)
}

/// Full dollar amount with thousands separators: `$1,234,000`.
pub fn dollars(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate to `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
