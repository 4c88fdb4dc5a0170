//! Value transforms between raw, display and edit forms.

/// Parse a raw or edit-form value as a finite number.
///
/// Surrounding whitespace is ignored. Empty input, `NaN` and infinities yield
/// `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Insert `,` between every group of three digits, counting from the right.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a number the way US-English grouping does: thousands separators
/// and the shortest fraction that reads back as the same number.
pub fn format_grouped(value: f64) -> String {
    let plain = value.abs().to_string();
    let (int_part, frac) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Raw number → US currency display, e.g. `12345` → `$12,345`.
///
/// Blank input is treated as zero. Input that is not a number renders as
/// `$NaN`; such values never pass a numeric validator.
pub fn format_currency(raw: &str) -> String {
    let value = if raw.trim().is_empty() {
        Some(0.0)
    } else {
        parse_number(raw)
    };
    match value {
        Some(v) => format!("${}", format_grouped(v)),
        None => "$NaN".to_string(),
    }
}

/// Currency display → plain number for editing: drops every `$` and `,`.
pub fn strip_currency(display: &str) -> String {
    display.chars().filter(|c| !matches!(c, '$' | ',')).collect()
}
