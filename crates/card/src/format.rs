//! Small display-formatting helpers shared by the metric catalog.

/// Format a duration in minutes as `"7h 28m"`, or `"45m"` under an hour.
pub fn format_minutes(minutes: f64) -> String {
    let h = (minutes / 60.0).floor() as i64;
    let m = (minutes % 60.0).round() as i64;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}

/// Round to a whole number and insert thousands separators (`"12,345"`).
pub fn group_thousands(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}
