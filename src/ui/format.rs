//! Number and label formatting shared by the presenters.

/// Formats an integer with comma thousands separators.
///
/// # Examples
///
/// ```
/// use archive_front::ui::format::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(1234), "1,234");
/// assert_eq!(group_thousands(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// "Found 1 result" / "Found N results".
#[must_use]
pub fn results_message(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Found {count} result{plural}")
}

/// Zero-match notification text.
#[must_use]
pub fn no_results_message(query: &str) -> String {
    format!("No results for \"{query}\"")
}
