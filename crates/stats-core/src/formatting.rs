/// Format a count in compact form for tight display slots.
///
/// * `≥ 1_000_000` → `"1.2M"`
/// * `≥ 1_000` → `"3.4k"`
/// * otherwise plain digits
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_compact;
///
/// assert_eq!(format_compact(999), "999");
/// assert_eq!(format_compact(1_500), "1.5k");
/// assert_eq!(format_compact(2_340_000), "2.3M");
/// ```
pub fn format_compact(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}k", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Format an integer with thousands separators.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_grouped;
///
/// assert_eq!(format_grouped(987), "987");
/// assert_eq!(format_grouped(1_234_567), "1,234,567");
/// ```
pub fn format_grouped(num: u64) -> String {
    let digits = num.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
