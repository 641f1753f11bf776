//! German display formatting for dates and clock times.

const MONATE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Formats an ISO date (`YYYY-MM-DD`) as e.g. `21. März '24`.
///
/// Anything that is not exactly an ISO date is returned unchanged, so strings
/// the backend already localized pass through. Empty or absent input yields `""`.
pub fn format_date_german(input: Option<&str>) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    if !is_iso_date(raw) {
        return raw.to_string();
    }

    // is_iso_date guarantees ASCII digits at these positions
    let year: u32 = raw[0..4].parse().unwrap_or_default();
    let month: usize = raw[5..7].parse().unwrap_or_default();
    let day: u32 = raw[8..10].parse().unwrap_or_default();

    let Some(month_name) = month.checked_sub(1).and_then(|i| MONATE.get(i)) else {
        return raw.to_string();
    };

    // last two characters of the year as a number: 0005 -> "5", 2024 -> "24"
    let year = year.to_string();
    let short_year = &year[year.len().saturating_sub(2)..];

    format!("{day}. {month_name} '{short_year}")
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Converts fractional hours to `H:MM`, e.g. `7.5` → `7:30`.
///
/// Minutes are rounded half away from zero; a result of 60 rolls over into
/// the next hour. Absent, NaN and infinite values yield `""`.
pub fn float_to_time(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let mut hours = value.floor() as i64;
    let mut minutes = ((value - value.floor()) * 60.0).round() as i64;
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }

    format!("{hours}:{minutes:02}")
}
