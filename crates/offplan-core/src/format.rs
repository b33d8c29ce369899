//! Display helpers for prices, percentages and handover dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Compact AED price label: `AED 1.5M`, `AED 750K`, `AED 950`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_price(price: u64) -> String {
    format_amount(price as f64)
}

/// Compact AED label for computed amounts, which may be fractional or negative.
///
/// Negative amounts fall through to the plain branch (`AED -12000`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("AED {:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("AED {:.0}K", amount / 1_000.0)
    } else {
        format!("AED {amount:.0}")
    }
}

/// Full AED amount with thousands separators: `AED 1,250,000`.
#[must_use]
pub fn format_grouped(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("AED {out}")
}

/// One-decimal percentage: `354.7%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Month-and-year handover label (`Mar 2027`).
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates. Any other
/// string is shown verbatim; a missing date is `TBA`.
#[must_use]
pub fn format_handover(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "TBA".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %Y").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    raw.to_string()
}

/// `"1-3 BR"` style range label with `N/A` for a missing bound.
#[must_use]
pub fn range_label<T: std::fmt::Display>(min: Option<T>, max: Option<T>, unit: &str) -> String {
    let bound = |v: Option<T>| v.map_or_else(|| "N/A".to_string(), |v| v.to_string());
    format!("{}-{} {unit}", bound(min), bound(max))
}
