/// Utilities for date formatting in table cells

use chrono::{DateTime, Utc};

/// Format a timestamp to DD.MM.YYYY
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Format a raw ISO date string to DD.MM.YYYY, or return it unchanged
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date_str(raw: &str) -> String {
    contracts::domain::a001_catalog_product::aggregate::parse_timestamp(raw)
        .map(|dt| format_date(&dt))
        .unwrap_or_else(|| raw.to_string())
}
