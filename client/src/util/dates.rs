//! Display formatting for epoch timestamps.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format a unix timestamp (seconds) as `Mon D, YYYY` for the blog feed.
/// Out-of-range timestamps render as an empty string.
#[must_use]
pub fn format_epoch_date(epoch_secs: i64) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    OffsetDateTime::from_unix_timestamp(epoch_secs)
        .ok()
        .and_then(|date| date.format(&format).ok())
        .unwrap_or_default()
}
