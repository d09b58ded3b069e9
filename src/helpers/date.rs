//! Date helper functions

use crate::content::parse_post_date;

/// Long, human-readable date format (like "March 15, 2024")
const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a post date in long form
///
/// # Examples
/// ```
/// assert_eq!(folio::helpers::format_long_date("2024-03-15"), "March 15, 2024");
/// ```
///
/// Input that is not an ISO-8601 date is returned unchanged.
pub fn format_long_date(date: &str) -> String {
    match parse_post_date(date) {
        Some(dt) => dt.format(LONG_DATE_FORMAT).to_string(),
        None => date.to_string(),
    }
}
