use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;
use crate::locale::Locale;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a published timestamp as sent by the backend and moves it into
/// the viewer's offset. Naive date-times are read as the viewer's local
/// time; a bare date is midnight UTC.
pub fn parse_published(raw: &str, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(offset));
    }
    // RSS feeds publish RFC 2822 dates
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(offset));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return offset.from_local_datetime(&naive).single();
        }
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(offset))
}

/// Formats `raw` in the locale's layout, or returns it unchanged when it
/// cannot be parsed.
pub fn format_published_date(raw: &str, locale: Locale, offset: &FixedOffset) -> String {
    match parse_published(raw, offset) {
        Some(dt) => dt.format(locale.date_format()).to_string(),
        None => {
            debug!("Unparseable published date, showing as-is: {:?}", raw);
            raw.to_string()
        }
    }
}
