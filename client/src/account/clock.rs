use time::{OffsetDateTime, UtcOffset};

/// Source of record timestamps.
pub trait Clock {
    /// Current instant as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    fn now_iso8601(&self) -> String;
}

/// Wall-clock time in UTC.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_iso8601(&self) -> String {
        format_timestamp(OffsetDateTime::now_utc())
    }
}

/// Format `at` in UTC with millisecond precision and a `Z` suffix.
///
/// An `OffsetDateTime` always carries every component the description asks
/// for and the output is a `String`, so formatting cannot fail in practice.
/// The fallback spells out the same layout by hand so callers never see a
/// non-ISO value either way.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(UtcOffset::UTC);
    let format = time::macros::format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    utc.format(&format).unwrap_or_else(|_| {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            utc.year(),
            u8::from(utc.month()),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second(),
            utc.millisecond(),
        )
    })
}
