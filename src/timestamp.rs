//! Timestamp parsing against an ordered list of candidate layouts.
//!
//! The first layout that matches wins. Inputs without zone information are
//! interpreted in the decode zone (the process-local zone on the decode
//! path). Named zone abbreviations are resolved through RFC 2822's
//! obsolete-zone table (UT/GMT/UTC and the North American pairs).

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::CoerceError;

/// Layouts that carry a numeric offset (`-0700` or `-07:00`).
const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%a, %d %b %Y %H:%M:%S %z",
    "%m/%d/%Y %H:%M:%S %z",
];

/// Layouts with no zone information at all.
const ZONELESS_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%m/%d/%Y %I:%M:%S %p"];

/// Layouts retried after a named zone abbreviation has been stripped.
const NAMED_ZONE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%a %b %e %H:%M:%S %Y",
    "%a, %d %b %Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
];

/// Offsets for accepted zone abbreviations, in hours east of UTC.
const ZONE_ABBREVS: &[(&str, i32)] = &[
    ("UT", 0),
    ("UTC", 0),
    ("GMT", 0),
    ("EST", -5),
    ("EDT", -4),
    ("CST", -6),
    ("CDT", -5),
    ("MST", -7),
    ("MDT", -6),
    ("PST", -8),
    ("PDT", -7),
];

/// Parse `raw` as a timestamp, interpreting zone-less inputs in the
/// process-local zone.
pub(crate) fn parse(raw: &str) -> Result<DateTime<Local>, CoerceError> {
    parse_in(raw, &Local)
}

/// Parse `raw` against every known layout in order; first match wins.
///
/// Generic over the zone so tests can pin a fixed offset instead of
/// depending on the host's local zone.
fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<Tz>, CoerceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(tz));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Ok(dt.with_timezone(tz));
    }
    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(raw, layout) {
            return Ok(dt.with_timezone(tz));
        }
    }
    for layout in ZONELESS_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return in_zone(naive, tz, raw);
        }
    }
    if let Some(date) = try_date(raw) {
        return in_zone(date.and_time(NaiveTime::MIN), tz, raw);
    }
    if let Some((stripped, offset)) = strip_named_zone(raw) {
        for layout in NAMED_ZONE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&stripped, layout) {
                let dt = in_zone(naive, &offset, raw)?;
                return Ok(dt.with_timezone(tz));
            }
        }
    }
    Err(CoerceError::Timestamp(raw.to_string()))
}

/// Bare dates, taken as midnight in the decode zone.
fn try_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Pick the slash layout by the year segment's width: `%Y` would happily
    // read "10/30/19" as the literal year 19.
    if let Some((_, year)) = raw.rsplit_once('/') {
        let layout = if year.len() >= 3 { "%m/%d/%Y" } else { "%m/%d/%y" };
        if let Ok(date) = NaiveDate::parse_from_str(raw, layout) {
            return Some(date);
        }
    }
    None
}

/// Resolve a naive wall-clock time in `tz`. When a DST transition makes
/// the time ambiguous, the earlier instant wins; a time skipped by a
/// transition is a parse failure.
fn in_zone<Tz: TimeZone>(
    naive: NaiveDateTime,
    tz: &Tz,
    raw: &str,
) -> Result<DateTime<Tz>, CoerceError> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| CoerceError::Timestamp(raw.to_string()))
}

/// Remove a whitespace-delimited zone abbreviation from `raw`, returning
/// the remaining text (whitespace-normalized) and the zone's fixed offset.
fn strip_named_zone(raw: &str) -> Option<(String, FixedOffset)> {
    let mut parts: Vec<&str> = raw.split_whitespace().collect();
    for (abbrev, hours) in ZONE_ABBREVS {
        if let Some(pos) = parts.iter().position(|part| part == abbrev) {
            parts.remove(pos);
            let offset = FixedOffset::east_opt(hours * 3600)?;
            return Some((parts.join(" "), offset));
        }
    }
    None
}
