use chrono::{DateTime, TimeZone, Utc};
use tracing::warn;

// ── Timestamp parsing ─────────────────────────────────────────────────────────

/// Parse a release timestamp into a UTC [`DateTime`].
///
/// Handles:
/// * RFC 3339 / ISO 8601 with `Z` suffix or a fixed offset (the form the
///   releases API emits).
/// * Naive `date time` patterns, interpreted as UTC.
/// * Date-only `YYYY-MM-DD`, taken as midnight UTC.
///
/// Returns `None` for empty strings or unrecognised formats.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Replace trailing 'Z' with '+00:00'.
    let normalised = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{}+00:00", stripped)
    } else {
        s.to_string()
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalised) {
        return Some(dt.with_timezone(&Utc));
    }

    const FMTS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in FMTS {
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let naive = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&naive));
    }

    warn!("could not parse timestamp \"{}\"", s);
    None
}

/// Parse an optional timestamp field; `None` and unparseable values both
/// yield `None`.
pub fn parse_optional_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value.and_then(parse_timestamp)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
