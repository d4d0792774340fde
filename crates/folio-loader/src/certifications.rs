//! Derived certification fields.
//!
//! `is_expired` and `days_until_expiration` depend on the current time, so
//! they are recomputed on every load and never stored.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use folio_core::{Error, Result};

use crate::records::Certification;

/// Parse a content date.
///
/// Accepts an RFC 3339 timestamp, `YYYY-MM-DD`, `YYYY-MM`, or `YYYY`.
/// Date-only forms resolve to midnight UTC of the first day they denote.
///
/// ```
/// use folio_loader::certifications::parse_content_date;
///
/// let d = parse_content_date("2025-06").unwrap();
/// assert_eq!(d.to_rfc3339(), "2025-06-01T00:00:00+00:00");
/// assert!(parse_content_date("soon").is_none());
/// ```
pub fn parse_content_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| year_only(raw))?;

    Some(date.and_time(NaiveTime::MIN).and_utc())
}

fn year_only(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1)
}

/// Compute the derived expiration fields of a certification relative to `now`.
///
/// - No expiration date: not expired, no day count
/// - `now` strictly after the expiration instant: expired, no day count
/// - Otherwise: not expired, whole days remaining (rounded down)
///
/// An expiration date that cannot be parsed is a decode error.
pub fn apply_expiration(cert: &mut Certification, now: DateTime<Utc>) -> Result<()> {
    cert.is_expired = false;
    cert.days_until_expiration = None;

    let Some(raw) = cert.expiration_date.as_deref() else {
        return Ok(());
    };
    let expires = parse_content_date(raw).ok_or_else(|| {
        Error::decode(
            format!("certification '{}'", cert.id),
            format!("invalid expirationDate '{raw}'"),
        )
    })?;

    if now > expires {
        cert.is_expired = true;
    } else {
        // Non-negative here, so truncation is the floor.
        cert.days_until_expiration = Some((expires - now).num_days());
    }
    Ok(())
}
