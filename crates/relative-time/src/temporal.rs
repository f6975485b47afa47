//! Relative-time computation against the present instant.
//!
//! A request is a linear pipeline: strict parsing of the wall-clock string,
//! resolution of the IANA zone, anchoring the reading to an absolute instant,
//! reading "now" from a [`Clock`], and reducing the difference to whole units.
//! Each stage is a public function so callers and tests can stop at any point.
//!
//! # Functions
//!
//! - [`parse_wall_clock`] — Strictly parse `YYYY-MM-DD[ HH:mm[:ss]]`
//! - [`parse_timezone`] — Resolve an IANA zone name
//! - [`anchor`] — Interpret a wall-clock reading as local time in a zone
//! - [`difference`] — Whole units between an anchored instant and a reference
//! - [`relative_difference`] — The whole pipeline, reading "now" from a clock
//! - [`relative_difference_at`] — The whole pipeline with an explicit "now"
//!
//! # DST policy
//!
//! A reading that falls into an ambiguous hour resolves to the earlier
//! candidate. A reading that falls into a skipped hour is interpreted with the
//! offset in force just before the gap, so `02:30` on a one-hour
//! spring-forward gap becomes `03:30` in the new offset.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::clock::Clock;
use crate::error::{RelativeTimeError, Result};
use crate::unit::TimeUnit;

/// Zone used when the caller names none.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Picks the caller's zone, or [`DEFAULT_TIMEZONE`] when it is missing or empty.
pub fn timezone_or_default(timezone: Option<&str>) -> &str {
    match timezone {
        Some(tz) if !tz.is_empty() => tz,
        _ => DEFAULT_TIMEZONE,
    }
}

// ── parse_wall_clock ────────────────────────────────────────────────────────

/// Byte layout of the longest accepted format; `d` marks an ASCII digit.
const LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// Strictly parse a wall-clock reading.
///
/// Accepts exactly `YYYY-MM-DD`, `YYYY-MM-DD HH:mm` and `YYYY-MM-DD HH:mm:ss`:
/// fixed digit widths, single `-`, ` ` and `:` separators, nothing before or
/// after. Missing time fields default to zero. Impossible calendar values
/// (February 30, hour 24, minute 60) are rejected rather than rolled over.
///
/// # Errors
///
/// Returns [`RelativeTimeError::InvalidFormat`] if the input matches none of
/// the formats or names an impossible date or time.
///
/// # Examples
///
/// ```
/// use relative_time::temporal::parse_wall_clock;
///
/// let dt = parse_wall_clock("2026-01-01 14:30").unwrap();
/// assert_eq!(dt.to_string(), "2026-01-01 14:30:00");
/// assert!(parse_wall_clock("2026-02-30").is_err());
/// ```
pub fn parse_wall_clock(input: &str) -> Result<NaiveDateTime> {
    let invalid = || RelativeTimeError::InvalidFormat(input.to_string());

    let bytes = input.as_bytes();
    if !matches!(bytes.len(), 10 | 16 | 19) {
        return Err(invalid());
    }

    let shape_ok = bytes.iter().zip(LAYOUT.iter()).all(|(&b, &p)| match p {
        b'd' => b.is_ascii_digit(),
        sep => b == sep,
    });
    if !shape_ok {
        return Err(invalid());
    }

    let year = digits(&bytes[0..4]) as i32;
    let month = digits(&bytes[5..7]);
    let day = digits(&bytes[8..10]);
    let hour = if bytes.len() >= 16 { digits(&bytes[11..13]) } else { 0 };
    let minute = if bytes.len() >= 16 { digits(&bytes[14..16]) } else { 0 };
    let second = if bytes.len() == 19 { digits(&bytes[17..19]) } else { 0 };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)?;
    Ok(date.and_time(time))
}

/// Decimal value of a run of ASCII digits already validated by the caller.
fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

// ── parse_timezone ──────────────────────────────────────────────────────────

/// Resolve an IANA timezone name such as `"America/New_York"`.
///
/// Names are matched exactly as they appear in the tz database.
///
/// # Errors
///
/// Returns [`RelativeTimeError::InvalidTimezone`] for unknown names.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| RelativeTimeError::InvalidTimezone(name.to_string()))
}

// ── anchor ──────────────────────────────────────────────────────────────────

/// Interpret a wall-clock reading as civil time in `tz`.
///
/// Ambiguous readings take the earlier instant. Readings inside a gap are
/// read with the pre-gap offset, which moves them forward by the gap length.
///
/// # Errors
///
/// Returns [`RelativeTimeError::OutOfRange`] if resolving a gap would leave the
/// representable range.
pub fn anchor(wall: NaiveDateTime, tz: &Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(a, b) => Ok(a.min(b)),
        LocalResult::None => {
            let out_of_range =
                || RelativeTimeError::OutOfRange(format!("cannot anchor {wall} in {tz}"));

            // A day earlier is safely before the gap; its offset is the one the
            // gap skipped away from.
            let probe = wall.checked_sub_signed(Duration::days(1)).ok_or_else(out_of_range)?;
            let before = tz.offset_from_utc_datetime(&probe).fix();
            let utc = wall
                .checked_sub_signed(Duration::seconds(i64::from(before.local_minus_utc())))
                .ok_or_else(out_of_range)?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

// ── difference ──────────────────────────────────────────────────────────────

/// Whole `unit`s between `anchored` and `reference`, as a magnitude.
///
/// Fixed-length units (weeks and finer) divide the absolute-time difference
/// and truncate toward zero. Months and years count calendar months on the
/// civil clocks of both instants in the anchored instant's zone: the largest
/// `n` such that the earlier reading plus `n` months (day clamped to the end
/// of the month) does not pass the later one. Years are `n / 12`.
///
/// # Errors
///
/// Returns [`RelativeTimeError::OutOfRange`] if calendar arithmetic overflows.
pub fn difference(
    anchored: &DateTime<Tz>,
    reference: &DateTime<Utc>,
    unit: TimeUnit,
) -> Result<u64> {
    if !unit.is_calendar() {
        let unit_ms = unit
            .millis()
            .ok_or_else(|| RelativeTimeError::OutOfRange(format!("{unit} has no fixed length")))?;
        let delta = anchored.with_timezone(&Utc) - *reference;
        return Ok((delta.num_milliseconds() / unit_ms).unsigned_abs());
    }

    let tz = anchored.timezone();
    let here = anchored.naive_local();
    let now = reference.with_timezone(&tz).naive_local();
    let (earlier, later) = if here <= now { (here, now) } else { (now, here) };

    let months = whole_months_between(earlier, later)?;
    Ok(match unit {
        TimeUnit::Years => months / 12,
        _ => months,
    })
}

/// Calendar months from `earlier` to `later`; requires `earlier <= later`.
fn whole_months_between(earlier: NaiveDateTime, later: NaiveDateTime) -> Result<u64> {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());

    if months > 0 {
        let step = u32::try_from(months)
            .map_err(|_| RelativeTimeError::OutOfRange(format!("{months} months")))?;
        let landed = earlier
            .checked_add_months(Months::new(step))
            .ok_or_else(|| RelativeTimeError::OutOfRange(format!("{earlier} + {months} months")))?;
        // Field-wise month count overshoots by at most one.
        if landed > later {
            months -= 1;
        }
    }

    Ok(months.unsigned_abs())
}

// ── relative_difference ─────────────────────────────────────────────────────

/// Compute how many whole `unit`s separate `date` (read in `timezone`) from now.
///
/// The clock is read only after the date has parsed and the zone resolved.
///
/// # Errors
///
/// [`RelativeTimeError::InvalidFormat`] when `date` is not in an accepted
/// format, [`RelativeTimeError::InvalidTimezone`] for unknown zones, and
/// [`RelativeTimeError::OutOfRange`] if the arithmetic overflows.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relative_time::{relative_difference, FixedClock, TimeUnit};
///
/// // 2025-01-01 00:00 in Berlin.
/// let clock = FixedClock(Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap());
/// let days = relative_difference("2025-01-02", "Europe/Berlin", TimeUnit::Days, &clock).unwrap();
/// assert_eq!(days, 1);
/// ```
pub fn relative_difference<C>(
    date: &str,
    timezone: &str,
    unit: TimeUnit,
    clock: &C,
) -> Result<u64>
where
    C: Clock + ?Sized,
{
    let wall = parse_wall_clock(date)?;
    let tz = parse_timezone(timezone)?;
    let anchored = anchor(wall, &tz)?;
    difference(&anchored, &clock.now(), unit)
}

/// [`relative_difference`] with an explicit reference instant.
pub fn relative_difference_at(
    date: &str,
    timezone: &str,
    unit: TimeUnit,
    now: DateTime<Utc>,
) -> Result<u64> {
    relative_difference(date, timezone, unit, &crate::clock::FixedClock(now))
}
