//! Day length and its change from one calendar day to the next.
//!
//! Day length is the time from sunrise to sunset. Both events are taken
//! unrounded, so the delta between consecutive days keeps millisecond
//! resolution even though clock times are displayed to the minute.

use crate::almanac::sunrise_sunset_for_day;
use crate::math::{floor, normalize_hours_0_to_24};
use crate::time::CalendarDay;
use crate::types::{DayEvents, DayLengthDelta, LocalHours, SolarEvent};
#[cfg(feature = "chrono")]
use crate::types::GeoCoordinate;
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Length of daylight in milliseconds.
///
/// The difference is taken modulo 24 hours, so a sunset that falls after local
/// midnight (and therefore reads earlier on the clock than sunrise) still
/// yields the true length.
///
/// # Errors
/// Returns `PolarEventUndefined` if sunrise or sunset does not occur.
///
/// # Example
/// ```
/// use sun_cycle::{day_length, DayEvents, EventResult, LocalHours};
///
/// let events = DayEvents::new(
///     EventResult::Occurs(LocalHours::from_hours(6.0)),
///     EventResult::Occurs(LocalHours::from_hours(18.5)),
/// );
/// assert_eq!(day_length::day_length_millis(&events).unwrap(), 45_000_000);
/// ```
pub fn day_length_millis(events: &DayEvents<LocalHours>) -> Result<i64> {
    let sunrise = events.sunrise().into_time(SolarEvent::Sunrise)?;
    let sunset = events.sunset().into_time(SolarEvent::Sunset)?;

    let hours = normalize_hours_0_to_24(sunset.hours() - sunrise.hours());
    Ok(floor(hours * MILLIS_PER_HOUR + 0.5) as i64)
}

/// Change in day length from `yesterday` to `today`.
///
/// # Errors
/// Returns `PolarEventUndefined` if any of the four events does not occur.
pub fn delta_between(
    today: &DayEvents<LocalHours>,
    yesterday: &DayEvents<LocalHours>,
) -> Result<DayLengthDelta> {
    let today_length = day_length_millis(today).inspect_err(|err| {
        log::debug!("day length delta undefined: {err} (today)");
    })?;
    let yesterday_length = day_length_millis(yesterday).inspect_err(|err| {
        log::debug!("day length delta undefined: {err} (yesterday)");
    })?;

    let delta = DayLengthDelta::from_millis(today_length - yesterday_length);
    log::trace!("day length {today_length} ms today, {yesterday_length} ms yesterday: {delta:?}");
    Ok(delta)
}

/// Change in day length between a calendar date and the day before it.
///
/// # Errors
/// Returns error for invalid inputs, or `PolarEventUndefined` when either day
/// has no sunrise or no sunset.
///
/// # Example
/// ```
/// use sun_cycle::day_length;
///
/// // Istanbul around the March equinox: days grow by almost three minutes
/// let delta = day_length::day_length_delta_for_date(2024, 3, 20, 41.0082, 28.9784, 3.0).unwrap();
/// assert!(delta.is_lengthening());
/// assert_eq!(delta.to_string(), "2 min 44 s");
/// ```
pub fn day_length_delta_for_date(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<DayLengthDelta> {
    delta_for_day(
        CalendarDay::new(year, month, day)?,
        latitude,
        longitude,
        utc_offset_hours,
    )
}

/// Change in day length between `date` and the day before, with a fixed UTC offset.
///
/// # Errors
/// Returns error for invalid coordinates, or `PolarEventUndefined` when either
/// day has no sunrise or no sunset.
#[cfg(feature = "chrono")]
pub fn day_length_delta_on(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    utc_offset: FixedOffset,
) -> Result<DayLengthDelta> {
    delta_for_day(
        CalendarDay::from_date_like(&date)?,
        latitude,
        longitude,
        crate::almanac::offset_hours(utc_offset),
    )
}

/// Change in day length between the local day of `datetime` and the day before.
///
/// # Errors
/// Returns error for invalid coordinates, or `PolarEventUndefined` when either
/// day has no sunrise or no sunset.
///
/// # Example
/// ```rust
/// use sun_cycle::day_length;
/// use chrono::{DateTime, FixedOffset};
///
/// let now = "2024-09-22T12:00:00+03:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let delta = day_length::day_length_delta(&now, 41.0082, 28.9784).unwrap();
/// assert!(!delta.is_lengthening());
/// ```
#[cfg(feature = "chrono")]
pub fn day_length_delta<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DayLengthDelta> {
    let local = datetime.fixed_offset();
    day_length_delta_on(local.date_naive(), latitude, longitude, *local.offset())
}

/// Change in day length at a parsed coordinate; see [`day_length_delta`].
///
/// # Errors
/// Returns `PolarEventUndefined` when either day has no sunrise or no sunset.
#[cfg(feature = "chrono")]
pub fn day_length_delta_at<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    coordinate: &GeoCoordinate,
) -> Result<DayLengthDelta> {
    day_length_delta(datetime, coordinate.latitude(), coordinate.longitude())
}

fn delta_for_day(
    today: CalendarDay,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<DayLengthDelta> {
    let yesterday = today.previous()?;
    let today_events = sunrise_sunset_for_day(today, latitude, longitude, utc_offset_hours)?;
    let yesterday_events =
        sunrise_sunset_for_day(yesterday, latitude, longitude, utc_offset_hours)?;
    delta_between(&today_events, &yesterday_events)
}
