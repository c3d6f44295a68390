//! Sunrise equation (almanac algorithm) for sunrise and sunset times.
//!
//! This is the closed-form approximation published in the U.S. Naval Observatory's
//! *Almanac for Computers* (1990), also known as the "sunrise equation". It works
//! from the ordinal day of the year alone and is accurate to a few minutes between
//! the polar circles.
//!
//! All angles are in degrees; times are in hours.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::error::{check_coordinates, check_utc_offset};
use crate::math::{
    acos_deg, asin, atan_deg, cos, cos_deg, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, sin_deg, tan_deg,
};
use crate::time::CalendarDay;
use crate::types::{DayEvents, EventResult, Horizon, LocalHours, SolarEvent};
#[cfg(feature = "chrono")]
use crate::types::GeoCoordinate;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};

/// Mean anomaly rate of the sun in degrees per day.
const MEAN_ANOMALY_RATE: f64 = 0.9856;

/// Mean anomaly of the sun at day zero, in degrees.
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Longitude of perihelion plus 180°, in degrees.
const PERIHELION_LONGITUDE: f64 = 282.634;

/// Cosine of the obliquity of the ecliptic.
const COS_OBLIQUITY: f64 = 0.91764;

/// Sine of the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;

/// Calculate the local clock time of sunrise or sunset for a day of the year.
///
/// This is the core of the algorithm; the other functions in this module only
/// resolve calendar dates and horizons before calling it.
///
/// # Arguments
/// * `day_of_year` - Ordinal day within the year (1-366)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180, positive east)
/// * `event` - Sunrise or sunset
/// * `utc_offset_hours` - Offset of the local clock from UTC in hours (e.g. 3.0 for UTC+3)
/// * `horizon` - Horizon defining the event (usually [`Horizon::SunriseSunset`])
///
/// # Returns
/// `EventResult::Occurs` with the local time in [0, 24), or `AllDay`/`AllNight`
/// when the sun does not cross the horizon that day.
///
/// # Errors
/// Returns error for invalid coordinates, UTC offset, or day of year.
///
/// # Example
/// ```
/// use sun_cycle::{almanac, EventResult, Horizon, SolarEvent};
///
/// // Istanbul, day 80 (March 20 in a leap year), Turkey time
/// let result = almanac::event_hours(
///     80,
///     41.0082,
///     28.9784,
///     SolarEvent::Sunrise,
///     3.0,
///     Horizon::SunriseSunset,
/// ).unwrap();
///
/// if let EventResult::Occurs(sunrise) = result {
///     assert_eq!(sunrise.to_string(), "07:06");
/// }
/// ```
pub fn event_hours(
    day_of_year: u32,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
    utc_offset_hours: f64,
    horizon: Horizon,
) -> Result<EventResult<LocalHours>> {
    check_coordinates(latitude, longitude)?;
    check_utc_offset(utc_offset_hours)?;
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_datetime(
            "day of year must be between 1 and 366",
        ));
    }

    let result = calculate_event_utc(
        f64::from(day_of_year),
        latitude,
        longitude,
        event,
        horizon.zenith_angle(),
    );

    match result {
        EventUtc::Occurs(ut) => {
            let local = normalize_hours_0_to_24(ut + utc_offset_hours);
            log::trace!("{event} on day {day_of_year}: UT {ut:.4} h, local {local:.4} h");
            Ok(EventResult::Occurs(LocalHours::from_hours(local)))
        }
        EventUtc::NeverSets => {
            log::debug!("no {event} on day {day_of_year} at latitude {latitude}: polar day");
            Ok(EventResult::AllDay)
        }
        EventUtc::NeverRises => {
            log::debug!("no {event} on day {day_of_year} at latitude {latitude}: polar night");
            Ok(EventResult::AllNight)
        }
        EventUtc::NotFinite => Err(Error::computation_error("event time is not finite")),
    }
}

/// Calculate sunrise or sunset for a calendar date at the standard horizon.
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `event` - Sunrise or sunset
/// * `utc_offset_hours` - Offset of the local clock from UTC in hours
///
/// # Errors
/// Returns error for invalid date components, coordinates, or UTC offset.
///
/// # Example
/// ```
/// use sun_cycle::{almanac, SolarEvent};
///
/// let sunset = almanac::event_hours_for_date(
///     2024, 6, 21,
///     51.5074,  // London latitude
///     -0.1278,  // London longitude
///     SolarEvent::Sunset,
///     1.0,      // BST
/// ).unwrap();
///
/// let time = sunset.time().unwrap();
/// assert_eq!(time.hour_minute().0, 21);
/// ```
pub fn event_hours_for_date(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
    utc_offset_hours: f64,
) -> Result<EventResult<LocalHours>> {
    event_hours_for_horizon(
        year,
        month,
        day,
        latitude,
        longitude,
        event,
        utc_offset_hours,
        Horizon::SunriseSunset,
    )
}

/// Calculate sunrise or sunset for a calendar date and a specific horizon.
///
/// # Errors
/// Returns error for invalid date components, coordinates, or UTC offset.
#[allow(clippy::too_many_arguments)]
pub fn event_hours_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
    utc_offset_hours: f64,
    horizon: Horizon,
) -> Result<EventResult<LocalHours>> {
    let calendar_day = CalendarDay::new(year, month, day)?;
    event_hours(
        calendar_day.day_of_year(),
        latitude,
        longitude,
        event,
        utc_offset_hours,
        horizon,
    )
}

/// Calculate both sunrise and sunset for a calendar date at the standard horizon.
///
/// # Errors
/// Returns error for invalid date components, coordinates, or UTC offset.
///
/// # Example
/// ```
/// use sun_cycle::almanac;
///
/// // Istanbul on the June solstice, Turkey time
/// let events = almanac::sunrise_sunset_hours(2024, 6, 21, 41.0082, 28.9784, 3.0).unwrap();
/// assert!(events.is_regular_day());
///
/// let sunrise = events.sunrise().time().unwrap();
/// let sunset = events.sunset().time().unwrap();
/// assert!(sunrise < sunset);
/// ```
pub fn sunrise_sunset_hours(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<DayEvents<LocalHours>> {
    sunrise_sunset_for_day(
        CalendarDay::new(year, month, day)?,
        latitude,
        longitude,
        utc_offset_hours,
    )
}

pub(crate) fn sunrise_sunset_for_day(
    calendar_day: CalendarDay,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
) -> Result<DayEvents<LocalHours>> {
    let day_of_year = calendar_day.day_of_year();
    let sunrise = event_hours(
        day_of_year,
        latitude,
        longitude,
        SolarEvent::Sunrise,
        utc_offset_hours,
        Horizon::SunriseSunset,
    )?;
    let sunset = event_hours(
        day_of_year,
        latitude,
        longitude,
        SolarEvent::Sunset,
        utc_offset_hours,
        Horizon::SunriseSunset,
    )?;
    Ok(DayEvents::new(sunrise, sunset))
}

/// Calculate sunrise or sunset on a date as a timezone-aware `DateTime`.
///
/// The event's whole hour and minute are attached to `date` in the given
/// offset; seconds are zero.
///
/// # Errors
/// Returns error for invalid coordinates or an offset beyond ±18 hours.
///
/// # Example
/// ```rust
/// use sun_cycle::{almanac, SolarEvent};
/// use chrono::{FixedOffset, NaiveDate, Timelike};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let turkey = FixedOffset::east_opt(3 * 3600).unwrap();
///
/// let sunset = almanac::event_time(date, 41.0082, 28.9784, SolarEvent::Sunset, turkey).unwrap();
/// let sunset = sunset.time().unwrap();
/// assert_eq!((sunset.hour(), sunset.minute()), (19, 16));
/// ```
#[cfg(feature = "chrono")]
pub fn event_time(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
    utc_offset: FixedOffset,
) -> Result<EventResult<DateTime<FixedOffset>>> {
    let calendar_day = CalendarDay::from_date_like(&date)?;
    let result = event_hours(
        calendar_day.day_of_year(),
        latitude,
        longitude,
        event,
        offset_hours(utc_offset),
        Horizon::SunriseSunset,
    )?;
    attach_to_date(result, date, utc_offset)
}

/// Calculate sunrise and sunset for the local calendar day of `datetime`.
///
/// The UTC offset in effect at `datetime` is used for the whole day, and the
/// time of day of `datetime` is ignored.
///
/// The returned sunrise never comes after the returned sunset. When the offset
/// is far from the observer's solar time (a UTC datetime in Tokyo, say), the
/// daylight period whose midpoint falls on the local calendar day is returned,
/// so one of the two events lies on the neighboring date.
///
/// # Errors
/// Returns error for invalid coordinates.
///
/// # Example
/// ```rust
/// use sun_cycle::almanac;
/// use chrono::{DateTime, FixedOffset};
///
/// let now = "2024-06-21T15:42:00+03:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let events = almanac::sunrise_sunset(&now, 41.0082, 28.9784).unwrap();
///
/// let sunrise = events.sunrise().time().unwrap();
/// assert_eq!(sunrise.to_rfc3339(), "2024-06-21T05:32:00+03:00");
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DayEvents<DateTime<FixedOffset>>> {
    let local = datetime.fixed_offset();
    let date = local.date_naive();
    let utc_offset = *local.offset();

    let clock_times = sunrise_sunset_for_day(
        CalendarDay::from_date_like(&date)?,
        latitude,
        longitude,
        offset_hours(utc_offset),
    )?;
    let (sunrise_date, sunset_date) = daylight_dates(&clock_times, date)?;

    let sunrise = event_time(sunrise_date, latitude, longitude, SolarEvent::Sunrise, utc_offset)?;
    let sunset = event_time(sunset_date, latitude, longitude, SolarEvent::Sunset, utc_offset)?;
    Ok(DayEvents::new(sunrise, sunset))
}

/// Calculate sunrise and sunset for the local calendar day of `datetime` at a
/// parsed coordinate.
///
/// Same as [`sunrise_sunset`]; the coordinate is already validated.
///
/// # Errors
/// Returns error if the date has no neighboring day to attach an event to.
///
/// # Example
/// ```rust
/// use sun_cycle::{almanac, GeoCoordinate};
/// use chrono::{DateTime, FixedOffset};
///
/// let istanbul: GeoCoordinate = "41.0082,28.9784".parse().unwrap();
/// let now = "2024-03-20T09:00:00+03:00".parse::<DateTime<FixedOffset>>().unwrap();
///
/// let events = almanac::sunrise_sunset_at(&now, &istanbul).unwrap();
/// assert!(events.is_regular_day());
/// ```
#[cfg(feature = "chrono")]
pub fn sunrise_sunset_at<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    coordinate: &GeoCoordinate,
) -> Result<DayEvents<DateTime<FixedOffset>>> {
    sunrise_sunset(datetime, coordinate.latitude(), coordinate.longitude())
}

/// Picks the dates to attach sunrise and sunset to so that they bound one
/// daylight period centered on `date`.
#[cfg(feature = "chrono")]
fn daylight_dates(
    clock_times: &DayEvents<LocalHours>,
    date: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    let (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) =
        (clock_times.sunrise(), clock_times.sunset())
    else {
        return Ok((date, date));
    };
    if sunset >= sunrise {
        return Ok((date, date));
    }

    // Daylight spans local midnight; its midpoint is (sunrise + sunset + 24) / 2
    // hours after the start of the sunrise's day.
    log::debug!("daylight on {date} crosses local midnight: sunrise {sunrise}, sunset {sunset}");
    if sunrise.hours() + sunset.hours() >= 24.0 {
        let previous = date
            .pred_opt()
            .ok_or(Error::invalid_datetime("date has no previous day"))?;
        Ok((previous, date))
    } else {
        let next = date
            .succ_opt()
            .ok_or(Error::invalid_datetime("date has no next day"))?;
        Ok((date, next))
    }
}

/// Converts a chrono offset to fractional hours.
#[cfg(feature = "chrono")]
pub(crate) fn offset_hours(utc_offset: FixedOffset) -> f64 {
    f64::from(utc_offset.local_minus_utc()) / 3600.0
}

#[cfg(feature = "chrono")]
fn attach_to_date(
    result: EventResult<LocalHours>,
    date: NaiveDate,
    utc_offset: FixedOffset,
) -> Result<EventResult<DateTime<FixedOffset>>> {
    match result {
        EventResult::Occurs(time) => {
            let (hour, minute) = time.hour_minute();
            let naive = date
                .and_hms_opt(hour, minute, 0)
                .ok_or(Error::computation_error("event time is not a valid clock time"))?;
            let datetime = utc_offset
                .from_local_datetime(&naive)
                .single()
                .ok_or(Error::computation_error("event time is not representable"))?;
            Ok(EventResult::Occurs(datetime))
        }
        EventResult::AllDay => Ok(EventResult::AllDay),
        EventResult::AllNight => Ok(EventResult::AllNight),
    }
}

/// Intermediate outcome in universal time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EventUtc {
    Occurs(f64),
    NeverSets,
    NeverRises,
    NotFinite,
}

fn calculate_event_utc(
    day_of_year: f64,
    latitude: f64,
    longitude: f64,
    event: SolarEvent,
    zenith: f64,
) -> EventUtc {
    let longitude_hour = longitude / 15.0;

    // approximate time of the event, in days
    let approximate_hour = if event.is_sunrise() { 6.0 } else { 18.0 };
    let t = day_of_year + (approximate_hour - longitude_hour) / 24.0;

    let mean_anomaly = MEAN_ANOMALY_RATE * t - MEAN_ANOMALY_OFFSET;
    let true_longitude = calculate_true_longitude(mean_anomaly);
    let right_ascension_hours = calculate_right_ascension_hours(true_longitude);

    let sin_declination = SIN_OBLIQUITY * sin_deg(true_longitude);
    let cos_declination = cos(asin(sin_declination));

    let cos_hour_angle = (cos_deg(zenith) - sin_declination * sin_deg(latitude))
        / (cos_declination * cos_deg(latitude));

    log::trace!(
        "t={t:.5} M={mean_anomaly:.5} L={true_longitude:.5} RA={right_ascension_hours:.5}h cosH={cos_hour_angle:.5}"
    );

    if cos_hour_angle > 1.0 {
        return EventUtc::NeverRises;
    }
    if cos_hour_angle < -1.0 {
        return EventUtc::NeverSets;
    }

    let hour_angle_degrees = if event.is_sunrise() {
        360.0 - acos_deg(cos_hour_angle)
    } else {
        acos_deg(cos_hour_angle)
    };
    let hour_angle = hour_angle_degrees / 15.0;

    let local_mean_time = hour_angle + right_ascension_hours - 0.06571 * t - 6.622;
    let ut = normalize_hours_0_to_24(local_mean_time - longitude_hour);

    if ut.is_finite() {
        EventUtc::Occurs(ut)
    } else {
        EventUtc::NotFinite
    }
}

/// Sun's true longitude from its mean anomaly, in [0, 360).
fn calculate_true_longitude(mean_anomaly: f64) -> f64 {
    normalize_degrees_0_to_360(
        mean_anomaly
            + 1.916 * sin_deg(mean_anomaly)
            + 0.020 * sin_deg(2.0 * mean_anomaly)
            + PERIHELION_LONGITUDE,
    )
}

/// Sun's right ascension in hours, placed in the same quadrant as the true longitude.
fn calculate_right_ascension_hours(true_longitude: f64) -> f64 {
    let right_ascension = normalize_degrees_0_to_360(atan_deg(COS_OBLIQUITY * tan_deg(true_longitude)));

    let longitude_quadrant = floor(true_longitude / 90.0) * 90.0;
    let ascension_quadrant = floor(right_ascension / 90.0) * 90.0;

    (right_ascension + longitude_quadrant - ascension_quadrant) / 15.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: f64 = 1.0 / 60.0;

    fn hours_of(result: EventResult<LocalHours>) -> f64 {
        result.time().expect("expected a regular event").hours()
    }

    #[test]
    fn test_istanbul_equinox() {
        // Expected values from the almanac equations, Turkey time (UTC+3)
        let sunrise =
            event_hours_for_date(2024, 3, 20, 41.0082, 28.9784, SolarEvent::Sunrise, 3.0).unwrap();
        let sunset =
            event_hours_for_date(2024, 3, 20, 41.0082, 28.9784, SolarEvent::Sunset, 3.0).unwrap();

        assert!((hours_of(sunrise) - 7.113_205_8).abs() < 1e-6);
        assert!((hours_of(sunset) - 19.279_812_3).abs() < 1e-6);
    }

    #[test]
    fn test_right_ascension_same_quadrant() {
        for longitude in [10.0, 95.0, 185.0, 275.0, 359.0] {
            let ra_degrees = calculate_right_ascension_hours(longitude) * 15.0;
            assert_eq!(
                floor(ra_degrees / 90.0),
                floor(longitude / 90.0),
                "RA {ra_degrees} should share quadrant with L {longitude}"
            );
            assert!((ra_degrees - longitude).abs() < 3.0);
        }
    }

    #[test]
    fn test_true_longitude_normalized() {
        for mean_anomaly in [-3.289, 0.0, 90.0, 180.0, 356.0, 720.0] {
            let l = calculate_true_longitude(mean_anomaly);
            assert!((0.0..360.0).contains(&l), "L={l} for M={mean_anomaly}");
        }
    }

    #[test]
    fn test_utc_offset_shifts_local_time() {
        let utc = hours_of(
            event_hours(172, 52.52, 13.405, SolarEvent::Sunrise, 0.0, Horizon::SunriseSunset)
                .unwrap(),
        );
        let cest = hours_of(
            event_hours(172, 52.52, 13.405, SolarEvent::Sunrise, 2.0, Horizon::SunriseSunset)
                .unwrap(),
        );
        assert!((cest - utc - 2.0).abs() < 1e-9);

        // Negative offsets wrap into the previous local day
        let west = hours_of(
            event_hours(172, 52.52, 13.405, SolarEvent::Sunrise, -5.0, Horizon::SunriseSunset)
                .unwrap(),
        );
        assert!((west - (utc - 5.0 + 24.0)).abs() < 1e-9);
    }

    #[test]
    fn test_polar_outcomes() {
        let summer = event_hours(173, 70.0, 25.0, SolarEvent::Sunset, 0.0, Horizon::SunriseSunset)
            .unwrap();
        assert_eq!(summer, EventResult::AllDay);

        let winter = event_hours(356, 70.0, 25.0, SolarEvent::Sunrise, 0.0, Horizon::SunriseSunset)
            .unwrap();
        assert_eq!(winter, EventResult::AllNight);

        let pole = event_hours(1, -90.0, 0.0, SolarEvent::Sunrise, 0.0, Horizon::SunriseSunset)
            .unwrap();
        assert_eq!(pole, EventResult::AllDay);
    }

    #[test]
    fn test_twilight_horizons_widen_the_day() {
        let rise = |horizon| {
            hours_of(event_hours(80, 41.0082, 28.9784, SolarEvent::Sunrise, 3.0, horizon).unwrap())
        };

        let standard = rise(Horizon::SunriseSunset);
        let civil = rise(Horizon::CivilTwilight);
        let nautical = rise(Horizon::NauticalTwilight);
        let astronomical = rise(Horizon::AstronomicalTwilight);

        assert!(civil < standard - 20.0 * MINUTE);
        assert!(nautical < civil);
        assert!(astronomical < nautical);
    }

    #[test]
    fn test_input_validation() {
        let call = |day, lat, lon, offset| {
            event_hours(day, lat, lon, SolarEvent::Sunrise, offset, Horizon::SunriseSunset)
        };

        assert_eq!(call(100, 91.0, 0.0, 0.0), Err(Error::invalid_latitude(91.0)));
        assert_eq!(call(100, 0.0, -181.0, 0.0), Err(Error::invalid_longitude(-181.0)));
        assert_eq!(call(100, 0.0, 0.0, 19.0), Err(Error::invalid_utc_offset(19.0)));
        assert!(call(0, 0.0, 0.0, 0.0).is_err());
        assert!(call(367, 0.0, 0.0, 0.0).is_err());
        assert!(call(366, 0.0, 0.0, 0.0).is_ok());

        assert!(event_hours_for_date(2023, 2, 29, 0.0, 0.0, SolarEvent::Sunset, 0.0).is_err());
    }

    #[test]
    fn test_deterministic() {
        let first = sunrise_sunset_hours(2024, 9, 22, -33.8688, 151.2093, 10.0).unwrap();
        let second = sunrise_sunset_hours(2024, 9, 22, -33.8688, 151.2093, 10.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_event_time_attaches_date_and_offset() {
        use chrono::{Datelike, Timelike};

        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let turkey = FixedOffset::east_opt(3 * 3600).unwrap();

        let sunrise = event_time(date, 41.0082, 28.9784, SolarEvent::Sunrise, turkey).unwrap();
        let sunrise = *sunrise.time().unwrap();

        assert_eq!(sunrise.date_naive(), date);
        assert_eq!(sunrise.offset(), &turkey);
        assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (7, 6, 0));
        assert_eq!(sunrise.day(), 20);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_sunrise_sunset_uses_local_day() {
        use chrono::{Datelike, Timelike, Utc};

        // 22:30 UTC on March 19 is already March 20 in Istanbul
        let utc = Utc.with_ymd_and_hms(2024, 3, 19, 22, 30, 0).unwrap();
        let turkey = FixedOffset::east_opt(3 * 3600).unwrap();
        let local = utc.with_timezone(&turkey);

        let events = sunrise_sunset(&local, 41.0082, 28.9784).unwrap();
        let sunset = events.sunset().time().unwrap();
        assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!((sunset.hour(), sunset.minute()), (19, 16));

        let polar = sunrise_sunset(&local.with_month(6).unwrap(), 78.2232, 15.6267).unwrap();
        assert!(polar.sunrise().is_polar_day());
        assert!(polar.sunset().is_polar_day());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_sunrise_sunset_in_utc_for_tokyo() {
        use chrono::{Timelike, Utc};

        // Tokyo daylight runs from about 19:25 to 10:00 UTC
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 3, 0, 0).unwrap();
        let events = sunrise_sunset(&utc, 35.6762, 139.6503).unwrap();

        let sunrise = *events.sunrise().time().unwrap();
        let sunset = *events.sunset().time().unwrap();

        assert!(sunrise <= sunset, "{sunrise} should not come after {sunset}");
        assert_eq!(sunrise.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
        assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!((sunrise.hour(), sunrise.minute()), (19, 25));
        assert_eq!((sunset.hour(), sunset.minute()), (10, 0));

        let hours = (sunset - sunrise).num_minutes() as f64 / 60.0;
        assert!((hours - 14.58).abs() < 0.1, "day length {hours:.2} h");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_sunrise_sunset_in_utc_for_los_angeles() {
        use chrono::{Timelike, Utc};

        // Los Angeles daylight runs from about 12:42 to 03:07 UTC the next day
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 18, 0, 0).unwrap();
        let events = sunrise_sunset(&utc, 34.0522, -118.2437).unwrap();

        let sunrise = *events.sunrise().time().unwrap();
        let sunset = *events.sunset().time().unwrap();

        assert!(sunrise <= sunset, "{sunrise} should not come after {sunset}");
        assert_eq!(sunrise.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(sunset.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 22).unwrap());
        assert_eq!((sunrise.hour(), sunrise.minute()), (12, 42));
        assert_eq!((sunset.hour(), sunset.minute()), (3, 7));
    }
}
