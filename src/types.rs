//! Core data types for sunrise, sunset and day-length calculations.

use crate::error::{check_latitude, check_longitude};
use crate::math::{floor, normalize_hours_0_to_24};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Predefined horizons for sunrise/sunset calculations.
///
/// The sunrise equation works with the zenith angle of the sun's centre at the
/// moment of the event; each horizon maps to one such angle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Standard sunrise/sunset (zenith 90.833°, accounting for refraction and the solar disk)
    #[default]
    SunriseSunset,
    /// Civil twilight (sun is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun is 18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Gets the zenith angle in degrees (90° minus the elevation angle).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation_angle()
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::invalid_elevation_angle(elevation_degrees));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Which of the two daily horizon crossings to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing.
    Sunrise,
    /// Evening crossing.
    Sunset,
}

impl SolarEvent {
    /// Checks if this is the morning event.
    #[must_use]
    pub const fn is_sunrise(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunrise => f.write_str("sunrise"),
            Self::Sunset => f.write_str("sunset"),
        }
    }
}

/// Observer position on Earth.
///
/// # Example
/// ```
/// # use sun_cycle::GeoCoordinate;
/// let istanbul: GeoCoordinate = "41.0082,28.9784".parse().unwrap();
/// assert_eq!(istanbul.latitude(), 41.0082);
/// assert_eq!(istanbul.longitude(), 28.9784);
///
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees (-90 to +90, positive north)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, positive east)
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl FromStr for GeoCoordinate {
    type Err = Error;

    /// Parses `"latitude,longitude"` in decimal degrees.
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or(Error::invalid_coordinate_format("expected \"latitude,longitude\""))?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::invalid_coordinate_format("latitude is not a number"))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::invalid_coordinate_format("longitude is not a number"))?;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Local clock time as fractional hours since local midnight, in [0, 24).
///
/// # Example
/// ```
/// # use sun_cycle::LocalHours;
/// let time = LocalHours::from_hours(7.125);
/// assert_eq!(time.hour_minute(), (7, 7));
/// assert_eq!(LocalHours::from_hours(25.5).hours(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a clock time, wrapping the value into [0, 24).
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        Self(normalize_hours_0_to_24(hours))
    }

    /// Gets the fractional hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Splits the time into a whole hour and a whole (truncated) minute.
    #[must_use]
    pub fn hour_minute(&self) -> (u32, u32) {
        let hour = floor(self.0);
        let minute = floor((self.0 - hour) * 60.0);
        ((hour as u32).min(23), (minute as u32).min(59))
    }
}

impl fmt::Display for LocalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, minute) = self.hour_minute();
        write!(f, "{hour:02}:{minute:02}")
    }
}

/// Outcome of computing a single sunrise or sunset.
///
/// At high latitudes the sun may stay above or below the horizon for the
/// whole day, in which case there is no time to report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventResult<T = LocalHours> {
    /// The event happens at the given time.
    Occurs(T),
    /// Polar day: the sun stays above the horizon, so it neither sets nor rises.
    AllDay,
    /// Polar night: the sun stays below the horizon, so it neither rises nor sets.
    AllNight,
}

impl<T> EventResult<T> {
    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if the event occurs on this day.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Converts into the event time, treating a polar outcome as an error.
    ///
    /// # Errors
    /// Returns `PolarEventUndefined` for `AllDay` and `AllNight`.
    pub fn into_time(self, event: SolarEvent) -> Result<T> {
        match self {
            Self::Occurs(time) => Ok(time),
            Self::AllDay | Self::AllNight => Err(Error::polar_event_undefined(event)),
        }
    }

    /// Maps the event time, keeping polar outcomes as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> EventResult<U> {
        match self {
            Self::Occurs(time) => EventResult::Occurs(f(time)),
            Self::AllDay => EventResult::AllDay,
            Self::AllNight => EventResult::AllNight,
        }
    }
}

/// Sunrise and sunset for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvents<T = LocalHours> {
    sunrise: EventResult<T>,
    sunset: EventResult<T>,
}

impl<T> DayEvents<T> {
    /// Combines a sunrise and a sunset result.
    pub const fn new(sunrise: EventResult<T>, sunset: EventResult<T>) -> Self {
        Self { sunrise, sunset }
    }

    /// Gets the sunrise result.
    pub const fn sunrise(&self) -> &EventResult<T> {
        &self.sunrise
    }

    /// Gets the sunset result.
    pub const fn sunset(&self) -> &EventResult<T> {
        &self.sunset
    }

    /// Checks if both sunrise and sunset occur.
    pub const fn is_regular_day(&self) -> bool {
        self.sunrise.occurs() && self.sunset.occurs()
    }
}

/// Signed change in day length between two consecutive calendar days.
///
/// # Example
/// ```
/// # use sun_cycle::DayLengthDelta;
/// let delta = DayLengthDelta::from_millis(-125_900);
/// assert!(!delta.is_lengthening());
/// assert_eq!(delta.whole_seconds(), 125);
/// assert_eq!(delta.to_string(), "2 min 5 s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayLengthDelta {
    /// Day length today minus day length yesterday, in milliseconds
    milliseconds: i64,
    /// Whether days are getting longer (`milliseconds >= 0`)
    is_lengthening: bool,
}

impl DayLengthDelta {
    /// Creates a delta from a signed millisecond difference.
    ///
    /// A zero difference counts as lengthening.
    #[must_use]
    pub const fn from_millis(milliseconds: i64) -> Self {
        Self {
            milliseconds,
            is_lengthening: milliseconds >= 0,
        }
    }

    /// Gets the signed difference in milliseconds.
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.milliseconds
    }

    /// Checks if the day got longer (or stayed the same).
    #[must_use]
    pub const fn is_lengthening(&self) -> bool {
        self.is_lengthening
    }

    /// Gets the magnitude of the change in whole seconds, truncated toward zero.
    ///
    /// Truncation happens before the sign is dropped, so -2.5 s and +2.5 s both
    /// give 2. Flooring the signed value first would give 3 for the shortening day.
    #[must_use]
    pub const fn whole_seconds(&self) -> u64 {
        (self.milliseconds / 1000).unsigned_abs()
    }

    /// Splits the magnitude into whole minutes and remaining seconds.
    #[must_use]
    pub const fn minutes_and_seconds(&self) -> (u64, u64) {
        let seconds = self.whole_seconds();
        (seconds / 60, seconds % 60)
    }
}

impl fmt::Display for DayLengthDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, seconds) = self.minutes_and_seconds();
        if minutes > 0 {
            write!(f, "{minutes} min {seconds} s")
        } else {
            write!(f, "{seconds} s")
        }
    }
}
