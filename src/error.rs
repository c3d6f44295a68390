//! Error types for sunrise, sunset and day-length calculations.

use crate::types::SolarEvent;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Largest accepted distance from UTC, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 18.0;

/// Errors that can occur during solar time calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid UTC offset (must be finite and within ±18 hours).
    InvalidUtcOffset {
        /// The invalid offset in hours.
        value: f64,
    },
    /// Invalid elevation angle for a custom horizon.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDateTime {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// A coordinate string could not be parsed.
    InvalidCoordinateFormat {
        /// Description of the parse failure.
        message: &'static str,
    },
    /// The sun does not rise or does not set on the requested day (polar day or night).
    PolarEventUndefined {
        /// The event that does not occur.
        event: SolarEvent,
    },
    /// Numerical computation error.
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(
                    f,
                    "invalid UTC offset {value} h (must be between -18 h and +18 h)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::InvalidCoordinateFormat { message } => {
                write!(f, "invalid coordinate: {message}")
            }
            Self::PolarEventUndefined { event } => {
                write!(f, "{event} does not occur on this day at this latitude")
            }
            Self::ComputationError { message } => {
                write!(f, "computation error: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a coordinate parse error.
    #[must_use]
    pub const fn invalid_coordinate_format(message: &'static str) -> Self {
        Self::InvalidCoordinateFormat { message }
    }

    /// Creates an error for a sunrise or sunset that does not occur.
    #[must_use]
    pub const fn polar_event_undefined(event: SolarEvent) -> Self {
        Self::PolarEventUndefined { event }
    }

    /// Creates a computation error.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }

    /// Checks whether this error stems from a polar day or night.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(self, Self::PolarEventUndefined { .. })
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a UTC offset given in hours.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is not finite or further than 18 hours from UTC.
pub fn check_utc_offset(utc_offset_hours: f64) -> Result<()> {
    if !(-MAX_UTC_OFFSET_HOURS..=MAX_UTC_OFFSET_HOURS).contains(&utc_offset_hours) {
        return Err(Error::invalid_utc_offset(utc_offset_hours));
    }
    Ok(())
}
