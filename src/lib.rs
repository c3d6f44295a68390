//! # Sun Cycle
//!
//! Sunrise, sunset and day-length change from geographic coordinates.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library implements the sunrise equation from the *Almanac for Computers*
//! (the same closed-form approximation behind the NOAA sunrise/sunset tables) and
//! builds the day-length delta on top of it: how much longer or shorter today is
//! than yesterday at a given place.
//!
//! ## Features
//!
//! - Explicit UTC offset on every call, no implicit timezone
//! - Polar day and night reported as distinct outcomes, never as a bogus time
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `NaiveDate`/`DateTime` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sun-cycle = "0.1"
//!
//! # Minimal std (no chrono)
//! sun-cycle = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sun-cycle = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `trace` for the
//! intermediate quantities of the equation, `debug` when a polar day or night
//! makes an event or a delta undefined. Nothing is printed unless the
//! application installs a logger.
//!
//! ## Quick Start
//!
//! ### Sunrise and sunset (numeric API, no chrono)
//! ```rust
//! use sun_cycle::{almanac, EventResult};
//!
//! // Istanbul on the March equinox, Turkey time (UTC+3)
//! let events = almanac::sunrise_sunset_hours(2024, 3, 20, 41.0082, 28.9784, 3.0).unwrap();
//!
//! match (events.sunrise(), events.sunset()) {
//!     (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) => {
//!         println!("Sunrise: {sunrise}"); // 07:06
//!         println!("Sunset: {sunset}");   // 19:16
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### Day-length delta (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sun_cycle::day_length;
//! use chrono::{DateTime, FixedOffset};
//!
//! let now = "2024-03-20T09:30:00+03:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let delta = day_length::day_length_delta(&now, 41.0082, 28.9784).unwrap();
//!
//! let direction = if delta.is_lengthening() { "longer" } else { "shorter" };
//! println!("Today is {delta} {direction} than yesterday"); // 2 min 44 s longer
//! # }
//! ```
//!
//! ## Accuracy
//!
//! The equation is a low-precision approximation: expect agreement with the NOAA
//! solar calculator within a few minutes outside the polar circles. Near the
//! polar circles sunrise and sunset become very sensitive to the date.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of normalized values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    DayEvents, DayLengthDelta, EventResult, GeoCoordinate, Horizon, LocalHours, SolarEvent,
};

// Algorithm modules
pub mod almanac;
pub mod day_length;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
