//! # Sunrise, Sunset and Twilight
//!
//! Compact solar ephemeris for sunrise, sunset, twilight and day-length calculations.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library computes, for any date and place on Earth:
//! - Times of sunrise, solar noon (transit) and sunset in hours UT
//! - Start and end of civil, nautical and astronomical twilight
//! - Length of the day, with or without twilight
//! - Polar day / polar night classification for any altitude threshold
//!
//! The solar position comes from a low-precision Keplerian orbit of the Earth
//! (about one arcminute between 1800 and 2100), which puts rise and set times
//! within a minute or two of the published almanac values at mid latitudes.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Two-pass solver: the Sun's position is re-evaluated at each approximate event time
//! - Unchecked numeric API that never fails, plus a validating API with typed errors
//! - Thread-safe: Stateless, pure functions
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! sunriset = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! sunriset = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunriset = { version = "0.1", default-features = false, features = ["libm"] }
//!
//! # no_std + chrono (embedded with DateTime support)
//! sunriset = { version = "0.1", default-features = false, features = ["libm", "chrono"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Numeric API
//! ```rust
//! use sunriset::{sunriset, daylen, SunriseResult, SUNRISE_SUNSET_ALTITUDE};
//!
//! // Vienna, 2024-06-21: longitude first, east positive
//! let result = sunriset(2024, 6, 21, 16.37, 48.21, SUNRISE_SUNSET_ALTITUDE, true);
//!
//! match result {
//!     SunriseResult::RegularDay { sunrise, transit, sunset } => {
//!         println!("Sunrise:    {sunrise:.3} h UT");
//!         println!("Solar noon: {transit:.3} h UT");
//!         println!("Sunset:     {sunset:.3} h UT");
//!     }
//!     SunriseResult::AllDay { .. } => println!("Sun above the horizon all day"),
//!     SunriseResult::AllNight { .. } => println!("Sun below the horizon all day"),
//! }
//!
//! let hours = daylen(2024, 6, 21, 16.37, 48.21, SUNRISE_SUNSET_ALTITUDE, true);
//! assert!((hours - 16.08).abs() < 0.05);
//! ```
//!
//! ### Twilight
//! ```rust
//! use sunriset::{civil_twilight, day_civil_twilight_length, day_length};
//!
//! let dawn_dusk = civil_twilight(2024, 6, 21, 16.37, 48.21);
//! assert!(dawn_dusk.is_regular_day());
//! assert!(day_civil_twilight_length(2024, 6, 21, 16.37, 48.21) > day_length(2024, 6, 21, 16.37, 48.21));
//! ```
//!
//! ### Sunrise and Sunset (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use sunriset::{riseset, Horizon};
//! use chrono::{DateTime, FixedOffset};
//!
//! // Calculate sunrise/sunset for San Francisco
//! let date = "2026-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let result = riseset::sunrise_sunset(
//!     date,
//!     -122.4194, // San Francisco longitude
//!     37.7749,   // San Francisco latitude
//!     Horizon::SunriseSunset,
//! ).unwrap();
//!
//! match result {
//!     sunriset::SunriseResult::RegularDay { sunrise, transit, sunset } => {
//!         println!("Sunrise: {}", sunrise);
//!         println!("Solar noon: {}", transit);
//!         println!("Sunset: {}", sunset);
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! # }
//! ```
//!
//! ## Conventions
//!
//! - **Longitude**: degrees, east positive, always the first coordinate argument
//! - **Latitude**: degrees, north positive
//! - **Altitude**: degrees above the horizon; negative below
//! - **Times**: hours UT from 0h of the calculation date
//! - **Day number**: days since 2000 Jan 0.0 UT (1999-12-31 00:00 UT)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::ephemeris::{sun_ra_dec, sunpos};
pub use crate::error::{Error, Result};
pub use crate::math::{rev180, revolution};
pub use crate::riseset::{
    astronomical_twilight, civil_twilight, day_astronomical_twilight_length,
    day_civil_twilight_length, day_length, day_nautical_twilight_length, daylen,
    nautical_twilight, sun_rise_set, sunriset,
};
pub use crate::time::{days_since_epoch, gmst0};
pub use crate::types::{
    EclipticPosition, EquatorialPosition, Horizon, HoursUtc, SUNRISE_SUNSET_ALTITUDE,
    SunriseResult,
};

// Algorithm modules
pub mod ephemeris;
pub mod riseset;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
