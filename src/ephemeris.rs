//! Simplified solar ephemeris.
//!
//! Keplerian elements of the Earth-Sun orbit with linear time rates, valid to
//! roughly one arcminute between 1800 and 2100. The eccentric anomaly comes from
//! a first-order series in the eccentricity instead of iterating Kepler's
//! equation, which is accurate enough for e ≈ 0.0167.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{atan2d, cosd, revolution, sind, sqrt};
use crate::types::{EclipticPosition, EquatorialPosition};

/// Degrees per radian, used to express the eccentricity term in degrees.
const RADEG: f64 = 180.0 / core::f64::consts::PI;

/// Computes the Sun's true ecliptic longitude and distance at a day number.
///
/// # Arguments
/// * `day_number` - Days since 2000 Jan 0.0 UT (see [`crate::time::days_since_epoch`])
///
/// # Example
/// ```
/// # use sunriset::ephemeris::sunpos;
/// // Near the March equinox the Sun is close to longitude 0°.
/// let pos = sunpos(8846.5); // 2024-03-20 12:00 UT
/// assert!(pos.longitude < 1.0 || pos.longitude > 359.0);
/// assert!((pos.distance - 0.996).abs() < 0.001);
/// ```
#[must_use]
pub fn sunpos(day_number: f64) -> EclipticPosition {
    let d = day_number;

    // Mean anomaly, argument of perihelion and eccentricity
    let m = revolution(356.0470 + 0.9856002585 * d);
    let w = 282.9404 + 4.70935E-5 * d;
    let e = 0.016709 - 1.151E-9 * d;

    // Eccentric anomaly, first-order approximation
    let ecc_anomaly = m + e * RADEG * sind(m) * (1.0 + e * cosd(m));

    // Position in the orbital plane (mean distance 1 AU)
    let x = cosd(ecc_anomaly) - e;
    let y = sqrt(1.0 - e * e) * sind(ecc_anomaly);

    let distance = sqrt(x * x + y * y);
    let true_anomaly = atan2d(y, x);

    EclipticPosition {
        longitude: revolution(true_anomaly + w),
        distance,
    }
}

/// Obliquity of the ecliptic in degrees at a day number.
#[must_use]
pub fn obliquity_of_ecliptic(day_number: f64) -> f64 {
    23.4393 - 3.563E-7 * day_number
}

/// Computes the Sun's right ascension, declination and distance at a day number.
///
/// Rotates the ecliptic position from [`sunpos`] about the x axis by the
/// obliquity of the ecliptic.
///
/// # Example
/// ```
/// # use sunriset::ephemeris::sun_ra_dec;
/// // June solstice: declination close to the obliquity.
/// let pos = sun_ra_dec(8939.5); // 2024-06-21 12:00 UT
/// assert!((pos.declination - 23.44).abs() < 0.05);
/// assert!((pos.right_ascension - 90.0).abs() < 1.0);
/// ```
#[must_use]
pub fn sun_ra_dec(day_number: f64) -> EquatorialPosition {
    let EclipticPosition {
        longitude,
        distance,
    } = sunpos(day_number);

    // Ecliptic rectangular coordinates (z = 0 for the Sun)
    let x = distance * cosd(longitude);
    let y = distance * sind(longitude);

    let obliquity = obliquity_of_ecliptic(day_number);
    let z = y * sind(obliquity);
    let y = y * cosd(obliquity);

    EquatorialPosition {
        right_ascension: revolution(atan2d(y, x)),
        declination: atan2d(z, sqrt(x * x + y * y)),
        distance,
    }
}
