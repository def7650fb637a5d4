//! Mathematical utilities: float backend selection, degree-based trigonometry
//! and angle normalization.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

const INV360: f64 = 1.0 / 360.0;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle to the range [0, 360) degrees.
///
/// Uses a single floor division, so the cost does not grow with the number of
/// whole revolutions in `x`.
///
/// # Example
/// ```
/// # use sunriset::revolution;
/// assert_eq!(revolution(370.0), 10.0);
/// assert_eq!(revolution(-90.0), 270.0);
/// ```
#[must_use]
pub fn revolution(x: f64) -> f64 {
    let reduced = x - 360.0 * floor(x * INV360);
    // Rounding can land exactly on 360 for tiny negative inputs.
    if reduced >= 360.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// Reduces an angle to the range (-180, 180] degrees.
///
/// # Example
/// ```
/// # use sunriset::rev180;
/// assert_eq!(rev180(190.0), -170.0);
/// assert_eq!(rev180(-180.0), 180.0);
/// ```
#[must_use]
pub fn rev180(x: f64) -> f64 {
    let reduced = x - 360.0 * ceil(x * INV360 - 0.5);
    if reduced <= -180.0 {
        reduced + 360.0
    } else if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sind(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cosd(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Arc cosine returning degrees.
#[inline]
pub fn acosd(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Two-argument arc tangent returning degrees.
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}

/// Rounds half away from zero using the appropriate function for the compilation target.
#[inline]
pub fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

/// Computes (x * a) + b with only one rounding error (fused multiply-add).
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}
