//! Error types for the checked sunrise/sunset API.
//!
//! The unchecked numeric functions never fail; these errors only come from
//! the validating wrappers in [`crate::riseset`] and [`crate::time::check_date`].

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the validating API.
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
    /// Invalid altitude threshold for sunrise/sunset calculations.
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Date that does not exist in the proleptic Gregorian calendar.
    InvalidDate {
        /// Description of the date constraint violation.
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
            Self::InvalidAltitude { value } => {
                write!(
                    f,
                    "invalid altitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
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

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
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

/// Validates both longitude and latitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLongitude` or `InvalidLatitude` for out-of-range coordinates.
pub fn check_coordinates(longitude: f64, latitude: f64) -> Result<()> {
    check_longitude(longitude)?;
    check_latitude(latitude)?;
    Ok(())
}

/// Validates an altitude threshold (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidAltitude` for non-finite or out-of-range values.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(122.5).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_coordinate_order() {
        assert_eq!(
            check_coordinates(200.0, 95.0),
            Err(Error::invalid_longitude(200.0))
        );
        assert_eq!(
            check_coordinates(20.0, 95.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert!(check_coordinates(-122.4, 37.8).is_ok());
    }

    #[test]
    fn test_altitude_validation() {
        assert!(check_altitude(-35.0 / 60.0).is_ok());
        assert!(check_altitude(-18.0).is_ok());
        assert!(check_altitude(90.0).is_ok());

        assert!(check_altitude(-90.5).is_err());
        assert!(check_altitude(f64::NAN).is_err());
        assert!(check_altitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_date("day is out of range for month");
        assert_eq!(err.to_string(), "invalid date: day is out of range for month");
    }
}
