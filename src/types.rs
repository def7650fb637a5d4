//! Core data types for sunrise/sunset and twilight calculations.

use crate::math::floor;
#[cfg(feature = "chrono")]
use crate::math::round;
use crate::{Error, Result};

/// Altitude of the Sun's upper limb at ordinary sunrise/sunset, in degrees.
///
/// The 35 arcminutes are the conventional horizontal refraction; the solar
/// semi-diameter is subtracted separately from the actual Sun-Earth distance.
pub const SUNRISE_SUNSET_ALTITUDE: f64 = -35.0 / 60.0;

/// Predefined altitude thresholds for sunrise/sunset and twilight calculations.
///
/// Corresponds to different twilight definitions for consistent sunrise, sunset, and twilight calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Standard sunrise/sunset (sun's upper limb touches horizon, accounting for refraction)
    SunriseSunset,
    /// Civil twilight (sun's centre is 6° below horizon)
    CivilTwilight,
    /// Nautical twilight (sun's centre is 12° below horizon)
    NauticalTwilight,
    /// Astronomical twilight (sun's centre is 18° below horizon)
    AstronomicalTwilight,
    /// Custom altitude of the sun's centre, in degrees
    Custom(f64),
}

impl Horizon {
    /// Gets the altitude threshold in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        match self {
            Self::SunriseSunset => SUNRISE_SUNSET_ALTITUDE,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(angle) => *angle,
        }
    }

    /// Whether the threshold applies to the sun's upper limb rather than its centre.
    ///
    /// Only ordinary sunrise/sunset is measured at the upper limb.
    #[must_use]
    pub const fn upper_limb(&self) -> bool {
        matches!(self, Self::SunriseSunset)
    }

    /// Creates a custom horizon with the specified altitude of the sun's centre.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if altitude is outside -90 to +90 degrees.
    pub fn custom(altitude_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&altitude_degrees) {
            return Err(Error::invalid_altitude(altitude_degrees));
        }
        Ok(Self::Custom(altitude_degrees))
    }
}

impl Eq for Horizon {}

impl core::hash::Hash for Horizon {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::SunriseSunset => 0.hash(state),
            Self::CivilTwilight => 1.hash(state),
            Self::NauticalTwilight => 2.hash(state),
            Self::AstronomicalTwilight => 3.hash(state),
            Self::Custom(angle) => {
                4.hash(state);
                // Normalize -0.0 and +0.0 so hashing remains consistent with PartialEq
                let normalized = if *angle == 0.0 { 0.0 } else { *angle };
                normalized.to_bits().hash(state);
            }
        }
    }
}

/// The Sun's position in ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// True ecliptic longitude in degrees [0, 360)
    pub longitude: f64,
    /// Sun-Earth distance in astronomical units
    pub distance: f64,
}

/// The Sun's position in equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    /// Right ascension in degrees [0, 360)
    pub right_ascension: f64,
    /// Declination in degrees [-90, 90]
    pub declination: f64,
    /// Sun-Earth distance in astronomical units
    pub distance: f64,
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Values represent hours since midnight UTC (0 UT) for the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use sunriset::types::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// assert!((after_midnight.normalized() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    ///
    /// Values can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the time of day in [0, 24), ignoring which day it falls on.
    #[must_use]
    pub fn normalized(&self) -> f64 {
        self.day_and_hours().1
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `hours_in_day`) where:
    /// - `day_offset`: whole days offset from the calculation date (negative = previous days, positive = following days)
    /// - `hours_in_day`: 0.0 to < 24.0
    ///
    /// # Example
    /// ```
    /// # use sunriset::types::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Splits the time of day into whole hours, minutes and seconds.
    ///
    /// Rounds to the nearest second; a value that rounds up to 24:00:00 wraps to 00:00:00.
    #[must_use]
    pub fn hms(&self) -> (u32, u32, u32) {
        let seconds = (self.normalized() * 3600.0 + 0.5) as u32 % 86_400;
        (seconds / 3600, (seconds / 60) % 60, seconds % 60)
    }

    /// Converts to a UTC instant, counting hours from midnight UTC of `date`.
    ///
    /// Returns `None` for non-finite hours or if the result is out of chrono's range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self, date: chrono::NaiveDate) -> Option<chrono::DateTime<chrono::Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        let millis = round(self.0 * 3_600_000.0) as i64;
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        midnight.checked_add_signed(chrono::Duration::try_milliseconds(millis)?)
    }
}

/// Result of sunrise/sunset calculations for a given day.
///
/// Solar events can vary significantly based on location and time of year,
/// especially at extreme latitudes where polar days and nights occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SunriseResult<T = ()> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (when sun crosses meridian, solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the specified horizon all day
    AllDay {
        /// Time of solar transit (closest approach to zenith)
        transit: T,
    },
    /// Polar night - sun remains below the specified horizon all day
    AllNight {
        /// Time of solar transit (when sun is highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }

    /// Applies `f` to every time carried by the result, keeping the variant.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> SunriseResult<U> {
        match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise),
                transit: f(transit),
                sunset: f(sunset),
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit),
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit),
            },
        }
    }

    /// Like [`SunriseResult::map`], stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(self, mut f: F) -> core::result::Result<SunriseResult<U>, E>
    where
        F: FnMut(T) -> core::result::Result<U, E>,
    {
        Ok(match self {
            Self::RegularDay {
                sunrise,
                transit,
                sunset,
            } => SunriseResult::RegularDay {
                sunrise: f(sunrise)?,
                transit: f(transit)?,
                sunset: f(sunset)?,
            },
            Self::AllDay { transit } => SunriseResult::AllDay {
                transit: f(transit)?,
            },
            Self::AllNight { transit } => SunriseResult::AllNight {
                transit: f(transit)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_altitudes() {
        assert_eq!(Horizon::SunriseSunset.altitude(), -35.0 / 60.0);
        assert_eq!(Horizon::CivilTwilight.altitude(), -6.0);
        assert_eq!(Horizon::NauticalTwilight.altitude(), -12.0);
        assert_eq!(Horizon::AstronomicalTwilight.altitude(), -18.0);

        let custom = Horizon::custom(-3.0).unwrap();
        assert_eq!(custom.altitude(), -3.0);

        assert!(Horizon::custom(-95.0).is_err());
        assert!(Horizon::custom(95.0).is_err());
        assert!(Horizon::custom(f64::NAN).is_err());
    }

    #[test]
    fn test_horizon_upper_limb() {
        assert!(Horizon::SunriseSunset.upper_limb());
        assert!(!Horizon::CivilTwilight.upper_limb());
        assert!(!Horizon::NauticalTwilight.upper_limb());
        assert!(!Horizon::AstronomicalTwilight.upper_limb());
        assert!(!Horizon::Custom(0.0).upper_limb());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_horizon_hash_normalizes_zero_sign() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Horizon::Custom(0.0));
        set.insert(Horizon::Custom(-0.0));

        assert_eq!(set.len(), 1, "hashing should treat +0.0 and -0.0 equally");
    }

    #[test]
    fn test_hours_utc_day_and_hours() {
        let (day, hours) = HoursUtc::from_hours(12.5).day_and_hours();
        assert_eq!(day, 0);
        assert!((hours - 12.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(25.5).day_and_hours();
        assert_eq!(day, 1);
        assert!((hours - 1.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
        assert_eq!(day, -1);
        assert!((hours - 23.5).abs() < 1e-10);

        let (day, hours) = HoursUtc::from_hours(-50.5).day_and_hours();
        assert_eq!(day, -3);
        assert!((hours - 21.5).abs() < 1e-10);
    }

    #[test]
    fn test_hours_utc_hms() {
        assert_eq!(HoursUtc::from_hours(6.5).hms(), (6, 30, 0));
        assert_eq!(HoursUtc::from_hours(27.25).hms(), (3, 15, 0));
        assert_eq!(HoursUtc::from_hours(-0.5).hms(), (23, 30, 0));
        assert_eq!(HoursUtc::from_hours(23.99999).hms(), (0, 0, 0));
        assert_eq!(HoursUtc::from_hours(12.0 + 1.0 / 3600.0).hms(), (12, 0, 1));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_hours_utc_to_datetime() {
        use chrono::{NaiveDate, TimeZone, Utc};

        let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 6, 22, 3, 30, 0).unwrap();
        assert_eq!(HoursUtc::from_hours(27.5).to_datetime(date), Some(expected));

        let expected = Utc.with_ymd_and_hms(2023, 6, 20, 23, 0, 0).unwrap();
        assert_eq!(HoursUtc::from_hours(-1.0).to_datetime(date), Some(expected));

        assert_eq!(HoursUtc::from_hours(f64::NAN).to_datetime(date), None);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_to_datetime_rounds_to_nearest_millisecond() {
        use chrono::{NaiveDate, TimeZone, Timelike, Utc};

        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();

        // 6.5 h plus 0.6 ms rounds up, plus 0.4 ms rounds down
        let up = HoursUtc::from_hours(6.5 + 0.6 / 3_600_000.0)
            .to_datetime(date)
            .unwrap();
        assert_eq!(up.nanosecond(), 1_000_000);

        let down = HoursUtc::from_hours(6.5 + 0.4 / 3_600_000.0)
            .to_datetime(date)
            .unwrap();
        assert_eq!(down, Utc.with_ymd_and_hms(2024, 3, 20, 6, 30, 0).unwrap());

        // Half a millisecond before midnight goes back into the previous day
        let before = HoursUtc::from_hours(-1.5 / 3_600_000.0)
            .to_datetime(date)
            .unwrap();
        assert_eq!(before.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!(before.nanosecond(), 998_000_000);
    }

    #[test]
    fn test_sunrise_result_accessors() {
        let result = SunriseResult::RegularDay {
            sunrise: 5.5,
            transit: 12.0,
            sunset: 18.5,
        };
        assert!(result.is_regular_day());
        assert!(!result.is_polar_day());
        assert!(!result.is_polar_night());
        assert_eq!(result.transit(), &12.0);
        assert_eq!(result.sunrise(), Some(&5.5));
        assert_eq!(result.sunset(), Some(&18.5));

        let result = SunriseResult::AllDay { transit: 11.0 };
        assert!(result.is_polar_day());
        assert_eq!(result.sunrise(), None);
        assert_eq!(result.sunset(), None);

        let result = SunriseResult::AllNight { transit: 11.0 };
        assert!(result.is_polar_night());
        assert_eq!(result.transit(), &11.0);
        assert_eq!(result.sunrise(), None);
    }

    #[test]
    fn test_sunrise_result_map() {
        let result = SunriseResult::RegularDay {
            sunrise: 5.5,
            transit: 12.0,
            sunset: 26.0,
        }
        .map(HoursUtc::from_hours);
        assert_eq!(result.sunset().map(HoursUtc::normalized), Some(2.0));

        let result = SunriseResult::AllNight { transit: 12.5 }.map(|h: f64| h * 2.0);
        assert_eq!(result, SunriseResult::AllNight { transit: 25.0 });
    }

    #[test]
    fn test_sunrise_result_try_map() {
        let result = SunriseResult::RegularDay {
            sunrise: 5.5,
            transit: 12.0,
            sunset: 18.5,
        };
        let ok: core::result::Result<_, &str> = result.clone().try_map(|h| Ok(h + 1.0));
        assert_eq!(ok.unwrap().sunrise(), Some(&6.5));

        let err = result.try_map(|h| if h > 12.0 { Err("late") } else { Ok(h) });
        assert_eq!(err, Err("late"));
    }
}
