//! Sunrise, sunset and twilight solver.
//!
//! The Sun's hour angle at a given altitude follows from the spherical triangle
//! pole-zenith-Sun:
//!
//! ```text
//! cos H = (sin h − sin φ · sin δ) / (cos φ · cos δ)
//! ```
//!
//! A first pass evaluates it with the Sun's position at local mean noon. The
//! declination drifts by up to 0.4° per day, so a second pass re-evaluates the
//! Sun's position, sidereal time and hour angle at each approximate event time
//! and corrects that event.
//!
//! Longitude is east-positive and always precedes latitude in the argument
//! lists. Times are hours UT.

#![allow(clippy::too_many_arguments)]

use crate::ephemeris::sun_ra_dec;
use crate::error::{check_altitude, check_coordinates};
use crate::math::{acosd, cosd, mul_add, rev180, revolution, sind};
use crate::time::{check_date, days_since_epoch, gmst0};
use crate::types::{EquatorialPosition, Horizon, HoursUtc, SunriseResult};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Apparent solar radius in degrees at a distance of 1 AU.
const SOLAR_RADIUS_AT_1AU: f64 = 0.2666;

/// Degrees of hour angle per hour of time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Day/night classification for a given altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PolarType {
    AllDay,
    AllNight,
}

/// Event whose time the second pass refines.
#[derive(Debug, Clone, Copy)]
enum Event {
    Rise,
    Transit,
    Set,
}

/// Observer and threshold shared by both passes.
#[derive(Debug, Clone, Copy)]
struct Observer {
    longitude: f64,
    latitude: f64,
    altitude: f64,
    upper_limb: bool,
}

impl Observer {
    /// Cosine of the hour angle at which the Sun's centre (or upper limb) sits
    /// at the threshold altitude. Values outside (-1, 1) mean no crossing.
    fn cos_hour_angle(&self, sun: &EquatorialPosition) -> f64 {
        let altitude = if self.upper_limb {
            self.altitude - SOLAR_RADIUS_AT_1AU / sun.distance
        } else {
            self.altitude
        };

        mul_add(
            sind(self.latitude),
            -sind(sun.declination),
            sind(altitude),
        ) / (cosd(self.latitude) * cosd(sun.declination))
    }
}

/// Ratio ≥ 1: the Sun stays below the threshold; ratio ≤ −1: it stays above.
fn check_polar_conditions_type(cos_hour_angle: f64) -> Option<PolarType> {
    if cos_hour_angle >= 1.0 {
        Some(PolarType::AllNight)
    } else if cos_hour_angle <= -1.0 {
        Some(PolarType::AllDay)
    } else {
        None
    }
}

/// Refines one event time by re-evaluating the Sun at `estimate` hours UT.
///
/// Returns `None` when the refined moment has no crossing of the threshold.
fn refine_event(days: f64, observer: &Observer, event: Event, estimate: f64) -> Option<f64> {
    let d = days + estimate / 24.0;
    let sun = sun_ra_dec(d);

    let local_sidereal_time =
        revolution(gmst0(d) + DEGREES_PER_HOUR * estimate + observer.longitude);
    let hour_angle = local_sidereal_time - sun.right_ascension;

    let target = match event {
        Event::Transit => 0.0,
        Event::Rise | Event::Set => {
            let cos_h = observer.cos_hour_angle(&sun);
            if check_polar_conditions_type(cos_h).is_some() {
                return None;
            }
            let h = acosd(cos_h);
            if matches!(event, Event::Rise) { -h } else { h }
        }
    };

    Some(estimate + rev180(target - hour_angle) / DEGREES_PER_HOUR)
}

fn refine_or_keep(days: f64, observer: &Observer, event: Event, estimate: f64) -> f64 {
    refine_event(days, observer, event, estimate).unwrap_or_else(|| {
        log::trace!("no threshold crossing at refined {event:?} time, keeping {estimate:.4} h");
        estimate
    })
}

/// First pass: transit estimate in hours UT and cos H, both from the Sun's
/// position at local mean noon.
///
/// The transit is searched around local mean noon (12h − longitude/15), so
/// near the date line it can fall outside 0..24.
fn first_pass(days: f64, observer: &Observer) -> (f64, f64) {
    let d = days + 0.5 - observer.longitude / 360.0;
    let sun = sun_ra_dec(d);

    // Local sidereal time at 12h UT
    let sidereal_time = revolution(gmst0(d) + 180.0 + observer.longitude);
    let offset = rev180(sidereal_time - sun.right_ascension - observer.longitude);
    let transit_estimate = 12.0 - (observer.longitude + offset) / DEGREES_PER_HOUR;

    (transit_estimate, observer.cos_hour_angle(&sun))
}

/// Two-pass solver. Times are continuous hours from 0h UT of the date and may
/// fall before 0 or after 24.
fn calculate_sunrise_sunset_core(days: f64, observer: &Observer) -> SunriseResult<f64> {
    let (transit_estimate, cos_h) = first_pass(days, observer);

    let transit = refine_or_keep(days, observer, Event::Transit, transit_estimate);

    match check_polar_conditions_type(cos_h) {
        Some(PolarType::AllDay) => {
            log::trace!("sun stays above {:.4}° (cos H = {cos_h:.4})", observer.altitude);
            SunriseResult::AllDay { transit }
        }
        Some(PolarType::AllNight) => {
            log::trace!("sun stays below {:.4}° (cos H = {cos_h:.4})", observer.altitude);
            SunriseResult::AllNight { transit }
        }
        None => {
            let half_arc = acosd(cos_h) / DEGREES_PER_HOUR;
            SunriseResult::RegularDay {
                sunrise: refine_or_keep(
                    days,
                    observer,
                    Event::Rise,
                    transit_estimate - half_arc,
                ),
                transit,
                sunset: refine_or_keep(days, observer, Event::Set, transit_estimate + half_arc),
            }
        }
    }
}

fn solve(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    altitude: f64,
    upper_limb: bool,
) -> SunriseResult<f64> {
    let observer = Observer {
        longitude,
        latitude,
        altitude,
        upper_limb,
    };
    calculate_sunrise_sunset_core(days_since_epoch(year, month, day), &observer)
}

/// Computes sunrise, transit and sunset for a date, position and altitude threshold.
///
/// # Arguments
/// * `year`, `month`, `day` - Gregorian calendar date
/// * `longitude` - Observer longitude in degrees, east positive
/// * `latitude` - Observer latitude in degrees, north positive
/// * `altitude` - Altitude threshold in degrees (e.g. -35/60 for sunrise, -6 for civil twilight)
/// * `upper_limb` - Measure the Sun's upper limb instead of its centre
///
/// # Returns
/// Times in UT hours within [0, 24). `AllDay` means the Sun never sinks below
/// the threshold that day, `AllNight` that it never reaches it; both carry only
/// the transit time. Inputs are not validated; use [`sunrise_sunset_utc`] for that.
///
/// # Example
/// ```
/// use sunriset::{sunriset, SunriseResult};
///
/// // London, 2024-01-01
/// let result = sunriset(2024, 1, 1, -0.1276, 51.5072, -35.0 / 60.0, true);
/// if let SunriseResult::RegularDay { sunrise, sunset, .. } = result {
///     assert!((sunrise - 8.1).abs() < 0.05); // 08:06 UT
///     assert!((sunset - 16.03).abs() < 0.05); // 16:02 UT
/// } else {
///     panic!("expected a regular day");
/// }
/// ```
#[must_use]
pub fn sunriset(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    altitude: f64,
    upper_limb: bool,
) -> SunriseResult<f64> {
    solve(year, month, day, longitude, latitude, altitude, upper_limb)
        .map(|hours| HoursUtc::from_hours(hours).normalized())
}

/// Computes the time in hours the Sun spends above an altitude threshold.
///
/// Uses the rise and set times of [`sunriset`]; a set time that wraps past
/// midnight UT is counted on the following day. Returns 24.0 when the Sun
/// never sets and 0.0 when it never rises.
///
/// # Example
/// ```
/// use sunriset::daylen;
///
/// // 70°N: midnight sun in June, polar night in December
/// assert_eq!(daylen(2024, 6, 21, 25.0, 70.0, -35.0 / 60.0, true), 24.0);
/// assert_eq!(daylen(2024, 12, 21, 25.0, 70.0, -35.0 / 60.0, true), 0.0);
/// ```
#[must_use]
pub fn daylen(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    altitude: f64,
    upper_limb: bool,
) -> f64 {
    match sunriset(year, month, day, longitude, latitude, altitude, upper_limb) {
        SunriseResult::RegularDay {
            sunrise, sunset, ..
        } => {
            let length = sunset - sunrise;
            if length < 0.0 { length + 24.0 } else { length }
        }
        SunriseResult::AllDay { .. } => 24.0,
        SunriseResult::AllNight { .. } => 0.0,
    }
}

/// [`sunriset`] with the threshold and limb convention taken from a [`Horizon`].
#[must_use]
pub fn sunriset_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    horizon: Horizon,
) -> SunriseResult<f64> {
    sunriset(
        year,
        month,
        day,
        longitude,
        latitude,
        horizon.altitude(),
        horizon.upper_limb(),
    )
}

/// [`daylen`] with the threshold and limb convention taken from a [`Horizon`].
#[must_use]
pub fn daylen_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    horizon: Horizon,
) -> f64 {
    daylen(
        year,
        month,
        day,
        longitude,
        latitude,
        horizon.altitude(),
        horizon.upper_limb(),
    )
}

/// Sunrise and sunset: upper limb at -35 arcminutes.
#[must_use]
pub fn sun_rise_set(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> SunriseResult<f64> {
    sunriset_for_horizon(year, month, day, longitude, latitude, Horizon::SunriseSunset)
}

/// Start and end of civil twilight: Sun's centre at -6°.
#[must_use]
pub fn civil_twilight(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> SunriseResult<f64> {
    sunriset_for_horizon(year, month, day, longitude, latitude, Horizon::CivilTwilight)
}

/// Start and end of nautical twilight: Sun's centre at -12°.
#[must_use]
pub fn nautical_twilight(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> SunriseResult<f64> {
    sunriset_for_horizon(year, month, day, longitude, latitude, Horizon::NauticalTwilight)
}

/// Start and end of astronomical twilight: Sun's centre at -18°.
#[must_use]
pub fn astronomical_twilight(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> SunriseResult<f64> {
    sunriset_for_horizon(
        year,
        month,
        day,
        longitude,
        latitude,
        Horizon::AstronomicalTwilight,
    )
}

/// Length of the day from sunrise to sunset, in hours.
#[must_use]
pub fn day_length(year: i32, month: u32, day: u32, longitude: f64, latitude: f64) -> f64 {
    daylen_for_horizon(year, month, day, longitude, latitude, Horizon::SunriseSunset)
}

/// Length of the day including civil twilight, in hours.
#[must_use]
pub fn day_civil_twilight_length(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> f64 {
    daylen_for_horizon(year, month, day, longitude, latitude, Horizon::CivilTwilight)
}

/// Length of the day including nautical twilight, in hours.
#[must_use]
pub fn day_nautical_twilight_length(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> f64 {
    daylen_for_horizon(year, month, day, longitude, latitude, Horizon::NauticalTwilight)
}

/// Length of the day including astronomical twilight, in hours.
#[must_use]
pub fn day_astronomical_twilight_length(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
) -> f64 {
    daylen_for_horizon(
        year,
        month,
        day,
        longitude,
        latitude,
        Horizon::AstronomicalTwilight,
    )
}

/// Calculate sunrise/sunset times with input validation.
///
/// Returns times as hours since midnight UTC for the given date, without
/// wrapping into [0, 24): a sunset after midnight UT is reported as ≥ 24.0 and
/// a sunrise before midnight UT as negative, so the three times are always in
/// chronological order.
///
/// # Arguments
/// * `year` - Year
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `longitude` - Observer longitude in degrees (-180 to +180, east positive)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `altitude` - Altitude threshold in degrees (-90 to +90)
/// * `upper_limb` - Measure the Sun's upper limb instead of its centre
///
/// # Errors
/// Returns error for invalid date components, coordinates or altitude.
///
/// # Example
/// ```
/// use sunriset::{riseset, SunriseResult};
///
/// // San Francisco, 2023-06-21
/// let result =
///     riseset::sunrise_sunset_utc(2023, 6, 21, -122.4194, 37.7749, -35.0 / 60.0, true).unwrap();
///
/// if let SunriseResult::RegularDay { sunrise, transit, sunset } = result {
///     assert!((sunrise.hours() - 12.8).abs() < 0.05); // 05:48 PDT
///     assert!(transit.hours() > sunrise.hours());
///     assert!(sunset.hours() > 24.0); // 03:35 UT on the next day
///     assert_eq!(sunset.day_and_hours().0, 1);
/// }
/// ```
pub fn sunrise_sunset_utc(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    altitude: f64,
    upper_limb: bool,
) -> Result<SunriseResult<HoursUtc>> {
    check_date(year, month, day)?;
    check_coordinates(longitude, latitude)?;
    check_altitude(altitude)?;

    Ok(solve(year, month, day, longitude, latitude, altitude, upper_limb).map(HoursUtc::from_hours))
}

/// Calculate sunrise, transit and sunset for a specific horizon type, with validation.
///
/// # Errors
/// Returns error for invalid date components, coordinates, or a custom
/// horizon outside -90 to +90 degrees.
///
/// # Example
/// ```rust
/// use sunriset::{riseset, Horizon};
///
/// let twilight = riseset::sunrise_sunset_utc_for_horizon(
///     2023, 6, 21,
///     -122.4194, 37.7749,
///     Horizon::CivilTwilight,
/// ).unwrap();
/// assert!(twilight.is_regular_day());
/// ```
pub fn sunrise_sunset_utc_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<HoursUtc>> {
    sunrise_sunset_utc(
        year,
        month,
        day,
        longitude,
        latitude,
        horizon.altitude(),
        horizon.upper_limb(),
    )
}

/// Day length in hours for a horizon type, with validation.
///
/// # Errors
/// Returns error for invalid date components, coordinates or custom horizon.
pub fn day_length_for_horizon(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<f64> {
    check_date(year, month, day)?;
    check_coordinates(longitude, latitude)?;
    check_altitude(horizon.altitude())?;

    Ok(daylen_for_horizon(
        year, month, day, longitude, latitude, horizon,
    ))
}

/// Calculate sunrise/sunset times for several horizons of the same date and place.
///
/// Validation runs once up front; each horizon is then solved lazily as the
/// iterator is consumed. On invalid input every item is the same error.
///
/// # Example
/// ```rust
/// use sunriset::{riseset, Horizon};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let horizons = [Horizon::SunriseSunset, Horizon::CivilTwilight, Horizon::NauticalTwilight];
/// let results: Vec<_> = riseset::sunrise_sunset_multiple(
///     2023, 6, 21, -122.4194, 37.7749, horizons,
/// )
/// .collect::<Result<_, _>>()?;
///
/// assert_eq!(results.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn sunrise_sunset_multiple<H>(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
    latitude: f64,
    horizons: H,
) -> impl Iterator<Item = Result<(Horizon, SunriseResult<HoursUtc>)>>
where
    H: IntoIterator<Item = Horizon>,
{
    let validated = check_date(year, month, day)
        .and_then(|()| check_coordinates(longitude, latitude))
        .map(|()| days_since_epoch(year, month, day));

    horizons.into_iter().map(move |horizon| {
        let days = validated.clone()?;
        check_altitude(horizon.altitude())?;
        let observer = Observer {
            longitude,
            latitude,
            altitude: horizon.altitude(),
            upper_limb: horizon.upper_limb(),
        };
        let result = calculate_sunrise_sunset_core(days, &observer).map(HoursUtc::from_hours);
        Ok((horizon, result))
    })
}

/// Calculate sunrise, transit and sunset as timezone-aware instants.
///
/// The calculation day is the local mean solar date at clock noon of `date`'s
/// calendar day, so the events land on that local day even where the time
/// zone is a full day away from the longitude's solar time. Results are
/// expressed in `date`'s time zone.
///
/// # Errors
/// Returns error for invalid coordinates or an event outside chrono's range.
///
/// # Example
/// ```rust
/// use sunriset::{riseset, Horizon};
/// use chrono::{DateTime, FixedOffset, Timelike};
///
/// let date = "2023-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = riseset::sunrise_sunset(date, -122.4194, 37.7749, Horizon::SunriseSunset).unwrap();
///
/// let sunrise = result.sunrise().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute()), (5, 47));
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_sunset<Tz: TimeZone>(
    date: DateTime<Tz>,
    longitude: f64,
    latitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<DateTime<Tz>>> {
    check_coordinates(longitude, latitude)?;
    check_altitude(horizon.altitude())?;

    let timezone = date.timezone();
    let local_day = date.date_naive();
    let local_noon = local_day
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| crate::Error::invalid_date("local noon is not representable"))?;
    let noon_utc = timezone
        .from_local_datetime(&local_noon)
        .earliest()
        .map_or_else(|| date.naive_utc(), |noon| noon.naive_utc());

    // Local mean solar time runs longitude/15 hours ahead of UT
    let solar_offset =
        chrono::Duration::try_milliseconds((longitude / DEGREES_PER_HOUR * 3_600_000.0) as i64)
            .ok_or_else(|| crate::Error::invalid_date("solar time offset is out of range"))?;
    let ut_day = noon_utc
        .checked_add_signed(solar_offset)
        .ok_or_else(|| crate::Error::invalid_date("local noon is not representable"))?
        .date();

    let observer = Observer {
        longitude,
        latitude,
        altitude: horizon.altitude(),
        upper_limb: horizon.upper_limb(),
    };
    let days = crate::time::days_since_epoch_for_date(ut_day);

    calculate_sunrise_sunset_core(days, &observer).try_map(|hours| {
        HoursUtc::from_hours(hours)
            .to_datetime(ut_day)
            .map(|instant| instant.with_timezone(&timezone))
            .ok_or_else(|| crate::Error::invalid_date("event time is out of range"))
    })
}
