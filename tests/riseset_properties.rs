//! Physical properties of rise/set times and day lengths that must hold everywhere.

use sunriset::{
    Horizon, SUNRISE_SUNSET_ALTITUDE, SunriseResult, day_astronomical_twilight_length,
    day_civil_twilight_length, day_length, day_nautical_twilight_length, daylen, riseset,
    sunriset,
};

/// Every fourth day of 2024 as (month, day).
fn sample_dates() -> Vec<(u32, u32)> {
    let month_lengths = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut dates = Vec::new();
    for (month, &length) in (1..=12).zip(month_lengths.iter()) {
        for day in (1..=length).step_by(4) {
            dates.push((month, day));
        }
    }
    dates
}

#[test]
fn twilight_day_lengths_are_nested() {
    for latitude in (-18..=18).map(|i| f64::from(i) * 5.0) {
        for longitude in [-179.5, -100.0, 0.0, 45.0, 170.0] {
            for (month, day) in sample_dates() {
                let lengths = [
                    day_length(2024, month, day, longitude, latitude),
                    day_civil_twilight_length(2024, month, day, longitude, latitude),
                    day_nautical_twilight_length(2024, month, day, longitude, latitude),
                    day_astronomical_twilight_length(2024, month, day, longitude, latitude),
                ];

                for length in lengths {
                    assert!(
                        (0.0..=24.0).contains(&length),
                        "lat={latitude} lon={longitude} 2024-{month}-{day}: {lengths:?}"
                    );
                }
                for pair in lengths.windows(2) {
                    assert!(
                        pair[0] <= pair[1] + 1e-9,
                        "lat={latitude} lon={longitude} 2024-{month}-{day}: {lengths:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn vienna_midsummer_day_lengths() {
    let (lon, lat) = (16.37, 48.21);
    assert!((day_length(2024, 6, 21, lon, lat) - 16.083).abs() < 0.01);
    assert!((day_civil_twilight_length(2024, 6, 21, lon, lat) - 17.468).abs() < 0.01);
    assert!((day_nautical_twilight_length(2024, 6, 21, lon, lat) - 19.415).abs() < 0.01);
    assert!((day_astronomical_twilight_length(2024, 6, 21, lon, lat) - 22.941).abs() < 0.01);
}

#[test]
fn equator_equinox_day_is_half_a_day() {
    // Geometric centre at 0°: day and night split evenly
    let centre = daylen(2024, 3, 20, 0.0, 0.0, 0.0, false);
    assert!((centre - 12.0).abs() < 0.05, "centre={centre}");

    // Refraction and the upper limb add about 6.5 minutes
    let ordinary = daylen(2024, 3, 20, 0.0, 0.0, SUNRISE_SUNSET_ALTITUDE, true);
    assert!((ordinary - 12.11).abs() < 0.05, "ordinary={ordinary}");
}

#[test]
fn equatorial_days_stay_near_twelve_hours() {
    for latitude in [-10.0, -5.0, 0.0, 5.0, 10.0] {
        for (month, day) in sample_dates() {
            let length = day_length(2024, month, day, 0.0, latitude);
            assert!(
                (11.5..12.75).contains(&length),
                "lat={latitude} 2024-{month}-{day}: {length}"
            );
        }
    }
}

#[test]
fn polar_day_and_night_at_seventy_degrees() {
    for longitude in [-150.0, 0.0, 25.0, 120.0] {
        let summer = sunriset(2024, 6, 21, longitude, 70.0, SUNRISE_SUNSET_ALTITUDE, true);
        assert!(summer.is_polar_day(), "lon={longitude}: {summer:?}");
        assert_eq!(daylen(2024, 6, 21, longitude, 70.0, SUNRISE_SUNSET_ALTITUDE, true), 24.0);

        let winter = sunriset(2024, 12, 21, longitude, 70.0, SUNRISE_SUNSET_ALTITUDE, true);
        assert!(winter.is_polar_night(), "lon={longitude}: {winter:?}");
        assert_eq!(daylen(2024, 12, 21, longitude, 70.0, SUNRISE_SUNSET_ALTITUDE, true), 0.0);
    }
}

#[test]
fn poles_are_always_classified() {
    for (month, day) in sample_dates() {
        for latitude in [90.0, -90.0] {
            let result = sunriset(2024, month, day, 0.0, latitude, SUNRISE_SUNSET_ALTITUDE, true);
            // At a pole the Sun's altitude is its declination all day
            assert!(
                !result.is_regular_day(),
                "lat={latitude} 2024-{month}-{day}: {result:?}"
            );
        }
    }
}

#[test]
fn results_are_finite_near_polar_boundary() {
    for latitude in (0..=480).map(|i| 65.0 + f64::from(i) * 0.05) {
        let result = riseset::sunrise_sunset_utc_for_horizon(
            2023,
            6,
            21,
            0.0,
            latitude,
            Horizon::SunriseSunset,
        )
        .unwrap();

        if let SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } = result
        {
            assert!(sunrise.hours().is_finite());
            assert!(transit.hours().is_finite());
            assert!(sunset.hours().is_finite());
            assert!(sunrise.hours() <= transit.hours() && transit.hours() <= sunset.hours());
        } else {
            assert!(result.is_polar_day(), "lat={latitude}: {result:?}");
        }
    }
}

#[test]
fn sunriset_times_are_normalized() {
    for longitude in (-12..=12).map(|i| f64::from(i) * 15.0) {
        for latitude in [-60.0, -33.9, 0.0, 37.8, 60.0] {
            for (month, day) in sample_dates() {
                let result = sunriset(
                    2024,
                    month,
                    day,
                    longitude,
                    latitude,
                    SUNRISE_SUNSET_ALTITUDE,
                    true,
                );
                let times = match result {
                    SunriseResult::RegularDay {
                        sunrise,
                        transit,
                        sunset,
                    } => vec![sunrise, transit, sunset],
                    SunriseResult::AllDay { transit } | SunriseResult::AllNight { transit } => {
                        vec![transit]
                    }
                };
                for t in times {
                    assert!((0.0..24.0).contains(&t), "lon={longitude} lat={latitude}: {t}");
                }
            }
        }
    }
}

#[test]
fn day_length_varies_smoothly() {
    // Consecutive days never differ by more than ~10 minutes below the polar circles
    for latitude in [-60.0, -40.0, 0.0, 40.0, 60.0] {
        let mut previous = day_length(2024, 1, 1, 10.0, latitude);
        for (month, day) in sample_dates().into_iter().skip(1) {
            let length = day_length(2024, month, day, 10.0, latitude);
            assert!(
                (length - previous).abs() < 4.0 * 10.0 / 60.0,
                "lat={latitude} 2024-{month}-{day}: {previous} -> {length}"
            );
            previous = length;
        }
    }
}
