//! Prints a month of sunrise, sunset and twilight lengths for one place.

use sunriset::{
    SunriseResult, day_astronomical_twilight_length, day_civil_twilight_length, day_length,
    day_nautical_twilight_length, sun_rise_set, time::days_in_month,
};

fn format_time(hours: f64) -> String {
    let (h, m, _) = sunriset::HoursUtc::from_hours(hours).hms();
    format!("{h:02}:{m:02}")
}

fn main() {
    // Stockholm
    let (longitude, latitude) = (18.07, 59.33);
    let (year, month) = (2024, 6);

    println!("Stockholm {year}-{month:02} ({longitude}°E, {latitude}°N), times in UT");
    println!(
        "{:>4}  {:>5}  {:>5}  {:>6}  {:>6}  {:>6}  {:>6}",
        "day", "rise", "set", "day", "civil", "naut", "astro"
    );

    let last_day = days_in_month(year, month).unwrap_or(30);
    for day in 1..=last_day {
        let (rise, set) = match sun_rise_set(year, month, day, longitude, latitude) {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => (format_time(sunrise), format_time(sunset)),
            SunriseResult::AllDay { .. } => ("--".into(), "--".into()),
            SunriseResult::AllNight { .. } => ("**".into(), "**".into()),
        };

        println!(
            "{:>4}  {:>5}  {:>5}  {:>6.2}  {:>6.2}  {:>6.2}  {:>6.2}",
            day,
            rise,
            set,
            day_length(year, month, day, longitude, latitude),
            day_civil_twilight_length(year, month, day, longitude, latitude),
            day_nautical_twilight_length(year, month, day, longitude, latitude),
            day_astronomical_twilight_length(year, month, day, longitude, latitude),
        );
    }
}
