//! Local-day sunrise and sunset for places where the clock and the Sun disagree most,
//! with day lengths at every twilight threshold.
//!
//! Kiritimati keeps UTC+14 at 157°W and Adak UTC-10 at 177°W, so the UT date of a
//! local day's sunrise differs from the local date. The events printed below all
//! fall on the requested local date.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use sunriset::{Horizon, SunriseResult, riseset};

struct Place {
    name: &'static str,
    longitude: f64,
    latitude: f64,
    utc_offset_hours: i32,
}

const PLACES: [Place; 4] = [
    Place {
        name: "Kiritimati, Kiribati",
        longitude: -157.47,
        latitude: 1.87,
        utc_offset_hours: 14,
    },
    Place {
        name: "Apia, Samoa",
        longitude: -171.76,
        latitude: -13.83,
        utc_offset_hours: 13,
    },
    Place {
        name: "Adak, Alaska",
        longitude: -176.66,
        latitude: 51.88,
        utc_offset_hours: -10,
    },
    Place {
        name: "Tromsø, Norway",
        longitude: 18.96,
        latitude: 69.65,
        utc_offset_hours: 1,
    },
];

const HORIZONS: [(&str, Horizon); 4] = [
    ("sunrise/sunset", Horizon::SunriseSunset),
    ("civil", Horizon::CivilTwilight),
    ("nautical", Horizon::NauticalTwilight),
    ("astronomical", Horizon::AstronomicalTwilight),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let local_date = NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid date")?;

    for place in &PLACES {
        let offset = FixedOffset::east_opt(place.utc_offset_hours * 3600).ok_or("invalid offset")?;
        let local_midnight = offset
            .from_local_datetime(&local_date.and_hms_opt(0, 0, 0).ok_or("invalid time")?)
            .single()
            .ok_or("ambiguous local midnight")?;

        println!(
            "=== {} ({:.2}°E, {:.2}°N, UTC{:+}) ===",
            place.name, place.longitude, place.latitude, place.utc_offset_hours
        );
        println!("Local date: {local_date}");

        let result = riseset::sunrise_sunset(
            local_midnight,
            place.longitude,
            place.latitude,
            Horizon::SunriseSunset,
        )?;
        print_local_events(&result);

        println!("Day length:");
        let (year, month, day) = ut_date_of(&result);
        for (label, horizon) in HORIZONS {
            let hours = riseset::day_length_for_horizon(
                year,
                month,
                day,
                place.longitude,
                place.latitude,
                horizon,
            )?;
            println!("  {label:<15} {}", format_duration(hours));
        }
        println!();
    }

    Ok(())
}

fn print_local_events(result: &SunriseResult<DateTime<FixedOffset>>) {
    const FORMAT: &str = "%Y-%m-%d %H:%M %:z";
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("  Sunrise: {}  (UT {})", sunrise.format(FORMAT), sunrise.naive_utc());
            println!("  Noon:    {}", transit.format(FORMAT));
            println!("  Sunset:  {}  (UT {})", sunset.format(FORMAT), sunset.naive_utc());
        }
        SunriseResult::AllDay { transit } => {
            println!("  Sun up all day, noon {}", transit.format(FORMAT));
        }
        SunriseResult::AllNight { transit } => {
            println!("  Sun down all day, noon {}", transit.format(FORMAT));
        }
    }
}

/// UT calendar day the solver used, taken from the transit of the local day.
fn ut_date_of(result: &SunriseResult<DateTime<FixedOffset>>) -> (i32, u32, u32) {
    use chrono::Datelike;

    let ut = result.transit().naive_utc().date();
    (ut.year(), ut.month(), ut.day())
}

fn format_duration(hours: f64) -> String {
    let minutes = (hours * 60.0).round() as i64;
    format!("{:2}h {:02}m", minutes / 60, minutes % 60)
}
