//! Example demonstrating usage without std/chrono dependencies.
//!
//! Everything shown here only needs the numeric API, which is available with
//! `default-features = false, features = ["libm"]`.

use sunriset::{
    SUNRISE_SUNSET_ALTITUDE, SunriseResult, daylen, ephemeris, gmst0, rev180, sunriset,
    time::{calendar_date, days_since_epoch},
};

fn main() {
    println!("Sunrise/sunset without std/chrono dependencies\n");

    // Day number of 2024-06-21 0h UT
    let d = days_since_epoch(2024, 6, 21);
    println!("Day number: {d}");
    println!("Calendar date: {:?}\n", calendar_date(d));

    // Sun's position at noon UT
    let ecliptic = ephemeris::sunpos(d + 0.5);
    let equatorial = ephemeris::sun_ra_dec(d + 0.5);
    println!("Sun at 12:00 UT:");
    println!("  Ecliptic longitude: {:.4}°", ecliptic.longitude);
    println!("  Distance: {:.5} AU", ecliptic.distance);
    println!("  Right ascension: {:.4}°", equatorial.right_ascension);
    println!("  Declination: {:.4}°", equatorial.declination);
    println!(
        "  Greenwich hour angle: {:.4}°\n",
        rev180(gmst0(d + 0.5) + 180.0 - equatorial.right_ascension)
    );

    let locations = [
        ("Vienna", 16.37, 48.21),
        ("San Francisco", -122.4194, 37.7749),
        ("Sydney", 151.2093, -33.8688),
        ("Tromsø", 18.96, 69.65),
    ];

    for (name, lon, lat) in &locations {
        match sunriset(2024, 6, 21, *lon, *lat, SUNRISE_SUNSET_ALTITUDE, true) {
            SunriseResult::RegularDay {
                sunrise, sunset, ..
            } => println!(
                "  {name} - rise {sunrise:.3} h, set {sunset:.3} h, length {:.2} h",
                daylen(2024, 6, 21, *lon, *lat, SUNRISE_SUNSET_ALTITUDE, true)
            ),
            SunriseResult::AllDay { transit } => {
                println!("  {name} - midnight sun, transit {transit:.3} h");
            }
            SunriseResult::AllNight { transit } => {
                println!("  {name} - polar night, transit {transit:.3} h");
            }
        }
    }
}
