//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! This example shows how to use the numeric API when you don't want to depend on chrono.

use sunriset::{Horizon, SunriseResult, riseset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Calculate sunrise/sunset for San Francisco on June 21, 2023
    let result = riseset::sunrise_sunset_utc_for_horizon(
        2023,
        6,
        21,
        -122.4194, // San Francisco longitude
        37.7749,   // San Francisco latitude
        Horizon::SunriseSunset,
    )?;

    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("San Francisco, June 21, 2023 (UTC):");
            println!("  Sunrise:  {:.4} hours", sunrise.hours());
            println!("  Transit:  {:.4} hours", transit.hours());
            println!("  Sunset:   {:.4} hours", sunset.hours());
            println!();

            // Sunset falls after midnight UT
            let (day_offset, hours) = sunset.day_and_hours();
            let (h, m, s) = sunset.hms();
            println!("Sunset breakdown:");
            println!("  Day offset: {day_offset}");
            println!("  Hours in day: {hours:.2}");
            println!("  Clock time: {h:02}:{m:02}:{s:02} UT");
        }
        SunriseResult::AllDay { transit } => {
            println!("Polar day - sun never sets");
            println!("  Transit: {} hours", transit.hours());
        }
        SunriseResult::AllNight { transit } => {
            println!("Polar night - sun never rises");
            println!("  Transit: {} hours", transit.hours());
        }
    }

    // Custom altitude of the Sun's centre
    println!("\nWith custom altitude (-1.0°, centre of the disk):");
    let custom_result = riseset::sunrise_sunset_utc(2023, 6, 21, -122.4194, 37.7749, -1.0, false)?;

    if let SunriseResult::RegularDay {
        sunrise,
        transit,
        sunset,
    } = custom_result
    {
        println!("  Sunrise:  {:.4} hours", sunrise.hours());
        println!("  Transit:  {:.4} hours", transit.hours());
        println!("  Sunset:   {:.4} hours", sunset.hours());
    }

    let length = riseset::day_length_for_horizon(
        2023,
        6,
        21,
        -122.4194,
        37.7749,
        Horizon::SunriseSunset,
    )?;
    println!("\nDay length: {length:.2} hours");

    Ok(())
}
