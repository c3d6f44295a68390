//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! The numeric API takes a calendar date and a UTC offset in hours and
//! returns fractional local hours.

use sun_cycle::{EventResult, Horizon, SolarEvent, almanac, day_length};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Istanbul, March 20, 2024, UTC+3
    let events = almanac::sunrise_sunset_hours(2024, 3, 20, 41.0082, 28.9784, 3.0)?;

    println!("Istanbul, March 20, 2024 (UTC+3):");
    if let (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) =
        (events.sunrise(), events.sunset())
    {
        println!("  Sunrise: {sunrise} ({:.4} h)", sunrise.hours());
        println!("  Sunset:  {sunset} ({:.4} h)", sunset.hours());
    }

    let length = day_length::day_length_millis(&events)?;
    println!("  Day length: {:.2} h", length as f64 / 3_600_000.0);

    let delta = day_length::day_length_delta_for_date(2024, 3, 20, 41.0082, 28.9784, 3.0)?;
    println!("  Change from the day before: {} ms ({delta})", delta.milliseconds());

    println!("\nTwilight sunrises:");
    for (name, horizon) in [
        ("Civil", Horizon::CivilTwilight),
        ("Nautical", Horizon::NauticalTwilight),
        ("Astronomical", Horizon::AstronomicalTwilight),
    ] {
        let result = almanac::event_hours_for_horizon(
            2024,
            3,
            20,
            41.0082,
            28.9784,
            SolarEvent::Sunrise,
            3.0,
            horizon,
        )?;
        match result {
            EventResult::Occurs(time) => println!("  {name:<13} {time}"),
            EventResult::AllDay => println!("  {name:<13} sun stays above the horizon"),
            EventResult::AllNight => println!("  {name:<13} sun stays below the horizon"),
        }
    }

    // Polar day: the event simply does not occur
    let sunset = almanac::event_hours_for_date(2024, 6, 21, 78.2232, 15.6267, SolarEvent::Sunset, 2.0)?;
    println!("\nSvalbard sunset on June 21: {sunset:?}");

    Ok(())
}
