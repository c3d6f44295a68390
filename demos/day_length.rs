//! Example showing today's sunrise, sunset and day-length change for a few cities.
//!
//! Run with `cargo run --example day_length`.

use chrono::{FixedOffset, TimeZone, Utc};
use sun_cycle::{EventResult, GeoCoordinate, almanac, day_length};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let places = [
        ("Istanbul", "41.0082,28.9784", 3),
        ("London", "51.5074,-0.1278", 0),
        ("Sydney", "-33.8688,151.2093", 10),
        ("Tromsø", "69.6492,18.9553", 1),
    ];

    for (name, coordinate, offset_hours) in places {
        let coordinate: GeoCoordinate = coordinate.parse()?;
        let offset = FixedOffset::east_opt(offset_hours * 3600).ok_or("offset out of range")?;
        let now = Utc::now().with_timezone(&offset);

        println!("{name} ({coordinate}), {}", now.date_naive());

        let events = almanac::sunrise_sunset_at(&now, &coordinate)?;
        match (events.sunrise(), events.sunset()) {
            (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) => {
                println!("  Sunrise: {}", sunrise.format("%H:%M"));
                println!("  Sunset:  {}", sunset.format("%H:%M"));
            }
            (sunrise, _) if sunrise.is_polar_day() => println!("  The sun does not set today"),
            _ => println!("  The sun does not rise today"),
        }

        match day_length::day_length_delta_at(&now, &coordinate) {
            Ok(delta) if delta.is_lengthening() => println!("  Days are getting longer by {delta}"),
            Ok(delta) => println!("  Days are getting shorter by {delta}"),
            Err(err) if err.is_polar() => println!("  No day-length change: {err}"),
            Err(err) => return Err(err.into()),
        }
        println!();
    }

    // A fixed date in a fixed offset
    let equinox = FixedOffset::east_opt(3 * 3600)
        .ok_or("offset out of range")?
        .with_ymd_and_hms(2024, 3, 20, 12, 0, 0)
        .single()
        .ok_or("ambiguous local time")?;
    let delta = day_length::day_length_delta(&equinox, 41.0082, 28.9784)?;
    println!("Istanbul on the 2024 March equinox: {delta} longer than the day before");

    Ok(())
}
