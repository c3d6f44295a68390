//! Example demonstrating the calculation core without std/chrono types.
//!
//! Everything used here is available with `default-features = false,
//! features = ["libm"]`; only the printing needs std.

use sun_cycle::time::CalendarDay;
use sun_cycle::{DayEvents, Horizon, SolarEvent, almanac, day_length};

fn main() {
    // Vienna: 48.21°N, 16.37°E, CEST
    let (latitude, longitude, offset) = (48.21, 16.37, 2.0);

    let today = CalendarDay::new(2024, 6, 21).expect("valid date");
    let yesterday = today.previous().expect("representable date");

    println!("Day of year: {}", today.day_of_year());

    let events_for = |day: CalendarDay| {
        let sunrise = almanac::event_hours(
            day.day_of_year(),
            latitude,
            longitude,
            SolarEvent::Sunrise,
            offset,
            Horizon::SunriseSunset,
        )
        .expect("valid coordinates");
        let sunset = almanac::event_hours(
            day.day_of_year(),
            latitude,
            longitude,
            SolarEvent::Sunset,
            offset,
            Horizon::SunriseSunset,
        )
        .expect("valid coordinates");
        DayEvents::new(sunrise, sunset)
    };

    let today_events = events_for(today);
    let yesterday_events = events_for(yesterday);

    println!("Sunrise: {:?}", today_events.sunrise().time());
    println!("Sunset:  {:?}", today_events.sunset().time());

    match day_length::delta_between(&today_events, &yesterday_events) {
        Ok(delta) => println!(
            "Delta: {} ms, lengthening: {}",
            delta.milliseconds(),
            delta.is_lengthening()
        ),
        Err(err) => println!("Delta undefined: {err}"),
    }
}
