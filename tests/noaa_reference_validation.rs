//! Validation against sunrise/sunset times from the NOAA solar calculator equations.

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use sun_cycle::{almanac, EventResult};

/// The almanac equation is a low-precision approximation of the NOAA one; the
/// reference times are also rounded to the minute.
const TOLERANCE_MINUTES: f64 = 4.0;

#[derive(Debug)]
struct NoaaRecord {
    year: i32,
    month: u32,
    day: u32,
    place: String,
    latitude: f64,
    longitude: f64,
    sunrise_minutes: f64,
    sunset_minutes: f64,
}

impl NoaaRecord {
    fn from_csv_record(record: &csv::StringRecord) -> Result<Self, Box<dyn Error>> {
        let mut date = record[0].split('-');
        let mut next_date_part = || date.next().ok_or("incomplete date");

        Ok(Self {
            year: next_date_part()?.parse()?,
            month: next_date_part()?.parse()?,
            day: next_date_part()?.parse()?,
            place: record[1].to_string(),
            latitude: record[2].parse()?,
            longitude: record[3].parse()?,
            sunrise_minutes: parse_clock_minutes(&record[4])?,
            sunset_minutes: parse_clock_minutes(&record[5])?,
        })
    }
}

fn parse_clock_minutes(text: &str) -> Result<f64, Box<dyn Error>> {
    let (hours, minutes) = text.split_once(':').ok_or("expected HH:MM")?;
    Ok(f64::from(hours.parse::<u32>()? * 60 + minutes.parse::<u32>()?))
}

fn load_records() -> Result<Vec<NoaaRecord>, Box<dyn Error>> {
    let file = File::open("tests/data/noaa_sunrise_sunset.csv")?;
    let mut reader = ReaderBuilder::new()
        .comment(Some(b'#'))
        .has_headers(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        records.push(NoaaRecord::from_csv_record(&result?)?);
    }
    Ok(records)
}

/// Difference between two clock times in minutes, wrapped into [-720, 720).
fn clock_difference_minutes(actual: f64, expected: f64) -> f64 {
    (actual - expected + 2160.0) % 1440.0 - 720.0
}

#[test]
fn almanac_matches_noaa_reference_times() {
    let records = load_records().expect("NOAA reference CSV should load");
    assert_eq!(records.len(), 72, "expected 8 places x 9 dates");

    let mut max_sunrise_error = 0.0_f64;
    let mut max_sunset_error = 0.0_f64;

    for record in &records {
        let events = almanac::sunrise_sunset_hours(
            record.year,
            record.month,
            record.day,
            record.latitude,
            record.longitude,
            0.0,
        )
        .unwrap();

        let (EventResult::Occurs(sunrise), EventResult::Occurs(sunset)) =
            (events.sunrise(), events.sunset())
        else {
            panic!("{record:?} should be a regular day");
        };

        let sunrise_error =
            clock_difference_minutes(sunrise.hours() * 60.0, record.sunrise_minutes).abs();
        let sunset_error =
            clock_difference_minutes(sunset.hours() * 60.0, record.sunset_minutes).abs();

        max_sunrise_error = max_sunrise_error.max(sunrise_error);
        max_sunset_error = max_sunset_error.max(sunset_error);

        assert!(
            sunrise_error < TOLERANCE_MINUTES,
            "{} {}-{:02}-{:02}: sunrise {} UTC, expected {:.0} min, error {:.2} min",
            record.place,
            record.year,
            record.month,
            record.day,
            sunrise,
            record.sunrise_minutes,
            sunrise_error
        );
        assert!(
            sunset_error < TOLERANCE_MINUTES,
            "{} {}-{:02}-{:02}: sunset {} UTC, expected {:.0} min, error {:.2} min",
            record.place,
            record.year,
            record.month,
            record.day,
            sunset,
            record.sunset_minutes,
            sunset_error
        );
    }

    println!(
        "Validated {} records: max sunrise error {:.2} min, max sunset error {:.2} min",
        records.len(),
        max_sunrise_error,
        max_sunset_error
    );
}

#[test]
fn reference_day_lengths_match_within_tolerance() {
    let records = load_records().expect("NOAA reference CSV should load");

    for record in records {
        let events = almanac::sunrise_sunset_hours(
            record.year,
            record.month,
            record.day,
            record.latitude,
            record.longitude,
            0.0,
        )
        .unwrap();
        let length_minutes =
            sun_cycle::day_length::day_length_millis(&events).unwrap() as f64 / 60_000.0;
        let expected_minutes = (record.sunset_minutes - record.sunrise_minutes + 1440.0) % 1440.0;

        assert!(
            (length_minutes - expected_minutes).abs() < 2.0 * TOLERANCE_MINUTES,
            "{record:?}: day length {length_minutes:.1} min, expected {expected_minutes:.1} min"
        );
    }
}
