use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike as _};
use vitalgen_types::{SLOT_MINUTES, SLOTS_PER_DAY};

/// Coarse daily rhythm bucket, keyed by hour of day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayPeriod {
    Night,
    Morning,
    LateMorning,
    Lunch,
    Afternoon,
    Evening,
    WindDown,
}

pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight is a valid time")
}

/// The 288 slot timestamps of one day, starting at midnight, 5 minutes apart.
pub fn day_slots(date: NaiveDate) -> Vec<NaiveDateTime> {
    let start = day_start(date);
    (0..SLOTS_PER_DAY)
        .map(|i| start + TimeDelta::minutes(i as i64 * SLOT_MINUTES as i64))
        .collect()
}

pub fn period_of(minute_of_day: u32) -> DayPeriod {
    match minute_of_day / 60 {
        0..=5 => DayPeriod::Night,
        6..=8 => DayPeriod::Morning,
        9..=11 => DayPeriod::LateMorning,
        12 => DayPeriod::Lunch,
        13..=16 => DayPeriod::Afternoon,
        17..=19 => DayPeriod::Evening,
        _ => DayPeriod::WindDown,
    }
}

/// Hour-indexed exertion multiplier in [0.8, 1.3]. Lowest overnight, peak in
/// the 17-19h exercise window. Shaping only, no randomness.
pub fn activity_level(hour: u32) -> f64 {
    match hour {
        0..=5 => 0.8,
        6..=8 => 1.1,
        9..=11 => 1.0,
        12 => 1.05,
        13..=16 => 1.0,
        17..=19 => 1.3,
        _ => 0.9,
    }
}

pub fn minute_of_day(time: &NaiveDateTime) -> u32 {
    time.hour() * 60 + time.minute()
}
