use chrono::{NaiveDate, Timelike as _};
use vitalgen_types::{MetricKind, MetricSample};

use crate::{clamp, day_slots, seeded_range};

const TARGET_SALT: u32 = 11;

/// Hours that get glasses, in priority order: meals first, then snacks and
/// evening top-ups. The daily target walks down this list one glass at a time.
const POUR_HOURS: [u32; 10] = [7, 12, 18, 9, 15, 20, 8, 13, 21, 11];

/// Glasses drunk per day, 6-10, fixed per date.
pub fn daily_target(date: NaiveDate) -> u32 {
    seeded_range(date, TARGET_SALT, 6.0, 11.0).floor().min(10.0) as u32
}

fn glasses_by_hour(date: NaiveDate) -> [u32; 24] {
    let mut by_hour = [0u32; 24];
    let target = daily_target(date);
    for i in 0..target as usize {
        by_hour[POUR_HOURS[i % POUR_HOURS.len()] as usize] += 1;
    }
    by_hour
}

/// Cumulative glasses of water. Unlike steps and calories this is a discrete
/// staircase: the accumulator only moves at the top of an hour that has a
/// pour scheduled.
pub fn generate(date: NaiveDate) -> Vec<MetricSample> {
    let (min, max) = MetricKind::Hydration.range();
    let by_hour = glasses_by_hour(date);
    let mut total = 0.0;

    day_slots(date)
        .into_iter()
        .map(|time| {
            if time.minute() == 0 {
                total = clamp(total + by_hour[time.hour() as usize] as f64, min, max);
            }

            MetricSample {
                metric: MetricKind::Hydration,
                value: total,
                time,
            }
        })
        .collect()
}
