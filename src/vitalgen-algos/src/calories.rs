use chrono::{NaiveDate, Timelike as _};
use rand::Rng;
use vitalgen_types::{MetricKind, MetricSample};

use crate::{activity_level, clamp, day_slots, jitter};

/// Kilocalories burned per 5-minute slot, indexed by hour. The overnight floor
/// is resting metabolism; daytime adds movement on top.
const BASE_PER_SLOT: [(f64, f64); 24] = [
    (4.5, 6.0),   // 0
    (4.5, 6.0),   // 1
    (4.5, 6.0),   // 2
    (4.5, 6.0),   // 3
    (4.5, 6.0),   // 4
    (4.5, 6.5),   // 5
    (6.5, 11.0),  // 6
    (7.0, 12.0),  // 7
    (7.0, 12.0),  // 8
    (6.5, 11.0),  // 9
    (6.5, 11.0),  // 10
    (6.5, 11.0),  // 11
    (9.0, 14.0),  // 12
    (7.0, 11.0),  // 13
    (7.0, 11.0),  // 14
    (7.0, 11.0),  // 15
    (7.0, 11.0),  // 16
    (12.0, 22.0), // 17 exercise window
    (12.0, 22.0), // 18
    (10.0, 18.0), // 19
    (6.0, 9.0),   // 20
    (6.0, 9.0),   // 21
    (5.0, 7.0),   // 22
    (4.5, 6.5),   // 23
];

/// Cumulative daily calorie burn, non-decreasing, emitted per slot.
pub fn generate<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> Vec<MetricSample> {
    let (min, max) = MetricKind::Calories.range();
    let mut total = 0.0;

    day_slots(date)
        .into_iter()
        .map(|time| {
            let hour = time.hour();
            let (lo, hi) = BASE_PER_SLOT[hour as usize];
            let base = rng.random_range(lo..=hi) * activity_level(hour);
            let increment = jitter(base, 0.2, rng).max(0.0);
            total = clamp(total + increment, min, max);

            MetricSample {
                metric: MetricKind::Calories,
                value: total.round(),
                time,
            }
        })
        .collect()
}
