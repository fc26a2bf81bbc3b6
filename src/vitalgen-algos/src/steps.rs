use chrono::{NaiveDate, Timelike as _};
use rand::Rng;
use vitalgen_types::{MetricKind, MetricSample};

use crate::{activity_level, clamp, day_slots, jitter};

/// Steps added per 5-minute slot, indexed by hour. Hand-tuned to land daily
/// totals around 8-15k before the 20k cap.
const BASE_PER_SLOT: [(f64, f64); 24] = [
    (0.0, 4.0),     // 0
    (0.0, 4.0),     // 1
    (0.0, 3.0),     // 2
    (0.0, 3.0),     // 3
    (0.0, 4.0),     // 4
    (0.0, 6.0),     // 5
    (25.0, 70.0),   // 6 commute / morning routine
    (30.0, 80.0),   // 7
    (30.0, 80.0),   // 8
    (35.0, 85.0),   // 9
    (35.0, 85.0),   // 10
    (35.0, 85.0),   // 11
    (45.0, 95.0),   // 12 lunch walk
    (35.0, 80.0),   // 13
    (35.0, 80.0),   // 14
    (35.0, 80.0),   // 15
    (35.0, 80.0),   // 16
    (70.0, 140.0),  // 17 exercise window
    (70.0, 140.0),  // 18
    (60.0, 120.0),  // 19
    (15.0, 45.0),   // 20
    (15.0, 45.0),   // 21
    (5.0, 15.0),    // 22
    (2.0, 10.0),    // 23
];

/// Cumulative daily step count, non-decreasing, emitted per slot.
pub fn generate<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> Vec<MetricSample> {
    let (min, max) = MetricKind::Steps.range();
    let mut total = 0.0;

    day_slots(date)
        .into_iter()
        .map(|time| {
            let hour = time.hour();
            let (lo, hi) = BASE_PER_SLOT[hour as usize];
            let base = rng.random_range(lo..=hi) * activity_level(hour);
            let increment = jitter(base, 0.3, rng).max(0.0);
            total = clamp(total + increment, min, max);

            MetricSample {
                metric: MetricKind::Steps,
                value: total.round(),
                time,
            }
        })
        .collect()
}
