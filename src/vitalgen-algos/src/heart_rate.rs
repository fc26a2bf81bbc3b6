use chrono::{NaiveDate, Timelike as _};
use rand::Rng;
use vitalgen_types::{MetricKind, MetricSample};

use crate::{activity_level, clamp, day_slots, jitter, round_to, smooth, spike};

/// Resting-to-active bpm band by hour, before the activity multiplier.
const BASE_BPM: [(f64, f64); 24] = [
    (55.0, 65.0),  // 0
    (55.0, 63.0),  // 1
    (54.0, 62.0),  // 2
    (54.0, 62.0),  // 3
    (55.0, 63.0),  // 4
    (56.0, 66.0),  // 5
    (64.0, 78.0),  // 6
    (68.0, 82.0),  // 7
    (68.0, 82.0),  // 8
    (66.0, 78.0),  // 9
    (66.0, 78.0),  // 10
    (66.0, 78.0),  // 11
    (70.0, 82.0),  // 12
    (66.0, 80.0),  // 13
    (66.0, 80.0),  // 14
    (66.0, 80.0),  // 15
    (66.0, 80.0),  // 16
    (95.0, 135.0), // 17 exercise window
    (95.0, 135.0), // 18
    (85.0, 112.0), // 19
    (62.0, 74.0),  // 20
    (60.0, 72.0),  // 21
    (58.0, 68.0),  // 22
    (56.0, 66.0),  // 23
];

const SMOOTHING: f64 = 0.3;
const SPIKE_CHANCE: f64 = 0.02;
const SPIKE_MULTIPLIER: f64 = 1.15;

/// Point-in-time heart rate, smoothed against the previous slot so consecutive
/// readings never jump by more than the smoothing factor allows.
pub fn generate<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> Vec<MetricSample> {
    let (min, max) = MetricKind::HeartRate.range();
    let mut previous: Option<f64> = None;

    day_slots(date)
        .into_iter()
        .map(|time| {
            let hour = time.hour();
            let (lo, hi) = BASE_BPM[hour as usize];
            // gentle exertion scaling; the hour table already carries most of
            // the daily shape
            let adjustment = 0.85 + 0.15 * activity_level(hour);
            let base = rng.random_range(lo..=hi) * adjustment;
            let burst = spike(base, SPIKE_CHANCE, SPIKE_MULTIPLIER, rng);
            let noisy = jitter(burst, 0.08, rng);

            let smoothed = match previous {
                Some(prev) => smooth(noisy, prev, SMOOTHING),
                None => noisy,
            };
            let bounded = clamp(smoothed, min, max);
            previous = Some(bounded);

            MetricSample {
                metric: MetricKind::HeartRate,
                value: round_to(bounded, 0),
                time,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use vitalgen_types::SLOTS_PER_DAY;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
    }

    #[test]
    fn emits_full_day_in_range() {
        let samples = generate(date(), &mut StdRng::seed_from_u64(1));
        assert_eq!(samples.len(), SLOTS_PER_DAY);
        for s in &samples {
            assert_eq!(s.metric, MetricKind::HeartRate);
            assert!(MetricKind::HeartRate.contains(s.value), "{}", s.value);
        }
    }

    #[test]
    fn consecutive_deltas_are_smoothing_bounded() {
        let (min, max) = MetricKind::HeartRate.range();
        // one EMA step can move at most SMOOTHING * range width, plus rounding
        let bound = SMOOTHING * (max - min) + 1.0;
        for seed in 0..10 {
            let samples = generate(date(), &mut StdRng::seed_from_u64(seed));
            for pair in samples.windows(2) {
                let delta = (pair[1].value - pair[0].value).abs();
                assert!(delta <= bound, "seed {seed}: delta {delta}");
            }
        }
    }

    #[test]
    fn sleeping_hours_sit_low() {
        let samples = generate(date(), &mut StdRng::seed_from_u64(2));
        // 01:00-05:00 is slots 12..60
        let night_avg = samples[12..60].iter().map(|s| s.value).sum::<f64>() / 48.0;
        assert!((45.0..=72.0).contains(&night_avg), "{night_avg}");
    }

    #[test]
    fn exercise_window_sits_above_night() {
        let samples = generate(date(), &mut StdRng::seed_from_u64(3));
        let night_avg = samples[12..60].iter().map(|s| s.value).sum::<f64>() / 48.0;
        // 17:00-19:00 is slots 204..228
        let exercise_avg = samples[204..228].iter().map(|s| s.value).sum::<f64>() / 24.0;
        assert!(
            exercise_avg > night_avg + 20.0,
            "night {night_avg}, exercise {exercise_avg}"
        );
    }
}
