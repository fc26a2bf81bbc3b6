use chrono::{NaiveDate, Timelike as _};
use rand::Rng;
use vitalgen_types::{MetricKind, MetricSample};

use crate::{clamp, day_slots, jitter, round_to, smooth};

/// Fasting baseline band in mg/dL, by hour.
const BASE_MG_DL: [(f64, f64); 24] = [
    (80.0, 92.0),  // 0
    (79.0, 90.0),  // 1
    (78.0, 89.0),  // 2
    (78.0, 89.0),  // 3
    (79.0, 91.0),  // 4
    (82.0, 94.0),  // 5 dawn rise
    (84.0, 96.0),  // 6
    (84.0, 96.0),  // 7
    (83.0, 95.0),  // 8
    (82.0, 94.0),  // 9
    (82.0, 94.0),  // 10
    (82.0, 94.0),  // 11
    (83.0, 95.0),  // 12
    (83.0, 95.0),  // 13
    (82.0, 94.0),  // 14
    (82.0, 94.0),  // 15
    (82.0, 94.0),  // 16
    (82.0, 94.0),  // 17
    (83.0, 95.0),  // 18
    (83.0, 95.0),  // 19
    (82.0, 94.0),  // 20
    (81.0, 93.0),  // 21
    (80.0, 92.0),  // 22
    (80.0, 92.0),  // 23
];

/// Hours at which meals land; glucose rises through the following hour.
const MEAL_HOURS: [u32; 3] = [7, 12, 18];

/// Peak excursion a meal adds on top of baseline, before noise.
const MEAL_AMPLITUDE: f64 = 55.0;

const SMOOTHING: f64 = 0.25;

/// Half-sine excursion across the hour following a meal; zero elsewhere.
fn meal_bump(hour: u32, minute: u32) -> f64 {
    if !MEAL_HOURS.contains(&hour) {
        return 0.0;
    }
    let progress = (minute as f64 + 2.5) / 60.0;
    MEAL_AMPLITUDE * (std::f64::consts::PI * progress).sin()
}

/// Point-in-time blood glucose with meal-driven spikes, smoothed and bounded.
pub fn generate<R: Rng + ?Sized>(date: NaiveDate, rng: &mut R) -> Vec<MetricSample> {
    let (min, max) = MetricKind::BloodGlucose.range();
    let mut previous: Option<f64> = None;

    day_slots(date)
        .into_iter()
        .map(|time| {
            let (hour, minute) = (time.hour(), time.minute());
            let (lo, hi) = BASE_MG_DL[hour as usize];
            let base = rng.random_range(lo..=hi) + meal_bump(hour, minute);
            let noisy = jitter(base, 0.06, rng);

            let smoothed = match previous {
                Some(prev) => smooth(noisy, prev, SMOOTHING),
                None => noisy,
            };
            let bounded = clamp(smoothed, min, max);
            previous = Some(bounded);

            MetricSample {
                metric: MetricKind::BloodGlucose,
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

    fn hour_avg(samples: &[MetricSample], hour: usize) -> f64 {
        samples[hour * 12..(hour + 1) * 12]
            .iter()
            .map(|s| s.value)
            .sum::<f64>()
            / 12.0
    }

    #[test]
    fn emits_full_day_in_range() {
        let samples = generate(date(), &mut StdRng::seed_from_u64(1));
        assert_eq!(samples.len(), SLOTS_PER_DAY);
        for s in &samples {
            assert_eq!(s.metric, MetricKind::BloodGlucose);
            assert!(MetricKind::BloodGlucose.contains(s.value), "{}", s.value);
        }
    }

    #[test]
    fn meal_bump_shape() {
        assert_eq!(meal_bump(10, 30), 0.0);
        assert!(meal_bump(7, 30) > meal_bump(7, 0));
        assert!(meal_bump(12, 25) > 40.0);
        assert!(meal_bump(18, 55) < meal_bump(18, 30));
    }

    #[test]
    fn meal_hours_elevated_over_baseline() {
        for seed in 0..10 {
            let samples = generate(date(), &mut StdRng::seed_from_u64(seed));
            let baseline = hour_avg(&samples, 10);
            for meal in [7usize, 12, 18] {
                let elevated = hour_avg(&samples, meal);
                assert!(
                    elevated > baseline + 15.0,
                    "seed {seed} hour {meal}: {elevated} vs baseline {baseline}"
                );
            }
        }
    }

    #[test]
    fn consecutive_deltas_are_smoothing_bounded() {
        let (min, max) = MetricKind::BloodGlucose.range();
        let bound = SMOOTHING * (max - min) + 1.0;
        let samples = generate(date(), &mut StdRng::seed_from_u64(4));
        for pair in samples.windows(2) {
            let delta = (pair[1].value - pair[0].value).abs();
            assert!(delta <= bound, "delta {delta}");
        }
    }
}
