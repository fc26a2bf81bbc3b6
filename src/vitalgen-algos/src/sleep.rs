use chrono::{Datelike as _, NaiveDate, Weekday};
use vitalgen_types::{MetricKind, MetricSample};

use crate::clock::minute_of_day;
use crate::{clamp, day_slots, round_to, seeded_range};

const DURATION_SALT: u32 = 5;
const BEDTIME_SALT: u32 = 6;

/// The sleep episode that starts on a given calendar evening. Both parameters
/// are fixed by the date seed, so regenerating the same day (or looking back
/// at the previous day from the next morning) always agrees on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NightPlan {
    /// Bedtime in minutes after this day's midnight, 22:00-24:00.
    pub bed_minute: f64,
    /// Target episode length, 7-9 hours.
    pub duration_hours: f64,
}

impl NightPlan {
    pub fn for_date(date: NaiveDate) -> Self {
        let duration_hours = seeded_range(date, DURATION_SALT, 7.0, 9.0);
        // Friday and Saturday nights run later
        let late_night = matches!(date.weekday(), Weekday::Fri | Weekday::Sat);
        let (lo, hi) = if late_night {
            (1350.0, 1435.0)
        } else {
            (1320.0, 1410.0)
        };
        let bed_minute = seeded_range(date, BEDTIME_SALT, lo, hi);

        Self {
            bed_minute,
            duration_hours,
        }
    }

    /// Minute of the *next* day at which this episode ends. Bedtime 22:00-24:00
    /// plus 7-9 hours always lands between 05:00 and 09:00.
    pub fn wake_minute(&self) -> f64 {
        self.bed_minute + self.duration_hours * 60.0 - 1440.0
    }

    /// Hours already slept when the episode crosses midnight.
    pub fn carried_at_midnight(&self) -> f64 {
        (1440.0 - self.bed_minute) / 60.0
    }
}

/// Accumulated sleep hours per slot. A day sees up to two disjoint ramps: the
/// tail of the previous night's episode until its wake minute, then a flat
/// awake plateau, then tonight's episode ramping from its bedtime. The value
/// resets to zero only at the bedtime boundary.
pub fn generate(date: NaiveDate) -> Vec<MetricSample> {
    let tonight = NightPlan::for_date(date);
    let previous = NightPlan::for_date(date.pred_opt().expect("date has a predecessor"));
    let wake = previous.wake_minute();
    let carried = previous.carried_at_midnight();
    let (min, max) = MetricKind::Sleep.range();

    let mut hours = 0.0;
    day_slots(date)
        .into_iter()
        .map(|time| {
            let minute = minute_of_day(&time) as f64;
            if minute < wake {
                hours = (carried + minute / 60.0).min(previous.duration_hours);
            } else if minute >= tonight.bed_minute {
                hours = ((minute - tonight.bed_minute) / 60.0).min(tonight.duration_hours);
            }
            // otherwise awake: hold the last accumulated value

            MetricSample {
                metric: MetricKind::Sleep,
                value: round_to(clamp(hours, min, max), 2),
                time,
            }
        })
        .collect()
}
