use chrono::{Datelike as _, NaiveDate};

/// Deterministic pseudo-random unit value for a (date, salt) pair, independent
/// of any global RNG. The same date always yields the same daily targets
/// (sleep duration, bedtime, hydration goal); only per-slot noise comes from a
/// real RNG.
pub fn seeded_unit(date: NaiveDate, salt: u32) -> f64 {
    let key = date.year() as i64 * 10_000 + date.month() as i64 * 100 + date.day() as i64;
    let x = (key * 37 + salt as i64 * 101) as f64 * 12.9898;
    (x.sin() * 43_758.547).fract().abs()
}

pub fn seeded_range(date: NaiveDate, salt: u32, min: f64, max: f64) -> f64 {
    min + seeded_unit(date, salt) * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn seeded_unit_is_deterministic() {
        assert_eq!(seeded_unit(date(16), 7), seeded_unit(date(16), 7));
    }

    #[test]
    fn seeded_unit_in_unit_interval() {
        for d in 1..=28 {
            for salt in [0, 1, 7, 13] {
                let u = seeded_unit(date(d), salt);
                assert!((0.0..1.0).contains(&u), "day {d} salt {salt}: {u}");
            }
        }
    }

    #[test]
    fn different_salts_diverge() {
        let a = seeded_unit(date(16), 1);
        let b = seeded_unit(date(16), 2);
        assert_ne!(a, b);
    }

    #[test]
    fn different_dates_diverge() {
        let a = seeded_unit(date(16), 1);
        let b = seeded_unit(date(17), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_range_respects_bounds() {
        for d in 1..=28 {
            let v = seeded_range(date(d), 3, 7.0, 9.0);
            assert!((7.0..9.0).contains(&v), "{v}");
        }
    }
}
