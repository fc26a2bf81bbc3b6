use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The six biometric signals a simulated day is made of.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Steps,
    HeartRate,
    Calories,
    Sleep,
    Hydration,
    BloodGlucose,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Steps,
        MetricKind::HeartRate,
        MetricKind::Calories,
        MetricKind::Sleep,
        MetricKind::Hydration,
        MetricKind::BloodGlucose,
    ];

    /// Closed physiological range every emitted value must fall inside.
    pub fn range(self) -> (f64, f64) {
        match self {
            MetricKind::Steps => (0.0, 20_000.0),
            MetricKind::HeartRate => (40.0, 200.0),
            MetricKind::Calories => (0.0, 5_000.0),
            MetricKind::Sleep => (0.0, 12.0),
            MetricKind::Hydration => (0.0, 20.0),
            MetricKind::BloodGlucose => (40.0, 300.0),
        }
    }

    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.range();
        value.is_finite() && value >= min && value <= max
    }

    /// True for metrics whose emitted value is a running daily total.
    pub fn is_cumulative(self) -> bool {
        matches!(
            self,
            MetricKind::Steps | MetricKind::Calories | MetricKind::Hydration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_is_snake_case() {
        assert_eq!(MetricKind::HeartRate.to_string(), "heart_rate");
        assert_eq!(MetricKind::BloodGlucose.to_string(), "blood_glucose");
        assert_eq!(MetricKind::Steps.to_string(), "steps");
    }

    #[test]
    fn from_str_round_trips() {
        for kind in MetricKind::ALL {
            let parsed = MetricKind::from_str(&kind.to_string()).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&MetricKind::HeartRate).unwrap();
        assert_eq!(json, "\"heart_rate\"");
    }

    #[test]
    fn ranges_are_well_formed() {
        for kind in MetricKind::ALL {
            let (min, max) = kind.range();
            assert!(min < max, "{kind} has inverted range");
            assert!(kind.contains(min));
            assert!(kind.contains(max));
            assert!(!kind.contains(max + 1.0));
            assert!(!kind.contains(f64::NAN));
        }
    }

    #[test]
    fn cumulative_split() {
        assert!(MetricKind::Steps.is_cumulative());
        assert!(MetricKind::Hydration.is_cumulative());
        assert!(!MetricKind::HeartRate.is_cumulative());
        assert!(!MetricKind::Sleep.is_cumulative());
    }
}
