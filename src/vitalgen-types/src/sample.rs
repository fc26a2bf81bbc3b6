use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::MetricKind;

/// Tag stored alongside every generated row so simulated data can never be
/// mistaken for device readings.
pub const DATA_SOURCE: &str = "simulated";

/// One measurement produced by a metric generator. Patient-agnostic; the
/// orchestrator stamps ownership before persistence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub metric: MetricKind,
    pub value: f64,
    pub time: NaiveDateTime,
}

/// A [`MetricSample`] bound to its owner, ready for insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientSample {
    pub patient_id: String,
    pub metric: MetricKind,
    pub value: f64,
    pub time: NaiveDateTime,
    pub source: String,
}

impl PatientSample {
    pub fn stamp(patient_id: &str, sample: MetricSample) -> Self {
        Self {
            patient_id: patient_id.to_owned(),
            metric: sample.metric,
            value: sample.value,
            time: sample.time,
            source: DATA_SOURCE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stamp_copies_fields_and_sets_source() {
        let time = NaiveDate::from_ymd_opt(2026, 2, 16)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let sample = MetricSample {
            metric: MetricKind::Steps,
            value: 1234.0,
            time,
        };

        let stamped = PatientSample::stamp("patient-1", sample);
        assert_eq!(stamped.patient_id, "patient-1");
        assert_eq!(stamped.metric, MetricKind::Steps);
        assert_eq!(stamped.value, 1234.0);
        assert_eq!(stamped.time, time);
        assert_eq!(stamped.source, DATA_SOURCE);
    }
}
