use thiserror::Error;
use vitalgen_types::{MetricKind, MetricSample, SAMPLES_PER_DAY, SLOTS_PER_DAY};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("dataset is empty")]
    Empty,
    #[error("dataset has {actual} samples, expected {expected}")]
    DatasetSize { expected: usize, actual: usize },
    #[error("sample {index} ({metric}) value {value} outside [{min}, {max}]")]
    OutOfRange {
        index: usize,
        metric: MetricKind,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("metric {metric} has {actual} samples, expected {expected}")]
    MetricCount {
        metric: MetricKind,
        expected: usize,
        actual: usize,
    },
}

/// Hard gate before persistence: shape, ranges, and per-metric counts. Fails
/// on the first problem found; there is no soft mode.
pub fn validate_dataset(samples: &[MetricSample]) -> Result<(), ValidationError> {
    if samples.is_empty() {
        return Err(ValidationError::Empty);
    }
    if samples.len() != SAMPLES_PER_DAY {
        return Err(ValidationError::DatasetSize {
            expected: SAMPLES_PER_DAY,
            actual: samples.len(),
        });
    }

    for (index, sample) in samples.iter().enumerate() {
        if !sample.metric.contains(sample.value) {
            let (min, max) = sample.metric.range();
            return Err(ValidationError::OutOfRange {
                index,
                metric: sample.metric,
                value: sample.value,
                min,
                max,
            });
        }
    }

    for kind in MetricKind::ALL {
        let actual = samples.iter().filter(|s| s.metric == kind).count();
        if actual != SLOTS_PER_DAY {
            return Err(ValidationError::MetricCount {
                metric: kind,
                expected: SLOTS_PER_DAY,
                actual,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_dataset() -> Vec<MetricSample> {
        let date = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
        let mut samples = Vec::with_capacity(SAMPLES_PER_DAY);
        for kind in MetricKind::ALL {
            let (min, _) = kind.range();
            for time in crate::day_slots(date) {
                samples.push(MetricSample {
                    metric: kind,
                    value: min,
                    time,
                });
            }
        }
        samples
    }

    #[test]
    fn accepts_well_formed_dataset() {
        assert_eq!(validate_dataset(&full_dataset()), Ok(()));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_dataset(&[]), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_missing_sample() {
        let mut samples = full_dataset();
        samples.pop();
        assert_eq!(
            validate_dataset(&samples),
            Err(ValidationError::DatasetSize {
                expected: 1728,
                actual: 1727,
            })
        );
    }

    #[test]
    fn rejects_out_of_range_value() {
        let mut samples = full_dataset();
        samples[3].value = 25_000.0;
        let err = validate_dataset(&samples).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                index: 3,
                metric: MetricKind::Steps,
                value: 25_000.0,
                min: 0.0,
                max: 20_000.0,
            }
        );
        assert!(err.to_string().contains("sample 3"));
    }

    #[test]
    fn rejects_nan_value() {
        let mut samples = full_dataset();
        samples[0].value = f64::NAN;
        assert!(matches!(
            validate_dataset(&samples),
            Err(ValidationError::OutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_metric_count_mismatch() {
        let mut samples = full_dataset();
        // same total length, but one heart-rate sample relabeled as steps
        let index = samples
            .iter()
            .position(|s| s.metric == MetricKind::HeartRate)
            .unwrap();
        samples[index].metric = MetricKind::Steps;
        assert_eq!(
            validate_dataset(&samples),
            Err(ValidationError::MetricCount {
                metric: MetricKind::Steps,
                expected: 288,
                actual: 289,
            })
        );
    }
}
