use std::fmt;

use vitalgen_types::{MetricKind, PatientSample};

/// Per-metric daily aggregates read back from the store. Cumulative metrics
/// report their final value; point-in-time metrics report min/avg/max; sleep
/// reports the longest accumulated episode.
#[derive(Debug, Default)]
pub struct DayReport {
    rows: Vec<ReportRow>,
}

#[derive(Debug)]
struct ReportRow {
    metric: MetricKind,
    count: usize,
    line: String,
}

impl DayReport {
    pub fn from_samples(samples: &[PatientSample]) -> Self {
        let rows = MetricKind::ALL
            .iter()
            .filter_map(|&metric| {
                let values: Vec<f64> = samples
                    .iter()
                    .filter(|s| s.metric == metric)
                    .map(|s| s.value)
                    .collect();
                if values.is_empty() {
                    return None;
                }

                let line = if metric.is_cumulative() {
                    format!("total {}", values.last().copied().unwrap_or_default())
                } else if metric == MetricKind::Sleep {
                    format!("episode {:.2}h", values.iter().copied().fold(0.0, f64::max))
                } else {
                    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    let avg = values.iter().sum::<f64>() / values.len() as f64;
                    format!("min {min} / avg {avg:.1} / max {max}")
                };

                Some(ReportRow {
                    metric,
                    count: values.len(),
                    line,
                })
            })
            .collect();

        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = self.rows.iter().peekable();
        while let Some(row) = rows.next() {
            write!(
                f,
                "{:>14}: {:>4} samples, {}",
                row.metric.to_string(),
                row.count,
                row.line
            )?;
            if rows.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vitalgen_types::MetricSample;

    fn sample(metric: MetricKind, minute: u32, value: f64) -> PatientSample {
        let time = NaiveDate::from_ymd_opt(2026, 2, 16)
            .unwrap()
            .and_hms_opt(minute / 60, minute % 60, 0)
            .unwrap();
        PatientSample::stamp("p-1", MetricSample { metric, value, time })
    }

    #[test]
    fn empty_report() {
        let report = DayReport::from_samples(&[]);
        assert!(report.is_empty());
        assert_eq!(format!("{report}"), "");
    }

    #[test]
    fn cumulative_reports_last_value() {
        let report = DayReport::from_samples(&[
            sample(MetricKind::Steps, 0, 100.0),
            sample(MetricKind::Steps, 5, 400.0),
        ]);
        let s = format!("{report}");
        assert!(s.contains("steps"));
        assert!(s.contains("total 400"));
        assert!(s.contains("2 samples"));
    }

    #[test]
    fn point_in_time_reports_min_avg_max() {
        let report = DayReport::from_samples(&[
            sample(MetricKind::HeartRate, 0, 60.0),
            sample(MetricKind::HeartRate, 5, 80.0),
        ]);
        let s = format!("{report}");
        assert!(s.contains("min 60"));
        assert!(s.contains("avg 70.0"));
        assert!(s.contains("max 80"));
    }

    #[test]
    fn sleep_reports_longest_episode() {
        let report = DayReport::from_samples(&[
            sample(MetricKind::Sleep, 0, 1.5),
            sample(MetricKind::Sleep, 5, 7.25),
            sample(MetricKind::Sleep, 10, 0.0),
        ]);
        assert!(format!("{report}").contains("episode 7.25h"));
    }
}
