use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MetricKind;

/// Outcome of one whole-day generation call, returned to the caller after the
/// dataset has been validated and persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub patient_id: String,
    pub date: NaiveDate,
    pub data_points: usize,
    pub metric_count: usize,
    pub breakdown: BTreeMap<MetricKind, usize>,
    pub elapsed_ms: u128,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Generated {} samples for {} on {} in {}ms:",
            self.data_points, self.patient_id, self.date, self.elapsed_ms
        )?;
        let mut kinds = self.breakdown.iter().peekable();
        while let Some((kind, count)) = kinds.next() {
            write!(f, "  {kind}: {count}")?;
            if kinds.peek().is_some() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
