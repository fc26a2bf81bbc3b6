use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::Context as _;
use chrono::NaiveDate;
use log::info;
use sea_orm::TransactionTrait as _;
use vitalgen_types::{GenerationSummary, PatientSample};

use crate::DatabaseHandler;

impl DatabaseHandler {
    /// Generate, validate, and persist one simulated day for a patient.
    /// Regeneration for the same day first clears the prior rows, so the call
    /// is idempotent in shape; either the full 1728-sample dataset commits or
    /// the error propagates and nothing is reported as stored.
    pub async fn generate_day(
        &self,
        patient_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<GenerationSummary> {
        self.generate_day_inner(patient_id, date)
            .await
            .with_context(|| format!("generation failed for patient {patient_id} on {date}"))
    }

    async fn generate_day_inner(
        &self,
        patient_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<GenerationSummary> {
        let started = Instant::now();

        let samples = vitalgen_algos::generate_day(date)?;
        let stamped: Vec<PatientSample> = samples
            .into_iter()
            .map(|sample| PatientSample::stamp(patient_id, sample))
            .collect();

        let mut breakdown = BTreeMap::new();
        for sample in &stamped {
            *breakdown.entry(sample.metric).or_insert(0) += 1;
        }

        // clearing the prior day and writing the new one share a transaction,
        // so a failed regeneration leaves the stored day untouched
        let txn = self.db.begin().await?;
        let replaced = Self::delete_day_on(&txn, patient_id, date).await?;
        if replaced > 0 {
            info!("replacing {replaced} existing samples for {patient_id} on {date}");
        }
        Self::insert_chunks(&txn, &stamped).await?;
        txn.commit().await?;

        let data_points = stamped.len();

        Ok(GenerationSummary {
            patient_id: patient_id.to_owned(),
            date,
            data_points,
            metric_count: breakdown.len(),
            breakdown,
            elapsed_ms: started.elapsed().as_millis(),
        })
    }
}
