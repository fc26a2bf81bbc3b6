use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use log::warn;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DatabaseTransaction, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use vitalgen_entities::metric_samples;
use vitalgen_migration::{Migrator, MigratorTrait, OnConflict};
use vitalgen_types::{MetricKind, PatientSample};

// SQLite limits to 999 SQL variables; metric_samples has 5 Set columns,
// so batches stay under 199 rows.
const INSERT_BATCH: usize = 150;

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub async fn new<C>(path: C) -> Self
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path)
            .await
            .expect("Unable to connect to db");

        Migrator::up(&db, None)
            .await
            .expect("Error running migrations");

        Self { db }
    }

    /// Bulk-insert stamped samples, upserting on the (patient, metric, time)
    /// key. Chunking keeps each statement under the SQLite bind-variable
    /// limit, but every chunk runs inside one transaction: nothing is durable
    /// until the last chunk lands, and a failure rolls the whole call back.
    pub async fn insert_samples(&self, samples: &[PatientSample]) -> anyhow::Result<usize> {
        if samples.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;
        Self::insert_chunks(&txn, samples).await?;
        txn.commit().await?;

        Ok(samples.len())
    }

    /// Run every chunk against an already-open transaction. A chunk whose
    /// batch insert fails is retried row-by-row under a savepoint, so the
    /// outer transaction survives the failed statement.
    pub(crate) async fn insert_chunks(
        txn: &DatabaseTransaction,
        samples: &[PatientSample],
    ) -> anyhow::Result<()> {
        for chunk in samples.chunks(INSERT_BATCH) {
            let models: Vec<metric_samples::ActiveModel> =
                chunk.iter().map(active_model).collect();

            let savepoint = txn.begin().await?;
            let batch = metric_samples::Entity::insert_many(models)
                .on_conflict(upsert())
                .exec(&savepoint)
                .await;

            match batch {
                Ok(_) => savepoint.commit().await?,
                Err(error) => {
                    warn!("batch insert failed, retrying chunk row-by-row: {error}");
                    savepoint.rollback().await?;
                    Self::insert_chunk_fallback(txn, chunk).await?;
                }
            }
        }

        Ok(())
    }

    async fn insert_chunk_fallback(
        txn: &DatabaseTransaction,
        chunk: &[PatientSample],
    ) -> anyhow::Result<()> {
        for sample in chunk {
            metric_samples::Entity::insert(active_model(sample))
                .on_conflict(upsert())
                .exec(txn)
                .await?;
        }

        Ok(())
    }

    /// Drop every stored sample for a (patient, day), all metrics.
    pub async fn delete_day(&self, patient_id: &str, date: NaiveDate) -> anyhow::Result<u64> {
        Self::delete_day_on(&self.db, patient_id, date).await
    }

    pub(crate) async fn delete_day_on<C: ConnectionTrait>(
        conn: &C,
        patient_id: &str,
        date: NaiveDate,
    ) -> anyhow::Result<u64> {
        let (start, end) = day_bounds(date);
        let result = metric_samples::Entity::delete_many()
            .filter(metric_samples::Column::PatientId.eq(patient_id))
            .filter(metric_samples::Column::Time.gte(start))
            .filter(metric_samples::Column::Time.lt(end))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Drop one metric's samples within a timestamp range, the contract
    /// callers use to clear a single series before regenerating it.
    pub async fn delete_metric_range(
        &self,
        patient_id: &str,
        metric: MetricKind,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> anyhow::Result<u64> {
        let result = metric_samples::Entity::delete_many()
            .filter(metric_samples::Column::PatientId.eq(patient_id))
            .filter(metric_samples::Column::Metric.eq(metric.to_string()))
            .filter(metric_samples::Column::Time.gte(from))
            .filter(metric_samples::Column::Time.lt(to))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_day(&self, patient_id: &str, date: NaiveDate) -> anyhow::Result<u64> {
        let (start, end) = day_bounds(date);
        let count = metric_samples::Entity::find()
            .filter(metric_samples::Column::PatientId.eq(patient_id))
            .filter(metric_samples::Column::Time.gte(start))
            .filter(metric_samples::Column::Time.lt(end))
            .count(&self.db)
            .await?;

        Ok(count)
    }
}

fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
    (start, start + TimeDelta::days(1))
}

fn upsert() -> OnConflict {
    OnConflict::columns([
        metric_samples::Column::PatientId,
        metric_samples::Column::Metric,
        metric_samples::Column::Time,
    ])
    .update_columns([
        metric_samples::Column::Value,
        metric_samples::Column::Source,
    ])
    .to_owned()
}

fn active_model(sample: &PatientSample) -> metric_samples::ActiveModel {
    metric_samples::ActiveModel {
        id: NotSet,
        patient_id: Set(sample.patient_id.clone()),
        metric: Set(sample.metric.to_string()),
        value: Set(sample.value),
        time: Set(sample.time),
        source: Set(sample.source.clone()),
    }
}
