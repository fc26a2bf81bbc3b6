use std::str::FromStr as _;

use anyhow::Context as _;
use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use vitalgen_entities::metric_samples;
use vitalgen_types::{MetricKind, PatientSample};

use crate::DatabaseHandler;

#[derive(Default, Debug)]
pub struct SearchSamples {
    pub patient_id: Option<String>,
    pub metric: Option<MetricKind>,
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub limit: Option<u64>,
}

impl SearchSamples {
    pub fn with_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = Some(metric);
        self
    }

    pub(crate) fn conditions(self) -> Condition {
        Condition::all()
            .add_option(
                self.patient_id
                    .map(|p| metric_samples::Column::PatientId.eq(p)),
            )
            .add_option(
                self.metric
                    .map(|m| metric_samples::Column::Metric.eq(m.to_string())),
            )
            .add_option(self.from.map(|from| metric_samples::Column::Time.gte(from)))
            .add_option(self.to.map(|to| metric_samples::Column::Time.lt(to)))
    }
}

impl DatabaseHandler {
    pub async fn search_samples(
        &self,
        options: SearchSamples,
    ) -> anyhow::Result<Vec<PatientSample>> {
        let limit = options.limit;
        metric_samples::Entity::find()
            .filter(options.conditions())
            .limit(limit)
            .order_by_asc(metric_samples::Column::Time)
            .all(&self.db)
            .await?
            .into_iter()
            .map(parse_sample)
            .collect()
    }
}

fn parse_sample(model: metric_samples::Model) -> anyhow::Result<PatientSample> {
    let metric = MetricKind::from_str(&model.metric)
        .with_context(|| format!("unknown metric `{}` in row {}", model.metric, model.id))?;

    Ok(PatientSample {
        patient_id: model.patient_id,
        metric,
        value: model.value,
        time: model.time,
        source: model.source,
    })
}
