use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MetricSamples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MetricSamples::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MetricSamples::PatientId).text().not_null())
                    .col(ColumnDef::new(MetricSamples::Metric).text().not_null())
                    .col(ColumnDef::new(MetricSamples::Value).double().not_null())
                    .col(ColumnDef::new(MetricSamples::Time).date_time().not_null())
                    .col(ColumnDef::new(MetricSamples::Source).text().not_null())
                    .to_owned(),
            )
            .await?;

        // one row per (patient, metric, slot); regeneration upserts against this
        manager
            .create_index(
                Index::create()
                    .name("idx_metric_samples_owner_metric_time")
                    .table(MetricSamples::Table)
                    .col(MetricSamples::PatientId)
                    .col(MetricSamples::Metric)
                    .col(MetricSamples::Time)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MetricSamples::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum MetricSamples {
    Table,
    Id,
    PatientId,
    Metric,
    Value,
    Time,
    Source,
}
