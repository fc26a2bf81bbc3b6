#[macro_use]
extern crate log;

mod report;

use anyhow::bail;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use report::DayReport;
use vitalgen_db::{DatabaseHandler, SearchSamples};

#[derive(Parser)]
pub struct VitalGenCli {
    #[arg(env, long)]
    pub database_url: String,
    #[clap(subcommand)]
    pub subcommand: VitalGenCommand,
}

#[derive(Subcommand)]
pub enum VitalGenCommand {
    ///
    /// Generate one simulated day for a patient
    ///
    Generate {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        date: NaiveDate,
    },
    ///
    /// Generate an inclusive range of days for a patient
    ///
    Backfill {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    ///
    /// Print per-metric aggregates for a stored day
    ///
    Stats {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        date: NaiveDate,
    },
    ///
    /// Delete a stored day
    ///
    Purge {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        date: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = VitalGenCli::parse();
    let db = DatabaseHandler::new(cli.database_url).await;

    match cli.subcommand {
        VitalGenCommand::Generate { patient, date } => {
            let summary = db.generate_day(&patient, date).await?;
            println!("{summary}");
            Ok(())
        }
        VitalGenCommand::Backfill { patient, from, to } => {
            if from > to {
                bail!("--from {from} is after --to {to}");
            }

            let days = (to - from).num_days() as u64 + 1;
            let pb = ProgressBar::new(days);
            pb.set_style(
                ProgressStyle::with_template(
                    "{prefix:>10} [{wide_bar:.cyan/dim}] {pos}/{len} days ({eta} remaining)",
                )
                .expect("valid progress template")
                .progress_chars("=>-"),
            );
            pb.set_prefix(patient.clone());

            let mut total = 0usize;
            let mut day = from;
            while day <= to {
                let summary = db.generate_day(&patient, day).await?;
                total += summary.data_points;
                pb.inc(1);
                day = day.succ_opt().expect("date has a successor");
            }
            pb.finish();

            info!("backfilled {days} days ({total} samples) for {patient}");
            Ok(())
        }
        VitalGenCommand::Stats { patient, date } => {
            let start = date.and_hms_opt(0, 0, 0).expect("midnight is a valid time");
            let samples = db
                .search_samples(SearchSamples {
                    patient_id: Some(patient.clone()),
                    metric: None,
                    from: Some(start),
                    to: date
                        .succ_opt()
                        .map(|d| d.and_hms_opt(0, 0, 0).expect("midnight is a valid time")),
                    limit: None,
                })
                .await?;

            let report = DayReport::from_samples(&samples);
            if report.is_empty() {
                println!("No samples stored for {patient} on {date}");
            } else {
                println!("{patient} on {date}:\n{report}");
            }
            Ok(())
        }
        VitalGenCommand::Purge { patient, date } => {
            let removed = db.delete_day(&patient, date).await?;
            println!("Removed {removed} samples for {patient} on {date}");
            Ok(())
        }
    }
}
