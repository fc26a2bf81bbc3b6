pub mod metric_samples;
