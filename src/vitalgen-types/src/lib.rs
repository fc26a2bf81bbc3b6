pub(crate) mod metric;
pub use metric::MetricKind;

pub(crate) mod sample;
pub use sample::{MetricSample, PatientSample, DATA_SOURCE};

pub(crate) mod summary;
pub use summary::GenerationSummary;

/// Five-minute slots in one simulated day.
pub const SLOTS_PER_DAY: usize = 288;
/// Minutes between consecutive slots.
pub const SLOT_MINUTES: u32 = 5;
/// Samples in one full (patient, day) dataset: six metrics, 288 slots each.
pub const SAMPLES_PER_DAY: usize = SLOTS_PER_DAY * MetricKind::ALL.len();
