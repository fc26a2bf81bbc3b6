use chrono::NaiveDate;
use rand::Rng;
use vitalgen_types::{MetricSample, SAMPLES_PER_DAY};

use crate::{
    ValidationError, calories, glucose, heart_rate, hydration, sleep, steps, validate_dataset,
};

/// One full simulated day: all six metrics, validated, in metric order then
/// time order. Noise comes from the thread RNG; daily targets stay seeded by
/// the date.
pub fn generate_day(date: NaiveDate) -> Result<Vec<MetricSample>, ValidationError> {
    generate_day_with(date, &mut rand::rng())
}

/// Same as [`generate_day`] with an injected RNG, for reproducible tests.
pub fn generate_day_with<R: Rng + ?Sized>(
    date: NaiveDate,
    rng: &mut R,
) -> Result<Vec<MetricSample>, ValidationError> {
    let mut samples = Vec::with_capacity(SAMPLES_PER_DAY);
    samples.extend(steps::generate(date, rng));
    samples.extend(heart_rate::generate(date, rng));
    samples.extend(calories::generate(date, rng));
    samples.extend(sleep::generate(date));
    samples.extend(hydration::generate(date));
    samples.extend(glucose::generate(date, rng));

    validate_dataset(&samples)?;
    Ok(samples)
}
