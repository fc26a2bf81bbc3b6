pub(crate) mod clock;
pub use clock::{DayPeriod, activity_level, day_slots, day_start, period_of};

pub(crate) mod shape;
pub use shape::{clamp, jitter, round_to, smooth, spike};

pub(crate) mod seed;
pub use seed::{seeded_range, seeded_unit};

pub mod calories;
pub mod glucose;
pub mod heart_rate;
pub mod hydration;
pub mod sleep;
pub mod steps;

pub(crate) mod validate;
pub use validate::{ValidationError, validate_dataset};

pub(crate) mod daily;
pub use daily::{generate_day, generate_day_with};
