use rand::Rng;

/// Uniform noise within `pct` (fraction, not percent) of the value. Mean
/// preserving.
pub fn jitter<R: Rng + ?Sized>(value: f64, pct: f64, rng: &mut R) -> f64 {
    let spread = value.abs() * pct;
    if spread == 0.0 {
        return value;
    }
    value + rng.random_range(-spread..=spread)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.clamp(min, max)
}

/// Exponential moving average step. `factor` is the weight of the new value;
/// small factors damp frame-to-frame jumps harder.
pub fn smooth(current: f64, previous: f64, factor: f64) -> f64 {
    previous * (1.0 - factor) + current * factor
}

/// With probability `chance`, scale by `multiplier`. Models brief exertion
/// bursts.
pub fn spike<R: Rng + ?Sized>(value: f64, chance: f64, multiplier: f64, rng: &mut R) -> f64 {
    if rng.random_bool(chance) {
        value * multiplier
    } else {
        value
    }
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
