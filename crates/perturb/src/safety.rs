//! Range rails for perturbed indicator values.
//!
//! Unlike a plain `f64::clamp`, NaN passes through untouched so that a
//! numeric defect upstream is still visible to record validation instead of
//! being silently replaced by a bound.

/// Clamps `value` to `[floor, cap]`, letting NaN through.
pub fn clamp_to(value: f64, floor: f64, cap: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    if value < floor {
        floor
    } else if value > cap {
        cap
    } else {
        value
    }
}

/// Raises `value` to at least `floor`, letting NaN through.
pub fn floor_at(value: f64, floor: f64) -> f64 {
    clamp_to(value, floor, f64::INFINITY)
}
