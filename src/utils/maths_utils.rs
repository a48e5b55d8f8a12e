use argminmax::ArgMinMax;

/// Largest value. `vec` must be non-empty and NaN-free.
#[inline]
pub(crate) fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Smallest value. `vec` must be non-empty and NaN-free.
#[inline]
pub(crate) fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Share of `count` in `total` as a percentage (0-100). Zero when `total` is zero, never NaN.
#[inline]
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// Clamps a percentage into [0, 100]. NaN collapses to 0.
#[inline]
pub(crate) fn clamp_pct(val: f64) -> f64 {
    if val.is_nan() { 0.0 } else { val.clamp(0.0, 100.0) }
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let t = (val - in_min) / (in_max - in_min);
    out_min + t * (out_max - out_min)
}
