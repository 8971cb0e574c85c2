use std::f64::consts::PI;

/// Unit half-period sine sampler: `steps` samples of `sin(i * pi / steps)`
/// for `i` in `0..steps`, covering `[0, pi)`.
///
/// Zero steps yields an empty vector; the angular step is only computed
/// once a division by `steps` is safe.
pub fn half_period_samples(steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }

    let angular_step = PI / steps as f64;
    (0..steps)
        .map(|index| (index as f64 * angular_step).sin())
        .collect()
}
