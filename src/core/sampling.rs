use std::num::NonZeroUsize;

/// `count` evenly spaced times from 0 to `end_s`, both ends included.
///
/// A single sample sits at t = 0. `end_s` may be negative, in which case the
/// times decrease from 0.
pub fn sample_times(end_s: f64, count: NonZeroUsize) -> Vec<f64> {
    let count = count.get();
    if count == 1 {
        return vec![0.0];
    }

    let last = count - 1;
    let step = end_s / last as f64;
    (0..count)
        .map(|i| match i {
            0 => 0.0,
            i if i == last => end_s,
            i => i as f64 * step,
        })
        .collect()
}
