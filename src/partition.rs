use std::ops::Range;

/// Splits `[0, len)` into `workers` contiguous, non-overlapping batches.
///
/// Every batch except the last holds `len / workers` indices; the last
/// batch absorbs the remainder, so the batches always cover the whole
/// sequence. When `len < workers` the leading batches are empty and the
/// last batch covers everything.
///
/// Panics if `workers` is zero.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0, "worker count must be greater than 0");

    let batch_size = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * batch_size;
            let end = if i + 1 == workers {
                len
            } else {
                (i + 1) * batch_size
            };
            start..end
        })
        .collect()
}
