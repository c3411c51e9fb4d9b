use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::accumulator::Accumulator;
use crate::error::SumError;

/// The body of one worker thread: announce the start, sum the batch one
/// element at a time, then merge the partial sum.
///
/// The partial sum stays local to the worker until the single `merge`
/// call. Elements are processed strictly in index order; `work_delay`
/// paces each access to simulate non-trivial per-item work.
pub fn run<W: Write>(
    id: usize,
    batch: &[i64],
    accumulator: &Accumulator<W>,
    work_delay: Duration,
) -> Result<(), SumError> {
    accumulator.announce_start(id)?;

    let mut partial = 0i64;
    for &value in batch {
        if !work_delay.is_zero() {
            thread::sleep(work_delay);
        }
        partial += value;
    }

    accumulator.merge(id, partial)
}
