use std::io::Write;
use std::thread;

use crate::accumulator::Accumulator;
use crate::config::Config;
use crate::error::SumError;
use crate::partition::partition;
use crate::worker;

/// Sums `sequence` across `config.workers` threads, writing the workers'
/// progress lines to `sink`, and returns the final total.
///
/// One named thread is spawned per batch inside a `thread::scope`, which
/// lets the workers borrow the sequence and the accumulator directly.
/// The scope exit is the join barrier: no total is read, and no partial
/// progress is visible to the caller, until every worker has completed.
pub fn run<W: Write + Send>(
    sequence: &[i64],
    config: &Config,
    sink: &mut W,
) -> Result<i64, SumError> {
    let ranges = partition(sequence.len(), config.workers);
    let accumulator = Accumulator::new(sink);
    let work_delay = config.work_delay;

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());

        for (id, range) in ranges.into_iter().enumerate() {
            let batch = &sequence[range];
            let accumulator = &accumulator;
            let handle = thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn_scoped(scope, move || {
                    worker::run(id, batch, accumulator, work_delay)
                })
                .map_err(SumError::Spawn)?;
            handles.push(handle);
        }

        // Err from join() means the worker panicked. An early return here
        // still joins the remaining workers: the scope will not exit while
        // any of its threads are running.
        for handle in handles {
            handle.join().map_err(|_| SumError::WorkerPanic)??;
        }

        Ok::<(), SumError>(())
    })?;

    accumulator.into_total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io;
    use std::time::Duration;

    fn quick(workers: usize) -> Config {
        Config::new(workers).with_work_delay(Duration::ZERO)
    }

    #[test]
    fn test_one_element_per_worker() {
        let data: Vec<i64> = (1..=10).collect();
        let total = run(&data, &quick(10), &mut io::sink()).unwrap();
        assert_eq!(total, 55);
    }

    #[test]
    fn test_remainder_absorbed_by_last_worker() {
        let data: Vec<i64> = (1..=25).collect();
        let total = run(&data, &quick(10), &mut io::sink()).unwrap();
        assert_eq!(total, 325);
    }

    #[test]
    fn test_more_workers_than_items() {
        let total = run(&[7, 8, 9], &quick(8), &mut io::sink()).unwrap();
        assert_eq!(total, 24);
    }

    #[test]
    fn test_single_worker() {
        let total = run(&[2, 4, 6, 8], &quick(1), &mut io::sink()).unwrap();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_empty_sequence() {
        let total = run(&[], &quick(4), &mut io::sink()).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_negative_values() {
        let total = run(&[10, -3, -7, 5, -5], &quick(3), &mut io::sink()).unwrap();
        assert_eq!(total, 0);
    }

    #[test]
    fn test_repeated_runs_are_deterministic() {
        let data: Vec<i64> = (0..1_000).collect();
        let mut totals = Vec::new();
        for _ in 0..5 {
            totals.push(run(&data, &quick(6), &mut io::sink()).unwrap());
        }
        assert!(totals.iter().all(|&t| t == totals[0]));
    }

    #[test]
    fn test_every_worker_reports_start_and_finish() {
        let data: Vec<i64> = (0..40).collect();
        let mut sink = Vec::new();
        run(&data, &quick(4), &mut sink).unwrap();

        let output = String::from_utf8(sink).unwrap();
        for id in 0..4 {
            let started = format!("[Thread {}] Started!", id);
            let finished = format!("[Thread {}] Finished!", id);
            assert_eq!(output.matches(&started).count(), 1);
            assert_eq!(output.matches(&finished).count(), 1);
            assert!(output.find(&started).unwrap() < output.find(&finished).unwrap());
        }
        assert_eq!(output.lines().count(), 8);
    }

    #[test]
    fn test_matches_serial_sum_on_random_data() {
        let mut rng = StdRng::seed_from_u64(42);
        let data: Vec<i64> = (0..10_000).map(|_| rng.gen_range(-1_000..1_000)).collect();
        let expected: i64 = data.iter().sum();

        assert_eq!(run(&data, &quick(7), &mut io::sink()).unwrap(), expected);
    }

    #[test]
    fn test_work_delay_does_not_change_the_total() {
        let data: Vec<i64> = (1..=10).collect();
        let config = Config::new(2).with_work_delay(Duration::from_micros(200));
        assert_eq!(run(&data, &config, &mut io::sink()).unwrap(), 55);
    }

    #[test]
    fn test_independent_instances() {
        let first: Vec<i64> = (1..=100).collect();
        let second: Vec<i64> = (1..=50).collect();

        let a = thread::spawn(move || run(&first, &quick(3), &mut io::sink()).unwrap());
        let b = thread::spawn(move || run(&second, &quick(5), &mut io::sink()).unwrap());

        assert_eq!(a.join().unwrap(), 5_050);
        assert_eq!(b.join().unwrap(), 1_275);
    }
}
