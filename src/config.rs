use std::time::Duration;

/// Pause inserted before each element access, simulating non-trivial
/// per-item work so thread interleaving is observable.
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(1);

/// Runtime knobs for a summation run. The worker count is an explicit
/// value threaded through the partitioner and orchestrator, never a
/// process-wide constant.
#[derive(Debug, Clone)]
pub struct Config {
    pub workers: usize,
    pub work_delay: Duration,
}

impl Config {
    /// A config with an explicit worker count and the default work delay.
    ///
    /// Panics if `workers` is zero.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "worker count must be greater than 0");
        Config {
            workers,
            work_delay: DEFAULT_WORK_DELAY,
        }
    }

    /// Overrides the per-element delay. `Duration::ZERO` disables pacing.
    pub fn with_work_delay(mut self, work_delay: Duration) -> Self {
        self.work_delay = work_delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workers: num_cpus::get().max(1),
            work_delay: DEFAULT_WORK_DELAY,
        }
    }
}
