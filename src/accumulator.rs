use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use crate::error::SumError;

/// The shared state handle passed to every worker: the running total and
/// the diagnostic sink, guarded by one mutex. Sharing a single lock means
/// a merge and its "Finished!" line form one critical section, and
/// progress lines from different workers cannot interleave.
///
/// The handle is created per run, never process-wide, so several
/// summations can execute in one process without touching each other.
pub struct Accumulator<W> {
    shared: Mutex<Shared<W>>,
}

struct Shared<W> {
    total: i64,
    sink: W,
}

impl<W: Write> Accumulator<W> {
    /// A fresh accumulator with a total of zero, writing diagnostics to
    /// `sink`.
    pub fn new(sink: W) -> Self {
        Accumulator {
            shared: Mutex::new(Shared { total: 0, sink }),
        }
    }

    /// Emits the "Started!" line for `id`. The lock is released when this
    /// returns, before the caller begins its local computation.
    pub fn announce_start(&self, id: usize) -> Result<(), SumError> {
        let mut shared = self.lock()?;
        writeln!(shared.sink, "[Thread {}] Started!", id)?;
        Ok(())
    }

    /// Adds `partial` to the shared total and emits the "Finished!" line
    /// for `id`, both inside one critical section.
    pub fn merge(&self, id: usize, partial: i64) -> Result<(), SumError> {
        let mut shared = self.lock()?;
        shared.total += partial;
        writeln!(shared.sink, "[Thread {}] Finished!", id)?;
        Ok(())
    }

    /// Snapshot of the current total.
    pub fn total(&self) -> Result<i64, SumError> {
        Ok(self.lock()?.total)
    }

    /// Consumes the accumulator and returns the final total. Only the
    /// orchestrator calls this, after every worker has been joined.
    pub fn into_total(self) -> Result<i64, SumError> {
        self.shared
            .into_inner()
            .map(|shared| shared.total)
            .map_err(|_| SumError::LockPoisoned)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Shared<W>>, SumError> {
        self.shared.lock().map_err(|_| SumError::LockPoisoned)
    }
}
