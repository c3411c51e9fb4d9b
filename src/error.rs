use std::io;
use thiserror::Error;

/// Everything that can go wrong between reading the input and reporting
/// the total. No variant is retried; the binary prints the error and
/// exits nonzero.
#[derive(Error, Debug)]
pub enum SumError {
    #[error("the input was empty")]
    EmptyInput,
    #[error("the declared length {0:?} is not a valid count")]
    InvalidLength(String),
    #[error("the value {0:?} is not a valid integer")]
    InvalidValue(String),
    #[error("the input declared {expected} values but only {found} were present")]
    TruncatedSequence { expected: usize, found: usize },
    #[error("failed to spawn a worker thread")]
    Spawn(#[source] io::Error),
    #[error("a worker thread panicked before completing its merge")]
    WorkerPanic,
    #[error("the shared accumulator lock was poisoned")]
    LockPoisoned,
    #[error("i/o error")]
    Io(#[from] io::Error),
}
