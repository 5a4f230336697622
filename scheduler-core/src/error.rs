//! Error types for scheduler-core.

use thiserror::Error;

use crate::diagnose::Diagnosis;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure mode this crate can surface, from descriptor loading
/// through solving.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Descriptor failed to parse or referenced something that does not exist.
    #[error("bad descriptor: {0}")]
    BadDescriptor(String),

    /// The solver returned a non-optimal terminal status.
    #[error("schedule is unsatisfiable\n{0}")]
    Unsatisfiable(Diagnosis),

    /// The solver backend could not be invoked at all.
    #[error("solver unavailable: {0}")]
    SolverUnavailable(String),

    /// The solver ran out of time before finding a feasible solution.
    #[error("solver found no feasible solution within the time limit\n{0}")]
    Timeout(Diagnosis),

    /// A `Session` was asked to solve more than once.
    #[error("this session has already been solved")]
    AlreadySolved,
}

impl Error {
    pub fn bad_descriptor(msg: impl Into<String>) -> Self {
        Error::BadDescriptor(msg.into())
    }
}
