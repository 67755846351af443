use std::io;

use thiserror::Error;

/// Returned by a [`Comparator`](crate::Comparator) that could not produce a
/// verdict.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The judge gave up, e.g. a person quit the prompt.
    #[error("comparator aborted: {0}")]
    Aborted(String),
    #[error("comparator I/O failed")]
    Io(#[from] io::Error),
    /// The comparator was asked something it must never be asked, or would
    /// have answered with a tie.
    #[error("{0}")]
    Contract(String),
}

impl OracleError {
    pub fn aborted(reason: impl Into<String>) -> Self {
        OracleError::Aborted(reason.into())
    }

    pub fn contract(reason: impl Into<String>) -> Self {
        OracleError::Contract(reason.into())
    }
}

/// Why building an order failed. Any of these aborts the whole run and no
/// partial order is handed back.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("comparator failed")]
    OracleFailure(#[source] OracleError),
    #[error("could not allocate room for {requested} items")]
    AllocationFailure { requested: usize },
    /// The comparator is not a strict total order, e.g. it produced a tie.
    #[error("comparator broke its contract: {0}")]
    ContractViolation(String),
}

impl From<OracleError> for BuildError {
    fn from(e: OracleError) -> Self {
        match e {
            OracleError::Contract(reason) => BuildError::ContractViolation(reason),
            other => BuildError::OracleFailure(other),
        }
    }
}
