//! Error types raised while scoring matchups.

use thiserror::Error;

/// Errors raised by the hype calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HypeError {
    /// An AP rank outside the poll's range reached the tier lookup.
    #[error("Invalid AP rank: {rank}. Must be between 1 and 25.")]
    InvalidApRank {
        /// The offending rank.
        rank: u32,
    },
}

#[cfg(feature = "python")]
impl From<HypeError> for pyo3::PyErr {
    fn from(err: HypeError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
