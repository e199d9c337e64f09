use thiserror::Error;

/// Errors raised by the trajectory simulator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// Initial positions and targets describe different particle counts
    #[error("got {positions} initial positions for {targets} targets")]
    LengthMismatch {
        /// Number of initial positions supplied
        positions: usize,
        /// Number of targets supplied
        targets: usize,
    },
}
