use thiserror::Error;

/// Reasons a statistic cannot be computed from a sample set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The sample set is empty
    #[error("statistic requires at least one sample")]
    Empty,

    /// Fewer samples than the statistic is defined for
    #[error("statistic requires at least {needed} samples, got {got}")]
    InsufficientSamples {
        /// Minimum sample count
        needed: usize,
        /// Samples actually available
        got: usize,
    },
}

/// Type alias for Result with StatsError
pub type StatsResult<T> = Result<T, StatsError>;
