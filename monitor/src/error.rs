use core::fmt::Debug;

use thiserror::Error;

use crate::state::{Action, MonitorState};

/// Errors raised by the monitor engine
#[derive(Error, Debug)]
pub enum MonitorError<E: Debug> {
    /// The bus transport failed; never retried
    #[error("I/O error on the sensor bus: {0:?}")]
    Transport(E),

    /// A step was requested out of order; the bus was not touched
    #[error("cannot {action} while {state}")]
    InvalidTransition { state: MonitorState, action: Action },
}

/// Result type for monitor operations
pub type MonitorResult<T, E> = Result<T, MonitorError<E>>;
