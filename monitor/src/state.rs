use core::fmt;

/// Why the engine stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A bus transfer failed
    Failed,
    /// The requested number of live samples was taken
    Stopped,
}

/// Engine lifecycle; only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Uninitialized,
    Woken,
    Configured,
    Calibrating,
    Sampling,
    Terminated(StopReason),
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorState::Uninitialized => write!(f, "uninitialized"),
            MonitorState::Woken => write!(f, "woken"),
            MonitorState::Configured => write!(f, "configured"),
            MonitorState::Calibrating => write!(f, "calibrating"),
            MonitorState::Sampling => write!(f, "sampling"),
            MonitorState::Terminated(StopReason::Failed) => write!(f, "terminated after a failure"),
            MonitorState::Terminated(StopReason::Stopped) => write!(f, "stopped"),
        }
    }
}

/// Engine steps that are only valid in certain states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Wake,
    Configure,
    Calibrate,
    Sample,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wake => write!(f, "wake"),
            Action::Configure => write!(f, "configure"),
            Action::Calibrate => write!(f, "calibrate"),
            Action::Sample => write!(f, "sample"),
        }
    }
}
