mod config;
mod engine;
mod error;
mod report;
mod sample;
mod state;

pub use config::MonitorConfig;
pub use engine::Monitor;
pub use error::{MonitorError, MonitorResult};
pub use report::{ConsoleSink, Report, Sink};
pub use sample::LiveSample;
pub use state::{Action, MonitorState, StopReason};
