use core::time::Duration;

use calibration::{CalibrationOffset, CalibrationReport, Calibrator};
use driver::imu::Mpu6050;
use embedded_hal::delay::DelayNs;
use hal::I2cDevice;
use log::{debug, error, info};

use crate::config::MonitorConfig;
use crate::error::{MonitorError, MonitorResult};
use crate::report::{Report, Sink};
use crate::sample::LiveSample;
use crate::state::{Action, MonitorState, StopReason};

/// Calibration and sampling engine for one MPU6050
///
/// Steps must run in order: `wake`, `configure`, `calibrate`, then either
/// `sample_once` from a caller-owned loop or `run`. `start` performs the
/// first three with the settle pauses in between. Once a bus transfer
/// fails inside a step, or `run` ends, the engine is terminated for good;
/// recalibrating needs a fresh `Monitor`.
pub struct Monitor<I: I2cDevice, D: DelayNs> {
    imu: Mpu6050<I>,
    delay: D,
    config: MonitorConfig,
    state: MonitorState,
    calibration: Option<CalibrationReport>,
}

impl<I: I2cDevice, D: DelayNs> Monitor<I, D> {
    pub fn new(imu: Mpu6050<I>, delay: D, config: MonitorConfig) -> Self {
        Self {
            imu,
            delay,
            config,
            state: MonitorState::Uninitialized,
            calibration: None,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn imu(&self) -> &Mpu6050<I> {
        &self.imu
    }

    /// Result of the calibration pass, once it completed
    pub fn calibration(&self) -> Option<&CalibrationReport> {
        self.calibration.as_ref()
    }

    pub fn offset(&self) -> Option<CalibrationOffset> {
        self.calibration.map(|report| report.offset)
    }

    /// Wake, configure and calibrate, pausing as the device needs
    pub fn start<S: Sink>(&mut self, sink: &mut S) -> MonitorResult<CalibrationReport, I::Error> {
        self.wake(sink)?;
        self.pause(self.config.wake_settle);
        self.configure(sink)?;
        self.pause(self.config.configure_settle);
        let report = self.calibrate(sink)?;
        self.pause(self.config.pre_sampling_delay);
        Ok(report)
    }

    /// Clear the sleep bit; may be repeated until the device is configured
    pub fn wake<S: Sink>(&mut self, sink: &mut S) -> MonitorResult<(), I::Error> {
        self.expect(&[MonitorState::Uninitialized, MonitorState::Woken], Action::Wake)?;
        sink.report(&Report::Waking { address: self.imu.address() });

        let result = self.imu.wake();
        self.check(sink, result)?;
        self.transition(MonitorState::Woken);
        Ok(())
    }

    /// Write the configured ranges, once
    pub fn configure<S: Sink>(&mut self, sink: &mut S) -> MonitorResult<(), I::Error> {
        self.expect(&[MonitorState::Woken], Action::Configure)?;
        let (accel, gyro) = (self.config.accel_range, self.config.gyro_range);
        sink.report(&Report::Configuring { accel, gyro });

        let result = self.imu.configure(accel, gyro);
        self.check(sink, result)?;
        self.transition(MonitorState::Configured);
        Ok(())
    }

    /// Collect the calibration set and derive the accelerometer offset
    pub fn calibrate<S: Sink>(
        &mut self,
        sink: &mut S,
    ) -> MonitorResult<CalibrationReport, I::Error> {
        self.expect(&[MonitorState::Configured], Action::Calibrate)?;
        self.transition(MonitorState::Calibrating);
        sink.report(&Report::CalibrationStarted {
            samples: self.config.calibration_samples,
        });

        let mut calibrator = Calibrator::new(self.config.calibration_samples);
        while !calibrator.is_complete() {
            let result = self.imu.read_acceleration();
            let sample = self.check(sink, result)?;
            calibrator.push(sample);
            self.pause(self.config.calibration_interval);
        }

        let report = calibrator.finish();
        info!(
            "calibrated from {} samples, offset {}",
            report.samples, report.offset
        );
        sink.report(&Report::Calibrated(&report));
        self.calibration = Some(report);
        self.transition(MonitorState::Sampling);
        Ok(report)
    }

    /// Take one corrected live reading
    ///
    /// Does not change the engine state on failure; whoever drives the
    /// loop decides what a failed reading means.
    pub fn sample_once(&mut self) -> MonitorResult<LiveSample, I::Error> {
        self.expect(&[MonitorState::Sampling], Action::Sample)?;
        let calibration = self.calibration;
        let (Some(report), Some(sensitivity)) = (calibration, self.imu.accel_sensitivity()) else {
            return Err(self.invalid(Action::Sample));
        };

        let raw = self.imu.read_acceleration().map_err(MonitorError::Transport)?;
        let corrected = report.offset.apply(raw);
        let accel_g = corrected / sensitivity;
        let temperature_c = self.imu.read_temperature().map_err(MonitorError::Transport)?;

        Ok(LiveSample {
            raw,
            corrected,
            accel_g,
            temperature_c,
        })
    }

    /// Report live samples until `limit` is reached or a transfer fails
    ///
    /// `None` runs until the process is killed. A failure is reported to
    /// the sink exactly once and ends the loop.
    pub fn run<S: Sink>(
        &mut self,
        sink: &mut S,
        limit: Option<u64>,
    ) -> MonitorResult<u64, I::Error> {
        self.expect(&[MonitorState::Sampling], Action::Sample)?;
        sink.report(&Report::SamplingStarted);

        let mut taken = 0u64;
        while limit.map_or(true, |max| taken < max) {
            if taken > 0 {
                self.pause(self.config.live_interval);
            }
            match self.sample_once() {
                Ok(sample) => {
                    sink.report(&Report::Sample(&sample));
                    taken += 1;
                }
                Err(err) => return Err(self.terminate(sink, err)),
            }
        }

        info!("stopped after {} samples", taken);
        self.transition(MonitorState::Terminated(StopReason::Stopped));
        Ok(taken)
    }

    fn expect(&self, allowed: &[MonitorState], action: Action) -> MonitorResult<(), I::Error> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: Action) -> MonitorError<I::Error> {
        MonitorError::InvalidTransition {
            state: self.state,
            action,
        }
    }

    fn check<T, S: Sink>(
        &mut self,
        sink: &mut S,
        result: Result<T, I::Error>,
    ) -> MonitorResult<T, I::Error> {
        result.map_err(|err| self.terminate(sink, MonitorError::Transport(err)))
    }

    fn terminate<S: Sink>(
        &mut self,
        sink: &mut S,
        err: MonitorError<I::Error>,
    ) -> MonitorError<I::Error> {
        error!("{} failed: {}", self.state, err);
        self.transition(MonitorState::Terminated(StopReason::Failed));
        sink.report(&Report::Failed(&err));
        err
    }

    fn transition(&mut self, next: MonitorState) {
        debug!("{} -> {}", self.state, next);
        self.state = next;
    }

    fn pause(&mut self, duration: Duration) {
        let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.delay.delay_us(micros);
    }
}
