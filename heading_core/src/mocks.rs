//! Test and helper mocks for heading_core

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use heading_traits::clock::Clock;
use heading_traits::{Axis, RateGyro};

/// A gyro that serves a scripted sequence of rates (rad/s), repeating the
/// last value once the script runs out.
pub struct ScriptedGyro {
    rates: VecDeque<f64>,
    last: f64,
    pub initialized: bool,
}

impl ScriptedGyro {
    pub fn new<I: IntoIterator<Item = f64>>(rates: I) -> Self {
        Self {
            rates: rates.into_iter().collect(),
            last: 0.0,
            initialized: false,
        }
    }

    /// A gyro pinned at one constant rate.
    pub fn constant(rate_rad_s: f64) -> Self {
        let mut g = Self::new([]);
        g.last = rate_rad_s;
        g
    }
}

impl RateGyro for ScriptedGyro {
    fn initialize(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.initialized = true;
        Ok(())
    }

    fn read_rate(&mut self, _axis: Axis) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(r) = self.rates.pop_front() {
            self.last = r;
        }
        Ok(self.last)
    }
}

/// A gyro that always errors on read; useful when driving the loop with
/// externally sampled rates via `step_from_rate`.
pub struct NoopGyro;

impl RateGyro for NoopGyro {
    fn initialize(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn read_rate(&mut self, _axis: Axis) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop gyro")))
    }
}

/// Deterministic clock for tests: the tick counter only moves when set or
/// when `sleep` fast-forwards it, and it wraps at u32::MAX like hardware.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Arc<Mutex<u32>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_us(&self, us: u32) {
        if let Ok(mut t) = self.ticks.lock() {
            *t = t.wrapping_add(us);
        }
    }

    pub fn set_us(&self, us: u32) {
        if let Ok(mut t) = self.ticks.lock() {
            *t = us;
        }
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u32 {
        self.ticks.lock().map(|g| *g).unwrap_or(0)
    }

    fn sleep(&self, d: Duration) {
        self.advance_us(d.as_micros() as u32);
    }
}
