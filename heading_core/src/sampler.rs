//! Double-sample consistency gate.
//!
//! Two consecutive readings must agree within the configured margin before
//! a sample is accepted; disagreeing pairs are discarded whole and the pair
//! is retaken. The accepted value is the first reading of the agreeing
//! pair, never an average.

use eyre::WrapErr;
use heading_traits::{Axis, RateGyro};

use crate::config::SamplerCfg;
use crate::error::{EstimatorError, Result};
use crate::hw_error::map_hw_error;

#[derive(Debug, Clone, Default)]
pub struct ConsistencySampler {
    cfg: SamplerCfg,
}

impl ConsistencySampler {
    pub fn new(cfg: SamplerCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &SamplerCfg {
        &self.cfg
    }

    /// Take sample pairs until one agrees within the margin.
    ///
    /// With `max_attempts = 0` this blocks until a pair agrees; otherwise
    /// exhausting the attempt budget yields `EstimatorError::Inconsistent`.
    /// Non-finite readings are rejected before they can reach the
    /// integrator.
    pub fn sample<G: RateGyro + ?Sized>(&self, gyro: &mut G, axis: Axis) -> Result<f64> {
        let mut attempts: u32 = 0;
        loop {
            let first = self.read_one(gyro, axis)?;
            let second = self.read_one(gyro, axis)?;
            if (first - second).abs() <= self.cfg.error_margin_rad_s {
                tracing::trace!(rate = first, attempts, "sample accepted");
                return Ok(first);
            }
            attempts = attempts.saturating_add(1);
            tracing::trace!(first, second, attempts, "sample pair rejected");
            if self.cfg.max_attempts != 0 && attempts >= self.cfg.max_attempts {
                tracing::warn!(attempts, "consistency gate exhausted");
                return Err(eyre::Report::new(EstimatorError::Inconsistent { attempts }));
            }
        }
    }

    fn read_one<G: RateGyro + ?Sized>(&self, gyro: &mut G, axis: Axis) -> Result<f64> {
        let rate = gyro
            .read_rate(axis)
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("reading gyroscope")?;
        if !rate.is_finite() {
            return Err(eyre::Report::new(EstimatorError::NonFiniteRate));
        }
        Ok(rate)
    }
}
