//! The estimator control loop (`EstimatorCore`).
//!
//! One iteration is strictly ordered: consistency-gated sample → elapsed
//! interval from the wrapping tick clock → integration. The heading
//! accumulator and the previous tick are the only state carried between
//! iterations.

use std::sync::Arc;
use std::time::Duration;

use eyre::WrapErr;
use heading_traits::clock::Clock;
use heading_traits::{Axis, RateGyro};

use crate::config::CadenceCfg;
use crate::error::{EstimatorError, Result};
use crate::estimate::HeadingEstimate;
use crate::hw_error::map_hw_error;
use crate::integrator::AngleIntegrator;
use crate::sampler::ConsistencySampler;
use crate::util::dt_secs;

/// Unified core for both dynamic (boxed) and generic (static dispatch)
/// variants.
pub struct EstimatorCore<G: RateGyro> {
    pub(crate) gyro: G,
    pub(crate) axis: Axis,
    pub(crate) sampler: ConsistencySampler,
    pub(crate) integrator: AngleIntegrator,
    pub(crate) clock: Arc<dyn Clock + Send + Sync>,
    pub(crate) period: Duration,
    pub(crate) last_tick: Option<u32>,
}

impl<G: RateGyro> std::fmt::Debug for EstimatorCore<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimatorCore")
            .field("axis", &self.axis)
            .field("heading_rad", &self.integrator.heading())
            .field("period", &self.period)
            .finish()
    }
}

impl<G: RateGyro> EstimatorCore<G> {
    /// One-shot device bring-up. Call once before the first `step`.
    pub fn initialize(&mut self) -> Result<()> {
        self.gyro
            .initialize()
            .map_err(|e| eyre::Report::new(map_hw_error(&*e)))
            .wrap_err("initializing gyroscope")?;
        tracing::info!(axis = ?self.axis, "gyroscope initialized");
        Ok(())
    }

    /// Reset per-run state. Call before a new estimation run.
    pub fn begin(&mut self) {
        self.integrator.reset();
        self.last_tick = None;
    }

    /// One iteration: sample, time, integrate.
    pub fn step(&mut self) -> Result<HeadingEstimate> {
        let rate = self.sampler.sample(&mut self.gyro, self.axis)?;

        let now = self.clock.now_us();
        // First iteration has no previous tick; use the nominal period,
        // same as the wraparound fallback.
        let dt = match self.last_tick {
            Some(prev) => dt_secs(prev, now, self.period),
            None => self.period.as_secs_f64(),
        };
        self.last_tick = Some(now);

        let (heading, corrected) = self.integrator.integrate(rate, dt);
        tracing::trace!(rate, dt, heading, corrected, "step");
        Ok(HeadingEstimate {
            rate_rad_s: rate,
            dt: Duration::from_secs_f64(dt),
            heading_rad: heading,
            corrected_rad: corrected,
        })
    }

    /// Integrate an externally sampled rate over an explicit interval.
    ///
    /// Bypasses the gyro and clock; the non-finite guard still applies
    /// since the integrator has no self-healing path.
    pub fn step_from_rate(&mut self, rate_rad_s: f64, dt: Duration) -> Result<HeadingEstimate> {
        if !rate_rad_s.is_finite() {
            return Err(eyre::Report::new(EstimatorError::NonFiniteRate));
        }
        let dt_s = dt.as_secs_f64();
        let (heading, corrected) = self.integrator.integrate(rate_rad_s, dt_s);
        Ok(HeadingEstimate {
            rate_rad_s,
            dt,
            heading_rad: heading,
            corrected_rad: corrected,
        })
    }

    /// Raw accumulator value.
    pub fn heading(&self) -> f64 {
        self.integrator.heading()
    }

    /// Heading wrapped into `[-π, π)`.
    pub fn corrected_heading(&self) -> f64 {
        self.integrator.corrected()
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Nominal loop period (also the dt fallback on clock wrap).
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Update the loop cadence.
    pub fn set_cadence(&mut self, cadence: CadenceCfg) {
        self.period = cadence.period;
    }
}
