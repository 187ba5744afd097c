//! Type-state builder for `Estimator` and generic `build_estimator`
//! constructor.
//!
//! The builder enforces at compile time that a gyroscope is provided before
//! `build()` is available. `try_build()` is always available for dynamic
//! checks.

use std::marker::PhantomData;
use std::sync::Arc;

use heading_traits::clock::{Clock, MonotonicClock};
use heading_traits::{Axis, RateGyro};

use crate::config::{CadenceCfg, SamplerCfg, WrapPolicy};
use crate::core::EstimatorCore;
use crate::error::{BuildError, Result};
use crate::estimate::HeadingEstimate;
use crate::integrator::AngleIntegrator;
use crate::sampler::ConsistencySampler;

// ── Public dynamic-dispatch wrapper ──────────────────────────────────────────

/// Public dynamic (boxed) estimator that preserves a stable API via
/// composition.
pub struct Estimator {
    pub(crate) inner: EstimatorCore<Box<dyn RateGyro>>,
}

impl std::fmt::Debug for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Estimator")
            .field("axis", &self.inner.axis)
            .field("heading_rad", &self.inner.heading())
            .finish()
    }
}

impl Estimator {
    /// Start building an Estimator.
    pub fn builder() -> EstimatorBuilder<Missing> {
        EstimatorBuilder::default()
    }

    /// One-shot device bring-up. Call once before the first `step`.
    pub fn initialize(&mut self) -> Result<()> {
        self.inner.initialize()
    }

    /// Reset per-run state. Call before a new estimation run.
    pub fn begin(&mut self) {
        self.inner.begin();
    }

    /// One iteration of the estimation loop.
    pub fn step(&mut self) -> Result<HeadingEstimate> {
        self.inner.step()
    }

    /// Integrate an externally sampled rate over an explicit interval.
    pub fn step_from_rate(
        &mut self,
        rate_rad_s: f64,
        dt: std::time::Duration,
    ) -> Result<HeadingEstimate> {
        self.inner.step_from_rate(rate_rad_s, dt)
    }

    /// Raw accumulator value.
    pub fn heading(&self) -> f64 {
        self.inner.heading()
    }

    /// Heading wrapped into `[-π, π)`.
    pub fn corrected_heading(&self) -> f64 {
        self.inner.corrected_heading()
    }

    /// Nominal loop period.
    pub fn period(&self) -> std::time::Duration {
        self.inner.period()
    }
}

// ── Type-state markers ───────────────────────────────────────────────────────

pub struct Missing;
pub struct Set;

/// Builder for `Estimator`. All fields are validated on `build()`.
pub struct EstimatorBuilder<G> {
    gyro: Option<Box<dyn RateGyro>>,
    axis: Option<Axis>,
    sampler: Option<SamplerCfg>,
    cadence: Option<CadenceCfg>,
    wrap: Option<WrapPolicy>,
    clock: Option<Box<dyn Clock + Send + Sync>>,
    _g: PhantomData<G>,
}

impl Default for EstimatorBuilder<Missing> {
    fn default() -> Self {
        Self {
            gyro: None,
            axis: None,
            sampler: None,
            cadence: None,
            wrap: None,
            clock: None,
            _g: PhantomData,
        }
    }
}

/// Validate configuration and construct an `EstimatorCore`.
///
/// Shared by `EstimatorBuilder::try_build()` and `build_estimator()`.
fn validate_and_build<G: RateGyro>(
    gyro: G,
    axis: Axis,
    sampler: SamplerCfg,
    cadence: CadenceCfg,
    wrap: WrapPolicy,
    clock: Option<Box<dyn Clock + Send + Sync>>,
) -> Result<EstimatorCore<G>> {
    if !sampler.error_margin_rad_s.is_finite() || sampler.error_margin_rad_s < 0.0 {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "error_margin_rad_s must be finite and >= 0",
        )));
    }
    if cadence.period.is_zero() {
        return Err(eyre::Report::new(BuildError::InvalidConfig(
            "loop period must be > 0",
        )));
    }

    let clock: Arc<dyn Clock + Send + Sync> = match clock {
        Some(b) => Arc::from(b),
        None => Arc::new(MonotonicClock::new()),
    };

    Ok(EstimatorCore {
        gyro,
        axis,
        sampler: ConsistencySampler::new(sampler),
        integrator: AngleIntegrator::new(wrap),
        clock,
        period: cadence.period,
        last_tick: None,
    })
}

impl<G> EstimatorBuilder<G> {
    /// Fallible build available in any type-state; returns a detailed error
    /// for missing pieces.
    pub fn try_build(self) -> Result<Estimator> {
        let gyro = self
            .gyro
            .ok_or_else(|| eyre::Report::new(BuildError::MissingGyro))?;

        let inner = validate_and_build(
            gyro,
            self.axis.unwrap_or(Axis::Z),
            self.sampler.unwrap_or_default(),
            self.cadence.unwrap_or_default(),
            self.wrap.unwrap_or_default(),
            self.clock,
        )?;

        Ok(Estimator { inner })
    }
}

/// Chainable setters that do not affect type-state.
impl<G> EstimatorBuilder<G> {
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }
    pub fn with_sampler(mut self, sampler: SamplerCfg) -> Self {
        self.sampler = Some(sampler);
        self
    }
    pub fn with_cadence(mut self, cadence: CadenceCfg) -> Self {
        self.cadence = Some(cadence);
        self
    }
    pub fn with_wrap_policy(mut self, wrap: WrapPolicy) -> Self {
        self.wrap = Some(wrap);
        self
    }
    /// Provide a custom clock implementation; defaults to `MonotonicClock`
    /// when not provided.
    pub fn with_clock(mut self, clock: Box<dyn Clock + Send + Sync>) -> Self {
        self.clock = Some(clock);
        self
    }
}

// Setter that advances type-state
impl EstimatorBuilder<Missing> {
    pub fn with_gyro(self, gyro: impl RateGyro + 'static) -> EstimatorBuilder<Set> {
        EstimatorBuilder {
            gyro: Some(Box::new(gyro)),
            axis: self.axis,
            sampler: self.sampler,
            cadence: self.cadence,
            wrap: self.wrap,
            clock: self.clock,
            _g: PhantomData,
        }
    }
}

impl EstimatorBuilder<Set> {
    /// Validate and build the Estimator. Only available once a gyro is set.
    pub fn build(self) -> Result<Estimator> {
        self.try_build()
    }
}

/// Generic, statically-dispatched alias using the unified core.
pub type EstimatorG<G> = EstimatorCore<G>;

/// Build a generic, statically-dispatched `EstimatorG` from a concrete gyro.
pub fn build_estimator<G>(
    gyro: G,
    axis: Axis,
    sampler: SamplerCfg,
    cadence: CadenceCfg,
    wrap: WrapPolicy,
    clock: Option<Box<dyn Clock + Send + Sync>>,
) -> Result<EstimatorG<G>>
where
    G: RateGyro + 'static,
{
    validate_and_build(gyro, axis, sampler, cadence, wrap, clock)
}
