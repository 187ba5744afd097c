//! Per-iteration output of the estimator loop.

use std::time::Duration;

/// One accepted sample, integrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingEstimate {
    /// Accepted angular rate in rad/s.
    pub rate_rad_s: f64,
    /// Elapsed interval the rate was integrated over.
    pub dt: Duration,
    /// Accumulator value (unbounded under `WrapPolicy::Unbounded`).
    pub heading_rad: f64,
    /// Heading wrapped into `[-π, π)`.
    pub corrected_rad: f64,
}
