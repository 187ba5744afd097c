//! Heading accumulation and angle wrapping.

use std::f64::consts::{PI, TAU};

use crate::config::WrapPolicy;

/// Map an angle into the canonical `[-π, π)` range.
///
/// `rem_euclid` keeps the intermediate in `[0, 2π)` for any finite input,
/// so negative headings wrap correctly and the function is idempotent and
/// periodic in `2π`.
#[inline]
pub fn normalize(h: f64) -> f64 {
    (h + PI).rem_euclid(TAU) - PI
}

/// Accumulates angular displacement over elapsed time.
///
/// The heading starts at zero and never errors; callers must keep
/// non-finite rates out (see `ConsistencySampler`), since one poisoned
/// sample would corrupt the accumulator permanently.
#[derive(Debug, Clone)]
pub struct AngleIntegrator {
    heading: f64,
    policy: WrapPolicy,
}

impl AngleIntegrator {
    pub fn new(policy: WrapPolicy) -> Self {
        Self {
            heading: 0.0,
            policy,
        }
    }

    /// Reset the accumulator for a new run.
    pub fn reset(&mut self) {
        self.heading = 0.0;
    }

    /// Advance the heading by `rate * dt` and return
    /// `(heading, corrected)` where `corrected = normalize(heading)`.
    pub fn integrate(&mut self, rate_rad_s: f64, dt_secs: f64) -> (f64, f64) {
        self.heading += rate_rad_s * dt_secs;
        let corrected = normalize(self.heading);
        if self.policy == WrapPolicy::InPlace {
            self.heading = corrected;
        }
        (self.heading, corrected)
    }

    /// Raw accumulator value (unbounded under `WrapPolicy::Unbounded`).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Canonical wrapped heading in `[-π, π)`.
    pub fn corrected(&self) -> f64 {
        normalize(self.heading)
    }
}

impl Default for AngleIntegrator {
    fn default() -> Self {
        Self::new(WrapPolicy::Unbounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_signed_correctly_for_negatives() {
        assert!((normalize(-PI) - (-PI)).abs() < 1e-12);
        assert!((normalize(-3.0 * PI) - (-PI)).abs() < 1e-12);
        // π itself wraps to the -π representative of the boundary
        assert!((normalize(PI) - (-PI)).abs() < 1e-12);
    }

    #[test]
    fn in_place_policy_stores_wrapped_value() {
        let mut i = AngleIntegrator::new(WrapPolicy::InPlace);
        let (heading, corrected) = i.integrate(5.0, 1.0);
        assert_eq!(heading, corrected);
        assert!(heading < PI && heading >= -PI);
    }
}
