//! Sleep-and-repeat orchestration for the estimator loop.
//!
//! The runner owns the cadence: step, report, sleep, repeat. Sampling,
//! timing, and integration stay inside `EstimatorCore`; the runner only
//! decides when to stop. The consistency gate can still block a single
//! iteration for as long as its attempt budget allows — there is no way to
//! cancel an in-flight retry loop.

use heading_traits::RateGyro;

use crate::core::EstimatorCore;
use crate::error::Result as CoreResult;
use crate::estimate::HeadingEstimate;

/// How long the loop should run.
#[derive(Debug, Clone, Copy)]
pub enum RunBudget {
    /// Run until the callback declines to continue.
    Unbounded,
    /// Run at most this many iterations.
    Iterations(u64),
}

impl RunBudget {
    fn exhausted(self, done: u64) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Iterations(n) => done >= n,
        }
    }
}

/// Run the estimator until the budget is exhausted or the callback returns
/// false, returning the final corrected heading.
///
/// `on_estimate` sees every accepted iteration; returning false stops the
/// loop after that iteration without sleeping again.
pub fn run<G, F>(
    core: &mut EstimatorCore<G>,
    budget: RunBudget,
    mut on_estimate: F,
) -> CoreResult<f64>
where
    G: RateGyro,
    F: FnMut(&HeadingEstimate) -> bool,
{
    tracing::info!(?budget, period = ?core.period(), "estimation loop start");
    let mut iterations: u64 = 0;

    loop {
        let estimate = core.step()?;
        iterations += 1;

        if !on_estimate(&estimate) {
            tracing::info!(iterations, heading = estimate.corrected_rad, "loop stopped by caller");
            return Ok(estimate.corrected_rad);
        }
        if budget.exhausted(iterations) {
            tracing::info!(iterations, heading = estimate.corrected_rad, "loop budget exhausted");
            return Ok(estimate.corrected_rad);
        }

        let period = core.period();
        core.clock.sleep(period);
    }
}
