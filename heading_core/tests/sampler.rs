use heading_core::mocks::ScriptedGyro;
use heading_core::{ConsistencySampler, EstimatorError, SamplerCfg};
use heading_traits::Axis;

fn sampler(margin: f64, max_attempts: u32) -> ConsistencySampler {
    ConsistencySampler::new(SamplerCfg {
        error_margin_rad_s: margin,
        max_attempts,
    })
}

#[test]
fn agreeing_pair_returns_first_reading() {
    // diff 0.3 <= margin 0.5: accepted, and the *first* value comes back
    let mut gyro = ScriptedGyro::new([1.0, 1.3]);
    let rate = sampler(0.5, 8).sample(&mut gyro, Axis::Z).unwrap();
    assert_eq!(rate, 1.0);
}

#[test]
fn disagreeing_pair_is_discarded_whole() {
    // pair (1.0, 2.0) rejected (diff 1.0); pair (1.0, 1.3) accepted
    let mut gyro = ScriptedGyro::new([1.0, 2.0, 1.0, 1.3]);
    let rate = sampler(0.5, 8).sample(&mut gyro, Axis::Z).unwrap();
    assert_eq!(rate, 1.0);
}

#[test]
fn attempt_budget_exhaustion_is_typed() {
    // every pair differs by 1.0
    let mut gyro = ScriptedGyro::new([0.0, 1.0, 2.0, 3.0]);
    let err = sampler(0.5, 2).sample(&mut gyro, Axis::Z).unwrap_err();
    match err.downcast_ref::<EstimatorError>() {
        Some(EstimatorError::Inconsistent { attempts }) => assert_eq!(*attempts, 2),
        other => panic!("expected Inconsistent, got {other:?}"),
    }
}

#[test]
fn unbounded_mode_retries_until_agreement() {
    let mut noisy: Vec<f64> = Vec::new();
    for i in 0..20 {
        noisy.push(f64::from(i));
        noisy.push(f64::from(i) + 10.0);
    }
    noisy.extend([5.0, 5.1]);
    let mut gyro = ScriptedGyro::new(noisy);
    let rate = sampler(0.5, 0).sample(&mut gyro, Axis::Z).unwrap();
    assert_eq!(rate, 5.0);
}

#[test]
fn zero_margin_requires_exact_agreement() {
    let mut gyro = ScriptedGyro::new([1.0, 1.0]);
    let rate = sampler(0.0, 8).sample(&mut gyro, Axis::Z).unwrap();
    assert_eq!(rate, 1.0);

    let mut gyro = ScriptedGyro::new([1.0, 1.0000001, 2.0, 2.0]);
    let rate = sampler(0.0, 8).sample(&mut gyro, Axis::Z).unwrap();
    assert_eq!(rate, 2.0);
}

#[test]
fn non_finite_reading_is_rejected_before_integration() {
    let mut gyro = ScriptedGyro::new([f64::NAN]);
    let err = sampler(0.5, 8).sample(&mut gyro, Axis::Z).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EstimatorError>(),
        Some(EstimatorError::NonFiniteRate)
    ));
}
