use std::time::Duration;

use heading_core::mocks::{ManualClock, ScriptedGyro};
use heading_core::{BuildError, CadenceCfg, Estimator, SamplerCfg, WrapPolicy};
use heading_traits::Axis;
use rstest::rstest;

#[test]
fn builder_requires_a_gyro() {
    let err = Estimator::builder().try_build().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::MissingGyro)
    ));
}

#[test]
fn builder_with_defaults_builds() {
    let est = Estimator::builder()
        .with_gyro(ScriptedGyro::constant(0.0))
        .build()
        .unwrap();
    assert_eq!(est.period(), Duration::from_millis(10));
    assert_eq!(est.heading(), 0.0);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(-0.1)]
fn builder_rejects_bad_error_margin(#[case] margin: f64) {
    let err = Estimator::builder()
        .with_gyro(ScriptedGyro::constant(0.0))
        .with_sampler(SamplerCfg {
            error_margin_rad_s: margin,
            max_attempts: 8,
        })
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::InvalidConfig(_))
    ));
}

#[test]
fn builder_rejects_zero_period() {
    let err = Estimator::builder()
        .with_gyro(ScriptedGyro::constant(0.0))
        .with_cadence(CadenceCfg {
            period: Duration::ZERO,
        })
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BuildError>(),
        Some(BuildError::InvalidConfig(_))
    ));
}

#[test]
fn built_estimator_steps_with_injected_clock() {
    let clock = ManualClock::new();
    let mut est = Estimator::builder()
        .with_gyro(ScriptedGyro::constant(1.0))
        .with_axis(Axis::X)
        .with_wrap_policy(WrapPolicy::InPlace)
        .with_clock(Box::new(clock.clone()))
        .build()
        .unwrap();
    est.initialize().unwrap();
    est.begin();

    est.step().unwrap();
    clock.advance_us(10_000);
    est.step().unwrap();
    assert!((est.heading() - 0.02).abs() < 1e-9);
}
