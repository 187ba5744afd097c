use heading_config::load_toml;
use rstest::rstest;

#[test]
fn rejects_zero_bus_frequency() {
    let toml = r#"
[bus]
frequency_hz = 0
address = 0x68

[cadence]
period_ms = 10
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject frequency_hz=0");
    assert!(
        format!("{err}")
            .to_lowercase()
            .contains("frequency_hz must be > 0")
    );
}

#[test]
fn rejects_address_wider_than_seven_bits() {
    let toml = r#"
[bus]
frequency_hz = 200000
address = 0x90
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject 8-bit address");
    assert!(format!("{err}").contains("7-bit"));
}

#[test]
fn rejects_zero_period() {
    let toml = r#"
[cadence]
period_ms = 0
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should reject period_ms=0");
    assert!(format!("{err}").contains("period_ms must be > 0"));
}

#[rstest]
#[case(-0.5)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn rejects_bad_error_margin(#[case] margin: f64) {
    let mut cfg = load_toml("").expect("parse TOML");
    cfg.sampler.error_margin_rad_s = margin;
    cfg.validate()
        .expect_err("should reject non-finite or negative margin");
}

#[test]
fn accepts_full_observed_config() {
    let toml = r#"
[bus]
frequency_hz = 200000
address = 0x68

[gyro]
full_scale = "dps2000"
axis = "z"

[sampler]
error_margin_rad_s = 0.5
max_attempts = 8

[cadence]
period_ms = 10

[integrator]
wrap = "unbounded"

[logging]
level = "info"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("observed config should validate");
    assert_eq!(cfg.sampler.max_attempts, 8);
}

#[test]
fn parses_alternate_range_and_wrap() {
    let toml = r#"
[gyro]
full_scale = "dps500"
axis = "x"

[cadence]
period_ms = 1

[integrator]
wrap = "in_place"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().unwrap();
    assert_eq!(cfg.gyro.full_scale, heading_config::FullScale::Dps500);
    assert_eq!(cfg.gyro.axis, heading_config::AxisCfg::X);
    assert_eq!(cfg.integrator.wrap, heading_config::WrapCfg::InPlace);
    assert_eq!(cfg.cadence.period_ms, 1);
}
