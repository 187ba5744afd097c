use std::f64::consts::PI;

use heading_core::device::{ACCEL_CONFIG, GYRO_CONFIG, GYRO_ZOUT_MSB, PWR_MGMT_1};
use heading_core::{FullScaleRange, Mpu6050, rate_from_raw};
use heading_hardware::SimulatedBus;
use heading_traits::{Axis, RateGyro};
use rstest::rstest;

fn device(range: FullScaleRange) -> Mpu6050<SimulatedBus> {
    Mpu6050::new(SimulatedBus::new(0x68), 0x68, range)
}

#[test]
fn initialize_writes_config_and_wakes_device() {
    let mut dev = device(FullScaleRange::Dps2000);
    dev.initialize().unwrap();

    let bus = dev.transport();
    assert_eq!(bus.written(GYRO_CONFIG), Some(0b0001_1000));
    assert_eq!(bus.written(ACCEL_CONFIG), Some(0b0001_1000));
    assert_eq!(bus.written(PWR_MGMT_1), Some(0));
}

#[test]
fn dps500_selects_narrow_range_bits() {
    let mut dev = device(FullScaleRange::Dps500);
    dev.initialize().unwrap();
    assert_eq!(dev.transport().written(GYRO_CONFIG), Some(0b0000_1000));
}

#[rstest]
// 1638 LSB at 16.38 LSB/(°/s) is exactly 100 °/s
#[case(FullScaleRange::Dps2000, 1638, 100.0)]
#[case(FullScaleRange::Dps2000, -1638, -100.0)]
// 16384 LSB at 65.536 LSB/(°/s) is exactly 250 °/s
#[case(FullScaleRange::Dps500, 16384, 250.0)]
#[case(FullScaleRange::Dps2000, 0, 0.0)]
fn raw_sample_scaling(#[case] range: FullScaleRange, #[case] raw: i16, #[case] dps: f64) {
    let expected = dps * PI / 180.0;
    assert!((rate_from_raw(raw, range) - expected).abs() < 1e-12);
}

#[test]
fn read_rate_decodes_big_endian_pair() {
    let mut bus = SimulatedBus::new(0x68);
    bus.push_samples(GYRO_ZOUT_MSB, [1638, -1638]);
    let mut dev = Mpu6050::new(bus, 0x68, FullScaleRange::Dps2000);

    let r1 = dev.read_rate(Axis::Z).unwrap();
    let r2 = dev.read_rate(Axis::Z).unwrap();
    assert!((r1 - 100.0 * PI / 180.0).abs() < 1e-12);
    assert!((r2 + 100.0 * PI / 180.0).abs() < 1e-12);
}

#[test]
fn exhausted_sample_queue_repeats_last_value() {
    let mut bus = SimulatedBus::new(0x68);
    bus.push_samples(GYRO_ZOUT_MSB, [327]);
    let mut dev = Mpu6050::new(bus, 0x68, FullScaleRange::Dps2000);

    let first = dev.read_rate(Axis::Z).unwrap();
    for _ in 0..5 {
        assert_eq!(dev.read_rate(Axis::Z).unwrap(), first);
    }
}

#[test]
fn wrong_address_surfaces_transport_error() {
    let mut dev = Mpu6050::new(SimulatedBus::new(0x68), 0x69, FullScaleRange::Dps2000);
    assert!(dev.initialize().is_err());
    assert!(dev.read_rate(Axis::Z).is_err());
}

#[test]
fn configure_bus_sets_clock_on_transport() {
    let mut dev = device(FullScaleRange::Dps2000);
    dev.configure_bus(200_000).unwrap();
    assert_eq!(dev.transport().configured_frequency(), Some(200_000));
}
