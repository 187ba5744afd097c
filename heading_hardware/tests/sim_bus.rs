use heading_hardware::SimulatedBus;
use heading_traits::BusTransport;
use rstest::rstest;

const GYRO_ZOUT_MSB: u8 = 0x47;

#[rstest]
#[case(0x1B, 0b0001_1000)]
#[case(0x1C, 0b0000_1000)]
#[case(0x6B, 0)]
fn register_writes_land_in_the_map(#[case] register: u8, #[case] value: u8) {
    let mut bus = SimulatedBus::new(0x68);
    bus.write(0x68, &[register, value], true).unwrap();
    assert_eq!(bus.written(register), Some(value));
}

#[test]
fn scripted_samples_come_back_big_endian() {
    let mut bus = SimulatedBus::new(0x68);
    bus.push_samples(GYRO_ZOUT_MSB, [0x1234, -2]);

    let mut buf = [0u8; 2];
    bus.write(0x68, &[GYRO_ZOUT_MSB], false).unwrap();
    bus.read(0x68, &mut buf, true).unwrap();
    assert_eq!(buf, [0x12, 0x34]);

    bus.write(0x68, &[GYRO_ZOUT_MSB], false).unwrap();
    bus.read(0x68, &mut buf, true).unwrap();
    assert_eq!(i16::from_be_bytes(buf), -2);
}

#[test]
fn exhausted_queue_repeats_last_sample() {
    let mut bus = SimulatedBus::new(0x68);
    bus.push_samples(GYRO_ZOUT_MSB, [100]);

    let mut buf = [0u8; 2];
    for _ in 0..3 {
        bus.write(0x68, &[GYRO_ZOUT_MSB], false).unwrap();
        bus.read(0x68, &mut buf, true).unwrap();
        assert_eq!(i16::from_be_bytes(buf), 100);
    }
}

#[test]
fn read_requires_address_phase() {
    let mut bus = SimulatedBus::new(0x68);
    let mut buf = [0u8; 2];
    let err = bus.read(0x68, &mut buf, true).unwrap_err();
    assert!(err.to_string().contains("without addressing"));
}

#[test]
fn address_phase_must_not_send_stop() {
    let mut bus = SimulatedBus::new(0x68);
    // A 1-byte frame with a stop condition is not a valid register select.
    assert!(bus.write(0x68, &[GYRO_ZOUT_MSB], true).is_err());
}

#[test]
fn configure_records_bus_clock() {
    let mut bus = SimulatedBus::new(0x68);
    assert_eq!(bus.configured_frequency(), None);
    bus.configure(200_000).unwrap();
    assert_eq!(bus.configured_frequency(), Some(200_000));
}
