//! MPU-6050 rate-gyroscope driver over `RegisterBus`.
//!
//! The full-scale range selects both the config-register bit pattern and
//! the LSB/(°/s) scale through one enum, so the two cannot be configured
//! inconsistently (a mismatch would silently produce wrong-magnitude rates
//! with no way to detect it downstream).

use std::f64::consts::PI;

use heading_traits::{Axis, BusTransport, RateGyro};

use crate::bus::RegisterBus;

pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const GYRO_XOUT_MSB: u8 = 0x43;
pub const GYRO_YOUT_MSB: u8 = 0x45;
pub const GYRO_ZOUT_MSB: u8 = 0x47;

/// Accelerometer full-scale bits; the accelerometer is unused but still
/// gets a defined configuration at bring-up.
const ACCEL_FS_BITS: u8 = 0b0001_1000;
/// Power management: clear the sleep bit, internal oscillator.
const PWR_WAKE: u8 = 0b0000_0000;

/// Gyroscope full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScaleRange {
    /// ±2000 °/s.
    Dps2000,
    /// ±500 °/s.
    Dps500,
}

impl FullScaleRange {
    /// Bit pattern written to `GYRO_CONFIG` (FS_SEL field).
    pub fn config_bits(self) -> u8 {
        match self {
            Self::Dps2000 => 0b0001_1000,
            Self::Dps500 => 0b0000_1000,
        }
    }

    /// Device scale in LSB per °/s for this range.
    pub fn lsb_per_dps(self) -> f64 {
        match self {
            Self::Dps2000 => 16.38,
            Self::Dps500 => 65.536,
        }
    }
}

/// Convert a raw signed sample to radians per second for the given range.
#[inline]
pub fn rate_from_raw(raw: i16, range: FullScaleRange) -> f64 {
    (f64::from(raw) / range.lsb_per_dps()) * (PI / 180.0)
}

fn msb_register(axis: Axis) -> u8 {
    match axis {
        Axis::X => GYRO_XOUT_MSB,
        Axis::Y => GYRO_YOUT_MSB,
        Axis::Z => GYRO_ZOUT_MSB,
    }
}

pub struct Mpu6050<B: BusTransport> {
    bus: RegisterBus<B>,
    range: FullScaleRange,
}

impl<B: BusTransport> Mpu6050<B> {
    pub fn new(transport: B, address: u8, range: FullScaleRange) -> Self {
        Self {
            bus: RegisterBus::new(transport, address),
            range,
        }
    }

    pub fn address(&self) -> u8 {
        self.bus.address()
    }

    pub fn range(&self) -> FullScaleRange {
        self.range
    }

    /// Borrow the underlying transport (inspection, tests).
    pub fn transport(&self) -> &B {
        self.bus.transport()
    }

    /// Set the bus clock before the first transaction.
    pub fn configure_bus(
        &mut self,
        frequency_hz: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.bus.configure(frequency_hz)
    }
}

impl<B: BusTransport> RateGyro for Mpu6050<B> {
    fn initialize(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.bus
            .write_register(GYRO_CONFIG, self.range.config_bits())?;
        self.bus.write_register(ACCEL_CONFIG, ACCEL_FS_BITS)?;
        self.bus.write_register(PWR_MGMT_1, PWR_WAKE)?;
        tracing::debug!(
            address = format_args!("{:#04x}", self.bus.address()),
            range = ?self.range,
            "gyroscope configured and awake"
        );
        Ok(())
    }

    fn read_rate(&mut self, axis: Axis) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        let mut buf = [0u8; 2];
        self.bus.read_register(msb_register(axis), &mut buf)?;
        let raw = i16::from_be_bytes(buf);
        let rate = rate_from_raw(raw, self.range);
        tracing::trace!(raw, rate, ?axis, "gyro sample");
        Ok(rate)
    }
}
