pub mod clock;

pub use clock::{Clock, MonotonicClock};

/// Sensor axis selector. The estimator integrates one axis at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Raw two-wire addressed bus transactions.
///
/// `send_stop = false` keeps the bus claimed so the next transaction starts
/// with a repeated start, which is how register reads address a target
/// register before reading it back.
pub trait BusTransport {
    fn configure(
        &mut self,
        frequency_hz: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
        send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Capability interface for a rate gyroscope, independent of how the device
/// is accessed (raw register framing or a vendor bus handle).
pub trait RateGyro {
    /// One-shot device bring-up: full-scale ranges and power management.
    fn initialize(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Read the angular rate on `axis` in radians per second.
    fn read_rate(&mut self, axis: Axis) -> Result<f64, Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: RateGyro + ?Sized> RateGyro for Box<T> {
    fn initialize(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).initialize()
    }

    fn read_rate(&mut self, axis: Axis) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
        (**self).read_rate(axis)
    }
}
