//! Register-level framing over a raw bus transport.
//!
//! A register write is a single `[register, value]` frame ending with a stop
//! condition. A register read is two-phase: write `[register]` without a
//! stop, then read N bytes with a stop, so the device sees a repeated start
//! and streams registers from the addressed one onward.

use heading_traits::BusTransport;

type TransportResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Owns the transport plus the device's 7-bit address, fixed for the
/// lifetime of the bus.
pub struct RegisterBus<B: BusTransport> {
    transport: B,
    address: u8,
}

impl<B: BusTransport> RegisterBus<B> {
    pub fn new(transport: B, address: u8) -> Self {
        Self { transport, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Borrow the underlying transport (inspection, tests).
    pub fn transport(&self) -> &B {
        &self.transport
    }

    /// Set the bus clock. Must precede any transaction; skipping it leaves
    /// the transport at its prior default.
    pub fn configure(&mut self, frequency_hz: u32) -> TransportResult<()> {
        self.transport.configure(frequency_hz)
    }

    pub fn write_register(&mut self, register: u8, value: u8) -> TransportResult<()> {
        tracing::trace!(register, value, "register write");
        self.transport.write(self.address, &[register, value], true)
    }

    pub fn read_register(&mut self, register: u8, buf: &mut [u8]) -> TransportResult<()> {
        self.transport.write(self.address, &[register], false)?;
        self.transport.read(self.address, buf, true)
    }
}
