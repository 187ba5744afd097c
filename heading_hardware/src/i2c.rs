//! Vendor I²C transport backed by rppal (Raspberry Pi, Linux).
//!
//! The kernel owns the actual bus clock; the configured frequency is kept
//! for diagnostics only. A 1-byte write with `send_stop = false` is held
//! back and folded into the next read as a combined `write_read`
//! transaction, which is how the kernel issues a repeated-start register
//! read.

use rppal::i2c::I2c;
use tracing::debug;

use crate::error::HwError;
use heading_traits::BusTransport;

pub struct I2cBus {
    i2c: I2c,
    pending: Option<Vec<u8>>,
}

impl I2cBus {
    pub fn new() -> crate::error::Result<Self> {
        let i2c = I2c::new().map_err(|e| HwError::I2c(e.to_string()))?;
        Ok(Self { i2c, pending: None })
    }

    fn select(&mut self, address: u8) -> crate::error::Result<()> {
        self.i2c
            .set_slave_address(u16::from(address))
            .map_err(|e| HwError::I2c(e.to_string()))
    }
}

impl BusTransport for I2cBus {
    fn configure(
        &mut self,
        frequency_hz: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        debug!(frequency_hz, "i2c bus clock is kernel-managed");
        Ok(())
    }

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.select(address)?;
        if !send_stop {
            self.pending = Some(bytes.to_vec());
            return Ok(());
        }
        self.i2c
            .write(bytes)
            .map_err(|e| Box::new(HwError::I2c(e.to_string())) as _)
            .map(|_| ())
    }

    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
        _send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.select(address)?;
        match self.pending.take() {
            Some(register) => self
                .i2c
                .write_read(&register, buf)
                .map_err(|e| Box::new(HwError::I2c(e.to_string())) as _),
            None => self
                .i2c
                .read(buf)
                .map_err(|e| Box::new(HwError::I2c(e.to_string())) as _)
                .map(|_| ()),
        }
    }
}
