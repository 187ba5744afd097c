pub mod error;
#[cfg(feature = "hardware")]
pub mod i2c;

use std::collections::{HashMap, VecDeque};

use error::HwError;
use heading_traits::BusTransport;

/// In-memory register-bus model of the gyroscope for tests and the
/// simulated CLI path.
///
/// Writes land in a register map; reads follow the real device's
/// repeated-start protocol: a 1-byte write without a stop condition selects
/// the target register, and the following read returns bytes starting
/// there. Sample-output registers can be scripted with a queue of signed
/// 16-bit readings served big-endian; when the queue runs dry the last
/// value repeats, like a sensor between sample updates.
pub struct SimulatedBus {
    address: u8,
    frequency_hz: Option<u32>,
    registers: HashMap<u8, u8>,
    samples: HashMap<u8, VecDeque<i16>>,
    held: HashMap<u8, i16>,
    selected: Option<u8>,
}

impl SimulatedBus {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            frequency_hz: None,
            registers: HashMap::new(),
            samples: HashMap::new(),
            held: HashMap::new(),
            selected: None,
        }
    }

    /// Queue raw signed samples to be served from the 2-byte output pair
    /// starting at `msb_register`.
    pub fn push_samples<I: IntoIterator<Item = i16>>(&mut self, msb_register: u8, raw: I) {
        self.samples.entry(msb_register).or_default().extend(raw);
    }

    /// Value last written to `register`, if any.
    pub fn written(&self, register: u8) -> Option<u8> {
        self.registers.get(&register).copied()
    }

    /// Bus clock configured via `configure`, if any.
    pub fn configured_frequency(&self) -> Option<u32> {
        self.frequency_hz
    }

    fn next_raw(&mut self, msb_register: u8) -> i16 {
        if let Some(queue) = self.samples.get_mut(&msb_register)
            && let Some(raw) = queue.pop_front()
        {
            self.held.insert(msb_register, raw);
            return raw;
        }
        self.held.get(&msb_register).copied().unwrap_or(0)
    }
}

impl BusTransport for SimulatedBus {
    fn configure(
        &mut self,
        frequency_hz: u32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.frequency_hz = Some(frequency_hz);
        Ok(())
    }

    fn write(
        &mut self,
        address: u8,
        bytes: &[u8],
        send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if address != self.address {
            return Err(Box::new(HwError::Nack(format!(
                "no device at {address:#04x}"
            ))));
        }
        match (bytes, send_stop) {
            // Register write: [register, value] with a stop condition.
            ([register, value], true) => {
                tracing::trace!(register, value, "sim register write");
                self.registers.insert(*register, *value);
                self.selected = None;
                Ok(())
            }
            // Address phase of a repeated-start read.
            ([register], false) => {
                self.selected = Some(*register);
                Ok(())
            }
            _ => Err(Box::new(HwError::Nack(format!(
                "unsupported frame: {} bytes, send_stop={send_stop}",
                bytes.len()
            )))),
        }
    }

    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
        _send_stop: bool,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if address != self.address {
            return Err(Box::new(HwError::Nack(format!(
                "no device at {address:#04x}"
            ))));
        }
        let Some(start) = self.selected.take() else {
            return Err(Box::new(HwError::Nack(
                "read without addressing a register".into(),
            )));
        };
        if buf.len() == 2 && (self.samples.contains_key(&start) || self.held.contains_key(&start)) {
            let raw = self.next_raw(start);
            buf.copy_from_slice(&raw.to_be_bytes());
            return Ok(());
        }
        for (i, out) in buf.iter_mut().enumerate() {
            let register = start.wrapping_add(i as u8);
            *out = self.registers.get(&register).copied().unwrap_or(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_write_then_read_back() {
        let mut bus = SimulatedBus::new(0x68);
        bus.write(0x68, &[0x1B, 0b0001_1000], true).unwrap();
        bus.write(0x68, &[0x1B], false).unwrap();
        let mut buf = [0u8; 1];
        bus.read(0x68, &mut buf, true).unwrap();
        assert_eq!(buf[0], 0b0001_1000);
    }

    #[test]
    fn wrong_address_nacks() {
        let mut bus = SimulatedBus::new(0x68);
        assert!(bus.write(0x69, &[0x6B, 0], true).is_err());
    }
}
