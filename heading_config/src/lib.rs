#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schemas for the heading estimator.
//!
//! `Config` and sub-structs are deserialized from TOML and validated.
//! Runtime conversion into the core's config structs lives in
//! `heading_core::conversions`.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BusCfg {
    /// Serial bus clock in Hz.
    pub frequency_hz: u32,
    /// 7-bit device address.
    pub address: u8,
}

impl Default for BusCfg {
    fn default() -> Self {
        Self {
            frequency_hz: 200_000,
            address: 0x68,
        }
    }
}

/// Configured gyroscope full-scale range. Selecting the range here selects
/// both the config-register bit pattern and the LSB/(°/s) scale in the core.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FullScale {
    /// ±2000 °/s, 16.38 LSB per °/s.
    #[default]
    Dps2000,
    /// ±500 °/s, 65.536 LSB per °/s.
    Dps500,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisCfg {
    X,
    Y,
    #[default]
    Z,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct GyroCfg {
    pub full_scale: FullScale,
    pub axis: AxisCfg,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplerCfg {
    /// Two consecutive reads must agree within this margin (rad/s).
    pub error_margin_rad_s: f64,
    /// Max sample-pair attempts per step; 0 retries without bound.
    pub max_attempts: u32,
}

impl Default for SamplerCfg {
    fn default() -> Self {
        Self {
            error_margin_rad_s: 0.5,
            max_attempts: 8,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CadenceCfg {
    /// Nominal delay between loop iterations (ms). Typical values are 1
    /// or 10.
    pub period_ms: u64,
}

impl Default for CadenceCfg {
    fn default() -> Self {
        Self { period_ms: 10 }
    }
}

/// Whether the heading accumulator stays unbounded (wrapped only on output)
/// or is wrapped in place every iteration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WrapCfg {
    #[default]
    Unbounded,
    InPlace,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct IntegratorCfg {
    pub wrap: WrapCfg,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub bus: BusCfg,
    pub gyro: GyroCfg,
    pub sampler: SamplerCfg,
    pub cadence: CadenceCfg,
    pub integrator: IntegratorCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.bus.frequency_hz == 0 {
            eyre::bail!("bus.frequency_hz must be > 0");
        }
        if self.bus.address > 0x7F {
            eyre::bail!(
                "bus.address must be a 7-bit address (<= 0x7F), got {:#04x}",
                self.bus.address
            );
        }
        if !self.sampler.error_margin_rad_s.is_finite() || self.sampler.error_margin_rad_s < 0.0 {
            eyre::bail!("sampler.error_margin_rad_s must be finite and >= 0");
        }
        if self.cadence.period_ms == 0 {
            eyre::bail!("cadence.period_ms must be > 0");
        }
        Ok(())
    }
}
