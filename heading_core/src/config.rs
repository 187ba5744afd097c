//! Runtime configuration structs for the estimator core.
//!
//! These are separate from the TOML-deserialized config in `heading_config`;
//! `conversions` maps between the two.

use std::time::Duration;

/// Consistency-gate configuration.
#[derive(Debug, Clone)]
pub struct SamplerCfg {
    /// Two consecutive reads must agree within this margin (rad/s).
    pub error_margin_rad_s: f64,
    /// Max sample-pair attempts per step. 0 retries without bound and can
    /// block an iteration indefinitely.
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

/// Loop cadence: the nominal delay between iterations, also the fallback
/// elapsed interval when the tick counter wraps.
#[derive(Debug, Clone)]
pub struct CadenceCfg {
    pub period: Duration,
}

impl Default for CadenceCfg {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(10),
        }
    }
}

/// Heading accumulator strategy.
///
/// `Unbounded` keeps the raw accumulator growing and wraps only the
/// reported value; `InPlace` stores the wrapped value back each iteration.
/// The two diverge numerically once the accumulator grows large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    #[default]
    Unbounded,
    InPlace,
}

/// Bus parameters fixed at startup.
#[derive(Debug, Clone)]
pub struct BusCfg {
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
