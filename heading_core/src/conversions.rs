//! `From` implementations bridging `heading_config` types to
//! `heading_core` types.
//!
//! These keep the CLI free of manual field-by-field mapping.

use std::time::Duration;

use heading_traits::Axis;

use crate::config::{BusCfg, CadenceCfg, SamplerCfg, WrapPolicy};
use crate::device::FullScaleRange;

// ── SamplerCfg ───────────────────────────────────────────────────────────────

impl From<&heading_config::SamplerCfg> for SamplerCfg {
    fn from(c: &heading_config::SamplerCfg) -> Self {
        Self {
            error_margin_rad_s: c.error_margin_rad_s,
            max_attempts: c.max_attempts,
        }
    }
}

// ── CadenceCfg ───────────────────────────────────────────────────────────────

impl From<&heading_config::CadenceCfg> for CadenceCfg {
    fn from(c: &heading_config::CadenceCfg) -> Self {
        Self {
            period: Duration::from_millis(c.period_ms),
        }
    }
}

// ── BusCfg ───────────────────────────────────────────────────────────────────

impl From<&heading_config::BusCfg> for BusCfg {
    fn from(c: &heading_config::BusCfg) -> Self {
        Self {
            frequency_hz: c.frequency_hz,
            address: c.address,
        }
    }
}

// ── WrapPolicy ───────────────────────────────────────────────────────────────

impl From<heading_config::WrapCfg> for WrapPolicy {
    fn from(c: heading_config::WrapCfg) -> Self {
        match c {
            heading_config::WrapCfg::Unbounded => Self::Unbounded,
            heading_config::WrapCfg::InPlace => Self::InPlace,
        }
    }
}

// ── Axis ─────────────────────────────────────────────────────────────────────

/// `Axis` lives in `heading_traits`, so a `From` impl here would be an
/// orphan; a plain function does the job.
pub fn axis_from_cfg(c: heading_config::AxisCfg) -> Axis {
    match c {
        heading_config::AxisCfg::X => Axis::X,
        heading_config::AxisCfg::Y => Axis::Y,
        heading_config::AxisCfg::Z => Axis::Z,
    }
}

// ── FullScaleRange ───────────────────────────────────────────────────────────

impl From<heading_config::FullScale> for FullScaleRange {
    fn from(c: heading_config::FullScale) -> Self {
        match c {
            heading_config::FullScale::Dps2000 => Self::Dps2000,
            heading_config::FullScale::Dps500 => Self::Dps500,
        }
    }
}
