#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Core heading-estimation logic (hardware-agnostic).
//!
//! This crate provides the hardware-independent estimator. All hardware
//! interactions go through `heading_traits::BusTransport` and
//! `heading_traits::RateGyro`.
//!
//! ## Architecture
//!
//! - **Register framing**: repeated-start reads and register writes over a
//!   raw transport (`bus` module)
//! - **Device**: MPU-6050 driver mapping raw samples to rad/s (`device`)
//! - **Consistency gate**: double-sample agreement check (`sampler`)
//! - **Integration**: bounded-heading accumulation (`integrator`)
//! - **Loop**: per-iteration state machine (`EstimatorCore`) and cadence
//!   (`runner`)
//!
//! ## Units
//!
//! Angular rates are radians per second, headings radians, elapsed time
//! seconds (converted from the wrapping microsecond tick clock).

pub mod builder;
pub mod bus;
pub mod config;
pub mod conversions;
pub mod core;
pub mod device;
pub mod error;
pub mod estimate;
pub mod hw_error;
pub mod integrator;
pub mod mocks;
pub mod runner;
pub mod sampler;
pub mod util;

pub use builder::{Estimator, EstimatorBuilder, build_estimator};
pub use bus::RegisterBus;
pub use config::{BusCfg, CadenceCfg, SamplerCfg, WrapPolicy};
pub use crate::core::EstimatorCore;
pub use device::{FullScaleRange, Mpu6050, rate_from_raw};
pub use error::{BuildError, EstimatorError};
pub use estimate::HeadingEstimate;
pub use integrator::{AngleIntegrator, normalize};
pub use sampler::ConsistencySampler;
