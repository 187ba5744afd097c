//! Estimation run: config mapping, device assembly, and loop execution.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use heading_config::Config;
use heading_core::error::Result as CoreResult;
use heading_core::runner::{RunBudget, run};
use heading_core::{CadenceCfg, FullScaleRange, Mpu6050, build_estimator, conversions};
use heading_traits::{Axis, RateGyro};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOpts {
    pub iterations: Option<u64>,
    pub period_ms: Option<u64>,
    pub axis: Option<Axis>,
    pub margin: Option<f64>,
    pub stats: bool,
    pub json: bool,
}

/// Assemble the gyroscope from config: real I2C with the `hardware`
/// feature, the in-memory bus otherwise.
pub fn make_gyro(cfg: &Config) -> eyre::Result<Box<dyn RateGyro>> {
    let range: FullScaleRange = cfg.gyro.full_scale.into();

    #[cfg(feature = "hardware")]
    let transport = heading_hardware::i2c::I2cBus::new()
        .map_err(|e| eyre::Report::new(e).wrap_err("opening I2C bus"))?;

    #[cfg(not(feature = "hardware"))]
    let transport = {
        let mut bus = heading_hardware::SimulatedBus::new(cfg.bus.address);
        // Test/demo hook: pin the simulated turn rate in °/s.
        if let Ok(dps) = std::env::var("HEADING_SIM_RATE_DPS") {
            let dps: f64 = dps
                .parse()
                .map_err(|e| eyre::eyre!("HEADING_SIM_RATE_DPS: {e}"))?;
            let raw = (dps * range.lsb_per_dps())
                .round()
                .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16;
            for msb in [
                heading_core::device::GYRO_XOUT_MSB,
                heading_core::device::GYRO_YOUT_MSB,
                heading_core::device::GYRO_ZOUT_MSB,
            ] {
                bus.push_samples(msb, [raw]);
            }
        }
        bus
    };

    let mut gyro = Mpu6050::new(transport, cfg.bus.address, range);
    gyro.configure_bus(cfg.bus.frequency_hz)
        .map_err(|e| eyre::eyre!("configuring bus clock: {e}"))?;
    Ok(Box::new(gyro))
}

/// Execute the estimation loop until the iteration budget runs out or a
/// shutdown is signalled, returning the final corrected heading.
pub fn run_estimate(
    cfg: &Config,
    opts: RunOpts,
    shutdown: Arc<AtomicBool>,
) -> CoreResult<f64> {
    let axis = opts
        .axis
        .unwrap_or_else(|| conversions::axis_from_cfg(cfg.gyro.axis));
    let gyro = make_gyro(cfg)?;

    let mut cadence: CadenceCfg = (&cfg.cadence).into();
    if let Some(ms) = opts.period_ms {
        cadence.period = std::time::Duration::from_millis(ms);
    }
    let mut sampler: heading_core::SamplerCfg = (&cfg.sampler).into();
    if let Some(margin) = opts.margin {
        sampler.error_margin_rad_s = margin;
    }

    tracing::info!(
        address = format_args!("{:#04x}", cfg.bus.address),
        frequency_hz = cfg.bus.frequency_hz,
        "gyroscope device"
    );

    let mut est = build_estimator(
        gyro,
        axis,
        sampler,
        cadence,
        cfg.integrator.wrap.into(),
        None,
    )?;
    est.initialize()?;
    est.begin();

    let budget = match opts.iterations {
        Some(n) => RunBudget::Iterations(n),
        None => RunBudget::Unbounded,
    };
    tracing::info!(?axis, ?budget, "estimation run start");

    let period_us = est.period().as_micros() as u64;
    let started = Instant::now();
    let mut last_tick = started;
    let mut last_print = started;
    let mut intervals: Vec<u64> = Vec::new();
    let mut missed_deadlines = 0usize;

    let final_heading = run(&mut est, budget, |e| {
        if opts.stats {
            // Wall-clock interval of the whole iteration, sleep included
            let interval = last_tick.elapsed().as_micros() as u64;
            last_tick = Instant::now();
            if interval > period_us {
                missed_deadlines = missed_deadlines.saturating_add(1);
            }
            intervals.push(interval);
        }
        if opts.json {
            println!(
                "{}",
                serde_json::json!({
                    "t_ms": started.elapsed().as_millis() as u64,
                    "rate_rad_s": e.rate_rad_s,
                    "dt_s": e.dt.as_secs_f64(),
                    "heading_rad": e.heading_rad,
                    "corrected_rad": e.corrected_rad,
                })
            );
        } else if last_print.elapsed().as_millis() >= 200 {
            // Throttled progress line; the final heading is printed by the
            // caller
            println!(
                "heading = {:+.3} rad, rate = {:+.3} rad/s",
                e.corrected_rad, e.rate_rad_s
            );
            last_print = Instant::now();
        }
        !shutdown.load(Ordering::Relaxed)
    })?;

    if opts.stats && !intervals.is_empty() {
        print_stats(&intervals, missed_deadlines, period_us);
    }
    Ok(final_heading)
}

/// Read a single gated sample to prove the device (or sim) responds.
pub fn self_check(cfg: &Config) -> eyre::Result<f64> {
    let mut gyro = make_gyro(cfg)?;
    gyro.initialize()
        .map_err(|e| eyre::eyre!("initializing gyroscope: {e}"))?;
    let sampler = heading_core::ConsistencySampler::new((&cfg.sampler).into());
    let axis = conversions::axis_from_cfg(cfg.gyro.axis);
    sampler.sample(&mut gyro, axis)
}

/// Print loop interval stats to stderr.
fn print_stats(intervals: &[u64], missed_deadlines: usize, period_us: u64) {
    let min = intervals.iter().min().copied().unwrap_or(0);
    let max = intervals.iter().max().copied().unwrap_or(0);
    let avg = intervals.iter().sum::<u64>() as f64 / intervals.len() as f64;
    eprintln!("\n--- Heading Stats ---");
    eprintln!("Iterations: {}", intervals.len());
    eprintln!("Period (us): {period_us}");
    eprintln!("Interval min/avg/max (us): {min} / {avg:.1} / {max}");
    eprintln!("Missed deadlines (> period): {missed_deadlines}");
    eprintln!("---------------------\n");
}
