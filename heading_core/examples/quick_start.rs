//! Quick Start Example
//!
//! Sets up a simulated gyroscope and runs a short heading-estimation loop.
//! Run with `cargo run --example quick_start`.

use heading_core::device::GYRO_ZOUT_MSB;
use heading_core::runner::{RunBudget, run};
use heading_core::{
    CadenceCfg, FullScaleRange, Mpu6050, SamplerCfg, WrapPolicy, build_estimator,
};
use heading_hardware::SimulatedBus;
use heading_traits::Axis;

fn main() -> Result<(), eyre::Report> {
    // Simulated device turning at a constant 90 °/s (1474 LSB at the
    // ±2000 °/s scale); the bus holds the last sample once the queue drains.
    let mut bus = SimulatedBus::new(0x68);
    bus.push_samples(GYRO_ZOUT_MSB, [1474]);
    let gyro = Mpu6050::new(bus, 0x68, FullScaleRange::Dps2000);

    let mut est = build_estimator(
        gyro,
        Axis::Z,
        SamplerCfg::default(),
        CadenceCfg::default(),
        WrapPolicy::Unbounded,
        None,
    )?;
    est.initialize()?;
    est.begin();

    // A quarter turn takes about a second at 90 °/s with the 10 ms cadence
    let final_heading = run(&mut est, RunBudget::Iterations(100), |e| {
        println!(
            "rate = {:+.3} rad/s, heading = {:+.3} rad",
            e.rate_rad_s, e.corrected_rad
        );
        true
    })?;

    println!("final heading: {final_heading:+.4} rad");
    Ok(())
}
