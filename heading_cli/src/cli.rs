//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use heading_traits::Axis;
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "heading", version, about = "Gyroscopic heading estimator CLI")]
pub struct Cli {
    /// Path to config TOML (typed); built-in defaults when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log as JSON lines instead of pretty; estimates go to stdout as JSONL
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Sense axis selection on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(a: AxisArg) -> Self {
        match a {
            AxisArg::X => Axis::X,
            AxisArg::Y => Axis::Y,
            AxisArg::Z => Axis::Z,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the estimation loop and report headings
    Run {
        /// Stop after this many iterations; runs until interrupted if unset
        #[arg(long, value_name = "N")]
        iterations: Option<u64>,
        /// Override loop period in ms (takes precedence over config)
        #[arg(long, value_name = "MS")]
        period_ms: Option<u64>,
        /// Override the sense axis from the config
        #[arg(long, value_enum, value_name = "AXIS")]
        axis: Option<AxisArg>,
        /// Override the consistency margin in rad/s (takes precedence over
        /// config)
        #[arg(long, value_name = "RAD_S")]
        margin: Option<f64>,
        /// Print control loop latency stats on completion
        #[arg(long, action = ArgAction::SetTrue)]
        stats: bool,
    },
    /// Quick health check (device responds / sim ok)
    SelfCheck,
    /// Health check for operational monitoring
    Health,
}
