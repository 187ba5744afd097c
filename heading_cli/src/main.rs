mod cli;
mod error_fmt;
mod run;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use cli::{Cli, Commands, FILE_GUARD, JSON_MODE};
use error_fmt::{exit_code_for_error, format_error_json, humanize};
use run::{RunOpts, run_estimate, self_check};

fn main() {
    let args = Cli::parse();
    let _ = JSON_MODE.set(args.json);

    if let Err(err) = real_main(args) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("Error: {}", humanize(&err));
        }
        std::process::exit(exit_code_for_error(&err));
    }
}

fn real_main(args: Cli) -> eyre::Result<()> {
    color_eyre::install()?;

    let cfg = load_config(args.config.as_deref())?;
    init_logging(&args.log_level, args.json, &cfg.logging);

    match args.cmd {
        Commands::Run {
            iterations,
            period_ms,
            axis,
            margin,
            stats,
        } => {
            let shutdown = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&shutdown);
            ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))
                .wrap_err("installing Ctrl-C handler")?;

            let opts = RunOpts {
                iterations,
                period_ms,
                axis: axis.map(Into::into),
                margin,
                stats,
                json: args.json,
            };
            let heading = run_estimate(&cfg, opts, shutdown)?;
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "event": "complete", "corrected_rad": heading })
                );
            } else {
                println!(
                    "heading: {heading:+.4} rad ({:+.2} deg)",
                    heading.to_degrees()
                );
            }
        }
        Commands::SelfCheck => {
            let rate = self_check(&cfg)?;
            tracing::info!(rate_rad_s = rate, "self-check sample");
            println!("self-check ok");
        }
        Commands::Health => {
            if args.json {
                println!(
                    "{}",
                    serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })
                );
            } else {
                println!("ok");
            }
        }
    }
    Ok(())
}

/// Load and validate the TOML config, or fall back to built-in defaults
/// when no path was given.
fn load_config(path: Option<&Path>) -> eyre::Result<heading_config::Config> {
    let Some(path) = path else {
        return Ok(heading_config::Config::default());
    };
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("reading config {}", path.display()))?;
    let cfg = heading_config::load_toml(&text).wrap_err("parsing config TOML")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Console logging to stderr (pretty or JSON) plus an optional JSON file
/// appender from the config.
fn init_logging(level: &str, json: bool, logging: &heading_config::Logging) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = logging.file.as_deref().map(|path| {
        let p = Path::new(path);
        let dir = p.parent().filter(|d| !d.as_os_str().is_empty());
        let name = p.file_name().map(Path::new).unwrap_or(Path::new("heading.log"));
        let appender = match logging.rotation.as_deref() {
            Some("daily") => tracing_appender::rolling::daily(dir.unwrap_or(Path::new(".")), name),
            Some("hourly") => tracing_appender::rolling::hourly(dir.unwrap_or(Path::new(".")), name),
            _ => tracing_appender::rolling::never(dir.unwrap_or(Path::new(".")), name),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        fmt::layer().json().with_ansi(false).with_writer(writer)
    });

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}
