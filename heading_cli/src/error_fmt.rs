//! Human-readable error descriptions and structured JSON error formatting.

/// Map an eyre::Report to a human-readable explanation with likely causes
/// and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    use heading_core::error::{BuildError, EstimatorError};

    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingGyro => {
                "What happened: No gyroscope was provided to the estimator.\nLikely causes: Device failed to initialize or was not wired into the builder.\nHow to fix: Ensure the gyroscope is created successfully and passed via with_gyro(...).".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. See README for a sample."
            ),
        };
    }

    if let Some(ee) = err.downcast_ref::<EstimatorError>() {
        return match ee {
            EstimatorError::Timeout => {
                "What happened: Gyroscope read timed out.\nLikely causes: Device not wired correctly, no power/ground, or bus clock misconfigured.\nHow to fix: Verify SDA/SCL wiring and power, and check bus.frequency_hz in the config.".to_string()
            }
            EstimatorError::Inconsistent { attempts } => format!(
                "What happened: Consecutive gyroscope reads kept disagreeing ({attempts} attempts).\nLikely causes: Electrical noise, loose wiring, or an error margin set too tight.\nHow to fix: Check the wiring, or raise sampler.error_margin_rad_s / sampler.max_attempts in the config."
            ),
            EstimatorError::TransportFault(detail) => format!(
                "What happened: The device did not acknowledge a bus transaction ({detail}).\nLikely causes: Wrong bus.address, device unpowered, or address pin strapped differently.\nHow to fix: Verify bus.address (0x68 or 0x69 depending on AD0) and the wiring."
            ),
            EstimatorError::NonFiniteRate => {
                "What happened: The gyroscope produced a non-finite rate.\nLikely causes: Corrupted transfer or a broken transport implementation.\nHow to fix: Re-run with --log-level=debug and inspect the raw samples.".to_string()
            }
            _ => format!(
                "What happened: {ee}.\nLikely causes: See logs.\nHow to fix: Re-run with --log-level=debug or set RUST_LOG for more detail."
            ),
        };
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {err}"
    )
}

/// Map estimator errors (if present) to stable exit codes; other errors
/// return 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    use heading_core::error::EstimatorError;
    if let Some(ee) = err.downcast_ref::<EstimatorError>() {
        return match ee {
            EstimatorError::Timeout => 3,
            EstimatorError::Inconsistent { .. } => 4,
            EstimatorError::TransportFault(_) => 5,
            _ => 2,
        };
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use heading_core::error::EstimatorError;
    use serde_json::json;

    let msg = humanize(err);
    if let Some(ee) = err.downcast_ref::<EstimatorError>() {
        let (reason, details) = match ee {
            EstimatorError::Timeout => ("Timeout", None),
            EstimatorError::Inconsistent { attempts } => {
                ("Inconsistent", Some(json!({ "attempts": attempts })))
            }
            EstimatorError::TransportFault(d) => {
                ("TransportFault", Some(json!({ "detail": d })))
            }
            EstimatorError::NonFiniteRate => ("NonFiniteRate", None),
            _ => ("Error", None),
        };
        let obj = match details {
            Some(d) => json!({ "reason": reason, "details": d, "message": msg }),
            None => json!({ "reason": reason, "message": msg }),
        };
        return obj.to_string();
    }

    json!({ "reason": "Error", "message": msg }).to_string()
}
