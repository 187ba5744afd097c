//! Maps `Box<dyn Error>` from trait boundaries to typed `EstimatorError`.
//!
//! The traits in `heading_traits` use `Box<dyn Error + Send + Sync>` for
//! maximum flexibility; this module converts those to our typed error enum,
//! with an optional feature-gated path for `heading_hardware::HwError`
//! downcasting.

use crate::error::EstimatorError;

/// Map a trait-boundary error to a typed `EstimatorError`.
///
/// Attempts to downcast known hardware error types first, then falls back
/// to string-based heuristics.
pub fn map_hw_error(e: &(dyn std::error::Error + 'static)) -> EstimatorError {
    // Feature-gated: try to downcast to HwError for precise mapping
    #[cfg(feature = "hardware-errors")]
    {
        if let Some(hw) = e.downcast_ref::<heading_hardware::error::HwError>() {
            return match hw {
                heading_hardware::error::HwError::Timeout => EstimatorError::Timeout,
                heading_hardware::error::HwError::Nack(s) => {
                    EstimatorError::TransportFault(s.clone())
                }
                other => EstimatorError::Transport(other.to_string()),
            };
        }
    }

    // Fallback: string-based detection
    let s = e.to_string();
    if s.to_lowercase().contains("timeout") {
        EstimatorError::Timeout
    } else {
        EstimatorError::Transport(s)
    }
}
