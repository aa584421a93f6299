//! Temporal smoothing for per-frame pose estimates.
//!
//! The core estimators are stateless; these filters are the optional stateful
//! layer a caller places on top when frame-to-frame jitter matters. Hand
//! identity is positional only, so callers keep one filter per hand slot and
//! reset it when the hand set changes.

/// Exponential filter for responsive smoothing
pub mod exponential;

/// Moving average filter for simple smoothing
pub mod moving_average;

/// Seam-aware wrapper for filtering Euler angles
pub mod angular;

use crate::Result;
use nalgebra::Vector3;

/// Trait for all pose filters
pub trait PoseFilter: Send + Sync {
    /// Apply filter to a three-component sample (rotation angles or a position)
    fn apply(&mut self, sample: Vector3<f64>) -> Vector3<f64>;

    /// Reset filter state
    fn reset(&mut self);

    /// Get filter name
    fn name(&self) -> &str;
}

/// No-op filter that passes through values unchanged
pub struct NoFilter;

impl PoseFilter for NoFilter {
    fn apply(&mut self, sample: Vector3<f64>) -> Vector3<f64> {
        sample
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "NoFilter"
    }
}

/// Create a pose filter by type name, with an optional `:parameter` suffix
///
/// # Errors
///
/// Returns an error if the name is unknown or the parameter does not parse
pub fn create_filter(filter_type: &str) -> Result<Box<dyn PoseFilter>> {
    let lowered = filter_type.to_lowercase();
    let (name, param) = match lowered.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (lowered.as_str(), None),
    };

    match name {
        "none" | "nofilter" => Ok(Box::new(NoFilter)),
        "exponential" => {
            let alpha = parse_param(param, crate::constants::DEFAULT_EXPONENTIAL_ALPHA)?;
            if !(alpha > 0.0 && alpha <= 1.0) {
                return Err(crate::Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
            }
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)))
        }
        "moving_average" | "movingaverage" => {
            let window = parse_param(param, crate::constants::DEFAULT_MOVING_AVERAGE_WINDOW)?;
            if window == 0 {
                return Err(crate::Error::FilterError("Window size must be greater than 0".to_string()));
            }
            Ok(Box::new(moving_average::MovingAverageFilter::new(window)))
        }
        _ => Err(crate::Error::FilterError(format!("Unknown filter type: {filter_type}"))),
    }
}

fn parse_param<T: std::str::FromStr>(param: Option<&str>, default: T) -> Result<T> {
    match param {
        None => Ok(default),
        Some(text) => text
            .parse()
            .map_err(|_| crate::Error::FilterError(format!("Invalid filter parameter: {text}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter() {
        let mut filter = NoFilter;
        let out = filter.apply(Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(out, Vector3::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_create_filter() {
        assert!(create_filter("none").is_ok());
        assert!(create_filter("exponential").is_ok());
        assert!(create_filter("exponential:0.8").is_ok());
        assert!(create_filter("moving_average:3").is_ok());
        assert!(create_filter("unknown").is_err());
    }

    #[test]
    fn test_create_filter_bad_params() {
        assert!(create_filter("exponential:abc").is_err());
        assert!(create_filter("exponential:0").is_err());
        assert!(create_filter("exponential:1.5").is_err());
        assert!(create_filter("moving_average:0").is_err());
        assert!(create_filter("moving_average:-1").is_err());
    }
}
