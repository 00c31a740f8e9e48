//! Error types for distribution evaluation.
//!
//! This module provides:
//! - `DistributionError`: Errors raised while validating parameters or
//!   dispatching a distribution call

use thiserror::Error;

/// Distribution evaluation errors.
///
/// Provides structured error handling for distribution operations with the
/// identifying name of the distribution that rejected the call.
///
/// # Variants
/// - `InvalidParameter`: A parameter failed validation (σ ≤ 0, probability
///   outside `[0, 1]`, wrong parameter count, non-numeric value)
/// - `UnknownMode`: Mode token not recognised by the dispatcher
/// - `UnknownDistribution`: Distribution name not recognised by the dispatcher
///
/// # Examples
/// ```
/// use dist_models::distributions::DistributionError;
///
/// let err = DistributionError::invalid_parameter("Norm", "σ should be >0");
/// assert_eq!(format!("{}", err), "Norm: σ should be >0");
/// assert_eq!(err.function(), Some("Norm"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionError {
    /// A parameter failed validation.
    #[error("{function}: {message}")]
    InvalidParameter {
        /// Human-readable description of the failure
        message: String,
        /// Identifying name of the distribution (e.g. `Norm`)
        function: String,
    },

    /// Mode token not recognised.
    #[error("Unknown distribution mode: {0}")]
    UnknownMode(String),

    /// Distribution name not recognised.
    #[error("Unknown distribution: {0}")]
    UnknownDistribution(String),
}

impl DistributionError {
    /// Creates an `InvalidParameter` error for the named distribution.
    pub fn invalid_parameter(function: &str, message: impl Into<String>) -> Self {
        DistributionError::InvalidParameter {
            message: message.into(),
            function: function.to_string(),
        }
    }

    /// Returns the distribution name carried by `InvalidParameter`.
    pub fn function(&self) -> Option<&str> {
        match self {
            DistributionError::InvalidParameter { function, .. } => Some(function.as_str()),
            _ => None,
        }
    }

    /// Returns `true` for parameter validation failures.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, DistributionError::InvalidParameter { .. })
    }
}
