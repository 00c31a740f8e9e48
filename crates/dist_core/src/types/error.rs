//! Error types for numeric value reads.
//!
//! This module provides:
//! - `NumericError`: Errors raised when a `Numeric` cannot be read in the requested form

use thiserror::Error;

/// Numeric read errors.
///
/// Raised by the accessors on [`Numeric`](crate::types::Numeric) when the
/// stored value cannot be interpreted as requested.
///
/// # Variants
/// - `ProbabilityOutOfRange`: Value read as a probability lies outside `[0, 1]`
/// - `NotANumber`: Value has no real-number interpretation
///
/// # Examples
/// ```
/// use dist_core::types::NumericError;
///
/// let err = NumericError::ProbabilityOutOfRange { value: 1.5 };
/// assert_eq!(format!("{}", err), "Probability should be in [0, 1]: p = 1.5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumericError {
    /// Value read as a probability lies outside `[0, 1]` (or is NaN).
    #[error("Probability should be in [0, 1]: p = {value}")]
    ProbabilityOutOfRange {
        /// The offending value
        value: f64,
    },

    /// Value has no real-number interpretation.
    #[error("Expected a real number, found {found}")]
    NotANumber {
        /// Description of the stored value
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_out_of_range_display() {
        let err = NumericError::ProbabilityOutOfRange { value: -0.1 };
        assert_eq!(format!("{}", err), "Probability should be in [0, 1]: p = -0.1");
    }

    #[test]
    fn test_not_a_number_display() {
        let err = NumericError::NotANumber {
            found: "boolean true".to_string(),
        };
        assert_eq!(format!("{}", err), "Expected a real number, found boolean true");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = NumericError::ProbabilityOutOfRange { value: 2.0 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = NumericError::ProbabilityOutOfRange { value: 2.0 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
