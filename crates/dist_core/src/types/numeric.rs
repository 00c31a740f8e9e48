//! Generic numeric value passed positionally to distribution functions.
//!
//! A [`Numeric`] is a tagged scalar. Distributions read each positional
//! parameter either as an unconstrained real number ([`Numeric::as_real`]) or
//! as a probability ([`Numeric::as_prob`]). The probability bound check lives
//! here so that individual distributions never duplicate it.

use std::fmt;
use std::str::FromStr;

use super::error::NumericError;

/// Tagged scalar value.
///
/// # Variants
/// - `Integer`: Whole number, widened to `f64` on real reads
/// - `Real`: Floating-point number
/// - `Bool`: Truth value, has no real interpretation
///
/// # Examples
/// ```
/// use dist_core::types::Numeric;
///
/// let sigma = Numeric::from(2);
/// assert_eq!(sigma.as_real().unwrap(), 2.0);
///
/// let p = Numeric::Real(1.1);
/// assert!(p.as_prob().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Numeric {
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Real(f64),
    /// Truth value.
    Bool(bool),
}

impl Numeric {
    /// Reads the value as an unconstrained real number.
    ///
    /// # Errors
    /// Returns `NumericError::NotANumber` for `Bool` values.
    #[inline]
    pub fn as_real(&self) -> Result<f64, NumericError> {
        match *self {
            Numeric::Integer(i) => Ok(i as f64),
            Numeric::Real(x) => Ok(x),
            Numeric::Bool(b) => Err(NumericError::NotANumber {
                found: format!("boolean {}", b),
            }),
        }
    }

    /// Reads the value as a probability in `[0, 1]`.
    ///
    /// # Errors
    /// - `NumericError::NotANumber` for `Bool` values
    /// - `NumericError::ProbabilityOutOfRange` for values outside `[0, 1]` or NaN
    #[inline]
    pub fn as_prob(&self) -> Result<f64, NumericError> {
        let value = self.as_real()?;
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(NumericError::ProbabilityOutOfRange { value })
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Real(value)
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Integer(i64::from(value))
    }
}

impl From<bool> for Numeric {
    fn from(value: bool) -> Self {
        Numeric::Bool(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(i) => write!(f, "{}", i),
            Numeric::Real(x) => write!(f, "{}", x),
            Numeric::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl FromStr for Numeric {
    type Err = NumericError;

    /// Parses `true`/`false`, then integers, then reals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "true" => return Ok(Numeric::Bool(true)),
            "false" => return Ok(Numeric::Bool(false)),
            _ => {}
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Numeric::Integer(i));
        }
        trimmed
            .parse::<f64>()
            .map(Numeric::Real)
            .map_err(|_| NumericError::NotANumber {
                found: format!("'{}'", trimmed),
            })
    }
}
