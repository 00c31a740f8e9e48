//! Mode tokens and distribution-name dispatch.
//!
//! Host calls look like `Norm(x,μ,σ,F)`: a distribution name, positional
//! parameters and a trailing mode token. [`Mode`] parses the token and
//! [`DistributionKind`] routes the call to the matching operation.
//!
//! Dispatch is enum-based (static), so adding a distribution means adding a
//! variant and its match arms.

use std::fmt;
use std::str::FromStr;

use dist_core::types::Numeric;

use super::description::Description;
use super::error::DistributionError;
use super::normal;

/// Evaluation mode selected by the trailing token of a host call.
///
/// | Token | Mode |
/// |---|---|
/// | `~` | `Sample` |
/// | `f` | `Density` |
/// | `F` | `Cumulative` |
/// | `Q` | `Quantile` |
/// | `E` | `Mean` |
/// | `V` | `Variance` |
///
/// # Examples
/// ```
/// use dist_models::distributions::Mode;
///
/// let mode: Mode = "F".parse().unwrap();
/// assert_eq!(mode, Mode::Cumulative);
/// assert_eq!(mode.token(), "F");
/// assert!("x".parse::<Mode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Random variate (`~`)
    Sample,
    /// Probability density (`f`)
    Density,
    /// Cumulative probability (`F`)
    Cumulative,
    /// Inverse cumulative probability (`Q`)
    Quantile,
    /// Expected value (`E`)
    Mean,
    /// Variance (`V`)
    Variance,
}

impl Mode {
    /// All modes, in help-text order.
    pub const ALL: [Mode; 6] = [
        Mode::Sample,
        Mode::Density,
        Mode::Cumulative,
        Mode::Quantile,
        Mode::Mean,
        Mode::Variance,
    ];

    /// Trailing token used in host calls.
    pub fn token(&self) -> &'static str {
        match self {
            Mode::Sample => "~",
            Mode::Density => "f",
            Mode::Cumulative => "F",
            Mode::Quantile => "Q",
            Mode::Mean => "E",
            Mode::Variance => "V",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Sample => "sample",
            Mode::Density => "density",
            Mode::Cumulative => "cumulative",
            Mode::Quantile => "quantile",
            Mode::Mean => "mean",
            Mode::Variance => "variance",
        }
    }

    /// Number of positional parameters the mode takes: `(μ, σ)` or `(x, μ, σ)`.
    pub fn expected_arity(&self) -> usize {
        match self {
            Mode::Sample | Mode::Mean | Mode::Variance => 2,
            Mode::Density | Mode::Cumulative | Mode::Quantile => 3,
        }
    }

    /// Returns `true` if the mode needs a host-supplied uniform draw.
    pub fn is_random(&self) -> bool {
        matches!(self, Mode::Sample)
    }
}

impl FromStr for Mode {
    type Err = DistributionError;

    /// Tokens are case-sensitive: `f` is the density, `F` the CDF.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "~" => Ok(Mode::Sample),
            "f" => Ok(Mode::Density),
            "F" => Ok(Mode::Cumulative),
            "Q" => Ok(Mode::Quantile),
            "E" => Ok(Mode::Mean),
            "V" => Ok(Mode::Variance),
            other => Err(DistributionError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Distributions known to the dispatcher.
///
/// # Examples
/// ```
/// use dist_core::types::Numeric;
/// use dist_models::distributions::{DistributionKind, Mode};
///
/// let norm = DistributionKind::from_name("Norm").unwrap();
/// let params = [Numeric::Real(10.0), Numeric::Real(2.0)];
/// let var = norm.evaluate(Mode::Variance, &params, 0.0).unwrap();
/// assert_eq!(var, Numeric::Real(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Normal (Gaussian) distribution, called as `Norm`.
    Normal,
}

impl DistributionKind {
    /// All known distributions.
    pub const ALL: [DistributionKind; 1] = [DistributionKind::Normal];

    /// Looks a distribution up by its call name.
    ///
    /// # Errors
    /// Returns `UnknownDistribution` for unrecognised names.
    pub fn from_name(name: &str) -> Result<Self, DistributionError> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| DistributionError::UnknownDistribution(name.to_string()))
    }

    /// Call name used in host expressions and error reports.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => normal::NAME,
        }
    }

    /// Evaluates the distribution in the given mode.
    ///
    /// `rand` is the host's uniform draw and is only read in `Mode::Sample`.
    pub fn evaluate(
        &self,
        mode: Mode,
        params: &[Numeric],
        rand: f64,
    ) -> Result<Numeric, DistributionError> {
        match self {
            DistributionKind::Normal => match mode {
                Mode::Sample => normal::sample(params, rand),
                Mode::Density => normal::pdf(params),
                Mode::Cumulative => normal::cdf(params),
                Mode::Quantile => normal::quantile(params),
                Mode::Mean => normal::mean(params),
                Mode::Variance => normal::variance(params),
            },
        }
    }

    /// Help metadata for display.
    pub fn description(&self) -> Description {
        match self {
            DistributionKind::Normal => normal::description(),
        }
    }
}

impl FromStr for DistributionKind {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
