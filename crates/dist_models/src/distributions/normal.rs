//! Normal (Gaussian) distribution N(μ, σ²).
//!
//! Two entry points share one validation path:
//! - [`NormalDistribution`]: typed API, constructed once from `(μ, σ)`
//! - [`pdf`], [`cdf`], [`quantile`], [`mean`], [`variance`], [`sample`]:
//!   positional API over `&[Numeric]`, in the host's calling convention
//!
//! | Mode | Call | Parameters |
//! |---|---|---|
//! | `~` | [`sample`] | `(μ, σ)` plus a uniform draw `u ∈ [0, 1]` |
//! | `f` | [`pdf`] | `(x, μ, σ)` |
//! | `F` | [`cdf`] | `(x, μ, σ)` |
//! | `Q` | [`quantile`] | `(p, μ, σ)` |
//! | `E` | [`mean`] | `(μ, σ)` |
//! | `V` | [`variance`] | `(μ, σ)` |
//!
//! Every operation rejects `σ ≤ 0` (and NaN) with
//! [`DistributionError::InvalidParameter`] before computing anything.
//!
//! The quantile maps `p = 0` to `-∞` and `p = 1` to `+∞`.

use dist_core::math::special::{
    standard_normal_cdf, standard_normal_inverse_cdf, standard_normal_pdf,
};
use dist_core::types::Numeric;

use super::description::{Description, ParameterDoc, UsageDoc};
use super::error::DistributionError;
use super::family::Mode;

/// Identifying name of the distribution in host calls and error reports.
pub const NAME: &str = "Norm";

const SIGMA_NOT_POSITIVE: &str = "σ should be >0";
const SIGMA_NOT_FINITE: &str = "σ should be finite";
const MU_NOT_FINITE: &str = "μ should be finite";
const WRONG_ARITY: &str = "Incorrect number of parameters";

/// Normal distribution with mean `mu` and standard deviation `sigma`.
///
/// # Mathematical Definition
/// - PDF: f(x) = 1/(σ√(2π)) · exp(−(x−μ)²/(2σ²))
/// - CDF: Φ((x−μ)/σ)
/// - Quantile: μ + σ·Φ⁻¹(p)
/// - Mean: μ
/// - Variance: σ²
///
/// # Examples
/// ```
/// use dist_models::distributions::NormalDistribution;
///
/// let norm = NormalDistribution::new(10.0, 2.0).unwrap();
/// assert_eq!(norm.mean(), 10.0);
/// assert_eq!(norm.variance(), 4.0);
/// assert_eq!(norm.sample(0.5).unwrap(), 10.0);
///
/// assert!(NormalDistribution::new(0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalDistribution {
    mu: f64,
    sigma: f64,
}

impl NormalDistribution {
    /// Creates a normal distribution.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless `sigma > 0` (NaN is rejected) and
    /// both parameters are finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        // Written as a negated comparison so that NaN fails too
        if !(sigma > 0.0) {
            return Err(DistributionError::invalid_parameter(NAME, SIGMA_NOT_POSITIVE));
        }
        if sigma.is_infinite() {
            return Err(DistributionError::invalid_parameter(NAME, SIGMA_NOT_FINITE));
        }
        if !mu.is_finite() {
            return Err(DistributionError::invalid_parameter(NAME, MU_NOT_FINITE));
        }
        Ok(Self { mu, sigma })
    }

    /// Standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Location parameter μ.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale parameter σ.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Probability density at `x`.
    #[inline]
    pub fn pdf(&self, x: f64) -> f64 {
        standard_normal_pdf(self.standardise(x)) / self.sigma
    }

    /// Cumulative probability P(X ≤ x).
    #[inline]
    pub fn cdf(&self, x: f64) -> f64 {
        standard_normal_cdf(self.standardise(x))
    }

    /// Quantile (inverse CDF) at probability `p`.
    ///
    /// # Returns
    /// `-∞` for `p = 0` and `+∞` for `p = 1`.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `p` lies outside `[0, 1]` or is NaN.
    pub fn quantile(&self, p: f64) -> Result<f64, DistributionError> {
        let p = read_prob(&Numeric::Real(p))?;
        Ok(self.inverse_cdf(p))
    }

    /// Mean μ.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Variance σ².
    #[inline]
    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Standard deviation σ.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.sigma
    }

    /// Draws a variate from a uniform value `u` by inverse-transform sampling.
    ///
    /// `sample(0.5)` equals the mean exactly.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `u` lies outside `[0, 1]`.
    pub fn sample(&self, u: f64) -> Result<f64, DistributionError> {
        self.quantile(u)
    }

    #[inline]
    fn standardise(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }

    #[inline]
    fn inverse_cdf(&self, p: f64) -> f64 {
        self.mu + self.sigma * standard_normal_inverse_cdf(p)
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::standard()
    }
}

// ================================================================
// Positional API
// ================================================================

/// Density at `x` for parameters `(x, μ, σ)`.
///
/// # Examples
/// ```
/// use dist_core::types::Numeric;
/// use dist_models::distributions::normal;
///
/// let f = normal::pdf(&[Numeric::Real(0.0), Numeric::Real(0.0), Numeric::Real(1.0)]).unwrap();
/// assert!((f.as_real().unwrap() - 0.398942).abs() < 1e-6);
/// ```
pub fn pdf(params: &[Numeric]) -> Result<Numeric, DistributionError> {
    let [x, mu, sigma] = expect_params::<3>(params)?;
    let x = read_real(x)?;
    let norm = distribution(mu, sigma)?;
    Ok(Numeric::Real(norm.pdf(x)))
}

/// Cumulative probability at `x` for parameters `(x, μ, σ)`.
pub fn cdf(params: &[Numeric]) -> Result<Numeric, DistributionError> {
    let [x, mu, sigma] = expect_params::<3>(params)?;
    let x = read_real(x)?;
    let norm = distribution(mu, sigma)?;
    Ok(Numeric::Real(norm.cdf(x)))
}

/// Quantile at probability `p` for parameters `(p, μ, σ)`.
///
/// `p` is read as a probability, so values outside `[0, 1]` are rejected.
pub fn quantile(params: &[Numeric]) -> Result<Numeric, DistributionError> {
    let [p, mu, sigma] = expect_params::<3>(params)?;
    let p = read_prob(p)?;
    let norm = distribution(mu, sigma)?;
    Ok(Numeric::Real(norm.inverse_cdf(p)))
}

/// Mean for parameters `(μ, σ)`. σ is still validated.
pub fn mean(params: &[Numeric]) -> Result<Numeric, DistributionError> {
    let [mu, sigma] = expect_params::<2>(params)?;
    let norm = distribution(mu, sigma)?;
    Ok(Numeric::Real(norm.mean()))
}

/// Variance for parameters `(μ, σ)`.
pub fn variance(params: &[Numeric]) -> Result<Numeric, DistributionError> {
    let [mu, sigma] = expect_params::<2>(params)?;
    let norm = distribution(mu, sigma)?;
    Ok(Numeric::Real(norm.variance()))
}

/// Random variate for parameters `(μ, σ)` from a host-supplied uniform draw `rand`.
///
/// # Errors
/// Returns `InvalidParameter` when `params` does not hold exactly two
/// values, when σ ≤ 0, or when `rand` lies outside `[0, 1]`.
///
/// # Examples
/// ```
/// use dist_core::types::Numeric;
/// use dist_models::distributions::normal;
///
/// let params = [Numeric::Real(10.0), Numeric::Real(2.0)];
/// assert_eq!(normal::sample(&params, 0.5).unwrap(), Numeric::Real(10.0));
/// ```
pub fn sample(params: &[Numeric], rand: f64) -> Result<Numeric, DistributionError> {
    let [mu, sigma] = expect_params::<2>(params)?;
    let norm = distribution(mu, sigma)?;
    norm.sample(rand).map(Numeric::Real)
}

/// Help metadata for the Normal distribution.
pub fn description() -> Description {
    Description {
        function: NAME,
        name: "Normal Distribution",
        summary: "Canonical bell-shaped distribution",
        parameters: vec![
            ParameterDoc::new("μ", "Mean"),
            ParameterDoc::new("σ", "Standard deviation").with_constraint(">0"),
        ],
        sample: vec![UsageDoc::new(
            "μ,σ",
            Mode::Sample,
            "Returns a random variable (mean in base case) from the Normal distribution. Real number",
        )],
        distribution_functions: vec![
            UsageDoc::new("x,μ,σ", Mode::Density, "Returns the value of the Normal PDF at x"),
            UsageDoc::new("x,μ,σ", Mode::Cumulative, "Returns the value of the Normal CDF at x"),
            UsageDoc::new(
                "p,μ,σ",
                Mode::Quantile,
                "Returns the quantile (inverse CDF) of the Normal distribution at p",
            ),
        ],
        moments: vec![
            UsageDoc::new("μ,σ", Mode::Mean, "Returns the mean of the Normal distribution"),
            UsageDoc::new("μ,σ", Mode::Variance, "Returns the variance of the Normal distribution"),
        ],
    }
}

fn expect_params<const N: usize>(params: &[Numeric]) -> Result<&[Numeric; N], DistributionError> {
    params
        .try_into()
        .map_err(|_| DistributionError::invalid_parameter(NAME, WRONG_ARITY))
}

fn read_real(value: &Numeric) -> Result<f64, DistributionError> {
    value
        .as_real()
        .map_err(|err| DistributionError::invalid_parameter(NAME, err.to_string()))
}

fn read_prob(value: &Numeric) -> Result<f64, DistributionError> {
    value
        .as_prob()
        .map_err(|err| DistributionError::invalid_parameter(NAME, err.to_string()))
}

fn distribution(mu: &Numeric, sigma: &Numeric) -> Result<NormalDistribution, DistributionError> {
    NormalDistribution::new(read_real(mu)?, read_real(sigma)?)
}
