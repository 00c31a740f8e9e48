//! Eval command implementation
//!
//! Evaluates a distribution from a name, a mode token and positional
//! parameters. Sample mode draws its uniform from a seeded `StdRng`.

use dist_core::types::Numeric;
use dist_models::distributions::{DistributionKind, Mode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Outcome of a single evaluation, as printed in JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Call name of the distribution
    pub function: &'static str,
    /// Mode token
    pub mode: &'static str,
    /// Positional parameters as read from the command line
    pub params: Vec<Numeric>,
    /// Uniform draw consumed by sample mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uniform: Option<f64>,
    /// Result of the evaluation
    pub value: Numeric,
}

impl Evaluation {
    /// Render the result for the configured output format
    pub fn render(&self, config: &CliConfig) -> Result<String> {
        match config.output_format {
            OutputFormat::Plain => Ok(format_value(&self.value, config.precision)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// Run the eval command
pub fn run(name: &str, mode: &str, params: &[String], config: &CliConfig) -> Result<()> {
    let kind = DistributionKind::from_name(name)?;
    let mode: Mode = mode.parse()?;
    let params = parse_params(params.iter().map(String::as_str))?;

    let evaluation = evaluate(kind, mode, params, config)?;
    super::emit(&evaluation.render(config)?)
}

/// Evaluate `kind` in `mode`, drawing a uniform first when the mode needs one
pub fn evaluate(
    kind: DistributionKind,
    mode: Mode,
    params: Vec<Numeric>,
    config: &CliConfig,
) -> Result<Evaluation> {
    let uniform = if mode.is_random() {
        Some(draw_uniform(config.seed))
    } else {
        None
    };

    let value = kind
        .evaluate(mode, &params, uniform.unwrap_or_default())
        .map_err(|e| {
            warn!("{}({}) failed: {}", kind, mode, e);
            e
        })?;

    debug!("{}({}) = {}", kind, mode, value);
    Ok(Evaluation {
        function: kind.name(),
        mode: mode.token(),
        params,
        uniform,
        value,
    })
}

/// Parse positional parameters, reporting the offending position on failure
pub fn parse_params<'a, I>(raw: I) -> Result<Vec<Numeric>>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .enumerate()
        .map(|(i, s)| {
            s.parse::<Numeric>()
                .map_err(|e| CliError::Parse(format!("parameter {}: {}", i + 1, e)))
        })
        .collect()
}

fn draw_uniform(seed: Option<u64>) -> f64 {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let u: f64 = rng.gen();
    debug!(seed, u, "Drew uniform for sampling");
    u
}

fn format_value(value: &Numeric, precision: usize) -> String {
    match value {
        Numeric::Real(x) => format!("{:.*}", precision, x),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn config_with_seed(seed: u64) -> CliConfig {
        CliConfig {
            seed: Some(seed),
            ..CliConfig::default()
        }
    }

    fn value_of(evaluation: &Evaluation) -> f64 {
        evaluation.value.as_real().unwrap()
    }

    #[test]
    fn test_evaluate_cdf() {
        let params = parse_params(["1.96", "0", "1"]).unwrap();
        let evaluation = evaluate(
            DistributionKind::Normal,
            Mode::Cumulative,
            params,
            &CliConfig::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(value_of(&evaluation), 0.975002, epsilon = 1e-6);
        assert_eq!(evaluation.uniform, None);
        assert_eq!(evaluation.function, "Norm");
        assert_eq!(evaluation.mode, "F");
    }

    #[test]
    fn test_sample_is_reproducible_with_seed() {
        let params = parse_params(["5", "2"]).unwrap();
        let config = config_with_seed(42);
        let first = evaluate(DistributionKind::Normal, Mode::Sample, params.clone(), &config)
            .unwrap();
        let second = evaluate(DistributionKind::Normal, Mode::Sample, params, &config).unwrap();

        assert_eq!(first, second);
        let u = first.uniform.unwrap();
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn test_sample_matches_quantile_of_draw() {
        let config = config_with_seed(7);
        let sampled = evaluate(
            DistributionKind::Normal,
            Mode::Sample,
            parse_params(["5", "2"]).unwrap(),
            &config,
        )
        .unwrap();
        let u = sampled.uniform.unwrap();

        let quantile = evaluate(
            DistributionKind::Normal,
            Mode::Quantile,
            vec![Numeric::Real(u), Numeric::Real(5.0), Numeric::Real(2.0)],
            &config,
        )
        .unwrap();
        assert_eq!(sampled.value, quantile.value);
    }

    #[test]
    fn test_evaluate_propagates_distribution_error() {
        let err = evaluate(
            DistributionKind::Normal,
            Mode::Mean,
            parse_params(["0", "-1"]).unwrap(),
            &CliConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Norm: σ should be >0");
    }

    #[test]
    fn test_parse_params_reports_position() {
        let err = parse_params(["0", "abc"]).unwrap_err();
        assert!(matches!(err, CliError::Parse(ref msg) if msg.starts_with("parameter 2")));
    }

    #[test]
    fn test_parse_params_accepts_negative_values() {
        let params = parse_params(["-1.5", "0", "1"]).unwrap();
        assert_eq!(params[0], Numeric::Real(-1.5));
        assert_eq!(params[1], Numeric::Integer(0));
    }

    #[test]
    fn test_render_plain_uses_precision() {
        let evaluation = Evaluation {
            function: "Norm",
            mode: "F",
            params: vec![],
            uniform: None,
            value: Numeric::Real(0.975002104851780),
        };
        let config = CliConfig {
            precision: 3,
            ..CliConfig::default()
        };
        assert_eq!(evaluation.render(&config).unwrap(), "0.975");
    }

    #[test]
    fn test_render_json() {
        let evaluation = Evaluation {
            function: "Norm",
            mode: "E",
            params: vec![Numeric::Real(10.0), Numeric::Real(2.0)],
            uniform: None,
            value: Numeric::Real(10.0),
        };
        let config = CliConfig {
            output_format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let json: serde_json::Value =
            serde_json::from_str(&evaluation.render(&config).unwrap()).unwrap();
        assert_eq!(json["function"], "Norm");
        assert_eq!(json["mode"], "E");
        assert!(json.get("uniform").is_none());
    }

    #[test]
    fn test_render_infinite_quantile() {
        let evaluation = evaluate(
            DistributionKind::Normal,
            Mode::Quantile,
            parse_params(["1", "0", "1"]).unwrap(),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(evaluation.render(&CliConfig::default()).unwrap(), "inf");
    }
}
