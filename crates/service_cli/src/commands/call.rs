//! Call command implementation
//!
//! Parses host call syntax, `Name(p1,p2,...,MODE)`, and evaluates it.

use std::str::FromStr;

use dist_core::types::Numeric;
use dist_models::distributions::{DistributionKind, Mode};

use super::eval;
use crate::config::CliConfig;
use crate::{CliError, Result};

/// A parsed host call such as `Norm(1.96,0,1,F)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// Distribution being called
    pub kind: DistributionKind,
    /// Trailing mode token
    pub mode: Mode,
    /// Positional parameters preceding the mode
    pub params: Vec<Numeric>,
}

impl FromStr for CallExpression {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let open = s
            .find('(')
            .ok_or_else(|| CliError::Parse(format!("missing '(' in {}", s)))?;
        let body = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| CliError::Parse(format!("missing closing ')' in {}", s)))?;

        let kind = DistributionKind::from_name(&s[..open])?;

        let mut args: Vec<&str> = body.split(',').map(str::trim).collect();
        let mode = match args.pop() {
            Some(token) if !token.is_empty() => token.parse::<Mode>()?,
            _ => return Err(CliError::Parse(format!("missing mode token in {}", s))),
        };
        let params = eval::parse_params(args)?;

        Ok(Self { kind, mode, params })
    }
}

/// Run the call command
pub fn run(expression: &str, config: &CliConfig) -> Result<()> {
    let call: CallExpression = expression.parse()?;
    let evaluation = eval::evaluate(call.kind, call.mode, call.params, config)?;
    super::emit(&evaluation.render(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dist_models::distributions::DistributionError;

    #[test]
    fn test_parse_cdf_call() {
        let call: CallExpression = "Norm(1.96,0,1,F)".parse().unwrap();
        assert_eq!(call.kind, DistributionKind::Normal);
        assert_eq!(call.mode, Mode::Cumulative);
        assert_eq!(
            call.params,
            vec![Numeric::Real(1.96), Numeric::Integer(0), Numeric::Integer(1)]
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let call: CallExpression = "  Norm( 10 , 2 , V )  ".parse().unwrap();
        assert_eq!(call.mode, Mode::Variance);
        assert_eq!(call.params.len(), 2);
    }

    #[test]
    fn test_parse_sample_token() {
        let call: CallExpression = "Norm(0,1,~)".parse().unwrap();
        assert!(call.mode.is_random());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "Norm 0,1,F".parse::<CallExpression>(),
            Err(CliError::Parse(_))
        ));
        assert!(matches!(
            "Norm(0,1,F".parse::<CallExpression>(),
            Err(CliError::Parse(_))
        ));
        assert!(matches!(
            "Norm()".parse::<CallExpression>(),
            Err(CliError::Parse(_))
        ));
        assert!(matches!(
            "Norm(0,one,F)".parse::<CallExpression>(),
            Err(CliError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_unknown_names_and_modes() {
        assert!(matches!(
            "Gamma(1,2,E)".parse::<CallExpression>(),
            Err(CliError::Distribution(DistributionError::UnknownDistribution(_)))
        ));
        assert!(matches!(
            "Norm(1,2,M)".parse::<CallExpression>(),
            Err(CliError::Distribution(DistributionError::UnknownMode(_)))
        ));
    }

    #[test]
    fn test_parsed_call_evaluates() {
        let call: CallExpression = "Norm(0.5,10,2,Q)".parse().unwrap();
        let evaluation =
            eval::evaluate(call.kind, call.mode, call.params, &CliConfig::default()).unwrap();
        assert_eq!(evaluation.value, Numeric::Real(10.0));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_formatted_call_parses_back(
                x in -1e6..1e6_f64,
                mu in -1e3..1e3_f64,
                sigma in 1e-3..1e3_f64
            ) {
                let call: CallExpression =
                    format!("Norm({:?},{:?},{:?},f)", x, mu, sigma).parse().unwrap();
                prop_assert_eq!(call.mode, Mode::Density);
                prop_assert_eq!(
                    call.params,
                    vec![Numeric::Real(x), Numeric::Real(mu), Numeric::Real(sigma)]
                );
            }
        }
    }
}
