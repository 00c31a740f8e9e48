//! Check command implementation
//!
//! Prints the resolved configuration and the distributions the host knows.

use dist_models::distributions::{DistributionKind, Mode};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration...");
    super::emit(&report(config))
}

fn report(config: &CliConfig) -> String {
    let seed = config
        .seed
        .map_or_else(|| "random".to_string(), |seed| seed.to_string());
    let distributions: Vec<&str> = DistributionKind::ALL.iter().map(|k| k.name()).collect();
    let modes: Vec<String> = Mode::ALL
        .iter()
        .map(|m| format!("{} ({}, {} params)", m.token(), m.label(), m.expected_arity()))
        .collect();

    let mut out = String::new();
    out.push_str("probdist configuration\n");
    out.push_str(&format!("  log level:     {}\n", config.log_level));
    out.push_str(&format!("  seed:          {}\n", seed));
    out.push_str(&format!("  output format: {}\n", config.output_format));
    out.push_str(&format!("  precision:     {}\n", config.precision));
    out.push_str(&format!("  distributions: {}\n", distributions.join(", ")));
    out.push_str(&format!("  modes:         {}\n", modes.join(", ")));
    out
}
