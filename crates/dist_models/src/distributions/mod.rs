//! Probability distributions and their evaluation modes.
//!
//! This module provides:
//! - `normal`: Normal (Gaussian) distribution
//! - `description`: Structured help text shown by the host UI
//! - `family`: Mode tokens (`~ f F Q E V`) and distribution-name dispatch
//! - `error`: `DistributionError`
//!
//! ## Design Principles
//!
//! - **Positional parameters**: every operation takes `&[Numeric]` in the
//!   host's calling convention and returns a single `Numeric`
//! - **Single failure kind**: invalid inputs surface as
//!   `DistributionError::InvalidParameter` naming the distribution

pub mod description;
pub mod error;
pub mod family;
pub mod normal;

// Re-export main types at module level
pub use description::{Description, ParameterDoc, UsageDoc};
pub use error::DistributionError;
pub use family::{DistributionKind, Mode};
pub use normal::NormalDistribution;
