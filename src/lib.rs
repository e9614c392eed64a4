/// Error types
pub mod error;

/// Discrete distributions and Bayesian updating
pub mod prob;

/// The train problem: likelihood, priors and summary statistics
pub mod train;

/// Terminal plotting
#[cfg(feature = "viz")]
pub mod viz;

mod util;
