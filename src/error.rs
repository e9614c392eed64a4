//! Error types for trainspotter

use thiserror::Error;

/// trainspotter error type
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor or query was given an argument outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No hypothesis is consistent with the observation, so the posterior has no mass left
    #[error("Degenerate distribution: observation {observation} has zero likelihood under every hypothesis")]
    DegenerateDistribution { observation: String },

    /// The likelihood function produced a weight that is not a finite non-negative number
    #[error("Invalid likelihood {value} for observation {observation} under hypothesis {hypothesis}")]
    InvalidLikelihood {
        observation: String,
        hypothesis: String,
        value: f64,
    },

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::DegenerateDistribution {
            observation: String::from("5"),
        };
        assert_eq!(
            err.to_string(),
            "Degenerate distribution: observation 5 has zero likelihood under every hypothesis",
            "degenerate message names the observation"
        );

        let err = Error::InvalidArgument(String::from("empty"));
        assert_eq!(err.to_string(), "Invalid argument: empty");
    }
}
