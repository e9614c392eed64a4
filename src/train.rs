use std::{fmt, ops::RangeInclusive};

use crate::{
    error::Result,
    prob::{Likelihood, Pmf, Suite},
};

/// Likelihood of seeing a train number given the size of the fleet
///
/// Trains are numbered `1..=N`, and every train is equally likely to be the one observed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TrainLikelihood;

impl Likelihood<u32, u32> for TrainLikelihood {
    fn likelihood(&self, observation: &u32, hypothesis: &u32) -> f64 {
        if observation > hypothesis || *hypothesis == 0 {
            return 0.0;
        }
        1.0 / *hypothesis as f64
    }
}

/// Prior belief about the fleet size
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Prior {
    /// Every fleet size is equally likely
    #[default]
    Uniform,
    /// P(N) proportional to N<sup>-alpha</sup>, favouring small operators
    PowerLaw { alpha: f64 },
}

/// Configuration for the train problem
pub struct TrainProblemConfig {
    pub hypotheses: RangeInclusive<u32>,
    pub prior: Prior,
    /// Observed before the first plot
    pub first_observation: u32,
    /// Observed after the first plot
    pub observations: Vec<u32>,
    pub credible_percentage: f64,
}

impl Default for TrainProblemConfig {
    fn default() -> Self {
        Self {
            hypotheses: 100..=1000,
            prior: Prior::Uniform,
            first_observation: 50,
            observations: vec![13, 45, 89, 22, 33, 35],
            credible_percentage: 90.0,
        }
    }
}

/// Build the suite of fleet sizes described by `config`, before any observation
pub fn build_suite(config: &TrainProblemConfig) -> Result<Suite<u32, TrainLikelihood>> {
    let hypotheses = config.hypotheses.clone();
    let prior = match config.prior {
        Prior::Uniform => Pmf::uniform(hypotheses)?,
        Prior::PowerLaw { alpha } => {
            Pmf::from_weights(hypotheses.map(|h| (h, (h as f64).powf(-alpha))))?
        }
    };
    Ok(Suite::with_prior(prior, TrainLikelihood))
}

/// Summary statistics of a posterior over fleet sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub mean: f64,
    pub maximum_likelihood: u32,
    pub credible_interval: (u32, u32),
}

impl Estimate {
    pub fn from_pmf(pmf: &Pmf<u32>, credible_percentage: f64) -> Result<Self> {
        Ok(Self {
            mean: pmf.mean(),
            maximum_likelihood: pmf.maximum_likelihood(),
            credible_interval: pmf.credible_interval(credible_percentage)?,
        })
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (low, high) = self.credible_interval;
        writeln!(f, "{}", self.mean)?;
        writeln!(f, "{}", self.maximum_likelihood)?;
        write!(f, "({low}, {high})")
    }
}
