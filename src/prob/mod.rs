use rand::distributions::Distribution;

mod cdf;
mod pmf;
mod suite;

pub use cdf::Cdf;
pub use pmf::Pmf;
pub use suite::Suite;

/// Trait for probabilistic models
///
/// ### Type parameters
/// - `T`: The type returned by sampling the distribution
/// - `O`: The type of the observation, contains information relevant to updating the model
pub trait ProbModel<T, O>: Distribution<T> {
    type Error;

    /// Update the model given a new observation
    ///
    /// **Returns** the probability of the observation under the model before the update
    fn update(&mut self, observation: O) -> Result<f64, Self::Error>;
}

/// Probability of observing some data under a given hypothesis
///
/// Implemented for any `Fn(&O, &H) -> f64`, so a closure works wherever a model is expected.
pub trait Likelihood<H, O> {
    fn likelihood(&self, observation: &O, hypothesis: &H) -> f64;
}

impl<H, O, F> Likelihood<H, O> for F
where
    F: Fn(&O, &H) -> f64,
{
    fn likelihood(&self, observation: &O, hypothesis: &H) -> f64 {
        self(observation, hypothesis)
    }
}
