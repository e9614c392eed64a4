use std::fmt::Debug;

use log::{debug, trace, warn};
use rand::{distributions::Distribution, Rng};

use crate::error::{Error, Result};

use super::{Likelihood, Pmf, ProbModel};

/// A set of competing hypotheses updated with Bayes' rule
///
/// The suite owns the current belief as a [`Pmf`] and a [`Likelihood`] model. Every
/// [`update`](Suite::update) multiplies the prior by the likelihood of the observation and
/// renormalizes, so the posterior is a valid distribution between observations.
///
/// ### Type parameters
/// - `H`: The hypothesis type
/// - `L`: The likelihood model
#[derive(Debug, Clone)]
pub struct Suite<H: Copy + Ord, L> {
    pmf: Pmf<H>,
    likelihood: L,
}

impl<H, L> Suite<H, L>
where
    H: Copy + Ord + Debug,
{
    /// Initialize a suite with a uniform prior over `hypotheses`
    ///
    /// **Errors** with [`Error::InvalidArgument`] if `hypotheses` is empty
    pub fn new(hypotheses: impl IntoIterator<Item = H>, likelihood: L) -> Result<Self> {
        Ok(Self::with_prior(Pmf::uniform(hypotheses)?, likelihood))
    }

    /// Initialize a suite with an arbitrary prior
    pub fn with_prior(prior: Pmf<H>, likelihood: L) -> Self {
        Self {
            pmf: prior,
            likelihood,
        }
    }

    /// The current belief
    pub fn pmf(&self) -> &Pmf<H> {
        &self.pmf
    }

    pub fn into_pmf(self) -> Pmf<H> {
        self.pmf
    }

    /// Update every hypothesis with a single observation and renormalize
    ///
    /// The update is all or nothing: on error the belief is unchanged.
    ///
    /// **Returns** the normalizing constant, the probability of `observation` under the prior
    ///
    /// **Errors**
    /// - [`Error::InvalidLikelihood`] if the model yields a negative or non-finite weight
    /// - [`Error::DegenerateDistribution`] if no hypothesis is consistent with `observation`
    pub fn update<O>(&mut self, observation: O) -> Result<f64>
    where
        O: Debug,
        L: Likelihood<H, O>,
    {
        let likelihood = &self.likelihood;
        let total = self.pmf.reweight(|hypo| {
            let value = likelihood.likelihood(&observation, hypo);
            trace!("likelihood of {observation:?} under {hypo:?}: {value}");
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(Error::InvalidLikelihood {
                    observation: format!("{observation:?}"),
                    hypothesis: format!("{hypo:?}"),
                    value,
                })
            }
        })?;

        if total == 0.0 {
            warn!("observation {observation:?} rules out every hypothesis");
            return Err(Error::DegenerateDistribution {
                observation: format!("{observation:?}"),
            });
        }

        debug!("updated with {observation:?}, normalizing constant {total:e}");
        Ok(total)
    }

    /// Update with each observation in turn, stopping at the first error
    ///
    /// Observations before the failing one stay applied.
    ///
    /// **Returns** the product of the normalizing constants
    pub fn update_set<O>(&mut self, observations: impl IntoIterator<Item = O>) -> Result<f64>
    where
        O: Debug,
        L: Likelihood<H, O>,
    {
        observations
            .into_iter()
            .try_fold(1.0, |evidence, observation| {
                Ok(evidence * self.update(observation)?)
            })
    }
}

impl<H: Copy + Ord, L> Distribution<H> for Suite<H, L> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> H {
        self.pmf.sample(rng)
    }
}

impl<H, O, L> ProbModel<H, O> for Suite<H, L>
where
    H: Copy + Ord + Debug,
    O: Debug,
    L: Likelihood<H, O>,
{
    type Error = Error;

    fn update(&mut self, observation: O) -> Result<f64> {
        Suite::update(self, observation)
    }
}
