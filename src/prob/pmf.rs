use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Debug,
};

use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};

use crate::{
    error::{Error, Result},
    util::ensure_interval,
};

use super::Cdf;

/// A discrete probability mass function over an ordered set of hypotheses
///
/// Masses are kept normalized by every operation that mutates them, and the set of
/// hypotheses is fixed once the `Pmf` is constructed. Statistics still divide by
/// [`total`](Pmf::total) so they stay correct should the masses drift from 1.
///
/// ### Type parameters
/// - `H`: The hypothesis type, iterated in ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<H: Copy + Ord> {
    masses: BTreeMap<H, f64>,
}

impl<H: Copy + Ord + Debug> Pmf<H> {
    /// Construct a uniform distribution over `hypotheses`
    ///
    /// Duplicate hypotheses collapse into a single entry.
    ///
    /// **Errors** with [`Error::InvalidArgument`] if `hypotheses` is empty
    pub fn uniform(hypotheses: impl IntoIterator<Item = H>) -> Result<Self> {
        let distinct = hypotheses.into_iter().collect::<BTreeSet<_>>();
        Self::from_weights(distinct.into_iter().map(|h| (h, 1.0)))
    }

    /// Construct a distribution from `(hypothesis, weight)` pairs, normalizing the weights
    ///
    /// Weights of duplicate hypotheses are summed.
    ///
    /// **Errors** with [`Error::InvalidArgument`] if there are no pairs, a weight is negative
    /// or not finite, the weights of one hypothesis add up past `f64::MAX`, or the weights
    /// sum to zero
    pub fn from_weights(weights: impl IntoIterator<Item = (H, f64)>) -> Result<Self> {
        let mut masses = BTreeMap::new();
        for (hypo, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "weight {weight} for hypothesis {hypo:?} must be finite and non-negative"
                )));
            }
            *masses.entry(hypo).or_insert(0.0) += weight;
        }

        if masses.is_empty() {
            return Err(Error::InvalidArgument(String::from(
                "a distribution needs at least one hypothesis",
            )));
        }

        let scale = largest(masses.values().copied());
        if scale == 0.0 {
            return Err(Error::InvalidArgument(String::from(
                "weights must not all be zero",
            )));
        }
        if !scale.is_finite() {
            return Err(Error::InvalidArgument(String::from(
                "combined weight of a hypothesis overflows",
            )));
        }

        // Scaling by the largest weight first keeps the total finite
        masses.values_mut().for_each(|m| *m /= scale);
        let mut pmf = Self { masses };
        pmf.normalize();
        Ok(pmf)
    }

    /// Scale every mass so they sum to 1
    ///
    /// **Returns** the total mass before scaling. A zero total leaves the masses untouched.
    pub fn normalize(&mut self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.masses.values_mut().for_each(|m| *m /= total);
        }
        total
    }

    /// Sum of all masses
    pub fn total(&self) -> f64 {
        self.masses.values().sum()
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Normalized mass of `hypo`, 0 if it is not part of the distribution
    pub fn prob(&self, hypo: &H) -> f64 {
        self.masses
            .get(hypo)
            .map_or(0.0, |m| m / self.total())
    }

    /// Iterate `(hypothesis, mass)` pairs in ascending hypothesis order
    pub fn iter(&self) -> impl Iterator<Item = (H, f64)> + '_ {
        self.masses.iter().map(|(&h, &m)| (h, m))
    }

    /// Hypotheses in ascending order
    pub fn hypotheses(&self) -> impl Iterator<Item = H> + '_ {
        self.masses.keys().copied()
    }

    /// The hypothesis with the largest mass
    ///
    /// Ties resolve to the smallest hypothesis.
    pub fn maximum_likelihood(&self) -> H {
        let mut best = self
            .iter()
            .next()
            .expect("a `Pmf` always holds at least one hypothesis");
        for (hypo, mass) in self.iter().skip(1) {
            if mass > best.1 {
                best = (hypo, mass);
            }
        }
        best.0
    }

    /// Build the cumulative distribution
    pub fn make_cdf(&self) -> Cdf<H> {
        let total = self.total();
        let mut running = 0.0;
        let (xs, ps): (Vec<H>, Vec<f64>) = self
            .iter()
            .map(|(h, m)| {
                running += m;
                (h, running / total)
            })
            .unzip();
        Cdf::new(xs, ps)
    }

    /// The value at percentile `p`, with `p` in `[0, 100]`
    pub fn percentile(&self, p: f64) -> Result<H> {
        self.make_cdf().percentile(p)
    }

    /// The central interval holding `percentage` percent of the mass
    ///
    /// See [`Cdf::credible_interval`].
    ///
    /// **Errors** with [`Error::InvalidArgument`] unless `percentage` is in `(0, 100]`
    pub fn credible_interval(&self, percentage: f64) -> Result<(H, H)> {
        ensure_interval!(percentage, 0.0, 100.0);
        self.make_cdf().credible_interval(percentage)
    }

    /// Multiply every mass by `weight(hypothesis)` and renormalize, all or nothing
    ///
    /// `weight` errors abort before any mass changes. A zero total after weighting
    /// leaves the masses untouched and is reported by returning `Ok(0.0)`.
    ///
    /// **Returns** the total weighted mass before renormalizing
    pub(crate) fn reweight<F>(&mut self, mut weight: F) -> Result<f64>
    where
        F: FnMut(&H) -> Result<f64>,
    {
        let weighted = self
            .masses
            .iter()
            .map(|(h, m)| Ok(m * weight(h)?))
            .collect::<Result<Vec<f64>>>()?;

        let total: f64 = weighted.iter().sum();
        if total > 0.0 {
            for (mass, w) in self.masses.values_mut().zip(weighted) {
                *mass = w / total;
            }
        }
        Ok(total)
    }
}

/// Largest of `values`, 0 if there are none
fn largest(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

impl<H: Copy + Ord + Debug + Into<f64>> Pmf<H> {
    /// Expected hypothesis value
    pub fn mean(&self) -> f64 {
        let total = self.total();
        self.iter().map(|(h, m)| h.into() * m).sum::<f64>() / total
    }

    /// Variance of the hypothesis value around the [`mean`](Pmf::mean)
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let total = self.total();
        self.iter()
            .map(|(h, m)| (h.into() - mean).powi(2) * m)
            .sum::<f64>()
            / total
    }

    /// Explicit `(hypothesis, normalized mass)` points, ready for plotting
    pub fn snapshot(&self) -> Vec<(f64, f64)> {
        let total = self.total();
        self.iter().map(|(h, m)| (h.into(), m / total)).collect()
    }
}

impl<H: Copy + Ord> Distribution<H> for Pmf<H> {
    /// Draw a hypothesis with probability proportional to its mass
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> H {
        let dist = WeightedIndex::<f64>::new(self.masses.values())
            .expect("a `Pmf` always holds positive total mass");
        *self
            .masses
            .keys()
            .nth(dist.sample(rng))
            .expect("index drawn from the same masses")
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use statrs::statistics::Distribution as _;

    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn uniform_functional() {
        let pmf = Pmf::uniform(100..=1000u32).unwrap();
        assert_eq!(pmf.len(), 901, "one entry per hypothesis");
        assert!((pmf.total() - 1.0).abs() < TOLERANCE, "normalized");
        assert!((pmf.prob(&100) - 1.0 / 901.0).abs() < TOLERANCE);
        assert_eq!(pmf.prob(&99), 0.0, "unknown hypothesis has no mass");

        let reference = statrs::distribution::DiscreteUniform::new(100, 1000).unwrap();
        assert!(
            (pmf.mean() - reference.mean().unwrap()).abs() < TOLERANCE,
            "mean matches discrete uniform"
        );
        assert!(
            (pmf.variance() - reference.variance().unwrap()).abs() < 1e-6,
            "variance matches discrete uniform"
        );
    }

    #[test]
    fn uniform_collapses_duplicates() {
        let pmf = Pmf::uniform([3u32, 1, 3, 2]).unwrap();
        assert_eq!(pmf.len(), 3);
        assert_eq!(pmf.hypotheses().collect::<Vec<_>>(), vec![1, 2, 3], "ascending order");
        assert!((pmf.prob(&3) - 1.0 / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn construction_errors() {
        assert!(matches!(
            Pmf::<u32>::uniform([]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Pmf::from_weights([(1u32, -1.0)]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Pmf::from_weights([(1u32, f64::NAN)]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Pmf::from_weights([(1u32, 0.0), (2, 0.0)]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_weights_handles_huge_weights() {
        let pmf = Pmf::from_weights([(1u32, f64::MAX), (2, f64::MAX)]).unwrap();
        assert!((pmf.total() - 1.0).abs() < TOLERANCE, "normalized despite overflowing sum");
        assert!((pmf.prob(&1) - 0.5).abs() < TOLERANCE);

        let mut rng = StdRng::seed_from_u64(3);
        let draw = pmf.sample(&mut rng);
        assert!(draw == 1 || draw == 2, "sampling still works");

        assert!(
            matches!(
                Pmf::from_weights([(1u32, f64::MAX), (1, f64::MAX)]),
                Err(Error::InvalidArgument(_))
            ),
            "duplicate weights overflowing a single hypothesis are rejected"
        );
    }

    #[test]
    fn from_weights_normalizes() {
        let pmf = Pmf::from_weights([(1u32, 1.0), (2, 3.0)]).unwrap();
        assert!((pmf.prob(&1) - 0.25).abs() < TOLERANCE);
        assert!((pmf.prob(&2) - 0.75).abs() < TOLERANCE);
        assert!((pmf.mean() - 1.75).abs() < TOLERANCE);
        assert!((pmf.variance() - 0.1875).abs() < TOLERANCE);
    }

    #[test]
    fn maximum_likelihood_breaks_ties_low() {
        let pmf = Pmf::from_weights([(1u32, 1.0), (2, 3.0), (3, 3.0)]).unwrap();
        assert_eq!(pmf.maximum_likelihood(), 2, "smallest of the tied maxima");

        let pmf = Pmf::uniform([5u32, 7, 9]).unwrap();
        assert_eq!(pmf.maximum_likelihood(), 5);
    }

    #[test]
    fn credible_interval_functional() {
        let pmf = Pmf::uniform(1..=100u32).unwrap();
        assert_eq!(pmf.credible_interval(89.0).unwrap(), (6, 95));
        assert_eq!(pmf.credible_interval(100.0).unwrap(), (1, 100), "full interval");
        assert_eq!(pmf.percentile(50.5).unwrap(), 51);

        assert!(pmf.credible_interval(0.0).is_err());
        assert!(pmf.credible_interval(100.1).is_err());
        assert!(pmf.credible_interval(f64::NAN).is_err());
    }

    #[test]
    fn reweight_is_all_or_nothing() {
        let mut pmf = Pmf::uniform([1u32, 2, 3]).unwrap();
        let before = pmf.clone();

        let total = pmf.reweight(|_| Ok(0.0)).unwrap();
        assert_eq!(total, 0.0);
        assert_eq!(pmf, before, "zero total leaves masses untouched");

        let res = pmf.reweight(|&h| {
            if h == 3 {
                Err(Error::InvalidArgument(String::from("boom")))
            } else {
                Ok(1.0)
            }
        });
        assert!(res.is_err());
        assert_eq!(pmf, before, "failed weight leaves masses untouched");

        let total = pmf.reweight(|&h| Ok(h as f64)).unwrap();
        assert!((total - 2.0).abs() < TOLERANCE, "evidence is the weighted mean");
        assert!((pmf.prob(&3) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn snapshot_functional() {
        let pmf = Pmf::from_weights([(10u32, 1.0), (20, 1.0)]).unwrap();
        assert_eq!(pmf.snapshot(), vec![(10.0, 0.5), (20.0, 0.5)]);
    }

    #[test]
    fn sample_respects_masses() {
        let pmf = Pmf::from_weights([(1u32, 0.0), (2, 1.0), (3, 3.0)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let draws = (0..4000).map(|_| pmf.sample(&mut rng)).collect::<Vec<_>>();

        assert!(!draws.contains(&1), "zero-mass hypothesis is never drawn");
        let threes = draws.iter().filter(|&&h| h == 3).count() as f64 / draws.len() as f64;
        assert!((threes - 0.75).abs() < 0.05, "frequency tracks mass");
    }
}
