use std::fmt::Debug;

use crate::{
    error::{Error, Result},
    util::ensure_interval,
};

/// Cumulative distribution function of a [`Pmf`](super::Pmf)
///
/// Holds the hypotheses in ascending order next to the probability that the
/// hypothesis is less than or equal to each of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf<H> {
    xs: Vec<H>,
    ps: Vec<f64>,
}

impl<H: Copy + Ord + Debug> Cdf<H> {
    /// `xs` must be ascending and `ps` non-decreasing, with equal lengths
    pub(crate) fn new(xs: Vec<H>, ps: Vec<f64>) -> Self {
        debug_assert_eq!(xs.len(), ps.len());
        Self { xs, ps }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Cumulative probability of `x`, i.e. P(X <= x)
    pub fn prob(&self, x: &H) -> f64 {
        match self.xs.partition_point(|v| v <= x) {
            0 => 0.0,
            ix => self.ps[ix - 1],
        }
    }

    /// The smallest value whose cumulative probability is at least `p`
    ///
    /// Rounding can leave the last cumulative probability a hair under 1, so the
    /// search is clamped to the largest value.
    ///
    /// **Errors** with [`Error::InvalidArgument`] unless `p` is in `[0, 1]`
    pub fn value(&self, p: f64) -> Result<H> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidArgument(format!(
                "Invalid value for `p`. Must be in the interval [0, 1], got {p}."
            )));
        }
        let ix = self.ps.partition_point(|&q| q < p);
        Ok(self.xs[ix.min(self.xs.len() - 1)])
    }

    /// The value at percentile `p`, with `p` in `[0, 100]`
    pub fn percentile(&self, p: f64) -> Result<H> {
        self.value(p / 100.0)
    }

    /// The central interval holding `percentage` percent of the mass
    ///
    /// With `tail = (100 - percentage) / 200`, the low end is the first value whose
    /// cumulative probability reaches `tail` and the high end the first value whose
    /// cumulative probability reaches `1 - tail`. Less than `tail` of the mass lies
    /// below the low end and at most `tail` lies above the high end.
    ///
    /// **Errors** with [`Error::InvalidArgument`] unless `percentage` is in `(0, 100]`
    pub fn credible_interval(&self, percentage: f64) -> Result<(H, H)> {
        ensure_interval!(percentage, 0.0, 100.0);
        let tail = (100.0 - percentage) / 200.0;
        Ok((self.value(tail)?, self.value(1.0 - tail)?))
    }
}
