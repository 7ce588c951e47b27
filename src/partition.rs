//! Fuzzy partition contract consumed by [`Distribution`](crate::Distribution).

use crate::error::Result;

/// One linguistic term of a fitted partition.
pub trait FuzzyTerm {
    /// Support of the term as `(min, max)`.
    fn range(&self) -> (f64, f64);

    /// Membership degree of `x`, in `[0, 1]`.
    fn membership(&self, x: f64) -> f64;
}

/// A fitted decomposition of one numeric column into ordered, overlapping
/// linguistic terms.
///
/// Terms are ordered by range and overlap only their immediate neighbours.
/// A partition is immutable once fitted.
///
/// # Example
///
/// ```
/// use fuzzy_dist::{FuzzyTerm, Partition, TrapezoidalPartition};
///
/// let p = TrapezoidalPartition::fit(&[0.0, 5.0, 10.0], 3).unwrap();
///
/// assert_eq!(p.n_terms(), 3);
/// assert_eq!(p.terms()[0].membership(0.0), 1.0);
/// ```
pub trait Partition: Sized {
    type Term: FuzzyTerm;

    /// Fits a partition with `n_terms` terms to a full column of values.
    fn fit(values: &[f64], n_terms: usize) -> Result<Self>;

    /// Ordered terms.
    fn terms(&self) -> &[Self::Term];

    /// Converts a weighted membership vector (one weight per term) back into
    /// a scalar.
    fn defuzzify(&self, weights: &[f64]) -> Result<f64>;

    #[inline]
    fn n_terms(&self) -> usize {
        self.terms().len()
    }

    /// Membership degree of `x` against every term, in term order.
    fn memberships(&self, x: f64) -> Vec<f64> {
        self.terms().iter().map(|t| t.membership(x)).collect()
    }
}
