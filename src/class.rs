//! Discovered classes and their training-time accumulators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// One discovered cluster of training rows.
///
/// - `values`: centroid in feature space, one entry per feature
/// - `membership`: mean membership degree of the cluster's dependent values
///   against each dependent term (each entry in `[0, 1]`, not normalised)
/// - `count`: number of training rows folded into the cluster
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassRecord {
    values:     Vec<f64>,
    membership: Vec<f64>,
    count:      usize
}

impl ClassRecord {
    /// # Overview
    ///
    /// Creates a record from finished statistics.
    pub fn new(values: Vec<f64>, membership: Vec<f64>, count: usize) -> Self {
        Self {
            values,
            membership,
            count
        }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn membership(&self) -> &[f64] {
        &self.membership
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// # Overview
    ///
    /// Folds `other` into `self` with an unweighted mean of centroids and
    /// membership distributions. `count` is left untouched.
    pub fn merge(&mut self, other: &ClassRecord) {
        for (v, o) in self.values.iter_mut().zip(&other.values) {
            *v = (*v + o) / 2.0;
        }
        for (m, o) in self.membership.iter_mut().zip(&other.membership) {
            *m = (*m + o) / 2.0;
        }
    }
}

/// # Overview
///
/// Running sums for one class while training is in progress.
///
/// The seed (the row that opened the class) is the point every later row is
/// compared against; it does not move until [`finish`](Self::finish).
#[derive(Debug, Clone)]
pub struct TrainingAccumulator {
    seed:       Vec<f64>,
    sum:        Vec<f64>,
    membership: Vec<f64>,
    count:      usize
}

impl TrainingAccumulator {
    /// # Overview
    ///
    /// Opens a class from one row's features and its dependent memberships.
    pub fn seed(features: &[f64], membership: Vec<f64>) -> Self {
        Self {
            seed: features.to_vec(),
            sum: features.to_vec(),
            membership,
            count: 1
        }
    }

    #[inline]
    pub fn seed_values(&self) -> &[f64] {
        &self.seed
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// # Overview
    ///
    /// Adds one more row to the running sums.
    pub fn absorb(&mut self, features: &[f64], membership: &[f64]) {
        debug_assert_eq!(features.len(), self.sum.len());
        debug_assert_eq!(membership.len(), self.membership.len());

        for (s, f) in self.sum.iter_mut().zip(features) {
            *s += f;
        }
        for (m, mu) in self.membership.iter_mut().zip(membership) {
            *m += mu;
        }
        self.count += 1;
    }

    /// # Overview
    ///
    /// Averages the sums by `count` and drops the training-only state.
    pub fn finish(self) -> ClassRecord {
        let n = self.count as f64;
        let values = self.sum.into_iter().map(|s| s / n).collect();
        let membership = self.membership.into_iter().map(|m| m / n).collect();
        ClassRecord::new(values, membership, self.count)
    }
}
