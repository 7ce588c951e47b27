//! Ruspini trapezoidal partition: the default [`Partition`] implementation.
//!
//! The fitted span `[min, max]` is cut into equal segments, one per term.
//! Each term has a flat core and a linear overlap of half-width
//! `segment * OVERLAP` with each neighbour, so memberships inside the span sum
//! to 1. The outermost terms are open shoulders.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    partition::{FuzzyTerm, Partition}
};

/// Overlap half-width as a fraction of the segment width.
const OVERLAP: f64 = 0.25;

/// Padding applied on each side of a constant column.
const DEGENERATE_PAD: f64 = 0.5;

/// # Overview
///
/// Trapezoid `min <= core_min <= core_max <= max` with optional open
/// shoulders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrapezoidalTerm {
    min:        f64,
    core_min:   f64,
    core_max:   f64,
    max:        f64,
    center:     f64,
    left_open:  bool,
    right_open: bool
}

impl TrapezoidalTerm {
    /// Centre of the segment owned by the term; used for defuzzification.
    #[inline]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[inline]
    pub fn core(&self) -> (f64, f64) {
        (self.core_min, self.core_max)
    }
}

impl FuzzyTerm for TrapezoidalTerm {
    #[inline]
    fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    fn membership(&self, x: f64) -> f64 {
        if x < self.core_min {
            if self.left_open {
                1.0
            } else if x <= self.min {
                0.0
            } else {
                (x - self.min) / (self.core_min - self.min)
            }
        } else if x <= self.core_max {
            1.0
        } else if self.right_open {
            1.0
        } else if x >= self.max {
            0.0
        } else {
            (self.max - x) / (self.max - self.core_max)
        }
    }
}

/// # Overview
///
/// Ordered trapezoidal terms covering one column.
///
/// # Examples
///
/// ```
/// use fuzzy_dist::{Partition, TrapezoidalPartition};
///
/// let p = TrapezoidalPartition::fit(&[1.0, 2.0, 3.0, 4.0], 4).unwrap();
/// let mu = p.memberships(2.5);
///
/// assert!((mu.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrapezoidalPartition {
    terms: Vec<TrapezoidalTerm>
}

impl TrapezoidalPartition {
    /// # Overview
    ///
    /// Builds `n_terms` terms over the span `[lo, hi]`.
    fn over_span(lo: f64, hi: f64, n_terms: usize) -> Self {
        let width = (hi - lo) / n_terms as f64;
        let q = width * OVERLAP;
        let last = n_terms - 1;

        let terms = (0..n_terms)
            .map(|i| {
                let start = lo + i as f64 * width;
                let end = if i == last { hi } else { lo + (i + 1) as f64 * width };
                let left_open = i == 0;
                let right_open = i == last;

                TrapezoidalTerm {
                    min: if left_open { lo } else { start - q },
                    core_min: if left_open { lo } else { start + q },
                    core_max: if right_open { hi } else { end - q },
                    max: if right_open { hi } else { end + q },
                    center: (start + end) / 2.0,
                    left_open,
                    right_open
                }
            })
            .collect();

        Self {
            terms
        }
    }
}

impl Partition for TrapezoidalPartition {
    type Term = TrapezoidalTerm;

    fn fit(values: &[f64], n_terms: usize) -> Result<Self> {
        if n_terms == 0 {
            return Err(Error::InvalidTermCount);
        }
        if values.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue {
                row,
                column: 0
            });
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if hi <= lo {
            lo -= DEGENERATE_PAD;
            hi += DEGENERATE_PAD;
        }

        Ok(Self::over_span(lo, hi, n_terms))
    }

    #[inline]
    fn terms(&self) -> &[TrapezoidalTerm] {
        &self.terms
    }

    /// Weighted mean of term centres.
    fn defuzzify(&self, weights: &[f64]) -> Result<f64> {
        if weights.len() != self.terms.len() {
            return Err(Error::DimensionMismatch {
                expected: self.terms.len(),
                got:      weights.len()
            });
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(Error::EmptyDistribution);
        }

        let weighted: f64 = self
            .terms
            .iter()
            .zip(weights)
            .map(|(t, w)| t.center * w)
            .sum();
        Ok(weighted / total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lo: f64, hi: f64, steps: usize) -> impl Iterator<Item = f64> {
        (0..=steps).map(move |i| lo + (hi - lo) * i as f64 / steps as f64)
    }

    #[test]
    fn memberships_sum_to_one_inside_span() {
        let p = TrapezoidalPartition::fit(&[0.0, 3.0, 10.0], 4).unwrap();

        for x in grid(0.0, 10.0, 200) {
            let sum: f64 = p.memberships(x).iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "x = {x}, sum = {sum}");
        }
    }

    #[test]
    fn at_most_two_terms_fire() {
        let p = TrapezoidalPartition::fit(&[0.0, 10.0], 5).unwrap();

        for x in grid(0.0, 10.0, 100) {
            let firing = p.memberships(x).iter().filter(|&&m| m > 0.0).count();
            assert!(firing <= 2);
        }
    }

    #[test]
    fn shoulders_saturate_outside_span() {
        let p = TrapezoidalPartition::fit(&[0.0, 10.0], 3).unwrap();

        assert_eq!(p.memberships(-100.0), vec![1.0, 0.0, 0.0]);
        assert_eq!(p.memberships(100.0), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn ranges_are_ordered_and_overlap_neighbours_only() {
        let p = TrapezoidalPartition::fit(&[0.0, 12.0], 4).unwrap();
        let terms = p.terms();

        assert_eq!(terms[0].range().0, 0.0);
        assert_eq!(terms[3].range().1, 12.0);
        for pair in terms.windows(2) {
            assert!(pair[0].range().0 < pair[1].range().0);
            assert!(pair[1].range().0 < pair[0].range().1);
        }
        for i in 0..terms.len() - 2 {
            assert!(terms[i].range().1 < terms[i + 2].range().0);
        }
    }

    #[test]
    fn single_term_is_always_full() {
        let p = TrapezoidalPartition::fit(&[2.0, 4.0], 1).unwrap();

        for x in [-5.0, 2.0, 3.0, 4.0, 50.0] {
            assert_eq!(p.memberships(x), vec![1.0]);
        }
        assert_eq!(p.defuzzify(&[0.7]).unwrap(), 3.0);
    }

    #[test]
    fn constant_column_is_widened() {
        let p = TrapezoidalPartition::fit(&[7.0, 7.0, 7.0], 3).unwrap();

        assert_eq!(p.terms()[0].range().0, 6.5);
        assert_eq!(p.terms()[2].range().1, 7.5);
        assert!((p.defuzzify(&[0.0, 1.0, 0.0]).unwrap() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn defuzzify_weighted_centres() {
        let p = TrapezoidalPartition::fit(&[0.0, 9.0], 3).unwrap();

        assert!((p.defuzzify(&[1.0, 0.0, 0.0]).unwrap() - 1.5).abs() < 1e-9);
        assert!((p.defuzzify(&[0.5, 0.0, 0.5]).unwrap() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn defuzzify_errors() {
        let p = TrapezoidalPartition::fit(&[0.0, 9.0], 3).unwrap();

        assert_eq!(p.defuzzify(&[0.0, 0.0, 0.0]), Err(Error::EmptyDistribution));
        assert_eq!(
            p.defuzzify(&[1.0]),
            Err(Error::DimensionMismatch {
                expected: 3,
                got:      1
            })
        );
    }

    #[test]
    fn fit_errors() {
        assert_eq!(
            TrapezoidalPartition::fit(&[1.0], 0),
            Err(Error::InvalidTermCount)
        );
        assert_eq!(TrapezoidalPartition::fit(&[], 3), Err(Error::EmptyDataset));
        assert_eq!(
            TrapezoidalPartition::fit(&[1.0, f64::NAN], 3),
            Err(Error::NonFiniteValue {
                row:    1,
                column: 0
            })
        );
    }
}
