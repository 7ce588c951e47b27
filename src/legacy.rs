//! Legacy range-probability estimator.
//!
//! Only meaningful for piecewise-linear trapezoidal or triangular dependent
//! terms where each term overlaps at most one neighbour on each side, such as
//! [`TrapezoidalPartition`](crate::TrapezoidalPartition). Results for other
//! membership shapes are undefined. The output is a score, not a normalised
//! probability, and can exceed 1.

use crate::{
    class::ClassRecord,
    distribution::Distribution,
    partition::{FuzzyTerm, Partition}
};

impl<P: Partition> Distribution<P> {
    /// # Overview
    ///
    /// Mass that `class` puts on the dependent interval `[from, to)`.
    ///
    /// For each dependent term the estimate adds:
    /// - the term's full membership degree if its core (the range left after
    ///   trimming both neighbours' overlaps) intersects the interval;
    /// - for the overlap with the next term, the larger of the two degrees
    ///   times the length of the overlap lying inside the interval, divided
    ///   by the width of the term holding that larger degree.
    ///
    /// # Panics
    ///
    /// - if `to <= from`
    /// - if `class` has a membership degree count other than the number of
    ///   dependent terms
    pub fn probability_in_range(&self, class: &ClassRecord, from: f64, to: f64) -> f64 {
        assert!(to > from, "empty probability range: from {from} must be below to {to}");

        let terms = self.dependent().terms();
        let mu = class.membership();
        assert_eq!(
            mu.len(),
            terms.len(),
            "class has {} membership degrees but the dependent partition has {} terms",
            mu.len(),
            terms.len()
        );
        let last = terms.len() - 1;
        let mut p = 0.0;

        for (i, term) in terms.iter().enumerate() {
            let (min, max) = term.range();
            if min >= to {
                break;
            }
            if max <= from {
                continue;
            }

            let mut lo = min.max(from);
            if i > 0 {
                lo = lo.max(terms[i - 1].range().1);
            }
            let mut hi = max.min(to);
            if i < last {
                hi = hi.min(terms[i + 1].range().0);
            }
            if hi > lo {
                p += mu[i];
            }

            if i < last {
                let (next_min, next_max) = terms[i + 1].range();
                let lo = next_min.max(from);
                let hi = max.min(to);
                if hi > lo {
                    let peak = mu[i].max(mu[i + 1]);
                    let width = if peak == mu[i] {
                        max - min
                    } else {
                        next_max - next_min
                    };
                    p += peak * (hi - lo) / width;
                }
            }
        }

        p
    }
}
