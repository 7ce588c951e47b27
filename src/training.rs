//! Training report.

/// # Overview
///
/// Outcome of [`Distribution::train_with_summary`](crate::Distribution::train_with_summary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainSummary {
    /// Training rows consumed.
    pub rows:    usize,
    /// Classes opened by the clustering pass.
    pub seeded:  usize,
    /// Classes folded away by the merge pass.
    pub merged:  usize,
    /// Classes in the finished model.
    pub classes: usize
}

impl TrainSummary {
    /// Mean number of training rows per seeded class.
    #[must_use]
    pub fn rows_per_class(&self) -> f64 {
        if self.seeded == 0 {
            0.0
        } else {
            self.rows as f64 / self.seeded as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_per_class() {
        let summary = TrainSummary {
            rows:    10,
            seeded:  4,
            merged:  1,
            classes: 3
        };
        assert!((summary.rows_per_class() - 2.5).abs() < 1e-12);
        assert_eq!(TrainSummary::default().rows_per_class(), 0.0);
    }
}
