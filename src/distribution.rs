//! Fuzzy distribution model: class discovery, fuzzy distance and lookups.
//!
//! Training fits one [`Partition`] per column (features first, dependent
//! value last), then groups rows greedily:
//!
//! 1. every row not yet absorbed opens a class seeded with its own features;
//! 2. every later unabsorbed row within `threshold` of that seed joins it;
//! 3. classes are averaged;
//! 4. optionally, finished classes within `threshold` of each other are
//!    merged in store order.
//!
//! A trained model is immutable. Queries take `&self` and may run from
//! several threads at once; nothing else is supported.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Config,
    class::{ClassRecord, TrainingAccumulator},
    error::{Error, Result},
    partition::{FuzzyTerm, Partition},
    store::ClassStore,
    training::TrainSummary,
    trapezoidal::TrapezoidalPartition
};

/// # Overview
///
/// Trained fuzzy distribution over labeled numeric rows.
///
/// # Examples
///
/// ```
/// use fuzzy_dist::{Config, Distribution};
///
/// let config = Config::builder()
///     .feature_terms(3)
///     .dependent_terms(3)
///     .threshold(0.5)
///     .build()
///     .unwrap();
///
/// let data = vec![vec![1.0, 2.0, 5.0], vec![1.1, 2.1, 5.2]];
/// let dist: Distribution = Distribution::train(&data, &config).unwrap();
///
/// let class = dist.classify(&[1.05, 2.05], 0.5).unwrap();
/// let mean = dist.mean(class).unwrap();
/// assert!(mean > 5.0 && mean < 5.2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "DistributionState<P>",
        bound(deserialize = "P: Partition + Deserialize<'de>")
    )
)]
pub struct Distribution<P = TrapezoidalPartition> {
    classes:    Vec<ClassRecord>,
    partitions: Vec<P>
}

/// Persisted shape of a [`Distribution`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct DistributionState<P> {
    classes:    Vec<ClassRecord>,
    partitions: Vec<P>
}

#[cfg(feature = "serde")]
impl<P: Partition> TryFrom<DistributionState<P>> for Distribution<P> {
    type Error = Error;

    fn try_from(state: DistributionState<P>) -> Result<Self> {
        Self::from_parts(state.classes, state.partitions)
    }
}

impl<P: Partition> Distribution<P> {
    /// # Overview
    ///
    /// Trains a model on rows of `features..., dependent`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyDataset`] when `data` has no rows
    /// - [`Error::MissingFeatures`] when rows have fewer than two columns
    /// - [`Error::DimensionMismatch`] when rows differ in length
    /// - [`Error::NonFiniteValue`] on NaN or infinite input
    pub fn train(data: &[Vec<f64>], config: &Config) -> Result<Self> {
        Self::train_with_summary(data, config).map(|(dist, _)| dist)
    }

    /// # Overview
    ///
    /// Same as [`train`](Self::train), also reporting how classes formed.
    pub fn train_with_summary(data: &[Vec<f64>], config: &Config) -> Result<(Self, TrainSummary)> {
        config.validate()?;
        let width = validate_rows(data)?;

        let mut dist = Self {
            classes:    Vec::new(),
            partitions: fit_partitions(data, width, config)?
        };

        let accumulators = dist.cluster(data, config.threshold);
        let seeded = accumulators.len();

        let mut store: ClassStore = accumulators
            .into_iter()
            .map(TrainingAccumulator::finish)
            .collect();
        let merged = if config.merge {
            dist.merge_close(&mut store, config.threshold)
        } else {
            0
        };
        dist.classes = store.into_records();

        let summary = TrainSummary {
            rows: data.len(),
            seeded,
            merged,
            classes: dist.classes.len()
        };
        debug!(
            rows = summary.rows,
            features = width - 1,
            seeded = summary.seeded,
            merged = summary.merged,
            classes = summary.classes,
            "trained fuzzy distribution"
        );

        Ok((dist, summary))
    }

    /// # Overview
    ///
    /// Rebuilds a model from finished classes and fitted partitions.
    ///
    /// The last partition describes the dependent column.
    pub fn from_parts(classes: Vec<ClassRecord>, partitions: Vec<P>) -> Result<Self> {
        let dependent = partitions.len().checked_sub(1).ok_or(Error::NoPartitions)?;
        if dependent == 0 {
            return Err(Error::MissingFeatures);
        }
        if partitions.iter().any(|p| p.n_terms() == 0) {
            return Err(Error::InvalidTermCount);
        }

        let n_terms = partitions[dependent].n_terms();
        for class in &classes {
            check_len(dependent, class.values().len())?;
            check_len(n_terms, class.membership().len())?;
        }

        Ok(Self {
            classes,
            partitions
        })
    }

    #[inline]
    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    #[inline]
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn partitions(&self) -> &[P] {
        &self.partitions
    }

    /// Index of the dependent partition; always `partitions().len() - 1`.
    #[inline]
    pub fn dependent_index(&self) -> usize {
        self.partitions.len() - 1
    }

    #[inline]
    pub fn dependent(&self) -> &P {
        &self.partitions[self.dependent_index()]
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.dependent_index()
    }

    /// # Overview
    ///
    /// Fuzzy dissimilarity of two feature vectors, in `[0, 1]`.
    ///
    /// Per feature, the mean absolute membership difference over its terms;
    /// these are summed and divided by the number of partitions including the
    /// dependent one, which contributes nothing to the sum.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` does not hold exactly
    /// [`n_features`](Self::n_features) values.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f32 {
        let n = self.n_features();
        assert_eq!(a.len(), n, "distance: left vector has {} features, expected {n}", a.len());
        assert_eq!(b.len(), n, "distance: right vector has {} features, expected {n}", b.len());

        let total: f64 = self.partitions[..self.dependent_index()]
            .iter()
            .zip(a.iter().zip(b))
            .map(|(p, (&x, &y))| {
                let terms = p.terms();
                let diff: f64 = terms
                    .iter()
                    .map(|t| (t.membership(x) - t.membership(y)).abs())
                    .sum();
                diff / terms.len() as f64
            })
            .sum();

        total as f32 / self.partitions.len() as f32
    }

    /// # Overview
    ///
    /// Nearest class within `threshold` of `features`.
    ///
    /// Ties go to the class that comes first in training order.
    pub fn classify(&self, features: &[f64], threshold: f32) -> Result<&ClassRecord> {
        check_len(self.n_features(), features.len())?;

        let mut best = None;
        let mut min = f32::MAX;
        for class in &self.classes {
            let d = self.distance(class.values(), features);
            if d <= threshold && d < min {
                min = d;
                best = Some(class);
            }
        }

        best.ok_or(Error::NoMatchingClass)
    }

    /// # Overview
    ///
    /// Defuzzified estimate of the dependent value for `class`.
    pub fn mean(&self, class: &ClassRecord) -> Result<f64> {
        self.dependent().defuzzify(class.membership())
    }

    /// # Overview
    ///
    /// Classifies `features` and returns the mean of the matched class.
    pub fn estimate(&self, features: &[f64], threshold: f32) -> Result<f64> {
        let class = self.classify(features, threshold)?;
        self.mean(class)
    }

    /// # Overview
    ///
    /// Mean absolute error of [`estimate`](Self::estimate) over full rows
    /// (features followed by the dependent value).
    ///
    /// Rows with no matching class are skipped; `Ok(None)` when no row has
    /// one.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] when a row is not `n_features() + 1` wide
    /// - any other error [`estimate`](Self::estimate) reports, such as
    ///   [`Error::EmptyDistribution`]
    pub fn mae(&self, rows: &[Vec<f64>], threshold: f32) -> Result<Option<f64>> {
        let mut sum = 0.0;
        let mut hits = 0usize;
        for row in rows {
            if let Some(err) = self.row_error(row, threshold)? {
                sum += err;
                hits += 1;
            }
        }

        Ok((hits > 0).then(|| sum / hits as f64))
    }

    /// Absolute estimation error for one full row; `None` when no class
    /// matches its features.
    pub(crate) fn row_error(&self, row: &[f64], threshold: f32) -> Result<Option<f64>> {
        let n = self.n_features();
        check_len(n + 1, row.len())?;

        match self.estimate(&row[..n], threshold) {
            Ok(y) => Ok(Some((y - row[n]).abs())),
            Err(Error::NoMatchingClass) => Ok(None),
            Err(err) => Err(err)
        }
    }

    /// Greedy single pass: each unabsorbed row seeds a class and pulls in
    /// every later unabsorbed row within `threshold` of the seed.
    fn cluster(&self, data: &[Vec<f64>], threshold: f32) -> Vec<TrainingAccumulator> {
        let n = self.n_features();
        let dependent = self.dependent();
        let mut absorbed = vec![false; data.len()];
        let mut classes = Vec::new();

        for (i, row) in data.iter().enumerate() {
            if absorbed[i] {
                continue;
            }
            absorbed[i] = true;

            let mut acc = TrainingAccumulator::seed(&row[..n], dependent.memberships(row[n]));
            for (j, other) in data.iter().enumerate().skip(i + 1) {
                if absorbed[j] {
                    continue;
                }
                if self.distance(acc.seed_values(), &other[..n]) <= threshold {
                    acc.absorb(&other[..n], &dependent.memberships(other[n]));
                    absorbed[j] = true;
                }
            }
            classes.push(acc);
        }

        classes
    }

    /// Merges every later class within `threshold` into an earlier one.
    /// A kept class keeps absorbing with its updated centroid.
    fn merge_close(&self, store: &mut ClassStore, threshold: f32) -> usize {
        let mut merged = 0;

        for i in 0..store.slots() {
            for j in (i + 1)..store.slots() {
                let (Some(kept), Some(other)) = (store.get(i), store.get(j)) else {
                    continue;
                };
                let d = self.distance(kept.values(), other.values());
                if d <= threshold {
                    trace!(kept = i, absorbed = j, distance = d, "merging classes");
                    store.merge_into(i, j);
                    merged += 1;
                }
            }
        }

        merged
    }
}

fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            expected,
            got
        })
    }
}

/// Returns the common row width.
fn validate_rows(data: &[Vec<f64>]) -> Result<usize> {
    let width = data.first().ok_or(Error::EmptyDataset)?.len();
    if width < 2 {
        return Err(Error::MissingFeatures);
    }

    for (row, values) in data.iter().enumerate() {
        check_len(width, values.len())?;
        if let Some(column) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteValue {
                row,
                column
            });
        }
    }

    Ok(width)
}

fn fit_partitions<P: Partition>(data: &[Vec<f64>], width: usize, config: &Config) -> Result<Vec<P>> {
    let dependent = width - 1;

    (0..width)
        .map(|column| {
            let values: Vec<f64> = data.iter().map(|row| row[column]).collect();
            let n_terms = if column == dependent {
                config.dependent_terms
            } else {
                config.feature_terms
            };
            P::fit(&values, n_terms)
        })
        .collect()
}
