//! Parallel read-only queries using rayon.
//!
//! A trained [`Distribution`] is never mutated by queries, so it can be shared
//! across worker threads. Training itself stays sequential.

use rayon::prelude::*;

use crate::{ClassRecord, Distribution, Partition, Result};

/// # Overview
///
/// Parallel classification of many feature vectors.
pub fn classify_batch<'a, P>(
    dist: &'a Distribution<P>,
    xs: &[Vec<f64>],
    threshold: f32
) -> Vec<Result<&'a ClassRecord>>
where
    P: Partition + Sync
{
    xs.par_iter().map(|x| dist.classify(x, threshold)).collect()
}

/// # Overview
///
/// Parallel estimation of the dependent value for many feature vectors.
pub fn estimate_batch<P>(dist: &Distribution<P>, xs: &[Vec<f64>], threshold: f32) -> Vec<Result<f64>>
where
    P: Partition + Sync
{
    xs.par_iter().map(|x| dist.estimate(x, threshold)).collect()
}

/// # Overview
///
/// Parallel mean absolute error over full rows; see [`Distribution::mae`].
///
/// # Errors
///
/// Same as [`Distribution::mae`]: rows with no matching class are skipped,
/// every other failure is returned.
pub fn mae_parallel<P>(dist: &Distribution<P>, rows: &[Vec<f64>], threshold: f32) -> Result<Option<f64>>
where
    P: Partition + Sync
{
    let (sum, hits) = rows
        .par_iter()
        .map(|row| {
            dist.row_error(row, threshold)
                .map(|err| err.map_or((0.0, 0), |e| (e, 1usize)))
        })
        .try_reduce(|| (0.0, 0), |a, b| Ok((a.0 + b.0, a.1 + b.1)))?;

    Ok((hits > 0).then(|| sum / hits as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Error};

    fn trained() -> (Distribution, Vec<Vec<f64>>) {
        let config = Config::builder()
            .feature_terms(3)
            .dependent_terms(3)
            .threshold(0.2)
            .build()
            .unwrap();
        let data: Vec<Vec<f64>> = (0..40)
            .map(|i| {
                let x = (i % 10) as f64;
                vec![x, 10.0 - x, 2.0 * x + 1.0]
            })
            .collect();
        let dist = Distribution::train(&data, &config).unwrap();
        (dist, data)
    }

    #[test]
    fn classify_batch_matches_sequential() {
        let (dist, data) = trained();
        let xs: Vec<Vec<f64>> = data.iter().map(|r| r[..2].to_vec()).collect();

        let parallel = classify_batch(&dist, &xs, 0.2);
        for (x, got) in xs.iter().zip(parallel) {
            assert_eq!(got, dist.classify(x, 0.2));
        }
    }

    #[test]
    fn estimate_batch_reports_misses() {
        let (dist, _) = trained();
        let xs = vec![vec![1.0, 9.0], vec![1.0]];

        let results = estimate_batch(&dist, &xs, 0.2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        );
    }

    #[test]
    fn mae_parallel_matches_sequential() {
        let (dist, data) = trained();

        let seq = dist.mae(&data, 0.2).unwrap().unwrap();
        let par = mae_parallel(&dist, &data, 0.2).unwrap().unwrap();
        assert!((seq - par).abs() < 1e-9);
    }

    #[test]
    fn mae_parallel_rejects_ragged_rows() {
        let (dist, mut data) = trained();
        data.push(vec![1.0, 9.0]);

        assert_eq!(
            mae_parallel(&dist, &data, 0.2),
            Err(Error::DimensionMismatch {
                expected: 3,
                got:      2
            })
        );
    }
}
