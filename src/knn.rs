//! k-nearest-neighbor classification over stored reference features.

use std::collections::HashMap;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use crate::error::BbGtError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    SqEuclidean,
    Euclidean,
    L1,
    /// `1 - cos(a, b)`; 1 when either vector is zero.
    Cosine,
    /// `0.5 * sum((a - b)^2 / (a + b))` over the components with `a + b != 0`.
    ChiSquared,
}

impl DistanceMetric {
    pub fn distance(&self, a: &ArrayView1<f32>, b: &ArrayView1<f32>) -> f32 {
        let pairs = a.iter().zip(b.iter());
        match self {
            DistanceMetric::SqEuclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum(),
            DistanceMetric::Euclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum::<f32>().sqrt(),
            DistanceMetric::L1 => pairs.map(|(x, y)| (x - y).abs()).sum(),
            DistanceMetric::Cosine => {
                let norm = a.dot(a).sqrt() * b.dot(b).sqrt();
                if norm == 0. {
                    1.
                } else {
                    1. - a.dot(b) / norm
                }
            }
            DistanceMetric::ChiSquared => {
                0.5 * pairs
                    .filter(|(x, y)| *x + *y != 0.)
                    .map(|(x, y)| (x - y).powi(2) / (x + y))
                    .sum::<f32>()
            }
        }
    }
}

/// Pairwise distances between the rows of `x` and the rows of `reference`.
pub fn distance_matrix(
    x: ArrayView2<f32>,
    reference: ArrayView2<f32>,
    metric: DistanceMetric,
) -> Result<Array2<f32>> {
    if x.ncols() != reference.ncols() {
        return Err(BbGtError::DimensionMismatch {
            expected: reference.ncols(),
            actual: x.ncols(),
        });
    }

    let rows: Vec<Vec<f32>> = x
        .axis_iter(Axis(0))
        .into_par_iter()
        .map(|a| {
            reference
                .axis_iter(Axis(0))
                .map(|b| metric.distance(&a, &b))
                .collect()
        })
        .collect();

    Array2::from_shape_vec((x.nrows(), reference.nrows()), rows.concat())
        .map_err(|e| BbGtError::InvalidArgument(e.to_string()))
}

/// For each row of `distances`, the most frequent label among the `k` nearest
/// columns. Ties go to the tied label owning the nearest neighbor.
pub fn majority_vote(distances: ArrayView2<f32>, labels: &[usize], k: usize) -> Result<Vec<usize>> {
    if distances.ncols() != labels.len() {
        return Err(BbGtError::DimensionMismatch {
            expected: labels.len(),
            actual: distances.ncols(),
        });
    }
    if k == 0 || labels.is_empty() {
        return Err(BbGtError::InvalidArgument("majority vote needs k >= 1 and at least one label".to_string()));
    }

    let votes = distances
        .axis_iter(Axis(0))
        .into_par_iter()
        .map(|row| {
            let mut order: Vec<usize> = (0..row.len()).collect();
            order.sort_by(|&a, &b| row[a].total_cmp(&row[b]));

            // label -> (votes, rank of its nearest neighbor)
            let mut tally: HashMap<usize, (usize, usize)> = HashMap::new();
            for (rank, &j) in order.iter().take(k).enumerate() {
                tally.entry(labels[j]).or_insert((0, rank)).0 += 1;
            }
            tally
                .into_iter()
                .max_by(|a, b| (a.1).0.cmp(&(b.1).0).then((b.1).1.cmp(&(a.1).1)))
                .map(|(label, _)| label)
                .unwrap_or(labels[order[0]])
        })
        .collect();

    Ok(votes)
}

/// A kNN classifier: reference features, their labels, and the vote size.
#[derive(Debug, Clone)]
pub struct KnnModel {
    reference: Array2<f32>,
    labels: Vec<usize>,
    k: usize,
    metric: DistanceMetric,
}

impl KnnModel {
    pub fn new(reference: Array2<f32>, labels: Vec<usize>, k: usize, metric: DistanceMetric) -> Result<Self> {
        if reference.nrows() != labels.len() {
            return Err(BbGtError::InvalidArgument(format!(
                "{} reference rows but {} labels", reference.nrows(), labels.len()
            )));
        }
        if reference.nrows() == 0 || k == 0 {
            return Err(BbGtError::InvalidArgument(
                "kNN needs at least one reference row and k >= 1".to_string(),
            ));
        }
        Ok(Self { reference, labels, k, metric })
    }

    pub fn n_features(&self) -> usize {
        self.reference.ncols()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Predicts one label per row of `x`.
    pub fn forward(&self, x: ArrayView2<f32>) -> Result<Vec<usize>> {
        if x.ncols() != self.n_features() {
            return Err(BbGtError::DimensionMismatch {
                expected: self.n_features(),
                actual: x.ncols(),
            });
        }
        let distances = distance_matrix(x, self.reference.view(), self.metric)?;
        majority_vote(distances.view(), &self.labels, self.k)
    }
}
