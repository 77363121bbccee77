//! Numeric helpers shared by the clustering pipeline

use crate::error::{Error, Result};
use ndarray::ArrayView1;

/// Index of the smallest value in a slice, or `None` for an empty slice.
///
/// Ties are broken toward the first occurrence (strict `<` scan). The medoid
/// selections and the cluster assignment all rely on this policy.
pub fn index_of_min(values: &[f64]) -> Option<usize> {
    let mut best_index = 0;
    let mut best_value = *values.first()?;

    for (i, &value) in values.iter().enumerate().skip(1) {
        if value < best_value {
            best_value = value;
            best_index = i;
        }
    }

    Some(best_index)
}

/// Index of the largest value in a slice, or `None` for an empty slice.
///
/// Ties are broken toward the first occurrence, matching [`index_of_min`].
pub fn index_of_max(values: &[f64]) -> Option<usize> {
    let mut best_index = 0;
    let mut best_value = *values.first()?;

    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > best_value {
            best_value = value;
            best_index = i;
        }
    }

    Some(best_index)
}

/// Median of a slice, or `None` for an empty slice.
///
/// An even number of values averages the two middle ones. The input is not
/// required to be sorted.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid] + sorted[mid - 1]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Number of items assigned to each cluster
pub fn cluster_sizes(labels: ArrayView1<usize>, n_clusters: usize) -> Vec<usize> {
    let mut sizes = vec![0; n_clusters];

    for &cluster_id in labels.iter() {
        if cluster_id < n_clusters {
            sizes[cluster_id] += 1;
        }
    }

    sizes
}

/// Validate clustering parameters.
///
/// Cluster-count bounds are not checked here: a bad `n_clusters` is reported
/// as [`Error::InvalidClusterCount`](crate::Error::InvalidClusterCount)
/// against the dataset size by the clustering entry points.
pub fn validate_parameters(max_iter: usize) -> Result<()> {
    if max_iter == 0 {
        return Err(Error::invalid_parameter("max_iter", "must be > 0"));
    }

    Ok(())
}
