//! Partitioning Around Medoids (PAM) clustering

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::initialization::initial_medoids;
use crate::utils::{index_of_min, validate_parameters};
use ndarray::Array1;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// K-medoids clustering via PAM local search.
///
/// Clusters are represented by actual input items (medoids), never synthetic
/// centroids, so any item type works as long as a pairwise distance function
/// exists. The whole pipeline is deterministic: the same items, distance
/// function and configuration always produce the same labels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KMedoids {
    /// Number of clusters
    pub n_clusters: usize,
    /// Maximum number of swap-search iterations
    pub max_iter: usize,
    /// Build the distance matrix in parallel
    pub parallel: bool,
    /// Enable verbose output
    pub verbose: bool,
}

/// Result of k-medoids clustering
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KMedoidsResult {
    /// Cluster labels for each item, positionally aligned with the input
    pub labels: Array1<usize>,
    /// Indices of the final medoids; position in this vector is the label
    pub medoid_indices: Vec<usize>,
    /// Final total cost (sum of distances from non-medoids to their medoid)
    pub cost: f64,
    /// Number of swap-search iterations performed
    pub n_iter: usize,
    /// Whether the swap search converged before hitting `max_iter`
    pub converged: bool,
}

impl Default for KMedoids {
    fn default() -> Self {
        Self {
            n_clusters: 8,
            max_iter: 100,
            parallel: true,
            verbose: false,
        }
    }
}

impl KMedoids {
    /// Create a new k-medoids clusterer with the specified number of clusters
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            ..Default::default()
        }
    }

    /// Set the maximum number of swap-search iterations
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Enable or disable parallel distance-matrix construction
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Cluster `items` using the supplied distance function.
    ///
    /// The distance function is expected to be symmetric and zero on equal
    /// inputs; it must return a finite value for every pair or the run fails
    /// with [`Error::NonFiniteDistance`].
    pub fn fit<T, F>(&self, items: &[T], distance_fn: F) -> Result<KMedoidsResult>
    where
        T: Sync,
        F: Fn(&T, &T) -> f64 + Sync,
    {
        validate_parameters(self.max_iter)?;

        if items.is_empty() {
            return Err(Error::EmptyInput);
        }

        let matrix = if self.parallel {
            DistanceMatrix::from_fn_parallel(items, distance_fn)?
        } else {
            DistanceMatrix::from_fn(items, distance_fn)?
        };

        self.fit_from_matrix(&matrix)
    }

    /// Cluster using a precomputed distance matrix.
    ///
    /// Useful when the same matrix feeds several runs with different `k`, or
    /// when distances come from an external source.
    pub fn fit_from_matrix(&self, matrix: &DistanceMatrix) -> Result<KMedoidsResult> {
        validate_parameters(self.max_iter)?;

        if matrix.is_empty() {
            return Err(Error::EmptyInput);
        }

        if self.n_clusters == 0 || self.n_clusters > matrix.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: matrix.len(),
            });
        }

        let mut medoids = initial_medoids(matrix, self.n_clusters)?;
        let mut best_cost = total_cost(matrix, &medoids);

        let mut n_iter = 0;
        let mut converged = false;

        for iter in 0..self.max_iter {
            n_iter = iter + 1;

            if !improve_once(matrix, &mut medoids, &mut best_cost) {
                converged = true;
                if self.verbose {
                    println!("K-medoids converged after {} iterations", n_iter);
                }
                break;
            }

            if self.verbose && n_iter % 10 == 0 {
                println!("K-medoids iteration {}, cost {}", n_iter, best_cost);
            }
        }

        let labels = assign_labels(matrix, &medoids);

        Ok(KMedoidsResult {
            labels,
            medoid_indices: medoids,
            cost: best_cost,
            n_iter,
            converged,
        })
    }

    /// Fit the model and return just the cluster labels
    pub fn fit_predict<T, F>(&self, items: &[T], distance_fn: F) -> Result<Array1<usize>>
    where
        T: Sync,
        F: Fn(&T, &T) -> f64 + Sync,
    {
        let result = self.fit(items, distance_fn)?;
        Ok(result.labels)
    }
}

/// Sum of distances from every non-medoid item to its nearest medoid.
///
/// Medoid-to-medoid distances are excluded by definition.
fn total_cost(matrix: &DistanceMatrix, medoids: &[usize]) -> f64 {
    let mut total = 0.0;

    for i in 0..matrix.len() {
        if medoids.contains(&i) {
            continue;
        }

        let nearest = medoids
            .iter()
            .map(|&m| matrix.get(m, i))
            .fold(f64::INFINITY, f64::min);
        total += nearest;
    }

    total
}

/// One first-improvement scan over the swap neighborhood.
///
/// Positions are tried in medoid-set order and replacement candidates in item
/// index order. The first swap that strictly lowers the cost is kept and the
/// scan stops immediately; the caller restarts with the updated set. Returns
/// `false` when a full scan finds no improving swap, i.e. a local optimum.
fn improve_once(matrix: &DistanceMatrix, medoids: &mut [usize], best_cost: &mut f64) -> bool {
    // Candidates are fixed at the start of the scan; an accepted swap ends
    // the scan before the set changes.
    let non_medoids: Vec<usize> = (0..matrix.len())
        .filter(|i| !medoids.contains(i))
        .collect();

    for position in 0..medoids.len() {
        let original = medoids[position];

        for &candidate in &non_medoids {
            medoids[position] = candidate;

            let cost = total_cost(matrix, medoids);
            if cost < *best_cost {
                *best_cost = cost;
                return true;
            }
        }

        medoids[position] = original;
    }

    false
}

/// Label every item with the position of its nearest medoid.
///
/// Ties go to the lowest medoid-set position (strict `<` scan). Medoids label
/// themselves, since their distance to themselves is zero.
fn assign_labels(matrix: &DistanceMatrix, medoids: &[usize]) -> Array1<usize> {
    let mut labels = Array1::zeros(matrix.len());

    for i in 0..matrix.len() {
        let medoid_distances: Vec<f64> = medoids.iter().map(|&m| matrix.get(m, i)).collect();
        labels[i] = index_of_min(&medoid_distances).unwrap_or(0);
    }

    labels
}
