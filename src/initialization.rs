//! Deterministic medoid initialization
//!
//! PAM is sensitive to its starting set, and random seeding makes runs hard to
//! reproduce. The first medoid follows Park & Jun's normalized-centrality
//! rule; the remaining ones are spread out by maximizing distance to the
//! medoids already chosen. No RNG is involved anywhere, so two runs over the
//! same input always start from the same set.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::utils::{index_of_max, index_of_min};

/// Select `n_clusters` distinct starting medoid indices from the matrix.
///
/// The returned order is meaningful: position in the medoid set becomes the
/// cluster label, and the swap optimizer scans positions in this order.
pub fn initial_medoids(matrix: &DistanceMatrix, n_clusters: usize) -> Result<Vec<usize>> {
    let n = matrix.len();

    if n_clusters == 0 || n_clusters > n {
        return Err(Error::InvalidClusterCount {
            requested: n_clusters,
            n_items: n,
        });
    }

    let mut medoids = Vec::with_capacity(n_clusters);
    medoids.push(first_medoid(matrix));

    // Spread the remaining medoids: each new one is the non-medoid item with
    // the largest summed distance to everything chosen so far, first
    // occurrence winning ties.
    for _ in 1..n_clusters {
        let candidates: Vec<usize> = (0..n).filter(|i| !medoids.contains(i)).collect();
        let sums: Vec<f64> = candidates
            .iter()
            .map(|&candidate| medoids.iter().map(|&m| matrix.get(candidate, m)).sum())
            .collect();

        match index_of_max(&sums) {
            Some(best) => medoids.push(candidates[best]),
            // n_clusters <= n leaves at least one non-medoid candidate
            None => break,
        }
    }

    Ok(medoids)
}

/// Park & Jun's deterministic choice of the first medoid.
///
/// Each row of the distance matrix is normalized by its sum, and the item
/// whose column sum of normalized distances is smallest wins. That favors an
/// item that is close to everything else relative to how spread out each
/// other item's distances are.
fn first_medoid(matrix: &DistanceMatrix) -> usize {
    let n = matrix.len();

    let row_sums: Vec<f64> = (0..n).map(|i| matrix.row_sum(i)).collect();

    let mut p_sums = vec![0.0; n];
    for j in 0..n {
        // A zero row sum means item j coincides with every other item; its
        // normalized row contributes nothing.
        if row_sums[j] > 0.0 {
            for (i, p_sum) in p_sums.iter_mut().enumerate() {
                *p_sum += matrix.get(j, i) / row_sums[j];
            }
        }
    }

    index_of_min(&p_sums).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, Euclidean};
    use crate::Dissimilarity;

    fn matrix_of(items: &[Vec<f64>]) -> DistanceMatrix {
        DistanceMatrix::from_fn(items, |a, b| Euclidean.distance(a, b)).unwrap()
    }

    #[test]
    fn test_first_medoid_is_central() {
        // Three collinear points; the middle one is the most central.
        let matrix = matrix_of(&[vec![0.0], vec![1.0], vec![2.0]]);

        let medoids = initial_medoids(&matrix, 1).unwrap();
        assert_eq!(medoids, vec![1]);
    }

    #[test]
    fn test_second_medoid_tie_takes_first() {
        // Both endpoints are at distance 1 from the first medoid (the middle
        // point), so the lower index wins.
        let matrix = matrix_of(&[vec![0.0], vec![1.0], vec![2.0]]);

        let medoids = initial_medoids(&matrix, 2).unwrap();
        assert_eq!(medoids, vec![1, 0]);
    }

    #[test]
    fn test_medoids_are_distinct() {
        let items: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64, (i * i) as f64]).collect();
        let matrix = matrix_of(&items);

        let medoids = initial_medoids(&matrix, 5).unwrap();
        assert_eq!(medoids.len(), 5);

        let unique: std::collections::HashSet<_> = medoids.iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn test_identical_items() {
        // All distances zero: row sums are zero, every candidate ties, and
        // index order decides everything.
        let matrix = matrix_of(&[vec![3.0], vec![3.0], vec![3.0]]);

        let medoids = initial_medoids(&matrix, 2).unwrap();
        assert_eq!(medoids, vec![0, 1]);
    }

    #[test]
    fn test_k_equals_n() {
        let matrix = matrix_of(&[vec![0.0], vec![5.0], vec![9.0]]);

        let medoids = initial_medoids(&matrix, 3).unwrap();
        let unique: std::collections::HashSet<_> = medoids.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_invalid_cluster_count() {
        let matrix = matrix_of(&[vec![0.0], vec![1.0]]);

        assert!(initial_medoids(&matrix, 0).is_err());
        assert!(initial_medoids(&matrix, 3).is_err());
    }
}
