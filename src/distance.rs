//! Pairwise distance table and ready-made dissimilarity measures

use crate::error::{Error, Result};
use ndarray::Array2;
use rayon::prelude::*;

/// Trait for computing a dissimilarity between two items of the same type.
///
/// The engine is polymorphic over this one capability only; it never inspects
/// item structure. Implementations are expected to be symmetric and return
/// zero for equal inputs, but neither property is verified.
pub trait Dissimilarity<T: ?Sized> {
    /// Compute the dissimilarity between two items
    fn distance(&self, a: &T, b: &T) -> f64;
}

/// Euclidean (L2) distance between numeric vectors
#[derive(Debug, Clone)]
pub struct Euclidean;

impl<S: AsRef<[f64]>> Dissimilarity<S> for Euclidean {
    fn distance(&self, a: &S, b: &S) -> f64 {
        let (a, b) = (a.as_ref(), b.as_ref());
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Manhattan (L1) distance between numeric vectors
#[derive(Debug, Clone)]
pub struct Manhattan;

impl<S: AsRef<[f64]>> Dissimilarity<S> for Manhattan {
    fn distance(&self, a: &S, b: &S) -> f64 {
        let (a, b) = (a.as_ref(), b.as_ref());
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
    }
}

/// Full symmetric table of pairwise distances between the items of one run.
///
/// Built once per clustering run and immutable thereafter. Only the upper
/// triangle is evaluated through the distance function; the lower triangle is
/// mirrored and the diagonal is zero. Every evaluated distance is checked to
/// be finite at build time, so downstream code can compare entries freely.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    values: Array2<f64>,
}

impl DistanceMatrix {
    /// Build the matrix sequentially, one row of the upper triangle at a time
    pub fn from_fn<T, F>(items: &[T], distance_fn: F) -> Result<Self>
    where
        F: Fn(&T, &T) -> f64,
    {
        let n = items.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| distance_fn(&items[i], &items[j]))
                    .collect()
            })
            .collect();

        Self::from_upper_rows(n, rows)
    }

    /// Build the matrix with rows of the upper triangle computed in parallel.
    ///
    /// The result is identical to [`DistanceMatrix::from_fn`]: rows are merged
    /// in index order and validated sequentially, so the reported error pair
    /// (if any) does not depend on thread scheduling.
    pub fn from_fn_parallel<T, F>(items: &[T], distance_fn: F) -> Result<Self>
    where
        T: Sync,
        F: Fn(&T, &T) -> f64 + Sync,
    {
        let n = items.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| distance_fn(&items[i], &items[j]))
                    .collect()
            })
            .collect();

        Self::from_upper_rows(n, rows)
    }

    /// Mirror upper-triangle rows into a full matrix, rejecting non-finite
    /// entries. Scans in index order so the first offending pair wins.
    fn from_upper_rows(n: usize, rows: Vec<Vec<f64>>) -> Result<Self> {
        let mut values = Array2::zeros((n, n));

        for (i, row) in rows.into_iter().enumerate() {
            for (offset, d) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                if !d.is_finite() {
                    return Err(Error::NonFiniteDistance { i, j });
                }
                values[[i, j]] = d;
                values[[j, i]] = d;
            }
        }

        Ok(Self { values })
    }

    /// Number of items the matrix was built over
    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    /// Whether the matrix covers zero items (never true for a built matrix)
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Distance between items `i` and `j`
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    /// Sum of distances from item `i` to every other item
    pub fn row_sum(&self, i: usize) -> f64 {
        self.values.row(i).sum()
    }
}
