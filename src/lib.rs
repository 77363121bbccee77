//! # K-medoids (PAM) Clustering
//!
//! This crate implements Partitioning Around Medoids (PAM): it partitions a
//! collection of arbitrary items into `k` groups using only a caller-supplied
//! pairwise distance function. Each cluster is represented by an actual input
//! item (a medoid), never a synthetic centroid, so the method works for any
//! item type — strings, sequences, categorical records — as long as a
//! symmetric distance function exists.
//!
//! ## Features
//!
//! - **Distance-function polymorphism**: cluster any item type via a single
//!   `Fn(&T, &T) -> f64` capability
//! - **Deterministic**: no RNG anywhere; identical inputs always produce
//!   identical medoids and labels
//! - Greedy first-improvement swap search with a configurable iteration cap
//! - Parallel distance-matrix construction via Rayon (deterministic merge)
//!
//! ## Example
//!
//! ```rust
//! use kmedoid::KMedoids;
//!
//! let items = vec![
//!     vec![1.0, 1.0],
//!     vec![1.5, 1.2],
//!     vec![9.0, 9.0],
//!     vec![9.2, 8.8],
//! ];
//!
//! let euclidean = |a: &Vec<f64>, b: &Vec<f64>| {
//!     a.iter()
//!         .zip(b.iter())
//!         .map(|(x, y)| (x - y).powi(2))
//!         .sum::<f64>()
//!         .sqrt()
//! };
//!
//! let result = KMedoids::new(2).fit(&items, euclidean).unwrap();
//! assert_eq!(result.labels[0], result.labels[1]);
//! assert_ne!(result.labels[0], result.labels[2]);
//! ```

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod error;
pub mod initialization;
pub mod kmedoids;
pub mod utils;

pub use distance::{Dissimilarity, DistanceMatrix, Euclidean, Manhattan};
pub use error::{Error, Result};
pub use initialization::initial_medoids;
pub use kmedoids::{KMedoids, KMedoidsResult};

/// Re-export commonly used types from ndarray
pub use ndarray::{Array1, ArrayView1};
