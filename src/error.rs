//! Error types for the k-medoids crate

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during clustering operations
#[derive(Error, Debug)]
pub enum Error {
    /// The item sequence was empty
    #[error("Invalid input: item sequence is empty")]
    EmptyInput,

    /// Requested cluster count is incompatible with the dataset
    #[error("Invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters
        requested: usize,
        /// Number of items in the dataset
        n_items: usize,
    },

    /// Invalid configuration parameter
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Error message
        message: String,
    },

    /// The distance function produced NaN or infinity
    #[error("Non-finite distance between items {i} and {j}")]
    NonFiniteDistance {
        /// Index of the first item of the offending pair
        i: usize,
        /// Index of the second item of the offending pair
        j: usize,
    },
}

impl Error {
    /// Create a new InvalidParameter error
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
