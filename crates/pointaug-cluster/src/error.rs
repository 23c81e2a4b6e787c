/// An error type for the clustering algorithms.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// The neighbourhood radius is not a positive finite number.
    #[error("DBSCAN radius must be positive and finite, got {0}")]
    InvalidEps(f64),

    /// The minimum neighbourhood size is negative or not finite.
    #[error("DBSCAN min_samples must be non-negative and finite, got {0}")]
    InvalidMinSamples(f64),
}
