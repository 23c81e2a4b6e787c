#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod dbscan;
pub use dbscan::Dbscan;

mod error;
pub use error::ClusterError;

/// Label assigned to a point by a clustering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClusterLabel {
    /// The point does not belong to any cluster.
    Noise,
    /// The point belongs to the cluster with the given id.
    Cluster(usize),
}

impl ClusterLabel {
    /// Build a label from the integer convention where `-1` (or any negative value) is noise.
    pub fn from_raw(label: i64) -> Self {
        match usize::try_from(label) {
            Ok(id) => ClusterLabel::Cluster(id),
            Err(_) => ClusterLabel::Noise,
        }
    }

    /// Integer form of the label, `-1` for noise.
    pub fn as_raw(&self) -> i64 {
        match self {
            ClusterLabel::Noise => -1,
            ClusterLabel::Cluster(id) => *id as i64,
        }
    }

    /// Whether the label marks a noise point.
    pub fn is_noise(&self) -> bool {
        matches!(self, ClusterLabel::Noise)
    }
}

/// A clustering algorithm partitioning 3D points into labeled groups plus noise.
pub trait Clusterer {
    /// Compute one label per input point, in input order.
    fn fit(&self, points: &[[f64; 3]]) -> Vec<ClusterLabel>;
}

#[cfg(test)]
mod tests {
    use super::ClusterLabel;

    #[test]
    fn test_label_raw_convention() {
        assert_eq!(ClusterLabel::from_raw(-1), ClusterLabel::Noise);
        assert_eq!(ClusterLabel::from_raw(3), ClusterLabel::Cluster(3));
        assert_eq!(ClusterLabel::Noise.as_raw(), -1);
        assert_eq!(ClusterLabel::Cluster(7).as_raw(), 7);
        assert!(ClusterLabel::Noise.is_noise());
        assert!(!ClusterLabel::Cluster(0).is_noise());
    }
}
