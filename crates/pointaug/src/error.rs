use pointaug_3d::PointCloudError;
use pointaug_cluster::ClusterError;

/// An error type for the augmentation operators.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AugmentError {
    /// The strength is outside the operator's legal interval.
    #[error("{op} strength must be in [{min}, {max}], got {strength}")]
    StrengthOutOfRange {
        /// Name of the operator.
        op: &'static str,
        /// Requested strength.
        strength: f64,
        /// Lower bound of the legal interval.
        min: f64,
        /// Upper bound of the legal interval.
        max: f64,
    },

    /// The operator needs at least one point to pick a reference from.
    #[error("{op} requires a non-empty point cloud")]
    EmptyPointCloud {
        /// Name of the operator.
        op: &'static str,
    },

    /// Every point was dropped, leaving no point to copy from.
    #[error("RandomDropout dropped all {0} points")]
    AllPointsDropped(usize),

    /// No operator is registered under the given name.
    #[error("Unknown augmentation operator: {0}")]
    UnknownOperator(String),

    /// Error from the point cloud or transform utilities.
    #[error(transparent)]
    PointCloud(#[from] PointCloudError),

    /// Error from the clustering algorithm.
    #[error(transparent)]
    Cluster(#[from] ClusterError),
}

/// Check that `strength` lies in the closed interval `[min, max]`.
pub(crate) fn check_strength(
    op: &'static str,
    strength: f64,
    min: f64,
    max: f64,
) -> Result<(), AugmentError> {
    // NaN fails both comparisons
    if !(min..=max).contains(&strength) {
        return Err(AugmentError::StrengthOutOfRange {
            op,
            strength,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_strength() {
        assert!(check_strength("ScaleX", 0.0, 0.0, 1.0).is_ok());
        assert!(check_strength("ScaleX", 1.0, 0.0, 1.0).is_ok());
        assert_eq!(
            check_strength("ScaleX", 1.5, 0.0, 1.0),
            Err(AugmentError::StrengthOutOfRange {
                op: "ScaleX",
                strength: 1.5,
                min: 0.0,
                max: 1.0,
            })
        );
        assert!(check_strength("ScaleX", -1e-9, 0.0, 1.0).is_err());
        assert!(check_strength("ScaleX", f64::NAN, 0.0, 1.0).is_err());
    }
}
