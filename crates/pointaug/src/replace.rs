use std::collections::HashMap;

use pointaug_3d::pointcloud::PointCloud;
use pointaug_cluster::{ClusterLabel, Clusterer, Dbscan};
use rand::Rng;

use crate::error::check_strength;
use crate::AugmentError;

/// Legal strength interval (drop probability) of [`random_dropout`].
pub const DROPOUT_RANGE: (f64, f64) = (0.5, 0.875);

/// Legal strength interval (ball radius) of [`random_erase`].
pub const ERASE_RANGE: (f64, f64) = (0.0, 0.5);

/// Legal strength interval of [`dbscan`].
pub const DBSCAN_RANGE: (f64, f64) = (0.0, 10.0);

/// Drop random points by overwriting them with the first kept point.
///
/// One uniform sample is drawn per point, in order, before any row is
/// touched; point `i` is dropped when its sample is below `v`. Dropped rows
/// (position, normal and color) become copies of the first kept row, so the
/// number of points does not change.
///
/// # Arguments
///
/// * `src` - The input point cloud.
/// * `v` - The drop probability, in `[0.5, 0.875]`.
/// * `rng` - The random number generator.
///
/// # Errors
///
/// Returns [`AugmentError::AllPointsDropped`] if no point is kept. An empty
/// cloud is returned unchanged.
pub fn random_dropout<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("RandomDropout", v, DROPOUT_RANGE.0, DROPOUT_RANGE.1)?;

    let dropped = (0..src.len())
        .map(|_| rng.random::<f64>() < v)
        .collect::<Vec<_>>();

    let mut dst = src.clone();
    if dst.is_empty() {
        return Ok(dst);
    }

    let Some(kept) = dropped.iter().position(|d| !d) else {
        return Err(AugmentError::AllPointsDropped(src.len()));
    };

    let mut num_dropped = 0;
    for (i, _) in dropped.iter().enumerate().filter(|(_, d)| **d) {
        dst.copy_row(kept, i);
        num_dropped += 1;
    }
    log::debug!(
        "RandomDropout dropped {num_dropped} of {} points, source row {kept}",
        src.len()
    );

    Ok(dst)
}

/// Erase a ball of points by collapsing it onto its center.
///
/// A center point is drawn uniformly; every point whose position is within
/// Euclidean distance `v` of the center (inclusive) is overwritten with the
/// center's full row.
///
/// # Errors
///
/// Returns [`AugmentError::EmptyPointCloud`] if the cloud is empty.
pub fn random_erase<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("RandomErase", v, ERASE_RANGE.0, ERASE_RANGE.1)?;
    if src.is_empty() {
        return Err(AugmentError::EmptyPointCloud { op: "RandomErase" });
    }

    let center_idx = rng.random_range(0..src.len());
    let center = src.points()[center_idx];
    let radius_sq = v * v;

    let mut dst = src.clone();
    let mut num_erased = 0;
    for (i, p) in src.points().iter().enumerate() {
        let dist_sq =
            (p[0] - center[0]).powi(2) + (p[1] - center[1]).powi(2) + (p[2] - center[2]).powi(2);
        if dist_sq <= radius_sq {
            dst.copy_row(center_idx, i);
            num_erased += 1;
        }
    }
    log::debug!("RandomErase center {center_idx} radius {v}: {num_erased} points");

    Ok(dst)
}

/// Collapse dense clusters found by DBSCAN.
///
/// Clusters are computed with `eps = 0.05 v` and `min_samples = 2 v`. Every
/// point of a cluster gets all three coordinates set to the mean of the
/// cluster's pooled x, y and z values; noise points are untouched. With
/// `v = 0` the radius is zero and the cloud is returned unchanged.
///
/// The generator is not used; it is accepted to keep the operator signature
/// uniform.
pub fn dbscan<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    _rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("DBSCAN", v, DBSCAN_RANGE.0, DBSCAN_RANGE.1)?;
    let eps = 0.05 * v;
    if eps == 0.0 {
        return Ok(src.clone());
    }
    let clusterer = Dbscan::new(eps, 2.0 * v)?;
    Ok(cluster_collapse(src, &clusterer))
}

/// Collapse every cluster found by `clusterer` onto the scalar mean of its coordinates.
///
/// See [`dbscan`] for the collapse rule.
pub fn cluster_collapse<C: Clusterer + ?Sized>(src: &PointCloud, clusterer: &C) -> PointCloud {
    let labels = clusterer.fit(src.points());

    // pooled coordinate sum and point count per cluster
    let mut stats: HashMap<usize, (f64, usize)> = HashMap::new();
    for (p, label) in src.points().iter().zip(&labels) {
        if let ClusterLabel::Cluster(id) = label {
            let entry = stats.entry(*id).or_insert((0.0, 0));
            entry.0 += p[0] + p[1] + p[2];
            entry.1 += 1;
        }
    }

    let mut dst = src.clone();
    for (p, label) in dst.points_mut().iter_mut().zip(&labels) {
        if let ClusterLabel::Cluster(id) = label {
            if let Some((sum, count)) = stats.get(id) {
                *p = [sum / (3 * count) as f64; 3];
            }
        }
    }
    log::debug!("Cluster collapse merged {} clusters", stats.len());

    dst
}
