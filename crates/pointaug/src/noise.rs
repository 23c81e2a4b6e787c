use pointaug_3d::pointcloud::PointCloud;
use rand::Rng;

use crate::error::check_strength;
use crate::sampling::{clipped_normal, normal_vector};
use crate::AugmentError;

/// Legal strength interval of [`jitter`].
pub const JITTER_RANGE: (f64, f64) = (0.0, 10.0);

/// Legal strength interval of [`point_to_noise`].
pub const POINT_TO_NOISE_RANGE: (f64, f64) = (0.0, 0.5);

/// Add clipped Gaussian noise to every coordinate.
///
/// Each coordinate receives an independent offset with standard deviation
/// `0.01 v`, clipped to `±0.005 v`. Normals are left untouched.
///
/// # Arguments
///
/// * `src` - The input point cloud.
/// * `v` - The strength, in `[0, 10]`.
/// * `rng` - The random number generator.
pub fn jitter<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("Jitter", v, JITTER_RANGE.0, JITTER_RANGE.1)?;
    let sigma = 0.01 * v;
    let clip = 0.005 * v;
    log::debug!("Jitter sigma: {sigma} clip: {clip}");

    let mut dst = src.clone();
    for point in dst.points_mut() {
        for coord in point.iter_mut() {
            *coord += clipped_normal(rng, sigma, clip);
        }
    }
    Ok(dst)
}

/// Replace random points by standard normal noise.
///
/// One uniform sample is drawn per point, in order; when it is below `v` the
/// point's coordinates are replaced by a standard normal 3-vector, so each
/// point is replaced with probability `v`. Normals are left untouched.
pub fn point_to_noise<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(
        "PointToNoise",
        v,
        POINT_TO_NOISE_RANGE.0,
        POINT_TO_NOISE_RANGE.1,
    )?;

    let mask = (0..src.len())
        .map(|_| rng.random::<f64>() < v)
        .collect::<Vec<_>>();

    let mut dst = src.clone();
    let mut num_replaced = 0;
    for (point, _) in dst.points_mut().iter_mut().zip(mask).filter(|(_, m)| *m) {
        *point = normal_vector(rng);
        num_replaced += 1;
    }
    log::debug!("PointToNoise replaced {num_replaced} of {} points", src.len());

    Ok(dst)
}
