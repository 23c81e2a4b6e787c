//! Placeholders for non-linear deformations.
//!
//! Both operators currently return the input unchanged for any strength and do
//! not draw from the generator.

use pointaug_3d::pointcloud::PointCloud;
use rand::Rng;

use crate::AugmentError;

/// Grid distortion. Currently a no-op.
pub fn grid_distortion<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    _rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    log::trace!("GridDistortion is a no-op (strength {v})");
    Ok(src.clone())
}

/// Elastic deformation. Currently a no-op.
pub fn elastic_deformation<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    _rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    log::trace!("ElasticDeformation is a no-op (strength {v})");
    Ok(src.clone())
}
