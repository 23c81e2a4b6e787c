use pointaug_3d::pointcloud::PointCloud;
use rand::Rng;

use crate::error::check_strength;
use crate::sampling::uniform;
use crate::AugmentError;

/// Legal strength interval of the scaling operators.
pub const SCALE_RANGE: (f64, f64) = (0.0, 1.0);

/// Scale the x coordinate by a factor drawn uniformly from `[1 - v, 1 + v]`.
///
/// # Arguments
///
/// * `src` - The input point cloud.
/// * `v` - The strength, in `[0, 1]`.
/// * `rng` - The random number generator.
///
/// # Returns
///
/// The scaled point cloud. Normals are left untouched.
///
/// Example:
///
/// ```
/// use pointaug::{scale::scale_x, PointCloud};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let cloud = PointCloud::new(vec![[1.0, 1.0, 1.0]], None, None).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let scaled = scale_x(&cloud, 0.5, &mut rng).unwrap();
/// assert!((0.5..1.5).contains(&scaled.points()[0][0]));
/// assert_eq!(scaled.points()[0][1], 1.0);
/// ```
pub fn scale_x<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    scale_single_axis("ScaleX", 0, src, v, rng)
}

/// Scale the y coordinate by a factor drawn uniformly from `[1 - v, 1 + v]`.
pub fn scale_y<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    scale_single_axis("ScaleY", 1, src, v, rng)
}

/// Scale the z coordinate by a factor drawn uniformly from `[1 - v, 1 + v]`.
pub fn scale_z<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    scale_single_axis("ScaleZ", 2, src, v, rng)
}

/// Scale all coordinates by one factor drawn uniformly from `[1 - v, 1 + v]`.
pub fn resize<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("Resize", v, SCALE_RANGE.0, SCALE_RANGE.1)?;
    let factor = uniform(rng, 1.0 - v, 1.0 + v);
    log::debug!("Resize factor: {factor}");
    Ok(scale_axes(src, [factor; 3]))
}

/// Scale each coordinate by an independent factor drawn uniformly from `[1 - v, 1 + v]`.
///
/// The factors are drawn in x, y, z order.
pub fn non_uniform_scale<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("NonUniformScale", v, SCALE_RANGE.0, SCALE_RANGE.1)?;
    let factors = [
        uniform(rng, 1.0 - v, 1.0 + v),
        uniform(rng, 1.0 - v, 1.0 + v),
        uniform(rng, 1.0 - v, 1.0 + v),
    ];
    log::debug!("NonUniformScale factors: {factors:?}");
    Ok(scale_axes(src, factors))
}

fn scale_single_axis<R: Rng + ?Sized>(
    op: &'static str,
    axis: usize,
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(op, v, SCALE_RANGE.0, SCALE_RANGE.1)?;
    let mut factors = [1.0; 3];
    factors[axis] = uniform(rng, 1.0 - v, 1.0 + v);
    log::debug!("{op} factor: {}", factors[axis]);
    Ok(scale_axes(src, factors))
}

fn scale_axes(src: &PointCloud, factors: [f64; 3]) -> PointCloud {
    let mut dst = src.clone();
    for point in dst.points_mut() {
        point[0] *= factors[0];
        point[1] *= factors[1];
        point[2] *= factors[2];
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_points_eq, normals_cloud, xyz_cloud};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_scale_single_axis() -> Result<(), AugmentError> {
        let src = xyz_cloud(0, 64);
        let mut rng = StdRng::seed_from_u64(1);
        let dst = scale_y(&src, 0.3, &mut rng)?;

        let factor = dst.points()[0][1] / src.points()[0][1];
        assert!((0.7..1.3).contains(&factor));
        for (p, q) in src.points().iter().zip(dst.points()) {
            assert_eq!(p[0], q[0]);
            approx::assert_relative_eq!(p[1] * factor, q[1], epsilon = 1e-12);
            assert_eq!(p[2], q[2]);
        }
        Ok(())
    }

    #[test]
    fn test_resize_is_uniform() -> Result<(), AugmentError> {
        let src = PointCloud::new(vec![[1.0, 2.0, 4.0], [-1.0, 0.5, 3.0]], None, None)?;
        let mut rng = StdRng::seed_from_u64(2);
        let dst = resize(&src, 1.0, &mut rng)?;
        let factor = dst.points()[0][0];
        assert!((0.0..2.0).contains(&factor));
        assert_points_eq(
            dst.points(),
            &[[factor, 2.0 * factor, 4.0 * factor], [-factor, 0.5 * factor, 3.0 * factor]],
            1e-12,
        );
        Ok(())
    }

    #[test]
    fn test_non_uniform_scale_keeps_normals() -> Result<(), AugmentError> {
        let src = normals_cloud(3, 32);
        let mut rng = StdRng::seed_from_u64(4);
        let dst = non_uniform_scale(&src, 0.9, &mut rng)?;
        assert_eq!(dst.normals(), src.normals());
        assert_eq!(dst.len(), src.len());
        Ok(())
    }

    #[test]
    fn test_zero_strength_is_identity() -> Result<(), AugmentError> {
        let src = normals_cloud(5, 16);
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(scale_x(&src, 0.0, &mut rng)?, src);
        assert_eq!(scale_z(&src, 0.0, &mut rng)?, src);
        assert_eq!(resize(&src, 0.0, &mut rng)?, src);
        assert_eq!(non_uniform_scale(&src, 0.0, &mut rng)?, src);
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let src = xyz_cloud(0, 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            scale_x(&src, 1.1, &mut rng),
            Err(AugmentError::StrengthOutOfRange { op: "ScaleX", .. })
        ));
        assert!(resize(&src, -0.1, &mut rng).is_err());
    }
}
