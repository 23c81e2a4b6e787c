use pointaug_3d::{
    linalg::{transform_points3d_inplace, IDENTITY33},
    pointcloud::PointCloud,
};
use rand::Rng;

use crate::error::check_strength;
use crate::sampling::{standard_normal, symmetric};
use crate::AugmentError;

/// Legal strength interval of the shear operators.
pub const SHEAR_RANGE: (f64, f64) = (0.0, 0.5);

/// Legal strength interval of [`global_affine`].
pub const AFFINE_RANGE: (f64, f64) = (0.0, 0.01);

/// Legal strength interval of [`piecewise_shear`].
pub const PIECEWISE_SHEAR_RANGE: (f64, f64) = (0.0, 10.0);

/// The plane family of a shear map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShearPlane {
    /// z is sheared along x and y: `z' = z + a x + b y`.
    XY,
    /// x is sheared along y and z: `x' = x + b y + c z`.
    YZ,
    /// y is sheared along x and z: `y' = y + a x + c z`.
    XZ,
}

impl ShearPlane {
    /// The unit-determinant shear matrix with the two off-diagonal coefficients.
    pub fn matrix(&self, first: f64, second: f64) -> [[f64; 3]; 3] {
        let mut m = IDENTITY33;
        match self {
            ShearPlane::XY => {
                m[2][0] = first;
                m[2][1] = second;
            }
            ShearPlane::YZ => {
                m[0][1] = first;
                m[0][2] = second;
            }
            ShearPlane::XZ => {
                m[1][0] = first;
                m[1][2] = second;
            }
        }
        m
    }

    fn name(&self) -> &'static str {
        match self {
            ShearPlane::XY => "ShearXY",
            ShearPlane::YZ => "ShearYZ",
            ShearPlane::XZ => "ShearXZ",
        }
    }
}

/// Shear z along x and y with two coefficients drawn uniformly from `[-v, v]`.
///
/// # Arguments
///
/// * `src` - The input point cloud.
/// * `v` - The strength, in `[0, 0.5]`.
/// * `rng` - The random number generator.
///
/// # Returns
///
/// The sheared point cloud. Normals are left untouched.
pub fn shear_xy<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    shear_plane(ShearPlane::XY, src, v, rng)
}

/// Shear x along y and z with two coefficients drawn uniformly from `[-v, v]`.
pub fn shear_yz<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    shear_plane(ShearPlane::YZ, src, v, rng)
}

/// Shear y along x and z with two coefficients drawn uniformly from `[-v, v]`.
pub fn shear_xz<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    shear_plane(ShearPlane::XZ, src, v, rng)
}

/// Apply a near-identity random linear map `I + v N(0, 1)` to the coordinates.
///
/// The nine Gaussian entries are drawn in row-major order. Normals are left
/// untouched.
pub fn global_affine<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("GlobalAffine", v, AFFINE_RANGE.0, AFFINE_RANGE.1)?;
    let mut affine = IDENTITY33;
    for row in affine.iter_mut() {
        for val in row.iter_mut() {
            *val += standard_normal(rng) * v;
        }
    }
    log::debug!("GlobalAffine matrix: {affine:?}");

    let mut dst = src.clone();
    transform_points3d_inplace(dst.points_mut(), &affine)?;
    Ok(dst)
}

/// Shear small boxes of the cloud independently.
///
/// With `k = ⌊v⌋`, `5 k` boxes of half-size `0.01 k` are centered on randomly
/// chosen points. The points inside each box are sheared in a randomly chosen
/// plane with strength `0.05 v`; points outside are untouched.
///
/// # Errors
///
/// Returns [`AugmentError::EmptyPointCloud`] if the cloud is empty and at
/// least one box must be placed.
pub fn piecewise_shear<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(
        "PiecewiseShear",
        v,
        PIECEWISE_SHEAR_RANGE.0,
        PIECEWISE_SHEAR_RANGE.1,
    )?;

    let level = v.floor();
    let radius = 0.01 * level;
    let num_pieces = 5 * level as usize;
    let magnitude = 0.05 * v;

    if num_pieces > 0 && src.is_empty() {
        return Err(AugmentError::EmptyPointCloud {
            op: "PiecewiseShear",
        });
    }

    let mut dst = src.clone();
    let points = dst.points_mut();

    for _ in 0..num_pieces {
        let center = points[rng.random_range(0..points.len())];
        let plane = match rng.random_range(0..3) {
            0 => ShearPlane::XY,
            1 => ShearPlane::XZ,
            _ => ShearPlane::YZ,
        };
        let shear = plane.matrix(symmetric(rng, magnitude), symmetric(rng, magnitude));

        let in_box = points
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                (p[0] - center[0]).abs() < radius
                    && (p[1] - center[1]).abs() < radius
                    && (p[2] - center[2]).abs() < radius
            })
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        let mut selected = in_box.iter().map(|&i| points[i]).collect::<Vec<_>>();
        transform_points3d_inplace(&mut selected, &shear)?;
        for (&i, p) in in_box.iter().zip(selected) {
            points[i] = p;
        }

        log::debug!(
            "PiecewiseShear {:?} around {:?}: {} points",
            plane,
            center,
            in_box.len()
        );
    }

    Ok(dst)
}

fn shear_plane<R: Rng + ?Sized>(
    plane: ShearPlane,
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(plane.name(), v, SHEAR_RANGE.0, SHEAR_RANGE.1)?;
    let (first, second) = (symmetric(rng, v), symmetric(rng, v));
    log::debug!("{} coefficients: {first} {second}", plane.name());

    let mut dst = src.clone();
    transform_points3d_inplace(dst.points_mut(), &plane.matrix(first, second))?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{normals_cloud, xyz_cloud};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_shear_matrices() {
        assert_eq!(
            ShearPlane::XY.matrix(0.1, 0.2),
            [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.1, 0.2, 1.0]]
        );
        assert_eq!(
            ShearPlane::YZ.matrix(0.1, 0.2),
            [[1.0, 0.1, 0.2], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
        );
        assert_eq!(
            ShearPlane::XZ.matrix(0.1, 0.2),
            [[1.0, 0.0, 0.0], [0.1, 1.0, 0.2], [0.0, 0.0, 1.0]]
        );
    }

    #[test]
    fn test_shear_xy_moves_only_z() -> Result<(), AugmentError> {
        let src = normals_cloud(0, 32);
        let mut rng = StdRng::seed_from_u64(1);
        let dst = shear_xy(&src, 0.5, &mut rng)?;

        let mut replay = StdRng::seed_from_u64(1);
        let (a, b) = (symmetric(&mut replay, 0.5), symmetric(&mut replay, 0.5));
        for (p, q) in src.points().iter().zip(dst.points()) {
            assert_relative_eq!(q[0], p[0], epsilon = 1e-12);
            assert_relative_eq!(q[1], p[1], epsilon = 1e-12);
            assert_relative_eq!(q[2], p[2] + a * p[0] + b * p[1], epsilon = 1e-12);
        }
        assert_eq!(dst.normals(), src.normals());
        Ok(())
    }

    #[test]
    fn test_global_affine_is_near_identity() -> Result<(), AugmentError> {
        let src = xyz_cloud(2, 32);
        let mut rng = StdRng::seed_from_u64(3);
        let dst = global_affine(&src, 0.01, &mut rng)?;
        for (p, q) in src.points().iter().zip(dst.points()) {
            for k in 0..3 {
                // |Δ| <= sum of three entries of roughly 0.01 magnitude on unit coordinates
                assert!((p[k] - q[k]).abs() < 0.2);
            }
        }
        assert_ne!(dst, src);
        Ok(())
    }

    #[test]
    fn test_piecewise_shear_small_strength_is_identity() -> Result<(), AugmentError> {
        let src = xyz_cloud(4, 32);
        let mut rng = StdRng::seed_from_u64(5);
        // ⌊0.9⌋ = 0 boxes
        assert_eq!(piecewise_shear(&src, 0.9, &mut rng)?, src);
        Ok(())
    }

    #[test]
    fn test_piecewise_shear_is_local() -> Result<(), AugmentError> {
        // a dense cluster far from the origin plus a point at the origin
        let mut points = (0..50)
            .map(|i| {
                let t = i as f64 * 1e-3;
                [5.0 + t, 5.0 + 2.0 * t, 5.0 - t]
            })
            .collect::<Vec<_>>();
        points.push([0.0, 0.0, 0.0]);
        let src = PointCloud::new(points, None, None)?;

        let mut rng = StdRng::seed_from_u64(6);
        let dst = piecewise_shear(&src, 10.0, &mut rng)?;
        assert_eq!(dst.len(), src.len());

        // every box map is linear, so the origin never moves
        assert_eq!(dst.points()[50], [0.0, 0.0, 0.0]);
        assert_ne!(&dst.points()[..50], &src.points()[..50]);
        Ok(())
    }

    #[test]
    fn test_piecewise_shear_empty() {
        let src = PointCloud::new(vec![], None, None).expect("empty cloud is valid");
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            piecewise_shear(&src, 2.0, &mut rng),
            Err(AugmentError::EmptyPointCloud {
                op: "PiecewiseShear"
            })
        );
        assert!(piecewise_shear(&src, 0.5, &mut rng).is_ok());
    }

    #[test]
    fn test_zero_strength_is_identity() -> Result<(), AugmentError> {
        let src = normals_cloud(7, 16);
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(shear_xy(&src, 0.0, &mut rng)?, src);
        assert_eq!(shear_yz(&src, 0.0, &mut rng)?, src);
        assert_eq!(shear_xz(&src, 0.0, &mut rng)?, src);
        assert_eq!(global_affine(&src, 0.0, &mut rng)?, src);
        assert_eq!(piecewise_shear(&src, 0.0, &mut rng)?, src);
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let src = xyz_cloud(0, 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(shear_xz(&src, 0.6, &mut rng).is_err());
        assert!(global_affine(&src, 0.02, &mut rng).is_err());
        assert!(piecewise_shear(&src, 11.0, &mut rng).is_err());
    }
}
