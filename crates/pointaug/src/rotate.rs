use std::f64::consts::PI;

use pointaug_3d::{
    linalg::{matmul33, transform_points3d_inplace},
    pointcloud::PointCloud,
    transforms::{axis_angle_to_rotation_matrix, AXIS_X, AXIS_Y, AXIS_Z},
};
use rand::Rng;

use crate::error::check_strength;
use crate::sampling::{clipped_normal, unit_vector};
use crate::AugmentError;

/// Legal strength interval (maximum angle in radians) of the axis rotations.
pub const ROTATE_RANGE: (f64, f64) = (0.0, 2.0 * PI);

/// Legal strength interval of [`rotate_perturbation`].
pub const PERTURBATION_RANGE: (f64, f64) = (0.0, 10.0);

/// Rotate about the x axis by a random angle of magnitude at most `v`.
///
/// Two uniform samples are drawn: the first flips the sign of `v` when it is
/// above one half, the second scales `v` into the rotation angle. The same
/// rotation is applied to the normals when present.
///
/// # Arguments
///
/// * `src` - The input point cloud.
/// * `v` - The maximum rotation angle in radians, in `[0, 2π]`.
/// * `rng` - The random number generator.
pub fn rotate_x<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    rotate_fixed_axis("RotateX", &AXIS_X, src, v, rng)
}

/// Rotate about the y axis by a random angle of magnitude at most `v`.
///
/// See [`rotate_x`] for the sampling protocol.
pub fn rotate_y<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    rotate_fixed_axis("RotateY", &AXIS_Y, src, v, rng)
}

/// Rotate about the z axis by a random angle of magnitude at most `v`.
///
/// See [`rotate_x`] for the sampling protocol.
///
/// Example:
///
/// ```
/// use pointaug::{rotate::rotate_z, PointCloud};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let cloud = PointCloud::new(vec![[1.0, 0.0, 0.0], [0.0, 0.0, 2.0]], None, None).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let rotated = rotate_z(&cloud, std::f64::consts::PI, &mut rng).unwrap();
/// // points on the axis do not move
/// let p = rotated.points()[1];
/// assert!(p[0].abs() < 1e-12 && p[1].abs() < 1e-12 && (p[2] - 2.0).abs() < 1e-12);
/// ```
pub fn rotate_z<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    rotate_fixed_axis("RotateZ", &AXIS_Z, src, v, rng)
}

/// Rotate about a random axis by a random angle in `[0, v]`.
///
/// The axis is a normalized standard-normal sample, uniform on the unit sphere,
/// drawn before the angle.
pub fn random_axis_rotation<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("RandomAxisRotation", v, ROTATE_RANGE.0, ROTATE_RANGE.1)?;
    let axis = unit_vector(rng);
    let angle = rng.random::<f64>() * v;
    log::debug!("RandomAxisRotation axis: {axis:?} angle: {angle}");
    let rotation = axis_angle_to_rotation_matrix(&axis, angle)?;
    rotate_cloud(src, &rotation)
}

/// Apply a small random rotation composed of three per-axis perturbations.
///
/// The angles are Gaussian with standard deviation `0.008 v`, clipped to
/// `±0.01 v`, and the rotation is `Rz * Ry * Rx`.
pub fn rotate_perturbation<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(
        "RotatePerturbation",
        v,
        PERTURBATION_RANGE.0,
        PERTURBATION_RANGE.1,
    )?;

    let angle_sigma = 0.008 * v;
    let angle_clip = 0.01 * v;
    let angles = [
        clipped_normal(rng, angle_sigma, angle_clip),
        clipped_normal(rng, angle_sigma, angle_clip),
        clipped_normal(rng, angle_sigma, angle_clip),
    ];
    log::debug!("RotatePerturbation angles: {angles:?}");

    let rx = axis_angle_to_rotation_matrix(&AXIS_X, angles[0])?;
    let ry = axis_angle_to_rotation_matrix(&AXIS_Y, angles[1])?;
    let rz = axis_angle_to_rotation_matrix(&AXIS_Z, angles[2])?;
    let rotation = matmul33(&matmul33(&rz, &ry), &rx);

    rotate_cloud(src, &rotation)
}

/// Apply a rotation matrix to the points and, when present, to the normals.
pub fn rotate_cloud(
    src: &PointCloud,
    rotation: &[[f64; 3]; 3],
) -> Result<PointCloud, AugmentError> {
    let mut dst = src.clone();
    let (points, normals) = dst.points_and_normals_mut();
    transform_points3d_inplace(points, rotation)?;
    if let Some(normals) = normals {
        transform_points3d_inplace(normals, rotation)?;
    }
    Ok(dst)
}

fn rotate_fixed_axis<R: Rng + ?Sized>(
    op: &'static str,
    axis: &[f64; 3],
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(op, v, ROTATE_RANGE.0, ROTATE_RANGE.1)?;
    let v = if rng.random::<f64>() > 0.5 { -v } else { v };
    let angle = rng.random::<f64>() * v;
    log::debug!("{op} angle: {angle}");
    let rotation = axis_angle_to_rotation_matrix(axis, angle)?;
    rotate_cloud(src, &rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_points_eq, normals_cloud, xyz_cloud, ScriptedRng};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    fn distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    #[test]
    fn test_rotate_z_scripted_half_turn() -> Result<(), AugmentError> {
        let src = PointCloud::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            None,
            None,
        )?;
        // first draw 0.0 keeps the sign, second draw ~1.0 gives angle ~π
        let mut rng = ScriptedRng::new(vec![0, u64::MAX]);
        let dst = rotate_z(&src, PI, &mut rng)?;

        assert_points_eq(
            dst.points(),
            &[
                [0.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            1e-9,
        );
        Ok(())
    }

    #[test]
    fn test_rotate_sign_flip() -> Result<(), AugmentError> {
        let src = PointCloud::new(vec![[1.0, 0.0, 0.0]], None, None)?;
        // 0.75 flips the sign, 0.5 gives half of the maximum angle
        let mut rng = ScriptedRng::new(vec![3 << 62, 1 << 63]);
        let dst = rotate_z(&src, PI, &mut rng)?;
        // rotation by -π/2 about z maps x to -y
        assert_points_eq(dst.points(), &[[0.0, -1.0, 0.0]], 1e-12);
        Ok(())
    }

    #[test]
    fn test_rotations_preserve_distances() -> Result<(), AugmentError> {
        let src = xyz_cloud(7, 32);
        let mut rng = StdRng::seed_from_u64(8);
        let rotated = [
            rotate_x(&src, 2.0 * PI, &mut rng)?,
            rotate_y(&src, 1.0, &mut rng)?,
            rotate_z(&src, 3.0, &mut rng)?,
            random_axis_rotation(&src, 2.0 * PI, &mut rng)?,
            rotate_perturbation(&src, 10.0, &mut rng)?,
        ];
        for dst in rotated.iter() {
            for i in 0..src.len() {
                for j in (i + 1)..src.len() {
                    assert_relative_eq!(
                        distance(&src.points()[i], &src.points()[j]),
                        distance(&dst.points()[i], &dst.points()[j]),
                        epsilon = 1e-9
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_normals_share_rotation() -> Result<(), AugmentError> {
        let src = normals_cloud(9, 16);
        let mut rng = StdRng::seed_from_u64(10);
        let dst = random_axis_rotation(&src, 2.0 * PI, &mut rng)?;

        // replay the draws to recover the matrix
        let mut replay = StdRng::seed_from_u64(10);
        let axis = unit_vector(&mut replay);
        let angle = replay.random::<f64>() * 2.0 * PI;
        let rotation = axis_angle_to_rotation_matrix(&axis, angle)?;
        let expected = rotate_cloud(&src, &rotation)?;

        assert_points_eq(dst.points(), expected.points(), 1e-12);
        let (Some(normals), Some(src_normals)) = (dst.normals(), src.normals()) else {
            panic!("normals must be kept");
        };
        let mut rotated_normals = src_normals.to_vec();
        transform_points3d_inplace(&mut rotated_normals, &rotation)?;
        assert_points_eq(normals, &rotated_normals, 1e-12);
        Ok(())
    }

    #[test]
    fn test_perturbation_is_small() -> Result<(), AugmentError> {
        let src = PointCloud::new(vec![[1.0, 0.0, 0.0]], None, None)?;
        let mut rng = StdRng::seed_from_u64(11);
        let dst = rotate_perturbation(&src, 10.0, &mut rng)?;
        // three angles of at most 0.1 rad each
        assert!(distance(&src.points()[0], &dst.points()[0]) < 0.3);
        Ok(())
    }

    #[test]
    fn test_zero_strength_is_identity() -> Result<(), AugmentError> {
        let src = normals_cloud(12, 16);
        let mut rng = StdRng::seed_from_u64(13);
        for dst in [
            rotate_x(&src, 0.0, &mut rng)?,
            rotate_y(&src, 0.0, &mut rng)?,
            rotate_z(&src, 0.0, &mut rng)?,
            random_axis_rotation(&src, 0.0, &mut rng)?,
            rotate_perturbation(&src, 0.0, &mut rng)?,
        ] {
            assert_eq!(dst, src);
        }
        Ok(())
    }

    #[test]
    fn test_out_of_range() {
        let src = xyz_cloud(0, 4);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(rotate_x(&src, 7.0, &mut rng).is_err());
        assert!(rotate_perturbation(&src, 10.5, &mut rng).is_err());
        assert!(random_axis_rotation(&src, -0.1, &mut rng).is_err());
    }
}
