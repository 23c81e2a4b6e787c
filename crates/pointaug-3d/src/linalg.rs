use crate::PointCloudError;

/// The 3x3 identity matrix.
pub const IDENTITY33: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Multiply two 3x3 matrices, `a * b`.
///
/// Example:
///
/// ```
/// use pointaug_3d::linalg::{matmul33, IDENTITY33};
///
/// let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
/// assert_eq!(matmul33(&a, &IDENTITY33), a);
/// ```
pub fn matmul33(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut m = [[0.0; 3]; 3];
    for (i, row) in m.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    m
}

/// Apply a linear map to a set of 3D vectors.
///
/// Each destination vector is `dst_m_src * src`, i.e. the point block is
/// multiplied as `src_points @ dst_m_srcᵀ`.
///
/// # Arguments
///
/// * `src_points` - A set of vectors to be transformed.
/// * `dst_m_src` - A 3x3 matrix in row-major order.
/// * `dst_points` - A pre-allocated slice to store the transformed vectors.
///
/// # Errors
///
/// Returns [`PointCloudError::MismatchedLength`] if the two slices differ in length.
///
/// Example:
///
/// ```
/// use pointaug_3d::linalg::{transform_points3d, IDENTITY33};
///
/// let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// transform_points3d(&src_points, &IDENTITY33, &mut dst_points).unwrap();
/// assert_eq!(dst_points, src_points);
/// ```
pub fn transform_points3d(
    src_points: &[[f64; 3]],
    dst_m_src: &[[f64; 3]; 3],
    dst_points: &mut [[f64; 3]],
) -> Result<(), PointCloudError> {
    if src_points.len() != dst_points.len() {
        return Err(PointCloudError::MismatchedLength {
            attribute: "dst_points",
            expected: src_points.len(),
            actual: dst_points.len(),
        });
    }

    if src_points.is_empty() {
        return Ok(());
    }

    // Nx3 view of the points and 3x3 view of the map
    let points_in_src = faer::Mat::<f64>::from_fn(src_points.len(), 3, |i, j| src_points[i][j]);
    let dst_m_src_mat = faer::Mat::<f64>::from_fn(3, 3, |i, j| dst_m_src[i][j]);

    let points_in_dst = points_in_src.as_ref() * dst_m_src_mat.as_ref().transpose();

    for (i, point_dst) in dst_points.iter_mut().enumerate() {
        for (j, val) in point_dst.iter_mut().enumerate() {
            *val = points_in_dst.read(i, j);
        }
    }

    Ok(())
}

/// Apply a linear map to a set of 3D vectors in place.
pub fn transform_points3d_inplace(
    points: &mut [[f64; 3]],
    dst_m_src: &[[f64; 3]; 3],
) -> Result<(), PointCloudError> {
    let src_points = points.to_vec();
    transform_points3d(&src_points, dst_m_src, points)
}
