use crate::PointCloudError;

/// Unit vector along the x axis.
pub const AXIS_X: [f64; 3] = [1.0, 0.0, 0.0];

/// Unit vector along the y axis.
pub const AXIS_Y: [f64; 3] = [0.0, 1.0, 0.0];

/// Unit vector along the z axis.
pub const AXIS_Z: [f64; 3] = [0.0, 0.0, 1.0];

/// Compute the rotation matrix from an axis and angle.
///
/// Uses the Rodrigues formula `R = cos(θ) I + sin(θ) [u]ₓ + (1 - cos(θ)) u uᵀ`
/// where `u` is the normalized axis and `[u]ₓ` its cross-product matrix.
///
/// # Arguments
///
/// * `axis` - The axis of rotation. It does not need to be a unit vector.
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The rotation matrix in row-major order.
///
/// # Errors
///
/// Returns [`PointCloudError::ZeroAxis`] if the axis has (close to) zero length.
///
/// Example:
///
/// ```
/// use pointaug_3d::transforms::axis_angle_to_rotation_matrix;
///
/// let rotation = axis_angle_to_rotation_matrix(&[0.0, 0.0, 2.0], 0.0).unwrap();
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn axis_angle_to_rotation_matrix(
    axis: &[f64; 3],
    angle: f64,
) -> Result<[[f64; 3]; 3], PointCloudError> {
    // normalize the vector
    let magnitude = (axis[0].powi(2) + axis[1].powi(2) + axis[2].powi(2)).sqrt();
    if magnitude < 1e-10 {
        return Err(PointCloudError::ZeroAxis);
    }
    let u = [axis[0] / magnitude, axis[1] / magnitude, axis[2] / magnitude];

    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;

    let cross = skew(&u);

    let mut rotation = [[0.0; 3]; 3];
    for (i, row) in rotation.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            let identity = if i == j { c } else { 0.0 };
            *val = identity + s * cross[i][j] + t * u[i] * u[j];
        }
    }

    Ok(rotation)
}

/// Cross-product (skew-symmetric) matrix of a 3-vector.
pub fn skew(v: &[f64; 3]) -> [[f64; 3]; 3] {
    [[0.0, -v[2], v[1]], [v[2], 0.0, -v[0]], [-v[1], v[0], 0.0]]
}
