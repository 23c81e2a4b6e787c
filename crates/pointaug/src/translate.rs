use pointaug_3d::pointcloud::PointCloud;
use rand::Rng;

use crate::error::check_strength;
use crate::sampling::symmetric;
use crate::AugmentError;

/// Legal strength interval of the translation operators.
pub const TRANSLATE_RANGE: (f64, f64) = (0.0, 1.0);

/// Shift the x coordinate by an offset drawn uniformly from `[-v, v]`.
pub fn translate_x<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    translate_single_axis("TranslateX", 0, src, v, rng)
}

/// Shift the y coordinate by an offset drawn uniformly from `[-v, v]`.
pub fn translate_y<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    translate_single_axis("TranslateY", 1, src, v, rng)
}

/// Shift the z coordinate by an offset drawn uniformly from `[-v, v]`.
pub fn translate_z<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    translate_single_axis("TranslateZ", 2, src, v, rng)
}

/// Shift every coordinate by independent offsets drawn uniformly from `[-v, v]`.
pub fn non_uniform_translate<R: Rng + ?Sized>(
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength("NonUniformTranslate", v, TRANSLATE_RANGE.0, TRANSLATE_RANGE.1)?;
    let offset = [symmetric(rng, v), symmetric(rng, v), symmetric(rng, v)];
    log::debug!("NonUniformTranslate offset: {offset:?}");
    Ok(translate_axes(src, offset))
}

fn translate_single_axis<R: Rng + ?Sized>(
    op: &'static str,
    axis: usize,
    src: &PointCloud,
    v: f64,
    rng: &mut R,
) -> Result<PointCloud, AugmentError> {
    check_strength(op, v, TRANSLATE_RANGE.0, TRANSLATE_RANGE.1)?;
    let mut offset = [0.0; 3];
    offset[axis] = symmetric(rng, v);
    log::debug!("{op} offset: {}", offset[axis]);
    Ok(translate_axes(src, offset))
}

fn translate_axes(src: &PointCloud, offset: [f64; 3]) -> PointCloud {
    let mut dst = src.clone();
    for point in dst.points_mut() {
        point[0] += offset[0];
        point[1] += offset[1];
        point[2] += offset[2];
    }
    dst
}
