use std::fmt;
use std::str::FromStr;

use pointaug_3d::pointcloud::PointCloud;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{deform, noise, replace, rotate, scale, shear, translate, AugmentError};

/// Every augmentation operator, addressable by its canonical name.
///
/// The serde representation is the canonical name, e.g. `"RotateZ"` or `"DBSCAN"`.
///
/// Example:
///
/// ```
/// use pointaug::{Augmentation, PointCloud};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let op: Augmentation = "Jitter".parse().unwrap();
/// assert_eq!(op.strength_range(), Some((0.0, 10.0)));
///
/// let cloud = PointCloud::new(vec![[0.0, 0.0, 0.0]; 4], None, None).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let jittered = op.apply(&cloud, 1.0, &mut rng).unwrap();
/// assert_eq!(jittered.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Augmentation {
    /// [`scale::scale_x`]
    ScaleX,
    /// [`scale::scale_y`]
    ScaleY,
    /// [`scale::scale_z`]
    ScaleZ,
    /// [`scale::resize`]
    Resize,
    /// [`scale::non_uniform_scale`]
    NonUniformScale,
    /// [`rotate::rotate_x`]
    RotateX,
    /// [`rotate::rotate_y`]
    RotateY,
    /// [`rotate::rotate_z`]
    RotateZ,
    /// [`rotate::random_axis_rotation`]
    RandomAxisRotation,
    /// [`rotate::rotate_perturbation`]
    RotatePerturbation,
    /// [`translate::translate_x`]
    TranslateX,
    /// [`translate::translate_y`]
    TranslateY,
    /// [`translate::translate_z`]
    TranslateZ,
    /// [`translate::non_uniform_translate`]
    NonUniformTranslate,
    /// [`shear::shear_xy`]
    ShearXY,
    /// [`shear::shear_yz`]
    ShearYZ,
    /// [`shear::shear_xz`]
    ShearXZ,
    /// [`shear::global_affine`]
    GlobalAffine,
    /// [`shear::piecewise_shear`]
    PiecewiseShear,
    /// [`noise::jitter`]
    Jitter,
    /// [`noise::point_to_noise`]
    PointToNoise,
    /// [`replace::random_dropout`]
    RandomDropout,
    /// [`replace::random_erase`]
    RandomErase,
    /// [`replace::dbscan`]
    #[serde(rename = "DBSCAN")]
    Dbscan,
    /// [`deform::grid_distortion`]
    GridDistortion,
    /// [`deform::elastic_deformation`]
    ElasticDeformation,
}

impl Augmentation {
    /// All registered operators.
    pub const ALL: [Augmentation; 26] = [
        Augmentation::ScaleX,
        Augmentation::ScaleY,
        Augmentation::ScaleZ,
        Augmentation::Resize,
        Augmentation::NonUniformScale,
        Augmentation::RotateX,
        Augmentation::RotateY,
        Augmentation::RotateZ,
        Augmentation::RandomAxisRotation,
        Augmentation::RotatePerturbation,
        Augmentation::TranslateX,
        Augmentation::TranslateY,
        Augmentation::TranslateZ,
        Augmentation::NonUniformTranslate,
        Augmentation::ShearXY,
        Augmentation::ShearYZ,
        Augmentation::ShearXZ,
        Augmentation::GlobalAffine,
        Augmentation::PiecewiseShear,
        Augmentation::Jitter,
        Augmentation::PointToNoise,
        Augmentation::RandomDropout,
        Augmentation::RandomErase,
        Augmentation::Dbscan,
        Augmentation::GridDistortion,
        Augmentation::ElasticDeformation,
    ];

    /// The canonical operator name.
    pub fn name(&self) -> &'static str {
        match self {
            Augmentation::ScaleX => "ScaleX",
            Augmentation::ScaleY => "ScaleY",
            Augmentation::ScaleZ => "ScaleZ",
            Augmentation::Resize => "Resize",
            Augmentation::NonUniformScale => "NonUniformScale",
            Augmentation::RotateX => "RotateX",
            Augmentation::RotateY => "RotateY",
            Augmentation::RotateZ => "RotateZ",
            Augmentation::RandomAxisRotation => "RandomAxisRotation",
            Augmentation::RotatePerturbation => "RotatePerturbation",
            Augmentation::TranslateX => "TranslateX",
            Augmentation::TranslateY => "TranslateY",
            Augmentation::TranslateZ => "TranslateZ",
            Augmentation::NonUniformTranslate => "NonUniformTranslate",
            Augmentation::ShearXY => "ShearXY",
            Augmentation::ShearYZ => "ShearYZ",
            Augmentation::ShearXZ => "ShearXZ",
            Augmentation::GlobalAffine => "GlobalAffine",
            Augmentation::PiecewiseShear => "PiecewiseShear",
            Augmentation::Jitter => "Jitter",
            Augmentation::PointToNoise => "PointToNoise",
            Augmentation::RandomDropout => "RandomDropout",
            Augmentation::RandomErase => "RandomErase",
            Augmentation::Dbscan => "DBSCAN",
            Augmentation::GridDistortion => "GridDistortion",
            Augmentation::ElasticDeformation => "ElasticDeformation",
        }
    }

    /// The closed interval of legal strengths, `None` when any strength is accepted.
    pub fn strength_range(&self) -> Option<(f64, f64)> {
        let range = match self {
            Augmentation::ScaleX
            | Augmentation::ScaleY
            | Augmentation::ScaleZ
            | Augmentation::Resize
            | Augmentation::NonUniformScale => scale::SCALE_RANGE,
            Augmentation::RotateX
            | Augmentation::RotateY
            | Augmentation::RotateZ
            | Augmentation::RandomAxisRotation => rotate::ROTATE_RANGE,
            Augmentation::RotatePerturbation => rotate::PERTURBATION_RANGE,
            Augmentation::TranslateX
            | Augmentation::TranslateY
            | Augmentation::TranslateZ
            | Augmentation::NonUniformTranslate => translate::TRANSLATE_RANGE,
            Augmentation::ShearXY | Augmentation::ShearYZ | Augmentation::ShearXZ => {
                shear::SHEAR_RANGE
            }
            Augmentation::GlobalAffine => shear::AFFINE_RANGE,
            Augmentation::PiecewiseShear => shear::PIECEWISE_SHEAR_RANGE,
            Augmentation::Jitter => noise::JITTER_RANGE,
            Augmentation::PointToNoise => noise::POINT_TO_NOISE_RANGE,
            Augmentation::RandomDropout => replace::DROPOUT_RANGE,
            Augmentation::RandomErase => replace::ERASE_RANGE,
            Augmentation::Dbscan => replace::DBSCAN_RANGE,
            Augmentation::GridDistortion | Augmentation::ElasticDeformation => return None,
        };
        Some(range)
    }

    /// Check a strength against [`Augmentation::strength_range`] without applying the operator.
    pub fn validate_strength(&self, v: f64) -> Result<(), AugmentError> {
        match self.strength_range() {
            Some((min, max)) => crate::error::check_strength(self.name(), v, min, max),
            None => Ok(()),
        }
    }

    /// Apply the operator to a point cloud.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        src: &PointCloud,
        v: f64,
        rng: &mut R,
    ) -> Result<PointCloud, AugmentError> {
        match self {
            Augmentation::ScaleX => scale::scale_x(src, v, rng),
            Augmentation::ScaleY => scale::scale_y(src, v, rng),
            Augmentation::ScaleZ => scale::scale_z(src, v, rng),
            Augmentation::Resize => scale::resize(src, v, rng),
            Augmentation::NonUniformScale => scale::non_uniform_scale(src, v, rng),
            Augmentation::RotateX => rotate::rotate_x(src, v, rng),
            Augmentation::RotateY => rotate::rotate_y(src, v, rng),
            Augmentation::RotateZ => rotate::rotate_z(src, v, rng),
            Augmentation::RandomAxisRotation => rotate::random_axis_rotation(src, v, rng),
            Augmentation::RotatePerturbation => rotate::rotate_perturbation(src, v, rng),
            Augmentation::TranslateX => translate::translate_x(src, v, rng),
            Augmentation::TranslateY => translate::translate_y(src, v, rng),
            Augmentation::TranslateZ => translate::translate_z(src, v, rng),
            Augmentation::NonUniformTranslate => translate::non_uniform_translate(src, v, rng),
            Augmentation::ShearXY => shear::shear_xy(src, v, rng),
            Augmentation::ShearYZ => shear::shear_yz(src, v, rng),
            Augmentation::ShearXZ => shear::shear_xz(src, v, rng),
            Augmentation::GlobalAffine => shear::global_affine(src, v, rng),
            Augmentation::PiecewiseShear => shear::piecewise_shear(src, v, rng),
            Augmentation::Jitter => noise::jitter(src, v, rng),
            Augmentation::PointToNoise => noise::point_to_noise(src, v, rng),
            Augmentation::RandomDropout => replace::random_dropout(src, v, rng),
            Augmentation::RandomErase => replace::random_erase(src, v, rng),
            Augmentation::Dbscan => replace::dbscan(src, v, rng),
            Augmentation::GridDistortion => deform::grid_distortion(src, v, rng),
            Augmentation::ElasticDeformation => deform::elastic_deformation(src, v, rng),
        }
    }
}

impl fmt::Display for Augmentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Augmentation {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Augmentation::ALL
            .iter()
            .find(|op| op.name() == s)
            .copied()
            .ok_or_else(|| AugmentError::UnknownOperator(s.to_string()))
    }
}
