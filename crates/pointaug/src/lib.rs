#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::AugmentError;

/// Reserved non-linear deformation operators.
pub mod deform;

/// Jitter and point-to-noise operators.
pub mod noise;

/// Ordered augmentation pipelines and their configuration.
pub mod pipeline;

/// The operator registry.
pub mod registry;

/// Dropout, erase and cluster collapse operators.
pub mod replace;

/// Rotation operators.
pub mod rotate;

/// Scaling operators.
pub mod scale;

/// Shear and affine operators.
pub mod shear;

/// Translation operators.
pub mod translate;

mod sampling;

#[cfg(test)]
pub(crate) mod testing;

pub use pipeline::{AugmentPipeline, AugmentStep};
pub use pointaug_3d::pointcloud::PointCloud;
pub use registry::Augmentation;
