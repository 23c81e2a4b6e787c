use pointaug_3d::pointcloud::PointCloud;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{AugmentError, Augmentation};

/// One operator and the strength it is applied with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AugmentStep {
    /// The operator.
    pub op: Augmentation,
    /// The strength passed to the operator.
    pub strength: f64,
}

impl AugmentStep {
    /// Create a new step.
    pub fn new(op: Augmentation, strength: f64) -> Self {
        Self { op, strength }
    }
}

/// An ordered sequence of augmentation steps.
///
/// Example:
///
/// ```
/// use pointaug::{AugmentPipeline, PointCloud};
///
/// let pipeline: AugmentPipeline = serde_json::from_str(
///     r#"{ "steps": [{ "op": "RotateZ", "strength": 3.14 }, { "op": "Jitter", "strength": 1.0 }],
///          "seed": 7 }"#,
/// ).unwrap();
/// pipeline.validate().unwrap();
///
/// let cloud = PointCloud::new(vec![[1.0, 0.0, 0.0]; 8], None, None).unwrap();
/// let augmented = pipeline.apply_seeded(&cloud).unwrap();
/// assert_eq!(augmented.len(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AugmentPipeline {
    /// The steps, applied in order.
    pub steps: Vec<AugmentStep>,
    /// Optional fixed seed for reproducible augmentation.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AugmentPipeline {
    /// Create a pipeline from its steps, without a fixed seed.
    pub fn new(steps: Vec<AugmentStep>) -> Self {
        Self { steps, seed: None }
    }

    /// Set a fixed seed used by [`AugmentPipeline::apply_seeded`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every step's strength against its operator's legal interval.
    ///
    /// This lets a caller reject a configuration before any cloud is processed.
    pub fn validate(&self) -> Result<(), AugmentError> {
        self.steps
            .iter()
            .try_for_each(|step| step.op.validate_strength(step.strength))
    }

    /// Apply the steps in order with the given generator.
    ///
    /// The first failing step aborts the pipeline and its error is returned.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        src: &PointCloud,
        rng: &mut R,
    ) -> Result<PointCloud, AugmentError> {
        let mut current = src.clone();
        for (i, step) in self.steps.iter().enumerate() {
            log::debug!("Step {}: {} with strength {}", i, step.op, step.strength);
            current = step.op.apply(&current, step.strength, rng)?;
        }
        Ok(current)
    }

    /// Apply the steps with a generator seeded from [`AugmentPipeline::seed`].
    ///
    /// Without a seed a fresh thread-local generator is used.
    pub fn apply_seeded(&self, src: &PointCloud) -> Result<PointCloud, AugmentError> {
        match self.seed {
            Some(seed) => self.apply(src, &mut StdRng::seed_from_u64(seed)),
            None => self.apply(src, &mut rand::rng()),
        }
    }
}
