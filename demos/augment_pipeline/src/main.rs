use argh::FromArgs;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;

use pointaug::{AugmentPipeline, AugmentStep, Augmentation, PointCloud};

#[derive(FromArgs)]
/// Augment a synthetic point cloud with a configurable pipeline
struct Args {
    /// number of points of the synthetic unit sphere
    #[argh(option, short = 'n', default = "1024")]
    num_points: usize,

    /// seed for the cloud and, unless the pipeline file sets one, the augmentation
    #[argh(option, short = 's', default = "0")]
    seed: u64,

    /// path to a JSON pipeline file
    #[argh(option, short = 'p')]
    pipeline: Option<PathBuf>,

    /// list the available operators and exit
    #[argh(switch)]
    list: bool,
}

/// Points on the unit sphere, with their normals.
fn unit_sphere(num_points: usize, rng: &mut StdRng) -> Result<PointCloud, pointaug::AugmentError> {
    let mut points = Vec::with_capacity(num_points);
    while points.len() < num_points {
        let p: [f64; 3] = [
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        ];
        let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        if norm > 1e-3 && norm <= 1.0 {
            points.push([p[0] / norm, p[1] / norm, p[2] / norm]);
        }
    }
    let normals = points.clone();
    Ok(PointCloud::new(points, None, Some(normals))?)
}

fn default_pipeline() -> AugmentPipeline {
    AugmentPipeline::new(vec![
        AugmentStep::new(Augmentation::NonUniformScale, 0.2),
        AugmentStep::new(Augmentation::RandomAxisRotation, std::f64::consts::PI),
        AugmentStep::new(Augmentation::ShearXY, 0.1),
        AugmentStep::new(Augmentation::Jitter, 1.0),
        AugmentStep::new(Augmentation::RandomDropout, 0.5),
    ])
}

fn summarize(label: &str, cloud: &PointCloud) {
    let n = cloud.len().max(1) as f64;
    let mut centroid = [0.0; 3];
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for p in cloud.points() {
        for k in 0..3 {
            centroid[k] += p[k] / n;
            min[k] = min[k].min(p[k]);
            max[k] = max[k].max(p[k]);
        }
    }
    println!(
        "{label}: {} points, centroid {:.4?}, bounds {:.4?} .. {:.4?}",
        cloud.len(),
        centroid,
        min,
        max
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    if args.list {
        for op in Augmentation::ALL {
            match op.strength_range() {
                Some((min, max)) => println!("{op:<20} [{min}, {max}]"),
                None => println!("{op:<20} any"),
            }
        }
        return Ok(());
    }

    let mut pipeline = match &args.pipeline {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str::<AugmentPipeline>(&contents)?
        }
        None => default_pipeline(),
    };
    if pipeline.seed.is_none() {
        pipeline.seed = Some(args.seed);
    }

    // reject bad strengths before any work is done
    pipeline.validate()?;
    log::info!("Running {} augmentation steps", pipeline.steps.len());

    let mut rng = StdRng::seed_from_u64(args.seed);
    let cloud = unit_sphere(args.num_points, &mut rng)?;
    summarize("input", &cloud);

    let augmented = pipeline.apply_seeded(&cloud)?;
    summarize("augmented", &augmented);

    Ok(())
}
