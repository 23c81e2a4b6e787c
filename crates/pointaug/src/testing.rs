//! Fixtures shared by the operator tests.

use pointaug_3d::pointcloud::PointCloud;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// A generator replaying a fixed sequence of `u64` values, cycling at the end.
pub(crate) struct ScriptedRng {
    values: Vec<u64>,
    index: usize,
}

impl ScriptedRng {
    pub(crate) fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

pub(crate) fn random_points(rng: &mut StdRng, num_points: usize) -> Vec<[f64; 3]> {
    (0..num_points)
        .map(|_| {
            [
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            ]
        })
        .collect()
}

pub(crate) fn random_unit_normals(rng: &mut StdRng, num_points: usize) -> Vec<[f64; 3]> {
    random_points(rng, num_points)
        .into_iter()
        .map(|n| {
            let norm = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt().max(1e-6);
            [n[0] / norm, n[1] / norm, n[2] / norm]
        })
        .collect()
}

/// A seeded cloud with positions only.
pub(crate) fn xyz_cloud(seed: u64, num_points: usize) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    PointCloud::new(random_points(&mut rng, num_points), None, None)
        .expect("points only cloud is always valid")
}

/// A seeded cloud with positions and unit normals.
pub(crate) fn normals_cloud(seed: u64, num_points: usize) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = random_points(&mut rng, num_points);
    let normals = random_unit_normals(&mut rng, num_points);
    PointCloud::new(points, None, Some(normals)).expect("lengths match by construction")
}

pub(crate) fn assert_points_eq(a: &[[f64; 3]], b: &[[f64; 3]], epsilon: f64) {
    assert_eq!(a.len(), b.len());
    for (pa, pb) in a.iter().zip(b.iter()) {
        for (x, y) in pa.iter().zip(pb.iter()) {
            approx::assert_relative_eq!(x, y, epsilon = epsilon);
        }
    }
}
