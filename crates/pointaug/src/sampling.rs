use rand::Rng;
use rand_distr::StandardNormal;

/// Uniform sample in `[low, high)`; returns `low` when the interval is empty.
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}

/// Uniform sample in `[-magnitude, magnitude)`.
pub(crate) fn symmetric<R: Rng + ?Sized>(rng: &mut R, magnitude: f64) -> f64 {
    (2.0 * rng.random::<f64>() - 1.0) * magnitude
}

pub(crate) fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

/// Gaussian sample with standard deviation `sigma`, clipped to `[-clip, clip]`.
pub(crate) fn clipped_normal<R: Rng + ?Sized>(rng: &mut R, sigma: f64, clip: f64) -> f64 {
    (sigma * standard_normal(rng)).clamp(-clip, clip)
}

/// Standard normal 3-vector.
pub(crate) fn normal_vector<R: Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
    [
        standard_normal(rng),
        standard_normal(rng),
        standard_normal(rng),
    ]
}

/// Direction drawn uniformly on the unit sphere.
pub(crate) fn unit_vector<R: Rng + ?Sized>(rng: &mut R) -> [f64; 3] {
    loop {
        let v = normal_vector(rng);
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        if norm > 1e-10 {
            return [v[0] / norm, v[1] / norm, v[2] / norm];
        }
    }
}
