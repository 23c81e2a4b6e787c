use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

use crate::{ClusterError, ClusterLabel, Clusterer};

/// Density-based spatial clustering (DBSCAN) of 3D points.
///
/// The neighbourhood of a point holds every point within Euclidean distance
/// `eps`, the point itself included. A point is a core point when its
/// neighbourhood holds at least `min_samples` points. Clusters are grown from
/// core points; a border point joins the first cluster that reaches it and
/// everything else is labeled as noise. Cluster ids are dense and assigned in
/// discovery order, scanning points by index.
#[derive(Debug, Clone)]
pub struct Dbscan {
    eps: f64,
    min_samples: f64,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `eps` - The neighbourhood radius. Must be positive and finite.
    /// * `min_samples` - Minimum neighbourhood size of a core point. Must be
    ///   non-negative and finite; fractional values are compared as is.
    pub fn new(eps: f64, min_samples: f64) -> Result<Self, ClusterError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ClusterError::InvalidEps(eps));
        }
        if !min_samples.is_finite() || min_samples < 0.0 {
            return Err(ClusterError::InvalidMinSamples(min_samples));
        }
        Ok(Self { eps, min_samples })
    }

    /// The neighbourhood radius.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// The minimum neighbourhood size of a core point.
    pub fn min_samples(&self) -> f64 {
        self.min_samples
    }

    // indices of all points within eps of the query, query included
    fn region_query(
        &self,
        kdtree: &ImmutableKdTree<f64, u32, 3, 32>,
        points: &[[f64; 3]],
        query: &[f64; 3],
    ) -> Vec<usize> {
        let radius_sq = self.eps * self.eps;
        // NOTE: the tree is queried with a slightly larger radius and the
        // boundary is decided here so that `dist == eps` is always a neighbour
        let search_radius = radius_sq * (1.0 + 1e-9) + f64::EPSILON;
        kdtree
            .within_unsorted::<SquaredEuclidean>(query, search_radius)
            .into_iter()
            .map(|nn| nn.item as usize)
            .filter(|&idx| squared_distance(&points[idx], query) <= radius_sq)
            .collect()
    }
}

impl Clusterer for Dbscan {
    fn fit(&self, points: &[[f64; 3]]) -> Vec<ClusterLabel> {
        if points.is_empty() {
            return Vec::new();
        }

        let kdtree: ImmutableKdTree<f64, u32, 3, 32> = ImmutableKdTree::new_from_slice(points);

        let neighbourhoods = points
            .iter()
            .map(|p| self.region_query(&kdtree, points, p))
            .collect::<Vec<_>>();

        let is_core = neighbourhoods
            .iter()
            .map(|n| n.len() as f64 >= self.min_samples)
            .collect::<Vec<_>>();

        let mut labels: Vec<Option<usize>> = vec![None; points.len()];
        let mut num_clusters = 0;

        for seed in 0..points.len() {
            if labels[seed].is_some() || !is_core[seed] {
                continue;
            }

            let cluster_id = num_clusters;
            num_clusters += 1;
            labels[seed] = Some(cluster_id);

            // expand the cluster through the core points only
            let mut frontier = vec![seed];
            while let Some(current) = frontier.pop() {
                for &neighbour in &neighbourhoods[current] {
                    if labels[neighbour].is_some() {
                        continue;
                    }
                    labels[neighbour] = Some(cluster_id);
                    if is_core[neighbour] {
                        frontier.push(neighbour);
                    }
                }
            }
        }

        log::debug!(
            "DBSCAN eps: {} min_samples: {} found {} clusters",
            self.eps,
            self.min_samples,
            num_clusters
        );

        labels
            .into_iter()
            .map(|label| label.map_or(ClusterLabel::Noise, ClusterLabel::Cluster))
            .collect()
    }
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}
