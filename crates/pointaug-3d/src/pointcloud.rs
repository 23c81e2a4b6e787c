use crate::PointCloudError;

/// A point cloud with points and optional per-point normals and colors.
///
/// The column layout of a point is fixed: position first, then the normal
/// when present. Colors are carried along with a point but never transformed.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    // The points in the point cloud.
    points: Vec<[f64; 3]>,
    // The colors of the points.
    colors: Option<Vec<[u8; 3]>>,
    // The normals of the points.
    normals: Option<Vec<[f64; 3]>>,
}

impl PointCloud {
    /// Create a new point cloud from points, colors (optional), and normals (optional).
    ///
    /// # Errors
    ///
    /// Returns [`PointCloudError::MismatchedLength`] if colors or normals do not
    /// have exactly one entry per point.
    pub fn new(
        points: Vec<[f64; 3]>,
        colors: Option<Vec<[u8; 3]>>,
        normals: Option<Vec<[f64; 3]>>,
    ) -> Result<Self, PointCloudError> {
        if let Some(colors) = &colors {
            check_length("colors", points.len(), colors.len())?;
        }
        if let Some(normals) = &normals {
            check_length("normals", points.len(), normals.len())?;
        }
        Ok(Self {
            points,
            colors,
            normals,
        })
    }

    /// Create a point cloud from a row-major `(N, C)` buffer.
    ///
    /// `C` must be 3 (positions) or 6 (positions followed by normals).
    ///
    /// Example:
    ///
    /// ```
    /// use pointaug_3d::pointcloud::PointCloud;
    ///
    /// let data = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 1.0, 0.0, 0.0];
    /// let cloud = PointCloud::from_flat(&data, 6).unwrap();
    /// assert_eq!(cloud.len(), 2);
    /// assert_eq!(cloud.num_channels(), 6);
    /// ```
    pub fn from_flat(data: &[f64], num_channels: usize) -> Result<Self, PointCloudError> {
        if num_channels != 3 && num_channels != 6 {
            return Err(PointCloudError::InvalidChannels(num_channels));
        }
        if data.len() % num_channels != 0 {
            return Err(PointCloudError::InvalidBufferLength {
                len: data.len(),
                num_channels,
            });
        }

        let rows = data.chunks_exact(num_channels);
        let points = rows.clone().map(|row| [row[0], row[1], row[2]]).collect();
        let normals = (num_channels == 6).then(|| rows.map(|row| [row[3], row[4], row[5]]).collect());

        Ok(Self {
            points,
            colors: None,
            normals,
        })
    }

    /// Flatten positions and normals into a row-major `(N, C)` buffer.
    ///
    /// Colors are not part of the numeric layout and are dropped.
    pub fn to_flat(&self) -> Vec<f64> {
        let mut data = Vec::with_capacity(self.len() * self.num_channels());
        match &self.normals {
            Some(normals) => {
                for (point, normal) in self.points.iter().zip(normals.iter()) {
                    data.extend_from_slice(point);
                    data.extend_from_slice(normal);
                }
            }
            None => self.points.iter().for_each(|p| data.extend_from_slice(p)),
        }
        data
    }

    /// Get the number of points in the point cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of numeric channels per point: 3, or 6 when normals are present.
    #[inline]
    pub fn num_channels(&self) -> usize {
        match self.normals {
            Some(_) => 6,
            None => 3,
        }
    }

    /// Get as reference the points in the point cloud.
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    /// Get as mutable reference the points in the point cloud.
    pub fn points_mut(&mut self) -> &mut [[f64; 3]] {
        &mut self.points
    }

    /// Get as reference the colors of the points in the point cloud.
    pub fn colors(&self) -> Option<&[[u8; 3]]> {
        self.colors.as_deref()
    }

    /// Get as reference the normals of the points in the point cloud.
    pub fn normals(&self) -> Option<&[[f64; 3]]> {
        self.normals.as_deref()
    }

    /// Get as mutable reference the normals of the points in the point cloud.
    pub fn normals_mut(&mut self) -> Option<&mut [[f64; 3]]> {
        self.normals.as_deref_mut()
    }

    /// Borrow points and normals mutably at the same time.
    pub fn points_and_normals_mut(&mut self) -> (&mut [[f64; 3]], Option<&mut [[f64; 3]]>) {
        (&mut self.points, self.normals.as_deref_mut())
    }

    /// Overwrite the full row `dst` (point, normal and color) with row `src`.
    ///
    /// PRECONDITION: both indices are smaller than [`PointCloud::len`].
    pub fn copy_row(&mut self, src: usize, dst: usize) {
        self.points[dst] = self.points[src];
        if let Some(normals) = self.normals.as_mut() {
            normals[dst] = normals[src];
        }
        if let Some(colors) = self.colors.as_mut() {
            colors[dst] = colors[src];
        }
    }
}

fn check_length(
    attribute: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), PointCloudError> {
    if expected != actual {
        return Err(PointCloudError::MismatchedLength {
            attribute,
            expected,
            actual,
        });
    }
    Ok(())
}
