/// An error type for the point cloud and transform utilities.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PointCloudError {
    /// An optional attribute does not have one entry per point.
    #[error("Attribute {attribute} has {actual} entries, expected {expected}")]
    MismatchedLength {
        /// Name of the attribute.
        attribute: &'static str,
        /// Number of points in the cloud.
        expected: usize,
        /// Number of entries in the attribute.
        actual: usize,
    },

    /// The number of channels per point is not supported.
    #[error("Unsupported number of channels per point: {0} (expected 3 or 6)")]
    InvalidChannels(usize),

    /// The flat buffer length is not a multiple of the number of channels.
    #[error("Buffer of length {len} cannot be split into rows of {num_channels} channels")]
    InvalidBufferLength {
        /// Length of the buffer.
        len: usize,
        /// Requested number of channels.
        num_channels: usize,
    },

    /// A rotation was requested about a zero-length axis.
    #[error("Cannot compute rotation matrix from a zero vector")]
    ZeroAxis,
}
