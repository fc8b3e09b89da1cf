//! # Mesh Errors
//!
//! Error types for cube mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid input is rejected before any buffer is allocated
//! - There is no partial result and nothing is retried
//! - Out-of-range colors are not errors; they pass through unchanged

use thiserror::Error;

/// Errors that can occur while building or validating mesh buffers.
///
/// ## Example
///
/// ```rust
/// use cube_mesh::{CubeDescriptor, MeshError};
/// use glam::DVec3;
///
/// match CubeDescriptor::new(DVec3::ZERO, -1.0).build() {
///     Ok(mesh) => println!("{} vertices", mesh.vertex_count()),
///     Err(MeshError::InvalidArgument { message }) => eprintln!("rejected: {message}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The descriptor or the buffers are structurally invalid.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl MeshError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_argument("size must be positive");
        assert_eq!(err.to_string(), "Invalid argument: size must be positive");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
