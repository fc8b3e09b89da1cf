//! # Cube Mesh
//!
//! Static mesh generation for an axis-aligned cube.
//! Converts a [`CubeDescriptor`] into immutable [`MeshBuffers`] and hands them
//! to a render backend through the [`GeometryUploader`] trait.
//!
//! ## Architecture
//!
//! ```text
//! CubeDescriptor → cube::build → MeshBuffers → upload::upload_mesh → GeometryUploader
//! ```
//!
//! Building never touches a rendering context. The uploader owns the GPU
//! context and receives the finished buffers as packed bytes.
//!
//! ## Usage
//!
//! ```rust
//! use cube_mesh::{CubeDescriptor, RecordingUploader, UploadOptions, upload_mesh};
//! use glam::DVec3;
//!
//! let mesh = CubeDescriptor::new(DVec3::ZERO, 2.0).build()?;
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.index_count(), 36);
//!
//! let mut uploader = RecordingUploader::new();
//! let draw = upload_mesh(&mut uploader, &mesh, &UploadOptions::default())?;
//! assert_eq!(draw.triangle_count, 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod buffers;
pub mod cube;
pub mod descriptor;
pub mod error;
pub mod upload;

pub use buffers::{MeshBuffers, Vec4};
pub use cube::{build, CubeMeshBuilder};
pub use descriptor::{Color, CubeDescriptor, CubeTopology, Point3};
pub use error::{MeshError, MeshResult};
pub use upload::{
    upload_mesh, BufferSlot, DrawRecord, GeometryUploader, RecordedBuffer, RecordingUploader,
    UploadError, UploadOptions, UsageHint,
};
