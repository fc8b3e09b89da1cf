//! # Geometry Upload
//!
//! Hands finished [`MeshBuffers`] to a render backend.
//!
//! The backend implements [`GeometryUploader`] and owns its GPU context; this
//! module only decides which bytes go to which slot with which usage hint,
//! and returns the counts needed for later draw calls.
//!
//! ## Slots
//!
//! | Slot | Contents | Usage |
//! |------|----------|-------|
//! | `Index` | `u32` triangle indices | always static |
//! | `Position` | `vec4<f32>` positions | static unless `dynamic_positions` |
//! | `Normal` | `vec4<f32>` normals | always static |
//! | `Color` | `vec4<f32>` RGBA, only when present | static unless `dynamic_colors` |

use std::fmt;

use thiserror::Error;

use crate::buffers::MeshBuffers;
use crate::error::MeshError;

// =============================================================================
// SLOTS AND HINTS
// =============================================================================

/// Capability slot of the uploader that receives one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferSlot {
    /// Triangle indices (`u32`).
    Index,
    /// Homogeneous positions (`vec4<f32>`).
    Position,
    /// Homogeneous normals (`vec4<f32>`).
    Normal,
    /// RGBA colors (`vec4<f32>`).
    Color,
}

impl BufferSlot {
    /// Lowercase slot name, as used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Position => "position",
            Self::Normal => "normal",
            Self::Color => "color",
        }
    }
}

impl fmt::Display for BufferSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often the caller intends to rewrite a buffer after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UsageHint {
    /// Written once, drawn many times.
    #[default]
    Static,
    /// Rewritten frequently.
    Dynamic,
}

impl UsageHint {
    fn from_dynamic(dynamic: bool) -> Self {
        if dynamic {
            Self::Dynamic
        } else {
            Self::Static
        }
    }
}

// =============================================================================
// UPLOADER TRAIT
// =============================================================================

/// Render backend sink for mesh buffers.
///
/// Implementations copy `bytes` into GPU storage bound to `slot`. The bytes
/// are tightly packed native-endian `f32` vec4s, or `u32` for the index slot.
///
/// # Example
///
/// ```rust
/// use cube_mesh::{BufferSlot, GeometryUploader, UsageHint};
///
/// struct ByteCounter(usize);
///
/// impl GeometryUploader for ByteCounter {
///     type Error = std::convert::Infallible;
///
///     fn upload(&mut self, _: BufferSlot, bytes: &[u8], _: UsageHint) -> Result<(), Self::Error> {
///         self.0 += bytes.len();
///         Ok(())
///     }
/// }
/// ```
pub trait GeometryUploader {
    /// Backend-specific failure.
    type Error;

    /// Copies one buffer into the given slot.
    fn upload(&mut self, slot: BufferSlot, bytes: &[u8], usage: UsageHint)
        -> Result<(), Self::Error>;
}

// =============================================================================
// OPTIONS AND RESULTS
// =============================================================================

/// Usage hints for the attributes a caller may rewrite later.
///
/// Normals and indices are always uploaded as [`UsageHint::Static`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UploadOptions {
    /// Mark positions as frequently updated.
    pub dynamic_positions: bool,
    /// Mark colors as frequently updated.
    pub dynamic_colors: bool,
}

impl UploadOptions {
    /// Sets whether positions are frequently updated.
    pub fn with_dynamic_positions(mut self, dynamic: bool) -> Self {
        self.dynamic_positions = dynamic;
        self
    }

    /// Sets whether colors are frequently updated.
    pub fn with_dynamic_colors(mut self, dynamic: bool) -> Self {
        self.dynamic_colors = dynamic;
        self
    }

    /// Usage hint of the position buffer.
    pub fn position_usage(&self) -> UsageHint {
        UsageHint::from_dynamic(self.dynamic_positions)
    }

    /// Usage hint of the color buffer.
    pub fn color_usage(&self) -> UsageHint {
        UsageHint::from_dynamic(self.dynamic_colors)
    }
}

/// Counts recorded after upload for issuing draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawRecord {
    /// Number of vertices in each attribute buffer.
    pub vertex_count: u32,
    /// Number of indices to draw.
    pub index_count: u32,
    /// Number of triangles to draw.
    pub triangle_count: u32,
    /// Whether a color buffer was uploaded.
    pub has_colors: bool,
}

impl DrawRecord {
    /// Captures the draw counts of `mesh` as `u32`.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidArgument`] when a count does not fit in `u32`.
    pub fn for_mesh(mesh: &MeshBuffers) -> Result<Self, MeshError> {
        let count = |value: usize, what: &str| {
            u32::try_from(value)
                .map_err(|_| MeshError::invalid_argument(format!("{what} {value} exceeds u32")))
        };
        Ok(Self {
            vertex_count: count(mesh.vertex_count(), "vertex count")?,
            index_count: count(mesh.index_count(), "index count")?,
            triangle_count: count(mesh.triangle_count(), "triangle count")?,
            has_colors: mesh.has_colors(),
        })
    }
}

/// Errors raised while handing buffers to an uploader.
#[derive(Debug, Error)]
pub enum UploadError<E> {
    /// The buffers violate their structural invariants; nothing was uploaded.
    #[error("mesh rejected before upload: {0}")]
    InvalidMesh(#[from] MeshError),

    /// The uploader failed on one slot; later slots were not uploaded.
    #[error("failed to upload {slot} buffer: {source}")]
    Slot {
        /// Slot that failed.
        slot: BufferSlot,
        /// Backend error.
        #[source]
        source: E,
    },
}

// =============================================================================
// UPLOAD
// =============================================================================

/// Uploads every buffer of `mesh` and returns the draw counts.
///
/// Slots are filled in the order index, position, normal, then color when the
/// mesh has colors. The mesh is validated first so that a backend never
/// receives a partial or inconsistent set of buffers.
///
/// # Errors
///
/// - [`UploadError::InvalidMesh`] when the buffers fail validation
/// - [`UploadError::Slot`] wrapping the first uploader failure
///
/// # Example
///
/// ```rust
/// use cube_mesh::{upload_mesh, BufferSlot, Color, CubeDescriptor, RecordingUploader, UploadOptions};
/// use glam::DVec3;
///
/// let mesh = CubeDescriptor::new(DVec3::ZERO, 1.0)
///     .with_color(Color::new(0, 0, 255))
///     .build()
///     .unwrap();
/// let mut uploader = RecordingUploader::new();
/// let draw = upload_mesh(&mut uploader, &mesh, &UploadOptions::default()).unwrap();
///
/// assert_eq!(draw.index_count, 36);
/// assert!(uploader.buffer(BufferSlot::Color).is_some());
/// ```
pub fn upload_mesh<U: GeometryUploader>(
    uploader: &mut U,
    mesh: &MeshBuffers,
    options: &UploadOptions,
) -> Result<DrawRecord, UploadError<U::Error>> {
    mesh.validate()?;
    let record = DrawRecord::for_mesh(mesh)?;

    send(uploader, BufferSlot::Index, mesh.index_bytes(), UsageHint::Static)?;
    send(
        uploader,
        BufferSlot::Position,
        mesh.position_bytes(),
        options.position_usage(),
    )?;
    send(uploader, BufferSlot::Normal, mesh.normal_bytes(), UsageHint::Static)?;
    if let Some(colors) = mesh.color_bytes() {
        send(uploader, BufferSlot::Color, colors, options.color_usage())?;
    }

    log::debug!(
        "Uploaded mesh with {} vertices and {} indices",
        record.vertex_count,
        record.index_count
    );
    Ok(record)
}

fn send<U: GeometryUploader>(
    uploader: &mut U,
    slot: BufferSlot,
    bytes: &[u8],
    usage: UsageHint,
) -> Result<(), UploadError<U::Error>> {
    log::trace!("Uploading {} bytes to {slot} buffer ({usage:?})", bytes.len());
    uploader
        .upload(slot, bytes, usage)
        .map_err(|source| UploadError::Slot { slot, source })
}

// =============================================================================
// RECORDING UPLOADER
// =============================================================================

/// One buffer received by a [`RecordingUploader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBuffer {
    /// Slot the buffer was uploaded to.
    pub slot: BufferSlot,
    /// Usage hint it was tagged with.
    pub usage: UsageHint,
    /// Copied bytes.
    pub bytes: Vec<u8>,
}

impl RecordedBuffer {
    /// Decodes the bytes as `f32` components.
    pub fn floats(&self) -> Vec<f32> {
        bytemuck::pod_collect_to_vec(&self.bytes)
    }

    /// Decodes the bytes as `u32` indices.
    pub fn indices(&self) -> Vec<u32> {
        bytemuck::pod_collect_to_vec(&self.bytes)
    }
}

/// In-memory uploader that keeps a copy of every buffer it receives.
///
/// Useful for headless callers and for checking exactly what a GPU backend
/// would be given.
#[derive(Debug, Clone, Default)]
pub struct RecordingUploader {
    buffers: Vec<RecordedBuffer>,
}

impl RecordingUploader {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All received buffers, in upload order.
    pub fn buffers(&self) -> &[RecordedBuffer] {
        &self.buffers
    }

    /// The most recent buffer uploaded to `slot`.
    pub fn buffer(&self, slot: BufferSlot) -> Option<&RecordedBuffer> {
        self.buffers.iter().rev().find(|b| b.slot == slot)
    }

    /// Slots in upload order.
    pub fn slots(&self) -> Vec<BufferSlot> {
        self.buffers.iter().map(|b| b.slot).collect()
    }
}

impl GeometryUploader for RecordingUploader {
    type Error = std::convert::Infallible;

    fn upload(
        &mut self,
        slot: BufferSlot,
        bytes: &[u8],
        usage: UsageHint,
    ) -> Result<(), Self::Error> {
        self.buffers.push(RecordedBuffer {
            slot,
            usage,
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests;
