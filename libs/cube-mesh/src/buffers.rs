//! # Mesh Buffers
//!
//! Immutable output of the cube builder: four parallel attribute buffers plus
//! their counts.
//!
//! ## Memory Layout
//!
//! Every attribute is a tightly packed `vec4<f32>` (16-byte stride, native
//! endianness, no padding):
//!
//! - `positions`: [x0, y0, z0, 1, x1, y1, z1, 1, ...]
//! - `normals`: [nx0, ny0, nz0, 0, ...]
//! - `colors`: optional [r0, g0, b0, a0, ...]
//! - `indices`: [i0, i1, i2, ...] as `u32`, three per counter-clockwise triangle
//!
//! The byte views returned by [`MeshBuffers::position_bytes`] and friends are
//! exactly what a render backend copies into GPU storage.

use config::constants::{
    COMPONENTS_PER_VERTEX, DIRECTION_W, INDEX_BYTES, POINT_W, VERTEX_STRIDE_BYTES,
};
use glam::DVec3;

use crate::error::{MeshError, MeshResult};

/// One attribute entry: `(x, y, z, w)` or `(r, g, b, a)`.
pub type Vec4 = [f32; COMPONENTS_PER_VERTEX];

/// Vertex attributes and triangle indices of a finished mesh.
///
/// Created once by the builder and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use cube_mesh::CubeDescriptor;
/// use glam::DVec3;
///
/// let mesh = CubeDescriptor::new(DVec3::ZERO, 2.0).build().unwrap();
/// assert_eq!(mesh.position_bytes().len(), 8 * 16);
/// assert_eq!(mesh.index_bytes().len(), 36 * 4);
/// assert!(mesh.color_bytes().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    positions: Vec<Vec4>,
    normals: Vec<Vec4>,
    colors: Option<Vec<Vec4>>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Assembles buffers produced by a generator.
    pub(crate) fn from_parts(
        positions: Vec<Vec4>,
        normals: Vec<Vec4>,
        colors: Option<Vec<Vec4>>,
        indices: Vec<u32>,
    ) -> Self {
        Self {
            positions,
            normals,
            colors,
            indices,
        }
    }

    // =========================================================================
    // COUNTS
    // =========================================================================

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if a color buffer is present.
    #[inline]
    pub fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    // =========================================================================
    // TYPED VIEWS
    // =========================================================================

    /// Homogeneous vertex positions (w = 1).
    #[inline]
    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    /// Homogeneous vertex normals (w = 0), index-aligned with positions.
    #[inline]
    pub fn normals(&self) -> &[Vec4] {
        &self.normals
    }

    /// RGBA vertex colors, present only when a color was supplied.
    #[inline]
    pub fn colors(&self) -> Option<&[Vec4]> {
        self.colors.as_deref()
    }

    /// Triangle indices.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Positions flattened to [x, y, z, w, x, y, z, w, ...].
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals flattened to [x, y, z, w, ...].
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Colors flattened to [r, g, b, a, ...].
    pub fn colors_flat(&self) -> Option<&[f32]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    // =========================================================================
    // BYTE VIEWS
    // =========================================================================

    /// Position buffer as packed bytes.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normal buffer as packed bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Color buffer as packed bytes, if present.
    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(bytemuck::cast_slice)
    }

    /// Index buffer as packed `u32` bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Computes the axis-aligned bounding box of the positions.
    ///
    /// Returns (min, max) corners, or zero vectors for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut points = self
            .positions
            .iter()
            .map(|p| DVec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2])));

        let Some(first) = points.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        points.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
    }

    /// Checks the structural invariants of the buffers.
    ///
    /// Checks:
    /// - Normals (and colors, if any) have one entry per vertex
    /// - The index count is a multiple of three
    /// - Every index references an existing vertex
    /// - No triangle repeats a vertex
    /// - Positions carry w = 1 and normals w = 0
    /// - Byte views match the vertex stride and index width
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidArgument`] describing the first violation found.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertex_count();

        if self.normals.len() != vertex_count {
            return Err(MeshError::invalid_argument(format!(
                "normal count {} does not match vertex count {vertex_count}",
                self.normals.len()
            )));
        }
        if let Some(colors) = &self.colors {
            if colors.len() != vertex_count {
                return Err(MeshError::invalid_argument(format!(
                    "color count {} does not match vertex count {vertex_count}",
                    colors.len()
                )));
            }
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::invalid_argument(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        for (triangle, tri) in self.indices.chunks_exact(3).enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_argument(format!(
                    "triangle {triangle} references vertex {index} of {vertex_count}"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::invalid_argument(format!(
                    "triangle {triangle} is degenerate: {tri:?}"
                )));
            }
        }

        if self.positions.iter().any(|p| p[3] != POINT_W) {
            return Err(MeshError::invalid_argument("position w must be 1"));
        }
        if self.normals.iter().any(|n| n[3] != DIRECTION_W) {
            return Err(MeshError::invalid_argument("normal w must be 0"));
        }

        let attribute_bytes = vertex_count * VERTEX_STRIDE_BYTES;
        let attributes = [
            ("position", Some(self.position_bytes())),
            ("normal", Some(self.normal_bytes())),
            ("color", self.color_bytes()),
        ];
        for (name, bytes) in attributes {
            if let Some(bytes) = bytes.filter(|b| b.len() != attribute_bytes) {
                return Err(MeshError::invalid_argument(format!(
                    "{name} buffer holds {} bytes, expected {attribute_bytes}",
                    bytes.len()
                )));
            }
        }
        if self.index_bytes().len() != self.index_count() * INDEX_BYTES {
            return Err(MeshError::invalid_argument(format!(
                "index buffer holds {} bytes, expected {}",
                self.index_bytes().len(),
                self.index_count() * INDEX_BYTES
            )));
        }

        Ok(())
    }
}
