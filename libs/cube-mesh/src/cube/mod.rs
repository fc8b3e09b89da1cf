//! # Cube Builder
//!
//! Generates the attribute and index buffers of an axis-aligned cube.
//!
//! ## Corner Labels
//!
//! ```text
//!        7-------6
//!       /|      /|        +Y
//!      3-------2 |         |
//!      | 4-----|-5         +-- +X
//!      |/      |/         /
//!      0-------1        +Z
//! ```
//!
//! Corners 0-3 lie on the front face (`+Z`), corners 4-7 on the back face.
//! Faces are emitted in the order front, right, back, left, top, bottom, each
//! as two counter-clockwise triangles seen from outside the cube.

use config::constants::{
    CORNER_COUNT, DIRECTION_W, FACETED_VERTEX_COUNT, FACE_COUNT, INDEX_COUNT, POINT_W,
};
use glam::DVec3;

use crate::buffers::{MeshBuffers, Vec4};
use crate::descriptor::{Color, CubeDescriptor, CubeTopology, Point3};
use crate::error::{MeshError, MeshResult};

// =============================================================================
// GEOMETRY TABLES
// =============================================================================

/// Unit offsets of the eight corners, scaled by half the edge length.
const CORNER_OFFSETS: [[f64; 3]; CORNER_COUNT] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

/// One cube face: its corner quad `a, b, c, d` and outward normal.
///
/// The quad is split into triangles `a, b, c` and `a, c, d`.
struct Face {
    corners: [u32; 4],
    normal: [f32; 3],
}

const FACES: [Face; FACE_COUNT] = [
    // Front
    Face {
        corners: [0, 1, 2, 3],
        normal: [0.0, 0.0, 1.0],
    },
    // Right
    Face {
        corners: [1, 5, 6, 2],
        normal: [1.0, 0.0, 0.0],
    },
    // Back
    Face {
        corners: [5, 4, 7, 6],
        normal: [0.0, 0.0, -1.0],
    },
    // Left
    Face {
        corners: [4, 0, 3, 7],
        normal: [-1.0, 0.0, 0.0],
    },
    // Top
    Face {
        corners: [3, 2, 6, 7],
        normal: [0.0, 1.0, 0.0],
    },
    // Bottom
    Face {
        corners: [4, 5, 1, 0],
        normal: [0.0, -1.0, 0.0],
    },
];

/// Positions, normals and indices of one topology.
type Attributes = (Vec<Vec4>, Vec<Vec4>, Vec<u32>);

/// Corners below this index lie on the front face.
const FRONT_CORNERS: usize = CORNER_COUNT / 2;

/// Normal of corners 0-3 in the shared-corner layout.
const FRONT_NORMAL: Vec4 = [0.0, 0.0, 1.0, DIRECTION_W];

/// Normal of corners 4-7 in the shared-corner layout.
const BACK_NORMAL: Vec4 = [0.0, 0.0, -1.0, DIRECTION_W];

// =============================================================================
// BUILD
// =============================================================================

/// Builds the buffers of the cube described by `descriptor`.
///
/// Pure: equal descriptors always produce bit-identical buffers, and no
/// rendering context is touched.
///
/// # Errors
///
/// [`MeshError::InvalidArgument`] when the size is not a positive finite
/// number, the center is not finite, or the corners do not fit in `f32`
/// as two distinct values per axis.
///
/// # Example
///
/// ```rust
/// use cube_mesh::{build, CubeDescriptor};
/// use glam::DVec3;
///
/// let mesh = build(&CubeDescriptor::new(DVec3::ZERO, 2.0)).unwrap();
/// assert_eq!(mesh.positions()[0], [-1.0, -1.0, 1.0, 1.0]);
/// assert_eq!(mesh.positions()[6], [1.0, 1.0, -1.0, 1.0]);
/// assert_eq!(&mesh.indices()[..3], &[0, 1, 2]);
/// ```
pub fn build(descriptor: &CubeDescriptor) -> MeshResult<MeshBuffers> {
    descriptor.validate()?;

    let corners = corner_positions(descriptor.center, descriptor.half_size())?;

    let (positions, normals, indices) = match descriptor.topology {
        CubeTopology::SharedCorners => shared_corners(&corners),
        CubeTopology::FacetedFaces => faceted_faces(&corners),
    };

    let colors = descriptor
        .color
        .map(|color| uniform_colors(color, positions.len()));

    let mesh = MeshBuffers::from_parts(positions, normals, colors, indices);
    log::debug!(
        "Created cube with {} vertices ({} triangles, {:?})",
        mesh.vertex_count(),
        mesh.triangle_count(),
        descriptor.topology
    );
    Ok(mesh)
}

/// Computes the eight homogeneous corner positions.
///
/// Rejects cubes whose extent collapses on some axis once narrowed to `f32`.
fn corner_positions(center: Point3, half: f64) -> MeshResult<[Vec4; CORNER_COUNT]> {
    let mut corners = [[0.0; 4]; CORNER_COUNT];

    for (corner, offset) in corners.iter_mut().zip(CORNER_OFFSETS) {
        let p = center + DVec3::from_array(offset) * half;
        let narrowed = p.as_vec3();
        if !narrowed.is_finite() {
            return Err(MeshError::invalid_argument(format!(
                "cube corner {p:?} does not fit in f32"
            )));
        }
        *corner = narrowed.extend(POINT_W).to_array();
    }

    // Corner 0 is (-x, -y, +z) and corner 6 is (+x, +y, -z).
    let (near, far) = (corners[0], corners[6]);
    let extents = [far[0] - near[0], far[1] - near[1], near[2] - far[2]];
    if extents.iter().any(|&extent| extent <= 0.0) {
        return Err(MeshError::invalid_argument(format!(
            "cube of size {} at {center:?} collapses in f32",
            half * 2.0
        )));
    }

    Ok(corners)
}

/// Eight shared vertices with front/back normals only.
fn shared_corners(corners: &[Vec4; CORNER_COUNT]) -> Attributes {
    let positions = corners.to_vec();
    let normals = (0..CORNER_COUNT)
        .map(|i| if i < FRONT_CORNERS { FRONT_NORMAL } else { BACK_NORMAL })
        .collect();

    let mut indices = Vec::with_capacity(INDEX_COUNT);
    for face in &FACES {
        let [a, b, c, d] = face.corners;
        indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    (positions, normals, indices)
}

/// Four vertices per face, each carrying the face's outward normal.
fn faceted_faces(corners: &[Vec4; CORNER_COUNT]) -> Attributes {
    let mut positions = Vec::with_capacity(FACETED_VERTEX_COUNT);
    let mut normals = Vec::with_capacity(FACETED_VERTEX_COUNT);
    let mut indices = Vec::with_capacity(INDEX_COUNT);

    for face in &FACES {
        let base = positions.len() as u32;
        let [nx, ny, nz] = face.normal;
        for corner in face.corners {
            positions.push(corners[corner as usize]);
            normals.push([nx, ny, nz, DIRECTION_W]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (positions, normals, indices)
}

fn uniform_colors(color: Color, vertex_count: usize) -> Vec<Vec4> {
    if !color.is_in_range() {
        log::warn!("Cube color {color:?} is outside 0..=255, passing it through");
    }
    vec![color.to_rgba(); vertex_count]
}

// =============================================================================
// BUILDER
// =============================================================================

/// Fluent front end over [`build`].
///
/// # Example
///
/// ```rust
/// use cube_mesh::{Color, CubeMeshBuilder};
/// use glam::DVec3;
///
/// let mesh = CubeMeshBuilder::new()
///     .center(DVec3::new(5.0, 0.0, 0.0))
///     .size(4.0)
///     .color(Color::new(255, 0, 0))
///     .build()
///     .unwrap();
/// assert_eq!(mesh.colors().unwrap()[7], [1.0, 0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeMeshBuilder {
    descriptor: CubeDescriptor,
}

impl Default for CubeMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeMeshBuilder {
    /// Starts from a unit cube at the origin without color.
    pub fn new() -> Self {
        Self {
            descriptor: CubeDescriptor::new(Point3::ZERO, 1.0),
        }
    }

    /// Sets the center point.
    pub fn center(mut self, center: Point3) -> Self {
        self.descriptor.center = center;
        self
    }

    /// Sets the edge length.
    pub fn size(mut self, size: f64) -> Self {
        self.descriptor.size = size;
        self
    }

    /// Sets the uniform color.
    pub fn color(mut self, color: Color) -> Self {
        self.descriptor.color = Some(color);
        self
    }

    /// Sets the vertex topology.
    pub fn topology(mut self, topology: CubeTopology) -> Self {
        self.descriptor.topology = topology;
        self
    }

    /// Returns the descriptor assembled so far.
    pub fn descriptor(&self) -> &CubeDescriptor {
        &self.descriptor
    }

    /// Builds the mesh. See [`build`].
    pub fn build(&self) -> MeshResult<MeshBuffers> {
        build(&self.descriptor)
    }
}
