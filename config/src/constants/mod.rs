//! Layout values shared across the cube mesh pipeline.
//!
//! Each public item in this module documents its purpose so that downstream
//! crates can stay declarative and avoid scattering literals.

// =============================================================================
// CUBE TOPOLOGY
// =============================================================================

/// Number of shared corner vertices of a cube.
///
/// # Examples
/// ```
/// use config::constants::CORNER_COUNT;
/// assert_eq!(CORNER_COUNT, 8);
/// ```
pub const CORNER_COUNT: usize = 8;

/// Number of faces of a cube.
pub const FACE_COUNT: usize = 6;

/// Number of triangles used to cover one square face.
pub const TRIANGLES_PER_FACE: usize = 2;

/// Number of vertices of one face quad.
pub const VERTICES_PER_FACE: usize = 4;

/// Total triangle count of a cube, independent of vertex sharing.
pub const TRIANGLE_COUNT: usize = FACE_COUNT * TRIANGLES_PER_FACE;

/// Total index count of a cube (three indices per triangle).
///
/// # Examples
/// ```
/// use config::constants::INDEX_COUNT;
/// assert_eq!(INDEX_COUNT, 36);
/// ```
pub const INDEX_COUNT: usize = TRIANGLE_COUNT * 3;

/// Vertex count when every face owns its own four vertices.
///
/// Used by the faceted topology, where each vertex carries the true
/// normal of its face.
pub const FACETED_VERTEX_COUNT: usize = FACE_COUNT * VERTICES_PER_FACE;

// =============================================================================
// ATTRIBUTE LAYOUT
// =============================================================================

/// Number of float components stored per vertex in every attribute buffer.
///
/// Positions are `(x, y, z, 1)`, normals `(x, y, z, 0)` and colors
/// `(r, g, b, a)`.
pub const COMPONENTS_PER_VERTEX: usize = 4;

/// Homogeneous `w` of a point.
pub const POINT_W: f32 = 1.0;

/// Homogeneous `w` of a direction.
pub const DIRECTION_W: f32 = 0.0;

/// Size in bytes of one float component.
pub const FLOAT_BYTES: usize = 4;

/// Size in bytes of one index.
pub const INDEX_BYTES: usize = 4;

/// Distance in bytes between two consecutive vertices of one attribute buffer.
///
/// # Examples
/// ```
/// use config::constants::VERTEX_STRIDE_BYTES;
/// assert_eq!(VERTEX_STRIDE_BYTES, 16);
/// ```
pub const VERTEX_STRIDE_BYTES: usize = COMPONENTS_PER_VERTEX * FLOAT_BYTES;

// =============================================================================
// COLOR
// =============================================================================

/// Value of a fully saturated 8-bit color channel.
///
/// Channels are divided by this value to land in `[0.0, 1.0]`.
///
/// # Examples
/// ```
/// use config::constants::COLOR_CHANNEL_MAX;
/// assert_eq!(128.0 / COLOR_CHANNEL_MAX, 128.0 / 255.0);
/// ```
pub const COLOR_CHANNEL_MAX: f32 = 255.0;

/// Alpha appended to every generated vertex color.
pub const OPAQUE_ALPHA: f32 = 1.0;
