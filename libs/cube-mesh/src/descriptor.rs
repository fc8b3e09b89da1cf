//! # Cube Descriptor
//!
//! Input parameters for the cube builder: where the cube sits, how large it
//! is, which color it carries and how its vertices are laid out.

use config::constants::{COLOR_CHANNEL_MAX, OPAQUE_ALPHA};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::buffers::{MeshBuffers, Vec4};
use crate::error::{MeshError, MeshResult};

/// A 3D coordinate. Geometry is computed in f64 and narrowed to f32 on export.
pub type Point3 = DVec3;

// =============================================================================
// COLOR
// =============================================================================

/// Base color applied uniformly to every vertex.
///
/// Channels are nominally in `0..=255`. They are stored signed so that
/// out-of-range values reach the color buffer unchanged instead of being
/// clamped or rejected.
///
/// # Example
///
/// ```rust
/// use cube_mesh::Color;
///
/// let red = Color::new(255, 0, 0);
/// assert_eq!(red.to_rgba(), [1.0, 0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    /// Creates a color from 8-bit style channels.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Normalizes each channel by 255 and appends an opaque alpha.
    pub fn to_rgba(self) -> Vec4 {
        [
            self.r as f32 / COLOR_CHANNEL_MAX,
            self.g as f32 / COLOR_CHANNEL_MAX,
            self.b as f32 / COLOR_CHANNEL_MAX,
            OPAQUE_ALPHA,
        ]
    }

    /// Returns true when every channel lies in `0..=255`.
    pub fn is_in_range(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|channel| (0..=255).contains(channel))
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(i32::from(r), i32::from(g), i32::from(b))
    }
}

// =============================================================================
// TOPOLOGY
// =============================================================================

/// How the cube's vertices are shared between faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CubeTopology {
    /// Eight shared corners. Corners 0-3 carry the front normal `+Z` and
    /// corners 4-7 the back normal `-Z`, so side faces inherit those.
    /// Matches existing renders bit for bit.
    #[default]
    SharedCorners,
    /// Twenty-four vertices, four per face, each with its face's outward
    /// normal. Same face order and winding as [`CubeTopology::SharedCorners`].
    FacetedFaces,
}

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Everything needed to build one cube.
///
/// # Example
///
/// ```rust
/// use cube_mesh::{Color, CubeDescriptor};
/// use glam::DVec3;
///
/// let descriptor = CubeDescriptor::new(DVec3::new(5.0, 0.0, 0.0), 4.0)
///     .with_color(Color::new(255, 0, 0));
/// let mesh = descriptor.build().unwrap();
/// assert_eq!(mesh.positions()[0], [3.0, -2.0, 2.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeDescriptor {
    /// Center of the cube.
    pub center: Point3,
    /// Edge length, must be positive and finite.
    pub size: f64,
    /// Optional uniform color. No color buffer is produced without it.
    #[serde(default)]
    pub color: Option<Color>,
    /// Vertex layout of the generated mesh.
    #[serde(default)]
    pub topology: CubeTopology,
}

impl CubeDescriptor {
    /// Creates an uncolored descriptor with shared corners.
    pub fn new(center: Point3, size: f64) -> Self {
        Self {
            center,
            size,
            color: None,
            topology: CubeTopology::SharedCorners,
        }
    }

    /// Sets the uniform color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the vertex topology.
    pub fn with_topology(mut self, topology: CubeTopology) -> Self {
        self.topology = topology;
        self
    }

    /// Half the edge length.
    #[inline]
    pub fn half_size(&self) -> f64 {
        self.size / 2.0
    }

    /// Rejects descriptors that cannot produce a well-formed cube.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidArgument`] when the size is not a positive finite
    /// number or the center has a non-finite component.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.size.is_finite() {
            return Err(MeshError::invalid_argument(format!(
                "cube size must be finite: {}",
                self.size
            )));
        }
        if self.size <= 0.0 {
            return Err(MeshError::invalid_argument(format!(
                "cube size must be positive: {}",
                self.size
            )));
        }
        if !self.center.is_finite() {
            return Err(MeshError::invalid_argument(format!(
                "cube center must be finite: {:?}",
                self.center
            )));
        }
        Ok(())
    }

    /// Builds the mesh described by this descriptor.
    ///
    /// Shorthand for [`crate::cube::build`].
    pub fn build(&self) -> MeshResult<MeshBuffers> {
        crate::cube::build(self)
    }
}
