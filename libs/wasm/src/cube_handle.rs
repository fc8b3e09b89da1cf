//! # Cube Handle
//!
//! WASM-friendly wrapper for cube buffers that can be transferred to JavaScript.

use cube_mesh::{DrawRecord, MeshBuffers, MeshResult};
use wasm_bindgen::prelude::*;

/// A handle to cube buffers that can be accessed from JavaScript.
///
/// Every attribute is a flat array of vec4 components, ready for
/// `gl.bufferData` with `gl.vertexAttribPointer(loc, 4, gl.FLOAT, false, 0, 0)`.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const cube = build_cube(0, 0, 0, 2, null, false);
///
/// gl.bindBuffer(gl.ELEMENT_ARRAY_BUFFER, idxBuffer);
/// gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, cube.indices(), gl.STATIC_DRAW);
///
/// gl.bindBuffer(gl.ARRAY_BUFFER, posBuffer);
/// gl.bufferData(gl.ARRAY_BUFFER, cube.positions(), gl.STATIC_DRAW);
///
/// gl.bindBuffer(gl.ARRAY_BUFFER, norBuffer);
/// gl.bufferData(gl.ARRAY_BUFFER, cube.normals(), gl.STATIC_DRAW);
///
/// const count = cube.index_count;
/// ```
#[wasm_bindgen]
#[derive(Debug)]
pub struct CubeHandle {
    mesh: MeshBuffers,
    draw: DrawRecord,
}

#[wasm_bindgen]
impl CubeHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.draw.vertex_count
    }

    /// Returns the number of indices to draw.
    #[wasm_bindgen(getter)]
    pub fn index_count(&self) -> u32 {
        self.draw.index_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.draw.triangle_count
    }

    /// Returns true if the cube has a color buffer.
    #[wasm_bindgen(getter)]
    pub fn has_colors(&self) -> bool {
        self.mesh.has_colors()
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, 1, x, y, z, 1, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.positions_flat())
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, 0, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.mesh.normals_flat())
    }

    /// Returns the vertex colors as a Float32Array, if available.
    ///
    /// Format: [r, g, b, a, r, g, b, a, ...]
    /// Length: vertex_count * 4
    #[wasm_bindgen]
    pub fn colors(&self) -> Option<js_sys::Float32Array> {
        self.mesh.colors_flat().map(js_sys::Float32Array::from)
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: index_count
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.mesh.indices())
    }
}

impl CubeHandle {
    /// Wraps finished buffers together with their draw counts.
    ///
    /// # Errors
    ///
    /// Fails when a count does not fit in the `u32` range JavaScript draws with.
    pub fn from_mesh(mesh: MeshBuffers) -> MeshResult<Self> {
        let draw = DrawRecord::for_mesh(&mesh)?;
        Ok(Self { mesh, draw })
    }

    /// Borrows the underlying buffers.
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Returns the counts a renderer issues draws with.
    pub fn draw(&self) -> DrawRecord {
        self.draw
    }
}
