//! WASM-facing entry points for the cube mesh builder.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The JavaScript side owns the WebGL context and uploads the
//! typed arrays returned by [`CubeHandle`]. Native tests use
//! [`build_cube_internal`] to avoid depending on a JS host.
//!
//! ```
//! let cube = cube_mesh_wasm::build_cube_internal([0.0, 0.0, 0.0], 2.0, None, false).unwrap();
//! assert_eq!(cube.vertex_count(), 8);
//! ```

use cube_mesh::{Color, CubeDescriptor, CubeTopology, MeshError, Point3};
use wasm_bindgen::prelude::*;

mod cube_handle;

pub use cube_handle::CubeHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "cube-mesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes `log` output to the browser console.
///
/// Does nothing outside `wasm32`; host binaries install their own logger.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}

/// Builds a cube and returns its buffers for upload from JavaScript.
///
/// `color`, when given, must hold exactly three channels. `faceted` selects
/// 24 vertices with per-face normals instead of 8 shared corners.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message when
/// the parameters are invalid.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const cube = build_cube(0, 0, 0, 2, new Int32Array([255, 0, 0]), false);
/// // gl.bufferData(gl.ARRAY_BUFFER, cube.positions(), gl.STATIC_DRAW);
/// ```
#[wasm_bindgen]
pub fn build_cube(
    cx: f64,
    cy: f64,
    cz: f64,
    size: f64,
    color: Option<Vec<i32>>,
    faceted: bool,
) -> Result<CubeHandle, JsValue> {
    build_cube_internal([cx, cy, cz], size, color.as_deref(), faceted)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that builds a cube and returns Rust errors directly.
///
/// # Examples
/// ```
/// let cube = cube_mesh_wasm::build_cube_internal([5.0, 0.0, 0.0], 4.0, Some(&[255, 0, 0]), false)
///     .unwrap();
/// assert!(cube.has_colors());
/// ```
pub fn build_cube_internal(
    center: [f64; 3],
    size: f64,
    color: Option<&[i32]>,
    faceted: bool,
) -> Result<CubeHandle, MeshError> {
    let topology = if faceted {
        CubeTopology::FacetedFaces
    } else {
        CubeTopology::SharedCorners
    };

    let mut descriptor =
        CubeDescriptor::new(Point3::from_array(center), size).with_topology(topology);
    if let Some(channels) = color {
        descriptor = descriptor.with_color(parse_color(channels)?);
    }

    CubeHandle::from_mesh(descriptor.build()?)
}

fn parse_color(channels: &[i32]) -> Result<Color, MeshError> {
    match *channels {
        [r, g, b] => Ok(Color::new(r, g, b)),
        _ => Err(MeshError::invalid_argument(format!(
            "color needs 3 channels, got {}",
            channels.len()
        ))),
    }
}
