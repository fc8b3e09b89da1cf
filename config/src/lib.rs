//! # Config Crate
//!
//! Centralized constants for the cube mesh pipeline. Every number that is part
//! of the buffer layout contract between the mesh builder and a render backend
//! is defined here, so the builder, the upload adapter and the browser surface
//! agree on it.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{COMPONENTS_PER_VERTEX, FLOAT_BYTES, VERTEX_STRIDE_BYTES};
//!
//! // Every vertex attribute is a tightly packed vec4 of f32.
//! assert_eq!(VERTEX_STRIDE_BYTES, COMPONENTS_PER_VERTEX * FLOAT_BYTES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Backend-Agnostic**: Sizes are expressed in bytes, not API enums

pub mod constants;
