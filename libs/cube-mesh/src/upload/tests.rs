//! Tests for the upload adapter.

use super::*;
use crate::descriptor::{Color, CubeDescriptor};
use glam::DVec3;

fn plain_cube() -> MeshBuffers {
    CubeDescriptor::new(DVec3::ZERO, 2.0).build().unwrap()
}

fn colored_cube() -> MeshBuffers {
    CubeDescriptor::new(DVec3::ZERO, 2.0)
        .with_color(Color::new(255, 128, 0))
        .build()
        .unwrap()
}

/// Uploader that fails on one slot.
struct FailingUploader {
    fail_on: BufferSlot,
    seen: Vec<BufferSlot>,
}

#[derive(Debug, PartialEq)]
struct BackendFailure;

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of GPU memory")
    }
}

impl std::error::Error for BackendFailure {}

impl GeometryUploader for FailingUploader {
    type Error = BackendFailure;

    fn upload(&mut self, slot: BufferSlot, _: &[u8], _: UsageHint) -> Result<(), Self::Error> {
        self.seen.push(slot);
        if slot == self.fail_on {
            Err(BackendFailure)
        } else {
            Ok(())
        }
    }
}

/// Slots are filled index, position, normal; no color slot without color.
#[test]
fn test_uploads_three_slots_without_color() {
    let mut uploader = RecordingUploader::new();
    let draw = upload_mesh(&mut uploader, &plain_cube(), &UploadOptions::default()).unwrap();

    assert_eq!(
        uploader.slots(),
        vec![BufferSlot::Index, BufferSlot::Position, BufferSlot::Normal]
    );
    assert!(uploader.buffer(BufferSlot::Color).is_none());
    assert!(!draw.has_colors);
}

/// The color slot is used only when colors exist.
#[test]
fn test_uploads_color_slot_last() {
    let mut uploader = RecordingUploader::new();
    let draw = upload_mesh(&mut uploader, &colored_cube(), &UploadOptions::default()).unwrap();

    assert_eq!(uploader.slots().last(), Some(&BufferSlot::Color));
    assert_eq!(uploader.buffers().len(), 4);
    assert!(draw.has_colors);
}

/// The recorded bytes are exactly the mesh's byte views.
#[test]
fn test_uploaded_bytes_match_mesh() {
    let mesh = colored_cube();
    let mut uploader = RecordingUploader::new();
    upload_mesh(&mut uploader, &mesh, &UploadOptions::default()).unwrap();

    let bytes = |slot| uploader.buffer(slot).unwrap().bytes.as_slice();
    assert_eq!(bytes(BufferSlot::Index), mesh.index_bytes());
    assert_eq!(bytes(BufferSlot::Position), mesh.position_bytes());
    assert_eq!(bytes(BufferSlot::Normal), mesh.normal_bytes());
    assert_eq!(Some(bytes(BufferSlot::Color)), mesh.color_bytes());
}

/// Decoded buffers read back as the original values.
#[test]
fn test_recorded_buffers_decode() {
    let mut uploader = RecordingUploader::new();
    upload_mesh(&mut uploader, &colored_cube(), &UploadOptions::default()).unwrap();

    let positions = uploader.buffer(BufferSlot::Position).unwrap().floats();
    assert_eq!(positions.len(), 8 * 4);
    assert_eq!(&positions[..4], &[-1.0, -1.0, 1.0, 1.0]);

    let indices = uploader.buffer(BufferSlot::Index).unwrap().indices();
    assert_eq!(&indices[..6], &[0, 1, 2, 0, 2, 3]);

    let colors = uploader.buffer(BufferSlot::Color).unwrap().floats();
    assert_eq!(&colors[..4], &[1.0, 128.0 / 255.0, 0.0, 1.0]);
}

/// Everything is static by default.
#[test]
fn test_default_usage_is_static() {
    let mut uploader = RecordingUploader::new();
    upload_mesh(&mut uploader, &colored_cube(), &UploadOptions::default()).unwrap();

    assert!(uploader
        .buffers()
        .iter()
        .all(|b| b.usage == UsageHint::Static));
}

/// Positions and colors can be marked dynamic; normals and indices cannot.
#[test]
fn test_dynamic_options() {
    let options = UploadOptions::default()
        .with_dynamic_positions(true)
        .with_dynamic_colors(true);
    let mut uploader = RecordingUploader::new();
    upload_mesh(&mut uploader, &colored_cube(), &options).unwrap();

    let usage = |slot| uploader.buffer(slot).unwrap().usage;
    assert_eq!(usage(BufferSlot::Position), UsageHint::Dynamic);
    assert_eq!(usage(BufferSlot::Color), UsageHint::Dynamic);
    assert_eq!(usage(BufferSlot::Normal), UsageHint::Static);
    assert_eq!(usage(BufferSlot::Index), UsageHint::Static);
}

/// Draw counts follow the mesh.
#[test]
fn test_draw_record_counts() {
    let mut uploader = RecordingUploader::new();
    let draw = upload_mesh(&mut uploader, &plain_cube(), &UploadOptions::default()).unwrap();

    assert_eq!(draw.vertex_count, 8);
    assert_eq!(draw.index_count, 36);
    assert_eq!(draw.triangle_count, 12);
}

/// A backend failure names the slot and stops later uploads.
#[test]
fn test_backend_failure_stops_upload() {
    let mut uploader = FailingUploader {
        fail_on: BufferSlot::Position,
        seen: Vec::new(),
    };
    let err = upload_mesh(&mut uploader, &colored_cube(), &UploadOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        UploadError::Slot {
            slot: BufferSlot::Position,
            source: BackendFailure
        }
    ));
    assert_eq!(err.to_string(), "failed to upload position buffer: out of GPU memory");
    assert_eq!(uploader.seen, vec![BufferSlot::Index, BufferSlot::Position]);
}

/// Inconsistent buffers never reach the backend.
#[test]
fn test_invalid_mesh_is_not_uploaded() {
    let broken = MeshBuffers::from_parts(
        vec![[0.0, 0.0, 0.0, 1.0]; 3],
        vec![[0.0, 0.0, 1.0, 0.0]; 3],
        None,
        vec![0, 1, 7],
    );
    let mut uploader = RecordingUploader::new();
    let result = upload_mesh(&mut uploader, &broken, &UploadOptions::default());

    assert!(matches!(result, Err(UploadError::InvalidMesh(_))));
    assert!(uploader.buffers().is_empty());
}

#[test]
fn test_slot_display() {
    assert_eq!(BufferSlot::Index.to_string(), "index");
    assert_eq!(BufferSlot::Color.to_string(), "color");
}
