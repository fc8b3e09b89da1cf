//! Property tests for cube generation across many descriptors.
//!
//! Each case is run against the public API only.

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use cube_mesh::{
    build, upload_mesh, BufferSlot, Color, CubeDescriptor, CubeTopology, MeshError,
    RecordingUploader, UploadOptions,
};
use glam::DVec3;
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// Counts and index ranges
// ============================================================================

#[rstest]
#[case::unit(DVec3::ZERO, 1.0)]
#[case::tiny(DVec3::new(0.25, -0.5, 8.0), 1e-4)]
#[case::large(DVec3::new(-100.0, 50.0, 0.0), 1e4)]
#[case::fractional(DVec3::new(0.1, 0.2, 0.3), 0.7)]
fn counts_are_fixed(#[case] center: DVec3, #[case] size: f64) {
    init_logging();
    let mesh = build(&CubeDescriptor::new(center, size)).unwrap();

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.index_count(), 36);
    assert_eq!(mesh.normals().len(), 8);
    assert!(mesh.indices().iter().all(|&i| i < 8));
}

#[rstest]
#[case::shared(CubeTopology::SharedCorners, 8)]
#[case::faceted(CubeTopology::FacetedFaces, 24)]
fn indices_stay_in_range(#[case] topology: CubeTopology, #[case] vertices: usize) {
    let mesh = build(&CubeDescriptor::new(DVec3::ONE, 3.0).with_topology(topology)).unwrap();

    assert_eq!(mesh.vertex_count(), vertices);
    assert_eq!(mesh.index_count() % 3, 0);
    assert!(mesh.indices().iter().all(|&i| (i as usize) < vertices));
    assert!(mesh.validate().is_ok());
}

// ============================================================================
// Symmetry about the center
// ============================================================================

#[rstest]
#[case::origin(DVec3::ZERO, 2.0)]
#[case::offset(DVec3::new(5.0, 0.0, 0.0), 4.0)]
#[case::negative(DVec3::new(-3.5, -1.25, 10.0), 0.5)]
fn positions_are_symmetric(#[case] center: DVec3, #[case] size: f64) {
    let mesh = build(&CubeDescriptor::new(center, size)).unwrap();
    let half = size / 2.0;

    for axis in 0..3 {
        let values: BTreeSet<u32> = mesh
            .positions()
            .iter()
            .map(|p| p[axis].to_bits())
            .collect();
        assert_eq!(values.len(), 2, "axis {axis} has {} distinct values", values.len());

        let mut actual: Vec<f32> = values.into_iter().map(f32::from_bits).collect();
        actual.sort_by(f32::total_cmp);
        assert_relative_eq!(actual[0], (center[axis] - half) as f32);
        assert_relative_eq!(actual[1], (center[axis] + half) as f32);
    }

    assert!(mesh.positions().iter().all(|p| p[3] == 1.0));

    let (min, max) = mesh.bounding_box();
    assert_relative_eq!((min + max).x / 2.0, center.x, epsilon = 1e-5);
    assert_relative_eq!((max - min).y, size, epsilon = 1e-4 * size.max(1.0));
}

// ============================================================================
// Normals and colors
// ============================================================================

#[rstest]
#[case::small(0.1)]
#[case::big(250.0)]
fn shared_normals_are_front_then_back(#[case] size: f64) {
    let mesh = build(&CubeDescriptor::new(DVec3::new(1.0, -1.0, 2.0), size)).unwrap();

    assert!(mesh.normals()[..4].iter().all(|n| *n == [0.0, 0.0, 1.0, 0.0]));
    assert!(mesh.normals()[4..].iter().all(|n| *n == [0.0, 0.0, -1.0, 0.0]));
}

#[rstest]
#[case::red(Color::new(255, 0, 0))]
#[case::grey(Color::new(128, 128, 128))]
#[case::black(Color::new(0, 0, 0))]
#[case::mixed(Color::new(17, 200, 99))]
fn colors_are_uniform(#[case] color: Color) {
    let mesh = build(&CubeDescriptor::new(DVec3::ZERO, 1.0).with_color(color)).unwrap();
    let colors = mesh.colors().expect("color buffer");

    assert_eq!(colors.len(), 8);
    for rgba in colors {
        assert_relative_eq!(rgba[0], color.r as f32 / 255.0);
        assert_relative_eq!(rgba[1], color.g as f32 / 255.0);
        assert_relative_eq!(rgba[2], color.b as f32 / 255.0);
        assert_eq!(rgba[3], 1.0);
    }
}

#[test]
fn no_color_means_no_color_buffer() {
    let mesh = build(&CubeDescriptor::new(DVec3::ZERO, 1.0)).unwrap();
    assert!(mesh.colors().is_none());
    assert!(mesh.color_bytes().is_none());
}

// ============================================================================
// Determinism and errors
// ============================================================================

#[rstest]
#[case::shared(CubeTopology::SharedCorners)]
#[case::faceted(CubeTopology::FacetedFaces)]
fn build_is_deterministic(#[case] topology: CubeTopology) {
    let descriptor = CubeDescriptor::new(DVec3::new(0.3, 0.6, 0.9), 1.1)
        .with_color(Color::new(3, 5, 7))
        .with_topology(topology);

    assert_eq!(build(&descriptor).unwrap(), build(&descriptor).unwrap());
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-2.0)]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn invalid_size_is_rejected(#[case] size: f64) {
    let result = build(&CubeDescriptor::new(DVec3::ZERO, size));
    assert!(matches!(result, Err(MeshError::InvalidArgument { .. })));
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn origin_cube_scenario() {
    let mesh = build(&CubeDescriptor::new(DVec3::ZERO, 2.0)).unwrap();

    assert_eq!(mesh.positions()[0], [-1.0, -1.0, 1.0, 1.0]);
    assert_eq!(mesh.positions()[6], [1.0, 1.0, -1.0, 1.0]);
    assert_eq!(&mesh.indices()[0..3], &[0, 1, 2]);
    assert!(mesh.colors().is_none());
}

#[test]
fn translated_red_cube_scenario() {
    let mesh = build(
        &CubeDescriptor::new(DVec3::new(5.0, 0.0, 0.0), 4.0).with_color(Color::new(255, 0, 0)),
    )
    .unwrap();

    assert_eq!(mesh.positions()[0], [3.0, -2.0, 2.0, 1.0]);
    assert!(mesh
        .colors()
        .unwrap()
        .iter()
        .all(|c| *c == [1.0, 0.0, 0.0, 1.0]));
}

// ============================================================================
// Descriptor deserialization and end-to-end upload
// ============================================================================

#[test]
fn descriptor_from_json() {
    let json = r#"{ "center": [5.0, 0.0, 0.0], "size": 4.0, "color": { "r": 255, "g": 0, "b": 0 } }"#;
    let descriptor: CubeDescriptor = serde_json::from_str(json).unwrap();

    assert_eq!(descriptor.topology, CubeTopology::SharedCorners);
    assert_eq!(descriptor.color, Some(Color::new(255, 0, 0)));
    assert_eq!(descriptor.build().unwrap().positions()[0], [3.0, -2.0, 2.0, 1.0]);
}

#[test]
fn descriptor_json_selects_faceted_topology() {
    let json = r#"{ "center": [0.0, 0.0, 0.0], "size": 1.0, "topology": "faceted_faces" }"#;
    let descriptor: CubeDescriptor = serde_json::from_str(json).unwrap();

    assert_eq!(descriptor.topology, CubeTopology::FacetedFaces);
    assert_eq!(descriptor.build().unwrap().vertex_count(), 24);
}

#[test]
fn build_then_upload() {
    init_logging();
    let mesh = CubeDescriptor::new(DVec3::ZERO, 1.0)
        .with_color(Color::new(0, 255, 0))
        .build()
        .unwrap();

    let mut uploader = RecordingUploader::new();
    let draw = upload_mesh(
        &mut uploader,
        &mesh,
        &UploadOptions::default().with_dynamic_positions(true),
    )
    .unwrap();

    assert_eq!(draw.triangle_count, 12);
    assert_eq!(uploader.buffer(BufferSlot::Normal).unwrap().bytes.len(), 8 * 16);
    assert_eq!(uploader.buffer(BufferSlot::Index).unwrap().bytes.len(), 36 * 4);
}
