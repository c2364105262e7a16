// Host-side tests for glTF decoding.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod viewer_core;

use base64::Engine as _;
use glam::Vec3;
use viewer_core::asset::{self, BufferSlot};
use viewer_core::LoadError;

/// One triangle (0,0,0) (1,0,0) (0,2,0) with u16 indices, packed as glTF expects.
fn triangle_buffer() -> Vec<u8> {
    let mut bytes = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]] {
        for c in p {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bytes.extend_from_slice(&i.to_le_bytes());
    }
    bytes
}

fn triangle_gltf(buffer_uri: &str, byte_length: usize) -> String {
    format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [ {{ "nodes": [0] }} ],
  "nodes": [ {{ "mesh": 0, "translation": [1.0, 0.0, 0.0] }} ],
  "meshes": [ {{ "primitives": [ {{ "attributes": {{ "POSITION": 0 }}, "indices": 1, "material": 0 }} ] }} ],
  "materials": [ {{ "name": "case", "pbrMetallicRoughness": {{ "baseColorFactor": [1.0, 0.0, 0.0, 0.5] }} }} ],
  "buffers": [ {{ "uri": "{uri}", "byteLength": {len} }} ],
  "bufferViews": [
    {{ "buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962 }},
    {{ "buffer": 0, "byteOffset": 36, "byteLength": 6, "target": 34963 }}
  ],
  "accessors": [
    {{ "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
       "min": [0.0, 0.0, 0.0], "max": [1.0, 2.0, 0.0] }},
    {{ "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }}
  ]
}}"#,
        uri = buffer_uri,
        len = byte_length
    )
}

fn embedded_triangle() -> String {
    let data = triangle_buffer();
    let uri = format!(
        "data:application/octet-stream;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&data)
    );
    triangle_gltf(&uri, data.len())
}

#[test]
fn decodes_embedded_triangle() {
    let model = asset::decode_embedded(embedded_triangle().as_bytes()).unwrap();
    assert_eq!(model.parts.len(), 1);
    assert_eq!(model.triangle_count(), 1);

    let part = &model.parts[0];
    assert_eq!(part.indices, vec![0, 1, 2]);
    assert_eq!(part.vertices[2].position, [0.0, 2.0, 0.0]);
    // No NORMAL attribute: face normal of a counter-clockwise triangle in the XY plane
    for v in &part.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-6);
    }
    assert_eq!(model.base_color(part), [1.0, 0.0, 0.0, 0.5]);
}

#[test]
fn bounds_include_node_transform() {
    let model = asset::decode_embedded(embedded_triangle().as_bytes()).unwrap();
    let b = model.bounds();
    assert!((b.min - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    assert!((b.max - Vec3::new(2.0, 2.0, 0.0)).length() < 1e-6);
}

#[test]
fn recolor_keeps_alpha() {
    let mut model = asset::decode_embedded(embedded_triangle().as_bytes()).unwrap();
    model.recolor([0.5, 0.5, 0.5]);
    let part = &model.parts[0];
    assert_eq!(model.base_color(part), [0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn external_buffers_resolve_next_to_the_document() {
    let json = triangle_gltf("scene.bin", 42);
    let doc = asset::parse_document(json.as_bytes()).unwrap();
    let slots = asset::plan_buffers(&doc, "assets/models/3D_smartwatch/scene.gltf").unwrap();
    assert_eq!(
        slots,
        vec![BufferSlot::Fetch("assets/models/3D_smartwatch/scene.bin".into())]
    );

    let model = asset::build_model(&doc, &[triangle_buffer()]).unwrap();
    assert_eq!(model.triangle_count(), 1);
}

#[test]
fn short_buffer_is_rejected() {
    let json = triangle_gltf("scene.bin", 42);
    let doc = asset::parse_document(json.as_bytes()).unwrap();
    let err = asset::build_model(&doc, &[vec![0u8; 10]]).unwrap_err();
    assert!(matches!(err, LoadError::Buffer { index: 0, .. }));
}

#[test]
fn missing_external_buffer_fails_embedded_decode() {
    let json = triangle_gltf("scene.bin", 42);
    let err = asset::decode_embedded(json.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Buffer { .. }));
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = asset::decode_embedded(b"<html>404</html>").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn document_without_meshes_has_no_geometry() {
    let err = asset::decode_embedded(br#"{"asset":{"version":"2.0"}}"#).unwrap_err();
    assert!(matches!(err, LoadError::NoGeometry));
}

#[test]
fn relative_uris_join_the_asset_directory() {
    assert_eq!(asset::resolve_relative("a/b/scene.gltf", "scene.bin"), "a/b/scene.bin");
    assert_eq!(asset::resolve_relative("scene.gltf", "scene.bin"), "scene.bin");
    assert_eq!(
        asset::resolve_relative("a/scene.gltf", "https://cdn.test/x.bin"),
        "https://cdn.test/x.bin"
    );
    assert_eq!(asset::resolve_relative("a/scene.gltf", "/abs/x.bin"), "/abs/x.bin");
}

#[test]
fn strip_primitives_are_skipped() {
    let doc = embedded_triangle().replace(r#""material": 0 }"#, r#""material": 0, "mode": 5 }"#);
    assert!(doc.contains(r#""mode": 5"#));
    let err = asset::decode_embedded(doc.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::NoGeometry));
}

#[test]
fn base_color_texture_is_ignored_in_favor_of_the_factor() {
    let doc = embedded_triangle().replace(
        r#""baseColorFactor": [1.0, 0.0, 0.0, 0.5] }"#,
        r#""baseColorFactor": [1.0, 0.0, 0.0, 0.5], "baseColorTexture": { "index": 0 } }"#,
    );
    let doc = doc.replacen(
        r#""buffers": ["#,
        r#""textures": [ { "source": 0 } ], "images": [ { "uri": "case.png" } ], "buffers": ["#,
        1,
    );
    assert!(doc.contains("baseColorTexture"));
    let model = asset::decode_embedded(doc.as_bytes()).unwrap();
    assert_eq!(model.base_color(&model.parts[0]), [1.0, 0.0, 0.0, 0.5]);
}
