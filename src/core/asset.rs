//! glTF decoding into a flat, render-ready model.
//!
//! Supports `.gltf` (JSON with external or `data:` buffers) and `.glb`.
//! External buffers are not fetched here: [`plan_buffers`] says which URLs
//! the caller must download, and [`build_model`] consumes the bytes once
//! they are all available. Node hierarchies are flattened so every mesh
//! part carries its accumulated asset-space transform.

use base64::Engine as _;
use glam::{Mat4, Vec3};

use super::bounds::Aabb;
use super::load::LoadError;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Linear RGBA base color factor.
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// One triangle-list primitive placed in asset space.
#[derive(Clone, Debug)]
pub struct MeshPart {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    /// Index into [`ModelAsset::materials`].
    pub material: usize,
    /// Accumulated node transform.
    pub transform: Mat4,
}

#[derive(Clone, Debug, Default)]
pub struct ModelAsset {
    pub parts: Vec<MeshPart>,
    pub materials: Vec<Material>,
}

impl ModelAsset {
    /// Asset-space bounds over every transformed vertex.
    pub fn bounds(&self) -> Aabb {
        let mut b = Aabb::EMPTY;
        for part in &self.parts {
            for v in &part.vertices {
                b.expand(part.transform.transform_point3(Vec3::from(v.position)));
            }
        }
        b
    }

    /// Overwrite the RGB of every material, keeping alpha.
    pub fn recolor(&mut self, rgb: [f32; 3]) {
        for m in &mut self.materials {
            m.base_color = [rgb[0], rgb[1], rgb[2], m.base_color[3]];
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.indices.len() / 3).sum()
    }

    pub fn base_color(&self, part: &MeshPart) -> [f32; 4] {
        self.materials
            .get(part.material)
            .map(|m| m.base_color)
            .unwrap_or([1.0, 1.0, 1.0, 1.0])
    }
}

/// Where the bytes of one glTF buffer come from.
#[derive(Clone, Debug, PartialEq)]
pub enum BufferSlot {
    Ready(Vec<u8>),
    Fetch(String),
}

pub fn parse_document(bytes: &[u8]) -> Result<gltf::Gltf, LoadError> {
    gltf::Gltf::from_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Resolve every buffer to either embedded bytes or a URL relative to `asset_url`.
pub fn plan_buffers(doc: &gltf::Gltf, asset_url: &str) -> Result<Vec<BufferSlot>, LoadError> {
    doc.buffers()
        .map(|buffer| match buffer.source() {
            gltf::buffer::Source::Bin => doc
                .blob
                .clone()
                .map(BufferSlot::Ready)
                .ok_or_else(|| LoadError::Buffer {
                    index: buffer.index(),
                    reason: "GLB binary chunk missing".into(),
                }),
            gltf::buffer::Source::Uri(uri) if uri.starts_with("data:") => decode_data_uri(uri)
                .map(BufferSlot::Ready)
                .map_err(|reason| LoadError::Buffer {
                    index: buffer.index(),
                    reason,
                }),
            gltf::buffer::Source::Uri(uri) => Ok(BufferSlot::Fetch(resolve_relative(asset_url, uri))),
        })
        .collect()
}

/// Build the flattened model once every buffer is available.
pub fn build_model(doc: &gltf::Gltf, buffers: &[Vec<u8>]) -> Result<ModelAsset, LoadError> {
    for buffer in doc.buffers() {
        let have = buffers.get(buffer.index()).map(|b| b.len()).unwrap_or(0);
        if have < buffer.length() {
            return Err(LoadError::Buffer {
                index: buffer.index(),
                reason: format!("expected {} bytes, got {}", buffer.length(), have),
            });
        }
    }

    let mut materials: Vec<Material> = doc
        .materials()
        .map(|m| Material {
            name: m.name().unwrap_or("").to_string(),
            base_color: m.pbr_metallic_roughness().base_color_factor(),
        })
        .collect();
    let default_material = materials.len();
    materials.push(Material::default());

    let mut parts = Vec::new();
    let roots: Vec<gltf::Node> = match doc.default_scene().or_else(|| doc.scenes().next()) {
        Some(scene) => scene.nodes().collect(),
        None => doc.nodes().collect(),
    };
    let mut stack: Vec<(gltf::Node, Mat4)> = roots.into_iter().map(|n| (n, Mat4::IDENTITY)).collect();
    while let Some((node, parent)) = stack.pop() {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for prim in mesh.primitives() {
                if prim.mode() != gltf::mesh::Mode::Triangles {
                    log::warn!("[asset] skipping non-triangle primitive in mesh {}", mesh.index());
                    continue;
                }
                let reader = prim.reader(|b| buffers.get(b.index()).map(|d| d.as_slice()));
                let Some(positions) = reader.read_positions() else {
                    continue;
                };
                let positions: Vec<[f32; 3]> = positions.collect();
                let indices: Vec<u32> = reader
                    .read_indices()
                    .map(|i| i.into_u32().collect())
                    .unwrap_or_else(|| (0..positions.len() as u32).collect());
                let normals: Vec<[f32; 3]> = match reader.read_normals() {
                    Some(n) => n.collect(),
                    None => smooth_normals(&positions, &indices),
                };
                let vertices = positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| MeshVertex {
                        position: *p,
                        normal: normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                    })
                    .collect();
                parts.push(MeshPart {
                    vertices,
                    indices,
                    material: prim.material().index().unwrap_or(default_material),
                    transform: world,
                });
            }
        }
        for child in node.children() {
            stack.push((child, world));
        }
    }

    let asset = ModelAsset { parts, materials };
    if asset.triangle_count() == 0 {
        return Err(LoadError::NoGeometry);
    }
    Ok(asset)
}

/// Decode an asset whose buffers are all embedded (GLB or `data:` URIs).
pub fn decode_embedded(bytes: &[u8]) -> Result<ModelAsset, LoadError> {
    let doc = parse_document(bytes)?;
    let buffers = plan_buffers(&doc, "")?
        .into_iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            BufferSlot::Ready(data) => Ok(data),
            BufferSlot::Fetch(url) => Err(LoadError::Buffer {
                index,
                reason: format!("external buffer {} not available", url),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    build_model(&doc, &buffers)
}

/// Join a buffer URI onto the directory of the asset URL.
pub fn resolve_relative(asset_url: &str, uri: &str) -> String {
    if uri.contains("://") || uri.starts_with('/') {
        return uri.to_string();
    }
    match asset_url.rfind('/') {
        Some(idx) => format!("{}{}", &asset_url[..=idx], uri),
        None => uri.to_string(),
    }
}

fn decode_data_uri(uri: &str) -> Result<Vec<u8>, String> {
    let (_, payload) = uri
        .split_once(";base64,")
        .ok_or_else(|| "only base64 data URIs are supported".to_string())?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| e.to_string())
}

fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let (pa, pb, pc) = (
            Vec3::from(positions[a]),
            Vec3::from(positions[b]),
            Vec3::from(positions[c]),
        );
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
