// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! GLTF/GLB exporter

use crate::engine::{Material, PanelRole};
use crate::views::{CabinetMesh, MeshPart};
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use std::path::Path;

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E_4942; // "BIN\0"

const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;
const ARRAY_BUFFER: u32 = 34962;
const ELEMENT_ARRAY_BUFFER: u32 = 34963;

/// Surface finish shown in viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Finish {
    Carcass,
    Kickplate,
    Backing,
    Door,
}

impl Finish {
    fn of(part: &MeshPart) -> Self {
        match (part.role, part.material) {
            (PanelRole::Door, _) => Finish::Door,
            (_, Material::MDF) => Finish::Backing,
            (PanelRole::Kickplate, _) => Finish::Kickplate,
            _ => Finish::Carcass,
        }
    }

    fn to_json(self) -> Value {
        let (name, color) = match self {
            Finish::Carcass => ("melamine_white", [0.94, 0.94, 0.92, 1.0]),
            Finish::Kickplate => ("kickplate_grey", [0.45, 0.45, 0.45, 1.0]),
            Finish::Backing => ("mdf_brown", [0.55, 0.40, 0.26, 1.0]),
            Finish::Door => ("door_glass", [0.55, 0.72, 0.92, 0.55]),
        };
        let mut material = json!({
            "name": name,
            "pbrMetallicRoughness": {
                "baseColorFactor": color,
                "metallicFactor": 0.0,
                "roughnessFactor": 0.8
            }
        });
        if self == Finish::Door {
            material["alphaMode"] = json!("BLEND");
            material["doubleSided"] = json!(true);
        }
        material
    }
}

/// Export the cabinet to `.glb`, or to `.gltf` with the buffer embedded as a data URI
pub fn export<P: AsRef<Path>>(mesh: &CabinetMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let is_glb = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("glb"));

    let bytes = if is_glb {
        to_glb(mesh)?
    } else {
        serde_json::to_vec_pretty(&to_gltf_json(mesh))?
    };

    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write glTF file {}", path.display()))?;
    Ok(())
}

/// Binary glTF container
pub fn to_glb(mesh: &CabinetMesh) -> Result<Vec<u8>> {
    let (document, buffer_data) = create_gltf_json(mesh);

    let json_string = serde_json::to_string(&document)?;
    let json_length = align_to_multiple_of_four(json_string.len());
    let buffer_length = align_to_multiple_of_four(buffer_data.len());
    let total_length = 12 + 8 + json_length + 8 + buffer_length;

    let mut out = Vec::with_capacity(total_length);

    // GLB header
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total_length as u32).to_le_bytes());

    // JSON chunk, space padded
    out.extend_from_slice(&(json_length as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(json_string.as_bytes());
    out.resize(out.len() + json_length - json_string.len(), b' ');

    // BIN chunk, zero padded
    out.extend_from_slice(&(buffer_length as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
    out.extend_from_slice(&buffer_data);
    out.resize(out.len() + buffer_length - buffer_data.len(), 0);

    Ok(out)
}

/// Self-contained glTF document
pub fn to_gltf_json(mesh: &CabinetMesh) -> Value {
    let (mut document, buffer_data) = create_gltf_json(mesh);
    document["buffers"][0]["uri"] = json!(format!(
        "data:application/octet-stream;base64,{}",
        STANDARD.encode(&buffer_data)
    ));
    document
}

fn create_gltf_json(mesh: &CabinetMesh) -> (Value, Vec<u8>) {
    let mut buffer_data: Vec<u8> = Vec::new();
    let mut accessors = Vec::new();
    let mut buffer_views = Vec::new();
    let mut meshes = Vec::new();
    let mut nodes = Vec::new();
    let mut finishes: Vec<Finish> = Vec::new();

    for part in &mesh.parts {
        let finish = Finish::of(part);
        let material = match finishes.iter().position(|f| *f == finish) {
            Some(index) => index,
            None => {
                finishes.push(finish);
                finishes.len() - 1
            }
        };

        let vertex_count = part.mesh.vertices.len();
        let (min, max) = calculate_bounds(part);

        // Positions
        let position_offset = buffer_data.len();
        for vertex in &part.mesh.vertices {
            for c in [vertex.position.x, vertex.position.y, vertex.position.z] {
                buffer_data.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        let position_view = push_view(&mut buffer_views, position_offset, buffer_data.len(), ARRAY_BUFFER);

        // Normals
        let normal_offset = buffer_data.len();
        for vertex in &part.mesh.vertices {
            for c in [vertex.normal.x, vertex.normal.y, vertex.normal.z] {
                buffer_data.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        let normal_view = push_view(&mut buffer_views, normal_offset, buffer_data.len(), ARRAY_BUFFER);

        // Indices
        let indices_offset = buffer_data.len();
        for triangle in &part.mesh.triangles {
            for index in triangle.indices {
                buffer_data.extend_from_slice(&(index as u32).to_le_bytes());
            }
        }
        let indices_view = push_view(&mut buffer_views, indices_offset, buffer_data.len(), ELEMENT_ARRAY_BUFFER);

        let first_accessor = accessors.len();
        accessors.push(json!({
            "bufferView": position_view,
            "componentType": FLOAT,
            "count": vertex_count,
            "type": "VEC3",
            "min": min,
            "max": max
        }));
        accessors.push(json!({
            "bufferView": normal_view,
            "componentType": FLOAT,
            "count": vertex_count,
            "type": "VEC3"
        }));
        accessors.push(json!({
            "bufferView": indices_view,
            "componentType": UNSIGNED_INT,
            "count": part.mesh.triangles.len() * 3,
            "type": "SCALAR"
        }));

        meshes.push(json!({
            "name": part.name(),
            "primitives": [{
                "attributes": {
                    "POSITION": first_accessor,
                    "NORMAL": first_accessor + 1
                },
                "indices": first_accessor + 2,
                "material": material,
                "mode": 4
            }]
        }));
        nodes.push(json!({
            "name": part.name(),
            "mesh": meshes.len() - 1,
            "extras": { "role": part.role.as_str() }
        }));
    }

    let gltf = json!({
        "asset": {
            "generator": concat!("cabinetkit ", env!("CARGO_PKG_VERSION")),
            "version": "2.0"
        },
        "scene": 0,
        "scenes": [{ "nodes": (0..nodes.len()).collect::<Vec<_>>() }],
        "nodes": nodes,
        "meshes": meshes,
        "materials": finishes.iter().map(|f| f.to_json()).collect::<Vec<_>>(),
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [{ "byteLength": buffer_data.len() }]
    });

    (gltf, buffer_data)
}

fn push_view(views: &mut Vec<Value>, start: usize, end: usize, target: u32) -> usize {
    views.push(json!({
        "buffer": 0,
        "byteOffset": start,
        "byteLength": end - start,
        "target": target
    }));
    views.len() - 1
}

fn calculate_bounds(part: &MeshPart) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for vertex in &part.mesh.vertices {
        let p = [
            vertex.position.x as f32,
            vertex.position.y as f32,
            vertex.position.z as f32,
        ];
        for axis in 0..3 {
            min[axis] = min[axis].min(p[axis]);
            max[axis] = max[axis].max(p[axis]);
        }
    }

    (min, max)
}

fn align_to_multiple_of_four(n: usize) -> usize {
    (n + 3) & !3
}
