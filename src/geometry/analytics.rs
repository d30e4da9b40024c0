// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry analytics and statistics

use super::{BoundingBox, Mesh};
use serde::{Deserialize, Serialize};

/// Geometry statistics for an assembled mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryStats {
    /// Enclosed volume in mm³, summed over every closed shell
    pub volume: f64,
    /// Total surface area in mm²
    pub surface_area: f64,
    pub bbox: BoundingBox,
    pub vertex_count: usize,
    pub triangle_count: usize,
}

impl GeometryStats {
    pub fn empty() -> Self {
        Self {
            volume: 0.0,
            surface_area: 0.0,
            bbox: BoundingBox::empty(),
            vertex_count: 0,
            triangle_count: 0,
        }
    }
}

/// Analyze mesh geometry and compute statistics
pub fn analyze(mesh: &Mesh) -> GeometryStats {
    if mesh.is_empty() {
        return GeometryStats::empty();
    }

    GeometryStats {
        volume: calculate_volume(mesh),
        surface_area: calculate_surface_area(mesh),
        bbox: mesh.bounding_box(),
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
    }
}

/// Signed volume of triangles against the origin.
///
/// Disjoint outward-wound shells each contribute their own positive volume.
fn calculate_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0;

    for triangle in &mesh.triangles {
        let v0 = &mesh.vertices[triangle.indices[0]].position;
        let v1 = &mesh.vertices[triangle.indices[1]].position;
        let v2 = &mesh.vertices[triangle.indices[2]].position;

        volume += v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0;
    }

    volume.abs()
}

fn calculate_surface_area(mesh: &Mesh) -> f64 {
    mesh.triangles
        .iter()
        .map(|triangle| {
            let v0 = &mesh.vertices[triangle.indices[0]].position;
            let v1 = &mesh.vertices[triangle.indices[1]].position;
            let v2 = &mesh.vertices[triangle.indices[2]].position;
            (v1 - v0).cross(&(v2 - v0)).norm() / 2.0
        })
        .sum()
}
