// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 3D mesh view: one cuboid per physical panel

use crate::engine::{Material, PanelList, PanelRole};
use crate::geometry::{analyze, GeometryStats, Mesh, Primitive};
use tracing::debug;

/// One placed board
#[derive(Debug, Clone)]
pub struct MeshPart {
    pub role: PanelRole,
    pub material: Material,
    /// Index of the source panel in the list
    pub panel: usize,
    /// Which of the panel's instances this part is
    pub instance: usize,
    pub mesh: Mesh,
}

impl MeshPart {
    pub fn name(&self) -> String {
        format!("{}_{}_{}", self.role, self.panel, self.instance)
    }
}

/// Cabinet as separate parts, in panel-list order
#[derive(Debug, Clone, Default)]
pub struct CabinetMesh {
    pub parts: Vec<MeshPart>,
}

impl CabinetMesh {
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// All parts in a single triangle soup
    pub fn merged(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.parts.len() * 36, self.parts.len() * 12);
        for part in &self.parts {
            mesh.merge(&part.mesh);
        }
        mesh
    }

    pub fn stats(&self) -> GeometryStats {
        analyze(&self.merged())
    }
}

/// Expand every panel instance into a cuboid at its placement
pub fn build_mesh(list: &PanelList) -> CabinetMesh {
    let mut parts = Vec::with_capacity(list.summary.total_pieces as usize);

    for (index, panel) in list.iter().enumerate() {
        let template = Primitive::cuboid(panel.dimensions).to_mesh();
        for (instance, center) in panel.instances.iter().enumerate() {
            let mut mesh = template.clone();
            mesh.translate(&center.coords);
            parts.push(MeshPart {
                role: panel.role,
                material: panel.material,
                panel: index,
                instance,
                mesh,
            });
        }
    }

    debug!(parts = parts.len(), "Built cabinet mesh");
    CabinetMesh { parts }
}
