// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Panel descriptors shared by every consumer

use crate::error::Axis;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Function of a panel within the cabinet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRole {
    Side,
    Roof,
    Floor,
    Kickplate,
    Backing,
    PrimaryMember,
    SecondaryMember,
    Door,
}

impl PanelRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelRole::Side => "side",
            PanelRole::Roof => "roof",
            PanelRole::Floor => "floor",
            PanelRole::Kickplate => "kickplate",
            PanelRole::Backing => "backing",
            PanelRole::PrimaryMember => "primary_member",
            PanelRole::SecondaryMember => "secondary_member",
            PanelRole::Door => "door",
        }
    }

    /// Part of the outer box rather than the interior or the front
    pub fn is_carcass(&self) -> bool {
        matches!(
            self,
            PanelRole::Side
                | PanelRole::Roof
                | PanelRole::Floor
                | PanelRole::Kickplate
                | PanelRole::Backing
        )
    }

    pub fn is_internal_member(&self) -> bool {
        matches!(self, PanelRole::PrimaryMember | PanelRole::SecondaryMember)
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sheet stock a panel is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Melamine,
    #[serde(rename = "mdf")]
    MDF,
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Melamine => f.write_str("Melamine"),
            Material::MDF => f.write_str("MDF"),
        }
    }
}

/// Axis-aligned rectangular board.
///
/// `instances` holds the centroid of every physical occurrence; `center` is the
/// first of them and `quantity` their number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    /// Extents along x, y and z in millimetres
    pub dimensions: Vector3<f64>,
    pub center: Point3<f64>,
    pub material: Material,
    pub quantity: u32,
    pub instances: Vec<Point3<f64>>,
    /// Axis along which the panel is only one board thick
    pub thin_axis: Axis,
    /// Owning cell for secondary members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<usize>,
}

impl Panel {
    /// Single melamine board
    pub fn new(role: PanelRole, dimensions: Vector3<f64>, center: Point3<f64>, thin_axis: Axis) -> Self {
        Self {
            role,
            dimensions,
            center,
            material: Material::Melamine,
            quantity: 1,
            instances: vec![center],
            thin_axis,
            cell: None,
        }
    }

    /// Identical boards reported once; `placements` must not be empty
    pub fn repeated(
        role: PanelRole,
        dimensions: Vector3<f64>,
        placements: Vec<Point3<f64>>,
        thin_axis: Axis,
    ) -> Self {
        debug_assert!(!placements.is_empty());
        Self {
            role,
            dimensions,
            center: placements[0],
            material: Material::Melamine,
            quantity: placements.len() as u32,
            instances: placements,
            thin_axis,
            cell: None,
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn in_cell(mut self, cell: usize) -> Self {
        self.cell = Some(cell);
        self
    }

    /// Board thickness
    pub fn thickness(&self) -> f64 {
        self.dimensions[self.thin_axis.index()]
    }

    /// Face size as (long side, short side)
    pub fn face(&self) -> (f64, f64) {
        let (a, b) = match self.thin_axis {
            Axis::X => (self.dimensions.y, self.dimensions.z),
            Axis::Y => (self.dimensions.x, self.dimensions.z),
            Axis::Z => (self.dimensions.x, self.dimensions.y),
        };
        if a >= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Volume of one instance
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Volume of all instances
    pub fn total_volume(&self) -> f64 {
        self.volume() * self.quantity as f64
    }

    /// Min and max corner of one placed instance
    pub fn extent_at(&self, center: &Point3<f64>) -> (Point3<f64>, Point3<f64>) {
        let half = self.dimensions / 2.0;
        (*center - half, *center + half)
    }
}
