// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Door leaf sizing and placement

use super::carcass::ClearBox;
use super::panel::{Panel, PanelRole};
use crate::error::{Axis, CabinetError, Level, Result};
use crate::spec::{CabinetSpec, Doors, HingeStyle};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Reveal between neighbouring doors and around inset doors
pub const DOOR_GAP: f64 = 3.0;
/// Air gap between overlay doors and the carcass front
pub const OVERLAY_STANDOFF: f64 = 2.0;

/// Size and placement shared by every leaf
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorLayout {
    pub hinge: HingeStyle,
    pub count: u32,
    pub width: f64,
    pub height: f64,
    pub center_y: f64,
    pub center_z: f64,
}

impl DoorLayout {
    /// Width of the whole row including reveals between leaves
    pub fn row_width(&self) -> f64 {
        let n = self.count as f64;
        n * self.width + (n - 1.0) * DOOR_GAP
    }

    /// Centre x of leaf `i` (0-based, left to right)
    pub fn center_x(&self, i: u32) -> f64 {
        -self.row_width() / 2.0 + self.width / 2.0 + i as f64 * (self.width + DOOR_GAP)
    }
}

/// Size the door leaves for the given hinge style.
///
/// A count of zero, or a count that leaves no positive leaf width, is a
/// door-level `GeometryOverflow`; the count is never clamped here.
pub fn door_layout(spec: &CabinetSpec, doors: &Doors, clear: &ClearBox) -> Result<DoorLayout> {
    let w = spec.width;
    let h = spec.height;
    let t = spec.thickness;
    let base = spec.base_height();
    let n = doors.count as f64;

    let overflow = |axis: Axis, span: f64| CabinetError::GeometryOverflow {
        level: Level::Doors,
        axis,
        cell: None,
        span,
        count: doors.count,
        thickness: DOOR_GAP,
    };

    let opening_width = match doors.hinge {
        HingeStyle::Internal => clear.width,
        HingeStyle::Lateral => w,
        HingeStyle::Central => w - t,
    };
    if doors.count < 1 {
        return Err(overflow(Axis::X, opening_width));
    }

    let (height, center_y, center_z) = match doors.hinge {
        HingeStyle::Internal => (
            clear.height - DOOR_GAP,
            (base + h) / 2.0,
            spec.depth / 2.0 - t / 2.0,
        ),
        HingeStyle::Lateral | HingeStyle::Central => {
            let front = h - base;
            (
                front - DOOR_GAP,
                base + front / 2.0,
                spec.depth / 2.0 + t / 2.0 + OVERLAY_STANDOFF,
            )
        }
    };
    let width = opening_width / n - DOOR_GAP;

    if !(width > 0.0) {
        return Err(overflow(Axis::X, opening_width));
    }
    if !(height > 0.0) {
        return Err(overflow(Axis::Y, height + DOOR_GAP));
    }

    Ok(DoorLayout {
        hinge: doors.hinge,
        count: doors.count,
        width,
        height,
        center_y,
        center_z,
    })
}

/// Door panels, left to right
pub fn layout_doors(spec: &CabinetSpec, doors: &Doors, clear: &ClearBox) -> Result<Vec<Panel>> {
    let layout = door_layout(spec, doors, clear)?;
    let dimensions = Vector3::new(layout.width, layout.height, spec.thickness);

    Ok((0..layout.count)
        .map(|i| {
            Panel::new(
                PanelRole::Door,
                dimensions,
                Point3::new(layout.center_x(i), layout.center_y, layout.center_z),
                Axis::Z,
            )
        })
        .collect())
}
