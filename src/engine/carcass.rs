// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Outer box: sides, roof, floor, kickplate and backing

use super::panel::{Material, Panel, PanelRole};
use crate::error::{Axis, CabinetError, Level, Result};
use crate::spec::{CabinetSpec, RoofStyle};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Depth given up to the backing groove and the air gap behind internal members
pub const BACKING_CLEARANCE: f64 = 20.0;
/// Oversize of the backing sheet so it seats in the grooves
pub const BACKING_GROOVE_ALLOWANCE: f64 = 15.0;
pub const BACKING_THICKNESS: f64 = 3.0;
/// Extra recess behind an inset door on top of the door thickness
pub const INTERNAL_DOOR_RECESS: f64 = 2.0;
/// Set-back of the front kickplate from the front edge
pub const KICKPLATE_SETBACK: f64 = 20.0;

/// Usable inner box shared by the distribution engine and the door layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClearBox {
    /// Inside width between the sides
    pub width: f64,
    /// Floor top to roof underside
    pub height: f64,
    /// Depth available to shelves, dividers and inset doors
    pub depth: f64,
    /// Z centre of every internal member
    pub depth_offset: f64,
    /// X of the left inner face
    pub left: f64,
    /// Y of the floor top
    pub bottom: f64,
}

impl ClearBox {
    pub fn center_y(&self) -> f64 {
        self.bottom + self.height / 2.0
    }
}

/// Carcass panels in their fixed order plus the clear box they enclose
#[derive(Debug, Clone, PartialEq)]
pub struct Carcass {
    pub panels: Vec<Panel>,
    pub clear: ClearBox,
}

/// Build the outer box.
///
/// Fails with a carcass-level `GeometryOverflow` when the kickplate, backing or
/// door recess leave no clear height or depth.
pub fn build_carcass(spec: &CabinetSpec) -> Result<Carcass> {
    let w = spec.width;
    let h = spec.height;
    let d = spec.depth;
    let t = spec.thickness;
    let base = spec.base_height();

    let side_height = match spec.roof {
        RoofStyle::Over => h - t,
        RoofStyle::Between => h,
    };
    let roof_width = match spec.roof {
        RoofStyle::Over => w,
        RoofStyle::Between => w - 2.0 * t,
    };
    let floor_width = w - 2.0 * t;

    let clear = clear_box(spec)?;

    let mut panels = Vec::with_capacity(5);

    let side_x = w / 2.0 - t / 2.0;
    panels.push(Panel::repeated(
        PanelRole::Side,
        Vector3::new(t, side_height, d),
        vec![
            Point3::new(-side_x, side_height / 2.0, 0.0),
            Point3::new(side_x, side_height / 2.0, 0.0),
        ],
        Axis::X,
    ));

    panels.push(Panel::new(
        PanelRole::Roof,
        Vector3::new(roof_width, t, d),
        Point3::new(0.0, h - t / 2.0, 0.0),
        Axis::Y,
    ));

    panels.push(Panel::new(
        PanelRole::Floor,
        Vector3::new(floor_width, t, d),
        Point3::new(0.0, base + t / 2.0, 0.0),
        Axis::Y,
    ));

    if let Some(kick) = spec.kickplate.filter(|k| *k > 0.0) {
        panels.push(Panel::repeated(
            PanelRole::Kickplate,
            Vector3::new(floor_width, kick, t),
            vec![
                Point3::new(0.0, kick / 2.0, d / 2.0 - t / 2.0 - KICKPLATE_SETBACK),
                Point3::new(0.0, kick / 2.0, -d / 2.0 + t / 2.0),
            ],
            Axis::Z,
        ));
    }

    if spec.backing {
        let basis = side_height - base - t;
        panels.push(
            Panel::new(
                PanelRole::Backing,
                Vector3::new(
                    floor_width + BACKING_GROOVE_ALLOWANCE,
                    basis + BACKING_GROOVE_ALLOWANCE,
                    BACKING_THICKNESS,
                ),
                Point3::new(0.0, base + t / 2.0 + basis / 2.0, -d / 2.0 + t),
                Axis::Z,
            )
            .with_material(Material::MDF),
        );
    }

    Ok(Carcass { panels, clear })
}

/// Compute the clear box alone
pub fn clear_box(spec: &CabinetSpec) -> Result<ClearBox> {
    let t = spec.thickness;
    let base = spec.base_height();

    let height = spec.height - base - 2.0 * t;
    if !(height > 0.0) {
        return Err(CabinetError::GeometryOverflow {
            level: Level::Carcass,
            axis: Axis::Y,
            cell: None,
            span: spec.height - base,
            count: 2,
            thickness: t,
        });
    }

    let mut depth = spec.depth;
    let mut depth_offset = 0.0;
    if spec.backing {
        depth -= BACKING_CLEARANCE;
        depth_offset += BACKING_CLEARANCE / 2.0;
    }
    if spec.has_internal_doors() {
        let recess = t + INTERNAL_DOOR_RECESS;
        depth -= recess;
        depth_offset -= recess / 2.0;
    }
    if !(depth > 0.0) {
        return Err(CabinetError::GeometryOverflow {
            level: Level::Carcass,
            axis: Axis::Z,
            cell: None,
            span: spec.depth,
            count: 0,
            thickness: t,
        });
    }

    Ok(ClearBox {
        width: spec.width - 2.0 * t,
        height,
        depth,
        depth_offset,
        left: -spec.width / 2.0 + t,
        bottom: base + t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{normalize, HingeStyle, RawCabinetSpec};
    use approx::assert_relative_eq;

    fn spec(raw: RawCabinetSpec) -> CabinetSpec {
        normalize(&raw).unwrap()
    }

    #[test]
    fn test_default_carcass_order_and_sizes() {
        let carcass = build_carcass(&spec(RawCabinetSpec::default())).unwrap();
        let roles: Vec<PanelRole> = carcass.panels.iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                PanelRole::Side,
                PanelRole::Roof,
                PanelRole::Floor,
                PanelRole::Kickplate,
                PanelRole::Backing
            ]
        );

        let side = &carcass.panels[0];
        assert_eq!(side.quantity, 2);
        assert_eq!(side.dimensions, Vector3::new(18.0, 1800.0, 500.0));
        assert_eq!(side.instances[0].x, -441.0);
        assert_eq!(side.instances[1].x, 441.0);

        let roof = &carcass.panels[1];
        assert_eq!(roof.dimensions, Vector3::new(864.0, 18.0, 500.0));
        assert_eq!(roof.center, Point3::new(0.0, 1791.0, 0.0));

        let floor = &carcass.panels[2];
        assert_eq!(floor.center.y, 109.0);

        let kick = &carcass.panels[3];
        assert_eq!(kick.dimensions, Vector3::new(864.0, 100.0, 18.0));
        assert_eq!(kick.instances[0].z, 250.0 - 9.0 - 20.0);
        assert_eq!(kick.instances[1].z, -241.0);

        let backing = &carcass.panels[4];
        assert_eq!(backing.material, Material::MDF);
        assert_eq!(backing.dimensions, Vector3::new(879.0, 1697.0, 3.0));
        assert_eq!(backing.center.z, -232.0);
    }

    #[test]
    fn test_over_roof_shortens_sides() {
        let carcass = build_carcass(&spec(RawCabinetSpec {
            roof: RoofStyle::Over,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(carcass.panels[0].dimensions.y, 1782.0);
        assert_eq!(carcass.panels[0].center.y, 891.0);
        assert_eq!(carcass.panels[1].dimensions.x, 900.0);
        // Backing follows the shorter sides
        assert_eq!(carcass.panels[4].dimensions.y, 1664.0 + 15.0);
    }

    #[test]
    fn test_clear_box_depth_policy() {
        let plain = clear_box(&spec(RawCabinetSpec {
            has_backing: false,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(plain.depth, 500.0);
        assert_eq!(plain.depth_offset, 0.0);
        assert_eq!(plain.height, 1664.0);
        assert_eq!(plain.width, 864.0);

        let backed = clear_box(&spec(RawCabinetSpec::default())).unwrap();
        assert_eq!(backed.depth, 480.0);
        assert_eq!(backed.depth_offset, 10.0);

        let inset = clear_box(&spec(RawCabinetSpec {
            has_doors: true,
            hinge: HingeStyle::Internal,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(inset.depth, 480.0 - 20.0);
        assert_eq!(inset.depth_offset, 0.0);

        // Overlay doors do not touch the interior depth
        let overlay = clear_box(&spec(RawCabinetSpec {
            has_doors: true,
            hinge: HingeStyle::Lateral,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(overlay.depth, 480.0);
    }

    #[test]
    fn test_no_kickplate_drops_panel() {
        let carcass = build_carcass(&spec(RawCabinetSpec {
            has_kickplate: false,
            has_backing: false,
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(carcass.panels.len(), 3);
        assert_relative_eq!(carcass.clear.height, 1800.0 - 36.0);
        assert_eq!(carcass.clear.bottom, 18.0);
    }

    #[test]
    fn test_tall_kickplate_overflows_clear_height() {
        let err = build_carcass(&spec(RawCabinetSpec {
            kickplate_height: 1764.0,
            ..Default::default()
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CabinetError::GeometryOverflow {
                level: Level::Carcass,
                axis: Axis::Y,
                ..
            }
        ));
    }

    #[test]
    fn test_shallow_cabinet_overflows_clear_depth() {
        let err = clear_box(&spec(RawCabinetSpec {
            depth: 40.0,
            has_doors: true,
            hinge: HingeStyle::Internal,
            ..Default::default()
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            CabinetError::GeometryOverflow { axis: Axis::Z, .. }
        ));
    }
}
