// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Front elevation: panels projected onto the x/y plane

use crate::engine::{PanelList, PanelRole};
use crate::error::Axis;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which panels the elevation shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchematicOptions {
    pub show_doors: bool,
}

impl Default for SchematicOptions {
    fn default() -> Self {
        Self { show_doors: true }
    }
}

/// Projected panel outline in cabinet millimetres, `y` up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub role: PanelRole,
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Overall size annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub axis: Axis,
    pub length: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schematic {
    pub width: f64,
    pub height: f64,
    pub rects: Vec<Rect>,
    pub dimensions: Vec<Dimension>,
}

impl Schematic {
    pub fn rects_for(&self, role: PanelRole) -> impl Iterator<Item = &Rect> + '_ {
        self.rects.iter().filter(move |r| r.role == role)
    }
}

/// Project the panel list for a front drawing.
///
/// The backing is hidden behind everything and is skipped. Instances whose
/// outlines coincide in projection (front and rear kickplate) are drawn once.
pub fn schematic(list: &PanelList, options: &SchematicOptions) -> Schematic {
    let mut seen = HashSet::new();
    let mut rects = Vec::new();

    for panel in list {
        match panel.role {
            PanelRole::Backing => continue,
            PanelRole::Door if !options.show_doors => continue,
            _ => {}
        }

        for center in &panel.instances {
            let rect = Rect {
                role: panel.role,
                x: center.x - panel.dimensions.x / 2.0,
                y: center.y - panel.dimensions.y / 2.0,
                width: panel.dimensions.x,
                height: panel.dimensions.y,
            };
            if seen.insert(outline_key(&rect)) {
                rects.push(rect);
            }
        }
    }

    let (width, height) = (list.envelope.x, list.envelope.y);
    Schematic {
        width,
        height,
        rects,
        dimensions: vec![
            Dimension {
                axis: Axis::X,
                length: width,
                label: format!("{}mm", width),
            },
            Dimension {
                axis: Axis::Y,
                length: height,
                label: format!("{}mm", height),
            },
        ],
    }
}

// Micrometre grid
fn outline_key(rect: &Rect) -> (PanelRole, [i64; 4]) {
    let q = |v: f64| (v * 1000.0).round() as i64;
    (rect.role, [q(rect.x), q(rect.y), q(rect.width), q(rect.height)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_panels;
    use crate::spec::{normalize, RawCabinetSpec};

    fn default_list(has_doors: bool) -> PanelList {
        let raw = RawCabinetSpec {
            has_doors,
            ..Default::default()
        };
        compute_panels(&normalize(&raw).unwrap()).unwrap()
    }

    #[test]
    fn test_kickplates_collapse_and_backing_hidden() {
        let drawing = schematic(&default_list(false), &SchematicOptions::default());

        assert_eq!(drawing.rects_for(PanelRole::Kickplate).count(), 1);
        assert_eq!(drawing.rects_for(PanelRole::Backing).count(), 0);
        assert_eq!(drawing.rects_for(PanelRole::Side).count(), 2);
        // 2 sides, roof, floor, kickplate, 3 shelves
        assert_eq!(drawing.rects.len(), 8);
    }

    #[test]
    fn test_side_outline() {
        let drawing = schematic(&default_list(false), &SchematicOptions::default());
        let left = drawing.rects_for(PanelRole::Side).next().unwrap();

        assert_eq!(left.x, -450.0);
        assert_eq!(left.y, 0.0);
        assert_eq!(left.width, 18.0);
        assert_eq!(left.height, 1800.0);
    }

    #[test]
    fn test_doors_toggle() {
        let list = default_list(true);
        let with = schematic(&list, &SchematicOptions { show_doors: true });
        let without = schematic(&list, &SchematicOptions { show_doors: false });

        assert_eq!(with.rects_for(PanelRole::Door).count(), 2);
        assert_eq!(without.rects_for(PanelRole::Door).count(), 0);
    }

    #[test]
    fn test_dimension_labels() {
        let drawing = schematic(&default_list(false), &SchematicOptions::default());
        assert_eq!(drawing.dimensions[0].label, "900mm");
        assert_eq!(drawing.dimensions[1].label, "1800mm");
    }
}
