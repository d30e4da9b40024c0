// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Bill of materials: one row per distinct piece

use crate::engine::{Material, PanelList, PanelRole};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutListRow {
    pub role: PanelRole,
    /// Longer face side, whole millimetres
    pub length: f64,
    /// Shorter face side, whole millimetres
    pub width: f64,
    pub thickness: f64,
    pub material: Material,
    pub quantity: u32,
}

impl CutListRow {
    /// Face area of all pieces in m²
    pub fn area_m2(&self) -> f64 {
        self.length * self.width * self.quantity as f64 / 1_000_000.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CutList {
    pub rows: Vec<CutListRow>,
    pub total_pieces: u32,
}

impl CutList {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn quantity_of(&self, role: PanelRole) -> u32 {
        self.rows
            .iter()
            .filter(|r| r.role == role)
            .map(|r| r.quantity)
            .sum()
    }
}

type RowKey = (PanelRole, [i64; 3], Material);

/// Group identical panels; rows keep the order in which each size first appears
pub fn cut_list(list: &PanelList) -> CutList {
    let mut keys: Vec<RowKey> = Vec::new();
    let mut rows: Vec<CutListRow> = Vec::new();

    for panel in list {
        let key = (panel.role, micrometres(&panel.dimensions), panel.material);
        match keys.iter().position(|k| *k == key) {
            Some(index) => rows[index].quantity += panel.quantity,
            None => {
                let (length, width) = panel.face();
                keys.push(key);
                rows.push(CutListRow {
                    role: panel.role,
                    length: length.round(),
                    width: width.round(),
                    thickness: panel.thickness().round(),
                    material: panel.material,
                    quantity: panel.quantity,
                });
            }
        }
    }

    let total_pieces = rows.iter().map(|r| r.quantity).sum();
    CutList { rows, total_pieces }
}

fn micrometres(dimensions: &nalgebra::Vector3<f64>) -> [i64; 3] {
    let q = |v: f64| (v * 1000.0).round() as i64;
    [q(dimensions.x), q(dimensions.y), q(dimensions.z)]
}
