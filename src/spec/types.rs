// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Normalized cabinet specification

use serde::{Deserialize, Serialize};

/// How the roof meets the side panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoofStyle {
    /// Roof sits between the sides; sides run full height
    #[default]
    Between,
    /// Roof spans over the sides; sides lose one thickness
    Over,
}

/// Which axis the primary members stack along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    /// Primary shelves stacked along the height, sub-dividers per row
    #[default]
    Horizontal,
    /// Primary dividers stacked along the width, sub-shelves per column
    Vertical,
}

/// Door mounting convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HingeStyle {
    /// Full overlay over the whole front
    #[default]
    Lateral,
    /// Half overlay, neighbouring doors share a reveal over the join
    Central,
    /// Inset inside the frame
    Internal,
}

/// One space between or around primary members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Number of secondary members subdividing this cell
    pub secondary_count: u32,
}

/// Two-level internal layout: primary members create `cells.len()` cells,
/// each cell owns its own secondary count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub mode: DistributionMode,
    cells: Vec<Cell>,
}

impl Distribution {
    /// Build a layout with `primary_count` members; missing secondary counts
    /// default to zero and extras are dropped.
    pub fn new(mode: DistributionMode, primary_count: u32, secondary_counts: &[u32]) -> Self {
        let cells = (0..=primary_count as usize)
            .map(|k| Cell {
                secondary_count: secondary_counts.get(k).copied().unwrap_or(0),
            })
            .collect();
        Self { mode, cells }
    }

    /// Layout with no internal members at all
    pub fn empty(mode: DistributionMode) -> Self {
        Self::new(mode, 0, &[])
    }

    pub fn primary_count(&self) -> u32 {
        (self.cells.len() - 1) as u32
    }

    /// Cells in ascending spatial order (bottom-to-top or left-to-right)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn secondary_counts(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.secondary_count).collect()
    }

    pub fn total_secondary(&self) -> u64 {
        self.cells.iter().map(|c| u64::from(c.secondary_count)).sum()
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::empty(DistributionMode::Horizontal)
    }
}

/// Door configuration; present only when the cabinet has doors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doors {
    pub hinge: HingeStyle,
    /// Not clamped: zero is reported by the door layout as an overflow
    pub count: u32,
}

/// Well-formed cabinet specification, the sole input of the panel engine.
///
/// Only produced by [`normalize`](super::normalize); raw input deserializes into
/// [`RawCabinetSpec`](super::RawCabinetSpec).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetSpec {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
    pub roof: RoofStyle,
    /// Kickplate height when the cabinet stands on a plinth
    pub kickplate: Option<f64>,
    pub backing: bool,
    pub distribution: Distribution,
    pub doors: Option<Doors>,
}

impl CabinetSpec {
    /// Height lost to the plinth below the floor
    pub fn base_height(&self) -> f64 {
        self.kickplate.unwrap_or(0.0)
    }

    pub fn has_internal_doors(&self) -> bool {
        matches!(
            self.doors,
            Some(Doors {
                hinge: HingeStyle::Internal,
                ..
            })
        )
    }
}
