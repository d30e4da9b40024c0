// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primary and secondary internal members

use super::carcass::ClearBox;
use super::panel::{Panel, PanelRole};
use super::spacing::{EqualGap, SpanContext};
use crate::error::{Axis, Level, Result};
use crate::spec::{CabinetSpec, DistributionMode};
use nalgebra::{Point3, Vector3};
use tracing::debug;

/// Spacing of one primary cell and the sub-members placed in it
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub index: usize,
    /// Extent of the cell along the primary axis
    pub size: f64,
    /// Centre of the cell along the primary axis, in cabinet coordinates
    pub center: f64,
    pub spacing: EqualGap,
}

/// Internal members in panel-list order
#[derive(Debug, Clone, PartialEq)]
pub struct Members {
    pub mode: DistributionMode,
    pub primary_spacing: EqualGap,
    pub cells: Vec<CellLayout>,
    /// Ascending along the primary axis
    pub primary: Vec<Panel>,
    /// Grouped by owning cell, ascending within each cell
    pub secondary: Vec<Panel>,
}

/// Lay out shelves and dividers inside the clear box.
///
/// Every member spans `clear.depth` and is centred at `clear.depth_offset`, the
/// same depth policy the door layout uses.
pub fn distribute(spec: &CabinetSpec, clear: &ClearBox) -> Result<Members> {
    let t = spec.thickness;
    let dist = &spec.distribution;

    // Primary members stack along `primary_axis`, sub-members along the other one
    let (primary_axis, secondary_axis, primary_span, secondary_span, primary_origin, secondary_origin) =
        match dist.mode {
            DistributionMode::Horizontal => {
                (Axis::Y, Axis::X, clear.height, clear.width, clear.bottom, clear.left)
            }
            DistributionMode::Vertical => {
                (Axis::X, Axis::Y, clear.width, clear.height, clear.left, clear.bottom)
            }
        };

    let primary_spacing = EqualGap::new(
        primary_span,
        t,
        dist.primary_count(),
        SpanContext::new(Level::Primary, primary_axis),
    )?;

    let primary: Vec<Panel> = primary_spacing
        .positions()
        .map(|offset| {
            let along = primary_origin + offset;
            match dist.mode {
                DistributionMode::Horizontal => Panel::new(
                    PanelRole::PrimaryMember,
                    Vector3::new(clear.width, t, clear.depth),
                    Point3::new(0.0, along, clear.depth_offset),
                    Axis::Y,
                ),
                DistributionMode::Vertical => Panel::new(
                    PanelRole::PrimaryMember,
                    Vector3::new(t, clear.height, clear.depth),
                    Point3::new(along, clear.center_y(), clear.depth_offset),
                    Axis::X,
                ),
            }
        })
        .collect();

    // Every cell must fit before any sub-member is allocated
    let spacings = dist
        .cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            EqualGap::new(
                secondary_span,
                t,
                cell.secondary_count,
                SpanContext::new(Level::Secondary, secondary_axis).in_cell(index),
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let mut cells = Vec::with_capacity(spacings.len());
    let mut secondary = Vec::with_capacity(dist.total_secondary() as usize);

    for (index, spacing) in spacings.into_iter().enumerate() {
        let size = primary_spacing.gap;
        let center = primary_origin + primary_spacing.cell_center(index);

        for offset in spacing.positions() {
            let along = secondary_origin + offset;
            let panel = match dist.mode {
                DistributionMode::Horizontal => Panel::new(
                    PanelRole::SecondaryMember,
                    Vector3::new(t, size, clear.depth),
                    Point3::new(along, center, clear.depth_offset),
                    Axis::X,
                ),
                DistributionMode::Vertical => Panel::new(
                    PanelRole::SecondaryMember,
                    Vector3::new(size, t, clear.depth),
                    Point3::new(center, along, clear.depth_offset),
                    Axis::Y,
                ),
            };
            secondary.push(panel.in_cell(index));
        }

        cells.push(CellLayout {
            index,
            size,
            center,
            spacing,
        });
    }

    debug!(
        mode = ?dist.mode,
        primary = primary.len(),
        secondary = secondary.len(),
        gap = primary_spacing.gap,
        "Distributed internal members"
    );

    Ok(Members {
        mode: dist.mode,
        primary_spacing,
        cells,
        primary,
        secondary,
    })
}
