// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Validation and normalization of raw input

use super::raw::RawCabinetSpec;
use super::types::{CabinetSpec, Distribution, DistributionMode, Doors};
use crate::error::{Axis, CabinetError, Level, Result};
use tracing::warn;

/// Turn raw parameters into a well-formed [`CabinetSpec`].
///
/// Counts are clamped to zero and secondary counts are padded or truncated to one
/// entry per cell. Base dimensions are never clamped: a non-finite or non-positive
/// value, or a thickness that cannot close the carcass, is an `InvalidDimension`.
/// Any count that merely overflows the clear span is accepted and left for the
/// engine. The one exception guards the cell allocation: a primary count whose
/// boards alone fill the outer height (or width) is reported here as a
/// `GeometryOverflow` before one cell per member is built.
pub fn normalize(raw: &RawCabinetSpec) -> Result<CabinetSpec> {
    require_positive("width", raw.width)?;
    require_positive("height", raw.height)?;
    require_positive("depth", raw.depth)?;
    require_positive("thickness", raw.thickness)?;

    if raw.thickness * 2.0 >= raw.width {
        return Err(CabinetError::invalid(
            "thickness",
            raw.thickness,
            format!("two sides do not fit in a width of {}mm", raw.width),
        ));
    }
    if raw.thickness * 2.0 >= raw.height {
        return Err(CabinetError::invalid(
            "thickness",
            raw.thickness,
            format!("roof and floor do not fit in a height of {}mm", raw.height),
        ));
    }

    let kickplate = if raw.has_kickplate {
        if !raw.kickplate_height.is_finite() || raw.kickplate_height < 0.0 {
            return Err(CabinetError::invalid(
                "kickplate_height",
                raw.kickplate_height,
                "must be a finite, non-negative number",
            ));
        }
        Some(raw.kickplate_height)
    } else {
        None
    };

    let primary_count = clamp_count("primary_count", raw.primary_count);

    // Bounds the cell vector below; the exact check on the clear span is the engine's
    let (axis, outer_span) = match raw.distribution {
        DistributionMode::Horizontal => (Axis::Y, raw.height),
        DistributionMode::Vertical => (Axis::X, raw.width),
    };
    if primary_count as f64 * raw.thickness >= outer_span {
        return Err(CabinetError::GeometryOverflow {
            level: Level::Primary,
            axis,
            cell: None,
            span: outer_span,
            count: primary_count,
            thickness: raw.thickness,
        });
    }

    let cells = primary_count as usize + 1;
    if raw.secondary_counts.len() != cells {
        warn!(
            given = raw.secondary_counts.len(),
            cells, "Resizing secondary counts to one entry per cell"
        );
    }
    let secondary: Vec<u32> = raw
        .secondary_counts
        .iter()
        .take(cells)
        .map(|entry| clamp_count("secondary_counts", entry.unwrap_or(0)))
        .collect();

    let doors = raw.has_doors.then(|| Doors {
        hinge: raw.hinge,
        count: clamp_count("door_count", raw.door_count),
    });

    Ok(CabinetSpec {
        width: raw.width,
        height: raw.height,
        depth: raw.depth,
        thickness: raw.thickness,
        roof: raw.roof,
        kickplate,
        backing: raw.has_backing,
        distribution: Distribution::new(raw.distribution, primary_count, &secondary),
        doors,
    })
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CabinetError::invalid(
            field,
            value,
            "must be a finite, positive number",
        ))
    }
}

fn clamp_count(field: &'static str, value: i64) -> u32 {
    if value < 0 {
        warn!(field, value, "Negative count clamped to zero");
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}
