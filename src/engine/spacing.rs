// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Equal-gap spacing of boards across a clear span

use crate::error::{Axis, CabinetError, Level, Result};

/// Where a span sits in the decomposition, for error reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanContext {
    pub level: Level,
    pub axis: Axis,
    pub cell: Option<usize>,
}

impl SpanContext {
    pub fn new(level: Level, axis: Axis) -> Self {
        Self {
            level,
            axis,
            cell: None,
        }
    }

    pub fn in_cell(mut self, cell: usize) -> Self {
        self.cell = Some(cell);
        self
    }
}

/// `count` boards of `thickness` spaced so the `count + 1` gaps are equal.
///
/// Every offset is evaluated in closed form from the index, never by running sums,
/// so `(count + 1) * gap + count * thickness` reproduces `span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualGap {
    pub span: f64,
    pub thickness: f64,
    pub count: u32,
    pub gap: f64,
}

impl EqualGap {
    /// Fails with `GeometryOverflow` when the boards leave no positive gap
    pub fn new(span: f64, thickness: f64, count: u32, ctx: SpanContext) -> Result<Self> {
        let n = count as f64;
        let gap = (span - n * thickness) / (n + 1.0);

        if !(gap.is_finite() && gap > 0.0) {
            return Err(CabinetError::GeometryOverflow {
                level: ctx.level,
                axis: ctx.axis,
                cell: ctx.cell,
                span,
                count,
                thickness,
            });
        }

        Ok(Self {
            span,
            thickness,
            count,
            gap,
        })
    }

    /// Centre offset of board `i` (1-based) from the start of the span
    pub fn position(&self, i: u32) -> f64 {
        let i = i as f64;
        self.gap * i + self.thickness * (i - 1.0) + self.thickness / 2.0
    }

    /// Centre offsets of all boards in ascending order
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.count).map(move |i| self.position(i))
    }

    /// Start offset of cell `k` (0-based)
    pub fn cell_start(&self, k: usize) -> f64 {
        k as f64 * (self.gap + self.thickness)
    }

    /// Centre offset of cell `k` (0-based)
    pub fn cell_center(&self, k: usize) -> f64 {
        self.cell_start(k) + self.gap / 2.0
    }

    pub fn cell_count(&self) -> usize {
        self.count as usize + 1
    }
}
