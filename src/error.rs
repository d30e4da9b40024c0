// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Engine error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Axis of the cabinet-local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into a `Vector3`/`Point3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Human name of the cabinet dimension running along this axis
    pub fn dimension_name(self) -> &'static str {
        match self {
            Axis::X => "width",
            Axis::Y => "height",
            Axis::Z => "depth",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dimension_name())
    }
}

/// Stage of the decomposition at which a span ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Outer box clear space (kickplate, backing and door recess eat the span)
    Carcass,
    /// Shelves or dividers set by the primary count
    Primary,
    /// Sub-members inside one primary cell
    Secondary,
    /// Door leaves
    Doors,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Carcass => "carcass",
            Level::Primary => "primary",
            Level::Secondary => "secondary",
            Level::Doors => "doors",
        };
        f.write_str(name)
    }
}

/// Errors raised while normalizing a specification or decomposing it into panels.
///
/// Both variants carry enough context (field, axis, level, cell) for a caller to
/// point at the input that needs changing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CabinetError {
    /// A base dimension is malformed or cannot close the carcass
    #[error("invalid {field}: {value} ({reason})")]
    InvalidDimension {
        field: &'static str,
        value: f64,
        reason: String,
    },

    /// A member or door count leaves no positive clear gap
    #[error(
        "geometry overflow at {level} level along {axis}{}: {count} × {thickness}mm in a {span}mm span",
        cell.map(|c| format!(" (cell {})", c)).unwrap_or_default()
    )]
    GeometryOverflow {
        level: Level,
        axis: Axis,
        cell: Option<usize>,
        span: f64,
        count: u32,
        thickness: f64,
    },
}

impl CabinetError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Whether the caller can keep its last good panel list and ask for new input
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::GeometryOverflow { .. })
    }
}

pub type Result<T> = std::result::Result<T, CabinetError>;
