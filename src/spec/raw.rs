// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw, user-facing cabinet configuration

use super::types::{DistributionMode, HingeStyle, RoofStyle};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unvalidated cabinet parameters as entered by a user or read from a file.
///
/// Counts are signed and secondary entries may be missing; [`super::normalize`]
/// turns this into a [`super::CabinetSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCabinetSpec {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub thickness: f64,
    pub roof: RoofStyle,
    pub has_kickplate: bool,
    pub kickplate_height: f64,
    pub has_backing: bool,
    pub distribution: DistributionMode,
    pub primary_count: i64,
    pub secondary_counts: Vec<Option<i64>>,
    pub has_doors: bool,
    pub hinge: HingeStyle,
    pub door_count: i64,
}

impl Default for RawCabinetSpec {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 1800.0,
            depth: 500.0,
            thickness: 18.0,
            roof: RoofStyle::Between,
            has_kickplate: true,
            kickplate_height: 100.0,
            has_backing: true,
            distribution: DistributionMode::Horizontal,
            primary_count: 3,
            secondary_counts: Vec::new(),
            has_doors: false,
            hinge: HingeStyle::Lateral,
            door_count: 2,
        }
    }
}

impl RawCabinetSpec {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse cabinet TOML")
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("Failed to parse cabinet JSON")
    }

    /// Load a specification file, picking the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cabinet file: {:?}", path))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => bail!("Unsupported cabinet file extension: {:?}", other),
        }
        .with_context(|| format!("Invalid cabinet file: {:?}", path))
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize cabinet")
    }
}
