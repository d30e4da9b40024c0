// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! cabinetkit
//!
//! Decomposes a parametric storage cabinet into the rectangular panels that
//! build it. One engine produces the panel list; the 3D mesh, the front
//! schematic and the cut list are thin views over that list, so the three
//! can never disagree on a number.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod io;
pub mod spec;
pub mod views;

#[cfg(feature = "wasm")]
pub mod ffi;

pub use engine::{compute_many, compute_panels, Material, Panel, PanelList, PanelRole};
pub use error::{CabinetError, Result};
pub use spec::{normalize, CabinetSpec, RawCabinetSpec};

use std::path::Path;

/// Normalize raw input and decompose it
pub fn compute_from_raw(raw: &RawCabinetSpec) -> Result<PanelList> {
    compute_panels(&normalize(raw)?)
}

/// Load a TOML or JSON specification file and decompose it
pub fn compute_file(path: impl AsRef<Path>) -> anyhow::Result<PanelList> {
    let raw = RawCabinetSpec::from_file(path)?;
    Ok(compute_from_raw(&raw)?)
}
