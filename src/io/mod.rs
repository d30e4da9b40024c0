// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - exporting meshes, drawings and lists

mod export_gltf;
mod export_json;
mod export_stl;
mod export_svg;

pub use export_gltf::{export as export_gltf, to_glb, to_gltf_json};
pub use export_json::{export as export_json, to_json_string};
pub use export_stl::{export as export_stl, write_stl};
pub use export_svg::{export as export_svg, render as render_svg, SvgOptions};

use crate::engine::PanelList;
use crate::views::{build_mesh, schematic, SchematicOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// File formats the exporters produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Glb,
    Gltf,
    Stl,
    Svg,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Glb => "glb",
            ExportFormat::Gltf => "gltf",
            ExportFormat::Stl => "stl",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        }
    }

    /// Guess from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "glb" => Ok(ExportFormat::Glb),
            "gltf" => Ok(ExportFormat::Gltf),
            "stl" => Ok(ExportFormat::Stl),
            "svg" => Ok(ExportFormat::Svg),
            "json" => Ok(ExportFormat::Json),
            other => anyhow::bail!("Unknown export format '{}'", other),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write a computed cabinet in any supported format
pub fn export_cabinet<P: AsRef<Path>>(
    list: &PanelList,
    format: ExportFormat,
    path: P,
    schematic_options: &SchematicOptions,
    svg_options: &SvgOptions,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    match format {
        ExportFormat::Glb | ExportFormat::Gltf => export_gltf(&build_mesh(list), path)?,
        ExportFormat::Stl => export_stl(&build_mesh(list).merged(), path)?,
        ExportFormat::Svg => export_svg(&schematic(list, schematic_options), svg_options, path)?,
        ExportFormat::Json => export_json(list, path)?,
    }
    info!(format = %format, path = %path.display(), "Exported cabinet");
    Ok(())
}
