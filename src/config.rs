// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Tool configuration for the exporters and the command line

use crate::io::{ExportFormat, SvgOptions};
use crate::views::SchematicOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "cabinetkit.toml";

/// Schematic drawing settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicConfig {
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    pub padding: f64,
    pub show_doors: bool,
}

impl Default for SchematicConfig {
    fn default() -> Self {
        let svg = SvgOptions::default();
        Self {
            width: svg.width,
            height: svg.height,
            padding: svg.padding,
            show_doors: true,
        }
    }
}

impl SchematicConfig {
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            width: self.width,
            height: self.height,
            padding: self.padding,
        }
    }

    pub fn schematic_options(&self) -> SchematicOptions {
        SchematicOptions {
            show_doors: self.show_doors,
        }
    }
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Directory exports are written to when no output path is given
    pub output_dir: PathBuf,
    /// Export format when none is given
    pub format: ExportFormat,
    pub schematic: SchematicConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            format: ExportFormat::Glb,
            schematic: SchematicConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: ToolConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `cabinetkit.toml` if present, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply `CABINETKIT_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output_dir) = lookup("CABINETKIT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Some(format) = lookup("CABINETKIT_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(err) => warn!(%err, "Ignoring CABINETKIT_FORMAT"),
            }
        }

        if let Some(show_doors) = lookup("CABINETKIT_SHOW_DOORS") {
            match show_doors.parse() {
                Ok(show_doors) => self.schematic.show_doors = show_doors,
                Err(err) => warn!(%err, value = %show_doors, "Ignoring CABINETKIT_SHOW_DOORS"),
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Default output path for a spec file in the given format
    pub fn output_path_for(&self, input: &Path, format: ExportFormat) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cabinet".to_string());
        self.output_dir.join(format!("{}.{}", stem, format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_reload() -> Result<()> {
        let mut config = ToolConfig::default();
        config.format = ExportFormat::Svg;
        config.schematic.show_doors = false;

        let file = NamedTempFile::with_suffix(".toml")?;
        config.save(file.path())?;
        assert_eq!(ToolConfig::from_file(file.path())?, config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let file = NamedTempFile::with_suffix(".toml")?;
        std::fs::write(file.path(), "format = \"stl\"\n[schematic]\nwidth = 400.0\n")?;

        let config = ToolConfig::from_file(file.path())?;
        assert_eq!(config.format, ExportFormat::Stl);
        assert_eq!(config.schematic.width, 400.0);
        assert_eq!(config.schematic.padding, 60.0);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        Ok(())
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CABINETKIT_OUTPUT_DIR", "/tmp/cabinets"),
            ("CABINETKIT_FORMAT", "gltf"),
            ("CABINETKIT_SHOW_DOORS", "false"),
        ]
        .into_iter()
        .collect();

        let mut config = ToolConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.output_dir, PathBuf::from("/tmp/cabinets"));
        assert_eq!(config.format, ExportFormat::Gltf);
        assert!(!config.schematic.show_doors);
    }

    #[test]
    fn test_bad_format_override_is_ignored() {
        let mut config = ToolConfig::default();
        config.apply_overrides(|key| (key == "CABINETKIT_FORMAT").then(|| "obj".to_string()));
        assert_eq!(config.format, ExportFormat::Glb);
    }

    #[test]
    fn test_bad_show_doors_override_is_ignored() {
        let mut config = ToolConfig::default();
        config.schematic.show_doors = false;
        config.apply_overrides(|key| (key == "CABINETKIT_SHOW_DOORS").then(|| "yes".to_string()));
        assert!(!config.schematic.show_doors);
    }

    #[test]
    fn test_output_path_for() {
        let config = ToolConfig::default();
        let path = config.output_path_for(Path::new("specs/kitchen.toml"), ExportFormat::Stl);
        assert_eq!(path, PathBuf::from("output/kitchen.stl"));
    }
}
