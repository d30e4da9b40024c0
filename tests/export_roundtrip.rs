// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! File-level tests: spec files in, exports out

use anyhow::Result;
use cabinetkit::config::ToolConfig;
use cabinetkit::io::{self, ExportFormat};
use cabinetkit::views::{build_mesh, cut_list, CutList};
use cabinetkit::{compute_file, PanelList, PanelRole, RawCabinetSpec};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const WARDROBE_TOML: &str = r#"
width = 1200.0
height = 2000.0
depth = 600.0
thickness = 18.0
roof = "over"
kickplate_height = 80.0
distribution = "vertical"
primary_count = 2
secondary_counts = [4, 0, 2]
has_doors = true
hinge = "central"
door_count = 3
"#;

fn wardrobe() -> Result<PanelList> {
    let mut file = NamedTempFile::with_suffix(".toml")?;
    file.write_all(WARDROBE_TOML.as_bytes())?;
    compute_file(file.path())
}

#[test]
fn test_toml_and_json_inputs_agree() -> Result<()> {
    let from_toml = wardrobe()?;

    let raw = RawCabinetSpec::from_toml_str(WARDROBE_TOML)?;
    let mut file = NamedTempFile::with_suffix(".json")?;
    file.write_all(serde_json::to_string(&raw)?.as_bytes())?;
    let from_json = compute_file(file.path())?;

    assert_eq!(from_toml, from_json);
    println!(
        "Wardrobe: {} panels, {} pieces",
        from_toml.len(),
        from_toml.summary.total_pieces
    );
    Ok(())
}

#[test]
fn test_unknown_extension_is_rejected() -> Result<()> {
    let file = NamedTempFile::with_suffix(".yaml")?;
    let err = compute_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("extension"));
    Ok(())
}

#[test]
fn test_export_every_format() -> Result<()> {
    let list = wardrobe()?;
    let dir = tempdir()?;
    let config = ToolConfig {
        output_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    for format in [
        ExportFormat::Glb,
        ExportFormat::Gltf,
        ExportFormat::Stl,
        ExportFormat::Svg,
        ExportFormat::Json,
    ] {
        let path = config.output_path_for(std::path::Path::new("wardrobe.toml"), format);
        io::export_cabinet(
            &list,
            format,
            &path,
            &config.schematic.schematic_options(),
            &config.schematic.svg_options(),
        )?;

        let bytes = std::fs::read(&path)?;
        println!("{}: {} bytes", format, bytes.len());
        assert!(!bytes.is_empty());

        match format {
            ExportFormat::Glb => assert_eq!(&bytes[0..4], b"glTF"),
            ExportFormat::Gltf => {
                let doc: serde_json::Value = serde_json::from_slice(&bytes)?;
                assert_eq!(doc["asset"]["version"], "2.0");
                assert_eq!(
                    doc["nodes"].as_array().map(|n| n.len()),
                    Some(list.summary.total_pieces as usize)
                );
            }
            ExportFormat::Stl => {
                let triangles = build_mesh(&list).merged().triangle_count();
                assert_eq!(bytes.len(), 84 + 50 * triangles);
            }
            ExportFormat::Svg => {
                let svg = String::from_utf8(bytes)?;
                assert!(svg.contains(">1200mm</text>"));
                assert!(svg.contains(">2000mm</text>"));
                assert!(svg.contains("data-role=\"door\""));
            }
            ExportFormat::Json => {
                let back: PanelList = serde_json::from_slice(&bytes)?;
                assert_eq!(back, list);
            }
        }
    }

    Ok(())
}

#[test]
fn test_cut_list_json_export() -> Result<()> {
    let list = wardrobe()?;
    let cut = cut_list(&list);

    let file = NamedTempFile::with_suffix(".json")?;
    io::export_json(&cut, file.path())?;
    let back: CutList = serde_json::from_str(&std::fs::read_to_string(file.path())?)?;

    assert_eq!(back, cut);
    assert_eq!(back.quantity_of(PanelRole::Door), 3);
    assert_eq!(back.quantity_of(PanelRole::SecondaryMember), 6);
    Ok(())
}
