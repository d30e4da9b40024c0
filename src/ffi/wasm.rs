// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! WASM bindings using wasm-bindgen
//!
//! Every entry point takes the raw cabinet as JSON so a browser form can pass
//! its state straight through.

use crate::io::{render_svg, SvgOptions};
use crate::views::{cut_list, schematic, SchematicOptions};
use crate::{compute_from_raw, PanelList, RawCabinetSpec};
use wasm_bindgen::prelude::*;

fn compute(spec_json: &str) -> Result<PanelList, JsValue> {
    let raw = RawCabinetSpec::from_json_str(spec_json)
        .map_err(|e| JsValue::from_str(&format!("Spec error: {:#}", e)))?;
    compute_from_raw(&raw).map_err(|e| JsValue::from_str(&format!("Cabinet error: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {}", e)))
}

/// Panel list as JSON
#[wasm_bindgen]
pub fn compute_panels_json(spec_json: &str) -> Result<String, JsValue> {
    to_json(&compute(spec_json)?)
}

/// Cut list as JSON
#[wasm_bindgen]
pub fn cut_list_json(spec_json: &str) -> Result<String, JsValue> {
    to_json(&cut_list(&compute(spec_json)?))
}

/// Front schematic as an SVG document
#[wasm_bindgen]
pub fn schematic_svg(
    spec_json: &str,
    width: f64,
    height: f64,
    show_doors: bool,
) -> Result<String, JsValue> {
    let list = compute(spec_json)?;
    let drawing = schematic(&list, &SchematicOptions { show_doors });
    let options = SvgOptions {
        width,
        height,
        ..SvgOptions::default()
    };
    render_svg(&drawing, &options).map_err(|e| JsValue::from_str(&format!("SVG error: {}", e)))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_list_json() {
        let json = cut_list_json("{}").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_pieces"], 10);
    }
}
