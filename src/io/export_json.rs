// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Pretty JSON output for panel lists and cut lists

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}

pub fn export<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json_string(value)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON file {}", path.display()))?;
    Ok(())
}
