// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Consumers of the panel list
//!
//! Each view only re-shapes [`PanelList`](crate::engine::PanelList) data; none of
//! them derives a position or a size of its own.

pub mod cut_list;
pub mod mesh;
pub mod schematic;

pub use cut_list::{cut_list, CutList, CutListRow};
pub use mesh::{build_mesh, CabinetMesh, MeshPart};
pub use schematic::{schematic, Dimension, Rect, Schematic, SchematicOptions};
