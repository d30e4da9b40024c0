// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Panel decomposition engine
//!
//! A pure function from [`CabinetSpec`] to [`PanelList`]: carcass, then internal
//! distribution (which needs the carcass clear box), then doors (which share its
//! depth policy), then aggregation. Nothing is cached between calls.

mod aggregate;
mod carcass;
mod distribution;
mod doors;
mod panel;
mod spacing;

pub use aggregate::{PanelList, Summary};
pub use carcass::{
    build_carcass, clear_box, Carcass, ClearBox, BACKING_CLEARANCE, BACKING_GROOVE_ALLOWANCE,
    BACKING_THICKNESS, INTERNAL_DOOR_RECESS, KICKPLATE_SETBACK,
};
pub use distribution::{distribute, CellLayout, Members};
pub use doors::{door_layout, layout_doors, DoorLayout, DOOR_GAP, OVERLAY_STANDOFF};
pub use panel::{Material, Panel, PanelRole};
pub use spacing::{EqualGap, SpanContext};

use crate::error::Result;
use crate::spec::CabinetSpec;
use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::debug;

/// Decompose a cabinet into its ordered panel list
pub fn compute_panels(spec: &CabinetSpec) -> Result<PanelList> {
    let carcass = build_carcass(spec)?;
    let members = distribute(spec, &carcass.clear)?;
    let doors = match &spec.doors {
        Some(doors) => layout_doors(spec, doors, &carcass.clear)?,
        None => Vec::new(),
    };

    let list = PanelList::assemble(
        Vector3::new(spec.width, spec.height, spec.depth),
        carcass.clear,
        carcass.panels,
        members.primary,
        members.secondary,
        doors,
    );

    debug!(
        panels = list.len(),
        pieces = list.summary.total_pieces,
        "Computed panel list"
    );
    Ok(list)
}

/// Decompose independent cabinets in parallel; results keep the input order
pub fn compute_many(specs: &[CabinetSpec]) -> Vec<Result<PanelList>> {
    specs.par_iter().map(compute_panels).collect()
}
