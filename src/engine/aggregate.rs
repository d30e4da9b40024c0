// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Ordered panel collection handed to every consumer

use super::carcass::ClearBox;
use super::panel::{Panel, PanelRole};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Piece counts for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Physical pieces, sum of every panel quantity
    pub total_pieces: u32,
    pub carcass_pieces: u32,
    pub primary_members: u32,
    pub secondary_members: u32,
    pub doors: u32,
}

/// Every panel of one cabinet, in the fixed order carcass, primary members,
/// secondary members by cell, doors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelList {
    /// Overall width, height and depth of the specification
    pub envelope: Vector3<f64>,
    pub clear: ClearBox,
    pub panels: Vec<Panel>,
    pub summary: Summary,
}

impl PanelList {
    /// Concatenate the stage outputs and count pieces
    pub fn assemble(
        envelope: Vector3<f64>,
        clear: ClearBox,
        carcass: Vec<Panel>,
        primary: Vec<Panel>,
        secondary: Vec<Panel>,
        doors: Vec<Panel>,
    ) -> Self {
        let mut panels =
            Vec::with_capacity(carcass.len() + primary.len() + secondary.len() + doors.len());
        panels.extend(carcass);
        panels.extend(primary);
        panels.extend(secondary);
        panels.extend(doors);

        let summary = summarize(&panels);
        Self {
            envelope,
            clear,
            panels,
            summary,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// Panels with the given role, in list order
    pub fn by_role(&self, role: PanelRole) -> impl Iterator<Item = &Panel> + '_ {
        self.panels.iter().filter(move |p| p.role == role)
    }

    /// Physical pieces with the given role
    pub fn count(&self, role: PanelRole) -> u32 {
        self.by_role(role).map(|p| p.quantity).sum()
    }

    /// Combined volume of shelves, dividers and sub-members
    pub fn internal_volume(&self) -> f64 {
        self.panels
            .iter()
            .filter(|p| p.role.is_internal_member())
            .map(Panel::total_volume)
            .sum()
    }
}

impl<'a> IntoIterator for &'a PanelList {
    type Item = &'a Panel;
    type IntoIter = std::slice::Iter<'a, Panel>;

    fn into_iter(self) -> Self::IntoIter {
        self.panels.iter()
    }
}

fn summarize(panels: &[Panel]) -> Summary {
    let mut summary = Summary::default();
    for panel in panels {
        summary.total_pieces += panel.quantity;
        match panel.role {
            PanelRole::PrimaryMember => summary.primary_members += panel.quantity,
            PanelRole::SecondaryMember => summary.secondary_members += panel.quantity,
            PanelRole::Door => summary.doors += panel.quantity,
            _ => summary.carcass_pieces += panel.quantity,
        }
    }
    summary
}
