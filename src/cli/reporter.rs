// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::engine::PanelList;
use crate::error::CabinetError;
use crate::views::{CutList, CutListRow};
use colored::*;
use std::time::Duration;

const RULE_WIDTH: usize = 72;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print the cut list as a table
    pub fn report_cut_list(file: &str, cut: &CutList) {
        println!("\n{}", "━".repeat(RULE_WIDTH).bright_black());
        println!("{} {}", "Cut list:".bold(), file.cyan());
        println!("{}", "━".repeat(RULE_WIDTH).bright_black());
        println!("{}", Self::header_line().bold());

        for row in &cut.rows {
            println!("{}", Self::format_row(row));
        }

        let area: f64 = cut.rows.iter().map(CutListRow::area_m2).sum();
        println!("{}", "─".repeat(RULE_WIDTH).bright_black());
        println!(
            "  {} {}    {} {}",
            "Total pieces:".bright_black(),
            cut.total_pieces.to_string().cyan().bold(),
            "Face area:".bright_black(),
            format!("{:.2} m²", area).cyan()
        );
        println!("{}", "━".repeat(RULE_WIDTH).bright_black());
    }

    /// Print piece counts and overall size of a computed cabinet
    pub fn report_summary(file: &str, list: &PanelList, duration: Duration) {
        let summary = &list.summary;
        println!("\n{}", "━".repeat(RULE_WIDTH).bright_black());
        println!("{} {}", "Cabinet:".bold(), file.cyan());
        println!("{}", "━".repeat(RULE_WIDTH).bright_black());
        println!(
            "  {} {}",
            "Envelope:".bright_black(),
            format!(
                "{} × {} × {} mm",
                list.envelope.x, list.envelope.y, list.envelope.z
            )
            .cyan()
        );
        println!(
            "  {} {}",
            "Clear box:".bright_black(),
            format!(
                "{} × {} × {} mm",
                list.clear.width, list.clear.height, list.clear.depth
            )
            .cyan()
        );
        Self::print_count("Carcass pieces", summary.carcass_pieces);
        Self::print_count("Primary members", summary.primary_members);
        Self::print_count("Secondary members", summary.secondary_members);
        Self::print_count("Doors", summary.doors);
        Self::print_count("Total pieces", summary.total_pieces);
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(RULE_WIDTH).bright_black());
    }

    /// Report a rejected cabinet, naming the input to change
    pub fn report_cabinet_error(file: &str, err: &CabinetError) {
        eprintln!("\n{} {}", "❌ Rejected:".red().bold(), file.cyan());
        eprintln!("   {}", err);
        let hint = match err {
            CabinetError::InvalidDimension { field, .. } => format!("check `{}`", field),
            CabinetError::GeometryOverflow { level, axis, cell, .. } => match cell {
                Some(cell) => format!(
                    "too many {} members in cell {} for the clear {}",
                    level,
                    cell,
                    axis.dimension_name()
                ),
                None => format!("reduce the {} count or grow the {}", level, axis.dimension_name()),
            },
        };
        eprintln!("   {} {}", "hint:".yellow(), hint);
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn header_line() -> String {
        format!(
            "  {:<18} {:>8} {:>8} {:>6}  {:<9} {:>4}",
            "Part", "Length", "Width", "Thick", "Material", "Qty"
        )
    }

    fn format_row(row: &CutListRow) -> String {
        format!(
            "  {:<18} {:>8} {:>8} {:>6}  {:<9} {:>4}",
            row.role.as_str(),
            row.length,
            row.width,
            row.thickness,
            row.material.to_string(),
            row.quantity
        )
    }

    fn print_count(name: &str, count: u32) {
        let value = if count == 0 {
            count.to_string().bright_black()
        } else {
            count.to_string().cyan()
        };
        println!("  {} {}", format!("{}:", name).bright_black(), value);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
