// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! SVG rendering of the front schematic

use crate::engine::PanelRole;
use crate::error::Axis;
use crate::views::{Rect, Schematic};
use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::Path;

/// Distance of a dimension line from the drawing, in pixels
const DIMENSION_OFFSET: f64 = 30.0;

/// Output viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 1000.0,
            padding: 60.0,
        }
    }
}

/// Maps cabinet millimetres (y up, x centred) to viewport pixels (y down)
struct Viewport {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
    cabinet_width: f64,
    cabinet_height: f64,
}

impl Viewport {
    fn fit(schematic: &Schematic, options: &SvgOptions) -> Self {
        let usable_w = (options.width - 2.0 * options.padding).max(1.0);
        let usable_h = (options.height - 2.0 * options.padding).max(1.0);
        let scale = (usable_w / schematic.width).min(usable_h / schematic.height);

        // Centre the drawing inside the padded area
        let drawn_w = schematic.width * scale;
        let drawn_h = schematic.height * scale;
        Self {
            scale,
            origin_x: options.padding + (usable_w - drawn_w) / 2.0,
            origin_y: options.padding + (usable_h - drawn_h) / 2.0,
            cabinet_width: schematic.width,
            cabinet_height: schematic.height,
        }
    }

    fn x(&self, mm: f64) -> f64 {
        self.origin_x + (mm + self.cabinet_width / 2.0) * self.scale
    }

    fn y(&self, mm: f64) -> f64 {
        self.origin_y + (self.cabinet_height - mm) * self.scale
    }

    fn span(&self, mm: f64) -> f64 {
        mm * self.scale
    }
}

fn fill_for(role: PanelRole) -> (&'static str, &'static str) {
    match role {
        PanelRole::Side | PanelRole::Roof | PanelRole::Floor => ("#f2f0ea", "1"),
        PanelRole::Kickplate => ("#8a8a8a", "1"),
        PanelRole::Backing => ("#b08a5a", "1"),
        PanelRole::PrimaryMember => ("#dcd6c8", "1"),
        PanelRole::SecondaryMember => ("#e8e3d6", "1"),
        PanelRole::Door => ("#8cb8eb", "0.35"),
    }
}

fn px(v: f64) -> String {
    format!("{:.2}", v)
}

/// Render the schematic as a standalone SVG document
pub fn render(schematic: &Schematic, options: &SvgOptions) -> Result<String> {
    let view = Viewport::fit(schematic, options);
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
    svg.push_attribute(("width", px(options.width).as_str()));
    svg.push_attribute(("height", px(options.height).as_str()));
    svg.push_attribute((
        "viewBox",
        format!("0 0 {} {}", px(options.width), px(options.height)).as_str(),
    ));
    writer.write_event(Event::Start(svg))?;

    // Panels
    let mut group = BytesStart::new("g");
    group.push_attribute(("id", "panels"));
    group.push_attribute(("stroke", "#333333"));
    group.push_attribute(("stroke-width", "1"));
    writer.write_event(Event::Start(group))?;
    for rect in &schematic.rects {
        writer.write_event(Event::Empty(rect_element(rect, &view)))?;
    }
    writer.write_event(Event::End(BytesEnd::new("g")))?;

    // Dimensions
    let mut group = BytesStart::new("g");
    group.push_attribute(("id", "dimensions"));
    group.push_attribute(("stroke", "#c0392b"));
    group.push_attribute(("fill", "#c0392b"));
    group.push_attribute(("font-family", "sans-serif"));
    group.push_attribute(("font-size", "14"));
    writer.write_event(Event::Start(group))?;
    for dimension in &schematic.dimensions {
        let (x1, y1, x2, y2, tx, ty, rotate) = match dimension.axis {
            Axis::Y => {
                let x = view.x(-schematic.width / 2.0) - DIMENSION_OFFSET;
                let (top, bottom) = (view.y(schematic.height), view.y(0.0));
                let mid = (top + bottom) / 2.0;
                (x, top, x, bottom, x - 8.0, mid, Some(format!("rotate(-90 {} {})", px(x - 8.0), px(mid))))
            }
            _ => {
                let y = view.y(0.0) + DIMENSION_OFFSET;
                let (left, right) = (view.x(-schematic.width / 2.0), view.x(schematic.width / 2.0));
                (left, y, right, y, (left + right) / 2.0, y + 20.0, None)
            }
        };

        let mut line = BytesStart::new("line");
        line.push_attribute(("x1", px(x1).as_str()));
        line.push_attribute(("y1", px(y1).as_str()));
        line.push_attribute(("x2", px(x2).as_str()));
        line.push_attribute(("y2", px(y2).as_str()));
        writer.write_event(Event::Empty(line))?;

        let mut text = BytesStart::new("text");
        text.push_attribute(("x", px(tx).as_str()));
        text.push_attribute(("y", px(ty).as_str()));
        text.push_attribute(("text-anchor", "middle"));
        text.push_attribute(("stroke", "none"));
        if let Some(transform) = &rotate {
            text.push_attribute(("transform", transform.as_str()));
        }
        writer.write_event(Event::Start(text))?;
        writer.write_event(Event::Text(BytesText::new(&dimension.label)))?;
        writer.write_event(Event::End(BytesEnd::new("text")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("g")))?;

    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).context("SVG output is not UTF-8")
}

fn rect_element<'a>(rect: &Rect, view: &Viewport) -> BytesStart<'a> {
    let (fill, opacity) = fill_for(rect.role);
    let mut element = BytesStart::new("rect");
    element.push_attribute(("x", px(view.x(rect.x)).as_str()));
    element.push_attribute(("y", px(view.y(rect.y + rect.height)).as_str()));
    element.push_attribute(("width", px(view.span(rect.width)).as_str()));
    element.push_attribute(("height", px(view.span(rect.height)).as_str()));
    element.push_attribute(("fill", fill));
    element.push_attribute(("fill-opacity", opacity));
    element.push_attribute(("data-role", rect.role.as_str()));
    element
}

/// Render and write to `path`
pub fn export<P: AsRef<Path>>(schematic: &Schematic, options: &SvgOptions, path: P) -> Result<()> {
    let path = path.as_ref();
    let svg = render(schematic, options)?;
    std::fs::write(path, svg)
        .with_context(|| format!("Failed to write SVG file {}", path.display()))?;
    Ok(())
}
