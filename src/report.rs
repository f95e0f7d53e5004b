//! Rendering outlines for stdout.

use std::fmt::Write as _;
use std::path::Path;

use pushback_core::units::format_length;
use pushback_core::{Error, Result};
use pushback_outline::{build_outline, Outline, OutlineVertex};
use pushback_settings::{OutputFormat, OutputSettings};

const GROUP_NAMES: [&str; 3] = ["fuselage", "main wing", "stabilizer"];

/// Read an aircraft file and render its outline
pub fn report_file(path: &Path, settings: &OutputSettings) -> Result<String> {
    let outline = build_outline(path)?;
    render(path, &outline, settings)
}

/// Render one outline in the configured format
pub fn render(path: &Path, outline: &Outline, settings: &OutputSettings) -> Result<String> {
    match settings.format {
        OutputFormat::Json => render_json(path, outline, settings.pretty),
        OutputFormat::Text => Ok(render_text(path, outline, settings)),
    }
}

/// `{"file": ..., "outline": ...}`, one document per aircraft
pub fn render_json(path: &Path, outline: &Outline, pretty: bool) -> Result<String> {
    let doc = serde_json::json!({
        "file": path.display().to_string(),
        "outline": outline,
    });
    let text = if pretty {
        serde_json::to_string_pretty(&doc)
    } else {
        serde_json::to_string(&doc)
    };
    text.map_err(|e| Error::other(format!("Failed to serialize outline: {}", e)))
}

pub fn render_text(path: &Path, outline: &Outline, settings: &OutputSettings) -> String {
    let unit = settings.units;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", path.display());
    let _ = writeln!(out, "  length:   {} {}", format_length(outline.length, unit), unit);
    let _ = writeln!(out, "  semispan: {} {}", format_length(outline.semispan, unit), unit);
    let _ = writeln!(
        out,
        "  wingtip:  ({}, {}) {}",
        format_length(outline.wingtip.x, unit),
        format_length(outline.wingtip.y, unit),
        unit
    );
    let pen_ups = outline.points.iter().filter(|v| v.is_pen_up()).count();
    let _ = writeln!(
        out,
        "  points:   {} ({} pen-ups)",
        outline.point_count(),
        pen_ups
    );

    if settings.list_points {
        let mut group = 0;
        let _ = writeln!(out, "  [{}]", group_name(group));
        for vertex in &outline.points {
            match vertex {
                OutlineVertex::Point(p) => {
                    let _ = writeln!(
                        out,
                        "    {:>10} {:>10}",
                        format_length(p.x, unit),
                        format_length(p.y, unit)
                    );
                }
                OutlineVertex::PenUp => {
                    group += 1;
                    let _ = writeln!(out, "  [{}]", group_name(group));
                }
            }
        }
    }

    out
}

fn group_name(index: usize) -> &'static str {
    GROUP_NAMES.get(index).copied().unwrap_or("group")
}
