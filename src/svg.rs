//! SVG visualization of thumbnail layouts.
//!
//! Generates a vertical sequence of annotated panels: the source image with
//! the sample rectangle highlighted, then the output canvas. Useful for
//! eyeballing what a layout will do before any pixels move.
//!
//! # Example
//!
//! ```
//! use zenthumb::{ResizeMode, Thumbnail};
//! use zenthumb::svg::render_layout_svg;
//!
//! let layout = Thumbnail::new(800, 800)
//!     .mode(ResizeMode::Crop)
//!     .compute(1600, 1200)
//!     .unwrap();
//!
//! let svg = render_layout_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::{CanvasColor, Layout, Rect, Size};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// A single panel in the layout visualization.
struct Step {
    label: String,
    /// The overall bounding box (source or canvas).
    outer: Size,
    /// Highlighted region within the outer box. None means the content
    /// fills the entire outer box.
    inner: Option<Rect>,
    /// Optional annotation text below the panel.
    annotation: String,
}

/// Render a complete SVG document showing a layout step by step.
///
/// Shows the source frame with the sample rectangle inside it, then the
/// output canvas annotated with its background color.
pub fn render_layout_svg(layout: &Layout) -> String {
    let steps = build_steps(layout);
    render_steps(&steps)
}

/// Build the panel sequence for one layout.
fn build_steps(layout: &Layout) -> Vec<Step> {
    let mut steps = Vec::new();

    let cropped = layout.needs_crop();
    steps.push(Step {
        label: format!(
            "Source  {}×{}",
            layout.source.width, layout.source.height
        ),
        outer: layout.source,
        inner: if cropped { Some(layout.sample) } else { None },
        annotation: if cropped {
            format!(
                "sample {}×{} at ({}, {})",
                layout.sample.width, layout.sample.height, layout.sample.x, layout.sample.y
            )
        } else {
            String::new()
        },
    });

    steps.push(Step {
        label: format!(
            "Canvas  {}×{}",
            layout.canvas.width, layout.canvas.height
        ),
        outer: layout.canvas,
        inner: None,
        annotation: if layout.is_identity() {
            format!("identity copy, bg {}", color_label(layout.background))
        } else {
            format!("bg {}", color_label(layout.background))
        },
    });

    steps
}

/// Short text form of a canvas color for annotations.
fn color_label(color: CanvasColor) -> String {
    match color {
        CanvasColor::Transparent => String::from("transparent"),
        CanvasColor::Srgb { r, g, b, a: 255 } => format!("#{r:02x}{g:02x}{b:02x}"),
        CanvasColor::Srgb { r, g, b, a } => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
    }
}

/// Scale a Size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(size: Size) -> (f64, f64, f64) {
    let w = size.width as f64;
    let h = size.height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Render step panels into a complete SVG document.
fn render_steps(steps: &[Step]) -> String {
    if steps.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let mut total_h = MARGIN_TOP;
    for (i, _step) in steps.iter().enumerate() {
        total_h += LABEL_H;
        total_h += MAX_PANEL_H;
        if i < steps.len() - 1 {
            total_h += PANEL_GAP;
        }
    }
    total_h += MARGIN_TOP; // bottom margin

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(2048);

    // SVG header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outer { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outer { fill: #2d2d2d; stroke: #555; }
    .inner { fill: #3a72a4; stroke: #5a9fd4; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##,
    );

    // Arrow marker definition
    svg.push_str(
        r##"<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for (i, step) in steps.iter().enumerate() {
        // Label
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&step.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        // Panel
        let (sw, sh, scale) = scale_to_fit(step.outer);
        let panel_x = center_x - sw / 2.0;
        let panel_y = y;

        // Outer box
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outer" rx="2"/>"#,
            panel_x, panel_y, sw, sh
        ));
        svg.push('\n');

        // Inner rect (sample highlight), or full-panel content fill
        if let Some(inner) = step.inner {
            let ix = panel_x + inner.x as f64 * scale;
            let iy = panel_y + inner.y as f64 * scale;
            let iw = inner.width as f64 * scale;
            let ih = inner.height as f64 * scale;
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="1"/>"#,
                ix, iy, iw, ih
            ));
        } else {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="inner" rx="2"/>"#,
                panel_x, panel_y, sw, sh
            ));
        }
        svg.push('\n');

        // Annotation
        if !step.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + sh + 14.0,
                escape_xml(&step.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H;

        // Arrow to next step
        if i < steps.len() - 1 {
            let arrow_top = y + 8.0;
            let arrow_bot = y + PANEL_GAP - 8.0;
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x, arrow_top, center_x, arrow_bot
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
