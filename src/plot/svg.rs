use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::AppResult;

use super::geometry::{AxisLabel, Canvas, LabelAnchor, PlotGeometry};

pub const MARKER_RADIUS: i32 = 4;
const LINE_WIDTH: u32 = 3;
/// Label size in SVG pixels.
const LABEL_FONT_PX: f64 = 12.0;
/// plotters writes `font-size` as the requested size divided by this factor.
const SVG_FONT_SCALE: f64 = 1.24;
const LINE_RGB: RGBColor = RGBColor(0x25, 0x63, 0xeb);
const LABEL_RGB: RGBColor = RGBColor(0x44, 0x44, 0x44);

/// Draws `geometry` as an SVG document of `canvas` size.
///
/// # Errors
///
/// Returns an error when plotters fails to draw an element.
pub fn render_svg(geometry: &PlotGeometry, canvas: Canvas) -> AppResult<String> {
    let mut buf = String::new();
    {
        let size = (to_px_len(canvas.width), to_px_len(canvas.height));
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        root.fill(&WHITE)?;

        let path: Vec<(i32, i32)> = geometry
            .vertices
            .iter()
            .map(|vertex| to_px(vertex.x, vertex.y))
            .collect();
        root.draw(&PathElement::new(path, LINE_RGB.stroke_width(LINE_WIDTH)))?;
        for vertex in &geometry.vertices {
            root.draw(&Circle::new(
                to_px(vertex.x, vertex.y),
                MARKER_RADIUS,
                LINE_RGB.filled(),
            ))?;
        }

        for label in geometry
            .x_labels
            .iter()
            .chain([&geometry.min_label, &geometry.max_label])
        {
            draw_label(&root, label)?;
        }

        root.present()?;
    }
    Ok(buf)
}

fn draw_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    label: &AxisLabel,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let hpos = match label.anchor {
        LabelAnchor::Start => HPos::Left,
        LabelAnchor::Middle => HPos::Center,
    };
    let style = ("sans-serif", LABEL_FONT_PX * SVG_FONT_SCALE)
        .into_font()
        .color(&LABEL_RGB)
        .pos(Pos::new(hpos, VPos::Bottom));
    root.draw(&Text::new(
        label.text.as_str(),
        to_px(label.x, label.y),
        style,
    ))
}

fn to_px(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn to_px_len(value: f64) -> u32 {
    value.round().max(1.0) as u32
}
