use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame},
    symbols,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Circle, Line},
    },
};

use crate::plot::{AxisLabel, LabelAnchor, MARKER_RADIUS, plot};
use crate::ui::model::UiRenderData;

use super::theme::{
    ACCENT_MARKER_RGB, ACCENT_SERIES_RGB, CHART_BG_RGB, axis_style, chart_surface_style,
    panel_border_style, panel_title_style, shape_color,
};

/// Draws the forecast on a canvas that shares the plot's pixel coordinates.
///
/// Plot geometry has its origin top-left while the terminal canvas counts y
/// upwards from the bottom, so every y is flipped against the canvas height.
pub(super) fn render_chart<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let block = Block::default()
        .title("Chart")
        .borders(Borders::ALL)
        .style(chart_surface_style(data.no_color))
        .border_style(panel_border_style(data.no_color))
        .title_style(panel_title_style(data.no_color));

    let Some(geometry) = data
        .state
        .result()
        .and_then(|points| plot(points, data.canvas))
    else {
        f.render_widget(block, area);
        return;
    };

    let surface = data.canvas;
    let inner = block.inner(area);
    if inner.width == 0 || inner.height == 0 {
        f.render_widget(block, area);
        return;
    }
    let cell_width = surface.width / f64::from(inner.width);
    let x_labels = place_x_labels(&geometry.x_labels, cell_width);
    let flip = |y: f64| surface.height - y;
    let series_color = shape_color(data.no_color, ACCENT_SERIES_RGB);
    let marker_color = shape_color(data.no_color, ACCENT_MARKER_RGB);
    let label_style = axis_style(data.no_color);

    let widget = Canvas::default()
        .block(block)
        .background_color(shape_color(data.no_color, CHART_BG_RGB))
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, surface.width])
        .y_bounds([0.0, surface.height])
        .paint(|ctx| {
            for pair in geometry.vertices.windows(2) {
                if let [from, to] = pair {
                    ctx.draw(&Line {
                        x1: from.x,
                        y1: flip(from.y),
                        x2: to.x,
                        y2: flip(to.y),
                        color: series_color,
                    });
                }
            }
            for vertex in &geometry.vertices {
                ctx.draw(&Circle {
                    x: vertex.x,
                    y: flip(vertex.y),
                    radius: f64::from(MARKER_RADIUS),
                    color: marker_color,
                });
            }
            ctx.layer();

            ctx.print(
                geometry.min_label.x,
                flip(geometry.min_label.y),
                Span::styled(geometry.min_label.text.clone(), label_style),
            );
            if geometry.max_label.text != geometry.min_label.text {
                ctx.print(
                    geometry.max_label.x,
                    flip(geometry.max_label.y),
                    Span::styled(geometry.max_label.text.clone(), label_style),
                );
            }
            for (x, label) in &x_labels {
                ctx.print(
                    *x,
                    flip(label.y),
                    Span::styled(label.text.clone(), label_style),
                );
            }
        });
    f.render_widget(widget, area);
}

/// Resolves label anchors to left edges in canvas units and drops labels that
/// would overlap the previous one. Terminal cells are much wider than a pixel,
/// so long month ranges would otherwise print on top of each other.
pub(crate) fn place_x_labels(labels: &[AxisLabel], cell_width: f64) -> Vec<(f64, &AxisLabel)> {
    let mut placed = Vec::with_capacity(labels.len());
    let mut next_free = f64::MIN;
    for label in labels {
        let width = label.text.chars().count() as f64 * cell_width;
        let start = match label.anchor {
            LabelAnchor::Middle => label.x - width / 2.0,
            LabelAnchor::Start => label.x,
        }
        .max(0.0);
        if start < next_free {
            continue;
        }
        next_free = start + width + cell_width;
        placed.push((start, label));
    }
    placed
}
