use super::*;
use crate::domain::ForecastPoint;
use crate::error::{AppError, AppResult, ValidationError};

const EPSILON: f64 = 1e-9;

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() < EPSILON
}

fn point(month: i64, consumption: f64) -> ForecastPoint {
    ForecastPoint { month, consumption }
}

fn scenario_points() -> Vec<ForecastPoint> {
    vec![point(1, 120.5), point(2, 130.0), point(3, 125.25)]
}

fn require_geometry(points: &[ForecastPoint], canvas: Canvas) -> AppResult<PlotGeometry> {
    plot(points, canvas).ok_or_else(|| AppError::validation("Expected geometry"))
}

#[test]
fn empty_series_draws_nothing() -> AppResult<()> {
    if plot(&[], Canvas::default()).is_some() {
        return Err(AppError::validation("Expected None for empty series"));
    }
    Ok(())
}

#[test]
fn plot_is_idempotent() -> AppResult<()> {
    let canvas = Canvas::default();
    let first = require_geometry(&scenario_points(), canvas)?;
    let second = require_geometry(&scenario_points(), canvas)?;
    if first != second {
        return Err(AppError::validation("Expected identical geometry"));
    }
    Ok(())
}

#[test]
fn single_point_sits_on_bottom_left_of_plot_area() -> AppResult<()> {
    let canvas = Canvas::new(300, 120, 20)?;
    let geometry = require_geometry(&[point(1, 7.0)], canvas)?;
    let [vertex] = geometry.vertices.as_slice() else {
        return Err(AppError::validation("Expected one vertex"));
    };
    if !close(vertex.x, 20.0) || !close(vertex.y, 100.0) {
        return Err(AppError::validation(format!(
            "Unexpected vertex: {:?}",
            vertex
        )));
    }
    if geometry.min_label.text != "7.00" || geometry.max_label.text != "7.00" {
        return Err(AppError::validation("Expected both labels to read 7.00"));
    }
    Ok(())
}

#[test]
fn flat_series_shares_y_and_spreads_x() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&[point(1, 5.0), point(2, 5.0), point(3, 5.0)], canvas)?;
    let expected_x = [40.0, 250.0, 460.0];
    if geometry.vertices.len() != expected_x.len() {
        return Err(AppError::validation("Expected three vertices"));
    }
    for (vertex, x) in geometry.vertices.iter().zip(expected_x) {
        if !close(vertex.x, x) {
            return Err(AppError::validation(format!(
                "Expected x {}, got {}",
                x, vertex.x
            )));
        }
        if !close(vertex.y, 160.0) {
            return Err(AppError::validation(format!(
                "Expected flat y 160, got {}",
                vertex.y
            )));
        }
    }
    Ok(())
}

#[test]
fn larger_values_plot_higher() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&scenario_points(), canvas)?;
    let [low, high, mid] = geometry.vertices.as_slice() else {
        return Err(AppError::validation("Expected three vertices"));
    };
    if !close(high.y, canvas.padding) {
        return Err(AppError::validation("Max should touch the top of the plot area"));
    }
    if !close(low.y, canvas.height - canvas.padding) {
        return Err(AppError::validation(
            "Min should touch the bottom of the plot area",
        ));
    }
    if !(high.y < mid.y && mid.y < low.y) {
        return Err(AppError::validation(format!(
            "Unexpected y ordering: {} {} {}",
            low.y, high.y, mid.y
        )));
    }
    // (125.25 - 120.5) / 9.5 = 0.5 of the usable height
    if !close(mid.y, 100.0) {
        return Err(AppError::validation(format!("Unexpected mid y {}", mid.y)));
    }
    Ok(())
}

#[test]
fn value_labels_follow_min_and_max() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&scenario_points(), canvas)?;
    let expectations = [
        (&geometry.min_label, "120.50", 160.0),
        (&geometry.max_label, "130.00", 40.0),
    ];
    for (label, text, y) in expectations {
        if label.text != text || !close(label.y, y) {
            return Err(AppError::validation(format!(
                "Unexpected value label: {:?}",
                label
            )));
        }
        if !close(label.x, Y_LABEL_X) || label.anchor != LabelAnchor::Start {
            return Err(AppError::validation("Value labels should be left-aligned"));
        }
    }
    Ok(())
}

#[test]
fn month_labels_center_under_each_vertex() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&[point(11, 1.0), point(12, 3.0), point(13, 2.0)], canvas)?;
    let texts: Vec<&str> = geometry
        .x_labels
        .iter()
        .map(|label| label.text.as_str())
        .collect();
    if texts != ["11", "12", "13"] {
        return Err(AppError::validation(format!(
            "Unexpected month labels: {:?}",
            texts
        )));
    }
    for (label, vertex) in geometry.x_labels.iter().zip(&geometry.vertices) {
        if !close(label.x, vertex.x) || label.anchor != LabelAnchor::Middle {
            return Err(AppError::validation("Month label not centered on vertex"));
        }
        if !close(label.y, canvas.height - canvas.padding + X_LABEL_OFFSET) {
            return Err(AppError::validation("Month label not below plot area"));
        }
    }
    Ok(())
}

#[test]
fn negative_values_scale_like_any_other() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&[point(1, -10.0), point(2, 10.0)], canvas)?;
    if geometry.min_label.text != "-10.00" || geometry.max_label.text != "10.00" {
        return Err(AppError::validation("Unexpected labels for signed series"));
    }
    let ys: Vec<f64> = geometry.vertices.iter().map(|vertex| vertex.y).collect();
    if !matches!(ys.as_slice(), [a, b] if close(*a, 160.0) && close(*b, 40.0)) {
        return Err(AppError::validation(format!("Unexpected ys: {:?}", ys)));
    }
    Ok(())
}

#[test]
fn extreme_value_span_stays_finite() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(
        &[point(1, -1e308), point(2, 0.0), point(3, 1e308)],
        canvas,
    )?;
    let ys: Vec<f64> = geometry.vertices.iter().map(|vertex| vertex.y).collect();
    if !matches!(ys.as_slice(), [a, b, c] if close(*a, 160.0) && close(*b, 100.0) && close(*c, 40.0))
    {
        return Err(AppError::validation(format!("Unexpected ys: {:?}", ys)));
    }
    Ok(())
}

#[test]
fn canvas_rejects_padding_that_leaves_no_room() -> AppResult<()> {
    if !matches!(
        Canvas::new(100, 60, 30),
        Err(ValidationError::CanvasPaddingTooLarge { .. })
    ) {
        return Err(AppError::validation("Expected padding error"));
    }
    if !matches!(Canvas::new(0, 60, 0), Err(ValidationError::CanvasEmpty)) {
        return Err(AppError::validation("Expected empty canvas error"));
    }
    let canvas = Canvas::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_PADDING)?;
    if canvas != Canvas::default() {
        return Err(AppError::validation("Expected default canvas"));
    }
    Ok(())
}

#[test]
fn format_helpers_use_fixed_decimals() -> AppResult<()> {
    let cases = [(120.5, "120.50"), (130.0, "130.00"), (125.25, "125.25"), (0.0, "0.00")];
    for (value, expected) in cases {
        if format_consumption(value) != expected {
            return Err(AppError::validation(format!(
                "Expected {} for {}",
                expected, value
            )));
        }
    }
    if format_month(7) != "7" {
        return Err(AppError::validation("Expected plain integer month"));
    }
    Ok(())
}

#[test]
fn table_lists_rows_in_response_order() -> AppResult<()> {
    let lines = format_table(&scenario_points());
    let expected = [
        "Month | Consumption",
        "------+------------",
        "1     |      120.50",
        "2     |      130.00",
        "3     |      125.25",
    ];
    if lines != expected {
        return Err(AppError::validation(format!(
            "Unexpected table:\n{}",
            lines.join("\n")
        )));
    }
    Ok(())
}

#[test]
fn table_of_empty_series_is_empty() -> AppResult<()> {
    if !format_table(&[]).is_empty() {
        return Err(AppError::validation("Expected no table lines"));
    }
    Ok(())
}

#[test]
fn svg_contains_line_markers_and_labels() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&scenario_points(), canvas)?;
    let svg = render_svg(&geometry, canvas)?;
    if !svg.contains("<svg") {
        return Err(AppError::validation("Expected an svg document"));
    }
    if svg.matches("<circle").count() != 3 {
        return Err(AppError::validation(format!(
            "Expected three markers in:\n{}",
            svg
        )));
    }
    if !svg.contains("<polyline") && !svg.contains("<path") {
        return Err(AppError::validation("Expected a connecting line"));
    }
    let labels = svg_text_contents(&svg);
    for text in ["120.50", "130.00", "1", "2", "3"] {
        if !labels.iter().any(|label| label == text) {
            return Err(AppError::validation(format!(
                "Missing label {} in {:?}",
                text, labels
            )));
        }
    }
    Ok(())
}

#[test]
fn svg_labels_are_twelve_pixels() -> AppResult<()> {
    let canvas = Canvas::default();
    let geometry = require_geometry(&scenario_points(), canvas)?;
    let svg = render_svg(&geometry, canvas)?;
    let sizes: Vec<&str> = svg
        .split("font-size=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    if sizes.is_empty() || sizes.iter().any(|size| *size != "12") {
        return Err(AppError::validation(format!(
            "Unexpected font sizes {:?}",
            sizes
        )));
    }
    Ok(())
}

/// Trimmed bodies of every `<text>` element; plotters wraps them in newlines.
fn svg_text_contents(svg: &str) -> Vec<String> {
    svg.split("<text")
        .skip(1)
        .filter_map(|element| {
            let body = element.split_once('>')?.1;
            let content = body.split_once("</text>")?.0;
            Some(content.trim().to_owned())
        })
        .collect()
}
