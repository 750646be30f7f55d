use crate::domain::ForecastPoint;
use crate::error::ValidationError;

use super::format::{format_consumption, format_month};

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 200;
pub const DEFAULT_PADDING: u32 = 40;
/// Distance of the month labels below the bottom edge of the plot area.
pub const X_LABEL_OFFSET: f64 = 18.0;
/// Left edge of the min/max value labels.
pub const Y_LABEL_X: f64 = 5.0;

/// Drawing surface in pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: f64::from(DEFAULT_WIDTH),
            height: f64::from(DEFAULT_HEIGHT),
            padding: f64::from(DEFAULT_PADDING),
        }
    }
}

impl Canvas {
    /// Builds a canvas from user-supplied pixel sizes.
    ///
    /// # Errors
    ///
    /// Returns an error when a dimension is zero or the padding leaves no
    /// room to draw.
    pub fn new(width: u32, height: u32, padding: u32) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::CanvasEmpty);
        }
        let doubled = padding.saturating_mul(2);
        if doubled >= width || doubled >= height {
            return Err(ValidationError::CanvasPaddingTooLarge {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            width: f64::from(width),
            height: f64::from(height),
            padding: f64::from(padding),
        })
    }

    fn usable_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    fn usable_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Text starts at `x`.
    Start,
    /// Text is centered on `x`.
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: LabelAnchor,
}

/// Everything needed to draw one forecast chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotGeometry {
    /// Polyline vertices and marker centers, in series order.
    pub vertices: Vec<Vertex>,
    pub min_label: AxisLabel,
    pub max_label: AxisLabel,
    /// One month label per vertex.
    pub x_labels: Vec<AxisLabel>,
}

/// Computes chart geometry for `points` on `canvas`.
///
/// Returns `None` for an empty series. A flat series sits on the bottom edge
/// of the plot area and a lone point sits on the left edge.
#[must_use]
pub fn plot(points: &[ForecastPoint], canvas: Canvas) -> Option<PlotGeometry> {
    let first = points.first()?;
    let (min, max) = points
        .iter()
        .fold((first.consumption, first.consumption), |(lo, hi), point| {
            (lo.min(point.consumption), hi.max(point.consumption))
        });
    // Halving is exact, and keeps the spread finite for any finite series.
    let half_spread = max / 2.0 - min / 2.0;
    let ratio = |value: f64| {
        if half_spread > 0.0 {
            (value / 2.0 - min / 2.0) / half_spread
        } else {
            0.0
        }
    };
    let steps = match points.len().saturating_sub(1) {
        0 => 1.0,
        gaps => gaps as f64,
    };

    let map_y = |value: f64| canvas.height - canvas.padding - ratio(value) * canvas.usable_height();
    let map_x = |index: usize| canvas.padding + index as f64 * canvas.usable_width() / steps;

    let vertices: Vec<Vertex> = points
        .iter()
        .enumerate()
        .map(|(index, point)| Vertex {
            x: map_x(index),
            y: map_y(point.consumption),
        })
        .collect();

    let label_y = canvas.height - canvas.padding + X_LABEL_OFFSET;
    let x_labels = points
        .iter()
        .zip(&vertices)
        .map(|(point, vertex)| AxisLabel {
            text: format_month(point.month),
            x: vertex.x,
            y: label_y,
            anchor: LabelAnchor::Middle,
        })
        .collect();

    let value_label = |value: f64| AxisLabel {
        text: format_consumption(value),
        x: Y_LABEL_X,
        y: map_y(value),
        anchor: LabelAnchor::Start,
    };

    Some(PlotGeometry {
        min_label: value_label(min),
        max_label: value_label(max),
        vertices,
        x_labels,
    })
}
