//! Maps a forecast series onto a fixed-size drawing surface and renders it.
//!
//! [`plot`] is the pure part: it turns points into vertices and label
//! placements. The SVG writer and the terminal chart only draw what it
//! returns.
mod format;
mod geometry;
mod svg;
mod table;

#[cfg(test)]
mod tests;

pub use format::{format_consumption, format_month};
pub use geometry::{
    AxisLabel, Canvas, DEFAULT_HEIGHT, DEFAULT_PADDING, DEFAULT_WIDTH, LabelAnchor, PlotGeometry,
    Vertex, X_LABEL_OFFSET, Y_LABEL_X, plot,
};
pub use svg::{MARKER_RADIUS, render_svg};
pub use table::format_table;
