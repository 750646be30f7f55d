use crate::domain::ForecastPoint;

use super::format::{format_consumption, format_month};

const MONTH_HEADER: &str = "Month";
const CONSUMPTION_HEADER: &str = "Consumption";

/// Formats the series as a two-column text table in response order.
///
/// An empty series produces no lines at all, header included.
#[must_use]
pub fn format_table(points: &[ForecastPoint]) -> Vec<String> {
    if points.is_empty() {
        return Vec::new();
    }

    let rows: Vec<(String, String)> = points
        .iter()
        .map(|point| {
            (
                format_month(point.month),
                format_consumption(point.consumption),
            )
        })
        .collect();
    let month_width = rows
        .iter()
        .map(|(month, _)| month.len())
        .fold(MONTH_HEADER.len(), usize::max);
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .fold(CONSUMPTION_HEADER.len(), usize::max);

    let mut lines = Vec::with_capacity(rows.len().saturating_add(2));
    lines.push(format!(
        "{:<month_width$} | {:>value_width$}",
        MONTH_HEADER, CONSUMPTION_HEADER
    ));
    lines.push(format!(
        "{}-+-{}",
        "-".repeat(month_width),
        "-".repeat(value_width)
    ));
    for (month, value) in rows {
        lines.push(format!("{:<month_width$} | {:>value_width$}", month, value));
    }
    lines
}
