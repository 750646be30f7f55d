use ratatui::{
    layout::{Constraint, Rect},
    prelude::{Backend, Frame},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::plot::{format_consumption, format_month};
use crate::ui::model::UiRenderData;

use super::theme::{
    TABLE_MONTH_WIDTH, TABLE_VALUE_WIDTH, axis_style, panel_block_style, panel_border_style,
    panel_title_style,
};

pub(super) fn render_table<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let block = Block::default()
        .title("Forecast")
        .borders(Borders::ALL)
        .style(panel_block_style(data.no_color))
        .border_style(panel_border_style(data.no_color))
        .title_style(panel_title_style(data.no_color));

    let points = match data.state.result() {
        Some(points) if !points.is_empty() => points,
        Some(_) | None => {
            f.render_widget(block, area);
            return;
        }
    };

    let value_width = usize::from(TABLE_VALUE_WIDTH);
    let rows: Vec<Row<'_>> = points
        .iter()
        .map(|point| {
            Row::new(vec![
                Cell::from(format_month(point.month)),
                Cell::from(format!(
                    "{:>value_width$}",
                    format_consumption(point.consumption)
                )),
            ])
        })
        .collect();
    let header = Row::new(vec![
        Cell::from("Month"),
        Cell::from(format!("{:>value_width$}", "Consumption")),
    ])
    .style(axis_style(data.no_color));
    let widths = [
        Constraint::Length(TABLE_MONTH_WIDTH),
        Constraint::Length(TABLE_VALUE_WIDTH),
    ];

    let table = Table::new(rows)
        .header(header)
        .block(block)
        .widths(&widths)
        .column_spacing(1);
    f.render_widget(table, area);
}
