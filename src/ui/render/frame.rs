use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, Frame},
    widgets::Block,
};

use crate::ui::model::UiRenderData;

use super::chart::render_chart;
use super::form::{render_form, render_status};
use super::table::render_table;
use super::theme::{
    BODY_MIN_HEIGHT, CHART_COL, FORM_HEIGHT, STATUS_HEIGHT, TABLE_COL, UI_MARGIN,
    app_background_style,
};

pub fn draw_frame<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(data.no_color)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(FORM_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
        ])
        .split(size);

    let (form_chunk, status_chunk, body_chunk) = match chunks.as_ref() {
        [a, b, c] => (a, b, c),
        _ => return,
    };

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(TABLE_COL),
            Constraint::Percentage(CHART_COL),
        ])
        .split(*body_chunk);

    let (table_chunk, chart_chunk) = match body.as_ref() {
        [a, b] => (a, b),
        _ => return,
    };

    render_form(f, data, *form_chunk);
    render_status(f, data, *status_chunk);
    render_table(f, data, *table_chunk);
    render_chart(f, data, *chart_chunk);
}
