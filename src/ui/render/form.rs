use ratatui::{
    layout::Rect,
    prelude::{Backend, Frame, text},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::{FORECAST_LENGTH_BOUNDS, START_MONTH_BOUNDS};
use crate::error::FormField;
use crate::orchestrator::RequestState;
use crate::ui::model::UiRenderData;

use super::theme::{
    ACCENT_AMBER_RGB, ACCENT_GREEN_RGB, ACCENT_RED_RGB, PANEL_MUTED_RGB, axis_style, focus_style,
    panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

const FIELD_WIDTH: usize = 6;
const HINT: &str = "Enter: submit   Tab/Up/Down: switch field   q/Esc: quit";

pub(super) fn render_form<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let block = Block::default()
        .title(format!("Request -> {}", data.endpoint))
        .borders(Borders::ALL)
        .style(panel_block_style(data.no_color))
        .border_style(panel_border_style(data.no_color))
        .title_style(panel_title_style(data.no_color));

    let (start_min, start_max) = (*START_MONTH_BOUNDS.start(), *START_MONTH_BOUNDS.end());
    let (length_min, length_max) = (
        *FORECAST_LENGTH_BOUNDS.start(),
        *FORECAST_LENGTH_BOUNDS.end(),
    );
    let lines = vec![
        field_line(
            data,
            FormField::StartMonth,
            "Start month:    ",
            format!("({}-{})", start_min, start_max),
        ),
        field_line(
            data,
            FormField::ForecastLength,
            "Forecast length:",
            format!("({}-{})", length_min, length_max),
        ),
        text::Line::from(Span::styled(HINT, axis_style(data.no_color))),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(
    data: &UiRenderData,
    field: FormField,
    label: &'static str,
    hint: String,
) -> text::Line<'static> {
    let value = format!(
        "[ {:<width$} ]",
        data.form.field(field),
        width = FIELD_WIDTH
    );
    let value_style = if data.form.focus == field {
        focus_style(data.no_color)
    } else {
        panel_title_style(data.no_color)
    };
    text::Line::from(vec![
        Span::from(label),
        Span::raw(" "),
        Span::styled(value, value_style),
        Span::raw(" "),
        Span::styled(hint, axis_style(data.no_color)),
    ])
}

pub(super) fn render_status<B: Backend>(f: &mut Frame<'_, B>, data: &UiRenderData, area: Rect) {
    let block = Block::default()
        .title("Status")
        .borders(Borders::ALL)
        .style(panel_block_style(data.no_color))
        .border_style(panel_border_style(data.no_color))
        .title_style(panel_title_style(data.no_color));

    let (message, color) = status_message(data);
    let line = text::Line::from(Span::styled(
        message,
        style_color(data.no_color, rgb(color)),
    ));
    f.render_widget(Paragraph::new(line).block(block), area);
}

/// A pending validation problem takes precedence over the request state.
fn status_message(data: &UiRenderData) -> (String, (u8, u8, u8)) {
    if let Some(message) = data.form.message.as_ref() {
        return (message.clone(), ACCENT_RED_RGB);
    }
    match &data.state {
        RequestState::Idle => (
            "Press Enter to request a forecast.".to_owned(),
            PANEL_MUTED_RGB,
        ),
        RequestState::Loading => ("Loading forecast...".to_owned(), ACCENT_AMBER_RGB),
        RequestState::Succeeded(points) if points.is_empty() => {
            ("No forecast data returned.".to_owned(), PANEL_MUTED_RGB)
        }
        RequestState::Succeeded(points) => (
            format!("Received {} forecast points.", points.len()),
            ACCENT_GREEN_RGB,
        ),
        RequestState::Failed(message) => (message.clone(), ACCENT_RED_RGB),
    }
}
