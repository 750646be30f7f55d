//! Entry points for the `cargo-fuzz` targets under `fuzz/`.
use clap::Parser;

use crate::args::ForecastArgs;
use crate::config::types::ConfigFile;
use crate::config::{Settings, resolve_settings};
use crate::domain::{
    ForecastPoint, ForecastRequest, ForecastResult, build_request, parse_forecast_length,
    parse_start_month,
};
use crate::error::{AppError, AppResult};
use crate::http::parse_forecast_body;
use crate::plot::{Canvas, PlotGeometry, plot};

/// Parses a prediction service response body.
///
/// # Errors
///
/// Returns an error when the body is not a valid forecast envelope.
pub fn parse_forecast_response_input(body: &[u8]) -> AppResult<ForecastResult> {
    parse_forecast_body(body).map_err(AppError::from)
}

/// Computes chart geometry for raw `(month, consumption)` pairs.
///
/// # Errors
///
/// Returns an error when the canvas dimensions are rejected.
pub fn plot_series_input(
    series: &[(i64, f64)],
    width: u32,
    height: u32,
    padding: u32,
) -> AppResult<Option<PlotGeometry>> {
    let canvas = Canvas::new(width, height, padding)?;
    let points: Vec<ForecastPoint> = series
        .iter()
        .map(|(month, consumption)| ForecastPoint {
            month: *month,
            consumption: *consumption,
        })
        .collect();
    Ok(plot(&points, canvas))
}

/// Parses the two form fields and expands them into a request.
///
/// # Errors
///
/// Returns an error when either field is rejected.
pub fn parse_form_entry_input(start_month: &str, forecast_length: &str) -> AppResult<ForecastRequest> {
    let start = parse_start_month(start_month)?;
    let length = parse_forecast_length(forecast_length)?;
    Ok(build_request(start, length))
}

/// Parses TOML config and resolves it against default CLI args.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<Settings> {
    let config: ConfigFile = toml::from_str(input)?;
    apply_config_to_defaults(config)
}

/// Parses JSON config and resolves it against default CLI args.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<Settings> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(config)
}

fn apply_config_to_defaults(config: ConfigFile) -> AppResult<Settings> {
    let args = ForecastArgs::try_parse_from(["forecast-dash"])?;
    resolve_settings(&args, Some(config))
}
