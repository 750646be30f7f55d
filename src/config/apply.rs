use std::path::PathBuf;

use url::Url;
use tracing::debug;

use crate::args::{
    DEFAULT_ENDPOINT, DEFAULT_FORECAST_LENGTH, DEFAULT_START_MONTH, ForecastArgs, OutputFormat,
};
use crate::domain::{check_length_cap, validate_bounds};
use crate::error::{AppError, AppResult, ConfigError};
use crate::plot::{Canvas, DEFAULT_HEIGHT, DEFAULT_PADDING, DEFAULT_WIDTH};

use super::types::{ChartConfig, ConfigFile};

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Url,
    pub start_month: i32,
    pub forecast_length: u32,
    pub strict_bounds: bool,
    pub canvas: Canvas,
    pub chart_out: Option<PathBuf>,
    pub format: OutputFormat,
    pub no_ui: bool,
    pub no_color: bool,
}

/// Merges CLI flags (including the endpoint environment variable) over the
/// config file over built-in defaults.
///
/// # Errors
///
/// Returns an error when the endpoint is not an http(s) URL, the chart
/// dimensions leave no room to draw, the forecast length exceeds
/// [`MAX_FORECAST_LENGTH`](crate::domain::MAX_FORECAST_LENGTH), or strict
/// bounds are requested and the initial request parameters fall outside them.
pub fn resolve_settings(args: &ForecastArgs, config: Option<ConfigFile>) -> AppResult<Settings> {
    let config = config.unwrap_or_default();
    let chart = config.chart.unwrap_or_default();

    let endpoint_raw = args
        .endpoint
        .clone()
        .or(config.endpoint)
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
    let endpoint = parse_endpoint(&endpoint_raw)?;
    debug!("Using prediction endpoint {}", endpoint);

    let start_month = args
        .start_month
        .or(config.start_month)
        .unwrap_or(DEFAULT_START_MONTH);
    let forecast_length = args
        .forecast_length
        .or(config.forecast_length)
        .unwrap_or(DEFAULT_FORECAST_LENGTH);
    let forecast_length = check_length_cap(forecast_length)?;
    let strict_bounds = args.strict_bounds || config.strict_bounds.unwrap_or(false);
    if strict_bounds {
        validate_bounds(start_month, forecast_length)?;
    }

    let canvas = resolve_canvas(args, &chart)?;
    let chart_out = args.chart_out.clone().or(chart.out).map(PathBuf::from);

    Ok(Settings {
        endpoint,
        start_month,
        forecast_length,
        strict_bounds,
        canvas,
        chart_out,
        format: args.format.or(config.format).unwrap_or_default(),
        no_ui: args.no_ui,
        no_color: args.no_color || config.no_color.unwrap_or(false),
    })
}

fn resolve_canvas(args: &ForecastArgs, chart: &ChartConfig) -> AppResult<Canvas> {
    let width = args.chart_width.or(chart.width).unwrap_or(DEFAULT_WIDTH);
    let height = args.chart_height.or(chart.height).unwrap_or(DEFAULT_HEIGHT);
    let padding = args.chart_padding.or(chart.padding).unwrap_or(DEFAULT_PADDING);
    Canvas::new(width, height, padding).map_err(AppError::from)
}

fn parse_endpoint(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|err| {
        AppError::config(ConfigError::InvalidEndpoint {
            url: raw.to_owned(),
            source: err,
        })
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(ConfigError::UnsupportedEndpointScheme {
            url: raw.to_owned(),
        }));
    }
    Ok(url)
}
