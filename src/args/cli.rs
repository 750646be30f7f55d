use clap::Parser;

use super::defaults::ENDPOINT_ENV;
use super::parsers::{parse_forecast_length_arg, parse_pixels, parse_start_month_arg};
use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Request consumption forecasts from a prediction service and chart them in the terminal."
)]
pub struct ForecastArgs {
    /// Prediction endpoint that accepts POST {"months": [...]}
    #[arg(long, short = 'e', env = ENDPOINT_ENV)]
    pub endpoint: Option<String>,

    /// First period index to forecast (the form suggests 1-12)
    #[arg(
        long = "start-month",
        short = 's',
        allow_negative_numbers = true,
        value_parser = parse_start_month_arg
    )]
    pub start_month: Option<i32>,

    /// Number of consecutive periods to forecast (the form suggests 1-36, at most 10000)
    #[arg(
        long = "forecast-length",
        short = 'n',
        allow_negative_numbers = true,
        value_parser = parse_forecast_length_arg
    )]
    pub forecast_length: Option<u32>,

    /// Reject start months outside 1-12 and lengths outside 1-36
    #[arg(long = "strict-bounds")]
    pub strict_bounds: bool,

    /// Submit once from the flags above and print the result instead of opening the UI
    #[arg(long = "no-ui", help_heading = "Headless")]
    pub no_ui: bool,

    /// Output format for headless mode
    #[arg(long, value_enum, help_heading = "Headless")]
    pub format: Option<OutputFormat>,

    /// Write the chart as SVG to this path (headless mode)
    #[arg(long = "chart-out", help_heading = "Headless")]
    pub chart_out: Option<String>,

    /// Chart width in pixels
    #[arg(long = "chart-width", value_parser = parse_pixels, help_heading = "Chart")]
    pub chart_width: Option<u32>,

    /// Chart height in pixels
    #[arg(long = "chart-height", value_parser = parse_pixels, help_heading = "Chart")]
    pub chart_height: Option<u32>,

    /// Padding around the plot area in pixels
    #[arg(long = "chart-padding", help_heading = "Chart")]
    pub chart_padding: Option<u32>,

    /// Path to config file (TOML/JSON). Defaults to ./forecast-dash.toml or ./forecast-dash.json if present.
    #[arg(long, help_heading = "Common Options")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by FORECAST_LOG/RUST_LOG)
    #[arg(long, short = 'v', help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", help_heading = "Common Options")]
    pub no_color: bool,
}
