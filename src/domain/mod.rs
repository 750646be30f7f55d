//! Forecast request and result types shared by the orchestrator, the HTTP
//! client and the plotter.
mod bounds;
mod forecast;


pub use bounds::{
    FORECAST_LENGTH_BOUNDS, MAX_FORECAST_LENGTH, START_MONTH_BOUNDS, check_length_cap,
    parse_forecast_length, parse_start_month, validate_bounds,
};
pub use forecast::{ForecastPoint, ForecastRequest, ForecastResult, build_request};
