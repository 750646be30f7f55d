pub(crate) const DEFAULT_USER_AGENT: &str = concat!("forecast-dash/", env!("CARGO_PKG_VERSION"));

/// Environment variable consulted for the prediction endpoint.
pub const ENDPOINT_ENV: &str = "FORECAST_API_URL";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";
pub const DEFAULT_START_MONTH: i32 = 1;
pub const DEFAULT_FORECAST_LENGTH: u32 = 12;
