//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::ForecastArgs;
pub use defaults::{
    DEFAULT_ENDPOINT, DEFAULT_FORECAST_LENGTH, DEFAULT_START_MONTH, ENDPOINT_ENV,
};
pub use types::OutputFormat;

pub(crate) use defaults::DEFAULT_USER_AGENT;
