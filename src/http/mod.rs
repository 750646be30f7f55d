//! HTTP transport to the prediction service.
mod client;
mod wire;

#[cfg(test)]
mod tests;

pub use client::{HttpPredictionClient, PredictionClient};
pub use wire::{parse_forecast_body, render_forecast_json};
