use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ForecastPoint, ForecastResult};
use crate::error::RequestError;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    forecast: Option<Vec<ForecastPoint>>,
}

#[derive(Debug, Serialize)]
struct ForecastEnvelope<'a> {
    forecast: &'a [ForecastPoint],
}

/// Decodes a successful prediction response.
///
/// A missing or `null` `forecast` field is an empty series. Anything that is
/// not an object with well-formed points is rejected.
///
/// # Errors
///
/// Returns `MalformedResponse` when the body is not JSON or violates the
/// point shape.
pub fn parse_forecast_body(body: &[u8]) -> Result<ForecastResult, RequestError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| RequestError::MalformedResponse { source: err })?;
    if !value.is_object() {
        return Err(RequestError::MalformedResponse {
            source: serde_json::Error::custom("expected a JSON object at the top level"),
        });
    }
    let response: ForecastResponse = serde_json::from_value(value)
        .map_err(|err| RequestError::MalformedResponse { source: err })?;
    Ok(response.forecast.unwrap_or_default())
}

/// Renders a series in the same envelope the service uses.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render_forecast_json(points: &[ForecastPoint]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ForecastEnvelope { forecast: points })
}
