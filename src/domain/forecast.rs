use serde::{Deserialize, Serialize};

/// Contiguous run of 1-based period indices sent to the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ForecastRequest {
    months: Vec<i64>,
}

impl ForecastRequest {
    #[must_use]
    pub fn months(&self) -> &[i64] {
        &self.months
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.months.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// One predicted `(month, consumption)` pair as returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: i64,
    pub consumption: f64,
}

/// Predicted series in response order.
pub type ForecastResult = Vec<ForecastPoint>;

/// Expands `start_month` into `forecast_length` consecutive period indices.
///
/// No range is enforced here; callers that want the advisory form bounds
/// run [`super::validate_bounds`] first. A zero length yields an empty
/// request.
#[must_use]
pub fn build_request(start_month: i32, forecast_length: u32) -> ForecastRequest {
    let start = i64::from(start_month);
    let months = (0..forecast_length)
        .map(|offset| start.saturating_add(i64::from(offset)))
        .collect();
    ForecastRequest { months }
}
