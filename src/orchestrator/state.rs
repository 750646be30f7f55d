use crate::domain::ForecastResult;

/// Message shown for every failed request, whatever the underlying cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "API error";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(ForecastResult),
    Failed(String),
}

impl RequestState {
    #[must_use]
    pub fn failed() -> Self {
        RequestState::Failed(GENERIC_FAILURE_MESSAGE.to_owned())
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    #[must_use]
    pub fn result(&self) -> Option<&ForecastResult> {
        match self {
            RequestState::Succeeded(points) => Some(points),
            RequestState::Idle | RequestState::Loading | RequestState::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message.as_str()),
            RequestState::Idle | RequestState::Loading | RequestState::Succeeded(_) => None,
        }
    }
}
