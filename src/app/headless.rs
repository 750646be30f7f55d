use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::build_request;
use crate::error::{AppError, AppResult};
use crate::orchestrator::{GENERIC_FAILURE_MESSAGE, Orchestrator, RequestState};

use super::export::{export_svg, write_result};

/// Submits one request built from the settings and prints the outcome.
///
/// # Errors
///
/// Returns [`AppError::ForecastFailed`] when the request ends in `Failed`,
/// and I/O or plotting errors from writing the output.
pub(crate) async fn run_headless(settings: &Settings, orchestrator: &Orchestrator) -> AppResult<()> {
    let request = build_request(settings.start_month, settings.forecast_length);
    info!(
        "Requesting {} forecast months starting at {} from {}",
        request.len(),
        settings.start_month,
        settings.endpoint
    );

    let points = match orchestrator.submit(request).await {
        RequestState::Succeeded(points) => points,
        RequestState::Failed(message) => return Err(AppError::ForecastFailed { message }),
        RequestState::Idle | RequestState::Loading => {
            return Err(AppError::ForecastFailed {
                message: GENERIC_FAILURE_MESSAGE.to_owned(),
            });
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(&mut out, &points, settings.format)?;

    if let Some(path) = settings.chart_out.as_deref() {
        if export_svg(path, &points, settings.canvas).await? {
            info!("Wrote chart to {}", path.display());
        } else {
            debug!("Empty forecast, skipping chart {}", path.display());
        }
    }
    Ok(())
}
