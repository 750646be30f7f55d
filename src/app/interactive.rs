use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::watch;
use tracing::debug;

use crate::config::Settings;
use crate::error::AppResult;
use crate::orchestrator::{Orchestrator, RequestState};
use crate::ui::{Dashboard, FormState, KeyOutcome, UiRenderData, handle_key};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the dashboard until the user quits.
///
/// Submits are spawned so the form stays responsive while a request is in
/// flight; state changes arrive through the orchestrator's watch channel.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or input cannot be
/// read.
pub(crate) async fn run_interactive(
    settings: &Settings,
    orchestrator: Arc<Orchestrator>,
) -> AppResult<()> {
    let mut dashboard = Dashboard::open()?;

    let mut form = FormState::new(
        settings.start_month,
        settings.forecast_length,
        settings.strict_bounds,
    );
    let mut state_rx = orchestrator.subscribe();
    let mut dirty = true;

    loop {
        if dirty || state_rx.has_changed().unwrap_or(false) {
            let data = snapshot(settings, &form, &mut state_rx);
            dashboard.draw(&data);
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            match handle_key(&mut form, key) {
                KeyOutcome::Quit => break,
                KeyOutcome::Submit => {
                    submit_form(&mut form, &orchestrator);
                    dirty = true;
                }
                KeyOutcome::Redraw => dirty = true,
                KeyOutcome::Ignored => {}
            }
        }
        tokio::task::yield_now().await;
    }

    debug!("Leaving interactive dashboard");
    Ok(())
}

fn submit_form(form: &mut FormState, orchestrator: &Arc<Orchestrator>) {
    match form.to_request() {
        Ok(request) => {
            form.message = None;
            // The spawned task owns its outcome; the watch channel carries the result.
            drop(orchestrator.spawn_submit(request));
        }
        Err(err) => {
            debug!("Rejected form input: {}", err);
            form.message = Some(err.to_string());
        }
    }
}

fn snapshot(
    settings: &Settings,
    form: &FormState,
    state_rx: &mut watch::Receiver<RequestState>,
) -> UiRenderData {
    UiRenderData {
        form: form.clone(),
        state: state_rx.borrow_and_update().clone(),
        canvas: settings.canvas,
        endpoint: settings.endpoint.to_string(),
        no_color: settings.no_color,
    }
}
