//! Turns form parameters into a forecast request, submits it and publishes
//! the outcome as a [`RequestState`].
mod state;


use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::ForecastRequest;
use crate::http::PredictionClient;

pub use state::{GENERIC_FAILURE_MESSAGE, RequestState};

/// Owns the request state and the client used to fill it.
///
/// Every submit takes the next sequence number. Only the newest submit may
/// publish a terminal state, so a slow response to an older request can never
/// replace the outcome (or the loading indicator) of a newer one.
pub struct Orchestrator {
    client: Arc<dyn PredictionClient>,
    state_tx: watch::Sender<RequestState>,
    latest_seq: AtomicU64,
}

impl Orchestrator {
    #[must_use]
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        let (state_tx, _) = watch::channel(RequestState::Idle);
        Self {
            client,
            state_tx,
            latest_seq: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state_tx.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> RequestState {
        self.state_tx.borrow().clone()
    }

    /// Submits `request` and resolves to the terminal state of this request.
    ///
    /// `Loading` is published before the call starts, under the same lock that
    /// hands out the sequence number so publications stay in submit order. The returned state is
    /// always this request's outcome; whether it was also published depends
    /// on no newer submit having started in the meantime.
    pub async fn submit(&self, request: ForecastRequest) -> RequestState {
        let mut seq = 0;
        self.state_tx.send_modify(|current| {
            seq = self
                .latest_seq
                .fetch_add(1, Ordering::SeqCst)
                .wrapping_add(1);
            *current = RequestState::Loading;
        });
        debug!("Submitting forecast request #{} ({} months)", seq, request.len());

        let outcome = match self.client.predict(&request).await {
            Ok(points) => RequestState::Succeeded(points),
            Err(err) => {
                warn!(
                    "Forecast request #{} failed ({:?}): {}",
                    seq,
                    err.kind(),
                    err
                );
                RequestState::failed()
            }
        };

        let published = self.state_tx.send_if_modified(|current| {
            if self.latest_seq.load(Ordering::SeqCst) != seq {
                return false;
            }
            *current = outcome.clone();
            true
        });
        if !published {
            debug!("Discarding stale outcome of forecast request #{}", seq);
        }
        outcome
    }

    /// Spawns [`Orchestrator::submit`] on the current tokio runtime.
    ///
    /// The in-flight call is not aborted by later submits; its outcome is
    /// dropped instead when it is stale.
    pub fn spawn_submit(self: &Arc<Self>, request: ForecastRequest) -> JoinHandle<RequestState> {
        let orchestrator = Arc::clone(self);
        tokio::spawn(async move { orchestrator.submit(request).await })
    }
}
