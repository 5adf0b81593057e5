//! Lookup worker thread
//!
//! Runs suggestion lookups in a background thread to avoid blocking the UI.
//! Receives requests via channel, fetches each one as its own task on a
//! single-threaded tokio runtime, and sends every result back tagged with the
//! request ID it belongs to.
//!
//! Superseded requests are not aborted. The controller drops their responses
//! by comparing request IDs.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;

use super::{LookupRequest, LookupResponse, SuggestionSource};

/// Spawn the lookup worker thread
///
/// The worker exits once every request sender has been dropped and the
/// lookups already in flight have answered.
pub fn spawn_worker<S: SuggestionSource>(
    source: S,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("lookup-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(source), request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop<S: SuggestionSource>(
    source: Arc<S>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let mut in_flight = JoinSet::new();

    while let Some(request) = request_rx.recv().await {
        let source = Arc::clone(&source);
        let response_tx = response_tx.clone();

        in_flight.spawn(async move {
            handle_request(source.as_ref(), request, &response_tx).await;
        });

        // Reap finished lookups so the set doesn't grow unbounded
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}

    log::debug!("Lookup worker shutting down");
}

async fn handle_request<S: SuggestionSource>(
    source: &S,
    request: LookupRequest,
    response_tx: &Sender<LookupResponse>,
) {
    let result = source.fetch(&request.query).await;

    if let Err(e) = &result {
        log::debug!("Lookup {} for {:?} failed: {}", request.request_id, request.query, e);
    }

    let response = LookupResponse {
        request_id: request.request_id,
        result,
    };
    if response_tx.send(response).is_err() {
        // Controller dropped, nobody is listening
        log::debug!("Dropping response for request {}", request.request_id);
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
