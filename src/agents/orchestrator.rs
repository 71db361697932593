use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use crate::agents::synthesizer::normalize_hint;
use crate::agents::AgentResponse;
use crate::errors::{FailureNotice, ProcessingFailure};
use crate::interaction::Backend;

/// Entry point for dashboard commands. Calls are independent: there is no
/// queue, no dedup and no cancellation, and concurrent calls finish in
/// whatever order their backends answer.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    backend: Backend,
    in_flight: Arc<AtomicUsize>,
    notices: Option<UnboundedSender<FailureNotice>>,
}

struct InFlightGuard {
    counter: Arc<AtomicUsize>,
}

impl InFlightGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self {
            counter: Arc::clone(counter),
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Orchestrator {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            in_flight: Arc::new(AtomicUsize::new(0)),
            notices: None,
        }
    }

    pub fn with_notice_sink(mut self, sink: UnboundedSender<FailureNotice>) -> Self {
        self.notices = Some(sink);
        self
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Swaps the backend for later calls. The in-flight counter and notice
    /// sink carry over.
    pub fn replace_backend(&mut self, backend: Backend) {
        tracing::info!(
            from = self.backend.name(),
            to = backend.name(),
            "interaction backend replaced"
        );
        self.backend = backend;
    }

    /// True while at least one call is pending. Callers use it to disable
    /// their own controls; the orchestrator never rejects a call because of it.
    pub fn is_processing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn process_command(
        &self,
        command: &str,
        division_hint: Option<&str>,
        context: Option<&str>,
    ) -> Option<AgentResponse> {
        let _guard = InFlightGuard::enter(&self.in_flight);
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let division_hint = normalize_hint(division_hint);

        tracing::info!(
            request_id = %request_id,
            backend = self.backend.name(),
            division_hint = division_hint.unwrap_or("-"),
            has_context = context.is_some(),
            command,
            "command started"
        );

        match self.backend.respond(command, division_hint, context).await {
            Ok(response) => {
                tracing::info!(
                    request_id = %request_id,
                    duration_ms = duration_ms(started.elapsed()),
                    division = %response.division,
                    sentiment = %response.sentiment,
                    cost_incurred = response.cost_incurred,
                    "command completed"
                );
                Some(response)
            }
            Err(failure) => {
                self.report_failure(&request_id, &failure);
                None
            }
        }
    }

    fn report_failure(&self, request_id: &str, failure: &ProcessingFailure) {
        tracing::warn!(request_id, error = %failure, "command failed");

        let Some(sink) = &self.notices else {
            return;
        };
        if sink.send(FailureNotice::from(failure)).is_err() {
            tracing::debug!(request_id, "failure notice dropped; receiver closed");
        }
    }
}

fn duration_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
