use crate::classifier::should_skip_translation;
use crate::display::UNKNOWN_SENDER;
use crate::pipeline::queue::TranslationRequest;
use crate::pipeline::service::PipelineShared;
use crate::translation::is_throttle_signature;
use crate::utils::{Result, TranslatorError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// The single consumer of the request queue. Polls on a fixed tick, starts
/// at most one translation call per open gate, and never waits for a call it
/// started; result handling runs in the spawned task.
pub(crate) struct Dispatcher {
    shared: Arc<PipelineShared>,
}

impl Dispatcher {
    pub(crate) fn new(shared: Arc<PipelineShared>) -> Self {
        Self { shared }
    }

    pub(crate) async fn run(self) {
        let tick_interval = Duration::from_millis(self.shared.pipeline.tick_interval_ms);
        let mut interval = tokio::time::interval(tick_interval);
        loop {
            interval.tick().await;
            self.tick().await;
        }
    }

    /// One poll of the queue.
    pub(crate) async fn tick(&self) {
        let Some(request) = self.shared.queue.try_dequeue(Instant::now()) else {
            return;
        };

        // Safety net: content that changed classification between enqueue
        // and dequeue is dropped here instead of being sent out.
        if should_skip_translation(&request.content) {
            debug!(content = %request.content, "content no longer translatable, discarding");
            self.shared.admission.release(&request.content).await;
            return;
        }

        let shared = self.shared.clone();
        tokio::spawn(async move {
            dispatch(shared, request).await;
        });
    }
}

/// Runs the translation call for one request and interprets the result.
pub(crate) async fn dispatch(shared: Arc<PipelineShared>, request: TranslationRequest) {
    let (from, to) = {
        let config = shared.config.read().await;
        (
            config.source_language.clone(),
            config.target_language.clone(),
        )
    };

    let outcome = shared
        .translator
        .translate(&request.content, &from, &to)
        .await;
    handle_outcome(shared, request, outcome).await;
}

async fn handle_outcome(
    shared: Arc<PipelineShared>,
    request: TranslationRequest,
    outcome: Result<String>,
) {
    match outcome {
        Ok(translated) => {
            let translated = translated.trim().to_string();
            if translated.is_empty() || translated == request.content {
                debug!(content = %request.content, "empty or unchanged result, discarding");
                shared.admission.release(&request.content).await;
                return;
            }
            if is_throttle_signature(&translated) {
                info!(content = %request.content, "throttle signature in payload, re-queueing");
                requeue(shared, request).await;
                return;
            }
            deliver(shared, request, translated).await;
        }
        Err(TranslatorError::Provider { msg }) if is_throttle_signature(&msg) => {
            info!(content = %request.content, msg = %msg, "provider throttled, re-queueing");
            requeue(shared, request).await;
        }
        Err(e) => {
            // Terminal for this content; a fresh ingestion event may
            // re-trigger it.
            error!(content = %request.content, error = %e, "translation failed");
            shared.admission.release(&request.content).await;
        }
    }
}

async fn requeue(shared: Arc<PipelineShared>, request: TranslationRequest) {
    let request = request.requeued();
    if request.attempts > shared.pipeline.max_requeue_attempts {
        warn!(
            content = %request.content,
            attempts = request.attempts,
            "abandoning repeatedly throttled request"
        );
        shared.admission.release(&request.content).await;
        return;
    }
    // The content stays admitted so concurrent duplicates are still
    // rejected while the retry waits its turn.
    shared.queue.enqueue(request);
}

async fn deliver(shared: Arc<PipelineShared>, request: TranslationRequest, translated: String) {
    // Admission and sender state resolve before any presentation delay.
    let sender = shared
        .admission
        .resolve(&request.content)
        .await
        .unwrap_or_else(|| UNKNOWN_SENDER.to_string());

    let (show_original, delay_ms) = {
        let config = shared.config.read().await;
        (config.show_original, config.delay_ms)
    };

    info!(
        sender = %sender,
        original = %request.content,
        translated = %translated,
        "delivering translation"
    );

    if !request.immediate && delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    shared
        .sink
        .deliver(&sender, &request.content, &translated, show_original)
        .await;
}
