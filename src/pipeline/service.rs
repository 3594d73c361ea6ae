use crate::classifier::{classify, Classification};
use crate::display::DisplaySink;
use crate::pipeline::admission::AdmissionSet;
use crate::pipeline::dispatcher::Dispatcher;
use crate::pipeline::queue::{RequestQueue, TranslationRequest};
use crate::translation::Translator;
use crate::utils::{PipelineConfig, TranslatorConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// State shared between the ingestion side and the dispatcher. One instance
/// per service; nothing here is process-global.
pub(crate) struct PipelineShared {
    pub(crate) config: Arc<RwLock<TranslatorConfig>>,
    pub(crate) pipeline: PipelineConfig,
    pub(crate) admission: AdmissionSet,
    pub(crate) queue: RequestQueue,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) sink: Arc<dyn DisplaySink>,
}

/// The translation pipeline: classify incoming chat lines, admit each
/// distinct content string once, and let the dispatcher drain the queue
/// through the translator under the call-spacing gate.
///
/// Ingestion adapters call [`submit`](Self::submit) or
/// [`submit_immediate`](Self::submit_immediate) from any task; the same
/// logical line arriving from several adapters is deduplicated by the
/// admission set, never by the adapters themselves.
#[derive(Clone)]
pub struct ChatTranslator {
    shared: Arc<PipelineShared>,
    local_player: Arc<RwLock<Option<String>>>,
}

impl ChatTranslator {
    pub fn new(
        config: Arc<RwLock<TranslatorConfig>>,
        pipeline: PipelineConfig,
        translator: Arc<dyn Translator>,
        sink: Arc<dyn DisplaySink>,
    ) -> Self {
        let queue = RequestQueue::new(Duration::from_millis(pipeline.min_call_interval_ms));
        Self {
            shared: Arc::new(PipelineShared {
                config,
                pipeline,
                admission: AdmissionSet::new(),
                queue,
                translator,
                sink,
            }),
            local_player: Arc::new(RwLock::new(None)),
        }
    }

    /// Display name of the local participant; their own messages are never
    /// translated.
    pub async fn set_local_player(&self, name: Option<String>) {
        *self.local_player.write().await = name;
    }

    /// Feeds one raw chat line through the delayed delivery path.
    pub async fn submit(&self, line: &str) {
        self.ingest(line, false).await;
    }

    /// Feeds one raw chat line through the low-latency delivery path.
    pub async fn submit_immediate(&self, line: &str) {
        self.ingest(line, true).await;
    }

    async fn ingest(&self, line: &str, immediate: bool) {
        if !self.shared.config.read().await.enabled {
            return;
        }

        let local_player = self.local_player.read().await.clone();
        let utterance = match classify(line, local_player.as_deref()) {
            Classification::Ignore => {
                debug!(line = %line, "line ignored by classifier");
                return;
            }
            Classification::Utterance(utterance) => utterance,
        };

        if let Some(sender) = &utterance.sender {
            self.shared
                .admission
                .record_sender(&utterance.content, sender)
                .await;
        }

        if self.shared.admission.try_admit(&utterance.content).await {
            info!(
                sender = utterance.sender.as_deref().unwrap_or("?"),
                content = %utterance.content,
                immediate,
                "queueing translation"
            );
            self.shared
                .queue
                .enqueue(TranslationRequest::new(utterance.content, immediate));
        } else {
            debug!(content = %utterance.content, "translation already pending");
        }
    }

    /// Starts the consumer loop. Call once; the task runs until aborted.
    pub fn spawn_dispatcher(&self) -> JoinHandle<()> {
        let dispatcher = Dispatcher::new(self.shared.clone());
        tokio::spawn(dispatcher.run())
    }

    #[cfg(test)]
    pub(crate) fn shared(&self) -> &Arc<PipelineShared> {
        &self.shared
    }
}
