use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub content: String,
    /// `true` requests the low-latency delivery path (no artificial delay
    /// after translation). Affects downstream handling only, never queue
    /// position.
    pub immediate: bool,
    /// Throttle re-queues this request has been through.
    pub attempts: u32,
}

impl TranslationRequest {
    pub fn new(content: impl Into<String>, immediate: bool) -> Self {
        Self {
            content: content.into(),
            immediate,
            attempts: 0,
        }
    }

    /// The request as it goes back on the queue after a provider throttle:
    /// delayed path, one more attempt on the clock.
    pub fn requeued(self) -> Self {
        Self {
            content: self.content,
            immediate: false,
            attempts: self.attempts + 1,
        }
    }
}

/// FIFO queue of pending translations plus the spacing gate for call starts.
/// `last_call` is stamped when a request is handed out, before the call
/// completes: the gate bounds how often calls *start*, not how many are in
/// flight.
pub struct RequestQueue {
    min_interval: Duration,
    inner: Mutex<QueueInner>,
}

struct QueueInner {
    queue: VecDeque<TranslationRequest>,
    last_call: Option<Instant>,
}

impl RequestQueue {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            inner: Mutex::new(QueueInner {
                queue: VecDeque::new(),
                last_call: None,
            }),
        }
    }

    /// Unbounded append; never blocks, never fails.
    pub fn enqueue(&self, request: TranslationRequest) {
        let mut inner = self.inner.lock().unwrap();
        inner.queue.push_back(request);
    }

    /// Returns the next request when one is queued and at least
    /// `min_interval` has passed since the previous successful dequeue.
    pub fn try_dequeue(&self, now: Instant) -> Option<TranslationRequest> {
        let mut inner = self.inner.lock().unwrap();
        if inner.queue.is_empty() {
            return None;
        }
        if let Some(last) = inner.last_call {
            if now.duration_since(last) < self.min_interval {
                return None;
            }
        }
        let request = inner.queue.pop_front()?;
        inner.last_call = Some(now);
        Some(request)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
