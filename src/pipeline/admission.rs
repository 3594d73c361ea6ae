use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Tracks which content strings have a translation queued or in flight,
/// together with the sender each one is attributed to. Both live behind one
/// lock so admit/resolve/release are single-acquisition atomic; this set is
/// the sole deduplication authority for overlapping ingestion sources.
#[derive(Debug, Clone, Default)]
pub struct AdmissionSet {
    inner: Arc<RwLock<AdmissionInner>>,
}

#[derive(Debug, Default)]
struct AdmissionInner {
    pending: HashSet<String>,
    senders: HashMap<String, String>,
}

impl AdmissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically checks absence and inserts. Returns `false` when a
    /// translation for this content is already pending; the caller must not
    /// enqueue in that case.
    pub async fn try_admit(&self, content: &str) -> bool {
        let mut inner = self.inner.write().await;
        inner.pending.insert(content.to_string())
    }

    /// Upsert. When two senders produce byte-identical content concurrently
    /// the most recent one wins; attribution imprecision, not a correctness
    /// bug.
    pub async fn record_sender(&self, content: &str, sender: &str) {
        let mut inner = self.inner.write().await;
        inner.senders.insert(content.to_string(), sender.to_string());
    }

    /// Removes the content from both the pending set and the sender index,
    /// returning the sender if one was recorded. Called exactly once per
    /// delivered result.
    pub async fn resolve(&self, content: &str) -> Option<String> {
        let mut inner = self.inner.write().await;
        inner.pending.remove(content);
        inner.senders.remove(content)
    }

    /// Drops all tracking for a content string. Terminal non-delivery
    /// outcomes go through here so future identical content is not
    /// suppressed forever.
    pub async fn release(&self, content: &str) {
        let mut inner = self.inner.write().await;
        inner.pending.remove(content);
        inner.senders.remove(content);
    }

    pub async fn is_pending(&self, content: &str) -> bool {
        self.inner.read().await.pending.contains(content)
    }

    pub async fn pending_count(&self) -> usize {
        self.inner.read().await.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn admit_rejects_duplicates() {
        let admission = AdmissionSet::new();
        assert!(admission.try_admit("hola").await);
        assert!(!admission.try_admit("hola").await);
        assert!(admission.try_admit("bonjour").await);
    }

    #[tokio::test]
    async fn resolve_consumes_sender_once() {
        let admission = AdmissionSet::new();
        admission.try_admit("hi").await;
        admission.record_sender("hi", "Eve").await;

        assert_eq!(admission.resolve("hi").await.as_deref(), Some("Eve"));
        assert_eq!(admission.resolve("hi").await, None);
        assert!(!admission.is_pending("hi").await);
    }

    #[tokio::test]
    async fn latest_sender_wins_for_identical_content() {
        let admission = AdmissionSet::new();
        admission.try_admit("hi").await;
        admission.record_sender("hi", "Eve").await;
        admission.record_sender("hi", "Mallory").await;

        assert_eq!(admission.resolve("hi").await.as_deref(), Some("Mallory"));
    }

    #[tokio::test]
    async fn release_clears_both_structures() {
        let admission = AdmissionSet::new();
        admission.try_admit("hi").await;
        admission.record_sender("hi", "Eve").await;

        admission.release("hi").await;
        assert!(!admission.is_pending("hi").await);
        assert_eq!(admission.resolve("hi").await, None);
        // Released content can be admitted again.
        assert!(admission.try_admit("hi").await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_admissions_accept_exactly_one() {
        let admission = AdmissionSet::new();
        let mut handles = Vec::new();
        for _ in 0..32 {
            let admission = admission.clone();
            handles.push(tokio::spawn(
                async move { admission.try_admit("same line").await },
            ));
        }

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
        assert_eq!(admission.pending_count().await, 1);
    }
}
