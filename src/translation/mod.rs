pub mod client;

pub use client::HttpTranslator;

use crate::utils::Result;
use async_trait::async_trait;

/// The outbound translation collaborator. Implementations own their timeout
/// and any provider-side pacing; the dispatcher treats the call as a black
/// box that eventually yields a result.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String>;
}

/// Message the provider embeds when the free-tier request rate is exceeded.
const PROVIDER_THROTTLE_MARKER: &str = "免费用户接口访问频率";

/// Generic failure marker some provider responses carry in-band.
const GENERIC_FAILURE_MARKER: &str = "something went wrong";

/// Detects a provider-side rate-limit rejection from a response payload or
/// provider error message. String matching is brittle but is all the
/// provider offers; keeping it behind this one predicate lets a structured
/// error code replace it later.
pub fn is_throttle_signature(payload: &str) -> bool {
    payload.contains(PROVIDER_THROTTLE_MARKER) || payload.contains(GENERIC_FAILURE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_provider_throttle_message() {
        assert!(is_throttle_signature("免费用户接口访问频率超限，请稍后再试"));
        assert!(is_throttle_signature("something went wrong: 503"));
        assert!(!is_throttle_signature("hola"));
        assert!(!is_throttle_signature("你好"));
    }
}
