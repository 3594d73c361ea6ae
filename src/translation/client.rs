use crate::translation::Translator;
use crate::utils::{ApiConfig, Result, TranslatorError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// HTTP client for the translate endpoint. Enforces the provider's own
/// free-tier spacing between requests, independent of the dispatcher gate.
pub struct HttpTranslator {
    client: Client,
    endpoint: String,
    min_request_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    code: i64,
    data: Option<String>,
    msg: Option<String>,
}

impl HttpTranslator {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(TranslatorError::Transport)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            min_request_interval: Duration::from_millis(config.min_request_interval_ms),
            last_request: Mutex::new(None),
        })
    }
}

fn unwrap_response(response: ApiResponse) -> Result<String> {
    if response.code == 200 {
        response
            .data
            .ok_or_else(|| TranslatorError::MalformedResponse("missing data field".to_string()))
    } else {
        Err(TranslatorError::Provider {
            msg: response
                .msg
                .unwrap_or_else(|| format!("provider code {}", response.code)),
        })
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        // The provider only serves zh-CN as a target; coerce misconfiguration.
        let to = if to == "zh-CN" {
            to
        } else {
            warn!(configured = %to, "target language is not zh-CN, coercing");
            "zh-CN"
        };

        // Requests are serialized; the guard stays held across the call so a
        // slow response still spaces the next request.
        let mut last_request = self.last_request.lock().await;
        if let Some(previous) = *last_request {
            let elapsed = previous.elapsed();
            if elapsed < self.min_request_interval {
                tokio::time::sleep(self.min_request_interval - elapsed).await;
            }
        }

        debug!(text = %text, from = %from, to = %to, "requesting translation");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("text", text), ("from", from), ("to", to)])
            .send()
            .await?
            .error_for_status()?;

        *last_request = Some(Instant::now());
        drop(last_request);

        let body: ApiResponse = response.json().await?;
        let translated = unwrap_response(body)?;
        debug!(text = %text, translated = %translated, "translation result");
        Ok(translated)
    }
}
