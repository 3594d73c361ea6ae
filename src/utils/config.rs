use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub translation: TranslatorConfig,
    pub pipeline: PipelineConfig,
    pub api: ApiConfig,
}

/// User-facing translation settings. The pipeline reads these as a
/// capability; only an external command surface mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    pub enabled: bool,
    pub source_language: String,
    pub target_language: String,
    pub show_original: bool,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// How often the dispatcher polls the queue. Bounds scheduling latency
    /// only; must stay small relative to `min_call_interval_ms`.
    pub tick_interval_ms: u64,
    /// Minimum spacing between successive translation call starts.
    pub min_call_interval_ms: u64,
    /// Throttle re-queues allowed before a request is abandoned.
    pub max_requeue_attempts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    /// Provider-side spacing (free-tier limit), enforced inside the HTTP
    /// client independently of the dispatcher gate.
    pub min_request_interval_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            source_language: "auto".to_string(),
            target_language: "zh-CN".to_string(),
            show_original: true,
            delay_ms: 0,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            min_call_interval_ms: 1300,
            max_requeue_attempts: 5,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.appworlds.cn".to_string(),
            timeout_seconds: 5,
            min_request_interval_ms: 2000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translation: TranslatorConfig::default(),
            pipeline: PipelineConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::TranslatorError::Config(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::TranslatorError::Config(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
