pub mod config;
pub mod errors;

pub use config::{ApiConfig, AppConfig, PipelineConfig, TranslatorConfig};
pub use errors::{Result, TranslatorError};
