pub mod classifier;
pub mod display;
pub mod pipeline;
pub mod translation;
pub mod utils;

pub use classifier::{classify, Classification, PlayerUtterance};
pub use display::{DisplaySink, StdoutSink};
pub use pipeline::{ChatTranslator, TranslationRequest};
pub use translation::{HttpTranslator, Translator};
pub use utils::{AppConfig, Result, TranslatorConfig, TranslatorError};
