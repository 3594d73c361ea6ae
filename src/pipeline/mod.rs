pub mod admission;
pub mod dispatcher;
pub mod queue;
pub mod service;

pub use admission::AdmissionSet;
pub use queue::{RequestQueue, TranslationRequest};
pub use service::ChatTranslator;
