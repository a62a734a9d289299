mod ollama_host;
mod ollama_model_lister;

pub use ollama_host::{DEFAULT_OLLAMA_HOST, OllamaHost};
pub use ollama_model_lister::OllamaModelLister;
