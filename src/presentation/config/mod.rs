mod environment;
mod scaffold_config;
mod settings;

pub use environment::Environment;
pub use scaffold_config::ScaffoldConfig;
pub use settings::{
    CONFIG_FILE, DEFAULT_LOG_FILTER, DEFAULT_PIPELINE_URL, LoggingSettings, OllamaSettings,
    PipelineSettings, ServerSettings, Settings,
};
