use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::{Environment, ScaffoldConfig};
use crate::domain::{DEFAULT_EMBED_MODEL, DEFAULT_LLM_MODEL, ModelSelection};
use crate::infrastructure::llm::DEFAULT_OLLAMA_HOST;

pub const CONFIG_FILE: &str = "docrag";
pub const DEFAULT_PIPELINE_URL: &str = "http://127.0.0.1:8001";
pub const DEFAULT_LOG_FILTER: &str = "info,docrag_api=debug,tower_http=debug";

/// Environment variables and the settings keys they override.
const ENV_OVERRIDES: [(&str, &str); 11] = [
    ("APP_ENV", "environment"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("DOCRAG_LLM", "models.llm_model"),
    ("DOCRAG_EMBED", "models.embed_model"),
    ("OLLAMA_HOST", "ollama.host"),
    ("DOCRAG_PIPELINE_URL", "pipeline.url"),
    ("SCAFFOLD_MODE", "scaffold.enabled"),
    ("MOCK_RESPONSE_DELAY", "scaffold.mock_response_delay_ms"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub models: ModelSelection,
    pub ollama: OllamaSettings,
    pub pipeline: PipelineSettings,
    pub scaffold: ScaffoldConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl LoggingSettings {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            format: "text".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings once at start-up: defaults, then `docrag.toml` if it
    /// exists, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(Some(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(config_file: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("environment", Environment::default().as_str())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("models.llm_model", DEFAULT_LLM_MODEL)?
            .set_default("models.embed_model", DEFAULT_EMBED_MODEL)?
            .set_default("ollama.host", DEFAULT_OLLAMA_HOST)?
            .set_default("pipeline.url", DEFAULT_PIPELINE_URL)?
            .set_default("scaffold.enabled", false)?
            .set_default("scaffold.mock_response_delay_ms", 0)?
            .set_default("logging.level", DEFAULT_LOG_FILTER)?
            .set_default("logging.format", "text")?;

        if let Some(name) = config_file {
            builder = builder.add_source(File::with_name(name).required(false));
        }

        for (var, key) in ENV_OVERRIDES {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
