use serde::Deserialize;

/// Backend-free mode: pipeline calls return canned responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub mock_response_delay_ms: u64,
}
