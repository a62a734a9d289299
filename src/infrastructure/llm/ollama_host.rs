use std::fmt;

pub const DEFAULT_OLLAMA_HOST: &str = "127.0.0.1:11434";
const DEFAULT_HTTP_PORT: u16 = 11434;
const DEFAULT_HTTPS_PORT: u16 = 443;
const DEFAULT_ADDRESS: &str = "127.0.0.1";

/// Base URL of an Ollama daemon, resolved from an `OLLAMA_HOST` style value.
///
/// Accepts bare `host`, `host:port`, or full URLs. A missing scheme defaults
/// to `http`, a missing port to 11434 (443 for `https`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OllamaHost(String);

impl OllamaHost {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let raw = if raw.is_empty() { DEFAULT_OLLAMA_HOST } else { raw };

        let (scheme, rest) = match raw.split_once("://") {
            Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
            None => ("http".to_string(), raw),
        };

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], rest[idx..].trim_end_matches('/')),
            None => (rest, ""),
        };

        let authority = if authority.is_empty() || authority.starts_with(':') {
            format!("{}{}", DEFAULT_ADDRESS, authority)
        } else {
            authority.to_string()
        };

        let has_port = match authority.rfind(']') {
            Some(end) => authority[end..].contains(':'),
            None => authority.contains(':'),
        };

        let base = if has_port {
            format!("{}://{}{}", scheme, authority, path)
        } else {
            let port = if scheme == "https" {
                DEFAULT_HTTPS_PORT
            } else {
                DEFAULT_HTTP_PORT
            };
            format!("{}://{}:{}{}", scheme, authority, port, path)
        };

        Self(base)
    }

    pub fn base_url(&self) -> &str {
        &self.0
    }
}

impl Default for OllamaHost {
    fn default() -> Self {
        Self::parse(DEFAULT_OLLAMA_HOST)
    }
}

impl fmt::Display for OllamaHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
