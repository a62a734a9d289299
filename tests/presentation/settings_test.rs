use docrag_api::presentation::{Environment, Settings};

fn settings(vars: &[(&str, &str)]) -> Settings {
    Settings::from_sources(None, |key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    })
    .unwrap()
}

#[test]
fn given_no_environment_when_loading_then_uses_defaults() {
    let settings = settings(&[]);

    assert_eq!(settings.environment, Environment::Local);
    assert_eq!(settings.models.llm_model, "llama3.2:1b");
    assert_eq!(settings.models.embed_model, "nomic-embed-text");
    assert_eq!(settings.ollama.host, "127.0.0.1:11434");
    assert_eq!(settings.pipeline.url, "http://127.0.0.1:8001");
    assert_eq!(settings.bind_address(), "0.0.0.0:8000");
    assert!(!settings.scaffold.enabled);
    assert!(!settings.logging.is_json());
}

#[test]
fn given_model_variables_when_loading_then_overrides_models() {
    let settings = settings(&[
        ("DOCRAG_LLM", "qwen2.5:3b"),
        ("DOCRAG_EMBED", "mxbai-embed-large"),
        ("OLLAMA_HOST", "0.0.0.0:11434"),
    ]);

    assert_eq!(settings.models.llm_model, "qwen2.5:3b");
    assert_eq!(settings.models.embed_model, "mxbai-embed-large");
    assert_eq!(settings.ollama.host, "0.0.0.0:11434");
}

#[test]
fn given_blank_variable_when_loading_then_default_is_kept() {
    let settings = settings(&[("DOCRAG_LLM", "  ")]);
    assert_eq!(settings.models.llm_model, "llama3.2:1b");
}

#[test]
fn given_log_level_variable_when_loading_then_replaces_default_filter() {
    assert_eq!(
        settings(&[]).logging.level,
        "info,docrag_api=debug,tower_http=debug"
    );

    let settings = settings(&[("LOG_LEVEL", "warn,docrag_api=info")]);
    assert_eq!(settings.logging.level, "warn,docrag_api=info");
}

#[test]
fn given_server_and_scaffold_variables_when_loading_then_parses_types() {
    let settings = settings(&[
        ("SERVER_PORT", "9000"),
        ("SERVER_HOST", "127.0.0.1"),
        ("SCAFFOLD_MODE", "1"),
        ("MOCK_RESPONSE_DELAY", "250"),
        ("APP_ENV", "prod"),
        ("LOG_FORMAT", "json"),
    ]);

    assert_eq!(settings.bind_address(), "127.0.0.1:9000");
    assert!(settings.scaffold.enabled);
    assert_eq!(settings.scaffold.mock_response_delay_ms, 250);
    assert_eq!(settings.environment, Environment::Prod);
    assert!(settings.logging.is_json());
}

#[test]
fn given_invalid_port_when_loading_then_fails() {
    let result = Settings::from_sources(None, |key| {
        (key == "SERVER_PORT").then(|| "not-a-port".to_string())
    });
    assert!(result.is_err());
}

#[test]
fn given_invalid_environment_when_loading_then_fails() {
    let result = Settings::from_sources(None, |key| (key == "APP_ENV").then(|| "staging".to_string()));
    assert!(result.is_err());
}
