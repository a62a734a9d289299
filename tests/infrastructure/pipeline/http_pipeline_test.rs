use docrag_api::application::ports::{PipelineError, PipelineFactory};
use docrag_api::domain::{ModelSelection, PipelineConfig, TopK};
use docrag_api::infrastructure::pipeline::HttpPipelineFactory;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(collection: &str) -> PipelineConfig {
    PipelineConfig::new("./.chroma", collection, &ModelSelection::default())
}

fn settings_json(collection: &str) -> serde_json::Value {
    json!({
        "persist_path": "./.chroma",
        "collection": collection,
        "embed_model": "nomic-embed-text",
        "llm_model": "llama3.2:1b",
    })
}

#[test]
fn given_invalid_url_when_creating_factory_then_fails() {
    let result = HttpPipelineFactory::new("not a url");
    assert!(matches!(result, Err(PipelineError::Construction(_))));
}

#[test]
fn given_url_with_trailing_slash_when_creating_factory_then_it_is_trimmed() {
    let factory = HttpPipelineFactory::new("http://localhost:8001/").unwrap();
    assert_eq!(factory.base_url(), "http://localhost:8001");
}

#[tokio::test]
async fn given_source_when_ingesting_then_posts_settings_and_returns_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(body_json(json!({
            "settings": settings_json("papers"),
            "source": "https://arxiv.org/pdf/2508.20755",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"chunks": 17})))
        .expect(1)
        .mount(&server)
        .await;

    let factory = HttpPipelineFactory::new(&server.uri()).unwrap();
    let pipeline = factory.create(config("papers")).unwrap();

    let chunks = pipeline
        .ingest("https://arxiv.org/pdf/2508.20755")
        .await
        .unwrap();

    assert_eq!(chunks, 17);
}

#[tokio::test]
async fn given_question_when_asking_then_returns_whole_body_as_answer() {
    let server = MockServer::start().await;
    let answer = json!({
        "answer": "The paper proposes a retrieval benchmark.",
        "citations": [{"source": "2508.20755", "page": 2}],
    });
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({
            "settings": settings_json("demo"),
            "question": "Summarize",
            "top_k": 5,
            "require_citations": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let factory = HttpPipelineFactory::new(&server.uri()).unwrap();
    let pipeline = factory.create(config("demo")).unwrap();

    let result = pipeline
        .ask("Summarize", TopK::default(), false)
        .await
        .unwrap();

    assert_eq!(result.into_value(), answer);
}

#[tokio::test]
async fn given_pipeline_error_status_when_ingesting_then_returns_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(500).set_body_string("unsupported format"))
        .mount(&server)
        .await;

    let factory = HttpPipelineFactory::new(&server.uri()).unwrap();
    let pipeline = factory.create(config("demo")).unwrap();

    match pipeline.ingest("file.xyz").await {
        Err(PipelineError::Upstream { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "unsupported format");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn given_ingest_response_without_chunks_when_ingesting_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let factory = HttpPipelineFactory::new(&server.uri()).unwrap();
    let pipeline = factory.create(config("demo")).unwrap();

    let result = pipeline.ingest("doc.txt").await;

    assert!(matches!(result, Err(PipelineError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_unreachable_service_when_asking_then_returns_unreachable() {
    let factory = HttpPipelineFactory::new("http://127.0.0.1:1").unwrap();
    let pipeline = factory.create(config("demo")).unwrap();

    let result = pipeline.ask("Summarize", TopK::default(), false).await;

    assert!(matches!(result, Err(PipelineError::Unreachable(_))));
}
