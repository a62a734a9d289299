use std::sync::Arc;

use docrag_api::application::services::{AskCommand, DocragError, DocragService, IngestCommand};
use docrag_api::domain::TopK;

use crate::helpers::{
    PipelineCall, RecordingPipelineFactory, TEST_CHUNKS, TEST_LLM_MODEL, test_models,
};

fn ask_command(collection: &str) -> AskCommand {
    AskCommand {
        question: "Summarize".to_string(),
        collection: collection.to_string(),
        persist: "./.chroma".to_string(),
        top_k: TopK::new(3).unwrap(),
        require_citations: true,
    }
}

#[test]
fn given_service_when_building_pipeline_config_then_combines_request_and_models() {
    let service = DocragService::new(Arc::new(RecordingPipelineFactory::default()), test_models());

    let config = service.pipeline_config("/data/chroma", "papers");

    assert_eq!(config.persist_path, "/data/chroma");
    assert_eq!(config.collection, "papers");
    assert_eq!(config.llm_model, TEST_LLM_MODEL);
}

#[tokio::test]
async fn given_two_calls_when_ingesting_then_each_builds_its_own_pipeline() {
    let factory = Arc::new(RecordingPipelineFactory::default());
    let service = DocragService::new(factory.clone(), test_models());

    for collection in ["first", "second"] {
        let chunks = service
            .ingest(&IngestCommand {
                source: "doc.txt".to_string(),
                collection: collection.to_string(),
                persist: "./.chroma".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(chunks, TEST_CHUNKS);
    }

    let created = factory.created();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].collection, "first");
    assert_eq!(created[1].collection, "second");
}

#[tokio::test]
async fn given_ask_command_when_asking_then_forwards_all_arguments() {
    let factory = Arc::new(RecordingPipelineFactory::default());
    let service = DocragService::new(factory.clone(), test_models());

    let answer = service.ask(&ask_command("demo")).await.unwrap();

    assert_eq!(answer.as_value()["collection"], "demo");
    assert_eq!(
        factory.calls(),
        vec![PipelineCall::Ask {
            config: service.pipeline_config("./.chroma", "demo"),
            question: "Summarize".to_string(),
            top_k: 3,
            require_citations: true,
        }]
    );
}

#[tokio::test]
async fn given_failing_pipeline_when_asking_then_returns_answering_error() {
    let service = DocragService::new(Arc::new(RecordingPipelineFactory::failing()), test_models());

    let result = service.ask(&ask_command("demo")).await;

    assert!(matches!(result, Err(DocragError::Answering(_))));
}

#[tokio::test]
async fn given_failing_pipeline_when_ingesting_then_returns_ingestion_error() {
    let service = DocragService::new(Arc::new(RecordingPipelineFactory::failing()), test_models());

    let result = service
        .ingest(&IngestCommand {
            source: "https://unreachable.invalid/doc.pdf".to_string(),
            collection: "demo".to_string(),
            persist: "./.chroma".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DocragError::Ingestion(_))));
}
