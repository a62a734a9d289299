use std::time::Duration;

use docrag_api::application::ports::PipelineFactory;
use docrag_api::domain::{ModelSelection, PipelineConfig, TopK};
use docrag_api::infrastructure::pipeline::ScaffoldPipelineFactory;

fn scaffold_factory() -> ScaffoldPipelineFactory {
    ScaffoldPipelineFactory::new(Duration::ZERO)
}

#[tokio::test]
async fn given_scaffold_pipeline_when_ingesting_then_reports_no_chunks() {
    let pipeline = scaffold_factory()
        .create(PipelineConfig::new("./.chroma", "demo", &ModelSelection::default()))
        .unwrap();

    assert_eq!(pipeline.ingest("doc.txt").await.unwrap(), 0);
}

#[tokio::test]
async fn given_scaffold_pipeline_when_asking_then_echoes_question_and_settings() {
    let pipeline = scaffold_factory()
        .create(PipelineConfig::new("./.chroma", "notes", &ModelSelection::default()))
        .unwrap();

    let answer = pipeline
        .ask("Test Connection", TopK::new(8).unwrap(), true)
        .await
        .unwrap();
    let value = answer.as_value();

    assert!(value["answer"].as_str().unwrap().contains("Test Connection"));
    assert_eq!(value["collection"], "notes");
    assert_eq!(value["top_k"], 8);
    assert_eq!(value["require_citations"], true);
}
