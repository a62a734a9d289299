use std::sync::Arc;

use tokio::net::TcpListener;

use docrag_api::application::services::DocragService;
use docrag_api::infrastructure::llm::{OllamaHost, OllamaModelLister};
use docrag_api::infrastructure::observability::{TracingConfig, init_tracing};
use docrag_api::infrastructure::pipeline::create_pipeline_factory;
use docrag_api::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;

    init_tracing(&TracingConfig::new(settings.environment, &settings.logging));

    let pipeline_factory = create_pipeline_factory(&settings)?;
    let docrag_service = Arc::new(DocragService::new(
        pipeline_factory,
        settings.models.clone(),
    ));

    let ollama_host = OllamaHost::parse(&settings.ollama.host);
    let model_lister = Arc::new(OllamaModelLister::new(ollama_host.clone()));

    let state = AppState::new(docrag_service, model_lister);
    let router = create_router(state);

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(
        address = %addr,
        environment = %settings.environment,
        llm_model = %settings.models.llm_model,
        embed_model = %settings.models.embed_model,
        ollama = %ollama_host,
        "Listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
