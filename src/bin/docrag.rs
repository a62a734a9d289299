use clap::{Args, Parser, Subcommand};

use docrag_api::application::services::{AskCommand, DocragService, IngestCommand};
use docrag_api::domain::{DEFAULT_COLLECTION, DEFAULT_PERSIST_PATH, TopK};
use docrag_api::infrastructure::observability::{TracingConfig, init_tracing};
use docrag_api::infrastructure::pipeline::create_pipeline_factory;
use docrag_api::presentation::Settings;

#[derive(Parser)]
#[command(name = "docrag", about = "Ingest documents and ask questions through the docrag pipeline")]
struct Cli {
    /// Language model override (defaults to DOCRAG_LLM)
    #[arg(long, global = true)]
    llm: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Target {
    /// Collection to read from or write to
    #[arg(long, default_value = DEFAULT_COLLECTION)]
    collection: String,
    /// Persistence directory of the vector store
    #[arg(long, default_value = DEFAULT_PERSIST_PATH)]
    persist: String,
}

#[derive(Subcommand)]
enum Command {
    /// Ingest a document from a URI or filesystem path
    Ingest {
        source: String,
        #[command(flatten)]
        target: Target,
    },
    /// Ask a question against an ingested collection
    Ask {
        question: String,
        #[command(flatten)]
        target: Target,
        /// Number of chunks to retrieve (1-50)
        #[arg(long, default_value_t = TopK::DEFAULT, value_parser = clap::value_parser!(u32).range(1..=50))]
        top_k: u32,
        /// Require the answer to cite its sources
        #[arg(long)]
        require_citations: bool,
    },
}

impl Cli {
    /// Layers command-line overrides on top of the loaded settings.
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(llm) = &self.llm {
            settings.models.llm_model = llm.clone();
        }
    }
}

fn build_service(settings: &Settings) -> anyhow::Result<DocragService> {
    Ok(DocragService::new(
        create_pipeline_factory(settings)?,
        settings.models.clone(),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    cli.apply_overrides(&mut settings);

    init_tracing(&TracingConfig::new(settings.environment, &settings.logging));

    let service = build_service(&settings)?;

    match cli.command {
        Command::Ingest { source, target } => {
            let chunks = service
                .ingest(&IngestCommand {
                    source,
                    collection: target.collection,
                    persist: target.persist,
                })
                .await?;
            println!("{}", chunks);
        }
        Command::Ask {
            question,
            target,
            top_k,
            require_citations,
        } => {
            let answer = service
                .ask(&AskCommand {
                    question,
                    collection: target.collection,
                    persist: target.persist,
                    top_k: TopK::new(i64::from(top_k))?,
                    require_citations,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(answer.as_value())?);
        }
    }

    Ok(())
}
