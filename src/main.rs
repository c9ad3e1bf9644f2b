use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;

use pdf_assistant::application::services::{AssistantService, DocumentService};
use pdf_assistant::infrastructure::llm::LlmClientFactory;
use pdf_assistant::infrastructure::observability::{TracingConfig, init_tracing};
use pdf_assistant::infrastructure::storage::LocalPdfDirectory;
use pdf_assistant::infrastructure::text_processing::PdfAdapter;
use pdf_assistant::presentation::config::application_base_dir;
use pdf_assistant::presentation::{ApiToken, Environment, Repl, Settings};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(TracingConfig::from_settings(&settings.logging, environment));

    let api_token = ApiToken::from_env()?;
    let llm_client = LlmClientFactory::create(&settings.llm, &api_token)?;

    let base_dir = application_base_dir().context("failed to locate the executable")?;
    let documents_dir = settings.documents.resolve_directory(&base_dir);
    let store = Arc::new(LocalPdfDirectory::new(&documents_dir).with_context(|| {
        format!(
            "failed to prepare documents directory {}",
            documents_dir.display()
        )
    })?);
    tracing::info!(directory = %store.root().display(), "Documents directory ready");

    let documents = DocumentService::new(store, Arc::new(PdfAdapter::new()));
    let assistant = AssistantService::new(llm_client);

    let mut repl = Repl::new(
        documents,
        assistant,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    repl.run().await?;

    Ok(())
}
