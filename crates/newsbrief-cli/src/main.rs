use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use newsbrief_core::{
    AppConfig, ContentExtractor, EntityExtractor, NewsSource, SentimentClassifier,
    SpeechSynthesizer, Summarizer,
};
use newsbrief_newsapi::NewsApiClient;
use newsbrief_nlp::{GoogleTtsClient, HfInferenceClient};
use newsbrief_report::{Collaborators, ReportPipeline};
use newsbrief_scraper::ArticleScraper;

/// NewsAPI calls get a generous timeout independent of per-article scraping.
const NEWSAPI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "newsbrief")]
#[command(about = "Company news sentiment reports with spoken summaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a sentiment report and narration audio for one company.
    Report {
        /// Company name to search news coverage for.
        company: String,
        /// Pretty-print the report JSON.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse before touching configuration so `--help` and usage errors work
    // in an unconfigured environment.
    let cli = Cli::parse();
    match cli.command {
        Commands::Report { company, pretty } => run_report(&company, pretty).await,
    }
}

async fn run_report(company: &str, pretty: bool) -> anyhow::Result<()> {
    let config = newsbrief_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let pipeline = build_pipeline(&config)?;

    let generated = pipeline.generate_report(company).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&generated.report)?
    } else {
        serde_json::to_string(&generated.report)?
    };
    println!("{json}");

    match generated.audio {
        Some(path) => eprintln!("audio written to {}", path.display()),
        None => eprintln!("no audio produced"),
    }

    Ok(())
}

/// Wire the HTTP-backed collaborators into a pipeline.
fn build_pipeline(config: &AppConfig) -> anyhow::Result<ReportPipeline> {
    let news: Arc<dyn NewsSource> = Arc::new(NewsApiClient::with_base_url(
        &config.newsapi_key,
        NEWSAPI_TIMEOUT_SECS,
        &config.user_agent,
        &config.newsapi_base_url,
    )?);
    let extractor: Arc<dyn ContentExtractor> = Arc::new(ArticleScraper::new(
        config.scrape_timeout_secs,
        &config.user_agent,
    )?);

    // One HF client backs all three NLP capabilities.
    let hf = Arc::new(HfInferenceClient::with_base_url(
        config.hf_api_token.as_deref(),
        config.nlp_timeout_secs,
        &config.hf_base_url,
    )?);
    let classifier: Arc<dyn SentimentClassifier> = hf.clone();
    let summarizer: Arc<dyn Summarizer> = hf.clone();
    let entities: Arc<dyn EntityExtractor> = hf;

    let synthesizer: Arc<dyn SpeechSynthesizer> = Arc::new(GoogleTtsClient::with_base_url(
        &config.audio_dir,
        config.nlp_timeout_secs,
        &config.tts_base_url,
    )?);

    Ok(ReportPipeline::new(
        Collaborators {
            news,
            extractor,
            classifier,
            summarizer,
            entities,
            synthesizer,
        },
        config.narration_language.clone(),
    )
    .with_concurrency(config.max_concurrent_enrichments))
}
