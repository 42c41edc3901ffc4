//! Marketpick command-line entrypoint: replays a recorded session and prints the report.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use mimalloc::MiMalloc;

use marketpick::config::Config;
use marketpick::embedding::{CachedEmbedder, Embedder, MiniLmEmbedder};
use marketpick::pipeline::{RecommendationPipeline, RecordedSession, Recommender};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Rank marketplace listings from a recorded session against its shopping request.
#[derive(Debug, Parser)]
#[command(name = "marketpick", version, about)]
struct Args {
    /// Session JSON with `request`, `search`, `listings` and `evaluation`.
    #[arg(long)]
    session: PathBuf,

    /// Recommendations to return (overrides MARKETPICK_TOP_K).
    #[arg(long)]
    top_k: Option<usize>,

    /// Shopping request to rank against (defaults to the session's own).
    #[arg(long)]
    request: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::from_env()?;
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    config.validate()?;

    let minilm = MiniLmEmbedder::load(config.embedder_config())?;
    let embedder: Arc<dyn Embedder> = if config.embedding_cache_capacity > 0 {
        Arc::new(CachedEmbedder::new(minilm, config.embedding_cache_capacity))
    } else {
        Arc::new(minilm)
    };

    let session = Arc::new(RecordedSession::from_path(&args.session)?);
    let request = args.request.unwrap_or_else(|| session.request.clone());

    tracing::info!(
        session = %args.session.display(),
        top_k = config.top_k,
        max_candidates = config.max_candidates,
        cache_capacity = config.embedding_cache_capacity,
        "Marketpick starting"
    );

    let recommender = Recommender::new(embedder).with_top_k(config.top_k);
    let pipeline = RecommendationPipeline::new(
        Arc::clone(&session),
        Arc::clone(&session),
        Arc::clone(&session),
        recommender,
    )
    .with_search_base_url(config.search_base_url.clone())
    .with_max_candidates(config.max_candidates);

    let report = pipeline.run(&request)?;
    println!("{}", report.to_json_pretty()?);

    Ok(())
}
