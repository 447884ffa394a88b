use anyhow::Result;
use clap::Parser;
use engine::{extract_keywords, render, search, Bm25Params, Index, RenderMode};
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "BM25 search over a local pattern/task corpus", long_about = None)]
struct Cli {
    /// Search query
    query: String,
    /// Corpus root containing patterns/ and tasks/ subtrees
    #[arg(long, default_value = "./data")]
    data_dir: String,
    /// Number of results to return
    #[arg(long, default_value_t = 5)]
    top: usize,
    /// Output machine-readable JSON instead of the report
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Print the keywords extracted from the query
    #[arg(long, default_value_t = false)]
    show_keywords: bool,
    /// BM25 term-frequency saturation
    #[arg(long, default_value_t = 1.5)]
    k1: f64,
    /// BM25 length-normalization strength
    #[arg(long, default_value_t = 0.75)]
    b: f64,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    let start = Instant::now();
    let index = Index::build(&args.data_dir)?;
    tracing::info!(
        num_docs = index.document_count,
        num_terms = index.document_frequency.len(),
        took_ms = start.elapsed().as_millis() as u64,
        "corpus indexed"
    );

    if args.show_keywords {
        println!("Extracted keywords: {:?}\n", extract_keywords(&args.query));
    }

    let params = Bm25Params { k1: args.k1, b: args.b };
    let results = search(&index, &args.query, args.top, &params);

    let mode = if args.json {
        RenderMode::Structured
    } else {
        RenderMode::Human
    };
    println!("{}", render(&results, &args.query, mode));
    Ok(())
}
