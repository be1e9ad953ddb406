//! ragchunk demo - Prints both chunking strategies applied to a sample text.

use tracing::warn;
use tracing_subscriber::EnvFilter;

use ragchunk::{chunk_fixed_size, chunk_recursive, Chunker, FixedSizeChunker, RecursiveChunker};
use ragchunk_core::ChunkingConfig;

const SAMPLE: &str = "RAG Tutorial 02. Chunking matters. \
If chunks are too big, the LLM gets noise. If too small, context is lost.\n\n\
Fixed-size chunking is simple. Recursive chunking respects paragraphs and sentences.";

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Use the loaded config, or the defaults if it could not be read.
fn config_or_default(loaded: ragchunk_core::Result<ChunkingConfig>) -> ChunkingConfig {
    loaded.unwrap_or_else(|e| {
        warn!(code = e.error_code(), "{}; using default chunking config", e);
        ChunkingConfig::default()
    })
}

/// First `n` characters of `text`.
fn preview(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    println!("Fixed-size (size=80, overlap=20):");
    for (i, chunk) in chunk_fixed_size(SAMPLE, 80, 20)?.iter().enumerate() {
        println!("  [{}] {:?}...", i, preview(&chunk.text, 60));
    }

    println!("\nRecursive (max_chunk_chars=100):");
    for (i, chunk) in chunk_recursive(SAMPLE, 100)?.iter().enumerate() {
        let strategy = chunk.strategy.map(|s| s.as_str()).unwrap_or("?");
        println!("  [{}] [{}] {:?}...", i, strategy, preview(&chunk.text, 50));
    }

    let config = config_or_default(ChunkingConfig::load_default());
    tracing::debug!(?config, "loaded chunking config");

    let chunkers: [Box<dyn Chunker>; 2] = [
        Box::new(FixedSizeChunker::from_config(&config.fixed)?),
        Box::new(RecursiveChunker::from_config(&config.recursive)?),
    ];
    for chunker in &chunkers {
        println!("\n{} (configured defaults):", chunker.name());
        println!("{}", serde_json::to_string_pretty(&chunker.chunk(SAMPLE)?)?);
    }

    Ok(())
}
