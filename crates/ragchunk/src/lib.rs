//! ragchunk - Chunking strategies
//!
//! This crate splits raw text into chunks for embedding and retrieval.
//! Lengths and offsets are counted in characters, not tokens.
//!
//! # Chunkers
//!
//! - [`FixedSizeChunker`]: Slides a fixed-width window across the text with a
//!   configurable overlap.
//!
//! - [`RecursiveChunker`]: Greedily packs paragraphs up to a size limit,
//!   falling back to sentences and then fixed-size windows for units that do
//!   not fit.
//!
//! # Example
//!
//! ```rust
//! use ragchunk::{chunk_fixed_size, chunk_recursive, ChunkStrategy};
//!
//! let chunks = chunk_fixed_size("abcdefghij", 4, 0).unwrap();
//! assert_eq!(chunks[2].text, "ij");
//!
//! let chunks = chunk_recursive("Short para one.\n\nShort para two.", 100).unwrap();
//! assert_eq!(chunks[0].strategy, Some(ChunkStrategy::Paragraph));
//! ```

mod fixed;
mod recursive;

pub use fixed::{chunk_fixed_size, FixedSizeChunker};
pub use recursive::{chunk_recursive, split_paragraphs, split_sentences, RecursiveChunker};

// Re-export types for convenience
pub use ragchunk_core::{
    Chunk, ChunkError, ChunkStrategy, Chunker, ChunkingConfig, Result, DEFAULT_CHUNK_SIZE,
    DEFAULT_MAX_CHUNK_CHARS, DEFAULT_OVERLAP,
};
