//! Recursive text chunker.
//!
//! Packs paragraphs into chunks up to a character limit, falling back to
//! sentence boundaries and then fixed-size windows for units that do not fit.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use ragchunk_core::{
    ensure_positive, Chunk, ChunkStrategy, Chunker, RecursiveConfig, Result,
    DEFAULT_MAX_CHUNK_CHARS,
};

use crate::FixedSizeChunker;

/// Separator placed between packed paragraphs.
const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Characters the separator adds to the running length estimate.
const SEPARATOR_CHARS: usize = 2;

// Sentence terminator followed by whitespace; the split falls right after
// the terminator and the whitespace is dropped.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("Invalid sentence regex pattern"));

/// Recursive chunker that prefers semantic boundaries.
///
/// Tries each level in order until a unit fits within `max_chunk_chars`:
/// 1. Paragraphs (blank-line separated), greedily packed together
/// 2. Sentences of a paragraph that is too large on its own
/// 3. Fixed-size windows of a sentence that is too large on its own
pub struct RecursiveChunker {
    max_chunk_chars: usize,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// Fails with `InvalidArgument` when `max_chunk_chars` is zero.
    pub fn new(max_chunk_chars: usize) -> Result<Self> {
        ensure_positive("max_chunk_chars", max_chunk_chars)?;
        Ok(Self { max_chunk_chars })
    }

    /// Create a chunker from its configuration section.
    pub fn from_config(config: &RecursiveConfig) -> Result<Self> {
        Self::new(config.max_chunk_chars)
    }

    /// Maximum chunk length in characters.
    pub fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    /// Split a paragraph that does not fit on its own into sentences, cutting
    /// oversized sentences into fixed-size windows.
    fn split_oversized(&self, paragraph: &str, chunks: &mut Vec<Chunk>) -> Result<()> {
        let fallback = FixedSizeChunker::new(self.max_chunk_chars, 0)?;

        for sentence in split_sentences(paragraph) {
            let sentence_len = sentence.chars().count();

            if sentence_len > self.max_chunk_chars {
                trace!(sentence_len, "sentence exceeds limit, using fixed-size windows");
                chunks.extend(
                    fallback
                        .chunk(sentence)?
                        .into_iter()
                        .map(|c| c.with_strategy(ChunkStrategy::Fixed)),
                );
            } else {
                chunks.push(Chunk::recursive(sentence, ChunkStrategy::Sentence));
            }
        }

        Ok(())
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        // Sum of paragraph lengths plus a separator allowance for each
        let mut current_len = 0;

        for paragraph in split_paragraphs(text) {
            let paragraph_len = paragraph.chars().count();

            if current_len + paragraph_len + SEPARATOR_CHARS <= self.max_chunk_chars {
                current.push(paragraph);
                current_len += paragraph_len + SEPARATOR_CHARS;
                continue;
            }

            if !current.is_empty() {
                chunks.push(Chunk::recursive(
                    current.join(PARAGRAPH_SEPARATOR),
                    ChunkStrategy::Paragraph,
                ));
            }

            if paragraph_len > self.max_chunk_chars {
                trace!(paragraph_len, "paragraph exceeds limit, splitting by sentence");
                self.split_oversized(paragraph, &mut chunks)?;
                current.clear();
                current_len = 0;
            } else {
                current = vec![paragraph];
                current_len = paragraph_len + SEPARATOR_CHARS;
            }
        }

        if !current.is_empty() {
            chunks.push(Chunk::recursive(
                current.join(PARAGRAPH_SEPARATOR),
                ChunkStrategy::Paragraph,
            ));
        }

        debug!(
            chunker = self.name(),
            max_chunk_chars = self.max_chunk_chars,
            chunks = chunks.len(),
            "recursive chunking complete"
        );

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "recursive"
    }
}

/// Split text by paragraph, then by sentence, then by character, keeping
/// each chunk within `max_chunk_chars` characters.
pub fn chunk_recursive(text: &str, max_chunk_chars: usize) -> Result<Vec<Chunk>> {
    RecursiveChunker::new(max_chunk_chars)?.chunk(text)
}

/// Split text on blank lines, returning trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Split a paragraph after each `.`, `!` or `?` that is followed by
/// whitespace. The whitespace itself belongs to neither sentence.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BOUNDARY.find_iter(paragraph) {
        // Terminators are single-byte ASCII
        let end = m.start() + 1;
        sentences.push(&paragraph[start..end]);
        start = m.end();
    }
    sentences.push(&paragraph[start..]);

    sentences.retain(|s| !s.is_empty());
    sentences
}
