//! Fixed-size text chunker.
//!
//! Slides a window of `chunk_size` characters across the text, backing up by
//! `overlap` characters between windows.

use ragchunk_core::{
    ensure_positive, Chunk, Chunker, FixedSizeConfig, Result, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP,
};
use tracing::{debug, trace};

/// Fixed-size chunker with overlap.
///
/// Each window covers `[start, start + chunk_size)` characters of the input.
/// Windows that are only whitespace are dropped; the others are trimmed.
/// Offsets describe the untrimmed window, so `end` may run past the text on
/// the final window.
///
/// An `overlap` that is not smaller than `chunk_size` is ignored and the
/// cursor advances by the full window, which keeps the loop moving forward.
#[derive(Debug, Clone)]
pub struct FixedSizeChunker {
    chunk_size: usize,
    overlap: usize,
}

impl FixedSizeChunker {
    /// Create a new fixed-size chunker.
    ///
    /// Fails with `InvalidArgument` when `chunk_size` is zero.
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        ensure_positive("chunk_size", chunk_size)?;
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create a chunker from its configuration section.
    pub fn from_config(config: &FixedSizeConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.overlap)
    }

    /// Window width in characters.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Configured overlap in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance the cursor advances between windows.
    pub fn step(&self) -> usize {
        if self.overlap < self.chunk_size {
            self.chunk_size - self.overlap
        } else {
            self.chunk_size
        }
    }
}

impl Default for FixedSizeChunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl Chunker for FixedSizeChunker {
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>> {
        // Byte offset of every char, plus the end of the string, so windows
        // measured in chars can be sliced without splitting a code point.
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let len = offsets.len() - 1;
        let step = self.step();

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < len {
            let end = start.saturating_add(self.chunk_size);
            let window = &text[offsets[start]..offsets[end.min(len)]];
            let trimmed = window.trim();

            if trimmed.is_empty() {
                trace!(start, end, "dropping whitespace-only window");
            } else {
                chunks.push(Chunk::fixed(trimmed, start, end));
            }

            start = start.saturating_add(step);
        }

        debug!(
            chunker = self.name(),
            chars = len,
            chunk_size = self.chunk_size,
            overlap = self.overlap,
            chunks = chunks.len(),
            "fixed-size chunking complete"
        );

        Ok(chunks)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Split text into fixed-size windows of `chunk_size` characters, each one
/// starting `chunk_size - overlap` characters after the previous.
pub fn chunk_fixed_size(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<Chunk>> {
    FixedSizeChunker::new(chunk_size, overlap)?.chunk(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragchunk_core::ChunkError;

    fn starts(chunks: &[Chunk]) -> Vec<usize> {
        chunks.iter().filter_map(|c| c.start).collect()
    }

    #[test]
    fn test_no_overlap() {
        let chunks = chunk_fixed_size("abcdefghij", 4, 0).unwrap();

        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
        assert_eq!(starts(&chunks), vec![0, 4, 8]);
        // Final window end is not capped to the text length
        assert_eq!(chunks[2].end, Some(12));
    }

    #[test]
    fn test_with_overlap() {
        let chunks = chunk_fixed_size("abcdefghij", 4, 2).unwrap();

        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "cdef", "efgh", "ghij", "ij"]);
        assert_eq!(starts(&chunks), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_overlap_not_smaller_than_size_is_ignored() {
        for overlap in [4, 5, 100] {
            let chunks = chunk_fixed_size("abcdefghij", 4, overlap).unwrap();
            assert_eq!(starts(&chunks), vec![0, 4, 8], "overlap = {}", overlap);
        }
    }

    #[test]
    fn test_empty_text() {
        let chunks = chunk_fixed_size("", 4, 2).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_whitespace_windows_dropped_and_trimmed() {
        let chunks = chunk_fixed_size("ab        cd", 4, 0).unwrap();

        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cd"]);
        assert_eq!(starts(&chunks), vec![0, 8]);
        assert_eq!(chunks[0].end, Some(4));
    }

    #[test]
    fn test_offsets_count_chars_not_bytes() {
        let chunks = chunk_fixed_size("héllo wörld", 5, 0).unwrap();

        let texts: Vec<_> = chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["héllo", "wörl", "d"]);
        assert_eq!(starts(&chunks), vec![0, 5, 10]);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = chunk_fixed_size("abc", 0, 0).unwrap_err();
        assert!(matches!(err, ChunkError::InvalidArgument { .. }));
    }

    #[test]
    fn test_step() {
        assert_eq!(FixedSizeChunker::new(4, 0).unwrap().step(), 4);
        assert_eq!(FixedSizeChunker::new(4, 3).unwrap().step(), 1);
        assert_eq!(FixedSizeChunker::new(4, 4).unwrap().step(), 4);
        assert_eq!(FixedSizeChunker::default().step(), 150);
    }

    #[test]
    fn test_default_matches_config() {
        let from_config = FixedSizeChunker::from_config(&FixedSizeConfig::default()).unwrap();
        let default = FixedSizeChunker::default();
        assert_eq!(default.chunk_size(), from_config.chunk_size());
        assert_eq!(default.overlap(), from_config.overlap());
        assert_eq!(default.name(), "fixed");
    }

    #[test]
    fn test_strategy_not_set() {
        let chunks = chunk_fixed_size("abcdefghij", 4, 0).unwrap();
        assert!(chunks.iter().all(|c| c.strategy.is_none()));
    }
}
