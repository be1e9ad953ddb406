//! Core domain types for chunking.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ChunkError;

/// Fallback level that produced a recursive chunk.
///
/// The recursive chunker descends paragraph -> sentence -> fixed when a unit
/// is too large to pack as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    Paragraph,
    Sentence,
    Fixed,
}

impl ChunkStrategy {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
            Self::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChunkStrategy {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paragraph" => Ok(Self::Paragraph),
            "sentence" => Ok(Self::Sentence),
            "fixed" => Ok(Self::Fixed),
            other => Err(ChunkError::invalid_argument(format!(
                "unknown chunk strategy: {}",
                other
            ))),
        }
    }
}

/// A chunk of text produced by one of the chunking strategies.
///
/// Fixed-size windows carry `start`/`end`; recursive chunks carry a
/// `strategy`. Fixed-size pieces emitted by the recursive fallback carry
/// both, with offsets relative to the sentence they were cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text content, trimmed and never empty.
    pub text: String,

    /// Window start in the source, in characters (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,

    /// Window end in the source, in characters (exclusive, untrimmed and
    /// uncapped, so it may run past the end of the text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,

    /// Fallback level that produced the chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ChunkStrategy>,
}

impl Chunk {
    /// Create a fixed-size window chunk.
    pub fn fixed(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start: Some(start),
            end: Some(end),
            strategy: None,
        }
    }

    /// Create a chunk tagged with the recursive fallback level.
    pub fn recursive(text: impl Into<String>, strategy: ChunkStrategy) -> Self {
        Self {
            text: text.into(),
            start: None,
            end: None,
            strategy: Some(strategy),
        }
    }

    /// Tag an existing chunk with a strategy, keeping its offsets.
    pub fn with_strategy(mut self, strategy: ChunkStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Length of the chunk text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
