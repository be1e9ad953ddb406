//! Core traits defining the chunking interface.

use crate::error::Result;
use crate::types::Chunk;

/// Chunking strategy trait.
///
/// Implementations are stateless apart from their validated parameters, so a
/// single instance can be shared across threads and called concurrently.
pub trait Chunker: Send + Sync {
    /// Chunk text content into pieces, in document order.
    fn chunk(&self, text: &str) -> Result<Vec<Chunk>>;

    /// Short name of the strategy, used in logs.
    fn name(&self) -> &'static str;
}
