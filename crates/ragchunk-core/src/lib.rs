//! ragchunk-core - Core types and traits for text chunking
//!
//! This crate provides the chunk record, the strategy tags, the error type,
//! the [`Chunker`] trait and the chunking configuration shared by the
//! `ragchunk` strategies.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{ensure_positive, ChunkError, Result};
pub use traits::*;
pub use types::*;
