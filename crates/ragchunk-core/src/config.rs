//! Configuration types for chunking.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ensure_positive, ChunkError, Result};

/// Default fixed-size window width in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Default overlap between consecutive fixed-size windows in characters.
pub const DEFAULT_OVERLAP: usize = 50;

/// Default recursive chunk limit in characters.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 300;

/// Chunking configuration, one section per strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Fixed-size window configuration.
    #[serde(default)]
    pub fixed: FixedSizeConfig,

    /// Recursive chunker configuration.
    #[serde(default)]
    pub recursive: RecursiveConfig,
}

/// Fixed-size window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSizeConfig {
    /// Window width in characters.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters shared between consecutive windows.
    /// Ignored when not smaller than `chunk_size`.
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for FixedSizeConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Recursive chunker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursiveConfig {
    /// Maximum characters per chunk.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

impl Default for RecursiveConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }
}

// Default value functions

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_overlap() -> usize {
    DEFAULT_OVERLAP
}

fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}

impl ChunkingConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ChunkError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from default paths.
    pub fn load_default() -> Result<Self> {
        // Try user config first
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ragchunk").join("config.toml");
            if user_config.exists() {
                return Self::load(&user_config);
            }
        }

        // Try local config
        let local_config = PathBuf::from("ragchunk.toml");
        if local_config.exists() {
            return Self::load(&local_config);
        }

        Ok(Self::default())
    }

    /// Reject zero-sized windows and caps.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("fixed.chunk_size", self.fixed.chunk_size)?;
        ensure_positive("recursive.max_chunk_chars", self.recursive.max_chunk_chars)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ChunkingConfig::default();
        assert_eq!(config.fixed.chunk_size, 200);
        assert_eq!(config.fixed.overlap, 50);
        assert_eq!(config.recursive.max_chunk_chars, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ChunkingConfig::from_toml_str("[fixed]\noverlap = 10\n").unwrap();
        assert_eq!(config.fixed.chunk_size, 200);
        assert_eq!(config.fixed.overlap, 10);
        assert_eq!(config.recursive.max_chunk_chars, 300);

        let empty = ChunkingConfig::from_toml_str("").unwrap();
        assert_eq!(empty, ChunkingConfig::default());

        // Field defaults and section defaults agree
        let sections = ChunkingConfig::from_toml_str("[fixed]\n[recursive]\n").unwrap();
        assert_eq!(sections, ChunkingConfig::default());
        assert_eq!(sections.fixed.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(sections.fixed.overlap, DEFAULT_OVERLAP);
        assert_eq!(sections.recursive.max_chunk_chars, DEFAULT_MAX_CHUNK_CHARS);
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = ChunkingConfig::from_toml_str("[recursive]\nmax_chunk_chars = 0\n").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = ChunkingConfig::from_toml_str("[fixed\nchunk_size = ").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");

        // Negative sizes do not fit a usize.
        let err = ChunkingConfig::from_toml_str("[fixed]\noverlap = -5\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fixed]\nchunk_size = 80\noverlap = 20\n\n[recursive]\nmax_chunk_chars = 100").unwrap();

        let config = ChunkingConfig::load(file.path()).unwrap();
        assert_eq!(config.fixed.chunk_size, 80);
        assert_eq!(config.fixed.overlap, 20);
        assert_eq!(config.recursive.max_chunk_chars, 100);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChunkingConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
