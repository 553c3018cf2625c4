//! config.rs
//! Session parameters shared by pipes, helpers and the codec factory.
//!
//! Summary: Plain serde struct with field defaults, so a partial JSON
//! document (or none at all) yields a usable configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{level, DEFAULT_CHUNK_SIZE, DEFAULT_MAX_OUTPUT, MAX_CHUNK_SIZE};
use crate::types::StreamFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session params json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("compression level {0} outside -1..=9")]
    InvalidLevel(i32),

    #[error("chunk size {have} outside 1..={max}")]
    InvalidChunkSize { have: usize, max: usize },

    #[error("max output must be non-zero")]
    ZeroMaxOutput,
}

fn default_level() -> i32 {
    level::Z_DEFAULT_COMPRESSION
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_max_output() -> usize {
    DEFAULT_MAX_OUTPUT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionParams {
    /// `Z_DEFAULT_COMPRESSION` or `0..=9`.
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub format: StreamFormat,
    /// Output growth step per codec call.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Inflate output cap per pipe.
    #[serde(default = "default_max_output")]
    pub max_output: usize,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: StreamFormat::default(),
            chunk_size: default_chunk_size(),
            max_output: default_max_output(),
        }
    }
}

impl SessionParams {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let params: SessionParams = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(level::Z_DEFAULT_COMPRESSION..=level::Z_BEST_COMPRESSION).contains(&self.level) {
            return Err(ConfigError::InvalidLevel(self.level));
        }
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize { have: self.chunk_size, max: MAX_CHUNK_SIZE });
        }
        if self.max_output == 0 {
            return Err(ConfigError::ZeroMaxOutput);
        }
        Ok(())
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn with_format(mut self, format: StreamFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_max_output(mut self, max_output: usize) -> Self {
        self.max_output = max_output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let p = SessionParams::from_json("{}").unwrap();
        assert_eq!(p, SessionParams::default());
        assert_eq!(p.level, -1);
        assert_eq!(p.format, StreamFormat::Zlib);
    }

    #[test]
    fn partial_json_overrides() {
        let p = SessionParams::from_json(r#"{"level": 9, "format": "raw"}"#).unwrap();
        assert_eq!(p.level, 9);
        assert_eq!(p.format, StreamFormat::Raw);
        assert_eq!(p.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            SessionParams::from_json(r#"{"level": 12}"#),
            Err(ConfigError::InvalidLevel(12))
        ));
        assert!(matches!(
            SessionParams::from_json(r#"{"chunk_size": 0}"#),
            Err(ConfigError::InvalidChunkSize { .. })
        ));
        assert!(matches!(
            SessionParams::from_json(r#"{"max_output": 0}"#),
            Err(ConfigError::ZeroMaxOutput)
        ));
        assert!(matches!(
            SessionParams::from_json(r#"{"bogus": 1}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn json_roundtrip_is_stable() {
        let p = SessionParams::default().with_level(3).with_format(StreamFormat::Raw);
        let back = SessionParams::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(p, back);
    }
}
