//! compression/types.rs
//! Error type and the chunked compressor/decompressor traits.
use thiserror::Error;

use crate::config::ConfigError;
use crate::types::StreamMode;
use crate::utils::status_label;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("{mode} init failed: {}", status_label(.status))]
    InitFailed { mode: StreamMode, status: i32 },

    #[error("{mode} failed: {}: {msg}", status_label(.status))]
    ProcessFailed { mode: StreamMode, status: i32, msg: String },

    #[error("compressed stream ended early after {consumed} input bytes")]
    TruncatedStream { consumed: u64 },

    #[error("inflated output {have} exceeds limit {max}")]
    OutputLimitExceeded { have: usize, max: usize },

    #[error(transparent)]
    InvalidParams(#[from] ConfigError),

    #[error("compression state error: {0}")]
    StateError(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompressionError {
    /// Raw zlib status behind this error, when there is one.
    pub fn status(&self) -> Option<i32> {
        match self {
            CompressionError::InitFailed { status, .. }
            | CompressionError::ProcessFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Require Send so trait objects can cross thread boundaries.
pub trait Compressor: Send {
    /// Compress a single chunk into out buffer.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// Flush any pending state and end the stream.
    fn finish(&mut self, out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress a single chunk into out buffer.
    fn decompress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
    /// True once the end of the compressed stream has been seen.
    fn is_finished(&self) -> bool;
    /// Confirm the stream ended; input that stopped short is an error.
    fn finish(&mut self) -> Result<(), CompressionError>;
}
