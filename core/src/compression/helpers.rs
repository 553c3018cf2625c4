//! compression/helpers.rs
//! Whole-buffer compress/decompress.

use tracing::debug;

use crate::config::SessionParams;
use crate::compression::codecs::{DeflatePipe, InflatePipe};
use crate::compression::types::{CompressionError, Decompressor};

/// Compress `data` as a single zlib stream at the default level.
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    compress_data_with(data, &SessionParams::default())
}

pub fn compress_data_with(data: &[u8], params: &SessionParams) -> Result<Vec<u8>, CompressionError> {
    let mut pipe = DeflatePipe::with_params(params.clone())?;
    let out = pipe.pipe(data, true)?;
    debug!(input = data.len(), output = out.len(), "compressed buffer");
    Ok(out)
}

/// Decompress a complete zlib stream.
pub fn decompress_data(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    decompress_data_with(data, &SessionParams::default())
}

pub fn decompress_data_with(data: &[u8], params: &SessionParams) -> Result<Vec<u8>, CompressionError> {
    let mut pipe = InflatePipe::with_params(params.clone())?;
    let out = pipe.pipe(data)?;
    pipe.finish()?;
    debug!(input = data.len(), output = out.len(), "decompressed buffer");
    Ok(out)
}
