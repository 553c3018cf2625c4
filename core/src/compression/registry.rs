//! compression/registry.rs
//! Codec factory: session params in, boxed trait objects out.

use crate::config::SessionParams;
use crate::compression::codecs::{DeflatePipe, InflatePipe};
use crate::compression::types::{CompressionError, Compressor, Decompressor};
use crate::types::StreamFormat;

pub struct CodecInfo {
    pub name: &'static str,
    pub has_header: bool,
    pub has_checksum: bool,
}

pub fn resolve(format: StreamFormat) -> CodecInfo {
    match format {
        StreamFormat::Zlib => CodecInfo { name: "zlib", has_header: true, has_checksum: true },
        StreamFormat::Raw  => CodecInfo { name: "deflate-raw", has_header: false, has_checksum: false },
    }
}

pub fn create_compressor(params: &SessionParams)
    -> Result<Box<dyn Compressor + Send>, CompressionError>
{
    Ok(Box::new(DeflatePipe::with_params(params.clone())?))
}

pub fn create_decompressor(params: &SessionParams)
    -> Result<Box<dyn Decompressor + Send>, CompressionError>
{
    Ok(Box::new(InflatePipe::with_params(params.clone())?))
}
