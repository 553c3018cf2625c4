// compression/stream.rs
//! compression/stream.rs
//! Streaming helpers that respect chunk_size discipline.
use std::io::Read;

use crate::constants::MAX_CHUNK_SIZE;
use crate::compression::types::{CompressionError, Compressor, Decompressor};

fn check_chunk_size(chunk_size: usize) -> Result<(), CompressionError> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(CompressionError::StateError(format!(
            "chunk size {} outside 1..={}",
            chunk_size, MAX_CHUNK_SIZE
        )));
    }
    Ok(())
}

#[inline]
/// Summary: Compress data read from R in chunk_size blocks, yielding compressed chunks.
/// - Respects MAX_CHUNK_SIZE sanity.
/// - Calls compressor.finish() after EOF to flush pending state.
/// - Empty outputs are skipped; the iterator ends after the first error.
pub fn compress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut compressor: Box<dyn Compressor>,
) -> impl Iterator<Item = Result<Vec<u8>, CompressionError>> {
    let mut pending_err = check_chunk_size(chunk_size).err();
    let mut buf = vec![0u8; chunk_size.min(MAX_CHUNK_SIZE)];
    let mut done = false;

    std::iter::from_fn(move || {
        if let Some(e) = pending_err.take() {
            done = true;
            return Some(Err(e));
        }
        while !done {
            match r.read(&mut buf) {
                Ok(0) => {
                    // Flush and end stream (once).
                    done = true;
                    let mut out = Vec::new();
                    return match compressor.finish(&mut out) {
                        Err(e) => Some(Err(e)),
                        Ok(()) if out.is_empty() => None,
                        Ok(()) => Some(Ok(out)),
                    };
                }
                Ok(n) => {
                    let mut out = Vec::new();
                    if let Err(e) = compressor.compress_chunk(&buf[..n], &mut out) {
                        done = true;
                        return Some(Err(e));
                    }
                    if !out.is_empty() {
                        return Some(Ok(out));
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    done = true;
                    return Some(Err(CompressionError::Io(e)));
                }
            }
        }
        None
    })
}

#[inline]
/// Summary: Decompress data read from R in chunk_size blocks, yielding decompressed chunks.
/// - Respects MAX_CHUNK_SIZE sanity.
/// - At EOF, a stream that never reached its end yields `TruncatedStream`.
pub fn decompress_stream<R: Read>(
    mut r: R,
    chunk_size: usize,
    mut decompressor: Box<dyn Decompressor>,
) -> impl Iterator<Item = Result<Vec<u8>, CompressionError>> {
    let mut pending_err = check_chunk_size(chunk_size).err();
    let mut buf = vec![0u8; chunk_size.min(MAX_CHUNK_SIZE)];
    let mut done = false;

    std::iter::from_fn(move || {
        if let Some(e) = pending_err.take() {
            done = true;
            return Some(Err(e));
        }
        while !done {
            match r.read(&mut buf) {
                Ok(0) => {
                    done = true;
                    return decompressor.finish().err().map(Err);
                }
                Ok(n) => {
                    let mut out = Vec::new();
                    if let Err(e) = decompressor.decompress_chunk(&buf[..n], &mut out) {
                        done = true;
                        return Some(Err(e));
                    }
                    if !out.is_empty() {
                        return Some(Ok(out));
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    done = true;
                    return Some(Err(CompressionError::Io(e)));
                }
            }
        }
        None
    })
}
